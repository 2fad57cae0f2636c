use vdw::search::{format_duration, Outcome, SearchConfig, SearchEngine, Strategy};

fn main() {
    env_logger::init();

    let mut cfg = SearchConfig::default();
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--case" => {
                let k = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                let l = args.get(i + 2).unwrap_or_else(|| usage_and_exit(2));
                cfg.color_count = k.parse().unwrap_or_else(|_| usage_and_exit(2));
                cfg.sequence_length = l.parse().unwrap_or_else(|_| usage_and_exit(2));
                i += 3;
            }
            "--initial" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.initial_digit_count = Some(v.parse().unwrap_or_else(|_| usage_and_exit(2)));
                i += 2;
            }
            "--abort" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.abort_digit_count = Some(v.parse().unwrap_or_else(|_| usage_and_exit(2)));
                i += 2;
            }
            "--no-normalize" => {
                cfg.use_normalization = false;
                i += 1;
            }
            "--sequential" => {
                cfg.strategy = Strategy::Sequential;
                i += 1;
            }
            "--help" | "-h" => usage_and_exit(0),
            _ => usage_and_exit(2),
        }
    }

    let engine = match SearchEngine::new(cfg) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    println!("Computing {engine}");
    let report = engine.run();
    let elapsed = format_duration(report.elapsed.as_secs());
    match report.outcome {
        Outcome::Exact(bound) => {
            println!("\nCalculated {engine} = {bound} in {elapsed}");
            if let Some(best) = report.best_coloring {
                println!("Longest AP-free coloring: {best}");
            }
        }
        Outcome::InitialExhausted { initial } => {
            println!(
                "\nNo AP-free coloring of length {initial} exists; {engine} <= {initial} ({elapsed})"
            );
        }
        Outcome::Truncated { cap, best } => {
            println!("\nSearch stopped at the depth cap {cap} after {elapsed}; {engine} > {best}");
        }
    }
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  vdw [--case K L] [--initial N] [--abort N] [--no-normalize] [--sequential]\n\nOptions:\n  --case K L       Compute W(K, L) (default: 2 3)\n  --initial N      Certificate length to seed the search (default: L + 1)\n  --abort N        Stop any run that reaches depth N and report a truncated result\n  --no-normalize   Search every certificate, skipping symmetry deduplication\n  --sequential     Run certificates one after another instead of in parallel\n\nSet RUST_LOG=info to see record depths as they are found.\n"
    );
    std::process::exit(code)
}
