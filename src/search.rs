//! Depth-first backtracking search driver (sequential and parallel).
//!
//! Each surviving certificate seeds one independent run that extends the
//! coloring digit by digit, backtracking on dead ends and tracking the
//! longest AP-free coloring reached. Runs share nothing and reduce to a
//! maximum, so the parallel strategy fans one rayon task out per certificate
//! and joins on the reduction; a panicking task propagates to the join and
//! aborts the whole computation rather than silently shrinking the maximum.

use crate::apcheck::{max_difference, ApChecker};
use crate::certify::generate_certificates;
use crate::coloring::{Coloring, MAX_COLOR_COUNT};
use crate::normalize::retain_canonical;
use log::{debug, info};
use rayon::prelude::*;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

// ============================================================================
// Configuration
// ============================================================================

/// How the per-certificate runs are scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// One run after another on the calling thread.
    Sequential,
    /// One rayon task per certificate, joined by a maximum reduction.
    #[default]
    Parallel,
}

/// Search configuration with public fields; start from `Default` and
/// override what the case at hand needs.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Number of colors k in W(k, l). At least 2, at most 36.
    pub color_count: usize,
    /// Arithmetic-progression length l in W(k, l). At least 2.
    pub sequence_length: usize,
    /// Length of the certificates seeding the search; defaults to
    /// `sequence_length + 1` when `None` or zero.
    pub initial_digit_count: Option<usize>,
    /// Soft depth cap checked at the top of every run iteration. A run that
    /// reaches it stops and marks the whole outcome truncated. Zero (like
    /// `None`) disables the cap.
    pub abort_digit_count: Option<usize>,
    /// Whether to drop symmetric duplicate certificates before searching.
    pub use_normalization: bool,
    /// Scheduling of the per-certificate runs.
    pub strategy: Strategy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            color_count: 2,
            sequence_length: 3,
            initial_digit_count: None,
            abort_digit_count: None,
            use_normalization: true,
            strategy: Strategy::Parallel,
        }
    }
}

impl SearchConfig {
    /// The effective certificate length; a zero override falls back to the
    /// default just like an absent one.
    pub fn initial_digit_count(&self) -> usize {
        self.initial_digit_count
            .filter(|&count| count > 0)
            .unwrap_or(self.sequence_length + 1)
    }

    /// The effective depth cap; zero disables it.
    pub fn abort_digit_count(&self) -> Option<usize> {
        self.abort_digit_count.filter(|&cap| cap > 0)
    }

    /// Rejects invalid parameters before any search work starts.
    ///
    /// # Errors
    /// See [`ConfigError`] for the individual conditions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.color_count < 2 {
            return Err(ConfigError::ColorCountTooSmall(self.color_count));
        }
        if self.color_count > MAX_COLOR_COUNT {
            return Err(ConfigError::TooManyColors(self.color_count));
        }
        if self.sequence_length < 2 {
            return Err(ConfigError::SequenceLengthTooSmall(self.sequence_length));
        }
        Ok(())
    }
}

/// A configuration rejected before the search begins.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Fewer than two colors admit no nontrivial coloring.
    #[error("color count must be at least 2 (got {0})")]
    ColorCountTooSmall(usize),
    /// A progression needs at least two positions.
    #[error("sequence length must be at least 2 (got {0})")]
    SequenceLengthTooSmall(usize),
    /// Colorings render one character per digit over `0-9` / `A-Z`.
    #[error("color count {0} exceeds the renderable alphabet of 36 symbols")]
    TooManyColors(usize),
}

// ============================================================================
// Outcome
// ============================================================================

/// The result of a completed search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every run exhausted its subtree: `W(color_count, sequence_length)`
    /// equals this value.
    Exact(usize),
    /// No AP-free coloring of the initial length exists at all, so the number
    /// is at most `initial` (and the search had nothing to extend).
    InitialExhausted {
        /// The certificate length that admitted no AP-free coloring.
        initial: usize,
    },
    /// At least one run hit the depth cap, so only a lower bound is known:
    /// the number exceeds `best`.
    Truncated {
        /// The configured depth cap that stopped the search.
        cap: usize,
        /// Longest AP-free coloring observed before stopping.
        best: usize,
    },
}

/// Everything a caller learns from one search.
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// The bound (or the reason no bound was computed).
    pub outcome: Outcome,
    /// Certificates generated at the initial length.
    pub certificate_count: usize,
    /// Certificates actually searched after normalization.
    pub searched_certificates: usize,
    /// A longest AP-free coloring found, when any run extended at all.
    pub best_coloring: Option<Coloring>,
    /// Wall-clock time for the whole generate → normalize → search pipeline.
    pub elapsed: Duration,
}

/// What one per-certificate run reports back.
#[derive(Clone, Debug)]
struct RunResult {
    /// Longest AP-free coloring reached by this run (0 if no extension ever
    /// succeeded).
    best_depth: usize,
    /// Whether the depth cap stopped this run.
    truncated: bool,
    /// Snapshot of the coloring at the best depth.
    best_coloring: Option<Coloring>,
    /// Accepted frontier extensions, for telemetry.
    extensions: u64,
}

// ============================================================================
// Engine
// ============================================================================

/// Owns a validated configuration and drives the full search lifecycle.
pub struct SearchEngine {
    cfg: SearchConfig,
}

impl SearchEngine {
    /// Validates the configuration and builds an engine.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] the configuration violates.
    pub fn new(cfg: SearchConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// The configuration this engine runs with.
    pub fn config(&self) -> &SearchConfig {
        &self.cfg
    }

    /// Runs generate → normalize → search and reports the outcome.
    pub fn run(&self) -> SearchReport {
        let start = Instant::now();
        let initial = self.cfg.initial_digit_count();
        let color_count = self.cfg.color_count as u8;

        let certificates = generate_certificates(color_count, self.cfg.sequence_length, initial);
        let certificate_count = certificates.len();
        info!("{self}: {certificate_count} certificates of length {initial}");

        if certificates.is_empty() {
            return SearchReport {
                outcome: Outcome::InitialExhausted { initial },
                certificate_count,
                searched_certificates: 0,
                best_coloring: None,
                elapsed: start.elapsed(),
            };
        }

        let searched = if self.cfg.use_normalization {
            let kept = retain_canonical(certificates, initial);
            info!("{self}: normalized to {} certificates", kept.len());
            kept
        } else {
            certificates
        };
        // Normalization always keeps a representative per symmetry class, so
        // a nonempty certificate list cannot normalize to nothing.
        debug_assert!(!searched.is_empty(), "normalization dropped every certificate");

        let results: Vec<RunResult> = match self.cfg.strategy {
            Strategy::Sequential => searched
                .iter()
                .enumerate()
                .map(|(index, certificate)| self.run_certificate(certificate, index, start))
                .collect(),
            Strategy::Parallel => searched
                .par_iter()
                .enumerate()
                .map(|(index, certificate)| self.run_certificate(certificate, index, start))
                .collect(),
        };

        for (index, result) in results.iter().enumerate() {
            debug!(
                "    run {index}: best depth {}, {} extensions{}",
                result.best_depth,
                result.extensions,
                if result.truncated { ", truncated" } else { "" }
            );
        }

        let best_depth = results.iter().map(|r| r.best_depth).max().unwrap_or(0);
        let truncated = results.iter().any(|r| r.truncated);
        let best_coloring = results
            .into_iter()
            .filter_map(|r| r.best_coloring)
            .max_by_key(Coloring::digit_count);

        let outcome = match (truncated, self.cfg.abort_digit_count()) {
            (true, Some(cap)) => Outcome::Truncated {
                cap,
                best: best_depth,
            },
            _ => Outcome::Exact(best_depth + 1),
        };

        SearchReport {
            outcome,
            certificate_count,
            searched_certificates: searched.len(),
            best_coloring,
            elapsed: start.elapsed(),
        }
    }

    /// Extends one certificate to exhaustion (or the depth cap).
    ///
    /// The frontier digit resumes from its current value rather than zero, so
    /// re-entering after a backtrack continues where the run left off. A new
    /// frontier digit always starts at zero because growing the coloring
    /// zero-fills it.
    fn run_certificate(&self, certificate: &Coloring, index: usize, start: Instant) -> RunResult {
        let checker = ApChecker::new(self.cfg.sequence_length);
        let color_count = certificate.color_count();
        let initial = self.cfg.initial_digit_count();

        let mut coloring = certificate.clone();
        let mut digit_count = initial + 1;
        coloring.resize(digit_count);

        let mut best_depth = 0usize;
        let mut best_coloring = None;
        let mut extensions = 0u64;

        loop {
            if let Some(cap) = self.cfg.abort_digit_count() {
                if digit_count >= cap {
                    return RunResult {
                        best_depth,
                        truncated: true,
                        best_coloring,
                        extensions,
                    };
                }
            }

            let maxd = max_difference(digit_count, self.cfg.sequence_length);
            let mut extended = false;
            for value in coloring.last()..color_count {
                coloring.set_last(value);
                if checker.check_frontier(&coloring, maxd).is_none() {
                    extended = true;
                    break;
                }
            }

            if extended {
                extensions += 1;
                if digit_count > best_depth {
                    best_depth = digit_count;
                    best_coloring = Some(coloring.clone());
                    info!(
                        "    {self} > {digit_count} in {} [{index}]",
                        format_duration(start.elapsed().as_secs())
                    );
                }
                digit_count += 1;
                coloring.resize(digit_count);
            } else {
                // All colors at the frontier produce a progression: shrink
                // until a digit with an untried value appears, or the run's
                // whole subtree is exhausted.
                loop {
                    digit_count -= 1;
                    if digit_count == initial {
                        return RunResult {
                            best_depth,
                            truncated: false,
                            best_coloring,
                            extensions,
                        };
                    }
                    coloring.resize(digit_count);
                    let value = coloring.last();
                    if value + 1 < color_count {
                        coloring.set_last(value + 1);
                        break;
                    }
                }
            }
        }
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W({},{})", self.cfg.color_count, self.cfg.sequence_length)
    }
}

// ============================================================================
// Duration formatting
// ============================================================================

/// Formats a duration as `<h>h <m>m <s>s`, eliding leading zero units;
/// seconds always appear.
pub fn format_duration(total_seconds: u64) -> String {
    let seconds = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;
    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h "));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m "));
    }
    out.push_str(&format!("{seconds}s"));
    out
}

// ============================================================================
// Tests
// ============================================================================
