//! # Van der Waerden number search
//!
//! An exhaustive backtracking engine for computing (or bounding) Van der
//! Waerden numbers `W(k, l)`: the smallest `N` such that every coloring of
//! `{0, .., N-1}` with `k` colors contains a monochromatic arithmetic
//! progression of `l` positions. No closed form is known, so the engine
//! searches colorings directly:
//!
//! 1. enumerate every AP-free coloring of a short initial length (the
//!    "certificates"), pruning doomed prefixes in bulk;
//! 2. discard certificates that are symmetric duplicates of others;
//! 3. extend each survivor depth-first, one digit at a time, backtracking on
//!    dead ends, either sequentially or with one task per certificate;
//! 4. the answer is the longest AP-free coloring reachable anywhere, plus one.
//!
//! ## Quick Start
//!
//! ```
//! use vdw::search::{Outcome, SearchConfig, SearchEngine};
//!
//! let cfg = SearchConfig {
//!     color_count: 2,
//!     sequence_length: 3,
//!     ..SearchConfig::default()
//! };
//! let engine = SearchEngine::new(cfg).unwrap();
//! assert_eq!(engine.run().outcome, Outcome::Exact(9));
//! ```
//!
//! ## Bounded runs
//!
//! Hard cases can be capped with `abort_digit_count`; a capped search reports
//! [`Outcome::Truncated`](search::Outcome::Truncated) instead of pretending
//! to a final bound.
//!
//! ```
//! use vdw::search::{Outcome, SearchConfig, SearchEngine};
//!
//! let cfg = SearchConfig {
//!     color_count: 2,
//!     sequence_length: 5,
//!     abort_digit_count: Some(25),
//!     ..SearchConfig::default()
//! };
//! let report = SearchEngine::new(cfg).unwrap().run();
//! assert!(matches!(report.outcome, Outcome::Truncated { cap: 25, .. }));
//! ```
//!
//! ## Modules
//!
//! - [`coloring`]: the k-ary digit encoding of a coloring.
//! - [`digits`]: slice helpers for the normalization comparison.
//! - [`apcheck`]: monochromatic arithmetic-progression detection.
//! - [`certify`]: exhaustive AP-free enumeration of the initial length.
//! - [`normalize`]: symmetry-based certificate deduplication.
//! - [`search`]: the backtracking driver, configuration and outcomes.
//!
//! Progress is reported through the [`log`] facade; install a logger (the
//! bundled binary uses `env_logger`) to see record depths as they are found.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_possible_truncation)]

pub mod apcheck;
pub mod certify;
pub mod coloring;
pub mod digits;
pub mod normalize;
pub mod search;
