//! Randomized minimum cut via Karger's contraction algorithm.
//!
//! [`karger`] runs a single Monte-Carlo trial with a caller-supplied
//! generator; [`karger_best_of`] repeats seeded trials and keeps the
//! lightest cut.

mod karger;

pub use karger::{karger, karger_best_of};
