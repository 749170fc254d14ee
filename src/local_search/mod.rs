//! Local search operators for improving route sets.
//!
//! - [`two_opt_improve`] — Intra-route 2-opt edge reversal
//! - [`balance_improve`] — Inter-route load-balancing relocation
//! - [`swap_improve`] — Inter-route pairwise customer exchange
//!
//! All three operators mutate in place, accept the first improving move
//! found and restart their scan (first-improvement strategy), and stop
//! after a bounded number of scans or passes. Every move pre-checks the
//! capacity constraint before committing, so a route set that enters
//! feasible leaves feasible.

mod balance;
mod swap;
mod two_opt;

pub use balance::balance_improve;
pub use swap::swap_improve;
pub use two_opt::two_opt_improve;
