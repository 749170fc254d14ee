//! Pairwise distance computation over location ids.

mod oracle;

pub use oracle::DistanceOracle;
