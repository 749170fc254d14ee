//! Euclidean distance oracle.

use std::collections::HashMap;

use crate::models::{Instance, Location};

/// Computes Euclidean distances between location ids of one instance.
///
/// The oracle snapshots the registry's coordinates at construction and
/// answers `get(a, b)` on demand. An id the registry does not contain is
/// unreachable: its distance to anything is `f64::INFINITY`, which makes
/// every merge, relocation, or swap touching it non-improving instead of
/// an error.
///
/// # Examples
///
/// ```
/// use cvrp_heuristics::distance::DistanceOracle;
/// use cvrp_heuristics::models::{Instance, Location};
///
/// let instance = Instance::new(
///     Location::depot(0.0, 0.0),
///     vec![Location::new(1, 3.0, 4.0, 10)],
///     50,
/// )
/// .expect("valid instance");
/// let oracle = DistanceOracle::from_instance(&instance);
///
/// assert!((oracle.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!(oracle.get(0, 42).is_infinite());
/// ```
#[derive(Debug, Clone)]
pub struct DistanceOracle {
    locations: HashMap<usize, Location>,
}

impl DistanceOracle {
    /// Builds an oracle over an instance's depot and customers.
    pub fn from_instance(instance: &Instance) -> Self {
        let mut locations = HashMap::with_capacity(instance.num_customers() + 1);
        locations.insert(instance.depot().id(), instance.depot().clone());
        for c in instance.customers() {
            locations.insert(c.id(), c.clone());
        }
        Self { locations }
    }

    /// Number of known locations, depot included.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if the oracle knows no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Euclidean distance between two location ids.
    ///
    /// `f64::INFINITY` if either id is unknown.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        match (self.locations.get(&from), self.locations.get(&to)) {
            (Some(a), Some(b)) => a.distance_to(b),
            _ => f64::INFINITY,
        }
    }
}
