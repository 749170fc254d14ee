//! Problem instance: the immutable input of every solve call.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::{Location, DEPOT};

/// A capacitated vehicle routing instance.
///
/// Holds the depot, the customer registry, and the per-route capacity.
/// Construction validates the registry, so solvers can assume a
/// well-formed input and never need an error path.
///
/// # Examples
///
/// ```
/// use cvrp_heuristics::models::{Instance, Location};
///
/// let instance = Instance::new(
///     Location::depot(0.0, 0.0),
///     vec![Location::new(1, 3.0, 4.0, 10)],
///     50,
/// )
/// .expect("valid instance");
/// assert_eq!(instance.num_customers(), 1);
/// assert_eq!(instance.demand_of(1), 10);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Instance {
    depot: Location,
    customers: Vec<Location>,
    capacity: i32,
    #[serde(skip)]
    index_of: HashMap<usize, usize>,
}

impl Instance {
    /// Creates a validated instance.
    ///
    /// Returns `None` if the depot id is not 0, the capacity is not
    /// positive, any coordinate is non-finite, or any customer has id 0,
    /// a duplicate id, or a non-positive demand.
    pub fn new(depot: Location, customers: Vec<Location>, capacity: i32) -> Option<Self> {
        if depot.id() != DEPOT || capacity <= 0 {
            return None;
        }
        if !depot.x().is_finite() || !depot.y().is_finite() {
            return None;
        }
        let index_of = Self::index_customers(&customers)?;
        Some(Self {
            depot,
            customers,
            capacity,
            index_of,
        })
    }

    fn index_customers(customers: &[Location]) -> Option<HashMap<usize, usize>> {
        let mut index_of = HashMap::with_capacity(customers.len());
        for (i, c) in customers.iter().enumerate() {
            if c.id() == DEPOT || c.demand() <= 0 {
                return None;
            }
            if !c.x().is_finite() || !c.y().is_finite() {
                return None;
            }
            if index_of.insert(c.id(), i).is_some() {
                return None;
            }
        }
        Some(index_of)
    }

    /// The depot location.
    pub fn depot(&self) -> &Location {
        &self.depot
    }

    /// The customer registry, in enumeration order.
    pub fn customers(&self) -> &[Location] {
        &self.customers
    }

    /// Number of customers.
    pub fn num_customers(&self) -> usize {
        self.customers.len()
    }

    /// Per-route capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Looks up a location by id (depot included).
    pub fn location_of(&self, id: usize) -> Option<&Location> {
        if id == DEPOT {
            return Some(&self.depot);
        }
        self.index_of.get(&id).map(|&i| &self.customers[i])
    }

    /// Demand of a customer, 0 for the depot or an unknown id.
    pub fn demand_of(&self, id: usize) -> i32 {
        self.location_of(id).map_or(0, Location::demand)
    }

    /// Replaces the capacity. Returns `false` (leaving the instance
    /// unchanged) if the new capacity is not positive.
    pub fn set_capacity(&mut self, capacity: i32) -> bool {
        if capacity <= 0 {
            return false;
        }
        self.capacity = capacity;
        true
    }

    /// Replaces the customer registry. Returns `false` (leaving the
    /// instance unchanged) if the new registry fails validation.
    pub fn set_customers(&mut self, customers: Vec<Location>) -> bool {
        match Self::index_customers(&customers) {
            Some(index_of) => {
                self.customers = customers;
                self.index_of = index_of;
                true
            }
            None => false,
        }
    }

    /// A hash of the exact (customer set, capacity) pair.
    ///
    /// Two instances share a fingerprint only if their customer
    /// registries match element for element and their capacities agree;
    /// memoized solutions are keyed by this value.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.capacity.hash(&mut hasher);
        self.customers.len().hash(&mut hasher);
        for c in &self.customers {
            c.id().hash(&mut hasher);
            c.x().to_bits().hash(&mut hasher);
            c.y().to_bits().hash(&mut hasher);
            c.demand().hash(&mut hasher);
        }
        hasher.finish()
    }
}
