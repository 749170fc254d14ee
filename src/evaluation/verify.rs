//! Route set verification.

use std::collections::HashMap;

use crate::models::{Instance, RouteSet, DEPOT};

/// A type of constraint violation in a route set.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Route load exceeds the instance capacity.
    CapacityExceeded {
        /// Route index in the set.
        route_index: usize,
        /// Load that exceeded capacity.
        load: i32,
        /// Instance capacity.
        capacity: i32,
    },
    /// Route does not start and end at the depot, or the depot appears
    /// in its interior.
    MalformedRoute {
        /// Route index in the set.
        route_index: usize,
    },
    /// Route visits an id the registry does not contain.
    UnknownCustomer {
        /// Route index in the set.
        route_index: usize,
        /// The unknown id.
        customer_id: usize,
    },
    /// Customer appears in more than one position across the set.
    DuplicateCustomer {
        /// The duplicated customer id.
        customer_id: usize,
    },
    /// Registry customer absent from every route.
    MissingCustomer {
        /// The missing customer id.
        customer_id: usize,
    },
}

/// A constraint violation found by [`verify`].
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Checks a route set against the structural invariants: depot-anchored
/// routes, every registry customer served exactly once, and no route
/// over capacity.
///
/// Returns an empty list for a valid solution. Solvers in this crate
/// always produce valid solutions; `verify` exists for diagnostics and
/// for callers assembling route sets by hand.
///
/// # Examples
///
/// ```
/// use cvrp_heuristics::evaluation::verify;
/// use cvrp_heuristics::models::{Instance, Location, Route, RouteSet};
///
/// let instance = Instance::new(
///     Location::depot(0.0, 0.0),
///     vec![Location::new(1, 1.0, 0.0, 10)],
///     50,
/// )
/// .expect("valid instance");
///
/// let mut routes = RouteSet::new();
/// routes.push(Route::single(1));
/// assert!(verify(&routes, &instance).is_empty());
///
/// assert_eq!(verify(&RouteSet::new(), &instance).len(), 1); // customer 1 missing
/// ```
pub fn verify(routes: &RouteSet, instance: &Instance) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen: HashMap<usize, usize> = HashMap::new();

    for (idx, route) in routes.routes().iter().enumerate() {
        let stops = route.stops();
        let well_formed = stops.len() >= 2
            && stops[0] == DEPOT
            && stops[stops.len() - 1] == DEPOT
            && !route.customer_ids().contains(&DEPOT);
        if !well_formed {
            violations.push(Violation::new(ViolationType::MalformedRoute {
                route_index: idx,
            }));
        }

        let mut load = 0;
        for &id in route.customer_ids() {
            if id == DEPOT {
                continue;
            }
            match instance.location_of(id) {
                Some(loc) => load += loc.demand(),
                None => violations.push(Violation::new(ViolationType::UnknownCustomer {
                    route_index: idx,
                    customer_id: id,
                })),
            }
            *seen.entry(id).or_insert(0) += 1;
        }

        if load > instance.capacity() {
            violations.push(Violation::new(ViolationType::CapacityExceeded {
                route_index: idx,
                load,
                capacity: instance.capacity(),
            }));
        }
    }

    for (&id, &count) in &seen {
        if count > 1 {
            violations.push(Violation::new(ViolationType::DuplicateCustomer {
                customer_id: id,
            }));
        }
    }
    for c in instance.customers() {
        if !seen.contains_key(&c.id()) {
            violations.push(Violation::new(ViolationType::MissingCustomer {
                customer_id: c.id(),
            }));
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, Route};

    fn instance() -> Instance {
        Instance::new(
            Location::depot(0.0, 0.0),
            vec![
                Location::new(1, 1.0, 0.0, 10),
                Location::new(2, 2.0, 0.0, 15),
            ],
            30,
        )
        .expect("valid")
    }

    fn set(routes: Vec<Vec<usize>>) -> RouteSet {
        let mut rs = RouteSet::new();
        for stops in routes {
            rs.push(Route::from_stops(stops).expect("valid"));
        }
        rs
    }

    #[test]
    fn test_verify_clean_solution() {
        let violations = verify(&set(vec![vec![0, 1, 0], vec![0, 2, 0]]), &instance());
        assert!(violations.is_empty());
    }

    #[test]
    fn test_verify_trivial_route_is_fine() {
        let mut routes = set(vec![vec![0, 1, 2, 0]]);
        routes.push(Route::empty());
        assert!(verify(&routes, &instance()).is_empty());
    }

    #[test]
    fn test_verify_missing_customer() {
        let violations = verify(&set(vec![vec![0, 1, 0]]), &instance());
        assert_eq!(
            violations,
            vec![Violation::new(ViolationType::MissingCustomer {
                customer_id: 2
            })]
        );
    }

    #[test]
    fn test_verify_duplicate_customer() {
        let violations = verify(&set(vec![vec![0, 1, 0], vec![0, 1, 2, 0]]), &instance());
        assert!(violations.contains(&Violation::new(ViolationType::DuplicateCustomer {
            customer_id: 1
        })));
    }

    #[test]
    fn test_verify_capacity_exceeded() {
        let tight = Instance::new(
            Location::depot(0.0, 0.0),
            vec![
                Location::new(1, 1.0, 0.0, 10),
                Location::new(2, 2.0, 0.0, 15),
            ],
            24,
        )
        .expect("valid");
        let violations = verify(&set(vec![vec![0, 1, 2, 0]]), &tight);
        assert_eq!(
            violations,
            vec![Violation::new(ViolationType::CapacityExceeded {
                route_index: 0,
                load: 25,
                capacity: 24,
            })]
        );
    }

    #[test]
    fn test_verify_unknown_customer() {
        let violations = verify(&set(vec![vec![0, 1, 7, 2, 0]]), &instance());
        assert!(violations.contains(&Violation::new(ViolationType::UnknownCustomer {
            route_index: 0,
            customer_id: 7,
        })));
    }
}
