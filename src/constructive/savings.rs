//! Clarke-Wright savings algorithm.
//!
//! # Algorithm
//!
//! Starts with one seed route per customer (depot → customer → depot),
//! then greedily merges route pairs in decreasing order of savings:
//!
//! ```text
//! s(i, j) = d(0, tail(i)) + d(0, head(j)) - d(tail(i), head(j))
//! ```
//!
//! where `tail(i)` is the last customer of route i and `head(j)` the first
//! customer of route j. Only this orientation is evaluated — never the
//! reverse — and savings are computed once, over the seed routes. A merge
//! concatenates route j onto route i and retires index j; index i stays
//! live and may absorb further partners. Merges are attempted in sorted
//! order regardless of sign, subject only to the capacity check.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of customers (dominated by sorting savings).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use crate::distance::DistanceOracle;
use crate::models::{Instance, Route, RouteSet, DEPOT};

/// A savings value for merging route `route_j` onto route `route_i`.
#[derive(Debug)]
struct Saving {
    route_i: usize,
    route_j: usize,
    value: f64,
}

/// Constructs a route set using the Clarke-Wright savings algorithm.
///
/// Every customer ends up in exactly one route and no route's load
/// exceeds the instance capacity. Savings ties keep pair enumeration
/// order (the sort is stable), so the result is deterministic.
///
/// # Examples
///
/// ```
/// use cvrp_heuristics::constructive::savings;
/// use cvrp_heuristics::distance::DistanceOracle;
/// use cvrp_heuristics::models::{Instance, Location};
///
/// let instance = Instance::new(
///     Location::depot(0.0, 0.0),
///     vec![
///         Location::new(1, 1.0, 0.0, 10),
///         Location::new(2, 2.0, 0.0, 10),
///         Location::new(3, 3.0, 0.0, 10),
///     ],
///     30,
/// )
/// .expect("valid instance");
/// let oracle = DistanceOracle::from_instance(&instance);
///
/// let routes = savings(&instance, &oracle);
/// assert_eq!(routes.num_routes(), 1);
/// assert_eq!(routes.routes()[0].stops(), &[0, 1, 2, 3, 0]);
/// ```
pub fn savings(instance: &Instance, oracle: &DistanceOracle) -> RouteSet {
    let customers = instance.customers();
    if customers.is_empty() {
        return RouteSet::new();
    }

    let mut routes: Vec<Route> = customers.iter().map(|c| Route::single(c.id())).collect();
    let mut loads: Vec<i32> = customers.iter().map(|c| c.demand()).collect();

    // Savings over seed route pairs, tail-of-i to head-of-j only
    let n = routes.len();
    let mut savings = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        let tail = routes[i].stops()[routes[i].len() - 2];
        for (j, route_j) in routes.iter().enumerate().skip(i + 1) {
            let head = route_j.stops()[1];
            let value = oracle.get(DEPOT, tail) + oracle.get(DEPOT, head) - oracle.get(tail, head);
            savings.push(Saving {
                route_i: i,
                route_j: j,
                value,
            });
        }
    }

    // Descending, stable: equal savings keep enumeration order
    savings.sort_by(|a, b| b.value.total_cmp(&a.value));

    let mut consumed = vec![false; n];
    for s in &savings {
        if consumed[s.route_i] || consumed[s.route_j] {
            continue;
        }
        let combined = loads[s.route_i] + loads[s.route_j];
        if combined > instance.capacity() {
            continue;
        }

        // Drop route i's trailing depot, append route j minus its leading depot
        let absorbed: Vec<usize> = routes[s.route_j].stops()[1..].to_vec();
        let stops = routes[s.route_i].stops_mut();
        stops.pop();
        stops.extend(absorbed);
        loads[s.route_i] = combined;
        consumed[s.route_j] = true;
    }

    let mut set = RouteSet::new();
    for (i, route) in routes.into_iter().enumerate() {
        if !consumed[i] {
            set.push(route);
        }
    }
    set
}
