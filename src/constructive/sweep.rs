//! Sweep constructive heuristic.
//!
//! # Algorithm
//!
//! Sorts customers by polar angle relative to the depot, then groups them
//! into routes by sweeping through angles while respecting capacity.
//! Nearby customers tend to have similar angles and land on the same
//! route. Each finished route is refined with intra-route 2-opt.
//!
//! Angle ties break by ascending customer id, keeping the construction
//! deterministic.
//!
//! # Complexity
//!
//! O(n log n) for the sweep itself (dominated by angle sorting); the
//! per-route 2-opt refinement adds O(k²) per scan for a route of k stops.
//!
//! # Reference
//!
//! Gillett, B.E. & Miller, L.R. (1974). "A Heuristic Algorithm for the
//! Vehicle-Dispatch Problem", *Operations Research* 22(2), 340-349.

use crate::distance::DistanceOracle;
use crate::local_search::two_opt_improve;
use crate::models::{Instance, Route, RouteSet, DEPOT};

/// Constructs a route set using the sweep heuristic.
///
/// Customers are visited in ascending polar-angle order around the depot;
/// when the next customer would overflow the running load, the current
/// route closes and a new one starts. Every resulting route is refined
/// with [`two_opt_improve`] bounded by `two_opt_scans` full scans.
///
/// # Examples
///
/// ```
/// use cvrp_heuristics::constructive::sweep;
/// use cvrp_heuristics::distance::DistanceOracle;
/// use cvrp_heuristics::models::{Instance, Location};
/// use cvrp_heuristics::solver::DEFAULT_TWO_OPT_SCANS;
///
/// let instance = Instance::new(
///     Location::depot(0.0, 0.0),
///     vec![
///         Location::new(1, 1.0, 1.0, 10),
///         Location::new(2, -1.0, 1.0, 10),
///         Location::new(3, -1.0, -1.0, 10),
///         Location::new(4, 1.0, -1.0, 10),
///     ],
///     20,
/// )
/// .expect("valid instance");
/// let oracle = DistanceOracle::from_instance(&instance);
///
/// let routes = sweep(&instance, &oracle, DEFAULT_TWO_OPT_SCANS);
/// assert_eq!(routes.num_routes(), 2);
/// ```
pub fn sweep(instance: &Instance, oracle: &DistanceOracle, two_opt_scans: usize) -> RouteSet {
    let depot = instance.depot();

    // (id, demand, angle) sorted by angle, then id
    let mut order: Vec<(usize, i32, f64)> = instance
        .customers()
        .iter()
        .map(|c| {
            let angle = (c.y() - depot.y()).atan2(c.x() - depot.x());
            (c.id(), c.demand(), angle)
        })
        .collect();
    order.sort_by(|a, b| a.2.total_cmp(&b.2).then(a.0.cmp(&b.0)));

    let mut set = RouteSet::new();
    let mut current: Vec<usize> = vec![DEPOT];
    let mut load: i32 = 0;

    for &(id, demand, _) in &order {
        if load + demand > instance.capacity() && current.len() > 1 {
            current.push(DEPOT);
            let finished = std::mem::replace(&mut current, vec![DEPOT]);
            set.push(Route::from_stops_unchecked(finished));
            load = 0;
        }
        current.push(id);
        load += demand;
    }

    if current.len() > 1 {
        current.push(DEPOT);
        set.push(Route::from_stops_unchecked(current));
    }

    for route in set.routes_mut() {
        two_opt_improve(route, oracle, two_opt_scans);
    }
    set
}
