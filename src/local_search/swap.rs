//! Inter-route pairwise customer exchange.
//!
//! # Algorithm
//!
//! For every unordered pair of routes and every pair of customers (one
//! per route), compare the four edges adjacent to the two customers
//! before and after exchanging them in place:
//!
//! ```text
//! before = d(p1, a) + d(a, n1) + d(p2, b) + d(b, n2)
//! after  = d(p1, b) + d(b, n1) + d(p2, a) + d(a, n2)
//! ```
//!
//! The exchange is applied when it reduces the edge sum and both
//! post-swap loads stay within capacity; the scan then restarts
//! (first-improvement). Stops after a pass without improvement or after
//! `max_passes` passes.
//!
//! # Complexity
//!
//! O(n² · R²) per pass where n = customers per route, R = number of routes.
//!
//! # Reference
//!
//! Osman, I.H. (1993). "Metastrategy simulated annealing and tabu search
//! algorithms for the vehicle routing problem", *Annals of Operations
//! Research* 41(4), 421-451.

use crate::distance::DistanceOracle;
use crate::models::{Instance, RouteSet};

/// Exchanges customer pairs between routes when it shortens the tour, in
/// place.
///
/// Positions are preserved: the two customers trade places and nothing
/// else moves, so the customer multiset across the set is unchanged.
/// Both routes' loads are pre-checked against capacity before a swap
/// commits.
///
/// # Examples
///
/// ```
/// use cvrp_heuristics::distance::DistanceOracle;
/// use cvrp_heuristics::local_search::swap_improve;
/// use cvrp_heuristics::models::{Instance, Location, Route, RouteSet};
/// use cvrp_heuristics::solver::DEFAULT_SWAP_PASSES;
///
/// let instance = Instance::new(
///     Location::depot(0.0, 0.0),
///     vec![
///         Location::new(1, 5.0, 0.0, 10),
///         Location::new(2, 6.0, 0.0, 10),
///         Location::new(3, -5.0, 0.0, 10),
///         Location::new(4, -6.0, 0.0, 10),
///     ],
///     40,
/// )
/// .expect("valid instance");
/// let oracle = DistanceOracle::from_instance(&instance);
///
/// // Each route detours across the depot; swapping 1 and 3 fixes both
/// let mut routes = RouteSet::new();
/// routes.push(Route::from_stops(vec![0, 1, 4, 0]).expect("valid"));
/// routes.push(Route::from_stops(vec![0, 3, 2, 0]).expect("valid"));
///
/// let before = routes.total_distance(&oracle);
/// swap_improve(&mut routes, &instance, &oracle, DEFAULT_SWAP_PASSES);
/// assert!(routes.total_distance(&oracle) < before);
/// ```
pub fn swap_improve(
    routes: &mut RouteSet,
    instance: &Instance,
    oracle: &DistanceOracle,
    max_passes: usize,
) {
    if routes.num_routes() <= 1 {
        return;
    }

    let list = routes.routes_mut();
    let mut loads: Vec<i32> = list.iter().map(|r| r.load(instance)).collect();
    let mut improved = true;
    let mut passes = 0;

    while improved && passes < max_passes {
        improved = false;
        passes += 1;

        'pass: for i in 0..list.len() - 1 {
            for j in i + 1..list.len() {
                for ci in 1..list[i].len() - 1 {
                    for cj in 1..list[j].len() - 1 {
                        let a = list[i].stops()[ci];
                        let b = list[j].stops()[cj];
                        let da = instance.demand_of(a);
                        let db = instance.demand_of(b);

                        let load_i = loads[i] - da + db;
                        let load_j = loads[j] - db + da;
                        if load_i > instance.capacity() || load_j > instance.capacity() {
                            continue;
                        }

                        let ri = list[i].stops();
                        let rj = list[j].stops();
                        let before = oracle.get(ri[ci - 1], a)
                            + oracle.get(a, ri[ci + 1])
                            + oracle.get(rj[cj - 1], b)
                            + oracle.get(b, rj[cj + 1]);
                        let after = oracle.get(ri[ci - 1], b)
                            + oracle.get(b, ri[ci + 1])
                            + oracle.get(rj[cj - 1], a)
                            + oracle.get(a, rj[cj + 1]);

                        if after < before {
                            list[i].stops_mut()[ci] = b;
                            list[j].stops_mut()[cj] = a;
                            loads[i] = load_i;
                            loads[j] = load_j;
                            improved = true;
                            break 'pass;
                        }
                    }
                }
            }
        }
    }
}
