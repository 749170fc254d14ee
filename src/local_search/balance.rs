//! Inter-route load-balancing relocation.
//!
//! # Algorithm
//!
//! Each pass ranks routes by load descending, then pairs the k-th most
//! loaded route (source) with the k-th least loaded route (target),
//! skipping pairs whose source load is already no larger than the
//! target's. For every source customer and every target insertion
//! position, the three affected edges are compared before and after the
//! relocation:
//!
//! ```text
//! current = d(prev, c) + d(c, next) + d(t[k-1], t[k])
//! moved   = d(prev, next) + d(t[k-1], c) + d(c, t[k])
//! ```
//!
//! The first improving relocation is applied and the pass restarts.
//! Stops after a pass without improvement or after `max_passes` passes.
//!
//! # Complexity
//!
//! O(n² · R) per pass where n = customers per route, R = number of routes.

use crate::distance::DistanceOracle;
use crate::models::{Instance, RouteSet};

/// Moves customers from heavily loaded routes into lighter ones, in place.
///
/// Only relocations that keep the target within capacity and strictly
/// reduce total distance are applied; the customer multiset across the
/// set is unchanged. A route drained of its last customer shrinks to the
/// trivial depot-depot pair and stays in the set.
///
/// # Examples
///
/// ```
/// use cvrp_heuristics::distance::DistanceOracle;
/// use cvrp_heuristics::local_search::balance_improve;
/// use cvrp_heuristics::models::{Instance, Location, Route, RouteSet};
/// use cvrp_heuristics::solver::DEFAULT_BALANCE_PASSES;
///
/// let instance = Instance::new(
///     Location::depot(0.0, 0.0),
///     vec![
///         Location::new(1, 1.0, 0.0, 10),
///         Location::new(2, 2.0, 0.0, 10),
///         Location::new(3, 10.0, 10.0, 10),
///         Location::new(4, 11.0, 10.0, 10),
///     ],
///     40,
/// )
/// .expect("valid instance");
/// let oracle = DistanceOracle::from_instance(&instance);
///
/// let mut routes = RouteSet::new();
/// routes.push(Route::from_stops(vec![0, 1, 2, 3, 0]).expect("valid"));
/// routes.push(Route::from_stops(vec![0, 4, 0]).expect("valid"));
///
/// let before = routes.total_distance(&oracle);
/// balance_improve(&mut routes, &instance, &oracle, DEFAULT_BALANCE_PASSES);
/// assert!(routes.total_distance(&oracle) < before);
/// ```
pub fn balance_improve(
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

        // Rank routes by load, heaviest first; stable on equal loads
        let mut order: Vec<usize> = (0..list.len()).collect();
        order.sort_by(|&a, &b| loads[b].cmp(&loads[a]));

        'pass: for k in 0..order.len() - 1 {
            let src = order[k];
            let tgt = order[order.len() - 1 - k];
            if loads[src] <= loads[tgt] {
                continue;
            }

            for pos in 1..list[src].len() - 1 {
                let cid = list[src].stops()[pos];
                let demand = instance.demand_of(cid);
                if loads[tgt] + demand > instance.capacity() {
                    continue;
                }

                for ins in 1..list[tgt].len() {
                    let s = list[src].stops();
                    let t = list[tgt].stops();
                    let current = oracle.get(s[pos - 1], cid)
                        + oracle.get(cid, s[pos + 1])
                        + oracle.get(t[ins - 1], t[ins]);
                    let moved = oracle.get(s[pos - 1], s[pos + 1])
                        + oracle.get(t[ins - 1], cid)
                        + oracle.get(cid, t[ins]);

                    if moved < current {
                        list[src].stops_mut().remove(pos);
                        list[tgt].stops_mut().insert(ins, cid);
                        loads[src] -= demand;
                        loads[tgt] += demand;
                        improved = true;
                        break 'pass;
                    }
                }
            }
        }
    }
}
