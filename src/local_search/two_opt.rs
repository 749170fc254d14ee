//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For interior position pairs (i, j), compare the two edges entering and
//! leaving the segment against their replacements after reversing it:
//!
//! ```text
//! d1 = d(r[i-1], r[i]) + d(r[j], r[j+1])
//! d2 = d(r[i-1], r[j]) + d(r[i], r[j+1])
//! ```
//!
//! If `d2 < d1`, reverse `r[i..=j]` and restart the scan from the top
//! (first-improvement). Stops after a full scan without improvement or
//! after `max_scans` scans, whichever comes first. Reversal never changes
//! route membership, so capacity feasibility is preserved automatically.
//!
//! # Complexity
//!
//! O(k²) per scan for a route of k stops.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceOracle;
use crate::models::Route;

/// Applies 2-opt improvement to a single route, in place.
///
/// Routes with fewer than 4 stops (depot + 2 customers + depot) are left
/// untouched. `max_scans` bounds the number of full scans; it caps
/// worst-case latency on pathological inputs and is not needed for
/// correctness.
///
/// # Examples
///
/// ```
/// use cvrp_heuristics::distance::DistanceOracle;
/// use cvrp_heuristics::local_search::two_opt_improve;
/// use cvrp_heuristics::models::{Instance, Location, Route};
/// use cvrp_heuristics::solver::DEFAULT_TWO_OPT_SCANS;
///
/// let instance = Instance::new(
///     Location::depot(0.0, 0.0),
///     vec![
///         Location::new(1, 1.0, 1.0, 10),
///         Location::new(2, 2.0, 0.0, 10),
///         Location::new(3, 1.0, -1.0, 10),
///     ],
///     50,
/// )
/// .expect("valid instance");
/// let oracle = DistanceOracle::from_instance(&instance);
///
/// // 0→1→3→2→0 crosses itself; 2-opt untangles it
/// let mut route = Route::from_stops(vec![0, 1, 3, 2, 0]).expect("valid");
/// let before = route.distance(&oracle);
/// two_opt_improve(&mut route, &oracle, DEFAULT_TWO_OPT_SCANS);
/// assert!(route.distance(&oracle) < before);
/// assert_eq!(route.stops(), &[0, 1, 2, 3, 0]);
/// ```
pub fn two_opt_improve(route: &mut Route, oracle: &DistanceOracle, max_scans: usize) {
    if route.len() < 4 {
        return;
    }

    let stops = route.stops_mut();
    let n = stops.len();
    let mut improved = true;
    let mut scans = 0;

    while improved && scans < max_scans {
        improved = false;
        scans += 1;

        'scan: for i in 1..n - 2 {
            for j in i + 1..n - 1 {
                let d1 = oracle.get(stops[i - 1], stops[i]) + oracle.get(stops[j], stops[j + 1]);
                let d2 = oracle.get(stops[i - 1], stops[j]) + oracle.get(stops[i], stops[j + 1]);

                if d2 < d1 {
                    stops[i..=j].reverse();
                    improved = true;
                    break 'scan;
                }
            }
        }
    }
}
