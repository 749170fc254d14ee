//! Route set scoring.

use serde::Serialize;

use crate::distance::DistanceOracle;
use crate::models::RouteSet;

/// The score of one candidate route set.
///
/// `score = total_distance + vehicle_count × vehicle_cost`; lower is
/// better. `vehicle_count` only counts routes that serve at least one
/// customer — the trivial depot-depot pair costs nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Sum of Euclidean edge lengths over all routes.
    pub total_distance: f64,
    /// Number of routes serving at least one customer.
    pub vehicle_count: usize,
    /// Composite ranking metric, lower is better.
    pub score: f64,
}

/// Scores a route set.
///
/// An empty route set scores zero across the board.
///
/// # Examples
///
/// ```
/// use cvrp_heuristics::distance::DistanceOracle;
/// use cvrp_heuristics::evaluation::evaluate;
/// use cvrp_heuristics::models::{Instance, Location, Route, RouteSet};
///
/// let instance = Instance::new(
///     Location::depot(0.0, 0.0),
///     vec![Location::new(1, 3.0, 4.0, 10)],
///     50,
/// )
/// .expect("valid instance");
/// let oracle = DistanceOracle::from_instance(&instance);
///
/// let mut routes = RouteSet::new();
/// routes.push(Route::single(1));
///
/// let eval = evaluate(&routes, &oracle, 100.0);
/// assert!((eval.total_distance - 10.0).abs() < 1e-10);
/// assert_eq!(eval.vehicle_count, 1);
/// assert!((eval.score - 110.0).abs() < 1e-10);
/// ```
pub fn evaluate(routes: &RouteSet, oracle: &DistanceOracle, vehicle_cost: f64) -> Evaluation {
    let total_distance = routes.total_distance(oracle);
    let vehicle_count = routes.num_active();
    Evaluation {
        total_distance,
        vehicle_count,
        score: total_distance + vehicle_count as f64 * vehicle_cost,
    }
}

/// Index of the lowest-scoring candidate.
///
/// On an exact score tie the earliest candidate wins; `None` for an
/// empty slice.
pub fn best_index(candidates: &[Evaluation]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, eval) in candidates.iter().enumerate() {
        match best {
            Some(b) if eval.score >= candidates[b].score => {}
            _ => best = Some(i),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Instance, Location, Route};

    fn setup() -> (Instance, DistanceOracle) {
        let instance = Instance::new(
            Location::depot(0.0, 0.0),
            vec![
                Location::new(1, 3.0, 4.0, 10),
                Location::new(2, 0.0, 6.0, 10),
            ],
            50,
        )
        .expect("valid");
        let oracle = DistanceOracle::from_instance(&instance);
        (instance, oracle)
    }

    #[test]
    fn test_evaluate_empty() {
        let (_, oracle) = setup();
        let eval = evaluate(&RouteSet::new(), &oracle, 100.0);
        assert_eq!(eval.total_distance, 0.0);
        assert_eq!(eval.vehicle_count, 0);
        assert_eq!(eval.score, 0.0);
    }

    #[test]
    fn test_evaluate_two_routes() {
        let (_, oracle) = setup();
        let mut routes = RouteSet::new();
        routes.push(Route::single(1)); // 10.0
        routes.push(Route::single(2)); // 12.0
        let eval = evaluate(&routes, &oracle, 100.0);
        assert!((eval.total_distance - 22.0).abs() < 1e-10);
        assert_eq!(eval.vehicle_count, 2);
        assert!((eval.score - 222.0).abs() < 1e-10);
    }

    #[test]
    fn test_evaluate_ignores_trivial_routes() {
        let (_, oracle) = setup();
        let mut routes = RouteSet::new();
        routes.push(Route::single(1));
        routes.push(Route::empty());
        let eval = evaluate(&routes, &oracle, 100.0);
        assert_eq!(eval.vehicle_count, 1);
        assert!((eval.score - 110.0).abs() < 1e-10);
    }

    #[test]
    fn test_evaluate_custom_vehicle_cost() {
        let (_, oracle) = setup();
        let mut routes = RouteSet::new();
        routes.push(Route::single(1));
        let eval = evaluate(&routes, &oracle, 7.5);
        assert!((eval.score - 17.5).abs() < 1e-10);
    }

    #[test]
    fn test_best_index_picks_lowest_score() {
        let evals = vec![
            Evaluation {
                total_distance: 30.0,
                vehicle_count: 2,
                score: 230.0,
            },
            Evaluation {
                total_distance: 40.0,
                vehicle_count: 1,
                score: 140.0,
            },
            Evaluation {
                total_distance: 50.0,
                vehicle_count: 1,
                score: 150.0,
            },
        ];
        assert_eq!(best_index(&evals), Some(1));
    }

    #[test]
    fn test_best_index_tie_keeps_first() {
        let a = Evaluation {
            total_distance: 40.0,
            vehicle_count: 1,
            score: 140.0,
        };
        let b = a.clone();
        assert_eq!(best_index(&[a, b]), Some(0));
    }

    #[test]
    fn test_best_index_empty() {
        assert_eq!(best_index(&[]), None);
    }
}
