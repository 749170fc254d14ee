//! # cvrp-heuristics
//!
//! Construction and improvement heuristics for the Capacitated Vehicle
//! Routing Problem (CVRP): partition customers into depot-anchored routes
//! under a per-route capacity, minimizing total travel distance and
//! vehicle count.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Location, Route, RouteSet, Instance)
//! - [`distance`] — Euclidean distance oracle over location ids
//! - [`constructive`] — Constructive heuristics (Clarke-Wright savings, sweep)
//! - [`local_search`] — Improvement operators (2-opt, balance, swap)
//! - [`evaluation`] — Scoring and solution verification
//! - [`solver`] — Configurable solver facade with result memoization
//!
//! ## Example
//!
//! ```
//! use cvrp_heuristics::models::{Instance, Location};
//! use cvrp_heuristics::solver::CvrpSolver;
//!
//! let instance = Instance::new(
//!     Location::depot(0.0, 0.0),
//!     vec![
//!         Location::new(1, 10.0, 0.0, 5),
//!         Location::new(2, 0.0, 10.0, 5),
//!     ],
//!     20,
//! )
//! .expect("valid instance");
//!
//! let mut solver = CvrpSolver::new(instance);
//! let routes = solver.solve_enhanced();
//! let eval = solver.evaluate(&routes);
//! assert_eq!(eval.vehicle_count, 1);
//! ```

pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod solver;
