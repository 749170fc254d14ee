//! Solver facade: configuration, orchestration, and result memoization.

use crate::constructive::{savings, sweep};
use crate::distance::DistanceOracle;
use crate::evaluation::{evaluate, Evaluation};
use crate::local_search::{balance_improve, swap_improve, two_opt_improve};
use crate::models::{Instance, Location, RouteSet};

/// Default bound on full 2-opt scans per route.
pub const DEFAULT_TWO_OPT_SCANS: usize = 100;
/// Default bound on load-balancing relocation passes.
pub const DEFAULT_BALANCE_PASSES: usize = 50;
/// Default bound on inter-route swap passes.
pub const DEFAULT_SWAP_PASSES: usize = 50;
/// Default fixed cost per vehicle used in the composite score.
pub const DEFAULT_VEHICLE_COST: f64 = 100.0;

/// Tuning knobs for the solver pipeline.
///
/// The iteration caps bound worst-case latency on pathological inputs;
/// they are not needed for correctness and rarely bind in practice.
///
/// # Examples
///
/// ```
/// use cvrp_heuristics::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_two_opt_scans(10)
///     .with_vehicle_cost(50.0);
/// assert_eq!(config.two_opt_scans(), 10);
/// assert_eq!(config.vehicle_cost(), 50.0);
/// ```
#[derive(Debug, Clone)]
pub struct SolverConfig {
    two_opt_scans: usize,
    balance_passes: usize,
    swap_passes: usize,
    vehicle_cost: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            two_opt_scans: DEFAULT_TWO_OPT_SCANS,
            balance_passes: DEFAULT_BALANCE_PASSES,
            swap_passes: DEFAULT_SWAP_PASSES,
            vehicle_cost: DEFAULT_VEHICLE_COST,
        }
    }
}

impl SolverConfig {
    /// Sets the 2-opt scan cap.
    pub fn with_two_opt_scans(mut self, scans: usize) -> Self {
        self.two_opt_scans = scans;
        self
    }

    /// Sets the balance pass cap.
    pub fn with_balance_passes(mut self, passes: usize) -> Self {
        self.balance_passes = passes;
        self
    }

    /// Sets the swap pass cap.
    pub fn with_swap_passes(mut self, passes: usize) -> Self {
        self.swap_passes = passes;
        self
    }

    /// Sets the per-vehicle cost used by [`CvrpSolver::evaluate`].
    pub fn with_vehicle_cost(mut self, cost: f64) -> Self {
        self.vehicle_cost = cost;
        self
    }

    /// Bound on full 2-opt scans per route.
    pub fn two_opt_scans(&self) -> usize {
        self.two_opt_scans
    }

    /// Bound on balance passes.
    pub fn balance_passes(&self) -> usize {
        self.balance_passes
    }

    /// Bound on swap passes.
    pub fn swap_passes(&self) -> usize {
        self.swap_passes
    }

    /// Fixed cost per vehicle used.
    pub fn vehicle_cost(&self) -> f64 {
        self.vehicle_cost
    }
}

/// Memoized solutions for one (customer set, capacity) fingerprint.
#[derive(Debug, Clone, Default)]
struct SolutionCache {
    key: u64,
    savings: Option<RouteSet>,
    sweep: Option<RouteSet>,
    enhanced: Option<RouteSet>,
}

impl SolutionCache {
    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// CVRP solver over one problem instance.
///
/// Wraps the constructive and improvement heuristics behind a single
/// entry point and memoizes each solver's last result, keyed by the
/// instance fingerprint. Mutating the instance through the solver clears
/// the memo synchronously, and a fingerprint mismatch at solve time
/// recomputes, so a stale solution is never returned.
///
/// All solve calls are synchronous, deterministic, and total: an
/// instance with no customers yields an empty route set.
///
/// # Examples
///
/// ```
/// use cvrp_heuristics::models::{Instance, Location};
/// use cvrp_heuristics::solver::CvrpSolver;
///
/// let instance = Instance::new(
///     Location::depot(0.0, 0.0),
///     vec![
///         Location::new(1, 10.0, 0.0, 5),
///         Location::new(2, 0.0, 10.0, 5),
///     ],
///     20,
/// )
/// .expect("valid instance");
/// let mut solver = CvrpSolver::new(instance);
///
/// let routes = solver.solve_savings();
/// assert_eq!(routes.routes()[0].stops(), &[0, 1, 2, 0]);
///
/// // Shrinking the capacity invalidates the memoized result
/// assert!(solver.set_capacity(5));
/// assert_eq!(solver.solve_savings().num_routes(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CvrpSolver {
    instance: Instance,
    oracle: DistanceOracle,
    config: SolverConfig,
    cache: SolutionCache,
}

impl CvrpSolver {
    /// Creates a solver with the default configuration.
    pub fn new(instance: Instance) -> Self {
        Self::with_config(instance, SolverConfig::default())
    }

    /// Creates a solver with an explicit configuration.
    pub fn with_config(instance: Instance, config: SolverConfig) -> Self {
        let oracle = DistanceOracle::from_instance(&instance);
        Self {
            instance,
            oracle,
            config,
            cache: SolutionCache::default(),
        }
    }

    /// The problem instance.
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Replaces the capacity and clears the memoized solutions.
    ///
    /// Returns `false` (changing nothing) if the capacity is not positive.
    pub fn set_capacity(&mut self, capacity: i32) -> bool {
        if !self.instance.set_capacity(capacity) {
            return false;
        }
        self.cache.clear();
        true
    }

    /// Replaces the customer registry and clears the memoized solutions.
    ///
    /// Returns `false` (changing nothing) if the registry fails
    /// validation.
    pub fn set_customers(&mut self, customers: Vec<Location>) -> bool {
        if !self.instance.set_customers(customers) {
            return false;
        }
        self.oracle = DistanceOracle::from_instance(&self.instance);
        self.cache.clear();
        true
    }

    /// Drops any stale memo and returns the cache for the current inputs.
    fn cache_for_current(&mut self) -> &mut SolutionCache {
        let key = self.instance.fingerprint();
        if self.cache.key != key {
            self.cache.clear();
            self.cache.key = key;
        }
        &mut self.cache
    }

    /// Clarke-Wright savings construction.
    pub fn solve_savings(&mut self) -> RouteSet {
        if let Some(cached) = &self.cache_for_current().savings {
            return cached.clone();
        }
        let routes = savings(&self.instance, &self.oracle);
        self.cache.savings = Some(routes.clone());
        routes
    }

    /// Sweep construction with per-route 2-opt refinement.
    pub fn solve_sweep(&mut self) -> RouteSet {
        if let Some(cached) = &self.cache_for_current().sweep {
            return cached.clone();
        }
        let routes = sweep(&self.instance, &self.oracle, self.config.two_opt_scans);
        self.cache.sweep = Some(routes.clone());
        routes
    }

    /// Full improvement pipeline: savings construction, load balancing,
    /// per-route 2-opt, then inter-route swaps.
    pub fn solve_enhanced(&mut self) -> RouteSet {
        if let Some(cached) = &self.cache_for_current().enhanced {
            return cached.clone();
        }

        let mut routes = self.solve_savings();
        balance_improve(
            &mut routes,
            &self.instance,
            &self.oracle,
            self.config.balance_passes,
        );
        for route in routes.routes_mut() {
            two_opt_improve(route, &self.oracle, self.config.two_opt_scans);
        }
        swap_improve(
            &mut routes,
            &self.instance,
            &self.oracle,
            self.config.swap_passes,
        );

        self.cache.enhanced = Some(routes.clone());
        routes
    }

    /// Scores a route set with this solver's vehicle cost.
    pub fn evaluate(&self, routes: &RouteSet) -> Evaluation {
        evaluate(routes, &self.oracle, self.config.vehicle_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::verify;

    fn perpendicular_solver(capacity: i32) -> CvrpSolver {
        let instance = Instance::new(
            Location::depot(0.0, 0.0),
            vec![
                Location::new(1, 10.0, 0.0, 5),
                Location::new(2, 0.0, 10.0, 5),
            ],
            capacity,
        )
        .expect("valid");
        CvrpSolver::new(instance)
    }

    fn clustered_solver() -> CvrpSolver {
        let instance = Instance::new(
            Location::depot(0.0, 0.0),
            vec![
                Location::new(1, 10.0, 1.0, 10),
                Location::new(2, 11.0, 0.0, 10),
                Location::new(3, -10.0, 1.0, 10),
                Location::new(4, -11.0, 0.0, 10),
                Location::new(5, 0.0, 12.0, 10),
            ],
            25,
        )
        .expect("valid");
        CvrpSolver::new(instance)
    }

    #[test]
    fn test_capacity_blocks_merge() {
        let mut solver = perpendicular_solver(5);
        let routes = solver.solve_savings();
        assert_eq!(routes.num_routes(), 2);
        assert_eq!(routes.routes()[0].stops(), &[0, 1, 0]);
        assert_eq!(routes.routes()[1].stops(), &[0, 2, 0]);
    }

    #[test]
    fn test_generous_capacity_merges() {
        let mut solver = perpendicular_solver(20);
        let routes = solver.solve_savings();
        assert_eq!(routes.num_routes(), 1);
        let eval = solver.evaluate(&routes);
        let expected = 10.0 + 200.0_f64.sqrt() + 10.0;
        assert!((eval.total_distance - expected).abs() < 1e-10);
        assert_eq!(eval.vehicle_count, 1);
    }

    #[test]
    fn test_single_customer_all_solvers_agree() {
        let instance = Instance::new(
            Location::depot(0.0, 0.0),
            vec![Location::new(1, 3.0, 4.0, 10)],
            50,
        )
        .expect("valid");
        let mut solver = CvrpSolver::new(instance);

        for routes in [
            solver.solve_savings(),
            solver.solve_sweep(),
            solver.solve_enhanced(),
        ] {
            assert_eq!(routes.num_routes(), 1);
            assert_eq!(routes.routes()[0].stops(), &[0, 1, 0]);
            assert!((solver.evaluate(&routes).total_distance - 10.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_zero_customers_all_solvers_empty() {
        let instance =
            Instance::new(Location::depot(0.0, 0.0), Vec::new(), 50).expect("valid");
        let mut solver = CvrpSolver::new(instance);

        assert!(solver.solve_savings().is_empty());
        assert!(solver.solve_sweep().is_empty());
        assert!(solver.solve_enhanced().is_empty());

        let eval = solver.evaluate(&RouteSet::new());
        assert_eq!(eval.total_distance, 0.0);
        assert_eq!(eval.vehicle_count, 0);
        assert_eq!(eval.score, 0.0);
    }

    #[test]
    fn test_enhanced_output_is_valid() {
        let mut solver = clustered_solver();
        let routes = solver.solve_enhanced();
        assert!(verify(&routes, solver.instance()).is_empty());
    }

    #[test]
    fn test_enhanced_never_worse_than_savings() {
        let solver = clustered_solver();
        let base = solver.evaluate(&solver.clone().solve_savings());
        let enhanced = solver.evaluate(&solver.clone().solve_enhanced());
        assert!(enhanced.total_distance <= base.total_distance + 1e-10);
    }

    #[test]
    fn test_solvers_deterministic() {
        let mut solver = clustered_solver();
        assert_eq!(solver.solve_savings(), solver.solve_savings());
        assert_eq!(solver.solve_sweep(), solver.solve_sweep());
        assert_eq!(solver.solve_enhanced(), solver.solve_enhanced());

        // Same inputs in a fresh solver, no cache in play
        let mut fresh = clustered_solver();
        assert_eq!(solver.solve_enhanced(), fresh.solve_enhanced());
    }

    #[test]
    fn test_cache_invalidated_by_capacity_change() {
        let mut solver = perpendicular_solver(20);
        assert_eq!(solver.solve_savings().num_routes(), 1);

        assert!(solver.set_capacity(5));
        assert_eq!(solver.solve_savings().num_routes(), 2);

        assert!(solver.set_capacity(20));
        assert_eq!(solver.solve_savings().num_routes(), 1);
    }

    #[test]
    fn test_cache_invalidated_by_customer_change() {
        let mut solver = perpendicular_solver(20);
        assert_eq!(solver.solve_enhanced().customer_ids().len(), 2);

        assert!(solver.set_customers(vec![Location::new(9, 1.0, 1.0, 5)]));
        let routes = solver.solve_enhanced();
        assert_eq!(routes.customer_ids(), vec![9]);
        assert!(verify(&routes, solver.instance()).is_empty());
    }

    #[test]
    fn test_invalid_mutation_rejected_and_cache_kept() {
        let mut solver = perpendicular_solver(20);
        let before = solver.solve_savings();

        assert!(!solver.set_capacity(0));
        assert!(!solver.set_customers(vec![Location::new(0, 1.0, 1.0, 5)]));
        assert_eq!(solver.solve_savings(), before);
    }

    #[test]
    fn test_config_caps_reachable() {
        let instance = Instance::new(
            Location::depot(0.0, 0.0),
            vec![
                Location::new(1, 1.0, 1.0, 10),
                Location::new(2, 2.0, 0.0, 10),
                Location::new(3, 1.0, -1.0, 10),
            ],
            50,
        )
        .expect("valid");
        let config = SolverConfig::default()
            .with_two_opt_scans(0)
            .with_balance_passes(0)
            .with_swap_passes(0);
        let mut limited = CvrpSolver::with_config(instance.clone(), config);
        let unlimited = CvrpSolver::new(instance);

        // With every cap at zero the pipeline reduces to plain savings
        assert_eq!(limited.solve_enhanced(), limited.solve_savings());
        // And the unlimited pipeline is at least as short
        let a = unlimited.evaluate(&unlimited.clone().solve_enhanced());
        let b = limited.evaluate(&limited.clone().solve_enhanced());
        assert!(a.total_distance <= b.total_distance + 1e-10);
    }

    #[test]
    fn test_all_solvers_valid_on_clusters() {
        let mut solver = clustered_solver();
        for routes in [
            solver.solve_savings(),
            solver.solve_sweep(),
            solver.solve_enhanced(),
        ] {
            assert!(verify(&routes, solver.instance()).is_empty());
        }
    }
}
