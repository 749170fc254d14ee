//! Route and route set types.

use serde::Serialize;

use super::{Instance, DEPOT};
use crate::distance::DistanceOracle;

/// An ordered visit sequence for one vehicle, expressed as location ids.
///
/// A route always starts and ends at the depot (id 0), and the depot never
/// appears in between. Interior ids are customers, each at most once.
///
/// # Examples
///
/// ```
/// use cvrp_heuristics::models::Route;
///
/// let route = Route::single(7);
/// assert_eq!(route.stops(), &[0, 7, 0]);
/// assert_eq!(route.num_customers(), 1);
/// assert!(route.is_active());
///
/// let trivial = Route::empty();
/// assert!(!trivial.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    stops: Vec<usize>,
}

impl Route {
    /// Creates the trivial depot-depot route `[0, 0]`.
    pub fn empty() -> Self {
        Self {
            stops: vec![DEPOT, DEPOT],
        }
    }

    /// Creates a seed route serving a single customer: `[0, c, 0]`.
    pub fn single(customer_id: usize) -> Self {
        Self {
            stops: vec![DEPOT, customer_id, DEPOT],
        }
    }

    /// Creates a route from an explicit stop sequence.
    ///
    /// Returns `None` unless the sequence starts and ends with the depot,
    /// the depot appears nowhere else, and no customer repeats.
    pub fn from_stops(stops: Vec<usize>) -> Option<Self> {
        if stops.len() < 2 || stops[0] != DEPOT || stops[stops.len() - 1] != DEPOT {
            return None;
        }
        let interior = &stops[1..stops.len() - 1];
        if interior.contains(&DEPOT) {
            return None;
        }
        for (i, id) in interior.iter().enumerate() {
            if interior[i + 1..].contains(id) {
                return None;
            }
        }
        Some(Self { stops })
    }

    /// Crate-internal constructor for stop sequences the solvers build
    /// themselves; callers go through [`Route::from_stops`].
    pub(crate) fn from_stops_unchecked(stops: Vec<usize>) -> Self {
        Self { stops }
    }

    /// The full stop sequence, depot sentinels included.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Mutable stop access for the improvement operators.
    pub(crate) fn stops_mut(&mut self) -> &mut Vec<usize> {
        &mut self.stops
    }

    /// Number of stops including both depot sentinels.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route serves no customer.
    pub fn is_empty(&self) -> bool {
        self.stops.len() <= 2
    }

    /// Customer ids served by this route, in visit order.
    pub fn customer_ids(&self) -> &[usize] {
        &self.stops[1..self.stops.len() - 1]
    }

    /// Number of customers served.
    pub fn num_customers(&self) -> usize {
        self.stops.len() - 2
    }

    /// Returns `true` if this route serves at least one customer, i.e.
    /// contributes a vehicle.
    pub fn is_active(&self) -> bool {
        self.stops.len() > 2
    }

    /// Sum of member customer demands.
    pub fn load(&self, instance: &Instance) -> i32 {
        self.customer_ids()
            .iter()
            .map(|&id| instance.demand_of(id))
            .sum()
    }

    /// Total travel distance over consecutive stop pairs.
    pub fn distance(&self, oracle: &DistanceOracle) -> f64 {
        self.stops
            .windows(2)
            .map(|pair| oracle.get(pair[0], pair[1]))
            .sum()
    }
}

/// An ordered collection of routes forming one candidate solution.
///
/// Across all routes, every customer of the instance appears in exactly
/// one route, exactly once.
///
/// # Examples
///
/// ```
/// use cvrp_heuristics::models::{Route, RouteSet};
///
/// let mut set = RouteSet::new();
/// set.push(Route::single(1));
/// set.push(Route::single(2));
/// assert_eq!(set.num_routes(), 2);
/// assert_eq!(set.customer_ids(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct RouteSet {
    routes: Vec<Route>,
}

impl RouteSet {
    /// Creates an empty route set.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a route.
    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// The routes in order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Mutable route access for the improvement operators.
    pub(crate) fn routes_mut(&mut self) -> &mut Vec<Route> {
        &mut self.routes
    }

    /// Number of routes, trivial ones included.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if there are no routes at all.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Number of routes that actually serve customers.
    pub fn num_active(&self) -> usize {
        self.routes.iter().filter(|r| r.is_active()).count()
    }

    /// All served customer ids, in route order.
    pub fn customer_ids(&self) -> Vec<usize> {
        self.routes
            .iter()
            .flat_map(|r| r.customer_ids().iter().copied())
            .collect()
    }

    /// Total travel distance across all routes.
    pub fn total_distance(&self, oracle: &DistanceOracle) -> f64 {
        self.routes.iter().map(|r| r.distance(oracle)).sum()
    }
}
