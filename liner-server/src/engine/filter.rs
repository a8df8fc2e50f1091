//! Post-query route filtering.
//!
//! Presentation-side predicates applied over the already-sorted search
//! output. Filtering is pure: it never reorders surviving routes and
//! never mutates engine output.

use crate::domain::{CarrierId, RouteResult, RouteType};

/// Route-type predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteTypeFilter {
    /// Pass every route
    #[default]
    All,
    /// Pass only direct routes
    Direct,
    /// Pass only transshipment routes
    Transshipment,
}

impl RouteTypeFilter {
    /// Does a route of the given type pass this filter?
    pub fn matches(&self, route_type: RouteType) -> bool {
        match self {
            RouteTypeFilter::All => true,
            RouteTypeFilter::Direct => route_type == RouteType::Direct,
            RouteTypeFilter::Transshipment => route_type == RouteType::Transshipment,
        }
    }
}

/// Independent predicates over search output.
///
/// A route survives when all three hold:
/// - its type matches `route_type`
/// - its total transit time is within `max_transit_days` (if set)
/// - every operating carrier across its segments is in `carriers`
///   (an empty allow-list means no restriction)
#[derive(Debug, Clone, Default)]
pub struct RouteFilter {
    /// Route-type predicate
    pub route_type: RouteTypeFilter,
    /// Inclusive ceiling on total transit days
    pub max_transit_days: Option<u32>,
    /// Carrier allow-list; empty means unrestricted
    pub carriers: Vec<CarrierId>,
}

impl RouteFilter {
    /// Does the route pass all predicates?
    pub fn matches(&self, route: &RouteResult) -> bool {
        if !self.route_type.matches(route.route_type()) {
            return false;
        }

        if let Some(max_days) = self.max_transit_days {
            if route.total_transit_days() > max_days {
                return false;
            }
        }

        if !self.carriers.is_empty() {
            let all_allowed = route
                .carrier_ids()
                .into_iter()
                .all(|carrier| self.carriers.contains(carrier));
            if !all_allowed {
                return false;
            }
        }

        true
    }

    /// Applies the filter, keeping surviving routes in their input order.
    pub fn apply(&self, routes: &[RouteResult]) -> Vec<RouteResult> {
        routes
            .iter()
            .filter(|route| self.matches(route))
            .cloned()
            .collect()
    }
}
