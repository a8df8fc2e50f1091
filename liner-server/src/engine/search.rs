//! Route search over a network snapshot.
//!
//! Two independent phases feed one result list: a direct scan over every
//! service, then a one-hop composition over every active transshipment
//! connection. The merged list is stable-sorted ascending by total
//! transit time, so equal totals keep phase order (direct first, then
//! connection declaration order).

use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::{
    ConnectionId, Port, PortId, RouteResult, RouteSegment, Service, ServiceId,
    TransshipmentConnection,
};
use crate::network::Network;

use super::scan::scan_window;

/// Error from route search under the `Propagate` policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A referenced port is absent from the snapshot
    #[error("port {port} is not in the network snapshot")]
    UnresolvedPort { port: PortId },

    /// A connection names a service absent from the snapshot
    #[error("connection {connection} references unknown service {service}")]
    UnresolvedService {
        connection: ConnectionId,
        service: ServiceId,
    },
}

/// What the engine does with a record whose reference doesn't resolve.
///
/// Master data is edited independently of searches, so a dangling
/// reference is an expected condition, not a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingRefPolicy {
    /// Drop the offending record, note it in the report, keep searching.
    #[default]
    SkipAndRecord,
    /// Abort the search with a `SearchError`.
    Propagate,
}

/// Configuration for route search.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Handling of unresolvable service/port references.
    pub missing_refs: MissingRefPolicy,
}

impl SearchConfig {
    /// Create a configuration with the given policy.
    pub fn new(missing_refs: MissingRefPolicy) -> Self {
        Self { missing_refs }
    }
}

/// A record dropped from the search because a reference didn't resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkippedRecord {
    /// A service whose matched route needed a port absent from the snapshot.
    Service { service: ServiceId, port: PortId },
    /// A connection naming an unknown service.
    ConnectionService {
        connection: ConnectionId,
        service: ServiceId,
    },
    /// A connection whose route needed a port absent from the snapshot.
    ConnectionPort {
        connection: ConnectionId,
        port: PortId,
    },
}

/// Result of a route search.
#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    /// Found routes, sorted ascending by total transit time.
    pub routes: Vec<RouteResult>,

    /// Records dropped under `MissingRefPolicy::SkipAndRecord`.
    pub skipped: Vec<SkippedRecord>,
}

impl SearchReport {
    /// Create an empty report.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Route planner over an immutable network snapshot.
///
/// Holds no state of its own; every call to [`Planner::search`] is an
/// independent, side-effect-free computation, so one planner may serve
/// concurrent queries.
pub struct Planner<'a> {
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(config: &'a SearchConfig) -> Self {
        Self { config }
    }

    /// Search for routes from `origin` to `destination`.
    ///
    /// `origin != destination` is the caller's precondition; the engine
    /// does not check it and its output for equal ports is unspecified.
    /// An empty route list is a valid "no route found" answer.
    pub fn search(
        &self,
        origin: &PortId,
        destination: &PortId,
        network: &Network,
    ) -> Result<SearchReport, SearchError> {
        let mut routes = Vec::new();
        let mut skipped = Vec::new();

        self.scan_direct(origin, destination, network, &mut routes, &mut skipped)?;
        let direct_count = routes.len();

        self.compose_transshipments(origin, destination, network, &mut routes, &mut skipped)?;
        let transshipment_count = routes.len() - direct_count;

        // Stable: ties keep phase order
        routes.sort_by_key(|route| route.total_transit_days());

        debug!(
            direct = direct_count,
            transshipment = transshipment_count,
            skipped = skipped.len(),
            "route search complete"
        );

        Ok(SearchReport { routes, skipped })
    }

    /// Phase one: each service may contribute at most one direct route.
    fn scan_direct(
        &self,
        origin: &PortId,
        destination: &PortId,
        network: &Network,
        routes: &mut Vec<RouteResult>,
        skipped: &mut Vec<SkippedRecord>,
    ) -> Result<(), SearchError> {
        for service in network.services() {
            let Some(window) = scan_window(service.legs(), origin, destination) else {
                continue;
            };
            trace!(service = %service.id(), days = window.transit_days, "direct window matched");

            let Some(origin_port) = self.resolve_port(
                network,
                origin,
                || SkippedRecord::Service {
                    service: service.id().clone(),
                    port: origin.clone(),
                },
                skipped,
            )?
            else {
                continue;
            };
            let Some(destination_port) = self.resolve_port(
                network,
                destination,
                || SkippedRecord::Service {
                    service: service.id().clone(),
                    port: destination.clone(),
                },
                skipped,
            )?
            else {
                continue;
            };

            let legs = service.legs()[window.start..=window.end].to_vec();
            let Ok(segment) = RouteSegment::new(
                service.clone(),
                origin_port.clone(),
                destination_port.clone(),
                legs,
            ) else {
                continue;
            };

            routes.push(RouteResult::direct(segment));
        }

        Ok(())
    }

    /// Phase two: each active connection may contribute at most one
    /// transshipment route, composed of a ride on service A to the
    /// handoff port and a ride on service B onward.
    fn compose_transshipments(
        &self,
        origin: &PortId,
        destination: &PortId,
        network: &Network,
        routes: &mut Vec<RouteResult>,
        skipped: &mut Vec<SkippedRecord>,
    ) -> Result<(), SearchError> {
        for conn in network.connections() {
            if !conn.is_active {
                continue;
            }

            let Some(service_a) = self.resolve_service(network, conn, &conn.service_a, skipped)?
            else {
                continue;
            };
            let Some(service_b) = self.resolve_service(network, conn, &conn.service_b, skipped)?
            else {
                continue;
            };
            let Some(transfer_port) = self.resolve_port(
                network,
                &conn.port,
                || SkippedRecord::ConnectionPort {
                    connection: conn.id.clone(),
                    port: conn.port.clone(),
                },
                skipped,
            )?
            else {
                continue;
            };

            let Some(window_a) = scan_window(service_a.legs(), origin, &conn.port) else {
                continue;
            };
            let Some(window_b) = scan_window(service_b.legs(), &conn.port, destination) else {
                continue;
            };
            trace!(
                connection = %conn.id,
                days_a = window_a.transit_days,
                days_b = window_b.transit_days,
                "transshipment composed"
            );

            let Some(origin_port) = self.resolve_port(
                network,
                origin,
                || SkippedRecord::ConnectionPort {
                    connection: conn.id.clone(),
                    port: origin.clone(),
                },
                skipped,
            )?
            else {
                continue;
            };
            let Some(destination_port) = self.resolve_port(
                network,
                destination,
                || SkippedRecord::ConnectionPort {
                    connection: conn.id.clone(),
                    port: destination.clone(),
                },
                skipped,
            )?
            else {
                continue;
            };

            let legs_a = service_a.legs()[window_a.start..=window_a.end].to_vec();
            let Ok(first) = RouteSegment::new(
                service_a.clone(),
                origin_port.clone(),
                transfer_port.clone(),
                legs_a,
            ) else {
                continue;
            };

            let legs_b = service_b.legs()[window_b.start..=window_b.end].to_vec();
            let Ok(second) = RouteSegment::new(
                service_b.clone(),
                transfer_port.clone(),
                destination_port.clone(),
                legs_b,
            ) else {
                continue;
            };

            let Ok(route) = RouteResult::transshipment(&conn.id, first, second) else {
                continue;
            };
            routes.push(route);
        }

        Ok(())
    }

    fn resolve_port<'n>(
        &self,
        network: &'n Network,
        port: &PortId,
        record: impl FnOnce() -> SkippedRecord,
        skipped: &mut Vec<SkippedRecord>,
    ) -> Result<Option<&'n Port>, SearchError> {
        match network.port(port) {
            Some(found) => Ok(Some(found)),
            None => match self.config.missing_refs {
                MissingRefPolicy::SkipAndRecord => {
                    skipped.push(record());
                    Ok(None)
                }
                MissingRefPolicy::Propagate => {
                    Err(SearchError::UnresolvedPort { port: port.clone() })
                }
            },
        }
    }

    fn resolve_service<'n>(
        &self,
        network: &'n Network,
        conn: &TransshipmentConnection,
        service: &ServiceId,
        skipped: &mut Vec<SkippedRecord>,
    ) -> Result<Option<&'n Arc<Service>>, SearchError> {
        match network.service(service) {
            Some(found) => Ok(Some(found)),
            None => match self.config.missing_refs {
                MissingRefPolicy::SkipAndRecord => {
                    skipped.push(SkippedRecord::ConnectionService {
                        connection: conn.id.clone(),
                        service: service.clone(),
                    });
                    Ok(None)
                }
                MissingRefPolicy::Propagate => Err(SearchError::UnresolvedService {
                    connection: conn.id.clone(),
                    service: service.clone(),
                }),
            },
        }
    }
}

/// Search for routes with the default configuration, discarding the
/// skip report.
///
/// This is the plain query surface: origin, destination, snapshot in;
/// sorted routes out. `origin != destination` is the caller's
/// precondition, as for [`Planner::search`].
pub fn find_routes(origin: &PortId, destination: &PortId, network: &Network) -> Vec<RouteResult> {
    let config = SearchConfig::default();
    Planner::new(&config)
        .search(origin, destination, network)
        .map(|report| report.routes)
        .unwrap_or_default()
}
