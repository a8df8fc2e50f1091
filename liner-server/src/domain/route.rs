//! Route result types.
//!
//! A `RouteResult` is one feasible way to move cargo from the queried
//! origin to the queried destination: either a single service ridden
//! end-to-end (direct), or two services joined by a certified handoff
//! (transshipment). Results are immutable values recomputed fresh on
//! every query; none persist beyond the query's lifetime.

use std::fmt;
use std::sync::Arc;

use super::{CarrierId, ConnectionId, DomainError, Port, Service, ServiceLeg};

/// Fixed allowance, in days, added to transshipment route totals for the
/// gate-in/gate-out dwell at the handoff terminal.
pub const TRANSSHIPMENT_BUFFER_DAYS: u32 = 3;

/// Identifier of a route result within one query's output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteId(String);

impl RouteId {
    /// Creates a route id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classification of a route result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteType {
    /// One service ridden end-to-end
    Direct,
    /// Two services joined by one transshipment handoff
    Transshipment,
}

impl RouteType {
    /// Returns the canonical uppercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::Direct => "DIRECT",
            RouteType::Transshipment => "TRANSSHIPMENT",
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ride on one service within a route.
///
/// Binds the service, the boarding and alighting ports for this route,
/// and the literal sub-sequence of legs traversed. Uses `Arc<Service>`
/// for cheap cloning into result values.
///
/// # Invariants
///
/// - At least one leg
/// - `origin` is the first leg's departure port
/// - `destination` is the last leg's arrival port
/// - `transit_days` is the sum of the legs' transit times
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    service: Arc<Service>,
    origin: Port,
    destination: Port,
    transit_days: u32,
    legs: Vec<ServiceLeg>,
}

impl RouteSegment {
    /// Constructs a segment, validating that the endpoint ports match
    /// the traversed legs. The transit time is computed from the legs.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `legs` is empty or the endpoints don't match.
    pub fn new(
        service: Arc<Service>,
        origin: Port,
        destination: Port,
        legs: Vec<ServiceLeg>,
    ) -> Result<Self, DomainError> {
        let first = legs.first().ok_or(DomainError::EmptySegment)?;
        if first.origin != origin.id {
            return Err(DomainError::InvalidSegment(
                "segment origin must match its first leg",
            ));
        }

        // Non-empty checked above
        let last = &legs[legs.len() - 1];
        if last.destination != destination.id {
            return Err(DomainError::InvalidSegment(
                "segment destination must match its last leg",
            ));
        }

        let transit_days = legs.iter().map(|leg| leg.transit_days).sum();

        Ok(RouteSegment {
            service,
            origin,
            destination,
            transit_days,
            legs,
        })
    }

    /// Returns the service this segment rides.
    pub fn service(&self) -> &Arc<Service> {
        &self.service
    }

    /// Returns the boarding port.
    pub fn origin(&self) -> &Port {
        &self.origin
    }

    /// Returns the alighting port.
    pub fn destination(&self) -> &Port {
        &self.destination
    }

    /// Returns the segment transit time in days.
    pub fn transit_days(&self) -> u32 {
        self.transit_days
    }

    /// Returns the traversed leg sub-sequence.
    pub fn legs(&self) -> &[ServiceLeg] {
        &self.legs
    }

    /// Returns the operating carrier of the segment's service.
    pub fn carrier(&self) -> &CarrierId {
        self.service.carrier()
    }
}

/// One feasible route from the queried origin to the queried destination.
///
/// # Invariants
///
/// - A `Direct` route has exactly one segment and no transshipment port
/// - A `Transshipment` route has exactly two segments and a transshipment
///   port equal to the first segment's destination and the second
///   segment's origin
/// - `total_transit_days` is the segment sum, plus the fixed handoff
///   buffer for transshipment routes
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    id: RouteId,
    route_type: RouteType,
    segments: Vec<RouteSegment>,
    total_transit_days: u32,
    transshipment_port: Option<Port>,
}

impl RouteResult {
    /// Builds a direct route from a single segment.
    ///
    /// The id is derived from the service (`direct-{service}`), so the
    /// same query over the same snapshot reproduces the same id.
    pub fn direct(segment: RouteSegment) -> Self {
        let id = RouteId::new(format!("direct-{}", segment.service().id()));
        let total_transit_days = segment.transit_days();

        RouteResult {
            id,
            route_type: RouteType::Direct,
            segments: vec![segment],
            total_transit_days,
            transshipment_port: None,
        }
    }

    /// Builds a transshipment route from two segments joined at the
    /// handoff port, adding the fixed dwell buffer to the total.
    ///
    /// The id is derived from the connection (`trans-{connection}`).
    ///
    /// # Errors
    ///
    /// Returns `Err` if the first segment doesn't end where the second
    /// begins.
    pub fn transshipment(
        connection: &ConnectionId,
        first: RouteSegment,
        second: RouteSegment,
    ) -> Result<Self, DomainError> {
        if first.destination().id != second.origin().id {
            return Err(DomainError::InvalidRoute(
                "segments must meet at the transshipment port",
            ));
        }

        let transshipment_port = first.destination().clone();
        let total_transit_days =
            first.transit_days() + second.transit_days() + TRANSSHIPMENT_BUFFER_DAYS;

        Ok(RouteResult {
            id: RouteId::new(format!("trans-{}", connection)),
            route_type: RouteType::Transshipment,
            segments: vec![first, second],
            total_transit_days,
            transshipment_port: Some(transshipment_port),
        })
    }

    /// Returns the route id.
    pub fn id(&self) -> &RouteId {
        &self.id
    }

    /// Returns the route classification.
    pub fn route_type(&self) -> RouteType {
        self.route_type
    }

    /// Returns the ordered segments.
    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    /// Returns the total transit time in days, handoff buffer included.
    pub fn total_transit_days(&self) -> u32 {
        self.total_transit_days
    }

    /// Returns the handoff port for transshipment routes.
    pub fn transshipment_port(&self) -> Option<&Port> {
        self.transshipment_port.as_ref()
    }

    /// Returns the distinct operating carriers across the segments, in
    /// segment order.
    pub fn carrier_ids(&self) -> Vec<&CarrierId> {
        let mut carriers: Vec<&CarrierId> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            let carrier = segment.carrier();
            if !carriers.contains(&carrier) {
                carriers.push(carrier);
            }
        }
        carriers
    }

    /// Returns the port the route departs from.
    pub fn origin(&self) -> &Port {
        // At least one segment by construction
        self.segments[0].origin()
    }

    /// Returns the port the route arrives at.
    pub fn destination(&self) -> &Port {
        // At least one segment by construction
        self.segments[self.segments.len() - 1].destination()
    }
}
