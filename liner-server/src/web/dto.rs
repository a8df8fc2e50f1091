//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Carrier, Port, RouteResult, RouteSegment, ServiceLeg};

/// Query parameters for route search.
#[derive(Debug, Deserialize)]
pub struct RouteSearchParams {
    /// Origin port id or UN/LOCODE
    pub origin: String,

    /// Destination port id or UN/LOCODE
    pub destination: String,

    /// Optional route type filter: ALL, DIRECT, or TRANSSHIPMENT
    pub route_type: Option<String>,

    /// Optional inclusive ceiling on total transit days
    pub max_days: Option<u32>,

    /// Optional comma-separated carrier-id allow-list
    pub carriers: Option<String>,
}

/// A port in API responses.
#[derive(Debug, Serialize)]
pub struct PortDto {
    /// Catalog id
    pub id: String,

    /// Display name
    pub name: String,

    /// UN/LOCODE
    pub locode: String,

    /// Country label
    pub country: String,

    /// Longitude in degrees
    pub lon: f64,

    /// Latitude in degrees
    pub lat: f64,
}

impl PortDto {
    /// Build from a domain port.
    pub fn from_port(port: &Port) -> Self {
        Self {
            id: port.id.as_str().to_string(),
            name: port.name.clone(),
            locode: port.locode.to_string(),
            country: port.country.clone(),
            lon: port.lon,
            lat: port.lat,
        }
    }
}

/// A carrier in API responses.
#[derive(Debug, Serialize)]
pub struct CarrierDto {
    /// Catalog id
    pub id: String,

    /// Trading name
    pub name: String,

    /// Short alpha code
    pub code: String,
}

impl CarrierDto {
    /// Build from a domain carrier.
    pub fn from_carrier(carrier: &Carrier) -> Self {
        Self {
            id: carrier.id.as_str().to_string(),
            name: carrier.name.clone(),
            code: carrier.code.to_string(),
        }
    }
}

/// A leg within a route segment.
#[derive(Debug, Serialize)]
pub struct LegDto {
    /// Catalog id
    pub id: String,

    /// Departure port id
    pub origin: String,

    /// Arrival port id
    pub destination: String,

    /// Transit time in days
    pub transit_days: u32,

    /// Operating carrier id
    pub carrier: String,
}

impl LegDto {
    /// Build from a domain leg.
    pub fn from_leg(leg: &ServiceLeg) -> Self {
        Self {
            id: leg.id.as_str().to_string(),
            origin: leg.origin.as_str().to_string(),
            destination: leg.destination.as_str().to_string(),
            transit_days: leg.transit_days,
            carrier: leg.carrier.as_str().to_string(),
        }
    }
}

/// One ride on one service within a route.
#[derive(Debug, Serialize)]
pub struct SegmentDto {
    /// Service catalog id
    pub service_id: String,

    /// Service code (e.g. "AE1")
    pub service_code: String,

    /// Service display name
    pub service_name: String,

    /// Operating carrier id
    pub carrier: String,

    /// Boarding port
    pub origin: PortDto,

    /// Alighting port
    pub destination: PortDto,

    /// Segment transit time in days
    pub transit_days: u32,

    /// Traversed legs
    pub legs: Vec<LegDto>,
}

impl SegmentDto {
    /// Build from a domain segment.
    pub fn from_segment(segment: &RouteSegment) -> Self {
        Self {
            service_id: segment.service().id().as_str().to_string(),
            service_code: segment.service().code().to_string(),
            service_name: segment.service().name().to_string(),
            carrier: segment.carrier().as_str().to_string(),
            origin: PortDto::from_port(segment.origin()),
            destination: PortDto::from_port(segment.destination()),
            transit_days: segment.transit_days(),
            legs: segment.legs().iter().map(LegDto::from_leg).collect(),
        }
    }
}

/// One route option in search results.
#[derive(Debug, Serialize)]
pub struct RouteDto {
    /// Result id, stable for an unchanged snapshot
    pub id: String,

    /// "DIRECT" or "TRANSSHIPMENT"
    pub route_type: String,

    /// Total transit time in days, handoff dwell included
    pub total_transit_days: u32,

    /// Handoff port, present for transshipment routes
    pub transshipment_port: Option<PortDto>,

    /// Ordered segments
    pub segments: Vec<SegmentDto>,
}

impl RouteDto {
    /// Build from a domain route.
    pub fn from_route(route: &RouteResult) -> Self {
        Self {
            id: route.id().as_str().to_string(),
            route_type: route.route_type().as_str().to_string(),
            total_transit_days: route.total_transit_days(),
            transshipment_port: route.transshipment_port().map(PortDto::from_port),
            segments: route.segments().iter().map(SegmentDto::from_segment).collect(),
        }
    }
}

/// Response for the port catalog.
#[derive(Debug, Serialize)]
pub struct PortListResponse {
    /// Ports sorted by name
    pub ports: Vec<PortDto>,
}

/// Response for the carrier catalog.
#[derive(Debug, Serialize)]
pub struct CarrierListResponse {
    /// Carriers in catalog order
    pub carriers: Vec<CarrierDto>,
}

/// Response for route search.
#[derive(Debug, Serialize)]
pub struct RouteSearchResponse {
    /// Matching routes, sorted ascending by total transit time
    pub routes: Vec<RouteDto>,
}

/// Error body for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}
