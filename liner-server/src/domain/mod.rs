//! Domain types for the liner route planner.
//!
//! This module contains the core domain model types that represent
//! validated liner-shipping master data. Types enforce their invariants
//! at construction time, so code that receives these types can trust
//! their validity.

mod carrier;
mod connection;
mod error;
mod port;
mod route;
mod service;

pub use carrier::{Carrier, CarrierCode, CarrierId, InvalidCarrierCode};
pub use connection::{ConnectionId, TransshipmentConnection};
pub use error::DomainError;
pub use port::{InvalidLocode, Locode, Port, PortId};
pub use route::{RouteId, RouteResult, RouteSegment, RouteType, TRANSSHIPMENT_BUFFER_DAYS};
pub use service::{LegId, Service, ServiceId, ServiceLeg};
