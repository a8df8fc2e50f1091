//! Transshipment connection type.

use std::fmt;

use super::{PortId, ServiceId};

/// Identifier of a transshipment connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Creates a connection id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A directed, operator-certified cargo handoff between two services.
///
/// Declares that cargo arriving at `port` on `service_a` may continue on
/// `service_b` departing the same port. The declaration is directional:
/// A→B at a port is a distinct fact from B→A at that port. Only active
/// connections participate in route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransshipmentConnection {
    /// Catalog identifier
    pub id: ConnectionId,
    /// Service delivering the cargo to the handoff port
    pub service_a: ServiceId,
    /// Service carrying the cargo onward from the handoff port
    pub service_b: ServiceId,
    /// Port where the handoff occurs
    pub port: PortId,
    /// Whether the connection currently participates in search
    pub is_active: bool,
}

impl TransshipmentConnection {
    /// Creates a new connection declaration.
    pub fn new(
        id: ConnectionId,
        service_a: ServiceId,
        service_b: ServiceId,
        port: PortId,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            service_a,
            service_b,
            port,
            is_active,
        }
    }
}
