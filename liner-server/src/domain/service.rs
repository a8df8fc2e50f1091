//! Liner service types.
//!
//! A `Service` is a carrier's named, coded offering: an ordered chain of
//! scheduled legs describing one simple directed path through the port
//! network. The chain property (each leg departs where the previous one
//! arrived) is enforced at construction time.

use std::fmt;

use super::{CarrierId, DomainError, PortId};

/// Identifier of a service in the master-data catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceId(String);

impl ServiceId {
    /// Creates a service id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a single service leg.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LegId(String);

impl LegId {
    /// Creates a leg id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One scheduled hop of a service.
///
/// Legs of one service nominally name their operating carrier per leg;
/// in practice the legs of a service share the service's carrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceLeg {
    /// Catalog identifier
    pub id: LegId,
    /// Port the leg departs from
    pub origin: PortId,
    /// Port the leg arrives at
    pub destination: PortId,
    /// Scheduled transit time in whole days
    pub transit_days: u32,
    /// Operating carrier for this leg
    pub carrier: CarrierId,
}

impl ServiceLeg {
    /// Creates a new service leg.
    pub fn new(
        id: LegId,
        origin: PortId,
        destination: PortId,
        transit_days: u32,
        carrier: CarrierId,
    ) -> Self {
        Self {
            id,
            origin,
            destination,
            transit_days,
            carrier,
        }
    }
}

/// A carrier's scheduled liner service: an ordered, chained leg sequence.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs chain: `legs[i].destination == legs[i + 1].origin`
///
/// A service MAY call at the same port more than once (loop rotations
/// exist); only the chain property is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    id: ServiceId,
    carrier: CarrierId,
    name: String,
    code: String,
    legs: Vec<ServiceLeg>,
}

impl Service {
    /// Constructs a service, validating the leg chain.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `legs` is empty
    /// - Consecutive legs don't chain (a leg departs from a port other
    ///   than the previous leg's arrival port)
    pub fn new(
        id: ServiceId,
        carrier: CarrierId,
        name: impl Into<String>,
        code: impl Into<String>,
        legs: Vec<ServiceLeg>,
    ) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyService);
        }

        for (i, window) in legs.windows(2).enumerate() {
            if window[0].destination != window[1].origin {
                return Err(DomainError::BrokenChain {
                    service: id,
                    position: i + 1,
                });
            }
        }

        Ok(Service {
            id,
            carrier,
            name: name.into(),
            code: code.into(),
            legs,
        })
    }

    /// Returns the service id.
    pub fn id(&self) -> &ServiceId {
        &self.id
    }

    /// Returns the operating carrier.
    pub fn carrier(&self) -> &CarrierId {
        &self.carrier
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the service code (e.g. "AE1").
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the ordered leg sequence.
    pub fn legs(&self) -> &[ServiceLeg] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns the first port of the rotation.
    pub fn origin_port(&self) -> &PortId {
        // Non-empty by construction
        &self.legs[0].origin
    }

    /// Returns the last port of the rotation.
    pub fn destination_port(&self) -> &PortId {
        // Non-empty by construction
        &self.legs[self.legs.len() - 1].destination
    }

    /// Returns the full ordered port rotation (leg origins plus the
    /// final destination).
    pub fn port_rotation(&self) -> Vec<&PortId> {
        let mut rotation: Vec<&PortId> = self.legs.iter().map(|leg| &leg.origin).collect();
        rotation.push(self.destination_port());
        rotation
    }

    /// Does this service call at the given port anywhere in its rotation?
    pub fn calls_at(&self, port: &PortId) -> bool {
        self.port_rotation().into_iter().any(|p| p == port)
    }
}
