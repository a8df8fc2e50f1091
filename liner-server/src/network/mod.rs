//! Network snapshot: the read-only master-data view the engine queries.
//!
//! A `Network` holds the port, carrier, service, and connection catalogs
//! for one search. It is built by the data layer (or from the built-in
//! demo catalog) and never mutated by the engine; concurrent searches
//! over the same snapshot need no coordination.

mod demo;

pub use demo::demo_network;

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{
    Carrier, CarrierId, Locode, Port, PortId, Service, ServiceId, TransshipmentConnection,
};

/// An immutable snapshot of the liner network.
///
/// Services and connections keep their catalog declaration order, which
/// the search phases iterate in.
#[derive(Debug, Clone, Default)]
pub struct Network {
    ports: HashMap<PortId, Port>,
    locode_index: HashMap<Locode, PortId>,
    carriers: Vec<Carrier>,
    services: Vec<Arc<Service>>,
    service_index: HashMap<ServiceId, usize>,
    connections: Vec<TransshipmentConnection>,
}

impl Network {
    /// Looks up a port by id.
    pub fn port(&self, id: &PortId) -> Option<&Port> {
        self.ports.get(id)
    }

    /// Looks up a port by UN/LOCODE.
    pub fn port_by_locode(&self, locode: &Locode) -> Option<&Port> {
        self.locode_index.get(locode).and_then(|id| self.ports.get(id))
    }

    /// Resolves a user-supplied key as a port id first, then as a
    /// UN/LOCODE.
    pub fn resolve_port(&self, key: &str) -> Option<&Port> {
        if let Some(port) = self.ports.get(&PortId::new(key)) {
            return Some(port);
        }
        Locode::parse_normalized(key)
            .ok()
            .and_then(|locode| self.port_by_locode(&locode))
    }

    /// Returns all ports in unspecified order.
    pub fn ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.values()
    }

    /// Returns the number of ports.
    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    /// Returns the carrier catalog in declaration order.
    pub fn carriers(&self) -> &[Carrier] {
        &self.carriers
    }

    /// Looks up a carrier by id.
    pub fn carrier(&self, id: &CarrierId) -> Option<&Carrier> {
        self.carriers.iter().find(|c| &c.id == id)
    }

    /// Returns the service catalog in declaration order.
    pub fn services(&self) -> &[Arc<Service>] {
        &self.services
    }

    /// Looks up a service by id.
    pub fn service(&self, id: &ServiceId) -> Option<&Arc<Service>> {
        self.service_index.get(id).map(|&i| &self.services[i])
    }

    /// Returns the connection catalog in declaration order.
    pub fn connections(&self) -> &[TransshipmentConnection] {
        &self.connections
    }
}

/// Builder for assembling a network snapshot from master data.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    network: Network,
}

impl NetworkBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a port to the catalog.
    pub fn add_port(mut self, port: Port) -> Self {
        self.network
            .locode_index
            .insert(port.locode, port.id.clone());
        self.network.ports.insert(port.id.clone(), port);
        self
    }

    /// Adds a carrier to the catalog.
    pub fn add_carrier(mut self, carrier: Carrier) -> Self {
        self.network.carriers.push(carrier);
        self
    }

    /// Adds a service to the catalog, preserving declaration order.
    pub fn add_service(mut self, service: Service) -> Self {
        let index = self.network.services.len();
        self.network
            .service_index
            .insert(service.id().clone(), index);
        self.network.services.push(Arc::new(service));
        self
    }

    /// Adds a transshipment connection, preserving declaration order.
    pub fn add_connection(mut self, connection: TransshipmentConnection) -> Self {
        self.network.connections.push(connection);
        self
    }

    /// Freezes the snapshot.
    ///
    /// The builder does not verify referential integrity; a service or
    /// connection naming an unknown port or service is a master-data
    /// defect the search engine tolerates record-by-record.
    pub fn build(self) -> Network {
        self.network
    }
}
