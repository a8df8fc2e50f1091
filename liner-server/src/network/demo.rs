//! Built-in demo catalog.
//!
//! A small but realistic world network of deep-sea liner services, used
//! by the binary when no external master data is wired in, and by the
//! scenario tests.

use crate::domain::{
    Carrier, CarrierCode, CarrierId, ConnectionId, LegId, Locode, Port, PortId, Service,
    ServiceId, ServiceLeg, TransshipmentConnection,
};

use super::{Network, NetworkBuilder};

/// (id, name, locode, country, lon, lat)
const PORTS: &[(&str, &str, &str, &str, f64, f64)] = &[
    // Asia
    ("cnsha", "Shanghai", "CNSHA", "China", 121.4737, 31.2304),
    ("sgsin", "Singapore", "SGSIN", "Singapore", 103.8198, 1.3521),
    ("krpus", "Busan", "KRPUS", "South Korea", 129.0756, 35.1796),
    ("jptyo", "Tokyo", "JPTYO", "Japan", 139.6917, 35.6895),
    ("cnngb", "Ningbo", "CNNGB", "China", 121.6186, 29.8683),
    ("cnszx", "Shenzhen", "CNSZX", "China", 114.1095, 22.5431),
    ("hkhkg", "Hong Kong", "HKHKG", "Hong Kong", 114.1694, 22.3193),
    ("mypkg", "Port Klang", "MYPKG", "Malaysia", 101.3928, 3.0),
    ("twkhh", "Kaohsiung", "TWKHH", "Taiwan", 120.312, 22.6273),
    // Middle East
    ("aejea", "Jebel Ali", "AEJEA", "UAE", 55.0273, 25.0228),
    // Europe
    ("nlrtm", "Rotterdam", "NLRTM", "Netherlands", 4.47917, 51.9225),
    ("deham", "Hamburg", "DEHAM", "Germany", 9.9937, 53.5511),
    ("beanr", "Antwerp", "BEANR", "Belgium", 4.4025, 51.2194),
    ("gbfxt", "Felixstowe", "GBFXT", "UK", 1.3513, 51.9614),
    ("frleh", "Le Havre", "FRLEH", "France", 0.1079, 49.4944),
    ("esvlc", "Valencia", "ESVLC", "Spain", -0.3763, 39.4699),
    ("esbcn", "Barcelona", "ESBCN", "Spain", 2.1734, 41.3851),
    // North America
    ("uslax", "Los Angeles", "USLAX", "USA", -118.2437, 34.0522),
    ("usnyc", "New York", "USNYC", "USA", -74.006, 40.7128),
    ("cavan", "Vancouver", "CAVAN", "Canada", -123.1207, 49.2827),
    ("ussav", "Savannah", "USSAV", "USA", -81.0998, 32.0835),
    ("usoak", "Oakland", "USOAK", "USA", -122.2711, 37.8044),
    ("usorf", "Norfolk", "USORF", "USA", -76.2859, 36.8508),
    // South America
    ("brssz", "Santos", "BRSSZ", "Brazil", -46.308, -23.961),
];

/// (id, name, code)
const CARRIERS: &[(&str, &str, &str)] = &[
    ("maersk", "Maersk Line", "MSK"),
    ("msc", "MSC", "MSC"),
    ("cma-cgm", "CMA CGM", "CMA"),
    ("hapag", "Hapag-Lloyd", "HPL"),
    ("evergreen", "Evergreen", "EMC"),
    ("one", "ONE", "ONE"),
];

/// (id, carrier, name, code, legs as (origin, destination, days))
const SERVICES: &[(&str, &str, &str, &str, &[(&str, &str, u32)])] = &[
    (
        "ae1",
        "maersk",
        "AE1 (Asia-Europe 1)",
        "AE1",
        &[
            ("cnsha", "sgsin", 6),
            ("sgsin", "nlrtm", 23),
            ("nlrtm", "deham", 2),
        ],
    ),
    (
        "tp1",
        "msc",
        "TP1 (Transpacific 1)",
        "TP1",
        &[("cnsha", "krpus", 3), ("krpus", "uslax", 12)],
    ),
    (
        "fal1",
        "cma-cgm",
        "FAL1 (French Asia Line)",
        "FAL1",
        &[
            ("jptyo", "cnsha", 4),
            ("cnsha", "sgsin", 6),
            ("sgsin", "aejea", 10),
            ("aejea", "nlrtm", 18),
        ],
    ),
    (
        "at1",
        "hapag",
        "AT1 (Atlantic 1)",
        "AT1",
        &[("deham", "nlrtm", 1), ("nlrtm", "usnyc", 9)],
    ),
    (
        "sa1",
        "maersk",
        "SA1 (South America 1)",
        "SA1",
        &[("nlrtm", "brssz", 18)],
    ),
    (
        "ae2",
        "msc",
        "AE2 (Lion Service)",
        "AE2",
        &[
            ("cnngb", "cnszx", 2),
            ("cnszx", "mypkg", 4),
            ("mypkg", "beanr", 22),
            ("beanr", "frleh", 2),
        ],
    ),
    (
        "tp2",
        "cma-cgm",
        "TP2 (Pearl River Express)",
        "TP2",
        &[
            ("hkhkg", "cnszx", 1),
            ("cnszx", "cavan", 16),
            ("cavan", "usoak", 4),
        ],
    ),
    (
        "med1",
        "maersk",
        "MED1 (AE12)",
        "MED1",
        &[
            ("sgsin", "aejea", 9),
            ("aejea", "esbcn", 14),
            ("esbcn", "esvlc", 2),
        ],
    ),
    (
        "ax1",
        "hapag",
        "AX1 (Atlantic Express)",
        "AX1",
        &[("beanr", "usorf", 11), ("usorf", "ussav", 3)],
    ),
];

/// (id, service_a, service_b, port, is_active)
const CONNECTIONS: &[(&str, &str, &str, &str, bool)] = &[
    ("tc1", "ae1", "sa1", "nlrtm", true),
    ("tc2", "fal1", "at1", "nlrtm", true),
    ("tc3", "ae2", "ax1", "beanr", true),
    ("tc4", "ae1", "med1", "sgsin", true),
];

/// Builds the demo network snapshot.
///
/// Entries that fail validation are skipped, mirroring how master data
/// is ingested record-by-record.
pub fn demo_network() -> Network {
    let mut builder = NetworkBuilder::new();

    for &(id, name, locode, country, lon, lat) in PORTS {
        if let Ok(locode) = Locode::parse(locode) {
            builder =
                builder.add_port(Port::new(PortId::new(id), name, locode, country, lon, lat));
        }
    }

    for &(id, name, code) in CARRIERS {
        if let Ok(code) = CarrierCode::parse(code) {
            builder = builder.add_carrier(Carrier::new(CarrierId::new(id), name, code));
        }
    }

    for &(id, carrier, name, code, leg_defs) in SERVICES {
        let legs: Vec<ServiceLeg> = leg_defs
            .iter()
            .enumerate()
            .map(|(i, &(origin, destination, days))| {
                ServiceLeg::new(
                    LegId::new(format!("{}-{}", id, i + 1)),
                    PortId::new(origin),
                    PortId::new(destination),
                    days,
                    CarrierId::new(carrier),
                )
            })
            .collect();

        if let Ok(service) = Service::new(
            ServiceId::new(id),
            CarrierId::new(carrier),
            name,
            code,
            legs,
        ) {
            builder = builder.add_service(service);
        }
    }

    for &(id, service_a, service_b, port, is_active) in CONNECTIONS {
        builder = builder.add_connection(TransshipmentConnection::new(
            ConnectionId::new(id),
            ServiceId::new(service_a),
            ServiceId::new(service_b),
            PortId::new(port),
            is_active,
        ));
    }

    builder.build()
}
