//! Scenario tests for route search, using the demo catalog and
//! hand-built fixtures.

use crate::domain::{
    CarrierId, ConnectionId, LegId, Locode, Port, PortId, RouteType, Service, ServiceId,
    ServiceLeg, TRANSSHIPMENT_BUFFER_DAYS, TransshipmentConnection,
};
use crate::network::{Network, NetworkBuilder, demo_network};

use super::{RouteFilter, RouteTypeFilter, find_routes};

fn pid(id: &str) -> PortId {
    PortId::new(id)
}

fn port(id: &str, locode: &str) -> Port {
    Port::new(
        pid(id),
        id.to_uppercase(),
        Locode::parse(locode).unwrap(),
        "Testland",
        0.0,
        0.0,
    )
}

fn leg(id: &str, origin: &str, destination: &str, days: u32, carrier: &str) -> ServiceLeg {
    ServiceLeg::new(
        LegId::new(id),
        pid(origin),
        pid(destination),
        days,
        CarrierId::new(carrier),
    )
}

fn service(id: &str, carrier: &str, legs: Vec<ServiceLeg>) -> Service {
    Service::new(
        ServiceId::new(id),
        CarrierId::new(carrier),
        id.to_uppercase(),
        id.to_uppercase(),
        legs,
    )
    .unwrap()
}

fn connection(id: &str, a: &str, b: &str, at: &str, active: bool) -> TransshipmentConnection {
    TransshipmentConnection::new(
        ConnectionId::new(id),
        ServiceId::new(a),
        ServiceId::new(b),
        pid(at),
        active,
    )
}

/// Three ports, a through service, a feeder pair with a connection, and
/// a slow independent direct service. The connection's active flag is
/// parameterized.
fn toggle_fixture(active: bool) -> Network {
    NetworkBuilder::new()
        .add_port(port("aaa", "AAAAA"))
        .add_port(port("bbb", "BBBBB"))
        .add_port(port("ccc", "CCCCC"))
        .add_service(service("s1", "maersk", vec![leg("l1", "aaa", "bbb", 5, "maersk")]))
        .add_service(service("s2", "msc", vec![leg("l2", "bbb", "ccc", 7, "msc")]))
        .add_service(service("s3", "hapag", vec![leg("l3", "aaa", "ccc", 40, "hapag")]))
        .add_connection(connection("tc1", "s1", "s2", "bbb", active))
        .build()
}

#[test]
fn shanghai_to_rotterdam_yields_two_direct_routes() {
    let network = demo_network();
    let routes = find_routes(&pid("cnsha"), &pid("nlrtm"), &network);

    assert_eq!(routes.len(), 2);

    assert_eq!(routes[0].id().as_str(), "direct-ae1");
    assert_eq!(routes[0].route_type(), RouteType::Direct);
    assert_eq!(routes[0].total_transit_days(), 29);
    assert_eq!(routes[0].segments().len(), 1);
    assert_eq!(routes[0].segments()[0].legs().len(), 2);

    assert_eq!(routes[1].id().as_str(), "direct-fal1");
    assert_eq!(routes[1].total_transit_days(), 34);
}

#[test]
fn shanghai_to_hamburg_spans_the_full_rotation() {
    let network = demo_network();
    let routes = find_routes(&pid("cnsha"), &pid("deham"), &network);

    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].id().as_str(), "direct-ae1");
    assert_eq!(routes[0].total_transit_days(), 31);
    assert_eq!(routes[0].segments()[0].legs().len(), 3);
}

#[test]
fn shanghai_to_santos_transships_at_rotterdam() {
    let network = demo_network();
    let routes = find_routes(&pid("cnsha"), &pid("brssz"), &network);

    assert_eq!(routes.len(), 1);
    let route = &routes[0];

    assert_eq!(route.id().as_str(), "trans-tc1");
    assert_eq!(route.route_type(), RouteType::Transshipment);
    assert_eq!(route.segments().len(), 2);
    assert_eq!(
        route.transshipment_port().map(|p| p.id.as_str()),
        Some("nlrtm")
    );

    // 29 days Shanghai->Rotterdam on AE1, 18 days onward on SA1, plus dwell
    assert_eq!(
        route.total_transit_days(),
        29 + 18 + TRANSSHIPMENT_BUFFER_DAYS
    );
    assert_eq!(
        route.segments()[0].transit_days() + route.segments()[1].transit_days()
            + TRANSSHIPMENT_BUFFER_DAYS,
        route.total_transit_days()
    );
}

#[test]
fn tokyo_to_new_york_composes_fal1_and_at1() {
    let network = demo_network();
    let routes = find_routes(&pid("jptyo"), &pid("usnyc"), &network);

    assert_eq!(routes.len(), 1);
    let route = &routes[0];

    assert_eq!(route.id().as_str(), "trans-tc2");
    assert_eq!(route.segments()[0].service().id().as_str(), "fal1");
    assert_eq!(route.segments()[1].service().id().as_str(), "at1");
    assert_eq!(route.total_transit_days(), 38 + 9 + TRANSSHIPMENT_BUFFER_DAYS);
}

#[test]
fn hamburg_to_new_york_rides_at1_across_two_legs() {
    let network = demo_network();
    let routes = find_routes(&pid("deham"), &pid("usnyc"), &network);

    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].id().as_str(), "direct-at1");
    assert_eq!(routes[0].total_transit_days(), 10);
    assert_eq!(routes[0].segments()[0].legs().len(), 2);
}

#[test]
fn unreachable_destination_yields_empty_list() {
    let network = demo_network();

    // Kaohsiung is in the port catalog but no service calls there
    let routes = find_routes(&pid("cnsha"), &pid("twkhh"), &network);
    assert!(routes.is_empty());
}

#[test]
fn deactivating_a_connection_removes_only_its_route() {
    let active = toggle_fixture(true);
    let routes = find_routes(&pid("aaa"), &pid("ccc"), &active);
    let ids: Vec<&str> = routes.iter().map(|r| r.id().as_str()).collect();
    assert_eq!(ids, vec!["trans-tc1", "direct-s3"]);

    let inactive = toggle_fixture(false);
    let routes = find_routes(&pid("aaa"), &pid("ccc"), &inactive);
    let ids: Vec<&str> = routes.iter().map(|r| r.id().as_str()).collect();
    assert_eq!(ids, vec!["direct-s3"]);
}

#[test]
fn equal_totals_keep_direct_before_transshipment() {
    // Direct 10 days; transshipment 4 + 3 + 3-day dwell = 10 days
    let network = NetworkBuilder::new()
        .add_port(port("aaa", "AAAAA"))
        .add_port(port("bbb", "BBBBB"))
        .add_port(port("xxx", "XXXXX"))
        .add_service(service("s1", "maersk", vec![leg("l1", "aaa", "bbb", 10, "maersk")]))
        .add_service(service("s2", "msc", vec![leg("l2", "aaa", "xxx", 4, "msc")]))
        .add_service(service("s3", "msc", vec![leg("l3", "xxx", "bbb", 3, "msc")]))
        .add_connection(connection("tc1", "s2", "s3", "xxx", true))
        .build();

    let routes = find_routes(&pid("aaa"), &pid("bbb"), &network);

    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].total_transit_days(), routes[1].total_transit_days());
    assert_eq!(routes[0].route_type(), RouteType::Direct);
    assert_eq!(routes[1].route_type(), RouteType::Transshipment);
}

#[test]
fn results_are_recomputed_identically() {
    let network = demo_network();

    let first = find_routes(&pid("cnsha"), &pid("nlrtm"), &network);
    let second = find_routes(&pid("cnsha"), &pid("nlrtm"), &network);
    assert_eq!(first, second);
}

#[test]
fn filtered_demo_search_keeps_sort_order() {
    let network = demo_network();
    let routes = find_routes(&pid("cnsha"), &pid("nlrtm"), &network);

    let filter = RouteFilter {
        route_type: RouteTypeFilter::Direct,
        max_transit_days: Some(60),
        carriers: Vec::new(),
    };

    let kept = filter.apply(&routes);
    assert!(!kept.is_empty());
    assert!(kept
        .windows(2)
        .all(|w| w[0].total_transit_days() <= w[1].total_transit_days()));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    const PORT_COUNT: usize = 6;

    /// A raw service: a node walk over port indices with per-leg days.
    /// Entry i supplies the leg from node i to node i+1 (the last entry's
    /// day value is unused).
    type RawService = Vec<(usize, u32)>;

    /// A raw connection: service seeds, handoff port index, active flag.
    type RawConnection = (usize, usize, usize, bool);

    fn arb_services() -> impl Strategy<Value = Vec<RawService>> {
        proptest::collection::vec(
            proptest::collection::vec((0..PORT_COUNT, 0u32..30), 2..6),
            1..5,
        )
    }

    fn arb_connections() -> impl Strategy<Value = Vec<RawConnection>> {
        proptest::collection::vec(
            (0usize..8, 0usize..8, 0..PORT_COUNT, proptest::bool::ANY),
            0..5,
        )
    }

    fn arb_query() -> impl Strategy<Value = (PortId, PortId)> {
        (0..PORT_COUNT, 0..PORT_COUNT)
            .prop_filter("origin and destination must differ", |(a, b)| a != b)
            .prop_map(|(a, b)| (pid(&format!("p{a}")), pid(&format!("p{b}"))))
    }

    fn build_network(services: &[RawService], connections: &[RawConnection]) -> Network {
        let mut builder = NetworkBuilder::new();

        for i in 0..PORT_COUNT {
            // Place codes stay alphabetic: A-F for indices 0-5
            let letter = (b'A' + i as u8) as char;
            let locode = format!("ZZAA{letter}");
            builder = builder.add_port(port(
                &format!("p{i}"),
                &locode,
            ));
        }

        for (s, walk) in services.iter().enumerate() {
            let carrier = if s % 2 == 0 { "c0" } else { "c1" };
            let legs: Vec<ServiceLeg> = walk
                .windows(2)
                .enumerate()
                .map(|(i, pair)| {
                    leg(
                        &format!("s{s}-{i}"),
                        &format!("p{}", pair[0].0),
                        &format!("p{}", pair[1].0),
                        pair[0].1,
                        carrier,
                    )
                })
                .collect();
            builder = builder.add_service(service(&format!("s{s}"), carrier, legs));
        }

        for (c, &(a_seed, b_seed, port_idx, active)) in connections.iter().enumerate() {
            let a = a_seed % services.len();
            let b = b_seed % services.len();
            builder = builder.add_connection(connection(
                &format!("tc{c}"),
                &format!("s{a}"),
                &format!("s{b}"),
                &format!("p{port_idx}"),
                active,
            ));
        }

        builder.build()
    }

    proptest! {
        /// Output is always sorted non-decreasing by total transit time.
        #[test]
        fn output_is_sorted(
            services in arb_services(),
            connections in arb_connections(),
            (origin, destination) in arb_query(),
        ) {
            let network = build_network(&services, &connections);
            let routes = find_routes(&origin, &destination, &network);

            prop_assert!(routes
                .windows(2)
                .all(|w| w[0].total_transit_days() <= w[1].total_transit_days()));
        }

        /// Re-running an unchanged query reproduces the output exactly.
        #[test]
        fn search_is_idempotent(
            services in arb_services(),
            connections in arb_connections(),
            (origin, destination) in arb_query(),
        ) {
            let network = build_network(&services, &connections);

            let first = find_routes(&origin, &destination, &network);
            let second = find_routes(&origin, &destination, &network);
            prop_assert_eq!(first, second);
        }

        /// Every result satisfies its structural invariants.
        #[test]
        fn results_satisfy_invariants(
            services in arb_services(),
            connections in arb_connections(),
            (origin, destination) in arb_query(),
        ) {
            let network = build_network(&services, &connections);

            for route in find_routes(&origin, &destination, &network) {
                match route.route_type() {
                    RouteType::Direct => {
                        prop_assert_eq!(route.segments().len(), 1);
                        prop_assert!(route.transshipment_port().is_none());

                        let segment = &route.segments()[0];
                        prop_assert_eq!(&segment.legs()[0].origin, &origin);
                        prop_assert_eq!(
                            &segment.legs()[segment.legs().len() - 1].destination,
                            &destination
                        );
                        prop_assert_eq!(route.total_transit_days(), segment.transit_days());
                    }
                    RouteType::Transshipment => {
                        prop_assert_eq!(route.segments().len(), 2);

                        let hub = route.transshipment_port();
                        prop_assert!(hub.is_some());
                        let hub_id = hub.map(|p| p.id.clone());
                        prop_assert_eq!(
                            hub_id.as_ref(),
                            Some(&route.segments()[0].destination().id)
                        );
                        prop_assert_eq!(
                            hub_id.as_ref(),
                            Some(&route.segments()[1].origin().id)
                        );

                        prop_assert_eq!(
                            route.total_transit_days(),
                            route.segments()[0].transit_days()
                                + route.segments()[1].transit_days()
                                + TRANSSHIPMENT_BUFFER_DAYS
                        );
                    }
                }
            }
        }

        /// Filtering never reorders surviving routes.
        #[test]
        fn filtering_preserves_order(
            services in arb_services(),
            connections in arb_connections(),
            (origin, destination) in arb_query(),
            type_seed in 0u8..3,
            max_days in proptest::option::of(0u32..120),
            allow_c0 in proptest::bool::ANY,
            allow_c1 in proptest::bool::ANY,
        ) {
            let network = build_network(&services, &connections);
            let routes = find_routes(&origin, &destination, &network);

            let route_type = match type_seed {
                0 => RouteTypeFilter::All,
                1 => RouteTypeFilter::Direct,
                _ => RouteTypeFilter::Transshipment,
            };
            let mut carriers = Vec::new();
            if allow_c0 {
                carriers.push(CarrierId::new("c0"));
            }
            if allow_c1 {
                carriers.push(CarrierId::new("c1"));
            }

            let filter = RouteFilter { route_type, max_transit_days: max_days, carriers };
            let kept = filter.apply(&routes);

            // Surviving routes must be a subsequence of the input
            let mut cursor = 0;
            for route in &kept {
                let found = routes[cursor..]
                    .iter()
                    .position(|r| r == route);
                prop_assert!(found.is_some());
                cursor += found.unwrap_or(0) + 1;
            }
        }
    }
}
