//! Integration tests for subnet-summary
//!
//! These tests verify the complete workflow from parsing a CIDR string to
//! exporting the rendered report.

use std::net::Ipv4Addr;

use subnet_summary::error::SubnetError;
use subnet_summary::models::ipv4;
use subnet_summary::models::SubnetReport;
use subnet_summary::output::{export_report, render_report};
use subnet_summary::summarize;

#[test]
fn test_ipv4_example_192_168_1_10() {
    let report = match summarize("192.168.1.10/24").expect("Failed to summarize") {
        SubnetReport::V4(report) => report,
        SubnetReport::V6(_) => panic!("Expected an IPv4 report"),
    };

    assert_eq!(report.network_id, Ipv4Addr::new(192, 168, 1, 0));
    assert_eq!(report.subnet_mask, Ipv4Addr::new(255, 255, 255, 0));
    assert_eq!(report.broadcast, Ipv4Addr::new(192, 168, 1, 255));
    assert_eq!(report.total_addresses, 256);
    assert_eq!(report.usable_hosts, 254);
    assert_eq!(
        report.host_range,
        Some((
            Ipv4Addr::new(192, 168, 1, 1),
            Ipv4Addr::new(192, 168, 1, 254)
        ))
    );
    assert_eq!(report.class.to_string(), "Class C");
}

#[test]
fn test_ipv4_example_10_0_0_1() {
    let report = match summarize("10.0.0.1/8").expect("Failed to summarize") {
        SubnetReport::V4(report) => report,
        SubnetReport::V6(_) => panic!("Expected an IPv4 report"),
    };

    assert_eq!(report.network_id, Ipv4Addr::new(10, 0, 0, 0));
    assert_eq!(report.total_addresses, 16777216);
    assert_eq!(report.class.to_string(), "Class A");
}

#[test]
fn test_ipv4_invariants_across_prefixes() {
    // network AND NOT mask == 0, broadcast == network OR NOT mask,
    // total == 2^(32-prefix)
    for prefix in 0..=32u8 {
        let report = match summarize(&format!("203.0.113.77/{prefix}")).expect("Failed to summarize")
        {
            SubnetReport::V4(report) => report,
            SubnetReport::V6(_) => panic!("Expected an IPv4 report"),
        };

        let network = u32::from(report.network_id);
        let mask = u32::from(report.subnet_mask);
        assert_eq!(network & !mask, 0);
        assert_eq!(u32::from(report.broadcast), network | !mask);
        assert_eq!(report.total_addresses, 1u64 << (32 - prefix));
        assert_eq!(mask, ipv4::subnet_mask(prefix).unwrap());
    }
}

#[test]
fn test_network_id_round_trip() {
    let report = match summarize("172.16.42.9/20").expect("Failed to summarize") {
        SubnetReport::V4(report) => report,
        SubnetReport::V6(_) => panic!("Expected an IPv4 report"),
    };

    let rendered = report.network_id.to_string();
    let reparsed: Ipv4Addr = rendered.parse().expect("Failed to re-parse network ID");
    assert_eq!(reparsed, report.network_id);
}

#[test]
fn test_error_taxonomy() {
    assert!(matches!(
        summarize("300.1.1.1/24").unwrap_err(),
        SubnetError::InvalidAddressFormat(_)
    ));
    assert!(matches!(
        summarize("10.0.0.0/40").unwrap_err(),
        SubnetError::PrefixOutOfRange { prefix: 40, max: 32 }
    ));
    assert!(matches!(
        summarize("10.0.0.0").unwrap_err(),
        SubnetError::InvalidPrefixFormat(_)
    ));
    assert!(matches!(
        summarize("10.0.0.0/").unwrap_err(),
        SubnetError::InvalidPrefixFormat(_)
    ));
}

#[test]
fn test_ipv6_workflow() {
    let report = match summarize("2001:db8::1/64").expect("Failed to summarize") {
        SubnetReport::V6(report) => report,
        SubnetReport::V4(_) => panic!("Expected an IPv6 report"),
    };

    assert_eq!(report.network_id.to_string(), "2001:db8::");
    assert_eq!(report.host_bits, 64);
    assert_eq!(report.total_addresses, Some(1u128 << 64));
}

#[test]
fn test_export_round_trip() {
    let dir = tempfile::tempdir().expect("Error creating temp dir");
    let path = dir.path().join("subnet_report.txt");

    let report = summarize("192.168.1.10/24").expect("Failed to summarize");
    export_report(&report, &path, false).expect("Failed to export report");

    let content = std::fs::read_to_string(&path).expect("Failed to read report");
    // every field line from the in-memory rendering lands in the file
    for line in render_report(&report).lines().skip(3) {
        assert!(content.contains(line), "missing line: {line}");
    }

    // second export without consent fails and leaves the file alone
    let err = export_report(&report, &path, false).unwrap_err();
    assert!(matches!(err, SubnetError::ExportFailed { .. }));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), content);

    // with consent it succeeds
    export_report(&report, &path, true).expect("Failed to re-export report");
}

#[test]
fn test_report_json_view() {
    let report = summarize("192.168.1.10/24").expect("Failed to summarize");
    let json = serde_json::to_value(&report).expect("Failed to serialize report");
    assert_eq!(json["network_id"], "192.168.1.0");
    assert_eq!(json["usable_hosts"], 254);
}
