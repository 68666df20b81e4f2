//! Derived subnet report model.
//!
//! A report is computed fresh for every request, is immutable once built,
//! and is discarded after it has been displayed or exported. The ordered
//! [`fields`](SubnetReport::fields) list is the single source for both the
//! terminal display and the text export.

use serde::Serialize;
use std::net::{Ipv4Addr, Ipv6Addr};

use super::ipv4::{AddressClass, Ipv4Cidr};
use super::ipv6::Ipv6Cidr;

/// Derived properties of an IPv4 subnet.
#[derive(Debug, Clone, Serialize)]
pub struct Ipv4Report {
    /// The input as entered, address and prefix.
    pub cidr: Ipv4Cidr,
    /// First address of the subnet block.
    pub network_id: Ipv4Addr,
    /// Historical class of the raw input address.
    pub class: AddressClass,
    /// Subnet mask in dotted-decimal form.
    pub subnet_mask: Ipv4Addr,
    /// Last address of the subnet block.
    pub broadcast: Ipv4Addr,
    /// Host bits right of the prefix boundary.
    pub host_bits: u8,
    /// Total number of addresses in the block.
    pub total_addresses: u64,
    /// Usable host addresses once network and broadcast are reserved.
    pub usable_hosts: u64,
    /// First and last usable host address, if any.
    pub host_range: Option<(Ipv4Addr, Ipv4Addr)>,
}

impl Ipv4Report {
    /// Derive every property of the subnet in one pass.
    pub fn new(cidr: Ipv4Cidr) -> Ipv4Report {
        Ipv4Report {
            network_id: cidr.network_id(),
            class: cidr.class(),
            subnet_mask: cidr.mask(),
            broadcast: cidr.broadcast(),
            host_bits: cidr.host_bits(),
            total_addresses: cidr.num_addresses(),
            usable_hosts: cidr.num_hosts(),
            host_range: cidr.host_range(),
            cidr,
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let host_range = match self.host_range {
            Some((first, last)) => format!("{first} - {last}"),
            None => "None".to_string(),
        };
        vec![
            ("Input IP/CIDR", self.cidr.to_string()),
            ("IP Version", "IPv4".to_string()),
            ("Network ID", self.network_id.to_string()),
            ("Historical Class", self.class.to_string()),
            ("CIDR Prefix", format!("/{}", self.cidr.prefix)),
            ("Subnet Mask", self.subnet_mask.to_string()),
            ("Host Bits", self.host_bits.to_string()),
            ("Total IP Addresses", self.total_addresses.to_string()),
            ("Usable Host Count", self.usable_hosts.to_string()),
            ("Broadcast Address", self.broadcast.to_string()),
            ("Usable Host Range", host_range),
        ]
    }
}

/// Derived properties of an IPv6 subnet.
///
/// No subnet mask rendering, no broadcast address and no historical class.
/// The usable host count equals the total address count.
#[derive(Debug, Clone, Serialize)]
pub struct Ipv6Report {
    /// The input as entered, address and prefix.
    pub cidr: Ipv6Cidr,
    /// First address of the subnet block.
    pub network_id: Ipv6Addr,
    /// Host bits right of the prefix boundary.
    pub host_bits: u8,
    /// Total number of addresses, `None` for a /0 network (2^128).
    pub total_addresses: Option<u128>,
}

impl Ipv6Report {
    /// Derive every property of the subnet in one pass.
    pub fn new(cidr: Ipv6Cidr) -> Ipv6Report {
        Ipv6Report {
            network_id: cidr.network_id(),
            host_bits: cidr.host_bits(),
            total_addresses: cidr.num_addresses(),
            cidr,
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let total = match self.total_addresses {
            Some(n) => n.to_string(),
            None => "2^128".to_string(),
        };
        vec![
            ("Input IP/CIDR", self.cidr.to_string()),
            ("IP Version", "IPv6".to_string()),
            ("Network ID", self.network_id.to_string()),
            ("CIDR Prefix", format!("/{}", self.cidr.prefix)),
            ("Subnet Mask Concept", "Not Applicable (N/A)".to_string()),
            ("Host Bits", self.host_bits.to_string()),
            ("Total IP Addresses", total.clone()),
            ("Usable Host Count", total),
            (
                "Broadcast Address Concept",
                "Not Applicable (Uses Multicast)".to_string(),
            ),
        ]
    }
}

/// A computed subnet report for either address family.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SubnetReport {
    V4(Ipv4Report),
    V6(Ipv6Report),
}

impl SubnetReport {
    /// Ordered label/value pairs for display and export.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            SubnetReport::V4(report) => report.fields(),
            SubnetReport::V6(report) => report.fields(),
        }
    }

    /// The input the report was derived from, in CIDR notation.
    pub fn input(&self) -> String {
        match self {
            SubnetReport::V4(report) => report.cidr.to_string(),
            SubnetReport::V6(report) => report.cidr.to_string(),
        }
    }
}
