//! Compute IPv4/IPv6 subnet properties from a CIDR string.
//!
//! [`summarize`] is the whole calculator: it parses and validates the
//! input, detects the address family and derives every subnet property in
//! one pass. Display and export live under [`output`].

pub mod cli;
pub mod error;
pub mod models;
pub mod output;

use lazy_static::lazy_static;
use regex::Regex;
use std::net::IpAddr;

use error::SubnetError;
use models::{Ipv4Cidr, Ipv4Report, Ipv6Cidr, Ipv6Report, SubnetReport};

lazy_static! {
    static ref CIDR_RE: Regex = Regex::new(r"^([^/\s]+)/([^/\s]+)$").expect("Invalid Regex?");
}

/// Parse a CIDR string and derive the full set of subnet properties.
///
/// The report is computed fresh on every call; nothing is cached between
/// invocations.
///
/// # Examples
/// ```
/// use subnet_summary::summarize;
/// let report = summarize("192.168.1.10/24").unwrap();
/// assert_eq!(report.input(), "192.168.1.10/24");
/// ```
pub fn summarize(input: &str) -> Result<SubnetReport, SubnetError> {
    let input = input.trim();
    log::info!("#Start summarize() input={input}");

    let caps = CIDR_RE
        .captures(input)
        .ok_or_else(|| SubnetError::InvalidPrefixFormat(input.to_string()))?;
    let addr_part = caps.get(1).map_or("", |m| m.as_str());
    let prefix_part = caps.get(2).map_or("", |m| m.as_str());

    let addr: IpAddr = addr_part
        .parse()
        .map_err(|_| SubnetError::InvalidAddressFormat(addr_part.to_string()))?;
    let prefix: u32 = prefix_part
        .parse()
        .map_err(|_| SubnetError::InvalidPrefixFormat(prefix_part.to_string()))?;

    let report = match addr {
        IpAddr::V4(addr) => SubnetReport::V4(Ipv4Report::new(Ipv4Cidr::new(addr, prefix)?)),
        IpAddr::V6(addr) => SubnetReport::V6(Ipv6Report::new(Ipv6Cidr::new(addr, prefix)?)),
    };

    log::debug!("summarize() derived {} fields", report.fields().len());
    Ok(report)
}
