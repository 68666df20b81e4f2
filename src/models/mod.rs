//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures used throughout the tool:
//! - [`Ipv4Cidr`] and [`Ipv6Cidr`] - an address paired with its prefix length
//! - [`AddressClass`] - the historical IPv4 class
//! - [`SubnetReport`] - the derived properties of one subnet

pub mod ipv4;
pub mod ipv6;
mod report;

// Re-export public types
pub use ipv4::{AddressClass, Ipv4Cidr};
pub use ipv6::Ipv6Cidr;
pub use report::{Ipv4Report, Ipv6Report, SubnetReport};
