//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4Cidr`] for representing an address with its prefix length,
//! along with the bit-level helpers used to derive subnet properties.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::SubnetError;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_summary::models::ipv4::subnet_mask;
/// assert_eq!(subnet_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn subnet_mask(len: u8) -> Result<u32, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::PrefixOutOfRange {
            prefix: len as u32,
            max: MAX_LENGTH,
        })
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = subnet_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = subnet_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    let broadcast_bits = network_bits | !mask;
    Ok(Ipv4Addr::from(broadcast_bits))
}

/// Total number of addresses in a subnet of the given prefix length.
pub fn num_addresses(len: u8) -> Result<u64, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::PrefixOutOfRange {
            prefix: len as u32,
            max: MAX_LENGTH,
        })
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Number of usable host addresses, with the network and broadcast
/// addresses reserved. /31 and /32 networks have no usable hosts.
pub fn num_hosts(len: u8) -> Result<u64, SubnetError> {
    Ok(num_addresses(len)?.saturating_sub(2))
}

/// Historical IPv4 address class, determined by the leading bits of the
/// raw address. Predates CIDR and is independent of the prefix length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
}

impl AddressClass {
    /// Classify an address by the leading bits of its first octet:
    /// `0` -> A, `10` -> B, `110` -> C, `1110` -> D, `1111` -> E.
    pub fn of(addr: Ipv4Addr) -> AddressClass {
        let first_octet = addr.octets()[0];
        match first_octet.leading_ones() {
            0 => AddressClass::A,
            1 => AddressClass::B,
            2 => AddressClass::C,
            3 => AddressClass::D,
            _ => AddressClass::E,
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            AddressClass::A => "Class A",
            AddressClass::B => "Class B",
            AddressClass::C => "Class C",
            AddressClass::D => "Class D (Multicast)",
            AddressClass::E => "Class E (Reserved)",
        };
        write!(f, "{name}")
    }
}

/// IPv4 address with CIDR notation support.
///
/// The prefix is validated against [`MAX_LENGTH`] at construction, so the
/// derived properties are total functions.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv4Cidr {
    /// The IPv4 address as entered.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Ipv4Cidr {
    /// Create a new [`Ipv4Cidr`], validating the prefix length.
    pub fn new(addr: Ipv4Addr, prefix: u32) -> Result<Ipv4Cidr, SubnetError> {
        if prefix > MAX_LENGTH as u32 {
            return Err(SubnetError::PrefixOutOfRange {
                prefix,
                max: MAX_LENGTH,
            });
        }
        Ok(Ipv4Cidr {
            addr,
            prefix: prefix as u8,
        })
    }

    /// Get the subnet mask in dotted-decimal form.
    pub fn mask(&self) -> Ipv4Addr {
        let mask = subnet_mask(self.prefix)
            .unwrap_or_else(|e| panic!("Error calculating subnet mask for {}: {}", self, e));
        Ipv4Addr::from(mask)
    }

    /// Get the network ID, the first address of the subnet block.
    pub fn network_id(&self) -> Ipv4Addr {
        network_addr(self.addr, self.prefix)
            .unwrap_or_else(|e| panic!("Error calculating network address for {}: {}", self, e))
    }

    /// Get the broadcast address, the last address of the subnet block.
    pub fn broadcast(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.prefix)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address for {}: {}", self, e))
    }

    /// Total number of addresses in the subnet.
    pub fn num_addresses(&self) -> u64 {
        num_addresses(self.prefix)
            .unwrap_or_else(|e| panic!("Error calculating address count for {}: {}", self, e))
    }

    /// Number of usable host addresses in the subnet.
    pub fn num_hosts(&self) -> u64 {
        self.num_addresses().saturating_sub(2)
    }

    /// First and last usable host address, `None` when the block has no
    /// room for hosts besides the network and broadcast addresses.
    pub fn host_range(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        if self.num_addresses() <= 2 {
            return None;
        }
        let first = u32::from(self.network_id()) + 1;
        let last = u32::from(self.broadcast()) - 1;
        Some((Ipv4Addr::from(first), Ipv4Addr::from(last)))
    }

    /// Historical class of the raw address.
    pub fn class(&self) -> AddressClass {
        AddressClass::of(self.addr)
    }

    /// Number of host bits right of the prefix boundary.
    pub fn host_bits(&self) -> u8 {
        MAX_LENGTH - self.prefix
    }
}

impl FromStr for Ipv4Cidr {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Ipv4Cidr, SubnetError> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(SubnetError::InvalidPrefixFormat(s.to_string()));
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| SubnetError::InvalidAddressFormat(parts[0].to_string()))?;
        let prefix: u32 = parts[1]
            .parse()
            .map_err(|_| SubnetError::InvalidPrefixFormat(parts[1].to_string()))?;
        Ipv4Cidr::new(addr, prefix)
    }
}

impl fmt::Display for Ipv4Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Ipv4Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Cidr::from_str(&s).map_err(de::Error::custom)
    }
}
