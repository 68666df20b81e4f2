//! IPv6 CIDR utilities.
//!
//! Same bit-level derivation as the IPv4 module, widened to 128 bits.
//! IPv6 has no broadcast address and no historical class, and the whole
//! address space after the prefix is host space.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

use crate::error::SubnetError;

/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH: u8 = 128;

/// Convert a CIDR prefix length to a subnet mask as u128.
///
/// `len == 0` is handled on its own: there is no wider integer to shift
/// through as the IPv4 version does.
pub fn subnet_mask(len: u8) -> Result<u128, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::PrefixOutOfRange {
            prefix: len as u32,
            max: MAX_LENGTH,
        })
    } else if len == 0 {
        Ok(0)
    } else {
        let right_len = MAX_LENGTH - len;
        Ok((u128::MAX >> right_len) << right_len)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv6Addr, len: u8) -> Result<Ipv6Addr, SubnetError> {
    let mask = subnet_mask(len)?;
    Ok(Ipv6Addr::from(u128::from(addr) & mask))
}

/// Total number of addresses in a subnet of the given prefix length.
///
/// Returns `None` for `/0`: 2^128 does not fit in a `u128`.
pub fn num_addresses(len: u8) -> Result<Option<u128>, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::PrefixOutOfRange {
            prefix: len as u32,
            max: MAX_LENGTH,
        })
    } else if len == 0 {
        Ok(None)
    } else {
        Ok(Some(1u128 << (MAX_LENGTH - len)))
    }
}

/// IPv6 address with CIDR notation support.
///
/// The prefix is validated against [`MAX_LENGTH`] at construction.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv6Cidr {
    /// The IPv6 address as entered.
    pub addr: Ipv6Addr,
    /// The prefix length (0-128).
    pub prefix: u8,
}

impl Ipv6Cidr {
    /// Create a new [`Ipv6Cidr`], validating the prefix length.
    pub fn new(addr: Ipv6Addr, prefix: u32) -> Result<Ipv6Cidr, SubnetError> {
        if prefix > MAX_LENGTH as u32 {
            return Err(SubnetError::PrefixOutOfRange {
                prefix,
                max: MAX_LENGTH,
            });
        }
        Ok(Ipv6Cidr {
            addr,
            prefix: prefix as u8,
        })
    }

    /// Get the network ID, the first address of the subnet block.
    pub fn network_id(&self) -> Ipv6Addr {
        network_addr(self.addr, self.prefix)
            .unwrap_or_else(|e| panic!("Error calculating network address for {}: {}", self, e))
    }

    /// Total number of addresses, `None` for a /0 network.
    pub fn num_addresses(&self) -> Option<u128> {
        num_addresses(self.prefix)
            .unwrap_or_else(|e| panic!("Error calculating address count for {}: {}", self, e))
    }

    /// Number of host bits right of the prefix boundary.
    pub fn host_bits(&self) -> u8 {
        MAX_LENGTH - self.prefix
    }
}

impl FromStr for Ipv6Cidr {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Ipv6Cidr, SubnetError> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(SubnetError::InvalidPrefixFormat(s.to_string()));
        }
        let addr: Ipv6Addr = parts[0]
            .parse()
            .map_err(|_| SubnetError::InvalidAddressFormat(parts[0].to_string()))?;
        let prefix: u32 = parts[1]
            .parse()
            .map_err(|_| SubnetError::InvalidPrefixFormat(parts[1].to_string()))?;
        Ipv6Cidr::new(addr, prefix)
    }
}

impl fmt::Display for Ipv6Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Ipv6Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv6Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Ipv6Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv6Cidr::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subnet_mask() {
        assert_eq!(subnet_mask(0).unwrap(), 0);
        assert_eq!(subnet_mask(64).unwrap(), u128::MAX << 64);
        assert_eq!(subnet_mask(127).unwrap(), u128::MAX << 1);
        assert_eq!(subnet_mask(128).unwrap(), u128::MAX);
        assert!(subnet_mask(129).is_err());
    }

    #[test]
    fn test_network_addr() {
        let ip: Ipv6Addr = "2001:db8:abcd:12:ffff::1".parse().unwrap();
        assert_eq!(
            network_addr(ip, 64).unwrap(),
            "2001:db8:abcd:12::".parse::<Ipv6Addr>().unwrap()
        );
        assert_eq!(
            network_addr(ip, 48).unwrap(),
            "2001:db8:abcd::".parse::<Ipv6Addr>().unwrap()
        );
        assert_eq!(network_addr(ip, 128).unwrap(), ip);
        assert_eq!(
            network_addr(ip, 0).unwrap(),
            "::".parse::<Ipv6Addr>().unwrap()
        );
    }

    #[test]
    fn test_num_addresses() {
        assert_eq!(num_addresses(64).unwrap(), Some(1u128 << 64));
        assert_eq!(num_addresses(127).unwrap(), Some(2));
        assert_eq!(num_addresses(128).unwrap(), Some(1));
        assert_eq!(num_addresses(0).unwrap(), None);
        assert!(num_addresses(129).is_err());
    }

    #[test]
    fn test_parse_valid() {
        let cidr: Ipv6Cidr = "2001:db8::1/64".parse().unwrap();
        assert_eq!(cidr.prefix, 64);
        assert_eq!(cidr.host_bits(), 64);
        assert_eq!(cidr.to_string(), "2001:db8::1/64");
        assert_eq!(
            cidr.network_id(),
            "2001:db8::".parse::<Ipv6Addr>().unwrap()
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "zzzz::/64".parse::<Ipv6Cidr>().unwrap_err(),
            SubnetError::InvalidAddressFormat(_)
        ));
        assert!(matches!(
            "2001:db8::1".parse::<Ipv6Cidr>().unwrap_err(),
            SubnetError::InvalidPrefixFormat(_)
        ));
        assert!(matches!(
            "2001:db8::1/129".parse::<Ipv6Cidr>().unwrap_err(),
            SubnetError::PrefixOutOfRange {
                prefix: 129,
                max: 128
            }
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let cidr: Ipv6Cidr = "fe80::1/10".parse().unwrap();
        let json = serde_json::to_string(&cidr).unwrap();
        assert_eq!(json, "\"fe80::1/10\"");
        let back: Ipv6Cidr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cidr);
    }
}
