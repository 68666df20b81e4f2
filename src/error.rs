//! Error taxonomy for parsing, calculation and report export.
//!
//! Every variant is user-presentable; parsing failures never return a
//! partial result.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the subnet calculator and the report exporter.
#[derive(Error, Debug)]
pub enum SubnetError {
    /// The address part of the input is not a valid IPv4 or IPv6 literal.
    #[error("invalid address {0:?}, expected an IPv4 or IPv6 literal")]
    InvalidAddressFormat(String),

    /// The prefix part is missing or not an unsigned integer.
    #[error("invalid or missing prefix length in {0:?}, expected address/prefix like 192.168.1.0/24")]
    InvalidPrefixFormat(String),

    /// Network length is too long for the detected address family.
    #[error("network length is too long: /{prefix} exceeds the /{max} maximum for this address family")]
    PrefixOutOfRange { prefix: u32, max: u8 },

    /// Writing the report file failed. The target path is left untouched.
    #[error("export to {} failed: {source}", path.display())]
    ExportFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
