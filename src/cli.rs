//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// Compute IPv4/IPv6 subnet properties from a CIDR string.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Address and prefix length in CIDR notation,
    /// e.g. 192.168.1.10/24 or 2001:db8::1/64
    pub cidr: String,

    /// Also write the report to this text file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(long)]
    pub force: bool,

    /// Print the report as JSON instead of the field table
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cidr_only() {
        let cli = Cli::parse_from(["subnet-summary", "192.168.1.10/24"]);
        assert_eq!(cli.cidr, "192.168.1.10/24");
        assert_eq!(cli.output, None);
        assert!(!cli.force);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_with_output() {
        let cli = Cli::parse_from([
            "subnet-summary",
            "10.0.0.1/8",
            "--output",
            "report.txt",
            "--force",
        ]);
        assert_eq!(cli.output, Some(PathBuf::from("report.txt")));
        assert!(cli.force);
    }

    #[test]
    fn test_missing_cidr_is_an_error() {
        assert!(Cli::try_parse_from(["subnet-summary"]).is_err());
    }
}
