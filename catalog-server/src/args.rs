//! Command-line arguments of the catalog server.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Serves the service catalog over HTTP", long_about = None)]
pub struct Args {
    /// Path to the configuration file (YAML, TOML or JSON)
    #[arg(short, long, default_value = "config.yaml")]
    pub config: PathBuf,

    /// Port to listen on, overriding the configuration
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["catalog-server"]);
        assert_eq!(args.config, PathBuf::from("config.yaml"));
        assert_eq!(args.port, None);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from(["catalog-server", "--config", "/etc/catalog.toml", "-p", "9000"]);
        assert_eq!(args.config, PathBuf::from("/etc/catalog.toml"));
        assert_eq!(args.port, Some(9000));
    }
}
