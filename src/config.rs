use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "rusty-inbox",
    version,
    about = "Contact form backend that keeps submissions in a flat JSON file"
)]
pub struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// JSON file holding every submission
    #[arg(long, env = "CONTACTS_FILE", default_value = "contacts.json")]
    pub contacts_file: PathBuf,

    /// Landing page served at `/`
    #[arg(long, env = "INDEX_FILE", default_value = "public/index.html")]
    pub index_file: PathBuf,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub contacts_file: PathBuf,
    pub index_file: PathBuf,
    pub log_json: bool,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            addr: SocketAddr::new(cli.host, cli.port),
            contacts_file: cli.contacts_file,
            index_file: cli.index_file,
            log_json: cli.log_json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let cli = Cli::try_parse_from(["rusty-inbox"]).unwrap();
        let config = AppConfig::from_cli(cli);

        // PORT et al. may leak in from the environment running the tests
        if std::env::var_os("PORT").is_none() {
            assert_eq!(config.addr.port(), DEFAULT_PORT);
        }
        if std::env::var_os("CONTACTS_FILE").is_none() {
            assert_eq!(config.contacts_file, PathBuf::from("contacts.json"));
        }
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "rusty-inbox",
            "--port",
            "8081",
            "--host",
            "127.0.0.1",
            "--contacts-file",
            "/tmp/inbox.json",
            "--log-json",
        ])
        .unwrap();
        let config = AppConfig::from_cli(cli);

        assert_eq!(config.addr, "127.0.0.1:8081".parse().unwrap());
        assert_eq!(config.contacts_file, PathBuf::from("/tmp/inbox.json"));
        assert!(config.log_json);
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(Cli::try_parse_from(["rusty-inbox", "--port", "abc"]).is_err());
    }
}
