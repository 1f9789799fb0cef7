//! Process configuration and construction of the shared client.

use checklist_client::{BuildError, Client, ClientBuilder, FetchExchange, HeaderPair};
use checklist_normalized_cache::{NormalizedCacheExchange, NormalizedCacheImpl};
use clap::Parser;
use tracing::Level;

/// The hosted endpoint used unless another one is configured.
pub const ENDPOINT: &str = "https://inspired-osprey-80.hasura.app/v1/graphql";
/// The request header carrying the admin secret.
pub const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

/// The client the app runs with: a normalized cache in front of HTTP.
pub type ChecklistClient = Client<NormalizedCacheImpl<FetchExchange>>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("endpoint must not be empty")]
    EmptyEndpoint,
    #[error(transparent)]
    Client(#[from] BuildError)
}

/// Keep a todo checklist in a hosted GraphQL backend
#[derive(Debug, Parser)]
#[command(name = "checklist", version)]
pub struct Args {
    /// The GraphQL endpoint to talk to
    #[arg(long, env = "CHECKLIST_ENDPOINT", default_value = ENDPOINT)]
    pub endpoint: String,

    /// The admin secret sent with every request
    #[arg(long, env = "HASURA_ADMIN_SECRET", hide_env_values = true)]
    pub admin_secret: Option<String>,

    /// Log level (error, warn, info, debug or trace). Nothing is logged by default.
    #[arg(long = "log", short = 'l', value_name = "LEVEL")]
    pub log_level: Option<Level>
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub admin_secret: Option<String>
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let endpoint = args.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        Ok(Self {
            endpoint: endpoint.to_string(),
            admin_secret: args.admin_secret.clone().filter(|secret| !secret.is_empty())
        })
    }

    /// Build the one client the process uses. Without a secret requests are sent
    /// unauthenticated, and the server will reject them.
    pub fn client(&self) -> Result<ChecklistClient, ConfigError> {
        if self.admin_secret.is_none() {
            tracing::warn!("no admin secret configured, requests will be rejected");
        }
        let secret = self.admin_secret.clone();
        let client = ClientBuilder::new(self.endpoint.as_str())
            .with_exchange(FetchExchange::new())
            .with_exchange(NormalizedCacheExchange::new())
            .with_extra_headers(move || {
                secret
                    .iter()
                    .map(|secret| HeaderPair::new(ADMIN_SECRET_HEADER, secret.as_str()))
                    .collect()
            })
            .build()?;
        Ok(client)
    }
}

#[cfg(test)]
mod test {
    use super::{Args, Config, ConfigError, ENDPOINT};
    use clap::Parser;
    use tracing::Level;

    #[test]
    fn defaults_to_the_hosted_endpoint() {
        let args = Args::try_parse_from(["checklist"]).unwrap();
        if std::env::var_os("CHECKLIST_ENDPOINT").is_none() {
            assert_eq!(args.endpoint, ENDPOINT);
        }
        assert_eq!(args.log_level, None);
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "checklist",
            "--endpoint",
            "http://localhost:8080/v1/graphql",
            "--admin-secret",
            "hunter2",
            "--log",
            "debug"
        ])
        .unwrap();

        assert_eq!(args.log_level, Some(Level::DEBUG));
        assert_eq!(
            Config::from_args(&args).unwrap(),
            Config {
                endpoint: "http://localhost:8080/v1/graphql".to_string(),
                admin_secret: Some("hunter2".to_string())
            }
        );
    }

    #[test]
    fn rejects_bad_endpoints() {
        let args = Args::try_parse_from(["checklist", "--endpoint", " "]).unwrap();
        assert!(matches!(
            Config::from_args(&args),
            Err(ConfigError::EmptyEndpoint)
        ));

        let config = Config {
            endpoint: "not a url".to_string(),
            admin_secret: None
        };
        assert!(matches!(config.client(), Err(ConfigError::Client(_))));
    }
}
