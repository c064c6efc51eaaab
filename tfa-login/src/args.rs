use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use crate::client::{AuthService, HttpClient, MockService};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

#[derive(Parser, Debug)]
#[command(name = "tfa-login")]
#[command(about = "Sign in with email, password and a one-time code")]
#[command(version)]
pub struct Args {
    /// Base URL of the login API
    #[arg(long, env = "TFA_LOGIN_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Answer requests in-process with the development scenarios
    #[arg(long)]
    pub mock: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LevelFilter,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Http(String),
    Mock,
}

impl Backend {
    pub fn service(&self) -> Arc<dyn AuthService> {
        match self {
            Backend::Http(url) => Arc::new(HttpClient::new(url)),
            Backend::Mock => Arc::new(MockService::default()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API url '{0}': {1}")]
    InvalidUrl(String, String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Backend,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let backend = if args.mock {
            Backend::Mock
        } else {
            match reqwest::Url::parse(&args.api_url) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => Backend::Http(args.api_url),
                Ok(url) => {
                    return Err(ConfigError::InvalidUrl(
                        args.api_url,
                        format!("unsupported scheme {}", url.scheme()),
                    ))
                }
                Err(e) => return Err(ConfigError::InvalidUrl(args.api_url, e.to_string())),
            }
        };
        Ok(Config {
            backend,
            log_level: args.log_level,
            log_file: args.log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Result<Config, ConfigError> {
        let args = Args::try_parse_from(std::iter::once("tfa-login").chain(args.iter().copied()))
            .expect("valid arguments");
        Config::try_from(args)
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["tfa-login", "--api-url", DEFAULT_API_URL]).unwrap();
        assert!(!args.mock);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn backend_selection() {
        let cfg = config(&["--api-url", "http://localhost:3000"]).unwrap();
        assert_eq!(
            cfg.backend,
            Backend::Http("http://localhost:3000".to_string())
        );

        let cfg = config(&["--mock", "--api-url", "not a url"]).unwrap();
        assert_eq!(cfg.backend, Backend::Mock);
    }

    #[test]
    fn invalid_url() {
        assert!(matches!(
            config(&["--api-url", "not a url"]),
            Err(ConfigError::InvalidUrl(..))
        ));
        assert!(matches!(
            config(&["--api-url", "ftp://localhost"]),
            Err(ConfigError::InvalidUrl(..))
        ));
    }

    #[test]
    fn log_level() {
        let cfg = config(&["--api-url", DEFAULT_API_URL, "--log-level", "debug"]).unwrap();
        assert_eq!(cfg.log_level, LevelFilter::DEBUG);
    }
}
