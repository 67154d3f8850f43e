//! Process configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::planner::{PlannerConfig, TransferPenalty};

/// Address the server binds to when `METRO_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed
    #[error("invalid {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the network dataset (JSON).
    pub dataset: PathBuf,

    /// Address to serve the HTTP API on.
    pub addr: SocketAddr,

    /// Route planner settings.
    pub planner: PlannerConfig,
}

impl AppConfig {
    /// Read configuration from environment variables.
    ///
    /// - `METRO_DATASET` (required): dataset path
    /// - `METRO_ADDR`: bind address, defaults to [`DEFAULT_ADDR`]
    /// - `METRO_TRANSFER_PENALTY`: fixed transfer penalty; derived from the
    ///   network when unset
    /// - `METRO_MAX_ALTERNATIVES`: default number of routes per
    ///   alternatives request
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dataset = lookup("METRO_DATASET")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing("METRO_DATASET"))?;

        let addr = lookup("METRO_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: "METRO_ADDR",
                message: e.to_string(),
            })?;

        let transfer_penalty = match lookup("METRO_TRANSFER_PENALTY") {
            Some(raw) => TransferPenalty::Fixed(raw.trim().parse().map_err(
                |e: std::num::ParseIntError| ConfigError::Invalid {
                    name: "METRO_TRANSFER_PENALTY",
                    message: e.to_string(),
                },
            )?),
            None => TransferPenalty::Auto,
        };

        let mut planner = PlannerConfig::new(transfer_penalty);
        if let Some(raw) = lookup("METRO_MAX_ALTERNATIVES") {
            let max = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    name: "METRO_MAX_ALTERNATIVES",
                    message: e.to_string(),
                }
            })?;
            planner = planner.with_max_alternatives(max);
        }

        Ok(Self {
            dataset,
            addr,
            planner,
        })
    }
}
