use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Context};
use log::{info, Level};

pub const AUDIENCE_VAR: &str = "NOTIFOX_AUDIENCE";
pub const API_KEY_VAR: &str = "NOTIFOX_API_KEY";
pub const AUTH_HEADER_VAR: &str = "NOTIFOX_AUTH_HEADER";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// How the Notifox API key is presented on the alert request.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum AuthHeader {
    /// `Authorization: Bearer <key>`
    #[default]
    Bearer,
    /// `x-api-key: <key>`
    ApiKey,
}

impl FromStr for AuthHeader {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bearer" | "authorization" => Ok(AuthHeader::Bearer),
            "x-api-key" | "api-key" => Ok(AuthHeader::ApiKey),
            other => Err(anyhow!("unknown auth header style {:?}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub audience: String,
    pub api_key: String,
    pub auth_header: AuthHeader,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .with_context(|| format!("{} is not set", name))
        };

        let auth_header = match lookup(AUTH_HEADER_VAR) {
            Some(value) => value
                .parse()
                .with_context(|| format!("invalid {}", AUTH_HEADER_VAR))?,
            None => AuthHeader::default(),
        };
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(value) => Level::from_str(&value)
                .with_context(|| format!("invalid {} {:?}", LOG_LEVEL_VAR, value))?,
            None => Level::Info,
        };

        Ok(Config {
            audience: required(AUDIENCE_VAR)?,
            api_key: required(API_KEY_VAR)?,
            auth_header,
            log_level,
        })
    }

    /// Reports which variables are present without echoing secrets.
    pub fn log_presence(&self) {
        info!("Environment variables - {}: Set", AUDIENCE_VAR);
        info!("Environment variables - {}: Set", API_KEY_VAR);
        info!("Notifox auth header style: {:?}", self.auth_header);
    }
}
