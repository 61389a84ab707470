//! Configuration management for the Jarvis MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the
//! .env file through `dotenvy`, which never prints.

use crate::domain::EmailAddress;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default Apify API base URL.
pub const DEFAULT_APIFY_API_URL: &str = "https://api.apify.com/v2";

/// Default Google search results actor.
pub const DEFAULT_SEARCH_ACTOR_ID: &str = "nFJndFXA5zjCTuudP";

/// Default contact details scraper actor.
pub const DEFAULT_CONTACT_SCRAPER_ACTOR_ID: &str = "vdrmota/contact-info-scraper";

/// Default SMTP relay host.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Tracing filter used when neither `RUST_LOG` nor `LOG_LEVEL` is set.
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Configuration for the Jarvis MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Apify API token used for both actors
    pub search_api_key: String,

    /// Mail account, also the `From` of every outgoing message
    pub email_user: String,

    /// Mail account password (app password for Gmail)
    pub email_password: String,

    /// Apify API base URL (default: https://api.apify.com/v2)
    pub apify_api_url: String,

    /// Actor that turns a query into search result pages
    pub search_actor_id: String,

    /// Actor that crawls result URLs for contact details
    pub contact_scraper_actor_id: String,

    /// SMTP relay host (default: smtp.gmail.com)
    pub smtp_host: String,

    /// HTTP request timeout in seconds (default: 300)
    /// Synchronous actor runs can take minutes.
    pub request_timeout: u64,

    /// Organic results requested per search page (default: 20)
    pub search_results_per_page: u32,

    /// Scraper request budget per start URL (default: 10)
    pub scraper_max_requests_per_url: u32,

    /// Scraper link depth from each start URL (default: 2)
    pub scraper_max_depth: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `SEARCH_API_KEY`: Apify API token
    /// - `EMAIL_USER`: sender mail account, must be a valid address
    /// - `EMAIL_PASSWORD`: sender mail account password
    ///
    /// Optional environment variables:
    /// - `APIFY_API_BASE_URL`: API base URL (default: https://api.apify.com/v2)
    /// - `SEARCH_ACTOR_ID`: search actor (default: nFJndFXA5zjCTuudP)
    /// - `CONTACT_SCRAPER_ACTOR_ID`: scraper actor (default: vdrmota/contact-info-scraper)
    /// - `SMTP_HOST`: SMTP relay (default: smtp.gmail.com)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 300)
    /// - `SEARCH_RESULTS_PER_PAGE`: 1-100 (default: 20)
    /// - `SCRAPER_MAX_REQUESTS_PER_URL`: (default: 10)
    /// - `SCRAPER_MAX_DEPTH`: (default: 2)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let search_api_key = Self::required("SEARCH_API_KEY")?;
        let email_user = Self::required("EMAIL_USER")?;
        let email_password = Self::required("EMAIL_PASSWORD")?;

        if search_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let email_user = EmailAddress::new(&email_user)
            .map_err(|e| ConfigError::InvalidValue {
                var: "EMAIL_USER".to_string(),
                reason: e.to_string(),
            })?
            .to_string();

        if email_password.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "EMAIL_PASSWORD".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let apify_api_url =
            env::var("APIFY_API_BASE_URL").unwrap_or_else(|_| DEFAULT_APIFY_API_URL.to_string());
        if !apify_api_url.starts_with("http://") && !apify_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "APIFY_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let search_actor_id = Self::non_blank_or("SEARCH_ACTOR_ID", DEFAULT_SEARCH_ACTOR_ID);
        let contact_scraper_actor_id =
            Self::non_blank_or("CONTACT_SCRAPER_ACTOR_ID", DEFAULT_CONTACT_SCRAPER_ACTOR_ID);
        let smtp_host = Self::non_blank_or("SMTP_HOST", DEFAULT_SMTP_HOST);

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 300)?;
        let search_results_per_page = Self::parse_env_u32("SEARCH_RESULTS_PER_PAGE", 20)?;
        let scraper_max_requests_per_url = Self::parse_env_u32("SCRAPER_MAX_REQUESTS_PER_URL", 10)?;
        let scraper_max_depth = Self::parse_env_u32("SCRAPER_MAX_DEPTH", 2)?;

        if !(1..=100).contains(&search_results_per_page) {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_RESULTS_PER_PAGE".to_string(),
                reason: "Must be between 1 and 100".to_string(),
            });
        }

        Ok(Config {
            search_api_key,
            email_user,
            email_password,
            apify_api_url,
            search_actor_id,
            contact_scraper_actor_id,
            smtp_host,
            request_timeout,
            search_results_per_page,
            scraper_max_requests_per_url,
            scraper_max_depth,
        })
    }

    /// Tracing filter from `LOG_LEVEL` (default: "error").
    ///
    /// Read on its own, before [`Config::from_env`], so that configuration
    /// failures can already be logged.
    pub fn log_level() -> String {
        Self::non_blank_or("LOG_LEVEL", DEFAULT_LOG_LEVEL)
    }

    fn required(var_name: &str) -> ConfigResult<String> {
        env::var(var_name).map_err(|_| ConfigError::MissingVar(var_name.to_string()))
    }

    /// Read an optional string variable; unset and blank both mean `default`.
    fn non_blank_or(var_name: &str, default: &str) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            search_api_key: String::new(),
            email_user: String::new(),
            email_password: String::new(),
            apify_api_url: DEFAULT_APIFY_API_URL.to_string(),
            search_actor_id: DEFAULT_SEARCH_ACTOR_ID.to_string(),
            contact_scraper_actor_id: DEFAULT_CONTACT_SCRAPER_ACTOR_ID.to_string(),
            smtp_host: DEFAULT_SMTP_HOST.to_string(),
            request_timeout: 300,
            search_results_per_page: 20,
            scraper_max_requests_per_url: 10,
            scraper_max_depth: 2,
        }
    }
}
