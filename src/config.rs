//! Runtime settings read from the process environment.
//!
//! `main` loads `.env` through dotenvy, then calls [`load_from_env`], which
//! parses and checks everything before a single connection is opened.
//!
//! The database is given either as `DATABASE_URL` or as `DB_HOST`, `DB_PORT`,
//! `DB_USER`, `DB_PASSWORD` and `DB_NAME`; the full URL wins when both exist.
//!
//! | Variable | Default |
//! |---|---|
//! | `ADMIN_PASSWORD` | required |
//! | `BASE_URL` | `http://localhost:3000` |
//! | `LISTEN` | `0.0.0.0:$PORT` |
//! | `PORT` | `3000` |
//! | `APP_ENV` | `development` (`production` selects the `prod_` tables) |
//! | `RUST_LOG` | `info` |
//! | `LOG_FORMAT` | `text` (or `json`) |
//! | `BEHIND_PROXY` | `false` |
//! | `STATIC_DIR` | `public` |
//! | `IP_LOOKUP_URL` | `https://api.ipify.org?format=json` |
//! | `IP_LOOKUP_TIMEOUT` | `5` seconds |
//! | `DB_MAX_CONNECTIONS` | `10` |
//! | `DB_CONNECT_TIMEOUT` / `DB_IDLE_TIMEOUT` / `DB_MAX_LIFETIME` | `30` / `600` / `1800` seconds |

use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, ensure};
use tracing::info;
use url::Url;

/// Deployment environment; selects the storage namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    /// Table name prefix for this environment.
    pub fn table_prefix(&self) -> &'static str {
        match self {
            Environment::Production => "prod_",
            Environment::Development => "test_",
        }
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("production") {
            Ok(Environment::Production)
        } else {
            Ok(Environment::Development)
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => f.write_str("production"),
            Environment::Development => f.write_str("development"),
        }
    }
}

/// Settings for one server process.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub admin_password: String,
    /// Absolute prefix of short links, without a trailing `/`.
    pub base_url: String,
    pub listen_addr: String,
    pub environment: Environment,
    pub log_level: String,
    pub log_format: String,
    /// Read click IPs from `X-Forwarded-For` / `X-Real-IP`.
    pub behind_proxy: bool,
    pub static_dir: String,
    pub ip_lookup_url: String,
    pub ip_lookup_timeout: u64,

    // pool
    pub db_max_connections: u32,
    pub db_connect_timeout: u64,
    pub db_idle_timeout: u64,
    pub db_max_lifetime: u64,
}

impl Config {
    /// Reads every setting, applying defaults for the optional ones.
    ///
    /// # Errors
    ///
    /// Fails when neither form of database configuration is complete, or
    /// when `ADMIN_PASSWORD` is unset.
    pub fn from_env() -> Result<Self> {
        let database_url = Self::database_url_from_env().context("Database is not configured")?;
        let admin_password = env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD is required")?;

        let base_url = var_or("BASE_URL", "http://localhost:3000")
            .trim_end_matches('/')
            .to_string();

        let environment = var_or("APP_ENV", "development")
            .parse()
            .unwrap_or(Environment::Development);

        let behind_proxy = env::var("BEHIND_PROXY")
            .is_ok_and(|flag| flag == "1" || flag.eq_ignore_ascii_case("true"));

        Ok(Self {
            database_url,
            admin_password,
            base_url,
            listen_addr: Self::load_listen_addr(),
            environment,
            log_level: var_or("RUST_LOG", "info"),
            log_format: var_or("LOG_FORMAT", "text"),
            behind_proxy,
            static_dir: var_or("STATIC_DIR", "public"),
            ip_lookup_url: var_or("IP_LOOKUP_URL", "https://api.ipify.org?format=json"),
            ip_lookup_timeout: parse_env("IP_LOOKUP_TIMEOUT", 5),
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10),
            db_connect_timeout: parse_env("DB_CONNECT_TIMEOUT", 30),
            db_idle_timeout: parse_env("DB_IDLE_TIMEOUT", 600),
            db_max_lifetime: parse_env("DB_MAX_LIFETIME", 1800),
        })
    }

    /// `DATABASE_URL` as given, or a URL assembled from the `DB_*` parts.
    ///
    /// Credentials are percent-encoded when assembled.
    fn database_url_from_env() -> Result<String> {
        if let Ok(url) = env::var("DATABASE_URL") {
            return Ok(url);
        }

        let part = |key: &str| {
            env::var(key).with_context(|| format!("{key} is required without DATABASE_URL"))
        };
        let user = part("DB_USER")?;
        let password = part("DB_PASSWORD")?;
        let name = part("DB_NAME")?;
        let host = var_or("DB_HOST", "localhost");
        let port = var_or("DB_PORT", "5432");

        let mut url = Url::parse(&format!("postgres://{host}:{port}/{name}"))
            .context("DB_HOST, DB_PORT or DB_NAME do not form a valid URL")?;
        url.set_username(&user)
            .and_then(|()| url.set_password(Some(&password)))
            .map_err(|()| anyhow::anyhow!("Cannot set credentials on the database URL"))?;

        Ok(url.into())
    }

    /// `LISTEN` wins; otherwise binds all interfaces on `PORT`.
    fn load_listen_addr() -> String {
        if let Ok(listen) = env::var("LISTEN") {
            return listen;
        }

        format!("0.0.0.0:{}", var_or("PORT", "3000"))
    }

    /// Rejects settings the server cannot start with.
    ///
    /// # Errors
    ///
    /// Fails on an empty admin password, a `BASE_URL` that is not absolute
    /// http(s), an unknown log format, a listen address without a port, a
    /// non-PostgreSQL database URL, or a zero pool size or timeout.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.admin_password.trim().is_empty(),
            "ADMIN_PASSWORD is blank"
        );

        let base = Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL '{}' does not parse", self.base_url))?;
        ensure!(
            matches!(base.scheme(), "http" | "https"),
            "BASE_URL '{}' is not http(s)",
            self.base_url
        );

        ensure!(
            matches!(self.log_format.as_str(), "text" | "json"),
            "LOG_FORMAT '{}' is neither text nor json",
            self.log_format
        );

        ensure!(
            self.listen_addr.contains(':'),
            "LISTEN '{}' has no port",
            self.listen_addr
        );

        let scheme = self.database_url.split("://").next().unwrap_or_default();
        ensure!(
            self.database_url.contains("://") && matches!(scheme, "postgres" | "postgresql"),
            "DATABASE_URL '{}' is not a PostgreSQL URL",
            mask_connection_string(&self.database_url)
        );

        for (key, value) in [
            ("IP_LOOKUP_TIMEOUT", self.ip_lookup_timeout),
            ("DB_MAX_CONNECTIONS", u64::from(self.db_max_connections)),
            ("DB_CONNECT_TIMEOUT", self.db_connect_timeout),
        ] {
            ensure!(value > 0, "{key} must be positive");
        }

        Ok(())
    }

    /// Logs the effective settings with the database password hidden.
    pub fn print_summary(&self) {
        let prefix = self.environment.table_prefix();
        info!(
            environment = %self.environment,
            listen = %self.listen_addr,
            base_url = %self.base_url,
            database = %mask_connection_string(&self.database_url),
            tables = %format!("{prefix}urls, {prefix}clicks"),
            static_dir = %self.static_dir,
            behind_proxy = self.behind_proxy,
            log_level = %self.log_level,
            log_format = %self.log_format,
            "Configuration loaded"
        );
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Replaces the password of a connection URL with `***`.
///
/// Strings that do not parse, or carry no password, come back unchanged.
fn mask_connection_string(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) if url.password().is_some() => match url.set_password(Some("***")) {
            Ok(()) => url.into(),
            Err(()) => raw.to_string(),
        },
        _ => raw.to_string(),
    }
}

/// Builds a [`Config`] from the environment and validates it.
///
/// `.env` must already have been applied to the process environment.
///
/// # Errors
///
/// Propagates the failure of [`Config::from_env`] or [`Config::validate`].
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
