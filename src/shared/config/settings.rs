/// Runtime settings resolved from the environment (and `.env` via dotenvy)
///
/// The database can be configured two ways: an explicit connection string
/// (`DATABASE_URL`) or individual parts (`DB_HOST`, `DB_PORT`, `DB_NAME`,
/// `DB_USER`, `DB_PASSWORD`). The explicit string is authoritative. When both
/// are present and name different targets, [`ConnectionPolicy`] decides
/// whether to warn and keep the explicit one or to refuse to start.
use std::{env, fmt, net::IpAddr, str::FromStr};

use url::Url;

use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_warn};

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_CONNECTION_POLICY: &str = "DB_CONNECTION_POLICY";
pub const SERVER_PORT: &str = "SERVER_PORT";

pub const DEFAULT_SERVER_PORT: u16 = 5000;
pub const DEFAULT_DB_PORT: u16 = 5432;

/// What to do when the explicit and constructed connection strings disagree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionPolicy {
    /// Warn and use the explicit connection string
    #[default]
    PreferExplicit,
    /// Refuse to start
    FailFast,
}

impl FromStr for ConnectionPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prefer-explicit" | "prefer_explicit" => Ok(Self::PreferExplicit),
            "fail-fast" | "fail_fast" => Ok(Self::FailFast),
            other => Err(AppError::ConfigurationError(format!(
                "Unknown {} '{}' (expected prefer-explicit or fail-fast)",
                DB_CONNECTION_POLICY, other
            ))),
        }
    }
}

impl fmt::Display for ConnectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreferExplicit => write!(f, "prefer-explicit"),
            Self::FailFast => write!(f, "fail-fast"),
        }
    }
}

/// Connection parameters given one by one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionParts {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl ConnectionParts {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let port = lookup(DB_PORT)
            .map(|p| {
                p.parse::<u16>().map_err(|e| {
                    AppError::ConfigurationError(format!("Invalid {} '{}': {}", DB_PORT, p, e))
                })
            })
            .transpose()?;

        Ok(Self {
            host: lookup(DB_HOST),
            port,
            database: lookup(DB_NAME),
            user: lookup(DB_USER),
            password: lookup(DB_PASSWORD),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.host.is_none()
            && self.port.is_none()
            && self.database.is_none()
            && self.user.is_none()
            && self.password.is_none()
    }

    /// Assemble a `postgres://` URL; host, database and user are required.
    ///
    /// An IPv6 host is bracketed and a host that is a directory (a Unix
    /// socket path) goes into the `host` query parameter.
    pub fn to_url(&self) -> AppResult<String> {
        let (Some(host), Some(database), Some(user)) = (&self.host, &self.database, &self.user)
        else {
            let missing: Vec<&str> = [
                (DB_HOST, self.host.is_none()),
                (DB_NAME, self.database.is_none()),
                (DB_USER, self.user.is_none()),
            ]
            .into_iter()
            .filter_map(|(key, absent)| absent.then_some(key))
            .collect();

            return Err(AppError::ConfigurationError(format!(
                "Incomplete connection parameters, missing {}",
                missing.join(", ")
            )));
        };

        let mut url = Url::parse("postgres://localhost").map_err(url_error)?;

        if host.starts_with('/') {
            url.query_pairs_mut().append_pair("host", host);
        } else if let Ok(ip) = host.parse::<IpAddr>() {
            url.set_ip_host(ip)
                .map_err(|_| config_error(format!("Cannot use {} as {}", host, DB_HOST)))?;
        } else {
            url.set_host(Some(host)).map_err(url_error)?;
        }

        url.set_port(Some(self.port.unwrap_or(DEFAULT_DB_PORT)))
            .map_err(|_| config_error(format!("Cannot set {} on the URL", DB_PORT)))?;
        url.set_username(user)
            .map_err(|_| config_error(format!("Cannot set {} on the URL", DB_USER)))?;
        url.set_password(self.password.as_deref())
            .map_err(|_| config_error(format!("Cannot set {} on the URL", DB_PASSWORD)))?;
        url.set_path(&urlencoding::encode(database));

        Ok(url.into())
    }
}

/// The pieces of a connection string that decide where it connects.
///
/// The password is neither kept nor compared: two strings that differ only
/// in credentials reach the same database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    pub user: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl ConnectionTarget {
    /// Read a libpq-style URL. `host`, `port`, `user` and `dbname` query
    /// parameters win over the authority and path, as they do for libpq.
    pub fn parse(url: &str) -> AppResult<Self> {
        let parsed = Url::parse(url)
            .map_err(|e| config_error(format!("Invalid database URL: {}", e)))?;

        if !matches!(parsed.scheme(), "postgres" | "postgresql") {
            return Err(config_error(
                "Invalid database URL format. Must start with postgres:// or postgresql://"
                    .to_string(),
            ));
        }
        if parsed.fragment().is_some() {
            return Err(config_error(
                "Database URL must not contain a '#' fragment".to_string(),
            ));
        }

        let param = |name: &str| {
            parsed
                .query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
                .filter(|value| !value.is_empty())
        };

        let host = param("host")
            .or_else(|| parsed.host_str().filter(|h| !h.is_empty()).map(str::to_string))
            .unwrap_or_else(|| "localhost".to_string());

        let port = match param("port") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| config_error(format!("Invalid port '{}' in URL: {}", port, e)))?,
            None => parsed.port().unwrap_or(DEFAULT_DB_PORT),
        };

        let user = match param("user") {
            Some(user) => Some(user),
            None if parsed.username().is_empty() => None,
            None => Some(decode(parsed.username())?),
        };

        let database = match param("dbname") {
            Some(database) => database,
            None => decode(parsed.path().trim_start_matches('/'))?,
        };
        if database.is_empty() {
            return Err(config_error(
                "Database URL does not name a database".to_string(),
            ));
        }
        if database.contains('/') {
            return Err(config_error(format!(
                "Database URL path '{}' is not a single database name",
                parsed.path()
            )));
        }

        Ok(Self {
            user,
            host,
            port,
            database,
        })
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.user {
            Some(user) => write!(f, "{}@{}:{}/{}", user, self.host, self.port, self.database),
            None => write!(f, "{}:{}/{}", self.host, self.port, self.database),
        }
    }
}

fn decode(component: &str) -> AppResult<String> {
    urlencoding::decode(component)
        .map(|c| c.into_owned())
        .map_err(|e| config_error(format!("Invalid URL encoding: {}", e)))
}

fn config_error(message: String) -> AppError {
    AppError::ConfigurationError(message)
}

fn url_error(e: url::ParseError) -> AppError {
    config_error(format!("Cannot build database URL: {}", e))
}

/// Where the chosen connection string came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlSource {
    Explicit,
    Constructed,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    url: String,
    target: ConnectionTarget,
    source: UrlSource,
}

impl DatabaseSettings {
    pub fn resolve(
        explicit: Option<String>,
        parts: &ConnectionParts,
        policy: ConnectionPolicy,
    ) -> AppResult<Self> {
        let constructed = if parts.is_empty() {
            None
        } else {
            Some(parts.to_url()?)
        };

        match (explicit, constructed) {
            (None, None) => Err(AppError::ConfigurationError(format!(
                "No database configured: set {} or {}/{}/{}",
                DATABASE_URL, DB_HOST, DB_NAME, DB_USER
            ))),
            (Some(url), None) => Self::from_url(url, UrlSource::Explicit),
            (None, Some(url)) => Self::from_url(url, UrlSource::Constructed),
            (Some(explicit), Some(constructed)) => {
                let chosen = Self::from_url(explicit, UrlSource::Explicit)?;
                let secondary = ConnectionTarget::parse(&constructed)?;

                if chosen.target != secondary {
                    match policy {
                        ConnectionPolicy::FailFast => {
                            return Err(AppError::ConfigurationError(format!(
                                "{} points at {} but {}/{}/{} point at {}; remove one or make them agree",
                                DATABASE_URL, chosen.target, DB_HOST, DB_NAME, DB_USER, secondary
                            )));
                        }
                        ConnectionPolicy::PreferExplicit => {
                            log_warn!(
                                "{} ({}) disagrees with connection parts ({}); using {}",
                                DATABASE_URL,
                                chosen.target,
                                secondary,
                                DATABASE_URL
                            );
                        }
                    }
                }

                Ok(chosen)
            }
        }
    }

    fn from_url(url: String, source: UrlSource) -> AppResult<Self> {
        let target = ConnectionTarget::parse(&url)?;
        log_debug!("Database target {} ({:?})", target, source);
        Ok(Self {
            url,
            target,
            source,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn target(&self) -> &ConnectionTarget {
        &self.target
    }

    pub fn source(&self) -> UrlSource {
        self.source
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server_port: u16,
    pub connection_policy: ConnectionPolicy,
}

impl Settings {
    /// Load `.env` (if any) and resolve from process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve from an arbitrary key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let connection_policy = lookup(DB_CONNECTION_POLICY)
            .map(|p| p.parse())
            .transpose()?
            .unwrap_or_default();

        let server_port = lookup(SERVER_PORT)
            .map(|p| {
                p.parse::<u16>().map_err(|e| {
                    AppError::ConfigurationError(format!("Invalid {} '{}': {}", SERVER_PORT, p, e))
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_SERVER_PORT);

        let parts = ConnectionParts::from_lookup(&lookup)?;
        let database = DatabaseSettings::resolve(lookup(DATABASE_URL), &parts, connection_policy)?;

        Ok(Self {
            database,
            server_port,
            connection_policy,
        })
    }
}
