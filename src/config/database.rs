//! Database connection settings.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::ConfigError;

const fn default_port() -> u16 {
    5432
}

const fn default_pool_size() -> u32 {
    8
}

fn default_host() -> String {
    "localhost".to_owned()
}

/// `PostgreSQL` connection settings.
///
/// Either `url` is set, or the URL is assembled from `user`, `password`,
/// `host`, `port` and `name`.
#[derive(Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Full connection URL. Takes precedence over the individual parts.
    #[serde(default)]
    pub url: String,
    /// Server host name.
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Login role.
    #[serde(default, deserialize_with = "lenient_string")]
    pub user: String,
    /// Login password.
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: String,
    /// Database name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Maximum number of pooled connections.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            host: default_host(),
            port: default_port(),
            user: String::new(),
            password: String::new(),
            name: String::new(),
            pool_size: default_pool_size(),
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &redacted(&self.url))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &redacted(&self.password))
            .field("name", &self.name)
            .field("pool_size", &self.pool_size)
            .finish()
    }
}

impl DatabaseConfig {
    /// Returns the connection URL.
    ///
    /// Credentials and the database name are percent-encoded when the URL is
    /// assembled from parts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when neither `url` nor `user` and
    /// `name` are set.
    pub fn connection_url(&self) -> Result<String, ConfigError> {
        if !self.url.is_empty() {
            return Ok(self.url.clone());
        }
        if self.user.is_empty() {
            return Err(ConfigError::Missing {
                field: "database.user",
            });
        }
        if self.name.is_empty() {
            return Err(ConfigError::Missing {
                field: "database.name",
            });
        }

        let credentials = if self.password.is_empty() {
            urlencoding::encode(&self.user).into_owned()
        } else {
            format!(
                "{}:{}",
                urlencoding::encode(&self.user),
                urlencoding::encode(&self.password)
            )
        };
        Ok(format!(
            "postgres://{credentials}@{}:{}/{}",
            self.host,
            self.port,
            urlencoding::encode(&self.name)
        ))
    }
}

pub(super) const fn redacted(value: &str) -> &'static str {
    if value.is_empty() { "" } else { "<redacted>" }
}

/// Accepts numbers where text is expected.
///
/// Environment values such as `DB_PASSWORD=12345` reach serde as integers.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(value) => value,
        Raw::Unsigned(value) => value.to_string(),
        Raw::Signed(value) => value.to_string(),
    })
}
