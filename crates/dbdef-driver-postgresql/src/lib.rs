mod connection_info;
pub use connection_info::ConnectionInfo;

use dbdef_core::{err, Error, Result};
use postgres::{Client, Config, NoTls};
use tracing::{debug, info};

/// A blocking connection to a PostgreSQL server.
pub struct PostgreSQL {
    client: Client,
}

impl PostgreSQL {
    /// Initialize the driver using an initialized connection.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Connects to the server without selecting a database.
    pub fn connect_server(info: &ConnectionInfo) -> Result<Self> {
        Self::connect_with_config(&info.server_config())
            .map_err(|err| err.context(err!("failed to connect to `{}:{}`", info.host, info.port)))
    }

    /// Connects to the database named by `info`.
    pub fn connect(info: &ConnectionInfo) -> Result<Self> {
        Self::connect_with_config(&info.database_config()).map_err(|err| {
            err.context(err!(
                "failed to connect to database `{}` on `{}:{}`",
                info.database,
                info.host,
                info.port
            ))
        })
    }

    pub fn connect_with_config(config: &Config) -> Result<Self> {
        let client = config
            .connect(NoTls)
            .map_err(Error::driver_operation_failed)?;

        Ok(Self::new(client))
    }

    pub fn database_exists(&mut self, name: &str) -> Result<bool> {
        let row = self
            .client
            .query_opt("SELECT 1 FROM pg_database WHERE datname = $1", &[&name])
            .map_err(Error::driver_operation_failed)?;

        Ok(row.is_some())
    }

    pub fn drop_database(&mut self, name: &str) -> Result<()> {
        info!(database = name, "dropping database");
        self.batch_execute(&format!("DROP DATABASE IF EXISTS {}", quote_ident(name)))
    }

    pub fn create_database(&mut self, name: &str) -> Result<()> {
        info!(database = name, "creating database");
        self.batch_execute(&format!("CREATE DATABASE {}", quote_ident(name)))
    }

    /// Makes sure the database exists, dropping it first when `drop_if_exists`
    /// is set. Returns `true` if the database was created.
    pub fn ensure_database(&mut self, name: &str, drop_if_exists: bool) -> Result<bool> {
        let mut exists = self.database_exists(name)?;

        if exists && drop_if_exists {
            self.drop_database(name)?;
            exists = false;
        }

        if exists {
            debug!(database = name, "database already exists");
            return Ok(false);
        }

        self.create_database(name)?;
        Ok(true)
    }

    /// Executes a script of one or more statements.
    pub fn batch_execute(&mut self, sql: &str) -> Result<()> {
        self.client
            .batch_execute(sql)
            .map_err(Error::driver_operation_failed)
    }
}

/// Quotes an identifier unless it is a plain lower-case name.
fn quote_ident(name: &str) -> String {
    let plain = name
        .chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_lowercase() || ch == '_')
        && name
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_');

    if plain {
        name.to_string()
    } else {
        format!("\"{}\"", name.replace('"', "\"\""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_identifiers() {
        assert_eq!(quote_ident("sk_db"), "sk_db");
        assert_eq!(quote_ident("_db2"), "_db2");
        assert_eq!(quote_ident("SkDb"), "\"SkDb\"");
        assert_eq!(quote_ident("2db"), "\"2db\"");
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
    }
}
