use super::{flag, OutputProvider, ScriptBuffers};
use dbdef_core::{
    err,
    schema::{Function, OutputRequest, Sequence, Table},
    Error, Result,
};
use dbdef_driver_postgresql::{ConnectionInfo, PostgreSQL};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbCreateOptions {
    /// Parsed from `conn`; always names a database
    pub connection: ConnectionInfo,

    /// Drop an existing database before creating it
    pub drop_if_exists: bool,
}

impl DbCreateOptions {
    pub fn from_request(request: &OutputRequest) -> Result<DbCreateOptions> {
        let Some(conn) = request.arg("conn") else {
            return Err(Error::invalid_configuration(
                "`db_create` output requires a `conn` argument",
            ));
        };

        let connection = ConnectionInfo::parse(conn)?;

        if !connection.has_database() {
            return Err(Error::invalid_configuration(
                "`db_create` connection string does not name a database",
            ));
        }

        Ok(DbCreateOptions {
            connection,
            drop_if_exists: flag(request, "drop_if_exists", false),
        })
    }
}

/// Creates the database and runs every object's DDL against it.
pub struct DbCreateOutput {
    options: DbCreateOptions,
    buffers: ScriptBuffers,
}

impl DbCreateOutput {
    pub fn new(options: DbCreateOptions) -> DbCreateOutput {
        DbCreateOutput {
            options,
            buffers: ScriptBuffers::default(),
        }
    }
}

impl OutputProvider for DbCreateOutput {
    fn write_table(&mut self, table: &Table) -> Result<()> {
        self.buffers.write_table(table);
        Ok(())
    }

    fn write_sequence(&mut self, sequence: &Sequence) -> Result<()> {
        self.buffers.write_sequence(sequence);
        Ok(())
    }

    fn write_function(&mut self, function: &Function) -> Result<()> {
        self.buffers.write_function(function);
        Ok(())
    }

    fn commit(self: Box<Self>) -> Result<()> {
        let info = &self.options.connection;

        let mut server = PostgreSQL::connect_server(info)?;
        let created = server
            .ensure_database(&info.database, self.options.drop_if_exists)
            .map_err(|err| err.context(err!("failed to create database `{}`", info.database)))?;
        drop(server);

        if created {
            info!(database = %info.database, "database created");
        }

        let mut db = PostgreSQL::connect(info)?;

        for (name, sql) in self.buffers.iter() {
            debug!(object = name, "creating object");
            db.batch_execute(sql)
                .map_err(|err| err.context(err!("failed to create object `{name}`")))?;
        }

        info!(
            database = %info.database,
            objects = self.buffers.len(),
            "database objects created"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbdef_core::parse::NamedArgsListParser;

    fn options(args: &str) -> Result<DbCreateOptions> {
        let request = OutputRequest::new("db_create", NamedArgsListParser::new(';').parse(args));
        DbCreateOptions::from_request(&request)
    }

    #[test]
    fn options_from_request() {
        let options = options(
            "conn=host:db.local,port:5433,user:sk,password:secret,database:sk_db;drop_if_exists=true",
        )
        .unwrap();

        assert_eq!(options.connection.host, "db.local");
        assert_eq!(options.connection.port, 5433);
        assert_eq!(options.connection.database, "sk_db");
        assert!(options.drop_if_exists);
    }

    #[test]
    fn connection_defaults() {
        let options = options("conn=database:sk_db").unwrap();
        assert_eq!(options.connection.host, "localhost");
        assert_eq!(options.connection.port, 5432);
        assert!(!options.drop_if_exists);
    }

    #[test]
    fn missing_connection() {
        let err = options("drop_if_exists=true").unwrap_err();
        assert!(err.is_invalid_configuration());

        let err = options("conn=host:localhost").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: `db_create` connection string does not name a database"
        );
    }
}
