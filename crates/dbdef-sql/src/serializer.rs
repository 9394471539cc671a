#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::Qualified;

// Fragment serializers
mod column_def;
mod statement;

use crate::stmt::Statement;

use dbdef_core::schema::{Function, Sequence, Table};

/// Schema objects are created in when none is configured.
pub const DEFAULT_SCHEMA: &str = "public";

/// Serialize a statement to a PostgreSQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer<'a> {
    /// Schema qualifying every object name
    schema: &'a str,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer<'static> {
    pub fn postgresql() -> Self {
        Serializer {
            schema: DEFAULT_SCHEMA,
        }
    }
}

impl<'a> Serializer<'a> {
    /// Qualify object names with `schema` instead of [`DEFAULT_SCHEMA`].
    pub fn with_schema(schema: &'a str) -> Self {
        Serializer { schema }
    }

    pub fn schema(&self) -> &'a str {
        self.schema
    }

    /// Serializes a single statement, terminated by `;`.
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    /// Serializes statements into a script, each followed by an empty line.
    pub fn serialize_script(&self, stmts: &[Statement]) -> String {
        let mut ret = String::new();

        for stmt in stmts {
            ret.push_str(&self.serialize(stmt));
            ret.push_str("\n\n");
        }

        ret
    }

    pub fn table(&self, table: &Table) -> String {
        self.serialize_script(&Statement::for_table(table))
    }

    pub fn sequence(&self, sequence: &Sequence) -> String {
        self.serialize_script(&Statement::for_sequence(sequence))
    }

    pub fn function(&self, function: &Function) -> String {
        self.serialize_script(&Statement::for_function(function))
    }
}

impl Default for Serializer<'static> {
    fn default() -> Self {
        Serializer::postgresql()
    }
}
