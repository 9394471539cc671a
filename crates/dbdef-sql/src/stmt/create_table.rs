use super::{ColumnDef, Statement};

use dbdef_core::schema::Table;

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions
    pub columns: Vec<ColumnDef>,
}

impl Statement {
    pub fn create_table(table: &Table) -> Self {
        CreateTable {
            name: table.name.clone(),
            columns: table.columns.iter().map(ColumnDef::from_schema).collect(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
