use super::Statement;

use dbdef_core::schema::{Index, SortOrder, Table};

#[derive(Debug, Clone)]
pub struct CreateIndex {
    /// Name of the index
    pub name: String,

    /// Which table to index
    pub on: String,

    /// Index access method, such as `btree`
    pub using: String,

    /// The columns to index with their sort order
    pub columns: Vec<(String, SortOrder)>,
}

impl Statement {
    pub fn create_index(table: &Table, index: &Index) -> Self {
        CreateIndex {
            name: index.name.clone(),
            on: table.name.clone(),
            using: index.ty.clone(),
            columns: index
                .columns
                .iter()
                .map(|(column, order)| (column.clone(), *order))
                .collect(),
        }
        .into()
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
