use super::{Column, Constraint, Index, Properties};

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table
    pub name: String,

    pub properties: Properties,

    /// The table's columns, in declaration order
    pub columns: Vec<Column>,

    pub primary_key: Option<Constraint>,

    pub unique_keys: Vec<Constraint>,

    pub indexes: Vec<Index>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Properties::default(),
            columns: vec![],
            primary_key: None,
            unique_keys: vec![],
            indexes: vec![],
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Returns `true` if the named column is part of the primary key.
    pub fn is_primary_key_column(&self, name: &str) -> bool {
        self.primary_key
            .as_ref()
            .is_some_and(|pk| pk.contains(name))
    }

    /// Returns `true` if the named column is part of any unique key.
    pub fn is_unique_key_column(&self, name: &str) -> bool {
        self.unique_keys.iter().any(|key| key.contains(name))
    }
}
