use indexmap::IndexMap;
use std::fmt;

/// Index method used when an index does not declare one.
pub const DEFAULT_INDEX_TYPE: &str = "btree";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses `ASC` or `DESC`, ignoring case.
    pub fn parse(value: &str) -> Option<SortOrder> {
        if value.eq_ignore_ascii_case("asc") {
            Some(SortOrder::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(SortOrder::Desc)
        } else {
            None
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    /// Name of the index
    pub name: String,

    /// Index method, e.g. `btree`
    pub ty: String,

    /// Indexed columns with their sort order
    pub columns: IndexMap<String, SortOrder>,
}
