/// Type used for columns that do not declare one.
pub const DEFAULT_COLUMN_TYPE: &str = "character varying(255)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Name of the column
    pub name: String,

    /// SQL type, as written in the definition
    pub ty: String,

    /// True when the column rejects `NULL` values
    pub not_null: bool,

    /// SQL default value expression
    pub default: Option<String>,

    /// Documentation for the column
    pub description: Option<String>,
}

impl Column {
    /// Create a nullable column of the default type
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: DEFAULT_COLUMN_TYPE.to_string(),
            not_null: false,
            default: None,
            description: None,
        }
    }
}
