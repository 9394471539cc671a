use indexmap::IndexSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    PrimaryKey,
    Unique,
}

impl ConstraintKind {
    /// Parses the value of a constraint's `type` property.
    pub fn from_type(ty: &str) -> Option<ConstraintKind> {
        match ty {
            "pk" => Some(ConstraintKind::PrimaryKey),
            "unq" => Some(ConstraintKind::Unique),
            _ => None,
        }
    }

    pub fn as_type(self) -> &'static str {
        match self {
            ConstraintKind::PrimaryKey => "pk",
            ConstraintKind::Unique => "unq",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_type())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    /// Name of the constraint
    pub name: String,

    pub kind: ConstraintKind,

    /// Columns covered by the constraint, in declaration order
    pub columns: IndexSet<String>,
}

impl Constraint {
    pub fn is_primary_key(&self) -> bool {
        self.kind == ConstraintKind::PrimaryKey
    }

    pub fn is_unique(&self) -> bool {
        self.kind == ConstraintKind::Unique
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains(column)
    }
}
