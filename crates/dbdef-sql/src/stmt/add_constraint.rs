use super::Statement;

use dbdef_core::schema::{Constraint, ConstraintKind, Table};

/// `ALTER TABLE ONLY .. ADD CONSTRAINT ..`
#[derive(Debug, Clone)]
pub struct AddConstraint {
    /// Table the constraint is added to
    pub table: String,

    /// Name of the constraint
    pub name: String,

    pub kind: ConstraintKind,

    pub columns: Vec<String>,
}

impl Statement {
    pub fn add_constraint(table: &Table, constraint: &Constraint) -> Self {
        AddConstraint {
            table: table.name.clone(),
            name: constraint.name.clone(),
            kind: constraint.kind,
            columns: constraint.columns.iter().cloned().collect(),
        }
        .into()
    }
}

impl From<AddConstraint> for Statement {
    fn from(value: AddConstraint) -> Self {
        Self::AddConstraint(value)
    }
}
