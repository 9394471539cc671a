mod add_constraint;
pub use add_constraint::AddConstraint;

mod column_def;
pub use column_def::ColumnDef;

mod create_function;
pub use create_function::{CreateFunction, FunctionParamDef, Returns};

mod create_index;
pub use create_index::CreateIndex;

mod create_sequence;
pub use create_sequence::CreateSequence;

mod create_table;
pub use create_table::CreateTable;

use dbdef_core::schema::{Function, Sequence, Table};

#[derive(Debug, Clone)]
pub enum Statement {
    AddConstraint(AddConstraint),
    CreateFunction(CreateFunction),
    CreateIndex(CreateIndex),
    CreateSequence(CreateSequence),
    CreateTable(CreateTable),
}

impl Statement {
    /// The statements creating `table`: the table itself, then its primary
    /// key, unique keys and indexes.
    pub fn for_table(table: &Table) -> Vec<Statement> {
        let mut ret = vec![Statement::create_table(table)];

        ret.extend(
            table
                .primary_key
                .iter()
                .chain(&table.unique_keys)
                .map(|constraint| Statement::add_constraint(table, constraint)),
        );

        ret.extend(
            table
                .indexes
                .iter()
                .map(|index| Statement::create_index(table, index)),
        );

        ret
    }

    pub fn for_sequence(sequence: &Sequence) -> Vec<Statement> {
        vec![Statement::create_sequence(sequence)]
    }

    pub fn for_function(function: &Function) -> Vec<Statement> {
        vec![Statement::create_function(function)]
    }
}
