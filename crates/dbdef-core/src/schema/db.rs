use super::{Function, Object, OutputRequest, Sequence, Table};
use crate::Mapping;

/// The compilation unit handed to every output.
#[derive(Debug, Clone)]
pub struct Db {
    pub mapping: Mapping,

    /// Outputs requested by the makefile
    pub outputs: Vec<OutputRequest>,

    pub tables: Vec<Table>,

    pub sequences: Vec<Sequence>,

    pub functions: Vec<Function>,
}

impl Db {
    /// Partitions `objects` by kind, preserving their relative order.
    pub fn new(
        mapping: Mapping,
        outputs: Vec<OutputRequest>,
        objects: impl IntoIterator<Item = Object>,
    ) -> Db {
        let mut db = Db {
            mapping,
            outputs,
            tables: vec![],
            sequences: vec![],
            functions: vec![],
        };

        for object in objects {
            match object {
                Object::Table(table) => db.tables.push(table),
                Object::Sequence(sequence) => db.sequences.push(sequence),
                Object::Function(function) => db.functions.push(function),
            }
        }

        db
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    pub fn sequence(&self, name: &str) -> Option<&Sequence> {
        self.sequences.iter().find(|sequence| sequence.name == name)
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|function| function.name == name)
    }

    pub fn object_count(&self) -> usize {
        self.tables.len() + self.sequences.len() + self.functions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_by_kind() {
        let db = Db::new(
            Mapping::new(),
            vec![],
            [
                Object::from(Table::new("a")),
                Object::from(Sequence::new("s")),
                Object::from(Table::new("b")),
                Object::from(Function::new("f")),
            ],
        );

        let tables: Vec<_> = db.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(tables, ["a", "b"]);
        assert_eq!(db.sequences.len(), 1);
        assert!(db.function("f").is_some());
        assert_eq!(db.object_count(), 4);
    }
}
