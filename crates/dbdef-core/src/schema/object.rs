use super::{Function, Properties, Sequence, Table};
use std::fmt;

/// The kind of a database object, selected by the first line of its
/// definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Table,
    Sequence,
    Function,
}

impl ObjectType {
    pub const ALL: [ObjectType; 3] = [
        ObjectType::Table,
        ObjectType::Sequence,
        ObjectType::Function,
    ];

    /// The discriminator line identifying this kind in a definition file.
    pub fn discriminator(self) -> &'static str {
        match self {
            ObjectType::Table => "TBL",
            ObjectType::Sequence => "SEQ",
            ObjectType::Function => "FUNC",
        }
    }

    pub fn from_discriminator(discriminator: &str) -> Option<ObjectType> {
        ObjectType::ALL
            .into_iter()
            .find(|ty| ty.discriminator() == discriminator)
    }

    /// Human readable label, used as a fallback title by renderers.
    pub fn label(self) -> &'static str {
        match self {
            ObjectType::Table => "Table",
            ObjectType::Sequence => "Sequence",
            ObjectType::Function => "Function",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.discriminator())
    }
}

/// A parsed database object.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Table(Table),
    Sequence(Sequence),
    Function(Function),
}

impl Object {
    pub fn name(&self) -> &str {
        match self {
            Object::Table(table) => &table.name,
            Object::Sequence(sequence) => &sequence.name,
            Object::Function(function) => &function.name,
        }
    }

    pub fn ty(&self) -> ObjectType {
        match self {
            Object::Table(_) => ObjectType::Table,
            Object::Sequence(_) => ObjectType::Sequence,
            Object::Function(_) => ObjectType::Function,
        }
    }

    pub fn properties(&self) -> &Properties {
        match self {
            Object::Table(table) => &table.properties,
            Object::Sequence(sequence) => &sequence.properties,
            Object::Function(function) => &function.properties,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Object::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Object::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Object::Function(function) => Some(function),
            _ => None,
        }
    }
}

impl From<Table> for Object {
    fn from(value: Table) -> Self {
        Object::Table(value)
    }
}

impl From<Sequence> for Object {
    fn from(value: Sequence) -> Self {
        Object::Sequence(value)
    }
}

impl From<Function> for Object {
    fn from(value: Function) -> Self {
        Object::Function(value)
    }
}
