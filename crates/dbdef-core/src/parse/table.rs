use super::{
    flag, ArgsListParser, DefinitionWithProperties, Marker, NamedArgs, NamedArgsListParser,
    Parse, Parser,
};
use crate::{
    err,
    schema::{
        Column, Constraint, ConstraintKind, Index, ObjectType, Properties, SortOrder, Table,
        DEFAULT_INDEX_TYPE,
    },
    Error, Result,
};
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

#[derive(Default)]
struct Builder {
    name: Option<String>,
    properties: Properties,
    columns: Vec<Column>,
    primary_key: Option<Constraint>,
    unique_keys: Vec<Constraint>,
    indexes: Vec<Index>,
}

impl Parse for Table {
    fn parse(p: &mut Parser<'_>) -> Result<Table> {
        p.expect_discriminator(ObjectType::Table)?;

        let mut builder = Builder::default();

        while let Some(line) = p.next_line() {
            builder
                .line(p, line)
                .map_err(|err| err.context(err!("line `{line}`")))?;
        }

        builder.build()
    }
}

impl Builder {
    fn line(&mut self, p: &Parser<'_>, line: &str) -> Result<()> {
        match Marker::split(line) {
            Some((Marker::Name, rest)) => self.name = Some(p.name(rest)?),
            Some((Marker::Props, rest)) => self.properties.extend(p.properties(rest)),
            Some((marker @ Marker::Column, rest)) => {
                let def = p.definition(marker, rest)?;
                self.columns.push(Column::from_definition(p, def));
            }
            Some((marker @ Marker::Constraint, rest)) => {
                let def = p.definition(marker, rest)?;
                self.push_constraint(Constraint::from_definition(p, def)?);
            }
            Some((marker @ Marker::Index, rest)) => {
                let def = p.definition(marker, rest)?;
                self.indexes.push(Index::from_definition(p, def)?);
            }
            _ => debug!(line, "ignoring unrecognized table definition line"),
        }

        Ok(())
    }

    fn push_constraint(&mut self, constraint: Constraint) {
        match constraint.kind {
            ConstraintKind::Unique => self.unique_keys.push(constraint),
            ConstraintKind::PrimaryKey => {
                if let Some(previous) = self.primary_key.replace(constraint) {
                    warn!(
                        replaced = %previous.name,
                        "table declares more than one primary key; keeping the last one"
                    );
                }
            }
        }
    }

    fn build(self) -> Result<Table> {
        let Some(name) = self.name else {
            return Err(Error::invalid_definition("table has no `NAME:` line"));
        };

        Ok(Table {
            name,
            properties: self.properties,
            columns: self.columns,
            primary_key: self.primary_key,
            unique_keys: self.unique_keys,
            indexes: self.indexes,
        })
    }
}

impl Column {
    /// Column attributes come from the named arguments inside the
    /// parentheses, overridden by the properties segment. Only `default` is
    /// expanded through the mapping.
    fn from_definition(p: &Parser<'_>, def: DefinitionWithProperties) -> Column {
        let mut attrs: NamedArgs = NamedArgsListParser::new(';').parse(&def.args);
        attrs.extend(def.properties);

        let value = |key: &str| attrs.get(key).and_then(|value| value.clone());

        let mut column = Column::new(def.name);

        if let Some(ty) = value("type") {
            column.ty = ty;
        }

        column.not_null = flag(&attrs, "not_null");
        column.default = value("default").map(|default| p.expand(&default));
        column.description = value("description");
        column
    }
}

impl Constraint {
    fn from_definition(p: &Parser<'_>, def: DefinitionWithProperties) -> Result<Constraint> {
        let kind = match def.property("type") {
            Some(ty) => ConstraintKind::from_type(ty)
                .ok_or_else(|| Error::invalid_constraint_type(ty))?,
            None => return Err(Error::missing_constraint_type()),
        };

        let columns: IndexSet<String> = ArgsListParser::new(',')
            .parse(&def.args)
            .into_iter()
            .map(|column| p.expand(column))
            .collect();

        if columns.is_empty() {
            return Err(Error::invalid_definition(format!(
                "constraint `{}` covers no columns",
                def.name
            )));
        }

        Ok(Constraint {
            name: def.name,
            kind,
            columns,
        })
    }
}

impl Index {
    /// Index columns are written `column[=ASC|DESC]`, separated by commas.
    fn from_definition(p: &Parser<'_>, def: DefinitionWithProperties) -> Result<Index> {
        let mut columns = IndexMap::new();

        for (column, order) in NamedArgsListParser::new(',').parse(&def.args) {
            let order = match order.as_deref() {
                None | Some("") => SortOrder::default(),
                Some(order) => SortOrder::parse(order).ok_or_else(|| {
                    Error::invalid_definition(format!(
                        "index column `{column}` has unknown sort order `{order}`"
                    ))
                })?,
            };

            columns.insert(p.expand(&column), order);
        }

        if columns.is_empty() {
            return Err(Error::invalid_definition(format!(
                "index `{}` covers no columns",
                def.name
            )));
        }

        Ok(Index {
            ty: def
                .property("type")
                .unwrap_or(DEFAULT_INDEX_TYPE)
                .to_string(),
            name: def.name,
            columns,
        })
    }
}
