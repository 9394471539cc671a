use super::{
    DefinitionWithProperties, DefinitionWithPropertiesParser, NamedArgs, NamedArgsListParser,
    Parse,
};
use crate::{schema::ObjectType, Error, Mapping, Result};

/// Function body delimiters.
pub(crate) const BODY_START: &str = "BODY:";
pub(crate) const BODY_END: &str = "BODY;";

/// A line prefix identifying the role of a definition line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Marker {
    Name,
    Props,
    Column,
    Constraint,
    Index,
    Param,
    Return,
}

impl Marker {
    const ALL: [Marker; 7] = [
        Marker::Name,
        Marker::Props,
        Marker::Column,
        Marker::Constraint,
        Marker::Index,
        Marker::Param,
        Marker::Return,
    ];

    pub(crate) fn prefix(self) -> &'static str {
        match self {
            Marker::Name => "NAME:",
            Marker::Props => "PROPS:",
            Marker::Column => "COL:",
            Marker::Constraint => "CONSTRAINT:",
            Marker::Index => "IDX:",
            Marker::Param => "PARAM:",
            Marker::Return => "RET:",
        }
    }

    /// Splits a line into its marker and the trimmed remainder.
    pub(crate) fn split(line: &str) -> Option<(Marker, &str)> {
        Marker::ALL.into_iter().find_map(|marker| {
            line.strip_prefix(marker.prefix())
                .map(|rest| (marker, rest.trim()))
        })
    }
}

/// Walks the prepared lines of one definition file.
pub(crate) struct Parser<'a> {
    mapping: &'a Mapping,
    lines: std::slice::Iter<'a, String>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(mapping: &'a Mapping, lines: &'a [String]) -> Parser<'a> {
        Parser {
            mapping,
            lines: lines.iter(),
        }
    }

    pub(crate) fn parse<T: Parse>(&mut self) -> Result<T> {
        T::parse(self)
    }

    pub(crate) fn mapping(&self) -> &'a Mapping {
        self.mapping
    }

    pub(crate) fn expand(&self, input: &str) -> String {
        self.mapping.expand(input)
    }

    pub(crate) fn next_line(&mut self) -> Option<&'a str> {
        self.lines.next().map(String::as_str)
    }

    /// Reads the object name from a `NAME:` line.
    pub(crate) fn name(&self, input: &str) -> Result<String> {
        if input.is_empty() {
            return Err(Error::invalid_definition("`NAME:` line without a name"));
        }
        Ok(self.expand(input))
    }

    /// Reads the properties of a `PROPS:` line.
    pub(crate) fn properties(&self, input: &str) -> NamedArgs {
        NamedArgsListParser::new(';').parse(input)
    }

    /// Parses the remainder of a `COL:`, `CONSTRAINT:` or `IDX:` line.
    pub(crate) fn definition(
        &self,
        marker: Marker,
        input: &str,
    ) -> Result<DefinitionWithProperties> {
        DefinitionWithPropertiesParser::new(self.mapping)
            .parse(input)
            .ok_or_else(|| {
                Error::invalid_definition(format!("empty `{}` definition", marker.prefix()))
            })
    }

    /// Consumes the first line, which must be the discriminator of `ty`.
    pub(crate) fn expect_discriminator(&mut self, ty: ObjectType) -> Result<()> {
        match self.next_line() {
            Some(line) if line == ty.discriminator() => Ok(()),
            Some(line) => Err(Error::invalid_definition(format!(
                "expected `{}` on the first line, found `{line}`",
                ty.discriminator()
            ))),
            None => Err(Error::invalid_definition(format!(
                "expected `{}` on the first line, found an empty file",
                ty.discriminator()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_split() {
        assert_eq!(
            Marker::split("COL: id(type=bigint)"),
            Some((Marker::Column, "id(type=bigint)"))
        );
        assert_eq!(
            Marker::split("CONSTRAINT:pk(id);type=pk"),
            Some((Marker::Constraint, "pk(id);type=pk"))
        );
        assert_eq!(Marker::split("BODY:"), None);
        assert_eq!(Marker::split("name:lowercase"), None);
    }

    #[test]
    fn discriminator_mismatch() {
        let mapping = Mapping::new();
        let lines = vec!["SEQ".to_string()];
        let mut p = Parser::new(&mapping, &lines);

        let err = p.expect_discriminator(ObjectType::Table).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid definition: expected `TBL` on the first line, found `SEQ`"
        );
    }
}
