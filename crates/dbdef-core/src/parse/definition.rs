use super::{NamedArgs, NamedArgsListParser, NamedSpecWithArgsRawParser};
use crate::Mapping;

/// A `name(args); key=value; ...` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionWithProperties {
    /// The object name, with mapping tokens expanded
    pub name: String,

    /// The raw contents of the object's parentheses
    pub args: String,

    /// The `key=value` pairs following the object segment
    pub properties: NamedArgs,
}

impl DefinitionWithProperties {
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(|value| value.as_deref())
    }
}

/// Parses the definition shape shared by columns, constraints and indexes.
///
/// The line is split on its first `;` outside parentheses: the left side is
/// the object segment, the right side the properties segment.
#[derive(Debug, Clone, Copy)]
pub struct DefinitionWithPropertiesParser<'a> {
    mapping: &'a Mapping,
}

impl<'a> DefinitionWithPropertiesParser<'a> {
    pub fn new(mapping: &'a Mapping) -> Self {
        Self { mapping }
    }

    /// Returns `None` when the line has no object segment.
    pub fn parse(&self, input: &str) -> Option<DefinitionWithProperties> {
        let (object, properties) = split_top_level(input, ';');

        let object = object.trim();
        if object.is_empty() {
            return None;
        }

        let spec = NamedSpecWithArgsRawParser.parse(object);

        Some(DefinitionWithProperties {
            name: self.mapping.expand(spec.name),
            args: spec.args.to_string(),
            properties: properties
                .map(|properties| NamedArgsListParser::new(';').parse(properties))
                .unwrap_or_default(),
        })
    }
}

/// Splits `input` at the first `separator` that is not enclosed in
/// parentheses.
fn split_top_level(input: &str, separator: char) -> (&str, Option<&str>) {
    let mut depth = 0usize;

    for (i, ch) in input.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ch if ch == separator && depth == 0 => {
                return (&input[..i], Some(&input[i + ch.len_utf8()..]));
            }
            _ => {}
        }
    }

    (input, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Token;
    use pretty_assertions::assert_eq;

    #[test]
    fn object_without_properties() {
        let mapping = Mapping::new();
        let def = DefinitionWithPropertiesParser::new(&mapping)
            .parse("ix_priority(task_priority=DESC, task_id)")
            .unwrap();

        assert_eq!(def.name, "ix_priority");
        assert_eq!(def.args, "task_priority=DESC, task_id");
        assert!(def.properties.is_empty());
    }

    #[test]
    fn properties_follow_first_top_level_semicolon() {
        let mapping = Mapping::new();
        let def = DefinitionWithPropertiesParser::new(&mapping)
            .parse("id(type=bigint;not_null=true); description=Row id; default=0")
            .unwrap();

        assert_eq!(def.name, "id");
        assert_eq!(def.args, "type=bigint;not_null=true");
        assert_eq!(def.property("description"), Some("Row id"));
        assert_eq!(def.property("default"), Some("0"));
    }

    #[test]
    fn name_is_expanded_args_are_not() {
        let mapping = Mapping::new().with(Token::QueueTableName, "jobs");
        let def = DefinitionWithPropertiesParser::new(&mapping)
            .parse("pk_$queue_table_name$($queue_table_name$_id);type=pk")
            .unwrap();

        assert_eq!(def.name, "pk_jobs");
        assert_eq!(def.args, "$queue_table_name$_id");
        assert_eq!(def.property("type"), Some("pk"));
    }

    #[test]
    fn empty_definition() {
        let mapping = Mapping::new();
        let parser = DefinitionWithPropertiesParser::new(&mapping);
        assert_eq!(parser.parse(""), None);
        assert_eq!(parser.parse("  ;type=pk"), None);
    }

    #[test]
    fn split_top_level_ignores_nested() {
        assert_eq!(split_top_level("a(b;c);d", ';'), ("a(b;c)", Some("d")));
        assert_eq!(split_top_level("a(b;c)", ';'), ("a(b;c)", None));
        assert_eq!(split_top_level("a;b;c", ';'), ("a", Some("b;c")));
    }
}
