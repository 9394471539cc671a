//! Parsers for the definition language.
//!
//! The primitive parsers ([`ArgsListParser`], [`NamedArgsListParser`],
//! [`NamedSpecWithArgsRawParser`], [`NamedSpecWithNamedArgsParser`] and
//! [`DefinitionWithPropertiesParser`]) split single lines. The object parsers
//! walk whole definition files line by line and are reached through
//! [`ParserRegistry`].

mod args;
pub use args::ArgsListParser;

mod definition;
pub use definition::{DefinitionWithProperties, DefinitionWithPropertiesParser};

mod function;

mod makefile;
pub use makefile::parse_makefile;

mod mapping;
pub use mapping::parse_mapping;

mod named_args;
pub use named_args::{NamedArgs, NamedArgsListParser};

mod named_spec;
pub use named_spec::{
    NamedSpecWithArgs, NamedSpecWithArgsRawParser, NamedSpecWithNamedArgs,
    NamedSpecWithNamedArgsParser,
};

mod parser;
use parser::{Marker, Parser};

mod reader;
pub use reader::SourceReader;

mod registry;
pub use registry::{sniff_object_type, ObjectParser, ParserRegistry};

mod sequence;

mod table;

use crate::Result;

/// A definition-file object that can be parsed from its source lines.
pub(crate) trait Parse: Sized {
    /// Reader used to prepare the object's source lines.
    fn reader() -> SourceReader {
        SourceReader::new()
    }

    fn parse(p: &mut Parser<'_>) -> Result<Self>;
}

/// Interprets a flag value. `true`, `yes`, `on` and `1` are true, ignoring
/// case; everything else is false.
pub fn parse_bool(value: &str) -> bool {
    let value = value.trim();
    ["true", "yes", "on", "1"]
        .iter()
        .any(|truthy| value.eq_ignore_ascii_case(truthy))
}

/// Reads a flag from named arguments: a bare key is true, a key with a value
/// follows [`parse_bool`], and a missing key is false.
pub(crate) fn flag(args: &NamedArgs, key: &str) -> bool {
    match args.get(key) {
        Some(Some(value)) => parse_bool(value),
        Some(None) => true,
        None => false,
    }
}
