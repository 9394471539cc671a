use super::{NamedArgs, NamedArgsListParser};

/// An `identifier(raw-args)` split into its two halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedSpecWithArgs<'a> {
    pub name: &'a str,

    /// Everything between the parentheses, untouched
    pub args: &'a str,
}

/// Splits `identifier(raw-args)` at the first `(` and the last `)`.
///
/// Nested parentheses inside the arguments are not matched; they simply end
/// up in `args`. Input without a `(` followed by a `)` is all name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedSpecWithArgsRawParser;

impl NamedSpecWithArgsRawParser {
    pub fn parse<'a>(&self, input: &'a str) -> NamedSpecWithArgs<'a> {
        let input = input.trim();

        let split = input.find('(').and_then(|open| {
            input
                .rfind(')')
                .filter(|close| *close > open)
                .map(|close| (open, close))
        });

        match split {
            Some((open, close)) => NamedSpecWithArgs {
                name: input[..open].trim(),
                args: &input[open + 1..close],
            },
            None => NamedSpecWithArgs {
                name: input,
                args: "",
            },
        }
    }
}

/// An `identifier(key=value;...)` with its arguments parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSpecWithNamedArgs {
    pub name: String,
    pub args: NamedArgs,
}

/// Composes [`NamedSpecWithArgsRawParser`] with [`NamedArgsListParser`].
#[derive(Debug, Clone, Copy)]
pub struct NamedSpecWithNamedArgsParser {
    args: NamedArgsListParser,
}

impl NamedSpecWithNamedArgsParser {
    pub fn new(separator: char) -> Self {
        Self {
            args: NamedArgsListParser::new(separator),
        }
    }

    pub fn parse(&self, input: &str) -> NamedSpecWithNamedArgs {
        let raw = NamedSpecWithArgsRawParser.parse(input);

        NamedSpecWithNamedArgs {
            name: raw.name.to_string(),
            args: self.args.parse(raw.args),
        }
    }
}

impl Default for NamedSpecWithNamedArgsParser {
    fn default() -> Self {
        Self::new(';')
    }
}
