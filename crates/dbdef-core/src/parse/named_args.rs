use super::ArgsListParser;
use indexmap::IndexMap;

/// Named arguments in declaration order. A key written without `=` maps to
/// `None`.
pub type NamedArgs = IndexMap<String, Option<String>>;

/// Parses `key=value` pieces separated by a separator.
///
/// Each piece is split on its first `=`; keys and values are trimmed, pieces
/// with an empty key are dropped and later duplicates overwrite earlier ones.
#[derive(Debug, Clone, Copy)]
pub struct NamedArgsListParser {
    args: ArgsListParser,
}

impl NamedArgsListParser {
    pub fn new(separator: char) -> Self {
        Self {
            args: ArgsListParser::new(separator),
        }
    }

    pub fn parse(&self, input: &str) -> NamedArgs {
        let mut ret = NamedArgs::new();

        for piece in self.args.parse(input) {
            let (key, value) = match piece.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value.trim().to_string())),
                None => (piece, None),
            };

            if !key.is_empty() {
                ret.insert(key.to_string(), value);
            }
        }

        ret
    }
}

impl Default for NamedArgsListParser {
    fn default() -> Self {
        Self::new(';')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(entries: &[(&str, Option<&str>)]) -> NamedArgs {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.map(str::to_string)))
            .collect()
    }

    #[test]
    fn keys_values_and_flags() {
        let parser = NamedArgsListParser::new(';');
        assert_eq!(
            parser.parse("type=bigint; not_null = true ;cycle;=orphan"),
            args(&[
                ("type", Some("bigint")),
                ("not_null", Some("true")),
                ("cycle", None),
            ])
        );
    }

    #[test]
    fn splits_on_first_equals() {
        let parser = NamedArgsListParser::new(';');
        assert_eq!(
            parser.parse("default=a=b"),
            args(&[("default", Some("a=b"))])
        );
    }

    #[test]
    fn last_duplicate_wins() {
        let parser = NamedArgsListParser::new(',');
        let parsed = parser.parse("a=1,b=2,a=3");
        assert_eq!(parsed, args(&[("a", Some("3")), ("b", Some("2"))]));
    }
}
