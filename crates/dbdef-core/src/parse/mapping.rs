use super::SourceReader;
use crate::{Mapping, Token};
use tracing::debug;

const MARKER: &str = "MAP:";

/// Parses a mapping file made of `MAP:<token>=<value>` lines.
///
/// Values are split on the first `=`. Lines naming unknown tokens are
/// ignored, and tokens that are never assigned keep their defaults.
pub fn parse_mapping(contents: &str) -> Mapping {
    let mut mapping = Mapping::new();

    for line in SourceReader::new().read(contents) {
        let Some((name, value)) = line
            .strip_prefix(MARKER)
            .and_then(|symbol| symbol.split_once('='))
        else {
            debug!(line = line.as_str(), "ignoring malformed mapping line");
            continue;
        };

        match Token::from_name(name.trim()) {
            Some(token) => mapping = mapping.with(token, value.trim()),
            None => debug!(name, "ignoring unknown mapping token"),
        }
    }

    mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_known_tokens() {
        let mapping = parse_mapping(
            "# queue names\n\
             MAP:queue_table_name=jobs_queue\n\
             MAP:dequeue_function_name = jobs_dequeue\n\
             MAP:unknown_name=ignored\n\
             MAP:metrics_table_name\n\
             MAP:results_queue_table_name=a=b\n",
        );

        assert_eq!(mapping.queue_table_name(), "jobs_queue");
        assert_eq!(mapping.dequeue_function_name(), "jobs_dequeue");
        assert_eq!(mapping.results_queue_table_name(), "a=b");
        assert_eq!(mapping.metrics_table_name(), "sk_metrics_t");
        assert!(!mapping.is_assigned(Token::MetricsTableName));
    }

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(parse_mapping(""), Mapping::new());
    }
}
