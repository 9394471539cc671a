use super::{NamedSpecWithNamedArgsParser, SourceReader};
use crate::{
    schema::{MakefileInfo, OutputRequest, DEFAULT_DEFINITIONS_GLOB, DEFAULT_MAPPING_FILE},
    Error, Result,
};
use tracing::debug;

const MAP: &str = "MAP=";
const DEFINITIONS: &str = "DEFINITIONS=";
const OUTPUT: &str = "OUTPUT=";

/// Parses a compiler makefile.
///
/// ```text
/// MAP=<mapping-file>
/// DEFINITIONS=<glob>
/// OUTPUT=<name>(arg=value;...)
/// ```
pub fn parse_makefile(contents: &str) -> Result<MakefileInfo> {
    let lines = SourceReader::new().read(contents);
    if lines.is_empty() {
        return Err(Error::invalid_configuration("no contents found in makefile"));
    }

    let mut makefile = MakefileInfo::default();

    for line in &lines {
        if let Some(rest) = line.strip_prefix(MAP) {
            makefile.mapping_file = or_default(rest, DEFAULT_MAPPING_FILE);
        } else if let Some(rest) = line.strip_prefix(DEFINITIONS) {
            makefile.definitions_glob = or_default(rest, DEFAULT_DEFINITIONS_GLOB);
        } else if let Some(rest) = line.strip_prefix(OUTPUT) {
            let spec = NamedSpecWithNamedArgsParser::new(';').parse(rest);
            if spec.name.is_empty() {
                debug!(line = line.as_str(), "ignoring empty output");
                continue;
            }
            makefile.outputs.push(OutputRequest::new(spec.name, spec.args));
        } else {
            debug!(line = line.as_str(), "ignoring unrecognized makefile line");
        }
    }

    Ok(makefile)
}

fn or_default(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
