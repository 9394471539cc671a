use crate::parse::NamedArgs;

pub const DEFAULT_MAPPING_FILE: &str = "sk_mapping.dbmap";

pub const DEFAULT_DEFINITIONS_GLOB: &str = "*.dbdef";

/// The contents of a compiler makefile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakefileInfo {
    /// Mapping file, relative to the source directory
    pub mapping_file: String,

    /// Glob selecting the definition files, relative to the source directory
    pub definitions_glob: String,

    /// Requested outputs, in makefile order
    pub outputs: Vec<OutputRequest>,
}

impl Default for MakefileInfo {
    fn default() -> Self {
        Self {
            mapping_file: DEFAULT_MAPPING_FILE.to_string(),
            definitions_glob: DEFAULT_DEFINITIONS_GLOB.to_string(),
            outputs: vec![],
        }
    }
}

/// One `OUTPUT=` line: the renderer name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRequest {
    pub name: String,
    pub args: NamedArgs,
}

impl OutputRequest {
    pub fn new(name: impl Into<String>, args: NamedArgs) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Returns the value of an argument, if it was given one.
    pub fn arg(&self, key: &str) -> Option<&str> {
        self.args.get(key).and_then(|value| value.as_deref())
    }
}
