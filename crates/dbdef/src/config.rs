use std::path::PathBuf;

/// Default name of the makefile, relative to the source directory.
pub const DEFAULT_MAKEFILE: &str = "makefile";

/// Configuration for a compiler run
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the makefile, mapping file, definition files and templates
    /// are resolved against
    pub source_dir: PathBuf,

    /// Root directory for every output that writes files
    pub output_dir: PathBuf,

    /// Name of the makefile, relative to `source_dir`
    pub makefile: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            makefile: DEFAULT_MAKEFILE.to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source directory
    pub fn source_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_dir = path.into();
        self
    }

    /// Set the output directory
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    /// Set the makefile name
    pub fn makefile(mut self, name: impl Into<String>) -> Self {
        self.makefile = name.into();
        self
    }
}
