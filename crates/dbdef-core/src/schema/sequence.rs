use super::Properties;

pub const START: &str = "start";
pub const INCREMENT: &str = "increment";
pub const MIN_VALUE: &str = "min_value";
pub const MAX_VALUE: &str = "max_value";
pub const CACHE: &str = "cache";
pub const CYCLE: &str = "cycle";

/// A sequence. All of its settings live in its properties; the accessors
/// return them unchanged and leave SQL defaults to the renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    /// Name of the sequence
    pub name: String,

    pub properties: Properties,
}

impl Sequence {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Properties::default(),
        }
    }

    pub fn start(&self) -> Option<&str> {
        self.properties.get(START)
    }

    pub fn increment(&self) -> Option<&str> {
        self.properties.get(INCREMENT)
    }

    pub fn min_value(&self) -> Option<&str> {
        self.properties.get(MIN_VALUE)
    }

    pub fn max_value(&self) -> Option<&str> {
        self.properties.get(MAX_VALUE)
    }

    pub fn cache(&self) -> Option<&str> {
        self.properties.get(CACHE)
    }

    pub fn cycle(&self) -> bool {
        self.properties.get_bool(CYCLE)
    }
}
