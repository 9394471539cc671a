use super::Statement;

use dbdef_core::schema::Sequence;

/// Settings left unset use the server defaults.
#[derive(Debug, Clone)]
pub struct CreateSequence {
    pub name: String,
    pub start: Option<String>,
    pub increment: Option<String>,
    pub min_value: Option<String>,
    pub max_value: Option<String>,
    pub cache: Option<String>,
    pub cycle: bool,
}

impl Statement {
    pub fn create_sequence(sequence: &Sequence) -> Self {
        let setting = |value: Option<&str>| value.map(str::to_string);

        CreateSequence {
            name: sequence.name.clone(),
            start: setting(sequence.start()),
            increment: setting(sequence.increment()),
            min_value: setting(sequence.min_value()),
            max_value: setting(sequence.max_value()),
            cache: setting(sequence.cache()),
            cycle: sequence.cycle(),
        }
        .into()
    }
}

impl From<CreateSequence> for Statement {
    fn from(value: CreateSequence) -> Self {
        Self::CreateSequence(value)
    }
}
