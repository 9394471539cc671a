/// Splits a string on a separator, trimming every piece and dropping empty
/// ones.
#[derive(Debug, Clone, Copy)]
pub struct ArgsListParser {
    separator: char,
}

impl ArgsListParser {
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    pub fn parse<'a>(&self, input: &'a str) -> Vec<&'a str> {
        input
            .split(self.separator)
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .collect()
    }
}

impl Default for ArgsListParser {
    fn default() -> Self {
        Self::new(',')
    }
}
