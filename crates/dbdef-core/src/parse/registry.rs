use super::{Parse, Parser};
use crate::{
    schema::{Function, Object, ObjectType, Sequence, Table},
    Mapping, Result,
};

/// Returns the discriminator of a definition file: its first line that is
/// neither blank nor a comment.
pub fn sniff_object_type(contents: &str) -> Option<&str> {
    contents
        .strip_prefix('\u{feff}')
        .unwrap_or(contents)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Looks up the parser for an object type discriminator.
#[derive(Debug, Clone, Copy)]
pub struct ParserRegistry<'a> {
    mapping: &'a Mapping,
}

impl<'a> ParserRegistry<'a> {
    pub fn new(mapping: &'a Mapping) -> Self {
        Self { mapping }
    }

    /// Returns `None` if no parser handles `discriminator`.
    pub fn parser(&self, discriminator: &str) -> Option<ObjectParser<'a>> {
        ObjectType::from_discriminator(discriminator).map(|ty| self.parser_for(ty))
    }

    pub fn parser_for(&self, ty: ObjectType) -> ObjectParser<'a> {
        ObjectParser {
            ty,
            mapping: self.mapping,
        }
    }
}

/// Parses definition files of one object type.
#[derive(Debug, Clone, Copy)]
pub struct ObjectParser<'a> {
    ty: ObjectType,
    mapping: &'a Mapping,
}

impl ObjectParser<'_> {
    pub fn ty(&self) -> ObjectType {
        self.ty
    }

    /// Parses the full contents of a definition file.
    pub fn parse(&self, contents: &str) -> Result<Object> {
        match self.ty {
            ObjectType::Table => self.parse_as::<Table>(contents).map(Object::from),
            ObjectType::Sequence => self.parse_as::<Sequence>(contents).map(Object::from),
            ObjectType::Function => self.parse_as::<Function>(contents).map(Object::from),
        }
    }

    fn parse_as<T: Parse>(&self, contents: &str) -> Result<T> {
        let lines = T::reader().read(contents);
        Parser::new(self.mapping, &lines).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniff_skips_comments() {
        assert_eq!(sniff_object_type("\u{feff}# table\n\n  TBL \nNAME:x"), Some("TBL"));
        assert_eq!(sniff_object_type("# only comments\n"), None);
    }

    #[test]
    fn lookup() {
        let mapping = Mapping::new();
        let registry = ParserRegistry::new(&mapping);

        assert_eq!(registry.parser("SEQ").map(|p| p.ty()), Some(ObjectType::Sequence));
        assert!(registry.parser("VIEW").is_none());
        assert!(registry.parser("tbl").is_none());
    }
}
