use super::{Marker, Parse, Parser};
use crate::{
    err,
    schema::{ObjectType, Properties, Sequence},
    Error, Result,
};
use tracing::debug;

impl Parse for Sequence {
    fn parse(p: &mut Parser<'_>) -> Result<Sequence> {
        p.expect_discriminator(ObjectType::Sequence)?;

        let mut name = None;
        let mut properties = Properties::new();

        while let Some(line) = p.next_line() {
            match Marker::split(line) {
                Some((Marker::Name, rest)) => {
                    name = Some(p.name(rest).map_err(|e| e.context(err!("line `{line}`")))?)
                }
                Some((Marker::Props, rest)) => properties.extend(p.properties(rest)),
                _ => debug!(line, "ignoring unrecognized sequence definition line"),
            }
        }

        let Some(name) = name else {
            return Err(Error::invalid_definition("sequence has no `NAME:` line"));
        };

        Ok(Sequence { name, properties })
    }
}
