use super::{
    parser::{BODY_END, BODY_START},
    Marker, NamedSpecWithNamedArgsParser, Parse, Parser, SourceReader,
};
use crate::{
    err,
    schema::{
        Direction, Function, FunctionReturn, ObjectType, Param, Properties, TABLE_RETURN_TYPE,
    },
    Error, Result,
};
use indexmap::IndexMap;
use tracing::debug;

#[derive(Default)]
struct Builder<'a> {
    name: Option<String>,
    properties: Properties,
    params: Vec<Param>,
    returns: Option<FunctionReturn>,
    body: Vec<&'a str>,
}

impl Parse for Function {
    fn reader() -> SourceReader {
        SourceReader::new().verbatim(BODY_START, BODY_END)
    }

    fn parse(p: &mut Parser<'_>) -> Result<Function> {
        p.expect_discriminator(ObjectType::Function)?;

        let mut builder = Builder::default();
        let mut reading_body = false;

        while let Some(line) = p.next_line() {
            if reading_body {
                if line.trim() == BODY_END {
                    reading_body = false;
                } else {
                    builder.body.push(line);
                }
                continue;
            }

            if line == BODY_START {
                reading_body = true;
                continue;
            }

            builder
                .line(p, line)
                .map_err(|err| err.context(err!("line `{line}`")))?;
        }

        if reading_body {
            return Err(Error::invalid_definition(format!(
                "`{BODY_START}` block is not closed by `{BODY_END}`"
            )));
        }

        builder.build()
    }
}

impl<'a> Builder<'a> {
    fn line(&mut self, p: &Parser<'_>, line: &str) -> Result<()> {
        match Marker::split(line) {
            Some((Marker::Name, rest)) => self.name = Some(p.name(rest)?),
            Some((Marker::Props, rest)) => self.properties.extend(p.properties(rest)),
            Some((Marker::Param, rest)) => self.params.push(Param::from_spec(rest)?),
            Some((Marker::Return, rest)) => self.returns = Some(FunctionReturn::from_spec(rest)?),
            _ => debug!(line, "ignoring unrecognized function definition line"),
        }

        Ok(())
    }

    fn build(self) -> Result<Function> {
        let Some(name) = self.name else {
            return Err(Error::invalid_definition("function has no `NAME:` line"));
        };

        Ok(Function {
            name,
            properties: self.properties,
            params: self.params,
            returns: self.returns.unwrap_or_default(),
            body: self.body.join("\n"),
        })
    }
}

impl Param {
    /// `name(type=..;direction=in|out;default=..;description=..)`
    fn from_spec(input: &str) -> Result<Param> {
        let spec = NamedSpecWithNamedArgsParser::new(';').parse(input);
        if spec.name.is_empty() {
            return Err(Error::invalid_definition("parameter without a name"));
        }

        // Parameter names are taken literally.
        let mut param = Param::new(spec.name);
        let value = |key: &str| spec.args.get(key).and_then(|value| value.clone());

        if let Some(ty) = value("type") {
            param.ty = ty;
        }

        if let Some(direction) = value("direction") {
            param.direction = Direction::parse(&direction).ok_or_else(|| {
                Error::invalid_definition(format!(
                    "parameter `{}` has unknown direction `{direction}`",
                    param.name
                ))
            })?;
        }

        param.default = value("default");
        param.description = value("description");
        Ok(param)
    }
}

impl FunctionReturn {
    /// `type` or `table(column=type;...)`
    fn from_spec(input: &str) -> Result<FunctionReturn> {
        let spec = NamedSpecWithNamedArgsParser::new(';').parse(input);
        if spec.name.is_empty() {
            return Err(Error::invalid_definition("return without a type"));
        }

        // Only a table return has columns; any other type is kept whole, so
        // that `character varying(255)` survives.
        if spec.name != TABLE_RETURN_TYPE {
            return Ok(FunctionReturn::new(input, IndexMap::new()));
        }

        let mut columns = IndexMap::new();
        for (column, ty) in spec.args {
            let Some(ty) = ty else {
                return Err(Error::invalid_definition(format!(
                    "returned column `{column}` has no type"
                )));
            };
            columns.insert(column, ty);
        }

        Ok(FunctionReturn::new(spec.name, columns))
    }
}
