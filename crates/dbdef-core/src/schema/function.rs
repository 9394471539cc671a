use super::Properties;
use indexmap::IndexMap;
use std::fmt;

/// Type used for parameters that do not declare one.
pub const DEFAULT_PARAM_TYPE: &str = "character varying";

/// Return type assumed when a function has no `RET:` line.
pub const DEFAULT_RETURN_TYPE: &str = "void";

/// Return type whose named arguments describe the returned columns.
pub const TABLE_RETURN_TYPE: &str = "table";

/// Property naming the function's implementation language.
pub const LANGUAGE: &str = "lang";

/// Property overriding the body delimiter.
pub const SEPARATOR: &str = "sep";

pub const DEFAULT_SEPARATOR: &str = "$$";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    In,
    Out,
}

impl Direction {
    /// Parses `in` or `out`, ignoring case.
    pub fn parse(value: &str) -> Option<Direction> {
        if value.eq_ignore_ascii_case("in") {
            Some(Direction::In)
        } else if value.eq_ignore_ascii_case("out") {
            Some(Direction::Out)
        } else {
            None
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Direction::In => "IN",
            Direction::Out => "OUT",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,

    pub ty: String,

    pub direction: Direction,

    pub default: Option<String>,

    pub description: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: DEFAULT_PARAM_TYPE.to_string(),
            direction: Direction::In,
            default: None,
            description: None,
        }
    }
}

/// What a function returns.
///
/// Only a `table` return carries columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionReturn {
    ty: String,
    columns: IndexMap<String, String>,
}

impl FunctionReturn {
    /// Creates a return of the given type. `columns` is discarded unless the
    /// type is `table`.
    pub fn new(ty: impl Into<String>, columns: IndexMap<String, String>) -> Self {
        let ty = ty.into();
        let columns = if ty == TABLE_RETURN_TYPE {
            columns
        } else {
            IndexMap::new()
        };

        Self { ty, columns }
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn is_table(&self) -> bool {
        self.ty == TABLE_RETURN_TYPE
    }

    /// Returned columns and their types, for `table` returns.
    pub fn columns(&self) -> &IndexMap<String, String> {
        &self.columns
    }
}

impl Default for FunctionReturn {
    fn default() -> Self {
        Self::new(DEFAULT_RETURN_TYPE, IndexMap::new())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Name of the function
    pub name: String,

    pub properties: Properties,

    pub params: Vec<Param>,

    pub returns: FunctionReturn,

    /// The function body, exactly as written between `BODY:` and `BODY;`
    pub body: String,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Properties::default(),
            params: vec![],
            returns: FunctionReturn::default(),
            body: String::new(),
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.properties.get(LANGUAGE)
    }

    /// The delimiter quoting the body in `CREATE FUNCTION`.
    pub fn separator(&self) -> &str {
        self.properties.get(SEPARATOR).unwrap_or(DEFAULT_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_table_return_drops_columns() {
        let columns = IndexMap::from([("id".to_string(), "bigint".to_string())]);

        let ret = FunctionReturn::new("setof record", columns.clone());
        assert!(!ret.is_table());
        assert!(ret.columns().is_empty());

        let ret = FunctionReturn::new("table", columns);
        assert!(ret.is_table());
        assert_eq!(ret.columns().get("id").map(String::as_str), Some("bigint"));
    }

    #[test]
    fn separator_defaults() {
        let mut function = Function::new("sk_try_dequeue_task");
        assert_eq!(function.separator(), "$$");
        assert_eq!(function.returns.ty(), "void");

        function
            .properties
            .insert("sep", Some("$BODY$".to_string()));
        assert_eq!(function.separator(), "$BODY$");
    }
}
