use super::Statement;

use dbdef_core::schema::{Direction, Function, Param};

/// `CREATE OR REPLACE FUNCTION`
#[derive(Debug, Clone)]
pub struct CreateFunction {
    pub name: String,
    pub params: Vec<FunctionParamDef>,
    pub returns: Returns,

    /// Procedural language, omitted from the statement when unset
    pub language: Option<String>,

    /// Dollar-quote tag wrapping the body
    pub separator: String,

    pub body: String,
}

#[derive(Debug, Clone)]
pub struct FunctionParamDef {
    pub name: String,
    pub ty: String,
    pub direction: Direction,
    pub default: Option<String>,
}

/// The `RETURNS` clause. Columns are only present for table returns.
#[derive(Debug, Clone)]
pub struct Returns {
    pub ty: String,
    pub columns: Vec<(String, String)>,
}

impl FunctionParamDef {
    fn from_schema(param: &Param) -> FunctionParamDef {
        FunctionParamDef {
            name: param.name.clone(),
            ty: param.ty.clone(),
            direction: param.direction,
            default: param.default.clone(),
        }
    }
}

impl Statement {
    pub fn create_function(function: &Function) -> Self {
        CreateFunction {
            name: function.name.clone(),
            params: function
                .params
                .iter()
                .map(FunctionParamDef::from_schema)
                .collect(),
            returns: Returns {
                ty: function.returns.ty().to_string(),
                columns: function
                    .returns
                    .columns()
                    .iter()
                    .map(|(column, ty)| (column.clone(), ty.clone()))
                    .collect(),
            },
            language: function.language().map(str::to_string),
            separator: function.separator().to_string(),
            body: function.body.clone(),
        }
        .into()
    }
}

impl From<CreateFunction> for Statement {
    fn from(value: CreateFunction) -> Self {
        Self::CreateFunction(value)
    }
}
