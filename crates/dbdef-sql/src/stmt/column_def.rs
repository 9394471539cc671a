use dbdef_core::schema::Column;

#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub ty: String,
    pub default: Option<String>,
    pub not_null: bool,
}

impl ColumnDef {
    pub(crate) fn from_schema(column: &Column) -> ColumnDef {
        ColumnDef {
            name: column.name.clone(),
            ty: column.ty.clone(),
            default: column.default.clone(),
            not_null: column.not_null,
        }
    }
}
