use super::{Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = &self.name;
        let ty = &self.ty;

        fmt!(f, name " " ty);

        if let Some(default) = &self.default {
            fmt!(f, " DEFAULT " default);
        }

        if self.not_null {
            fmt!(f, " NOT NULL");
        }
    }
}
