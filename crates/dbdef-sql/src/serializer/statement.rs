use super::{Comma, Delimited, Formatter, Qualified, ToSql};

use crate::stmt::{self, Statement};
use dbdef_core::schema::{ConstraintKind, SortOrder};

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::AddConstraint(stmt) => stmt.to_sql(f),
            Statement::CreateFunction(stmt) => stmt.to_sql(f),
            Statement::CreateIndex(stmt) => stmt.to_sql(f),
            Statement::CreateSequence(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Qualified(&self.name);

        fmt!(f, "CREATE TABLE IF NOT EXISTS " name "(\n");

        for (index, column) in self.columns.iter().enumerate() {
            fmt!(f, "\t" column);
            if index < self.columns.len() - 1 {
                fmt!(f, ",");
            }
            fmt!(f, "\n");
        }

        fmt!(f, ")");
    }
}

impl ToSql for &stmt::AddConstraint {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = Qualified(&self.table);
        let columns = Delimited(&self.columns, ",");
        let kind = match self.kind {
            ConstraintKind::PrimaryKey => "PRIMARY KEY",
            ConstraintKind::Unique => "UNIQUE",
        };

        let name = &self.name;

        fmt!(
            f, "ALTER TABLE ONLY " table "\n\tADD CONSTRAINT " name "\n\t" kind " (" columns ")"
        );
    }
}

struct IndexColumn<'a>(&'a str, SortOrder);

impl ToSql for &IndexColumn<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.0 " " self.1.as_sql());
    }
}

impl ToSql for &stmt::CreateIndex {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let on = Qualified(&self.on);
        let columns: Vec<_> = self
            .columns
            .iter()
            .map(|(column, order)| IndexColumn(column, *order))
            .collect();

        let name = &self.name;
        let using = &self.using;

        fmt!(
            f, "CREATE INDEX " name "\n\tON " on " USING " using "\n\t(" Comma(&columns) ")"
        );
    }
}

impl ToSql for &stmt::CreateSequence {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Qualified(&self.name);

        fmt!(f, "CREATE SEQUENCE IF NOT EXISTS " name);

        if let Some(start) = &self.start {
            fmt!(f, "\n\tSTART WITH " start);
        }

        if let Some(increment) = &self.increment {
            fmt!(f, "\n\tINCREMENT BY " increment);
        }

        match &self.min_value {
            Some(min_value) => fmt!(f, "\n\tMINVALUE " min_value),
            None => fmt!(f, "\n\tNO MINVALUE"),
        }

        match &self.max_value {
            Some(max_value) => fmt!(f, "\n\tMAXVALUE " max_value),
            None => fmt!(f, "\n\tNO MAXVALUE"),
        }

        if let Some(cache) = &self.cache {
            fmt!(f, "\n\tCACHE " cache);
        }

        let cycle = if self.cycle { "CYCLE" } else { "NO CYCLE" };
        fmt!(f, "\n\t" cycle);
    }
}

impl ToSql for &stmt::FunctionParamDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = &self.name;
        let ty = &self.ty;

        fmt!(f, self.direction.as_sql() " " name " " ty);

        if let Some(default) = &self.default {
            fmt!(f, " DEFAULT " default);
        }
    }
}

struct ReturnColumn<'a>(&'a str, &'a str);

impl ToSql for &ReturnColumn<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.0 " " self.1);
    }
}

impl ToSql for &stmt::Returns {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let ty = self.ty.to_uppercase();
        fmt!(f, ty.as_str());

        if !self.columns.is_empty() {
            let columns: Vec<_> = self
                .columns
                .iter()
                .map(|(column, ty)| ReturnColumn(column, ty))
                .collect();

            fmt!(f, " (" Comma(&columns) ")");
        }
    }
}

impl ToSql for &stmt::CreateFunction {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Qualified(&self.name);

        let params = Comma(&self.params);
        let returns = &self.returns;

        fmt!(
            f, "CREATE OR REPLACE FUNCTION " name " (" params ")\n\tRETURNS " returns
        );

        if let Some(language) = &self.language {
            fmt!(f, "\n\tLANGUAGE " language);
        }

        let separator = &self.separator;
        let body = &self.body;

        fmt!(f, "\n\tAS " separator "\n" body "\n" separator);
    }
}
