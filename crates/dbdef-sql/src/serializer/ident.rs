use super::{Formatter, ToSql};

/// An object name qualified by the serializer's schema.
pub(super) struct Qualified<'a>(pub(super) &'a str);

impl ToSql for Qualified<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let schema = f.serializer.schema;
        fmt!(f, schema "." self.0);
    }
}
