use dbdef_core::schema::{Function, Sequence, Table};
use dbdef_sql::Serializer;
use indexmap::IndexMap;

/// DDL scripts keyed by object name, in the order objects were written.
///
/// Writing two objects with the same name appends to the same script.
#[derive(Debug, Default)]
pub(super) struct ScriptBuffers {
    serializer: Serializer<'static>,
    buffers: IndexMap<String, String>,
}

impl ScriptBuffers {
    pub(super) fn write_table(&mut self, table: &Table) {
        let sql = self.serializer.table(table);
        self.buffer(&table.name).push_str(&sql);
    }

    pub(super) fn write_sequence(&mut self, sequence: &Sequence) {
        let sql = self.serializer.sequence(sequence);
        self.buffer(&sequence.name).push_str(&sql);
    }

    pub(super) fn write_function(&mut self, function: &Function) {
        let sql = self.serializer.function(function);
        self.buffer(&function.name).push_str(&sql);
    }

    pub(super) fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.buffers
            .iter()
            .map(|(name, sql)| (name.as_str(), sql.as_str()))
    }

    pub(super) fn len(&self) -> usize {
        self.buffers.len()
    }

    fn buffer(&mut self, name: &str) -> &mut String {
        self.buffers.entry(name.to_string()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_keep_write_order() {
        let mut buffers = ScriptBuffers::default();
        buffers.write_table(&Table::new("b_table"));
        buffers.write_sequence(&Sequence::new("a_seq"));
        buffers.write_table(&Table::new("b_table"));

        let names: Vec<_> = buffers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["b_table", "a_seq"]);
        assert_eq!(buffers.len(), 2);

        let (_, sql) = buffers.iter().next().unwrap();
        assert_eq!(sql.matches("CREATE TABLE IF NOT EXISTS public.b_table(").count(), 2);
    }
}
