use super::{arg_or, write_file, OutputProvider};
use crate::AssetProvider;
use dbdef_core::{
    schema::{Function, OutputRequest, Properties, Sequence, Table},
    Result,
};
use dbdef_sql::Serializer;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownDocsOptions {
    /// Directory under the output root
    pub dir: String,

    pub file: String,

    /// Fragment placed before the generated docs, relative to the source
    /// directory
    pub header: String,

    /// Fragment placed after the generated docs, relative to the source
    /// directory
    pub footer: String,
}

impl MarkdownDocsOptions {
    pub fn from_request(request: &OutputRequest) -> MarkdownDocsOptions {
        let defaults = MarkdownDocsOptions::default();
        MarkdownDocsOptions {
            dir: arg_or(request, "dir", &defaults.dir),
            file: arg_or(request, "file", &defaults.file),
            header: arg_or(request, "header", &defaults.header),
            footer: arg_or(request, "footer", &defaults.footer),
        }
    }
}

impl Default for MarkdownDocsOptions {
    fn default() -> Self {
        MarkdownDocsOptions {
            dir: String::new(),
            file: "README-DB.md".to_string(),
            header: "parts/readme_db_header.md".to_string(),
            footer: "parts/readme_db_footer.md".to_string(),
        }
    }
}

/// Writes a Markdown reference of every object into a single file.
#[derive(Debug)]
pub struct MarkdownDocsOutput {
    options: MarkdownDocsOptions,
    assets: AssetProvider,
    path: PathBuf,
    doc: Markdown,
}

impl MarkdownDocsOutput {
    pub fn new(
        options: MarkdownDocsOptions,
        assets: AssetProvider,
        output_dir: &Path,
    ) -> MarkdownDocsOutput {
        let path = output_dir.join(&options.dir).join(&options.file);
        MarkdownDocsOutput {
            options,
            assets,
            path,
            doc: Markdown::default(),
        }
    }

    fn fragment(&self, path: &str) -> Result<String> {
        let fragment = self.assets.read_optional(path)?;
        if fragment.is_none() {
            debug!(path, "documentation fragment not found; skipping");
        }
        Ok(fragment.unwrap_or_default())
    }
}

impl OutputProvider for MarkdownDocsOutput {
    fn write_table(&mut self, table: &Table) -> Result<()> {
        self.doc.header("Table", &table.name, &table.properties);

        if !table.columns.is_empty() {
            let rows = table.columns.iter().map(|column| {
                let mut notes = vec![];

                if column.not_null {
                    notes.push("`NOT NULL`".to_string());
                }

                if table.is_primary_key_column(&column.name) {
                    notes.push("`Primary Key`".to_string());
                }

                if table.is_unique_key_column(&column.name) {
                    notes.push("`Unique Key`".to_string());
                }

                if let Some(default) = &column.default {
                    notes.push(format!("`DEFAULT {default}`"));
                }

                let notes = if notes.is_empty() {
                    "-".to_string()
                } else {
                    notes.join(", ")
                };

                vec![code(&column.name), code(&column.ty), notes]
            });

            self.doc.table(&["Column", "Type", "Notes"], rows);
            self.doc.spacer();
        }

        Ok(())
    }

    fn write_sequence(&mut self, sequence: &Sequence) -> Result<()> {
        self.doc
            .header("Sequence", &sequence.name, &sequence.properties);

        if sequence.properties.non_meta().next().is_some() {
            let rows = sequence
                .properties
                .non_meta()
                .map(|(key, value)| vec![code(key), code(value.unwrap_or_default())]);

            self.doc.table(&["Name", "Value"], rows);
            self.doc.spacer();
        }

        Ok(())
    }

    fn write_function(&mut self, function: &Function) -> Result<()> {
        self.doc
            .header("Function", &function.name, &function.properties);

        let sql = Serializer::postgresql().function(function);
        self.doc.code_block(sql.trim_end());
        self.doc.spacer();

        if !function.params.is_empty() {
            self.doc.line("The function parameters are explained below:");
            self.doc.spacer();

            let rows = function.params.iter().map(|param| {
                vec![
                    code(&param.name),
                    code(&param.ty),
                    param
                        .description
                        .clone()
                        .unwrap_or_else(|| "-".to_string()),
                ]
            });

            self.doc.table(&["Parameter", "Type", "Notes"], rows);
            self.doc.spacer();
        }

        Ok(())
    }

    fn commit(self: Box<Self>) -> Result<()> {
        let header = self.fragment(&self.options.header)?;
        let footer = self.fragment(&self.options.footer)?;

        let mut contents = String::new();
        if !header.is_empty() {
            contents.push_str(&header);
            contents.push_str("\n\n");
        }
        contents.push_str(&self.doc.buf);
        if !footer.is_empty() {
            contents.push_str("\n\n");
            contents.push_str(&footer);
        }

        write_file(&self.path, &contents)?;
        info!(path = %self.path.display(), "wrote markdown docs");

        Ok(())
    }
}

fn code(text: &str) -> String {
    format!("`{text}`")
}

#[derive(Debug, Default)]
struct Markdown {
    buf: String,
}

impl Markdown {
    /// `## <title> - `name`` followed by the description, if any. The title
    /// defaults to the object kind.
    fn header(&mut self, kind: &str, name: &str, properties: &Properties) {
        let title = properties.title().unwrap_or(kind);
        self.line(&format!("## {title} - `{name}`"));
        self.spacer();

        if let Some(description) = properties.description() {
            self.line(description);
            self.spacer();
        }
    }

    fn table(&mut self, columns: &[&str], rows: impl Iterator<Item = Vec<String>>) {
        self.line(&format!("| {} |", columns.join(" | ")));
        self.line(&format!("| {} |", vec!["---"; columns.len()].join(" | ")));

        for row in rows {
            self.line(&format!("| {} |", row.join(" | ")));
        }
    }

    fn code_block(&mut self, contents: &str) {
        self.line("```");
        self.line(contents);
        self.line("```");
    }

    fn line(&mut self, line: &str) {
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    fn spacer(&mut self) {
        self.buf.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbdef_core::schema::{Column, Constraint, ConstraintKind, Param};
    use indexmap::IndexSet;
    use pretty_assertions::assert_eq;

    fn output() -> MarkdownDocsOutput {
        MarkdownDocsOutput::new(
            MarkdownDocsOptions::default(),
            AssetProvider::new("."),
            Path::new("."),
        )
    }

    #[test]
    fn table_docs() {
        let mut table = Table::new("sk_metrics_t");
        table
            .properties
            .insert("title", Some("Metrics".to_string()));
        table
            .properties
            .insert("description", Some("Aggregated runtime metrics.".to_string()));

        let mut id = Column::new("metric_id");
        id.ty = "character varying(250)".to_string();
        id.not_null = true;
        table.columns.push(id);

        let mut value = Column::new("metric_value");
        value.ty = "bigint".to_string();
        value.default = Some("0".to_string());
        table.columns.push(value);

        table.columns.push(Column::new("metric_category"));

        table.primary_key = Some(Constraint {
            name: "pk_metrics".to_string(),
            kind: ConstraintKind::PrimaryKey,
            columns: IndexSet::from(["metric_id".to_string()]),
        });

        let mut output = output();
        output.write_table(&table).unwrap();

        assert_eq!(
            output.doc.buf,
            "\
## Metrics - `sk_metrics_t`

Aggregated runtime metrics.

| Column | Type | Notes |
| --- | --- | --- |
| `metric_id` | `character varying(250)` | `NOT NULL`, `Primary Key` |
| `metric_value` | `bigint` | `DEFAULT 0` |
| `metric_category` | `character varying(255)` | - |

"
        );
    }

    #[test]
    fn sequence_docs() {
        let mut sequence = Sequence::new("sk_task_seq");
        sequence
            .properties
            .insert("start", Some("1".to_string()));
        sequence.properties.insert("cycle", None);

        let mut output = output();
        output.write_sequence(&sequence).unwrap();

        assert_eq!(
            output.doc.buf,
            "\
## Sequence - `sk_task_seq`

| Name | Value |
| --- | --- |
| `start` | `1` |
| `cycle` | `` |

"
        );
    }

    #[test]
    fn function_docs() {
        let mut function = Function::new("sk_touch");
        function.properties.insert("lang", Some("sql".to_string()));
        let mut param = Param::new("p_id");
        param.ty = "uuid".to_string();
        param.description = Some("Task to touch".to_string());
        function.params.push(param);
        function.body = "SELECT 1;".to_string();

        let mut output = output();
        output.write_function(&function).unwrap();

        assert_eq!(
            output.doc.buf,
            "\
## Function - `sk_touch`

```
CREATE OR REPLACE FUNCTION public.sk_touch (IN p_id uuid)
\tRETURNS VOID
\tLANGUAGE sql
\tAS $$
SELECT 1;
$$;
```

The function parameters are explained below:

| Parameter | Type | Notes |
| --- | --- | --- |
| `p_id` | `uuid` | Task to touch |

"
        );
    }

    #[test]
    fn header_and_footer() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(source.path().join("parts")).unwrap();
        std::fs::write(source.path().join("parts/readme_db_header.md"), "# Database").unwrap();

        let mut output = Box::new(MarkdownDocsOutput::new(
            MarkdownDocsOptions::default(),
            AssetProvider::new(source.path()),
            target.path(),
        ));
        output.write_table(&Table::new("t")).unwrap();
        output.commit().unwrap();

        let contents = std::fs::read_to_string(target.path().join("README-DB.md")).unwrap();
        assert_eq!(contents, "# Database\n\n## Table - `t`\n\n");
    }
}
