use super::{arg_or, write_file, OutputProvider, ScriptBuffers};
use dbdef_core::{
    schema::{Function, OutputRequest, Sequence, Table},
    Error, Result,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Placeholder replaced by the object name in `single` mode file names.
pub const DB_OBJECT_PLACEHOLDER: &str = "$db_object$";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SqlScriptMode {
    /// One file per object
    #[default]
    Single,

    /// Every object in one file
    Consolidated,
}

impl SqlScriptMode {
    pub fn parse(value: &str) -> Option<SqlScriptMode> {
        match value {
            "single" => Some(SqlScriptMode::Single),
            "consolidated" => Some(SqlScriptMode::Consolidated),
            _ => None,
        }
    }

    fn default_file(self) -> &'static str {
        match self {
            SqlScriptMode::Single => "$db_object$.sql",
            SqlScriptMode::Consolidated => "sk_db.sql",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlScriptOptions {
    pub mode: SqlScriptMode,

    /// Directory under the output root
    pub dir: String,

    /// File name; may contain [`DB_OBJECT_PLACEHOLDER`]
    pub file: String,
}

impl SqlScriptOptions {
    pub fn from_request(request: &OutputRequest) -> Result<SqlScriptOptions> {
        let mode = match request.arg("mode") {
            None => SqlScriptMode::default(),
            Some(mode) => SqlScriptMode::parse(mode).ok_or_else(|| {
                Error::invalid_configuration(format!(
                    "unknown sql_script mode `{mode}`; expected `single` or `consolidated`"
                ))
            })?,
        };

        Ok(SqlScriptOptions {
            mode,
            dir: arg_or(request, "dir", ""),
            file: arg_or(request, "file", mode.default_file()),
        })
    }

    pub fn file_name(&self, object: &str) -> String {
        self.file.replace(DB_OBJECT_PLACEHOLDER, object)
    }
}

impl Default for SqlScriptOptions {
    fn default() -> Self {
        let mode = SqlScriptMode::default();
        SqlScriptOptions {
            mode,
            dir: String::new(),
            file: mode.default_file().to_string(),
        }
    }
}

/// Writes PostgreSQL DDL scripts.
#[derive(Debug)]
pub struct SqlScriptOutput {
    options: SqlScriptOptions,
    dir: PathBuf,
    buffers: ScriptBuffers,
}

impl SqlScriptOutput {
    pub fn new(options: SqlScriptOptions, output_dir: &Path) -> SqlScriptOutput {
        let dir = output_dir.join(&options.dir);
        SqlScriptOutput {
            options,
            dir,
            buffers: ScriptBuffers::default(),
        }
    }
}

impl OutputProvider for SqlScriptOutput {
    fn write_table(&mut self, table: &Table) -> Result<()> {
        self.buffers.write_table(table);
        Ok(())
    }

    fn write_sequence(&mut self, sequence: &Sequence) -> Result<()> {
        self.buffers.write_sequence(sequence);
        Ok(())
    }

    fn write_function(&mut self, function: &Function) -> Result<()> {
        self.buffers.write_function(function);
        Ok(())
    }

    fn commit(self: Box<Self>) -> Result<()> {
        match self.options.mode {
            SqlScriptMode::Single => {
                for (name, sql) in self.buffers.iter() {
                    let path = self.dir.join(self.options.file_name(name));
                    write_file(&path, sql)?;
                }

                info!(
                    dir = %self.dir.display(),
                    files = self.buffers.len(),
                    "wrote sql scripts"
                );
            }
            SqlScriptMode::Consolidated => {
                let sql: String = self.buffers.iter().map(|(_, sql)| sql).collect();
                let path = self.dir.join(&self.options.file);
                write_file(&path, &sql)?;

                info!(path = %path.display(), objects = self.buffers.len(), "wrote sql script");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbdef_core::parse::NamedArgsListParser;

    fn options(args: &str) -> Result<SqlScriptOptions> {
        let request = OutputRequest::new("sql_script", NamedArgsListParser::new(';').parse(args));
        SqlScriptOptions::from_request(&request)
    }

    #[test]
    fn default_file_names() {
        let single = options("").unwrap();
        assert_eq!(single, SqlScriptOptions::default());
        assert_eq!(single.file_name("sk_metrics_t"), "sk_metrics_t.sql");

        let consolidated = options("mode=consolidated;dir=db").unwrap();
        assert_eq!(consolidated.mode, SqlScriptMode::Consolidated);
        assert_eq!(consolidated.dir, "db");
        assert_eq!(consolidated.file, "sk_db.sql");
    }

    #[test]
    fn explicit_file_name() {
        let options = options("file=create_$db_object$.sql").unwrap();
        assert_eq!(options.file_name("sk_tasks_queue_t"), "create_sk_tasks_queue_t.sql");
    }

    #[test]
    fn unknown_mode() {
        let err = options("mode=zipped").unwrap_err();
        assert!(err.is_invalid_configuration());
        assert_eq!(
            err.to_string(),
            "invalid configuration: unknown sql_script mode `zipped`; expected `single` or `consolidated`"
        );
    }

    #[test]
    fn consolidated_script() {
        let dir = tempfile::tempdir().unwrap();
        let options = options("mode=consolidated;dir=sql").unwrap();

        let mut output = Box::new(SqlScriptOutput::new(options, dir.path()));
        output.write_sequence(&Sequence::new("s")).unwrap();
        output.write_table(&Table::new("t")).unwrap();
        output.commit().unwrap();

        let sql = std::fs::read_to_string(dir.path().join("sql/sk_db.sql")).unwrap();
        let sequence = sql.find("CREATE SEQUENCE IF NOT EXISTS public.s").unwrap();
        let table = sql.find("CREATE TABLE IF NOT EXISTS public.t(").unwrap();
        assert!(sequence < table);
    }
}
