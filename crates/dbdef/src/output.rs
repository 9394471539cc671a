//! Outputs render a compiled [`Db`] into their target artifact.
//!
//! An output is requested by name on an `OUTPUT=` makefile line and built by
//! [`OutputKind::create`]. The compiler then drives it through
//! [`OutputProvider::export`].

mod console;
pub use console::{ConsoleOptions, ConsoleOutput};

#[cfg(feature = "postgresql")]
mod db_create;
#[cfg(feature = "postgresql")]
pub use db_create::{DbCreateOptions, DbCreateOutput};

mod mapping_code;
pub use mapping_code::{MappingCodeOptions, MappingCodeOutput};

mod markdown_docs;
pub use markdown_docs::{MarkdownDocsOptions, MarkdownDocsOutput};

mod script_buffers;
use script_buffers::ScriptBuffers;

mod sql_script;
pub use sql_script::{SqlScriptMode, SqlScriptOptions, SqlScriptOutput};

use crate::AssetProvider;
use dbdef_core::{
    parse::parse_bool,
    schema::{Db, Function, OutputRequest, Sequence, Table},
    Error, Mapping, Result,
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// A renderer of compiled objects.
///
/// Write methods are called once per object; [`commit`](Self::commit) is
/// called last, exactly once, and flushes whatever was buffered.
pub trait OutputProvider {
    fn write_mapping(&mut self, mapping: &Mapping) -> Result<()> {
        let _ = mapping;
        Ok(())
    }

    fn write_table(&mut self, table: &Table) -> Result<()>;

    fn write_sequence(&mut self, sequence: &Sequence) -> Result<()>;

    fn write_function(&mut self, function: &Function) -> Result<()>;

    fn commit(self: Box<Self>) -> Result<()>;

    /// Writes the mapping, then every sequence, table and function, then
    /// commits.
    fn export(mut self: Box<Self>, db: &Db) -> Result<()> {
        self.write_mapping(&db.mapping)?;

        for sequence in &db.sequences {
            self.write_sequence(sequence)?;
        }

        for table in &db.tables {
            self.write_table(table)?;
        }

        for function in &db.functions {
            self.write_function(function)?;
        }

        self.commit()
    }
}

/// What an output may need from the compiler besides its own arguments.
#[derive(Debug, Clone)]
pub struct OutputContext {
    /// Templates and documentation fragments are read from here
    pub assets: AssetProvider,

    /// Root directory for written files
    pub output_dir: PathBuf,
}

/// The registry of output kinds, keyed by their makefile name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Console,
    SqlScript,
    DbCreate,
    MarkdownDocs,
    MappingCode,
}

impl OutputKind {
    pub const ALL: [OutputKind; 5] = [
        OutputKind::Console,
        OutputKind::SqlScript,
        OutputKind::DbCreate,
        OutputKind::MarkdownDocs,
        OutputKind::MappingCode,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputKind::Console => "console",
            OutputKind::SqlScript => "sql_script",
            OutputKind::DbCreate => "db_create",
            OutputKind::MarkdownDocs => "markdown_docs",
            OutputKind::MappingCode => "mapping_code",
        }
    }

    pub fn from_name(name: &str) -> Option<OutputKind> {
        OutputKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Looks up the kind named by `request` and builds its output.
    pub fn resolve(
        request: &OutputRequest,
        cx: &OutputContext,
    ) -> Result<Box<dyn OutputProvider>> {
        let kind = OutputKind::from_name(&request.name)
            .ok_or_else(|| Error::unknown_output(&request.name))?;
        kind.create(request, cx)
    }

    pub fn create(
        self,
        request: &OutputRequest,
        cx: &OutputContext,
    ) -> Result<Box<dyn OutputProvider>> {
        debug!(output = self.name(), args = ?request.args, "creating output");

        Ok(match self {
            OutputKind::Console => Box::new(ConsoleOutput::new(ConsoleOptions::from_request(
                request,
            ))),
            OutputKind::SqlScript => Box::new(SqlScriptOutput::new(
                SqlScriptOptions::from_request(request)?,
                &cx.output_dir,
            )),
            OutputKind::DbCreate => Self::create_db_create(request)?,
            OutputKind::MarkdownDocs => Box::new(MarkdownDocsOutput::new(
                MarkdownDocsOptions::from_request(request),
                cx.assets.clone(),
                &cx.output_dir,
            )),
            OutputKind::MappingCode => Box::new(MappingCodeOutput::new(
                MappingCodeOptions::from_request(request),
                cx.assets.clone(),
                &cx.output_dir,
            )),
        })
    }

    #[cfg(feature = "postgresql")]
    fn create_db_create(request: &OutputRequest) -> Result<Box<dyn OutputProvider>> {
        Ok(Box::new(DbCreateOutput::new(DbCreateOptions::from_request(
            request,
        )?)))
    }

    #[cfg(not(feature = "postgresql"))]
    fn create_db_create(_request: &OutputRequest) -> Result<Box<dyn OutputProvider>> {
        Err(Error::invalid_configuration(
            "`db_create` output requires the `postgresql` feature",
        ))
    }
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reads a boolean argument. A bare key is true.
fn flag(request: &OutputRequest, key: &str, default: bool) -> bool {
    match request.args.get(key) {
        Some(Some(value)) => parse_bool(value),
        Some(None) => true,
        None => default,
    }
}

/// Reads a string argument, falling back to `default` when absent or empty.
fn arg_or(request: &OutputRequest, key: &str, default: &str) -> String {
    match request.arg(key) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

/// Writes `contents` to `path`, creating missing parent directories.
fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| Error::io(parent, err))?;
    }

    fs::write(path, contents).map_err(|err| Error::io(path, err))
}
