use crate::{AssetProvider, Config, OutputContext, OutputKind};
use dbdef_core::{
    err,
    parse::{parse_makefile, parse_mapping, sniff_object_type, ParserRegistry},
    schema::{Db, MakefileInfo, Object},
    Error, Mapping, Result,
};
use std::path::Path;
use tracing::{debug, info};

/// Runs a compilation: reads the makefile, parses every definition file into
/// a [`Db`] and hands it to each requested output.
#[derive(Debug)]
pub struct Compiler {
    config: Config,
    assets: AssetProvider,
}

impl Compiler {
    pub fn new(config: Config) -> Compiler {
        let assets = AssetProvider::new(&config.source_dir);
        Compiler { config, assets }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn assets(&self) -> &AssetProvider {
        &self.assets
    }

    /// Parses the definitions and writes every requested output.
    pub fn compile(&self) -> Result<Db> {
        let db = self.parse()?;
        self.output(&db)?;
        Ok(db)
    }

    /// Reads the makefile, the mapping and every definition file.
    pub fn parse(&self) -> Result<Db> {
        let makefile = self.read_makefile()?;
        let mapping = self.read_mapping(&makefile)?;

        let files = self.assets.discover(&makefile.definitions_glob)?;
        if files.is_empty() {
            return Err(Error::invalid_configuration(format!(
                "no definition files found matching `{}`",
                makefile.definitions_glob
            )));
        }

        info!(
            count = files.len(),
            pattern = %makefile.definitions_glob,
            "discovered definition files"
        );

        let registry = ParserRegistry::new(&mapping);
        let objects = files
            .iter()
            .map(|file| self.parse_file(&registry, file))
            .collect::<Result<Vec<_>>>()?;

        Ok(Db::new(mapping, makefile.outputs, objects))
    }

    /// Writes `db` to every output it requests, in makefile order.
    ///
    /// Every output is created before any is written, so a misconfigured
    /// output fails the run without partial results.
    pub fn output(&self, db: &Db) -> Result<()> {
        if db.outputs.is_empty() {
            return Err(Error::invalid_configuration("no outputs configured in makefile"));
        }

        let cx = OutputContext {
            assets: self.assets.clone(),
            output_dir: self.config.output_dir.clone(),
        };

        let outputs = db
            .outputs
            .iter()
            .map(|request| OutputKind::resolve(request, &cx))
            .collect::<Result<Vec<_>>>()?;

        for (request, output) in db.outputs.iter().zip(outputs) {
            output
                .export(db)
                .map_err(|err| err.context(err!("output `{}` failed", request.name)))?;

            info!(output = %request.name, "output committed");
        }

        Ok(())
    }

    fn read_makefile(&self) -> Result<MakefileInfo> {
        let contents = self.assets.read(&self.config.makefile)?;
        let makefile = parse_makefile(&contents).map_err(|err| {
            err.context(err!("failed to read makefile `{}`", self.config.makefile))
        })?;

        info!(
            makefile = %self.config.makefile,
            outputs = makefile.outputs.len(),
            "read makefile"
        );

        Ok(makefile)
    }

    fn read_mapping(&self, makefile: &MakefileInfo) -> Result<Mapping> {
        let contents = self.assets.read(&makefile.mapping_file)?;
        let mapping = parse_mapping(&contents);

        info!(mapping = %makefile.mapping_file, "read mapping");
        Ok(mapping)
    }

    fn parse_file(&self, registry: &ParserRegistry<'_>, file: &Path) -> Result<Object> {
        let contents = self.assets.read(file)?;

        let discriminator = sniff_object_type(&contents).unwrap_or_default();
        let Some(parser) = registry.parser(discriminator) else {
            return Err(Error::unknown_object_type(
                discriminator,
                file.display().to_string(),
            ));
        };

        let object = parser.parse(&contents).map_err(|err| {
            err.context(err!(
                "failed to parse definition file `{}`",
                file.display()
            ))
        })?;

        debug!(
            file = %file.display(),
            ty = object.ty().label(),
            name = object.name(),
            "parsed definition"
        );

        Ok(object)
    }
}
