use super::{arg_or, write_file, OutputProvider};
use crate::{AssetProvider, Template};
use chrono::Datelike;
use dbdef_core::{
    schema::{Function, OutputRequest, Sequence, Table},
    Mapping, Result,
};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingCodeOptions {
    /// Directory under the output root
    pub dir: String,

    /// `ns`
    pub namespace: String,

    /// `cls`, also the generated file's stem
    pub class_name: String,

    /// Class template, relative to the source directory
    pub template: String,

    /// Licence header template, relative to the source directory
    pub license: String,
}

impl MappingCodeOptions {
    pub fn from_request(request: &OutputRequest) -> MappingCodeOptions {
        let defaults = MappingCodeOptions::default();
        MappingCodeOptions {
            dir: arg_or(request, "dir", &defaults.dir),
            namespace: arg_or(request, "ns", &defaults.namespace),
            class_name: arg_or(request, "cls", &defaults.class_name),
            template: arg_or(request, "template", &defaults.template),
            license: arg_or(request, "license", &defaults.license),
        }
    }
}

impl Default for MappingCodeOptions {
    fn default() -> Self {
        MappingCodeOptions {
            dir: "Model".to_string(),
            namespace: "LVD.Stakhanovise.NET.Model".to_string(),
            class_name: "QueuedTaskMapping".to_string(),
            template: "templates/queued_task_mapping.cstemplate".to_string(),
            license: "templates/license_header.cstemplate".to_string(),
        }
    }
}

/// Generates the source file exposing the resolved mapping to application
/// code.
#[derive(Debug)]
pub struct MappingCodeOutput {
    options: MappingCodeOptions,
    assets: AssetProvider,
    path: PathBuf,
    contents: Option<String>,
}

impl MappingCodeOutput {
    pub fn new(
        options: MappingCodeOptions,
        assets: AssetProvider,
        output_dir: &Path,
    ) -> MappingCodeOutput {
        let path = output_dir
            .join(&options.dir)
            .join(format!("{}.cs", options.class_name));

        MappingCodeOutput {
            options,
            assets,
            path,
            contents: None,
        }
    }

    fn license_header(&self) -> Result<String> {
        let template = Template::new(self.assets.read(&self.options.license)?);
        let vars = IndexMap::from([("current_year", chrono::Local::now().year().to_string())]);
        template.render(&vars)
    }
}

impl OutputProvider for MappingCodeOutput {
    fn write_mapping(&mut self, mapping: &Mapping) -> Result<()> {
        let template = Template::new(self.assets.read(&self.options.template)?);

        let mut vars = IndexMap::new();
        vars.insert("license_header", self.license_header()?);
        vars.insert("class_namespace_name", self.options.namespace.clone());
        vars.insert("class_name", self.options.class_name.clone());
        for (token, value) in mapping.iter() {
            vars.insert(token.name(), value.to_string());
        }

        let mut contents = template.render(&vars)?;
        contents.push('\n');
        self.contents = Some(contents);

        Ok(())
    }

    fn write_table(&mut self, _table: &Table) -> Result<()> {
        Ok(())
    }

    fn write_sequence(&mut self, _sequence: &Sequence) -> Result<()> {
        Ok(())
    }

    fn write_function(&mut self, _function: &Function) -> Result<()> {
        Ok(())
    }

    fn commit(self: Box<Self>) -> Result<()> {
        let Some(contents) = &self.contents else {
            debug!("no mapping written; skipping mapping code");
            return Ok(());
        };

        write_file(&self.path, contents)?;
        info!(path = %self.path.display(), "wrote mapping code");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbdef_core::{parse::NamedArgsListParser, Token};
    use pretty_assertions::assert_eq;
    use std::fs;

    fn write_templates(dir: &Path) {
        fs::create_dir_all(dir.join("templates")).unwrap();
        fs::write(
            dir.join("templates/license_header.cstemplate"),
            "// Copyright (c) ${current_year}",
        )
        .unwrap();
        fs::write(
            dir.join("templates/queued_task_mapping.cstemplate"),
            "$license_header\nnamespace $class_namespace_name {\n\tclass ${class_name} {\n\t\tQueue = \"$queue_table_name\"; // $$\n\t}\n}",
        )
        .unwrap();
    }

    #[test]
    fn options_from_request() {
        let args = NamedArgsListParser::new(';').parse("dir=Gen;cls=TaskMapping");
        let options = MappingCodeOptions::from_request(&OutputRequest::new("mapping_code", args));
        assert_eq!(options.dir, "Gen");
        assert_eq!(options.class_name, "TaskMapping");
        assert_eq!(options.namespace, "LVD.Stakhanovise.NET.Model");
    }

    #[test]
    fn generates_class() {
        let source = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        write_templates(source.path());

        let mut output = Box::new(MappingCodeOutput::new(
            MappingCodeOptions::default(),
            AssetProvider::new(source.path()),
            target.path(),
        ));
        output
            .write_mapping(&Mapping::new().with(Token::QueueTableName, "jobs"))
            .unwrap();
        output.commit().unwrap();

        let contents =
            fs::read_to_string(target.path().join("Model/QueuedTaskMapping.cs")).unwrap();
        let year = chrono::Local::now().year();
        assert_eq!(
            contents,
            format!(
                "// Copyright (c) {year}\nnamespace LVD.Stakhanovise.NET.Model {{\n\tclass QueuedTaskMapping {{\n\t\tQueue = \"jobs\"; // $\n\t}}\n}}\n"
            )
        );
    }

    #[test]
    fn missing_template() {
        let source = tempfile::tempdir().unwrap();
        let mut output = MappingCodeOutput::new(
            MappingCodeOptions::default(),
            AssetProvider::new(source.path()),
            source.path(),
        );

        let err = output.write_mapping(&Mapping::new()).unwrap_err();
        assert!(err.is_io());
    }
}
