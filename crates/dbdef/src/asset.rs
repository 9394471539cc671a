use dbdef_core::{Error, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Resolves and reads files relative to the compiler's source directory.
#[derive(Debug, Clone)]
pub struct AssetProvider {
    source_dir: PathBuf,
}

impl AssetProvider {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Resolves `path` against the source directory.
    pub fn path(&self, path: impl AsRef<Path>) -> PathBuf {
        self.source_dir.join(path)
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.path(path).is_file()
    }

    /// Reads a file as UTF-8, dropping a leading byte-order mark.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = self.path(path);
        let contents = fs::read_to_string(&path).map_err(|err| Error::io(&path, err))?;

        Ok(match contents.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => contents,
        })
    }

    /// Like [`read`](Self::read), but a missing file yields `None`.
    pub fn read_optional(&self, path: impl AsRef<Path>) -> Result<Option<String>> {
        let path = path.as_ref();
        if !self.path(path).exists() {
            return Ok(None);
        }

        self.read(path).map(Some)
    }

    /// Finds the files matching `pattern`, relative to the source directory.
    ///
    /// Returned paths are relative to the source directory and sorted.
    /// Directories matching the pattern are skipped.
    pub fn discover(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let source_dir = self.source_dir.to_str().ok_or_else(|| {
            Error::invalid_configuration(format!(
                "source directory `{}` is not valid UTF-8",
                self.source_dir.display()
            ))
        })?;

        // The source directory is matched literally; only `pattern` is a glob.
        let full_pattern = Path::new(&glob::Pattern::escape(source_dir)).join(pattern);
        let full_pattern = full_pattern.to_str().ok_or_else(|| {
            Error::invalid_configuration(format!(
                "definition files pattern `{pattern}` is not valid UTF-8"
            ))
        })?;

        let paths = glob::glob(full_pattern).map_err(|err| {
            Error::invalid_configuration(format!(
                "invalid definition files pattern `{pattern}`: {err}"
            ))
        })?;

        let mut ret = vec![];

        for entry in paths {
            let path = entry.map_err(|err| {
                let path = err.path().to_path_buf();
                Error::io(path, err.into_error())
            })?;

            if !path.is_file() {
                continue;
            }

            let relative = path
                .strip_prefix(&self.source_dir)
                .map(Path::to_path_buf)
                .unwrap_or(path);

            ret.push(relative);
        }

        ret.sort();
        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_is_sorted_and_relative() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("defs")).unwrap();
        fs::create_dir(dir.path().join("defs/nested.dbdef")).unwrap();
        fs::write(dir.path().join("defs/b_table.dbdef"), "TBL").unwrap();
        fs::write(dir.path().join("defs/a_seq.dbdef"), "SEQ").unwrap();
        fs::write(dir.path().join("defs/notes.txt"), "").unwrap();

        let assets = AssetProvider::new(dir.path());
        let files = assets.discover("defs/*.dbdef").unwrap();

        assert_eq!(
            files,
            [
                PathBuf::from("defs/a_seq.dbdef"),
                PathBuf::from("defs/b_table.dbdef")
            ]
        );
    }

    #[test]
    fn discover_escapes_source_dir() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("defs[1]");
        fs::create_dir(&source).unwrap();
        fs::create_dir(dir.path().join("defs1")).unwrap();
        fs::write(source.join("queue.dbdef"), "TBL").unwrap();
        fs::write(dir.path().join("defs1/other.dbdef"), "TBL").unwrap();

        let assets = AssetProvider::new(&source);
        let files = assets.discover("*.dbdef").unwrap();

        assert_eq!(files, [PathBuf::from("queue.dbdef")]);
    }

    #[test]
    fn invalid_pattern() {
        let assets = AssetProvider::new(".");
        let err = assets.discover("defs/[*.dbdef").unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn read_strips_bom() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("makefile"), "\u{feff}MAP=x").unwrap();

        let assets = AssetProvider::new(dir.path());
        assert_eq!(assets.read("makefile").unwrap(), "MAP=x");
        assert!(assets.exists("makefile"));
    }

    #[test]
    fn read_optional_missing() {
        let dir = tempfile::tempdir().unwrap();
        let assets = AssetProvider::new(dir.path());

        assert_eq!(assets.read_optional("parts/header.md").unwrap(), None);

        let err = assets.read("parts/header.md").unwrap_err();
        assert!(err.is_io());
    }
}
