use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// A rendered source file that knows where it belongs relative to an
/// output directory.
pub trait GeneratedFile {
    /// Path relative to the output directory, e.g. `com/example/Greeter.kt`.
    fn relative_path(&self) -> PathBuf;

    /// Rules for writing this file.
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content.
    fn render(&self) -> String;

    /// Absolute path below `base`.
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    /// Write the file below `base`, creating package directories as needed.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        if self.rules().overwrite == Overwrite::IfMissing && path.exists() {
            log::debug!("skipping existing {}", path.display());
            return Ok(WriteResult::Skipped);
        }
        write_file(&path, self.render().as_bytes())?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    log::debug!("wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// An in-memory source file: a package-relative identity plus UTF-8 text.
///
/// This is the virtual-file view of a rendered file for consumers that
/// want bytes and a stable name rather than a path on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl SourceFile {
    /// Create a file at `path` (relative to some output root).
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Only write the file when it does not exist yet.
    pub fn if_missing(mut self) -> Self {
        self.rules.overwrite = Overwrite::IfMissing;
        self
    }

    /// Relative identity of the file, using `/` separators.
    pub fn uri(&self) -> String {
        self.path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The UTF-8 encoded content.
    pub fn bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

impl GeneratedFile for SourceFile {
    fn relative_path(&self) -> PathBuf {
        self.path.clone()
    }

    fn rules(&self) -> FileRules {
        self.rules.clone()
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_package_dirs() {
        let temp = TempDir::new().unwrap();
        let file = SourceFile::new("com/example/Greeter.kt", "class Greeter\n");

        let result = file.write(temp.path()).unwrap();

        let path = temp.path().join("com").join("example").join("Greeter.kt");
        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(path).unwrap(), "class Greeter\n");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        SourceFile::new("A.kt", "first").write(temp.path()).unwrap();
        SourceFile::new("A.kt", "second").write(temp.path()).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("A.kt")).unwrap(),
            "second"
        );
    }

    #[test]
    fn test_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("A.kt"), "original").unwrap();

        let result = SourceFile::new("A.kt", "replacement")
            .if_missing()
            .write(temp.path())
            .unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("A.kt")).unwrap(),
            "original"
        );
    }

    #[test]
    fn test_uri_and_bytes() {
        let file = SourceFile::new(Path::new("com").join("example").join("A.kt"), "é");
        assert_eq!(file.uri(), "com/example/A.kt");
        assert_eq!(file.bytes(), "é".as_bytes());
    }
}
