use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr, bail};
use tempfile::NamedTempFile;
use tracing::debug;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the destination path of the file
    fn path(&self) -> &Path;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk through a [`SafeFile`]
    fn write(&self) -> Result<WriteResult> {
        File::new(self.path(), self.render()).write()
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the exact content, nothing was touched
    Unchanged,
}

/// A file to be generated
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the file atomically.
    ///
    /// The destination is left untouched when it already holds the same bytes.
    pub fn write(&self) -> Result<WriteResult> {
        if let Ok(existing) = fs::read(&self.path)
            && existing == self.content.as_bytes()
        {
            debug!(path = %self.path.display(), "output is up to date");
            return Ok(WriteResult::Unchanged);
        }

        let mut staged = SafeFile::create(&self.path)?;
        staged
            .write_all(self.content.as_bytes())
            .wrap_err("failed to write temporary file")?;
        staged.commit()?;
        Ok(WriteResult::Written)
    }
}

/// A temporary file next to the destination that replaces it on commit.
///
/// Content is staged in a `valctx-*` file in the destination directory. Only
/// [`SafeFile::commit`] renames it over the destination; dropping a
/// `SafeFile` without committing (including after a failed write) removes the
/// temporary file and leaves the destination as it was.
#[derive(Debug)]
pub struct SafeFile {
    temp: NamedTempFile,
    output: PathBuf,
}

impl SafeFile {
    /// Stage a new file for `output`, creating missing parent directories.
    pub fn create(output: impl AsRef<Path>) -> Result<Self> {
        let output = output.as_ref().to_path_buf();
        if output.is_dir() {
            bail!("output '{}' is a directory", output.display());
        }

        let dir = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)
            .wrap_err_with(|| format!("failed to create output directory '{}'", dir.display()))?;

        let mut builder = tempfile::Builder::new();
        builder.prefix("valctx-");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o644));
        }
        let temp = builder
            .tempfile_in(&dir)
            .wrap_err_with(|| format!("failed to create temporary file in '{}'", dir.display()))?;

        debug!(
            temp = %temp.path().display(),
            output = %output.display(),
            "staging output"
        );

        Ok(Self { temp, output })
    }

    /// Flush the staged content and rename it over the destination.
    pub fn commit(mut self) -> Result<()> {
        self.temp
            .as_file_mut()
            .flush()
            .wrap_err("failed to flush temporary file")?;
        self.temp
            .as_file()
            .sync_all()
            .wrap_err("failed to sync temporary file")?;

        let output = self.output;
        // On failure the returned handle is dropped, which removes the temp file.
        self.temp
            .persist(&output)
            .map_err(|e| e.error)
            .wrap_err_with(|| format!("failed to rename to output file '{}'", output.display()))?;

        debug!(output = %output.display(), "output committed");
        Ok(())
    }
}

impl Write for SafeFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.temp.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.temp.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn leftovers(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .flatten()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("valctx-"))
            .collect()
    }

    #[test]
    fn test_commit_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.go");

        let mut file = SafeFile::create(&path).unwrap();
        file.write_all(b"package gen\n").unwrap();
        assert!(!path.exists());
        file.commit().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "package gen\n");
        assert!(leftovers(temp.path()).is_empty());
    }

    #[test]
    fn test_temp_file_is_next_to_output() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.go");

        let _file = SafeFile::create(&path).unwrap();
        assert_eq!(leftovers(temp.path()).len(), 1);
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_without_commit_keeps_destination() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.go");
        fs::write(&path, "original").unwrap();

        {
            let mut file = SafeFile::create(&path).unwrap();
            file.write_all(b"half written").unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        assert!(leftovers(temp.path()).is_empty());
    }

    #[test]
    fn test_commit_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.go");
        fs::write(&path, "first").unwrap();

        let mut file = SafeFile::create(&path).unwrap();
        file.write_all(b"second").unwrap();
        file.commit().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_create_makes_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("out.go");

        let mut file = SafeFile::create(&path).unwrap();
        file.write_all(b"nested").unwrap();
        file.commit().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_create_rejects_directory() {
        let temp = TempDir::new().unwrap();

        let err = SafeFile::create(temp.path()).unwrap_err();
        assert!(err.to_string().contains("is a directory"));
    }

    #[test]
    fn test_file_write_reports_written() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.go");

        let file = File::new(&path, "content");
        assert!(!path.exists());
        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn test_file_write_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.go");
        fs::write(&path, "content").unwrap();

        let file = File::new(&path, "content");
        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);
    }

    #[test]
    fn test_generated_file_default_write() {
        struct Fixed(PathBuf);

        impl GeneratedFile for Fixed {
            fn path(&self) -> &Path {
                &self.0
            }

            fn render(&self) -> String {
                "package fixed\n".to_string()
            }
        }

        let temp = TempDir::new().unwrap();
        let fixed = Fixed(temp.path().join("fixed.go"));

        assert_eq!(fixed.write().unwrap(), WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("fixed.go")).unwrap(),
            "package fixed\n"
        );
    }
}
