use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    time::SystemTime,
};
use tokio::fs;

/// Entries live as loose files named `fabrik-*` inside a shared scratch directory.
pub const ENTRY_PREFIX: &str = "fabrik-";

#[derive(Debug)]
pub struct FileStore(PathBuf);

impl FileStore {
    pub fn open(p: impl AsRef<Path>) -> Self {
        Self(p.as_ref().to_owned())
    }

    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.0
    }

    /// Every entry in the directory, in whatever order the filesystem reports them.
    pub async fn candidates(&self) -> io::Result<Vec<PathBuf>> {
        let mut entries = fs::read_dir(&self.0).await?;
        let mut out = vec![];
        while let Some(entry) = entries.next_entry().await? {
            if entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(ENTRY_PREFIX))
            {
                out.push(entry.path());
            }
        }
        Ok(out)
    }

    pub async fn modified(path: &Path) -> io::Result<SystemTime> {
        fs::metadata(path).await?.modified()
    }

    pub async fn read(path: &Path) -> io::Result<String> {
        fs::read_to_string(path).await
    }

    /// Writes `text` into a brand-new uniquely named entry, so concurrent writers never
    /// share a file.
    pub async fn create(&self, text: &str) -> io::Result<PathBuf> {
        let dir = self.0.clone();
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || -> io::Result<PathBuf> {
            let mut file = tempfile::Builder::new()
                .prefix(ENTRY_PREFIX)
                .tempfile_in(dir)?;
            file.write_all(text.as_bytes())?;
            file.flush()?;
            let (_, path) = file.keep().map_err(|e| e.error)?;
            Ok(path)
        })
        .await
        .map_err(io::Error::other)?
    }

    pub async fn remove(path: &Path) -> io::Result<()> {
        fs::remove_file(path).await
    }
}
