//! Image intake for point registration.
//!
//! Files land in the uploads directory under a random hex prefix plus the
//! sanitised original name; only the resulting filename string flows into
//! the registry.

use std::io;
use std::path::{Path, PathBuf};

use rand::RngCore;

pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the files are stored in; also the root for static serving.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist uploaded bytes and return the stored filename.
    ///
    /// # Errors
    ///
    /// Returns an error if the uploads directory cannot be created or the
    /// file cannot be written.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> io::Result<String> {
        let mut prefix = [0u8; 6];
        rand::rng().fill_bytes(&mut prefix);

        let filename = format!("{}-{}", hex::encode(prefix), sanitize(original_name));

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.dir.join(&filename), bytes).await?;

        Ok(filename)
    }
}

/// Keep only the final path component and a conservative character set.
fn sanitize(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches(['.', '_']).is_empty() {
        "upload".to_owned()
    } else {
        cleaned
    }
}
