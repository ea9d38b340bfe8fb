use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{CorpusError, Result};

/// Shallow-clones repositories whose files become tokenizer documents.
///
/// Delegates to the `git` binary on PATH; no retry logic, a failed clone
/// surfaces git's own stderr.
#[derive(Debug, Clone, Copy)]
pub struct RepoFetcher {
    depth: u32,
}

impl RepoFetcher {
    /// Fetcher with the default clone depth of 1
    #[must_use]
    pub const fn new() -> Self {
        Self { depth: 1 }
    }

    /// Override the clone depth
    #[must_use]
    pub const fn with_depth(depth: u32) -> Self {
        Self { depth }
    }

    /// Clone `url` into `dest`, creating parent directories as needed.
    ///
    /// `dest` may exist only if empty; anything else is refused rather
    /// than merged over.
    pub fn fetch(&self, url: &str, dest: impl AsRef<Path>) -> Result<PathBuf> {
        let dest = dest.as_ref();

        if dest.exists() && dest.read_dir()?.next().is_some() {
            log::warn!("Refusing to clone into non-empty {}", dest.display());
            return Err(CorpusError::DestinationNotEmpty(dest.to_path_buf()));
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        log::info!("Cloning {} (depth {}) into {}", url, self.depth, dest.display());
        let output = Command::new("git")
            .arg("clone")
            .arg("--depth")
            .arg(self.depth.to_string())
            .arg(url)
            .arg(dest)
            .output()
            .map_err(CorpusError::GitUnavailable)?;

        if !output.status.success() {
            return Err(CorpusError::CloneFailed {
                url: url.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(dest.to_path_buf())
    }
}

impl Default for RepoFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RepoFetcher;
    use crate::error::CorpusError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn refuses_non_empty_destination() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("existing.txt"), b"content").unwrap();

        let err = RepoFetcher::new()
            .fetch("https://example.invalid/repo.git", temp.path())
            .unwrap_err();
        assert!(matches!(err, CorpusError::DestinationNotEmpty(_)));
    }

    #[test]
    fn empty_destination_is_acceptable_up_to_the_clone_itself() {
        let temp = tempdir().unwrap();
        let dest = temp.path().join("checkout");

        // An unresolvable URL must fail in git, not in the precondition
        // checks; parent directories get created either way.
        let err = RepoFetcher::with_depth(2)
            .fetch("https://example.invalid/repo.git", &dest)
            .unwrap_err();
        assert!(matches!(
            err,
            CorpusError::CloneFailed { .. } | CorpusError::GitUnavailable(_)
        ));
        assert!(dest.parent().unwrap().exists());
    }
}
