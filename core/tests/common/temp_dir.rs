// SPDX-FileCopyrightText: 2025-2026 Agenda de Pedidos contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.

use std::path::PathBuf;

/// Temporary directories used for testing, removed when dropped.
#[derive(Debug)]
pub struct TempDirs {
    /// State directory for the storage files. Not created up front.
    pub state_dir: PathBuf,

    /// Directory for export and import files.
    pub files_dir: PathBuf,

    base: PathBuf,
}

impl TempDirs {
    /// Creates new temporary directories for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let base = tempfile::tempdir()?.keep();
        let state_dir = base.join("state");
        let files_dir = base.join("files");
        tokio::fs::create_dir_all(&files_dir).await?;
        Ok(Self {
            state_dir,
            files_dir,
            base,
        })
    }

    /// Gets the base temporary directory.
    #[must_use]
    pub fn base(&self) -> PathBuf {
        self.base.clone()
    }
}

/// Sets up temporary directories for integration tests.
///
/// # Errors
///
/// Returns an error if directory creation fails.
pub async fn setup_temp_dirs() -> Result<TempDirs, Box<dyn std::error::Error>> {
    TempDirs::new().await
}

impl Drop for TempDirs {
    fn drop(&mut self) {
        let base = self.base();
        if let Err(e) = std::fs::remove_dir_all(&base) {
            tracing::warn!(path = %base.display(), err = %e, "failed to clean up temp directory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn temp_dirs_share_base() {
        let dirs = TempDirs::new().await.unwrap();
        assert!(dirs.files_dir.is_dir());
        assert!(!dirs.state_dir.exists());
        assert!(dirs.state_dir.starts_with(dirs.base()));
    }

    #[tokio::test]
    async fn temp_dirs_cleanup_on_drop() {
        let base = {
            let dirs = TempDirs::new().await.unwrap();
            dirs.base()
        };
        assert!(!base.exists());
    }
}
