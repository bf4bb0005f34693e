// Logo directory catalog - Lists league logo images on disk
use crate::application::logo_service::LogoCatalog;
use crate::domain::notification::LogoIndex;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &[".svg", ".png"];

#[derive(Debug, Clone, Default)]
pub struct DirectoryLogoCatalog;

impl DirectoryLogoCatalog {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LogoCatalog for DirectoryLogoCatalog {
    async fn list_logos(&self, root: &str) -> Result<LogoIndex> {
        let root = PathBuf::from(root);
        tokio::task::spawn_blocking(move || read_logo_tree(&root))
            .await
            .context("Logo directory walk panicked")?
    }
}

fn is_image(name: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Collapse `root/<league>/<file>` into league name → sorted image file names.
/// Leagues without images are left out.
pub fn read_logo_tree(root: &Path) -> Result<LogoIndex> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("Failed to read logo directory {}", root.display()))?;

    let mut index = LogoIndex::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let mut files = Vec::new();
        for file in fs::read_dir(entry.path())? {
            let file = file?;
            let name = file.file_name().to_string_lossy().into_owned();
            if file.file_type()?.is_file() && is_image(&name) {
                files.push(name);
            }
        }

        if files.is_empty() {
            continue;
        }
        files.sort();
        index.insert(entry.file_name().to_string_lossy().into_owned(), files);
    }

    Ok(index)
}
