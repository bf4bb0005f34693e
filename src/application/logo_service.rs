// Logo service - Use case for listing locally stored league logos
use crate::domain::notification::{LogoIndex, Notification};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait LogoCatalog: Send + Sync {
    /// League directory name → image files directly inside it
    async fn list_logos(&self, root: &str) -> anyhow::Result<LogoIndex>;
}

#[derive(Clone)]
pub struct LogoService {
    catalog: Arc<dyn LogoCatalog>,
    logos_dir: String,
    custom_logos_dir: String,
}

impl LogoService {
    pub fn new(catalog: Arc<dyn LogoCatalog>, logos_dir: String, custom_logos_dir: String) -> Self {
        Self {
            catalog,
            logos_dir,
            custom_logos_dir,
        }
    }

    pub async fn list_local_logos(&self, unique_id: &str) -> Notification {
        let logos = self.load(&self.logos_dir).await;
        let logos_custom = self.load(&self.custom_logos_dir).await;

        Notification::LocalLogoList {
            unique_id: unique_id.to_string(),
            logos,
            logos_custom,
        }
    }

    async fn load(&self, root: &str) -> LogoIndex {
        match self.catalog.list_logos(root).await {
            Ok(index) => index,
            Err(e) => {
                tracing::warn!("Could not list logos in {}: {:#}", root, e);
                LogoIndex::new()
            }
        }
    }
}
