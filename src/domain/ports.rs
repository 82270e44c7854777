use crate::domain::model::{Endpoint, Payload};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub trait Storage: Send + Sync {
    /// Creates or truncates `path` and writes `data` in full. Returns the resolved path.
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoints(&self) -> &[Endpoint];
    fn data_dir(&self) -> &Path;
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Payload>;
}
