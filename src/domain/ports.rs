use crate::domain::model::{CommonBooksReport, OutputFormat, RosterShard};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn roster_files(&self) -> &[String];
    fn output_format(&self) -> OutputFormat;
    /// `None` means the result goes to stdout.
    fn output_path(&self) -> Option<&str>;
    fn concurrent_reads(&self) -> usize;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RosterShard>>;
    async fn transform(&self, shards: Vec<RosterShard>) -> Result<CommonBooksReport>;
    async fn load(&self, report: CommonBooksReport) -> Result<String>;
}
