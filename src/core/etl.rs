use crate::core::{CommonBooksReport, Pipeline};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order. Returns where the output went.
    pub async fn run(&self) -> Result<String> {
        let (_, destination) = self.run_with_report().await?;
        Ok(destination)
    }

    pub async fn run_with_report(&self) -> Result<(CommonBooksReport, String)> {
        tracing::info!("Starting bookworms run");

        // Extract
        let shards = self.pipeline.extract().await?;
        tracing::info!("Loaded {} roster file(s)", shards.len());

        // Transform
        let report = self.pipeline.transform(shards).await?;
        tracing::info!(
            "Counted {} distinct books across {} bookworms, {} in common",
            report.tally.len(),
            report.bookworm_count,
            report.common_books.len()
        );

        // Load
        let destination = self.pipeline.load(report.clone()).await?;
        tracing::info!("Output written to {}", destination);

        Ok((report, destination))
    }
}
