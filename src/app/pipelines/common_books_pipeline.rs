use crate::core::{
    loader, presenter, tally, BookTally, CommonBooksReport, ConfigProvider, Pipeline, RosterShard, Storage,
};
use crate::utils::error::Result;
use std::io::Write;

pub const STDOUT_DESTINATION: &str = "stdout";

pub struct CommonBooksPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> CommonBooksPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CommonBooksPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RosterShard>> {
        let files = self.config.roster_files();
        tracing::debug!(
            "Loading {} roster file(s), up to {} at a time",
            files.len(),
            self.config.concurrent_reads()
        );

        loader::load_rosters(&self.storage, files, self.config.concurrent_reads()).await
    }

    async fn transform(&self, shards: Vec<RosterShard>) -> Result<CommonBooksReport> {
        let mut bookworm_count = 0;
        let mut merged = BookTally::new();

        // every shard is fully counted before it is merged
        for shard in &shards {
            let partial = tally::books_count(&shard.bookworms);
            tracing::debug!(
                "{}: {} bookworms, {} book occurrences",
                shard.source,
                shard.bookworms.len(),
                partial.total()
            );
            bookworm_count += shard.bookworms.len();
            merged.merge(partial);
        }

        let common_books = tally::common_books(&merged);
        if common_books.is_empty() {
            tracing::info!("No book appears on more than one shelf");
        }

        Ok(CommonBooksReport {
            bookworm_count,
            tally: merged,
            common_books,
        })
    }

    async fn load(&self, report: CommonBooksReport) -> Result<String> {
        let format = self.config.output_format();
        let rendered = presenter::render(&report.common_books, format)?;
        tracing::debug!("Rendered {} bytes as {}", rendered.len(), format);

        match self.config.output_path() {
            Some(path) => {
                self.storage.write_file(path, rendered.as_bytes()).await?;
                Ok(path.to_string())
            }
            None => {
                write_stdout(&rendered)?;
                Ok(STDOUT_DESTINATION.to_string())
            }
        }
    }
}

fn write_stdout(rendered: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Book, Bookworm, OutputFormat};
    use crate::utils::error::BookwormsError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put_file(&self, path: &str, content: &str) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), content.as_bytes().to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                BookwormsError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        roster_files: Vec<String>,
        output_format: OutputFormat,
        output_path: Option<String>,
        concurrent_reads: usize,
    }

    impl MockConfig {
        fn new(roster_files: &[&str]) -> Self {
            Self {
                roster_files: roster_files.iter().map(|f| f.to_string()).collect(),
                output_format: OutputFormat::Text,
                output_path: Some("common_books.txt".to_string()),
                concurrent_reads: 2,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn roster_files(&self) -> &[String] {
            &self.roster_files
        }

        fn output_format(&self) -> OutputFormat {
            self.output_format
        }

        fn output_path(&self) -> Option<&str> {
            self.output_path.as_deref()
        }

        fn concurrent_reads(&self) -> usize {
            self.concurrent_reads
        }
    }

    fn shard(source: &str, bookworms: Vec<Bookworm>) -> RosterShard {
        RosterShard {
            source: source.to_string(),
            bookworms,
        }
    }

    #[tokio::test]
    async fn test_extract_reads_every_roster_file() {
        let storage = MockStorage::new();
        storage
            .put_file("a.json", r#"[{"name": "Fadi", "books": [{"author": "Sylvia Plath", "title": "The Bell Jar"}]}]"#)
            .await;
        storage.put_file("b.json", r#"[{"name": "Joe", "books": []}]"#).await;

        let pipeline = CommonBooksPipeline::new(storage, MockConfig::new(&["a.json", "b.json"]));
        let shards = pipeline.extract().await.unwrap();

        assert_eq!(shards.len(), 2);
        assert_eq!(shards[0].bookworms[0].name, "Fadi");
        assert_eq!(shards[1].bookworms[0].name, "Joe");
    }

    #[tokio::test]
    async fn test_extract_missing_file() {
        let pipeline = CommonBooksPipeline::new(MockStorage::new(), MockConfig::new(&["missing.json"]));

        let err = pipeline.extract().await.unwrap_err();

        assert!(matches!(err, BookwormsError::RosterNotFound { .. }));
    }

    #[tokio::test]
    async fn test_transform_counts_across_shards() {
        let bell_jar = Book::new("Sylvia Plath", "The Bell Jar");
        let jane_eyre = Book::new("Charlotte Brontë", "Jane Eyre");
        let shards = vec![
            shard("a.json", vec![Bookworm::new("Fadi", vec![bell_jar.clone(), jane_eyre.clone()])]),
            shard("b.json", vec![Bookworm::new("Peggy", vec![bell_jar.clone()])]),
        ];

        let pipeline = CommonBooksPipeline::new(MockStorage::new(), MockConfig::new(&[]));
        let report = pipeline.transform(shards).await.unwrap();

        assert_eq!(report.bookworm_count, 2);
        assert_eq!(report.tally.get(&bell_jar), 2);
        assert_eq!(report.tally.get(&jane_eyre), 1);
        assert_eq!(report.common_books, vec![bell_jar]);
    }

    #[tokio::test]
    async fn test_transform_with_no_shards() {
        let pipeline = CommonBooksPipeline::new(MockStorage::new(), MockConfig::new(&[]));

        let report = pipeline.transform(vec![]).await.unwrap();

        assert_eq!(report.bookworm_count, 0);
        assert!(report.tally.is_empty());
        assert!(report.common_books.is_empty());
    }

    #[tokio::test]
    async fn test_load_writes_rendered_output() {
        let storage = MockStorage::new();
        let pipeline = CommonBooksPipeline::new(storage.clone(), MockConfig::new(&[]));
        let report = CommonBooksReport {
            bookworm_count: 2,
            tally: BookTally::new(),
            common_books: vec![Book::new("Sylvia Plath", "The Bell Jar")],
        };

        let destination = pipeline.load(report).await.unwrap();

        assert_eq!(destination, "common_books.txt");
        let written = storage.get_file("common_books.txt").await.unwrap();
        assert_eq!(String::from_utf8(written).unwrap(), "- The Bell Jar by Sylvia Plath\n");
    }

    #[tokio::test]
    async fn test_load_as_csv() {
        let storage = MockStorage::new();
        let mut config = MockConfig::new(&[]);
        config.output_format = OutputFormat::Csv;
        config.output_path = Some("common_books.csv".to_string());
        let pipeline = CommonBooksPipeline::new(storage.clone(), config);
        let report = CommonBooksReport {
            bookworm_count: 0,
            tally: BookTally::new(),
            common_books: vec![],
        };

        pipeline.load(report).await.unwrap();

        let written = storage.get_file("common_books.csv").await.unwrap();
        assert_eq!(String::from_utf8(written).unwrap(), "author,title\n");
    }
}
