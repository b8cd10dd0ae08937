pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::common_books_pipeline::CommonBooksPipeline;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::etl::EtlEngine;
pub use crate::core::tally::{books_count, find_common_books, sort_books};
pub use domain::model::{Book, BookTally, Bookworm, OutputFormat};
pub use utils::error::{BookwormsError, Result};
