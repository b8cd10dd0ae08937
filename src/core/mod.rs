pub mod etl;
pub mod loader;
pub mod presenter;
pub mod tally;

pub use crate::domain::model::{Book, BookTally, Bookworm, CommonBooksReport, OutputFormat, RosterShard};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
