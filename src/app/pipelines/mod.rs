pub mod common_books_pipeline;
