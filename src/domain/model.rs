use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A book on a bookworm's shelf.
///
/// Identity is the pair (author, title). Field order matters: the derived
/// `Ord` compares by author first, then by title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Book {
    pub author: String,
    pub title: String,
}

impl Book {
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

/// A bookworm and the books on their shelf, in the order they were listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookworm {
    pub name: String,
    pub books: Vec<Book>,
}

impl Bookworm {
    pub fn new(name: impl Into<String>, books: Vec<Book>) -> Self {
        Self {
            name: name.into(),
            books,
        }
    }
}

/// The bookworms decoded from a single roster file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterShard {
    pub source: String,
    pub bookworms: Vec<Bookworm>,
}

/// Number of occurrences of each book across a roster.
///
/// Counts occurrences, not owners: a bookworm listing the same book twice
/// contributes two. An entry only exists once its count is at least one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookTally {
    counts: HashMap<Book, usize>,
}

impl BookTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, book: &Book) {
        match self.counts.get_mut(book) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(book.clone(), 1);
            }
        }
    }

    /// Returns the count for `book`, zero when it was never recorded.
    pub fn get(&self, book: &Book) -> usize {
        self.counts.get(book).copied().unwrap_or(0)
    }

    /// Folds another partial tally into this one by summing counts per book.
    pub fn merge(&mut self, other: BookTally) {
        for (book, count) in other.counts {
            *self.counts.entry(book).or_insert(0) += count;
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of occurrences recorded.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Book, usize)> {
        self.counts.iter().map(|(book, count)| (book, *count))
    }
}

impl<const N: usize> From<[(Book, usize); N]> for BookTally {
    fn from(entries: [(Book, usize); N]) -> Self {
        Self {
            counts: entries.into_iter().filter(|(_, count)| *count > 0).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommonBooksReport {
    pub bookworm_count: usize,
    pub tally: BookTally,
    pub common_books: Vec<Book>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}
