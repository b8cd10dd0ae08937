use crate::core::{Bookworm, RosterShard, Storage};
use crate::utils::error::{BookwormsError, Result};
use futures_util::stream::{self, StreamExt, TryStreamExt};

/// Decodes a roster from raw JSON bytes. `path` is only used for error reporting.
pub fn decode_roster(path: &str, data: &[u8]) -> Result<Vec<Bookworm>> {
    serde_json::from_slice(data).map_err(|source| BookwormsError::MalformedRoster {
        path: path.to_string(),
        source,
    })
}

/// Reads the file and returns the bookworms, and their beloved books, found therein.
pub async fn load_bookworms<S: Storage>(storage: &S, path: &str) -> Result<Vec<Bookworm>> {
    let data = match storage.read_file(path).await {
        Ok(data) => data,
        Err(BookwormsError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(BookwormsError::RosterNotFound {
                path: path.to_string(),
            });
        }
        Err(e) => return Err(e),
    };

    tracing::debug!("Read {} bytes from {}", data.len(), path);
    decode_roster(path, &data)
}

async fn load_shard<S: Storage>(storage: &S, path: &str) -> Result<RosterShard> {
    let bookworms = load_bookworms(storage, path).await?;
    tracing::debug!("Loaded {} bookworms from {}", bookworms.len(), path);
    Ok(RosterShard {
        source: path.to_string(),
        bookworms,
    })
}

/// Loads every roster file with at most `concurrency` reads in flight.
///
/// Shards come back in the order of `paths`. The first failure aborts the load.
pub async fn load_rosters<S: Storage>(
    storage: &S,
    paths: &[String],
    concurrency: usize,
) -> Result<Vec<RosterShard>> {
    let loads: Vec<_> = paths.iter().map(|path| load_shard(storage, path)).collect();

    stream::iter(loads)
        .buffered(concurrency.max(1))
        .try_collect()
        .await
}
