use futures::{Stream, StreamExt};
use tracing::{debug, warn};

use super::error::IoError;
use crate::domain::Item;
use crate::storage::ItemStore;

/// Counts from seeding a store
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub rejected: usize,
}

/// Save every valid record of `stream` into `store`
///
/// Malformed or invalid rows are logged and skipped. A store failure aborts
/// the load, since continuing would silently drop the rest of the input.
pub async fn load_items<S, St>(store: &S, mut stream: St) -> Result<LoadSummary, IoError>
where
    S: ItemStore + ?Sized,
    St: Stream<Item = Result<Item, IoError>> + Unpin,
{
    let mut summary = LoadSummary::default();

    while let Some(record) = stream.next().await {
        match record {
            Ok(item) => {
                let saved = store.save(item).await?;
                debug!(item_id = ?saved.id(), "Loaded item");
                summary.loaded += 1;
            }
            Err(e) => {
                warn!(error = %e, "Skipping invalid item record");
                summary.rejected += 1;
            }
        }
    }

    Ok(summary)
}
