use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::error::IoError;
use crate::domain::Item;

const HEADER: [&str; 5] = ["id", "name", "description", "status", "email"];

/// Write items as CSV, header first, in the order given
pub async fn write_items<W>(items: &[Item], mut writer: W) -> Result<(), IoError>
where
    W: AsyncWrite + Unpin + Send,
{
    // Encode in memory, the csv writer is synchronous
    let mut encoder = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    encoder.write_record(HEADER)?;
    for item in items {
        encoder.serialize(item)?;
    }

    let bytes = encoder
        .into_inner()
        .map_err(|e| IoError::Io(e.into_error()))?;

    writer.write_all(&bytes).await?;
    writer.flush().await?;
    Ok(())
}
