use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::{Stream, StreamExt};
use tokio::fs::File;
use tokio_util::compat::TokioAsyncReadCompatExt;

use super::error::IoError;
use super::parse::RawItemRecord;
use crate::domain::Item;

/// Async stream of validated items from CSV input
///
/// Expects a header row with `id,name,description,status,email`.
pub struct CsvItemStream {
    inner: Pin<Box<dyn Stream<Item = Result<Item, IoError>> + Send>>,
}

impl CsvItemStream {
    /// Create a new item stream from an async reader
    pub fn new<R>(reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let csv_reader = AsyncReaderBuilder::new()
            .trim(csv_async::Trim::All)
            .flexible(true)
            .create_deserializer(reader);

        let stream = csv_reader
            .into_deserialize::<RawItemRecord>()
            .map(|result| result.map_err(IoError::from).and_then(RawItemRecord::parse));

        Self {
            inner: Box::pin(stream),
        }
    }

    /// Create a new item stream from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let stream = CsvItemStream::from_file("items.csv").await?;
    /// ```
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file = File::open(path.as_ref()).await?;
        Ok(Self::new(file.compat()))
    }
}

impl Stream for CsvItemStream {
    type Item = Result<Item, IoError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}
