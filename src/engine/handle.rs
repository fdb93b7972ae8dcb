use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;
use tokio::task::JoinHandle;

use super::error::EngineError;
use crate::domain::Item;

pin_project! {
    /// Awaitable result of a spawned processing run
    ///
    /// Resolves once every item task of the run has resolved. Dropping the
    /// handle detaches the run instead of cancelling it, so in-flight saves
    /// still complete. Wrap in `tokio::time::timeout` to bound the wait.
    pub struct CompletionHandle {
        #[pin]
        inner: JoinHandle<Result<Vec<Item>, EngineError>>,
    }
}

impl CompletionHandle {
    pub(crate) fn new(inner: JoinHandle<Result<Vec<Item>, EngineError>>) -> Self {
        Self { inner }
    }

    /// Whether the run has already resolved
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

impl Future for CompletionHandle {
    type Output = Result<Vec<Item>, EngineError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(cx).map(|joined| match joined {
            Ok(result) => result,
            Err(e) => Err(EngineError::RunAborted(e.to_string())),
        })
    }
}
