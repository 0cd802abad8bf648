//! Compute-once values shared by every caller
//!
//! The first caller creates the computation as a [`Shared`] future and each
//! caller, the first included, awaits its own clone. Dropping a caller drops
//! only that clone: the computation keeps its state (including any timer
//! deadline already set) and the remaining callers drive it to completion.
//! A caller arriving after every earlier one gave up resumes it from where it
//! stopped instead of starting over.

use futures::future::{BoxFuture, FutureExt, Shared};
use once_cell::sync::OnceCell;
use std::fmt;
use std::future::Future;

/// In-flight or finished computation shared between callers
pub type SharedTask<T> = Shared<BoxFuture<'static, T>>;

/// Wrap a future so it can be awaited by any number of callers
pub fn share<T, F>(future: F) -> SharedTask<T>
where
    T: Clone + Send + Sync + 'static,
    F: Future<Output = T> + Send + 'static,
{
    future.boxed().shared()
}

/// A value computed at most once
pub struct Memo<T: Clone + Send + Sync + 'static> {
    cell: OnceCell<SharedTask<T>>,
}

impl<T: Clone + Send + Sync + 'static> Memo<T> {
    /// Create an empty memo
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Handle on the computation, creating it with `init` if this is the first call
    ///
    /// `init` runs synchronously and only builds the future; nothing is polled
    /// until the handle is awaited.
    pub fn task<F, Fut>(&self, init: F) -> SharedTask<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T> + Send + 'static,
    {
        self.cell.get_or_init(|| share(init())).clone()
    }

    /// Await the value, creating the computation with `init` if needed
    pub async fn get_or_init<F, Fut>(&self, init: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T> + Send + 'static,
    {
        self.task(init).await
    }

    /// The value, if the computation has finished
    #[must_use]
    pub fn get(&self) -> Option<T> {
        self.cell.get().and_then(|task| task.peek().cloned())
    }

    /// Whether the computation has been created
    #[inline]
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("started", &self.is_started())
            .field("ready", &self.get().is_some())
            .finish()
    }
}
