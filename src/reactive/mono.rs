//! Deferred single-value producer.

use std::convert::Infallible;
use std::future::{Future, IntoFuture};
use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

/// A producer of at most one value that may instead fail.
///
/// Awaiting a `Mono` yields `Ok(Some(value))`, `Ok(None)` when the producer
/// completed without a value, or `Err(error)` for a terminal failure.
pub struct Mono<T, E = Infallible> {
    inner: BoxFuture<'static, Result<Option<T>, E>>,
}

impl<T, E> Mono<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Wrap an arbitrary future.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Result<Option<T>, E>> + Send + 'static,
    {
        Self {
            inner: future.boxed(),
        }
    }

    /// Complete immediately with `value`.
    pub fn just(value: T) -> Self {
        Self::from_future(async move { Ok(Some(value)) })
    }

    /// Complete immediately without a value.
    pub fn empty() -> Self {
        Self::from_future(async { Ok(None) })
    }

    /// Fail immediately with `error`.
    pub fn error(error: E) -> Self {
        Self::from_future(async move { Err(error) })
    }

    /// Complete with `value` once `delay` has elapsed.
    ///
    /// Only the awaiting task is suspended; the worker thread stays free.
    pub fn delayed(value: T, delay: Duration) -> Self {
        Self::from_future(async move {
            tokio::time::sleep(delay).await;
            Ok(Some(value))
        })
    }

    /// Transform the value, if any.
    pub fn map<U, F>(self, f: F) -> Mono<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        Mono::from_future(self.inner.map(|result| result.map(|value| value.map(f))))
    }

    /// Substitute `fallback` when the upstream completes empty.
    ///
    /// Errors pass through untouched.
    pub fn default_if_empty(self, fallback: T) -> Self {
        Self::from_future(
            self.inner
                .map(|result| result.map(|value| Some(value.unwrap_or(fallback)))),
        )
    }

    /// Substitute `fallback` when the upstream fails.
    pub fn on_error_return(self, fallback: T) -> Mono<T, Infallible> {
        Mono::from_future(self.inner.map(|result| Ok(result.unwrap_or(Some(fallback)))))
    }
}

impl<T, E> IntoFuture for Mono<T, E> {
    type Output = Result<Option<T>, E>;
    type IntoFuture = BoxFuture<'static, Result<Option<T>, E>>;

    fn into_future(self) -> Self::IntoFuture {
        self.inner
    }
}

impl<T, E> std::fmt::Debug for Mono<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mono").finish_non_exhaustive()
    }
}
