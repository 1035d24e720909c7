//! Lazy multi-value producer.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::future;
use futures_util::stream::{self, BoxStream, Stream, StreamExt};

use crate::reactive::Mono;

/// A finite, order-preserving stream of items pulled on demand.
///
/// Each operator wraps the upstream without polling it, so an item is only
/// produced when the consumer asks for the next one.
pub struct Flux<T> {
    inner: BoxStream<'static, T>,
}

impl<T> Flux<T>
where
    T: Send + 'static,
{
    /// Emit the items of `iter` in order.
    pub fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        Self::from_stream(stream::iter(iter))
    }

    /// Wrap an arbitrary stream.
    pub fn from_stream<S>(source: S) -> Self
    where
        S: Stream<Item = T> + Send + 'static,
    {
        Self {
            inner: source.boxed(),
        }
    }

    /// Complete without emitting.
    pub fn empty() -> Self {
        Self::from_stream(stream::empty())
    }

    /// Keep the items matching `predicate`.
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        Self::from_stream(
            self.inner
                .filter(move |item| future::ready(predicate(item))),
        )
    }

    /// Transform every item.
    pub fn map<U, F>(self, f: F) -> Flux<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        Flux::from_stream(self.inner.map(f))
    }

    /// Emit all items of `self`, then all items of `next`.
    ///
    /// `next` is not polled until `self` has completed.
    pub fn concat(self, next: Flux<T>) -> Self {
        Self::from_stream(self.inner.chain(next.inner))
    }

    /// Stop after `n` items.
    pub fn take(self, n: usize) -> Self {
        Self::from_stream(self.inner.take(n))
    }

    /// Drop items equal to one already emitted, keeping the first occurrence.
    ///
    /// Equality is full `PartialEq`, so the seen set is a plain list.
    pub fn distinct(self) -> Self
    where
        T: PartialEq + Clone,
    {
        let mut seen: Vec<T> = Vec::new();
        Self::from_stream(self.inner.filter(move |item| {
            let first = !seen.contains(item);
            if first {
                seen.push(item.clone());
            }
            future::ready(first)
        }))
    }

    /// Buffer every item into a single list.
    pub fn collect_list<E>(self) -> Mono<Vec<T>, E>
    where
        E: Send + 'static,
    {
        Mono::from_future(async move { Ok(Some(self.inner.collect::<Vec<T>>().await)) })
    }
}

impl<T> Stream for Flux<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.inner.poll_next_unpin(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> std::fmt::Debug for Flux<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flux").finish_non_exhaustive()
    }
}
