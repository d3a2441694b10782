use core::{
    fmt,
    future::{Future, IntoFuture},
    pin::Pin,
    task::{Context, Poll},
};

use futures_core::future::LocalBoxFuture;

use crate::error::{Error, Result};

/// A one-shot computation that settles with a `T` or fails.
pub type Pending<'a, T> = LocalBoxFuture<'a, Result<T>>;

/// A value that may not be available yet.
///
/// Every combinator in this crate hands values around as `Value`, so a stage
/// never needs a separate code path for synchronous and asynchronous input:
/// [`Value::then`] applies the next step immediately to a plain value and
/// defers it behind a pending one.
#[must_use = "a value may be pending and does nothing unless resolved"]
pub enum Value<'a, T> {
    /// Available now.
    Plain(T),
    /// Available once the future settles.
    Pending(Pending<'a, T>),
    /// Failed synchronously.
    Failed(Error),
}

impl<'a, T> Value<'a, T> {
    #[inline]
    pub fn plain(value: T) -> Self {
        Value::Plain(value)
    }

    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = Result<T>> + 'a,
    {
        Value::Pending(Box::pin(future))
    }

    #[inline]
    pub fn failed(err: impl Into<Error>) -> Self {
        Value::Failed(err.into())
    }

    #[inline]
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => Value::Plain(value),
            Err(err) => Value::Failed(err),
        }
    }

    #[inline]
    pub fn is_plain(&self) -> bool {
        matches!(self, Value::Plain(_))
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Value::Pending(_))
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, Value::Failed(_))
    }

    /// Resolve-then-apply.
    ///
    /// A plain value is handed to `f` right away. A pending value becomes a
    /// new pending value that runs `f` after it settles. A failure is passed
    /// through and `f` is never called, so a rejected or failed element can
    /// not leak into a later stage.
    ///
    /// ```
    /// use fx_core::Value;
    ///
    /// let doubled = Value::plain(21).then(|x| Value::plain(x * 2));
    /// assert!(matches!(doubled, Value::Plain(42)));
    /// ```
    pub fn then<U, F>(self, f: F) -> Value<'a, U>
    where
        F: FnOnce(T) -> Value<'a, U> + 'a,
        T: 'a,
        U: 'a,
    {
        match self {
            Value::Plain(value) => f(value),
            Value::Failed(err) => Value::Failed(err),
            Value::Pending(fut) => Value::pending(async move { f(fut.await?).await }),
        }
    }

    pub fn map<U, F>(self, f: F) -> Value<'a, U>
    where
        F: FnOnce(T) -> U + 'a,
        T: 'a,
        U: 'a,
    {
        self.then(move |value| Value::Plain(f(value)))
    }

    /// Runs `f` on a failure, leaving successful values untouched.
    pub fn recover<F>(self, f: F) -> Value<'a, T>
    where
        F: FnOnce(Error) -> Value<'a, T> + 'a,
        T: 'a,
    {
        match self {
            Value::Plain(value) => Value::Plain(value),
            Value::Failed(err) => f(err),
            Value::Pending(fut) => Value::pending(async move {
                match fut.await {
                    Ok(value) => Ok(value),
                    Err(err) => f(err).await,
                }
            }),
        }
    }

    /// Returns the outcome if it is already known, or gives the value back.
    pub fn into_ready(self) -> core::result::Result<Result<T>, Self> {
        match self {
            Value::Plain(value) => Ok(Ok(value)),
            Value::Failed(err) => Ok(Err(err)),
            pending @ Value::Pending(_) => Err(pending),
        }
    }
}

impl<T> From<T> for Value<'_, T> {
    #[inline]
    fn from(value: T) -> Self {
        Value::Plain(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Value<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Plain(value) => f.debug_tuple("Plain").field(value).finish(),
            Value::Pending(_) => f.write_str("Pending(..)"),
            Value::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
        }
    }
}

impl<'a, T> IntoFuture for Value<'a, T> {
    type Output = Result<T>;
    type IntoFuture = Resolve<'a, T>;

    #[inline]
    fn into_future(self) -> Self::IntoFuture {
        Resolve { value: Some(self) }
    }
}

/// Future returned by awaiting a [`Value`].
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Resolve<'a, T> {
    value: Option<Value<'a, T>>,
}

// `T` is only ever moved out, never pinned.
impl<T> Unpin for Resolve<'_, T> {}

impl<T> Future for Resolve<'_, T> {
    type Output = Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match this.value.take() {
            Some(Value::Plain(value)) => Poll::Ready(Ok(value)),
            Some(Value::Failed(err)) => Poll::Ready(Err(err)),
            Some(Value::Pending(mut fut)) => match fut.as_mut().poll(cx) {
                Poll::Ready(out) => Poll::Ready(out),
                Poll::Pending => {
                    this.value = Some(Value::Pending(fut));
                    Poll::Pending
                }
            },
            None => panic!("`Resolve` polled after completion"),
        }
    }
}
