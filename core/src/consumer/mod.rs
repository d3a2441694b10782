pub mod fold;
pub mod take;

use core::{
    future::Future,
    mem,
    ops::ControlFlow,
    pin::Pin,
    task::{Context, Poll},
};

use pin_project_lite::pin_project;
use tracing::trace;

use crate::{
    error::{Error, Result},
    value::{Pending, Value},
};

/// The accumulating half of a terminal operation.
///
/// A consumer only ever sees settled elements; [`drive`] takes care of
/// waiting on pending ones and dropping skipped ones.
pub trait Consumer<'a, T>: Sized {
    type Output;

    /// Accepts one element. `Break` ends consumption early.
    fn feed(self, item: T) -> Value<'a, ControlFlow<Self::Output, Self>>;

    /// Called once the source is exhausted.
    fn finish(self) -> Result<Self::Output>;
}

pub(crate) enum State<'a, T, C>
where
    C: Consumer<'a, T>,
{
    Element(Pending<'a, T>, C),
    Feed(Pending<'a, ControlFlow<C::Output, C>>),
    Done,
}

pub(crate) enum Flow<O> {
    Done(Result<O>),
    Wait,
}

pin_project! {
    /// The suspended remainder of a terminal loop.
    ///
    /// Created when [`drive`] meets a pending element or a pending
    /// accumulator; resumes drawing from the source once it settles.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct Drive<'a, I, T, C>
    where
        C: Consumer<'a, T>,
    {
        iter: I,
        state: State<'a, T, C>,
    }
}

fn resume<'a, I, T, C>(
    iter: &mut I,
    state: &mut State<'a, T, C>,
    mut consumer: C,
) -> Flow<C::Output>
where
    I: Iterator<Item = Value<'a, T>>,
    C: Consumer<'a, T>,
{
    loop {
        let fed = match iter.next() {
            None => return Flow::Done(consumer.finish()),
            Some(Value::Plain(item)) => consumer.feed(item),
            Some(Value::Failed(Error::Skip)) => {
                trace!("dropping rejected element");
                continue;
            }
            Some(Value::Failed(err)) => return Flow::Done(Err(err)),
            Some(Value::Pending(fut)) => {
                trace!("suspending on pending element");
                *state = State::Element(fut, consumer);
                return Flow::Wait;
            }
        };
        match fed {
            Value::Plain(ControlFlow::Continue(next)) => consumer = next,
            Value::Plain(ControlFlow::Break(out)) => return Flow::Done(Ok(out)),
            Value::Failed(err) => return Flow::Done(Err(err)),
            Value::Pending(fut) => {
                trace!("suspending on pending accumulator");
                *state = State::Feed(fut);
                return Flow::Wait;
            }
        }
    }
}

impl<'a, I, T, C> Future for Drive<'a, I, T, C>
where
    I: Iterator<Item = Value<'a, T>>,
    C: Consumer<'a, T>,
{
    type Output = Result<C::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        loop {
            let consumer = match mem::replace(this.state, State::Done) {
                State::Element(mut fut, consumer) => match fut.as_mut().poll(cx) {
                    Poll::Pending => {
                        *this.state = State::Element(fut, consumer);
                        return Poll::Pending;
                    }
                    Poll::Ready(Ok(item)) => match consumer.feed(item) {
                        Value::Plain(ControlFlow::Continue(next)) => next,
                        Value::Plain(ControlFlow::Break(out)) => return Poll::Ready(Ok(out)),
                        Value::Failed(err) => return Poll::Ready(Err(err)),
                        Value::Pending(fut) => {
                            *this.state = State::Feed(fut);
                            continue;
                        }
                    },
                    Poll::Ready(Err(Error::Skip)) => {
                        trace!("dropping rejected element");
                        consumer
                    }
                    Poll::Ready(Err(err)) => return Poll::Ready(Err(err)),
                },
                State::Feed(mut fut) => match fut.as_mut().poll(cx) {
                    Poll::Pending => {
                        *this.state = State::Feed(fut);
                        return Poll::Pending;
                    }
                    Poll::Ready(Ok(ControlFlow::Continue(next))) => next,
                    Poll::Ready(Ok(ControlFlow::Break(out))) => return Poll::Ready(Ok(out)),
                    Poll::Ready(Err(err)) => return Poll::Ready(Err(err)),
                },
                State::Done => panic!("`Drive` polled after completion"),
            };
            if let Flow::Done(out) = resume(this.iter, this.state, consumer) {
                return Poll::Ready(out);
            }
        }
    }
}

/// Feeds every element of `iter` to `consumer`.
///
/// Runs synchronously while elements are plain and returns a plain result if
/// it never had to wait. Otherwise the rest of the loop is returned as a
/// pending value.
pub fn drive<'a, I, T, C>(iter: I, consumer: C) -> Value<'a, C::Output>
where
    I: IntoIterator<Item = Value<'a, T>>,
    I::IntoIter: 'a,
    C: Consumer<'a, T> + 'a,
    T: 'a,
{
    let mut drive = Drive {
        iter: iter.into_iter(),
        state: State::Done,
    };
    match resume(&mut drive.iter, &mut drive.state, consumer) {
        Flow::Done(Ok(out)) => Value::Plain(out),
        Flow::Done(Err(err)) => Value::Failed(err),
        Flow::Wait => Value::pending(drive),
    }
}

#[cfg(test)]
mod tests {
    use std::future::IntoFuture;

    use futures_lite::future::yield_now;

    use super::{drive, fold::Fold, take::Take};
    use crate::{error::Error, value::Value};

    fn later<'a, T: 'a>(value: T) -> Value<'a, T> {
        Value::pending(async move {
            yield_now().await;
            Ok(value)
        })
    }

    #[test]
    fn plain_sources_finish_synchronously() {
        let out = drive(vec![Value::plain(1), Value::plain(2)], Take::new(5));
        assert!(matches!(out, Value::Plain(ref v) if v == &[1, 2]));
    }

    #[test]
    fn skipped_elements_are_absorbed() {
        let source = vec![
            Value::plain(1),
            Value::failed(Error::Skip),
            Value::pending(async { Err(Error::Skip) }),
            later(4),
        ];
        let out = spin_on::spin_on(drive(source, Take::new(5)).into_future());
        assert_eq!(out.unwrap(), vec![1, 4]);
    }

    #[test]
    fn the_first_real_failure_wins() {
        let source = vec![
            later(1),
            Value::pending(async { Err(Error::msg("second")) }),
            Value::failed(Error::msg("third")),
        ];
        let out = spin_on::spin_on(drive(source, Take::new(5)).into_future());
        assert_eq!(out.unwrap_err().to_string(), "second");
    }

    #[test]
    fn pending_accumulators_suspend_the_fold() {
        let source = vec![Value::plain(1), Value::plain(2), Value::plain(3)];
        let out = drive(source, Fold::new(|acc: i32, x: i32| later(acc + x), 0));
        assert!(out.is_pending());
        assert_eq!(spin_on::spin_on(out.into_future()).unwrap(), 6);
    }
}
