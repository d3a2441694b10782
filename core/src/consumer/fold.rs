use core::ops::ControlFlow;

use super::Consumer;
use crate::{
    error::{Error, Result},
    value::Value,
};

/// Folds settled elements into a seeded accumulator.
pub struct Fold<A, F> {
    f: F,
    acc: A,
}

impl<A, F> Fold<A, F> {
    pub fn new(f: F, seed: A) -> Self {
        Self { f, acc: seed }
    }
}

impl<'a, T, A, F> Consumer<'a, T> for Fold<A, F>
where
    F: FnMut(A, T) -> Value<'a, A> + 'a,
    A: 'a,
{
    type Output = A;

    fn feed(self, item: T) -> Value<'a, ControlFlow<A, Self>> {
        let Fold { mut f, acc } = self;
        let next = f(acc, item);
        next.map(move |acc| ControlFlow::Continue(Fold { f, acc }))
    }

    fn finish(self) -> Result<A> {
        Ok(self.acc)
    }
}

/// Folds settled elements into the first one.
pub struct Reduce<T, F> {
    f: F,
    acc: Option<T>,
}

impl<T, F> Reduce<T, F> {
    pub fn new(f: F) -> Self {
        Self { f, acc: None }
    }
}

impl<'a, T, F> Consumer<'a, T> for Reduce<T, F>
where
    F: FnMut(T, T) -> Value<'a, T> + 'a,
    T: 'a,
{
    type Output = T;

    fn feed(self, item: T) -> Value<'a, ControlFlow<T, Self>> {
        let Reduce { mut f, acc } = self;
        match acc {
            None => Value::Plain(ControlFlow::Continue(Reduce {
                f,
                acc: Some(item),
            })),
            Some(acc) => f(acc, item).map(move |acc| {
                ControlFlow::Continue(Reduce {
                    f,
                    acc: Some(acc),
                })
            }),
        }
    }

    fn finish(self) -> Result<T> {
        self.acc.ok_or(Error::EmptySource)
    }
}
