use super::{take_from, Filter, Flatten, Map};
use crate::{
    consumer::{
        drive,
        fold::{Fold, Reduce},
    },
    value::Value,
};

/// Method-style access to the lazy stages and terminals, for call sites that
/// read better as a chain than as a [`go!`](crate::go) pipeline.
///
/// ```
/// use fx_core::{lazy::{self, LazyExt}, Value};
///
/// let evens = lazy::lift(1..=6)
///     .then_map(|n: i32| Value::plain(n * n))
///     .then_filter(|n: &i32| Value::plain(n % 2 == 0))
///     .take_settled(2);
/// assert!(matches!(evens, Value::Plain(ref v) if v == &[4, 16]));
/// ```
pub trait LazyExt<'a, T>: Iterator<Item = Value<'a, T>> + Sized {
    fn then_map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(T) -> Value<'a, U> + 'a,
        T: 'a,
        U: 'a,
    {
        Map::new(self, f)
    }

    fn then_filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&T) -> Value<'a, bool> + 'a,
        T: 'a,
    {
        Filter::new(self, predicate)
    }

    fn then_flat_map<S, F>(self, f: F) -> Flatten<Map<Self, F>, S::IntoIter>
    where
        F: Fn(T) -> Value<'a, S> + 'a,
        S: IntoIterator + 'a,
        S::Item: 'a,
        T: 'a,
    {
        Flatten::new(Map::new(self, f))
    }

    fn take_settled(self, limit: usize) -> Value<'a, Vec<T>>
    where
        Self: 'a,
        T: 'a,
    {
        take_from(self, limit)
    }

    fn reduce_settled<F>(self, f: F) -> Value<'a, T>
    where
        Self: 'a,
        F: FnMut(T, T) -> Value<'a, T> + 'a,
        T: 'a,
    {
        drive(self, Reduce::new(f))
    }

    fn fold_settled<A, F>(self, f: F, seed: A) -> Value<'a, A>
    where
        Self: 'a,
        F: FnMut(A, T) -> Value<'a, A> + 'a,
        A: 'a,
        T: 'a,
    {
        drive(self, Fold::new(f, seed))
    }
}

impl<'a, T, I> LazyExt<'a, T> for I where I: Iterator<Item = Value<'a, T>> {}
