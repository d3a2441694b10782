//! Lazy producers and the terminals that drive them.
//!
//! Producers perform no work until they are iterated, and then only as much
//! as each `next()` demands. Their elements are [`Value`]s, so a stage may
//! answer with a plain value for one element and a pending one for the next.
//! The terminals ([`take`], [`reduce`], ...) resolve pending elements in
//! source order, one at a time, and only return a pending result when they
//! actually had to wait.

pub mod ext;
pub mod filter;
pub mod flatten;
pub mod lift;
pub mod map;
pub mod range;

pub use self::{
    ext::LazyExt, filter::Filter, flatten::Flatten, lift::Lift, map::Map, range::Range,
};
use crate::{
    consumer::{
        drive,
        fold::{Fold, Reduce},
        take::Take,
    },
    value::Value,
};

pub fn map<'a, I, T, U, F>(f: F) -> impl FnOnce(I) -> Map<I::IntoIter, F> + Clone
where
    I: IntoIterator<Item = Value<'a, T>>,
    F: Fn(T) -> Value<'a, U> + Clone + 'a,
    T: 'a,
    U: 'a,
{
    move |iter| Map::new(iter.into_iter(), f)
}

pub fn filter<'a, I, T, P>(predicate: P) -> impl FnOnce(I) -> Filter<I::IntoIter, P> + Clone
where
    I: IntoIterator<Item = Value<'a, T>>,
    P: Fn(&T) -> Value<'a, bool> + Clone + 'a,
    T: 'a,
{
    move |iter| Filter::new(iter.into_iter(), predicate)
}

pub fn flatten<'a, I, S>(iter: I) -> Flatten<I::IntoIter, S::IntoIter>
where
    I: IntoIterator<Item = Value<'a, S>>,
    S: IntoIterator,
    S::Item: 'a,
{
    Flatten::new(iter.into_iter())
}

/// `flatten` after `map(f)`.
pub fn flat_map<'a, I, T, S, F>(
    f: F,
) -> impl FnOnce(I) -> Flatten<Map<I::IntoIter, F>, S::IntoIter> + Clone
where
    I: IntoIterator<Item = Value<'a, T>>,
    F: Fn(T) -> Value<'a, S> + Clone + 'a,
    S: IntoIterator + 'a,
    S::Item: 'a,
    T: 'a,
{
    move |iter| Flatten::new(Map::new(iter.into_iter(), f))
}

/// `0..end`, produced on demand.
pub fn range(end: usize) -> Range {
    Range::new(Some(end))
}

/// `0, 1, 2, ...` without end. Bound it with a `take`.
pub fn naturals() -> Range {
    Range::new(None)
}

/// Turns a plain source into a source of plain [`Value`]s.
pub fn lift<'a, I>(iter: I) -> Lift<'a, I::IntoIter>
where
    I: IntoIterator,
    I::Item: 'a,
{
    Lift::new(iter.into_iter())
}

/// Key/value pairs of an associative container, one per demand.
pub fn entries<'a, M, K, V>(map: M) -> Lift<'a, M::IntoIter>
where
    M: IntoIterator<Item = (K, V)>,
    K: 'a,
    V: 'a,
{
    lift(map)
}

pub(crate) fn take_from<'a, I, T>(iter: I, limit: usize) -> Value<'a, Vec<T>>
where
    I: IntoIterator<Item = Value<'a, T>>,
    I::IntoIter: 'a,
    T: 'a,
{
    if limit == 0 {
        return Value::Plain(Vec::new());
    }
    drive(iter, Take::new(limit))
}

/// Collects the first `limit` settled elements that were not skipped.
///
/// Draws exactly as many elements as it examines and never one more.
pub fn take<'a, I, T>(limit: usize) -> impl FnOnce(I) -> Value<'a, Vec<T>> + Clone
where
    I: IntoIterator<Item = Value<'a, T>>,
    I::IntoIter: 'a,
    T: 'a,
{
    move |iter| take_from(iter, limit)
}

pub fn take_all<'a, I, T>(iter: I) -> Value<'a, Vec<T>>
where
    I: IntoIterator<Item = Value<'a, T>>,
    I::IntoIter: 'a,
    T: 'a,
{
    take_from(iter, usize::MAX)
}

pub fn head<'a, I, T>(iter: I) -> Value<'a, Option<T>>
where
    I: IntoIterator<Item = Value<'a, T>>,
    I::IntoIter: 'a,
    T: 'a,
{
    take_from(iter, 1).map(|res| res.into_iter().next())
}

pub fn find<'a, I, T, P>(predicate: P) -> impl FnOnce(I) -> Value<'a, Option<T>> + Clone
where
    I: IntoIterator<Item = Value<'a, T>>,
    I::IntoIter: 'a,
    P: Fn(&T) -> Value<'a, bool> + Clone + 'a,
    T: 'a,
{
    move |iter| head(Filter::new(iter.into_iter(), predicate))
}

/// Folds the settled elements into the first one.
///
/// Fails with [`Error::EmptySource`](crate::Error::EmptySource) if every
/// element was skipped or there were none.
pub fn reduce<'a, I, T, F>(f: F) -> impl FnOnce(I) -> Value<'a, T> + Clone
where
    I: IntoIterator<Item = Value<'a, T>>,
    I::IntoIter: 'a,
    F: FnMut(T, T) -> Value<'a, T> + Clone + 'a,
    T: 'a,
{
    move |iter| drive(iter, Reduce::new(f))
}

pub fn fold<'a, I, T, A, F>(f: F, seed: A) -> impl FnOnce(I) -> Value<'a, A> + Clone
where
    I: IntoIterator<Item = Value<'a, T>>,
    I::IntoIter: 'a,
    F: FnMut(A, T) -> Value<'a, A> + Clone + 'a,
    A: Clone + 'a,
    T: 'a,
{
    move |iter| drive(iter, Fold::new(f, seed))
}
