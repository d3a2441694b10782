//! Combinators that consume a plain source and materialize their result.
//!
//! All of them accept any [`IntoIterator`]: vectors, arrays, ranges, maps
//! (as key/value pairs), iterators that are already running, and the lazy
//! producers of [`lazy`](crate::lazy).

use core::fmt::Display;

use crate::error::{Error, Result};

pub fn map<I, F, U>(f: F) -> impl FnOnce(I) -> Vec<U> + Clone
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U + Clone,
{
    move |iter| iter.into_iter().map(f).collect()
}

pub fn filter<I, P>(predicate: P) -> impl FnOnce(I) -> Vec<I::Item> + Clone
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool + Clone,
{
    move |iter| iter.into_iter().filter(predicate).collect()
}

/// Collects at most `limit` elements, drawing no more than it keeps.
pub fn take<I>(limit: usize) -> impl FnOnce(I) -> Vec<I::Item> + Clone
where
    I: IntoIterator,
{
    move |iter| {
        let mut res = Vec::new();
        if limit == 0 {
            return res;
        }
        for item in iter {
            res.push(item);
            if res.len() == limit {
                break;
            }
        }
        res
    }
}

pub fn take_all<I: IntoIterator>(iter: I) -> Vec<I::Item> {
    take(usize::MAX)(iter)
}

pub fn head<I: IntoIterator>(iter: I) -> Option<I::Item> {
    take(1)(iter).into_iter().next()
}

/// Returns the first element matching `predicate`, drawing nothing past it.
pub fn find<I, P>(predicate: P) -> impl FnOnce(I) -> Option<I::Item> + Clone
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool + Clone,
{
    move |iter| head(iter.into_iter().filter(predicate))
}

/// Folds a source into its first element.
///
/// Fails with [`Error::EmptySource`] when there is no first element.
pub fn reduce<I, F>(f: F) -> impl FnOnce(I) -> Result<I::Item> + Clone
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item + Clone,
{
    move |iter| {
        let mut iter = iter.into_iter();
        let seed = iter.next().ok_or(Error::EmptySource)?;
        Ok(iter.fold(seed, f))
    }
}

pub fn fold<I, A, F>(f: F, seed: A) -> impl FnOnce(I) -> A + Clone
where
    I: IntoIterator,
    A: Clone,
    F: FnMut(A, I::Item) -> A + Clone,
{
    move |iter| iter.into_iter().fold(seed, f)
}

/// Expands every element one level deep.
pub fn flatten<I>(iter: I) -> Vec<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    iter.into_iter().flatten().collect()
}

pub fn flat_map<I, F, S>(f: F) -> impl FnOnce(I) -> Vec<S::Item> + Clone
where
    I: IntoIterator,
    F: FnMut(I::Item) -> S + Clone,
    S: IntoIterator,
{
    move |iter| flatten(iter.into_iter().map(f))
}

/// Concatenates displayable elements with `sep` between each pair.
///
/// ```
/// use std::collections::BTreeMap;
/// use fx_core::{go, eager::{join, map}};
///
/// let params = BTreeMap::from([("limit", 10), ("offset", 10)]);
/// let query = go!(params, map(|(k, v): (&str, i32)| format!("{k}={v}")), join("&"));
/// assert_eq!(query, "limit=10&offset=10");
/// ```
pub fn join<I>(sep: &str) -> impl FnOnce(I) -> String + Clone + '_
where
    I: IntoIterator,
    I::Item: Display,
{
    move |iter| {
        let mut out = String::new();
        for (i, item) in iter.into_iter().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            out.push_str(&item.to_string());
        }
        out
    }
}

/// An element of a mixed sequence: either a single leaf or a nested source.
///
/// `Nested` is itself an iteration source, so a sequence of them can be
/// flattened: leaves pass through unchanged and sources are expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T, S> {
    Leaf(T),
    Source(S),
}

impl<T, S> IntoIterator for Nested<T, S>
where
    S: IntoIterator<Item = T>,
{
    type Item = T;
    type IntoIter = NestedIter<T, S::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Nested::Leaf(leaf) => NestedIter::Leaf(Some(leaf)),
            Nested::Source(source) => NestedIter::Source(source.into_iter()),
        }
    }
}

#[derive(Debug)]
pub enum NestedIter<T, I> {
    Leaf(Option<T>),
    Source(I),
}

impl<T, I> Iterator for NestedIter<T, I>
where
    I: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self {
            NestedIter::Leaf(leaf) => leaf.take(),
            NestedIter::Source(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            NestedIter::Leaf(leaf) => {
                let n = leaf.is_some() as usize;
                (n, Some(n))
            }
            NestedIter::Source(iter) => iter.size_hint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::Cell,
        collections::{BTreeMap, HashMap},
    };

    use super::*;
    use crate::error::Error;

    #[test]
    fn map_and_filter_accept_any_source() {
        assert_eq!(map(|n: i32| n + 10)(vec![1, 2, 3]), vec![11, 12, 13]);
        assert_eq!(map(|n: usize| n * 2)(0..3), vec![0, 2, 4]);
        assert_eq!(filter(|n: &i32| n % 2 == 1)([1, 2, 3, 4, 5]), vec![1, 3, 5]);

        let mut prices = HashMap::new();
        prices.insert("tea", 3);
        let names = map(|(name, _): (&str, i32)| name.to_owned())(prices);
        assert_eq!(names, vec!["tea".to_owned()]);
    }

    #[test]
    fn reduce_without_seed_starts_from_the_first_element() {
        assert_eq!(reduce(|a: i32, b: i32| a + b)(vec![1, 2, 3, 4, 5]).unwrap(), 15);
        assert_eq!(reduce(|a: i32, b: i32| a + b)(vec![7]).unwrap(), 7);
        let empty: Vec<i32> = Vec::new();
        assert!(matches!(
            reduce(|a: i32, b: i32| a + b)(empty),
            Err(Error::EmptySource)
        ));
    }

    #[test]
    fn fold_uses_the_seed() {
        assert_eq!(fold(|a: i32, b: i32| a + b, 100)(vec![1, 2]), 103);
        assert_eq!(fold(|a: i32, b: i32| a + b, 100)(Vec::<i32>::new()), 100);
    }

    #[test]
    fn take_draws_no_more_than_it_keeps() {
        let pulls = Cell::new(0);
        let source = (0..).inspect(|_| pulls.set(pulls.get() + 1));
        assert_eq!(take(3)(source), vec![0, 1, 2]);
        assert_eq!(pulls.get(), 3);

        let pulls = Cell::new(0);
        let source = (0..).inspect(|_| pulls.set(pulls.get() + 1));
        assert!(take(0)(source).is_empty());
        assert_eq!(pulls.get(), 0);

        assert_eq!(take(10)(vec![1, 2]), vec![1, 2]);
        assert_eq!(take_all(1..4), vec![1, 2, 3]);
    }

    #[test]
    fn find_stops_at_the_first_match() {
        #[derive(Debug, PartialEq)]
        struct User {
            age: u32,
        }
        let seen = Cell::new(0);
        let users = [32, 28, 29, 35, 37].map(|age| User { age });
        let young = find(|u: &User| {
            seen.set(seen.get() + 1);
            u.age < 30
        })(users);
        assert_eq!(young, Some(User { age: 28 }));
        assert_eq!(seen.get(), 2);
        assert_eq!(find(|n: &i32| *n > 100)(vec![1, 2]), None);
    }

    #[test]
    fn flatten_expands_one_level() {
        let mixed = vec![
            Nested::Source(vec![1, 2]),
            Nested::Leaf(3),
            Nested::Leaf(4),
            Nested::Source(vec![5, 6]),
        ];
        assert_eq!(flatten(mixed), vec![1, 2, 3, 4, 5, 6]);

        let deep = vec![vec![vec![1]], vec![vec![2, 3]]];
        assert_eq!(flatten(deep), vec![vec![1], vec![2, 3]]);
    }

    #[test]
    fn flat_map_maps_then_flattens() {
        let squares = flat_map(|xs: Vec<i32>| xs.into_iter().map(|x| x * x))(vec![
            vec![1, 2],
            vec![3, 4],
            vec![5, 6, 7],
        ]);
        assert_eq!(squares, vec![1, 4, 9, 16, 25, 36, 49]);
    }

    #[test]
    fn join_builds_a_query_string() {
        let params = BTreeMap::from([("limit", "10"), ("offset", "10"), ("type", "notice")]);
        let query = crate::go!(
            params,
            map(|(k, v): (&str, &str)| format!("{k}={v}")),
            join("&")
        );
        assert_eq!(query, "limit=10&offset=10&type=notice");
        assert_eq!(join(",")(Vec::<i32>::new()), "");
    }
}
