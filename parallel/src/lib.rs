//! Concurrent terminals.
//!
//! The terminals in [`fx_core::lazy`] settle one element before they draw
//! the next, so pending elements run one after another. The functions here
//! first [`launch`] the whole source, which lets every pending element make
//! progress at once, and then consume it in order with the same sequential
//! terminal. Results keep source order regardless of which element settles
//! first.
//!
//! Sources must be finite since they are drained up front.

pub mod launch;

use fx_core::{lazy, Value};

pub use crate::launch::{launch, Launched};

pub fn take<'a, I, T>(limit: usize) -> impl FnOnce(I) -> Value<'a, Vec<T>> + Clone
where
    I: IntoIterator<Item = Value<'a, T>>,
    T: 'a,
{
    move |iter| lazy::take(limit)(launch(iter))
}

pub fn take_all<'a, I, T>(iter: I) -> Value<'a, Vec<T>>
where
    I: IntoIterator<Item = Value<'a, T>>,
    T: 'a,
{
    lazy::take_all(launch(iter))
}

pub fn reduce<'a, I, T, F>(f: F) -> impl FnOnce(I) -> Value<'a, T> + Clone
where
    I: IntoIterator<Item = Value<'a, T>>,
    F: FnMut(T, T) -> Value<'a, T> + Clone + 'a,
    T: 'a,
{
    move |iter| lazy::reduce(f)(launch(iter))
}

pub fn fold<'a, I, T, A, F>(f: F, seed: A) -> impl FnOnce(I) -> Value<'a, A> + Clone
where
    I: IntoIterator<Item = Value<'a, T>>,
    F: FnMut(A, T) -> Value<'a, A> + Clone + 'a,
    A: Clone + 'a,
    T: 'a,
{
    move |iter| lazy::fold(f, seed)(launch(iter))
}

/// Applies `f` to every element, running the pending results together.
pub fn map<'a, I, T, U, F>(f: F) -> impl FnOnce(I) -> Value<'a, Vec<U>> + Clone
where
    I: IntoIterator<Item = Value<'a, T>>,
    F: Fn(T) -> Value<'a, U> + Clone + 'a,
    T: 'a,
    U: 'a,
{
    move |iter| take_all(lazy::map(f)(iter))
}

/// Keeps the elements `predicate` accepts, testing them all together.
pub fn filter<'a, I, T, P>(predicate: P) -> impl FnOnce(I) -> Value<'a, Vec<T>> + Clone
where
    I: IntoIterator<Item = Value<'a, T>>,
    P: Fn(&T) -> Value<'a, bool> + Clone + 'a,
    T: 'a,
{
    move |iter| take_all(lazy::filter(predicate)(iter))
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, future::IntoFuture};

    use futures_lite::future::yield_now;
    use fx_core::{go, lazy as L, Error, Value};

    fn settle<T>(value: Value<'_, T>) -> fx_core::Result<T> {
        spin_on::spin_on(value.into_future())
    }

    fn after<'a, T: 'a>(value: T, yields: u32) -> Value<'a, T> {
        Value::pending(async move {
            for _ in 0..yields {
                yield_now().await;
            }
            Ok(value)
        })
    }

    fn failing_after<'a, T: 'a>(message: &'static str, yields: u32) -> Value<'a, T> {
        Value::pending(async move {
            for _ in 0..yields {
                yield_now().await;
            }
            Err(Error::msg(message))
        })
    }

    #[test]
    fn results_keep_source_order() {
        let out = super::take_all(vec![after('a', 3), after('b', 0), after('c', 1)]);
        assert_eq!(settle(out).unwrap(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn map_starts_every_element_before_any_settles() {
        let log = RefCell::new(Vec::new());
        let out = go!(
            vec![3u32, 1, 2],
            L::lift,
            super::map(|n: u32| {
                let log = &log;
                Value::pending(async move {
                    log.borrow_mut().push(format!("start {n}"));
                    for _ in 0..n {
                        yield_now().await;
                    }
                    log.borrow_mut().push(format!("settle {n}"));
                    Ok(n * 10)
                })
            }),
        );
        assert_eq!(settle(out).unwrap(), vec![30, 10, 20]);
        assert_eq!(
            *log.borrow(),
            [
                "start 3", "start 1", "start 2", "settle 1", "settle 2", "settle 3"
            ]
        );
    }

    #[test]
    fn sequential_terminals_run_one_at_a_time() {
        let log = RefCell::new(Vec::new());
        let out = go!(
            vec![2u32, 1],
            L::lift,
            L::map(|n: u32| {
                let log = &log;
                Value::pending(async move {
                    log.borrow_mut().push(format!("start {n}"));
                    yield_now().await;
                    log.borrow_mut().push(format!("settle {n}"));
                    Ok(n)
                })
            }),
            L::take_all,
        );
        assert_eq!(settle(out).unwrap(), vec![2, 1]);
        assert_eq!(
            *log.borrow(),
            ["start 2", "settle 2", "start 1", "settle 1"]
        );
    }

    #[test]
    fn take_ignores_failures_it_never_reaches() {
        let out = super::take(1)(vec![after(1, 2), failing_after("too late", 0)]);
        assert_eq!(settle(out).unwrap(), vec![1]);

        let out = super::take(2)(vec![after(1, 2), failing_after("reached", 0)]);
        assert_eq!(settle(out).unwrap_err().to_string(), "reached");
    }

    #[test]
    fn filter_drops_rejected_elements() {
        let out = super::filter(|n: &i32| after(n % 2 == 0, (*n as u32) % 3))(L::lift(1..=6));
        assert_eq!(settle(out).unwrap(), vec![2, 4, 6]);
    }

    #[test]
    fn reduce_and_fold_over_launched_elements() {
        let source = || vec![after(1, 2), Value::plain(2), after(3, 1)];
        let sum = super::reduce(|a: i32, b: i32| Value::plain(a + b))(source());
        assert_eq!(settle(sum).unwrap(), 6);

        let total = super::fold(|acc: i32, n: i32| after(acc * n, 1), 1)(source());
        assert_eq!(settle(total).unwrap(), 6);

        let nothing = super::reduce(|a: i32, b: i32| Value::plain(a + b))(Vec::new());
        assert!(matches!(nothing, Value::Failed(Error::EmptySource)));
    }

    #[test]
    fn first_failure_in_order_wins() {
        let out = super::take_all(vec![
            after(1, 0),
            failing_after::<i32>("second", 3),
            failing_after("third", 0),
        ]);
        assert_eq!(settle(out).unwrap_err().to_string(), "second");
    }
}
