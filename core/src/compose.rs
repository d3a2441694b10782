//! Currying and left-to-right composition.
//!
//! Combinators in this crate are curried constructors: they take their
//! transformer, predicate or limit first and return a function of the source.
//! [`go!`](crate::go) runs such stages against a seed right away,
//! [`pipe!`](crate::pipe) stores them as a reusable function.

/// A two-argument function that can also be applied one argument at a time.
#[derive(Debug, Clone, Copy)]
pub struct Curried<F> {
    f: F,
}

/// Wraps a two-argument function.
///
/// ```
/// use fx_core::compose::curry;
///
/// let add = curry(|a: i32, b: i32| a + b);
/// assert_eq!(add.call(1, 2), 3);
///
/// let add_ten = add.partial(10);
/// assert_eq!(add_ten(5), 15);
/// ```
#[inline]
pub fn curry<F>(f: F) -> Curried<F> {
    Curried { f }
}

impl<F> Curried<F> {
    /// Applies both arguments now.
    #[inline]
    pub fn call<A, B, R>(&self, a: A, b: B) -> R
    where
        F: Fn(A, B) -> R,
    {
        (self.f)(a, b)
    }

    /// Fixes the first argument and returns a function awaiting the second.
    pub fn partial<A, B, R>(&self, a: A) -> impl Fn(B) -> R + Clone
    where
        F: Fn(A, B) -> R + Clone,
        A: Clone,
    {
        let f = self.f.clone();
        move |b| f(a.clone(), b)
    }
}

/// Runs `f`, then `g` on its result. The result can be called any number of
/// times as long as both stages are `Clone`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C + Clone
where
    F: FnOnce(A) -> B + Clone,
    G: FnOnce(B) -> C + Clone,
{
    move |a| (g.clone())((f.clone())(a))
}

/// Threads `seed` through every stage, left to right.
///
/// ```
/// use fx_core::{go, eager::{filter, map, reduce}};
///
/// let sum = go!(
///     0..10,
///     map(|n: i32| n + 10),
///     filter(|n: &i32| n % 2 == 1),
///     reduce(|a: i32, b: i32| a + b),
/// );
/// assert_eq!(sum.unwrap(), 75);
/// ```
#[macro_export]
macro_rules! go {
    ($seed:expr $(, $stage:expr)* $(,)?) => {{
        let acc = $seed;
        $(
            let acc = ($stage)(acc);
        )*
        acc
    }};
}

/// Builds a reusable pipeline out of stages without running it.
///
/// ```
/// use fx_core::{pipe, eager::{map, take}};
///
/// let first_two_squares = pipe!(map(|n: i32| n * n), take(2));
/// assert_eq!(first_two_squares(vec![3, 4, 5]), vec![9, 16]);
/// assert_eq!(first_two_squares(vec![1]), vec![1]);
/// ```
#[macro_export]
macro_rules! pipe {
    ($first:expr $(,)?) => {
        $crate::compose::compose($first, |out| out)
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!($crate::compose::compose($first, $second) $(, $rest)*)
    };
}
