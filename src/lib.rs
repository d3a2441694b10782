//! Eager, lazy, async-transparent and concurrent combinators sharing one
//! iteration protocol.
//!
//! ```
//! use fx::prelude::*;
//!
//! let odd_squares = go!(
//!     1..=10,
//!     L::lift,
//!     L::map(|n: i32| Value::plain(n * n)),
//!     L::filter(|n: &i32| Value::plain(n % 2 == 1)),
//!     L::take(3),
//! );
//! assert!(matches!(odd_squares, Value::Plain(ref v) if v == &[1, 9, 25]));
//! ```

pub use fx_core::*;
pub use fx_parallel as concurrent;

pub mod prelude {
    pub use fx_core::{
        compose::{curry, Curried},
        consumer::Consumer,
        eager::{
            filter, find, flat_map, flatten, fold, head, join, map, reduce, take, take_all,
            Nested,
        },
        error::{Error, Result},
        go,
        lazy::{self as L, LazyExt},
        pipe,
        value::Value,
    };
    pub use fx_parallel as C;
}
