//! Curried pipeline combinators over plain and pending values.
//!
//! * [`eager`] consumes plain sources and materializes results at once.
//! * [`lazy`] produces elements on demand and resolves pending ones in order.
//! * [`value`] holds the [`Value`] type that lets a single stage accept both.

pub mod compose;
pub mod consumer;
pub mod eager;
pub mod error;
pub mod lazy;
pub mod value;

pub use crate::{
    compose::{compose, curry, Curried},
    eager::{
        filter, find, flat_map, flatten, fold, head, join, map, reduce, take, take_all, Nested,
    },
    error::{Error, Result},
    value::{Pending, Value},
};

pub mod prelude {
    pub use crate::{
        compose::{curry, Curried},
        consumer::Consumer,
        error::{Error, Result},
        go,
        lazy::{self as L, LazyExt},
        pipe,
        value::Value,
    };
}
