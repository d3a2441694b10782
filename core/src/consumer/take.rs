use core::ops::ControlFlow;

use super::Consumer;
use crate::{error::Result, value::Value};

/// Collects settled elements until `limit` of them are held.
#[derive(Debug)]
pub struct Take<T> {
    limit: usize,
    res: Vec<T>,
}

impl<T> Take<T> {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            res: Vec::new(),
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.res.len() >= self.limit
    }
}

impl<'a, T> Consumer<'a, T> for Take<T> {
    type Output = Vec<T>;

    fn feed(mut self, item: T) -> Value<'a, ControlFlow<Self::Output, Self>> {
        self.res.push(item);
        Value::Plain(if self.is_full() {
            ControlFlow::Break(self.res)
        } else {
            ControlFlow::Continue(self)
        })
    }

    fn finish(self) -> Result<Self::Output> {
        Ok(self.res)
    }
}
