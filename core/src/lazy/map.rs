use core::iter::FusedIterator;
use std::rc::Rc;

use crate::value::Value;

/// Lazily applies a stage to every element, settled or not.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Map<I, F> {
    iter: I,
    f: Rc<F>,
}

impl<I, F> Map<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        Self { iter, f: Rc::new(f) }
    }
}

impl<'a, I, F, T, U> Iterator for Map<I, F>
where
    I: Iterator<Item = Value<'a, T>>,
    F: Fn(T) -> Value<'a, U> + 'a,
    T: 'a,
    U: 'a,
{
    type Item = Value<'a, U>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let f = Rc::clone(&self.f);
        Some(item.then(move |value| f(value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, I, F, T, U> FusedIterator for Map<I, F>
where
    I: FusedIterator<Item = Value<'a, T>>,
    F: Fn(T) -> Value<'a, U> + 'a,
    T: 'a,
    U: 'a,
{
}
