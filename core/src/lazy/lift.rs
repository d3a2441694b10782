use core::{iter::FusedIterator, marker::PhantomData};

use crate::value::Value;

/// Wraps every element of a plain source in [`Value::Plain`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Lift<'a, I> {
    iter: I,
    _value: PhantomData<Value<'a, ()>>,
}

impl<I> Lift<'_, I> {
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter,
            _value: PhantomData,
        }
    }
}

impl<'a, I> Iterator for Lift<'a, I>
where
    I: Iterator,
    I::Item: 'a,
{
    type Item = Value<'a, I::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(Value::Plain)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, I> FusedIterator for Lift<'a, I>
where
    I: FusedIterator,
    I::Item: 'a,
{
}
