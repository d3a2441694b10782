use core::iter::FusedIterator;

use tracing::debug;

use crate::{error::Error, value::Value};

/// Lazily expands every settled element one level deep.
///
/// Only plain elements can be expanded. A pending element is not passed
/// through unexpanded: its source is unknown until it settles, so that
/// position yields [`Error::PendingSource`] and a terminal stops there.
/// Resolve nested sources before flattening, for example with a terminal per
/// element.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Flatten<I, J> {
    iter: I,
    inner: Option<J>,
}

impl<I, J> Flatten<I, J> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter, inner: None }
    }
}

impl<'a, I, S, J, T> Iterator for Flatten<I, J>
where
    I: Iterator<Item = Value<'a, S>>,
    S: IntoIterator<IntoIter = J, Item = T>,
    J: Iterator<Item = T>,
    T: 'a,
{
    type Item = Value<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                match inner.next() {
                    Some(item) => return Some(Value::Plain(item)),
                    None => self.inner = None,
                }
            }

            match self.iter.next()? {
                Value::Plain(source) => self.inner = Some(source.into_iter()),
                Value::Failed(err) => return Some(Value::Failed(err)),
                Value::Pending(_) => {
                    debug!("cannot expand a pending element");
                    return Some(Value::Failed(Error::PendingSource));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, _) = self.inner.as_ref().map_or((0, None), |i| i.size_hint());
        (lower, None)
    }
}

impl<'a, I, S, J, T> FusedIterator for Flatten<I, J>
where
    I: FusedIterator<Item = Value<'a, S>>,
    S: IntoIterator<IntoIter = J, Item = T>,
    J: Iterator<Item = T>,
    T: 'a,
{
}
