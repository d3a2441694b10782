use core::iter::FusedIterator;
use std::rc::Rc;

use crate::{error::Error, value::Value};

/// Lazily keeps the elements a predicate accepts.
///
/// A plain verdict is applied on the spot: rejected elements are skipped
/// without yielding anything. A pending verdict (or a pending element) is
/// yielded as a pending value that either settles with the element or fails
/// with [`Error::Skip`], so no later stage ever sees a rejected element.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filter<I, P> {
    iter: I,
    predicate: Rc<P>,
}

impl<I, P> Filter<I, P> {
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            predicate: Rc::new(predicate),
        }
    }
}

impl<'a, I, P, T> Iterator for Filter<I, P>
where
    I: Iterator<Item = Value<'a, T>>,
    P: Fn(&T) -> Value<'a, bool> + 'a,
    T: 'a,
{
    type Item = Value<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.iter.next()? {
                Value::Plain(item) => match (self.predicate)(&item) {
                    Value::Plain(true) => return Some(Value::Plain(item)),
                    Value::Plain(false) => continue,
                    Value::Failed(err) => return Some(Value::Failed(err)),
                    Value::Pending(keep) => {
                        return Some(Value::pending(async move {
                            if keep.await? {
                                Ok(item)
                            } else {
                                Err(Error::Skip)
                            }
                        }))
                    }
                },
                Value::Failed(err) => return Some(Value::Failed(err)),
                Value::Pending(fut) => {
                    let predicate = Rc::clone(&self.predicate);
                    return Some(Value::pending(async move {
                        let item = fut.await?;
                        if predicate(&item).await? {
                            Ok(item)
                        } else {
                            Err(Error::Skip)
                        }
                    }));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<'a, I, P, T> FusedIterator for Filter<I, P>
where
    I: FusedIterator<Item = Value<'a, T>>,
    P: Fn(&T) -> Value<'a, bool> + 'a,
    T: 'a,
{
}
