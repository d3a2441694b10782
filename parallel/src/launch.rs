use core::{
    future::Future,
    mem,
    pin::Pin,
    sync::atomic::{AtomicBool, Ordering},
    task::{Context, Poll, Waker},
};
use std::{
    cell::RefCell,
    rc::Rc,
    sync::{Arc, Mutex, PoisonError},
    task::Wake,
};

use fx_core::{Pending, Result, Value};
use tracing::{debug, trace};

enum Slot<'a, T> {
    Running(Pending<'a, T>),
    Settled(Result<T>),
    Taken,
}

/// Wake bookkeeping shared between a group and the wakers it hands out.
///
/// `woken[i]` marks member `i` as due for a poll. `handles[i]` is the waker of
/// whichever task last polled handle `i`.
struct Signal {
    woken: Vec<AtomicBool>,
    handles: Mutex<Vec<Option<Waker>>>,
}

impl Signal {
    fn register(&self, slot: usize, waker: &Waker) {
        let mut handles = self.handles.lock().unwrap_or_else(PoisonError::into_inner);
        match &mut handles[slot] {
            Some(known) if known.will_wake(waker) => {}
            other => *other = Some(waker.clone()),
        }
    }

    fn take_handle(&self, slot: usize) -> Option<Waker> {
        self.handles.lock().unwrap_or_else(PoisonError::into_inner)[slot].take()
    }

    fn wake_handles(&self) {
        let handles: Vec<Waker> = self
            .handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .flatten()
            .cloned()
            .collect();
        for waker in handles {
            waker.wake();
        }
    }
}

/// The waker a member is polled with.
///
/// Marks its member as woken and wakes every task waiting on a handle of the
/// group, since any of them may be the one to drive the member next.
struct MemberWaker {
    signal: Arc<Signal>,
    slot: usize,
}

impl Wake for MemberWaker {
    fn wake(self: Arc<Self>) {
        self.wake_by_ref();
    }

    fn wake_by_ref(self: &Arc<Self>) {
        self.signal.woken[self.slot].store(true, Ordering::Release);
        self.signal.wake_handles();
    }
}

/// Every pending element of one launched source.
struct Group<'a, T> {
    slots: Vec<Slot<'a, T>>,
    wakers: Vec<Waker>,
    signal: Arc<Signal>,
}

impl<'a, T> Group<'a, T> {
    fn new(slots: Vec<Slot<'a, T>>) -> Self {
        let signal = Arc::new(Signal {
            woken: slots.iter().map(|_| AtomicBool::new(true)).collect(),
            handles: Mutex::new(slots.iter().map(|_| None).collect()),
        });
        let wakers = (0..slots.len())
            .map(|slot| {
                Waker::from(Arc::new(MemberWaker {
                    signal: Arc::clone(&signal),
                    slot,
                }))
            })
            .collect();
        Self {
            slots,
            wakers,
            signal,
        }
    }

    /// Polls the members woken since the last call. `current` is the slot of
    /// the handle doing the polling; other handles whose member settles are
    /// woken so their tasks can collect it.
    fn poll_woken(&mut self, current: usize) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if !self.signal.woken[i].swap(false, Ordering::AcqRel) {
                continue;
            }
            if let Slot::Running(fut) = slot {
                let mut cx = Context::from_waker(&self.wakers[i]);
                if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
                    *slot = Slot::Settled(out);
                    if i != current {
                        if let Some(waker) = self.signal.take_handle(i) {
                            waker.wake();
                        }
                    }
                }
            }
        }
    }
}

impl<T> Drop for Group<'_, T> {
    fn drop(&mut self) {
        let mut running = 0;
        for slot in self.slots.drain(..) {
            match slot {
                Slot::Settled(Err(err)) if !err.is_skip() => {
                    trace!(error = %err, "discarding unconsumed failure");
                }
                Slot::Running(_) => running += 1,
                _ => {}
            }
        }
        if running > 0 {
            trace!(running, "cancelling unconsumed members");
        }
    }
}

/// Handle to one member of a launch group.
///
/// Polling it drives every member that was woken since the group was last
/// polled and then reports on its own. Handles of one group may be awaited
/// from different tasks.
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Launched<'a, T> {
    group: Rc<RefCell<Group<'a, T>>>,
    slot: usize,
}

impl<T> Future for Launched<'_, T> {
    type Output = Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let mut group = this.group.borrow_mut();
        group.signal.register(this.slot, cx.waker());
        group.poll_woken(this.slot);
        match mem::replace(&mut group.slots[this.slot], Slot::Taken) {
            Slot::Settled(out) => {
                group.signal.take_handle(this.slot);
                Poll::Ready(out)
            }
            running @ Slot::Running(_) => {
                group.slots[this.slot] = running;
                Poll::Pending
            }
            Slot::Taken => panic!("`Launched` polled after completion"),
        }
    }
}

enum Staged<'a, T> {
    Ready(Value<'a, T>),
    Member(usize),
}

/// Drains `iter` and starts all of its pending elements together.
///
/// The result has one value per element, in source order: plain and failed
/// elements are kept as they are, pending ones are replaced by handles into a
/// shared group. The source must be finite.
pub fn launch<'a, I, T>(iter: I) -> Vec<Value<'a, T>>
where
    I: IntoIterator<Item = Value<'a, T>>,
    T: 'a,
{
    let mut slots = Vec::new();
    let staged: Vec<_> = iter
        .into_iter()
        .map(|item| match item {
            Value::Pending(fut) => {
                slots.push(Slot::Running(fut));
                Staged::Member(slots.len() - 1)
            }
            ready => Staged::Ready(ready),
        })
        .collect();

    if !slots.is_empty() {
        debug!(members = slots.len(), elements = staged.len(), "launching");
    }
    let group = Rc::new(RefCell::new(Group::new(slots)));
    staged
        .into_iter()
        .map(|item| match item {
            Staged::Ready(value) => value,
            Staged::Member(slot) => Value::pending(Launched {
                group: Rc::clone(&group),
                slot,
            }),
        })
        .collect()
}
