use std::marker::PhantomData;
use std::sync::mpsc::Sender;

use crate::mvi::Reducer;
use crate::store::container::Store;

/// Anything that accepts actions. Async action creators are written against
/// this so they can target the store directly (tests) or the UI event queue.
pub trait Dispatch<A> {
    fn dispatch(&mut self, action: A);
}

impl<R: Reducer> Dispatch<R::Action> for Store<R> {
    fn dispatch(&mut self, action: R::Action) {
        Store::dispatch(self, action);
    }
}

/// Forwards actions onto an event channel so they are reduced on the thread
/// that owns the store.
pub struct QueuedDispatcher<A, E> {
    tx: Sender<E>,
    _action: PhantomData<fn(A)>,
}

impl<A, E> QueuedDispatcher<A, E> {
    pub fn new(tx: Sender<E>) -> Self {
        Self {
            tx,
            _action: PhantomData,
        }
    }
}

impl<A, E> Clone for QueuedDispatcher<A, E> {
    fn clone(&self) -> Self {
        Self::new(self.tx.clone())
    }
}

impl<A, E: From<A>> Dispatch<A> for QueuedDispatcher<A, E> {
    fn dispatch(&mut self, action: A) {
        if self.tx.send(E::from(action)).is_err() {
            tracing::trace!("queued action dropped (event loop gone)");
        }
    }
}
