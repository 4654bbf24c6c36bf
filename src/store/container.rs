use crate::mvi::Reducer;

type Listener<S> = Box<dyn FnMut(&S) + Send>;

/// Handle returned by [`Store::subscribe`]; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Single owner of reducer state.
///
/// Constructed explicitly and handed to whoever drives the view. All
/// mutation goes through [`Store::dispatch`], which runs the reducer to
/// completion before any listener sees the result.
pub struct Store<R: Reducer> {
    state: R::State,
    listeners: Vec<(Subscription, Listener<R::State>)>,
    next_subscription: u64,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Run the reducer, replace the state, then notify every listener.
    pub fn dispatch(&mut self, action: R::Action) {
        let previous = std::mem::take(&mut self.state);
        self.state = R::reduce(previous, action);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    /// Register a listener invoked after every dispatch.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&R::State) + Send + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((subscription, Box::new(listener)));
        subscription
    }

    /// Returns false when the subscription was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        let removed = self.listeners.len() != before;
        tracing::trace!(removed, remaining = self.listener_count(), "unsubscribe");
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
