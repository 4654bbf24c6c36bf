use crate::cancel::CancelToken;
use crate::model::{IdAllocator, User};
use crate::mvi::Reducer;
use crate::store::{AppState, Subscription, UserAction, UsersStore};
use crate::ui::editor::{EditorIntent, EditorReducer, EditorState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// View-side owner of the store plus the state only the view cares about
/// (selection, edit modal, spinner).
pub struct App {
    should_quit: bool,
    store: UsersStore,
    subscription: Subscription,
    /// Set by the store listener, cleared when a frame is drawn.
    needs_redraw: Arc<AtomicBool>,
    /// Edit modal state (MVI pattern). Staged edits live here until save.
    editor: EditorState,
    ids: IdAllocator,
    selected: usize,
    animation_tick: u8,
    session: CancelToken,
    fetch_started: bool,
}

impl App {
    pub fn new(mut store: UsersStore, session: CancelToken) -> Self {
        let needs_redraw = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&needs_redraw);
        let subscription = store.subscribe(move |_: &AppState| {
            flag.store(true, Ordering::SeqCst);
        });

        Self {
            should_quit: false,
            store,
            subscription,
            needs_redraw,
            editor: EditorState::default(),
            ids: IdAllocator::new(),
            selected: 0,
            animation_tick: 0,
            session,
            fetch_started: false,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn dispatch(&mut self, action: UserAction) {
        tracing::trace!(action = action.kind(), "dispatch");
        self.store.dispatch(action);
        self.clamp_selection();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Quit and cancel outstanding background work so nothing dispatches
    /// into a store that is about to go away.
    pub fn request_quit(&mut self) {
        self.should_quit = true;
        self.session.cancel();
    }

    /// Hands out the token for the initial fetch. Only the first call
    /// returns `Some`.
    pub fn begin_fetch(&mut self) -> Option<CancelToken> {
        if self.fetch_started {
            return None;
        }
        self.fetch_started = true;
        Some(self.session.clone())
    }

    pub fn on_tick(&mut self) {
        if self.state().loading {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.request_redraw();
        }
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn request_redraw(&self) {
        self.needs_redraw.store(true, Ordering::SeqCst);
    }

    /// Returns whether a redraw was pending and clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.swap(false, Ordering::SeqCst)
    }

    /// Stop listening to the store; later dispatches no longer flag a redraw.
    pub fn detach(&mut self) -> bool {
        self.store.unsubscribe(self.subscription)
    }

    // ========================================================================
    // Table selection
    // ========================================================================

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.state().users.get(self.selected)
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.state().users.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected.saturating_add_signed(delta).min(len - 1);
        if next != self.selected {
            self.selected = next;
            self.request_redraw();
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.request_redraw();
    }

    pub fn select_last(&mut self) {
        self.selected = self.state().users.len().saturating_sub(1);
        self.request_redraw();
    }

    fn clamp_selection(&mut self) {
        let max_index = self.state().users.len().saturating_sub(1);
        if self.selected > max_index {
            self.selected = max_index;
        }
    }

    // ========================================================================
    // Row actions
    // ========================================================================

    /// Append a placeholder user and select it.
    pub fn add_user(&mut self) {
        let id = self.ids.allocate(&self.store.state().users);
        self.dispatch(UserAction::add(User::placeholder(id)));
        self.select_last();
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_user().map(|user| user.id) else {
            return;
        };
        self.dispatch(UserAction::delete(id));
    }

    // ========================================================================
    // Edit modal (MVI pattern)
    // ========================================================================

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn dispatch_editor(&mut self, intent: EditorIntent) {
        dispatch_mvi!(self, editor, EditorReducer, intent);
        self.request_redraw();
    }

    pub fn open_editor(&mut self) {
        let Some(user) = self.selected_user().cloned() else {
            return;
        };
        self.dispatch_editor(EditorIntent::Open { user });
    }

    /// Commit the draft to the store and close the modal.
    pub fn save_editor(&mut self) {
        let Some(draft) = self.editor.draft().cloned() else {
            return;
        };
        self.dispatch(UserAction::edit(draft));
        self.dispatch_editor(EditorIntent::Close);
    }

    /// Discard the draft.
    pub fn close_editor(&mut self) {
        self.dispatch_editor(EditorIntent::Close);
    }
}
