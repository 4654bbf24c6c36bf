use crate::mvi::Reducer;
use crate::store::action::UserAction;
use crate::store::state::AppState;

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = AppState;
    type Action = UserAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            UserAction::FetchRequest => AppState {
                loading: true,
                ..state
            },
            UserAction::FetchSuccess(users) => AppState {
                users,
                loading: false,
                error: String::new(),
            },
            // A failed fetch discards whatever was loaded before.
            UserAction::FetchFailure(message) => AppState {
                users: Vec::new(),
                loading: false,
                error: message,
            },
            UserAction::Add(user) => {
                let mut users = state.users;
                users.push(user);
                AppState { users, ..state }
            }
            UserAction::Delete(id) => {
                let mut users = state.users;
                users.retain(|user| user.id != id);
                AppState { users, ..state }
            }
            UserAction::Edit(edited) => {
                let mut users = state.users;
                for user in users.iter_mut().filter(|user| user.id == edited.id) {
                    *user = edited.clone();
                }
                AppState { users, ..state }
            }
            UserAction::Unrecognized(_) => state,
        }
    }
}
