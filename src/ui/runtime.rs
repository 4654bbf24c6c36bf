use crate::api::{fetch_users, UsersClient};
use crate::cancel::CancelToken;
use crate::config::Config;
use crate::store::{QueuedDispatcher, UserAction, UsersStore};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let client = UsersClient::from_config(&config.api).context("building HTTP client")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("starting async runtime")?;

    let session = CancelToken::new();
    // Whatever path leaves this function, background work stops.
    let _cancel_on_exit = scopeguard::guard(session.clone(), |token| token.cancel());

    let (mut terminal, guard) = setup_terminal().context("initializing terminal")?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate, session.clone());
    let mut app = App::new(UsersStore::default(), session.clone());

    if let Some(cancel) = app.begin_fetch() {
        let mut dispatcher = QueuedDispatcher::<UserAction, AppEvent>::new(events.sender());
        runtime.spawn(async move {
            fetch_users(&client, &mut dispatcher, &cancel).await;
        });
    }

    loop {
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => apply_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    session.cancel();
    if app.detach() {
        tracing::debug!("view detached from store");
    }
    runtime.shutdown_timeout(Duration::from_millis(500));
    drop(guard);
    Ok(())
}

fn apply_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Input(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize(cols, rows) => {
            tracing::debug!(cols, rows, "terminal resized");
            app.request_redraw();
        }
        AppEvent::Dispatch(action) => app.dispatch(action),
        AppEvent::InputClosed => {
            tracing::warn!("terminal input closed, shutting down");
            app.request_quit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app(session: &CancelToken) -> App {
        App::new(UsersStore::default(), session.clone())
    }

    #[test]
    fn input_closed_quits_and_cancels_fetch() {
        let session = CancelToken::new();
        let mut app = make_app(&session);
        apply_event(&mut app, AppEvent::InputClosed);
        assert!(app.should_quit());
        assert!(session.is_cancelled());
    }

    #[test]
    fn queued_actions_reach_the_store() {
        let session = CancelToken::new();
        let mut app = make_app(&session);
        apply_event(&mut app, AppEvent::Dispatch(UserAction::FetchRequest));
        assert!(app.state().loading);
        assert!(!app.should_quit());
    }
}
