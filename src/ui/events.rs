use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::cancel::CancelToken;
use crate::store::UserAction;

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Action produced off the UI thread (fetch completion). Reduced by the
    /// event loop so the store is only ever touched from one thread.
    Dispatch(UserAction),
    /// The input thread hit a terminal error and stopped. No more keys will
    /// arrive, so the loop must exit.
    InputClosed,
}

impl From<UserAction> for AppEvent {
    fn from(action: UserAction) -> Self {
        AppEvent::Dispatch(action)
    }
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the input thread. It exits once `session` is cancelled, the
    /// receiver is dropped, or the terminal fails.
    pub fn new(tick_rate: Duration, session: CancelToken) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            pump_input(tick_rate, &session, &event_tx, event::poll, event::read);
            tracing::debug!("input thread stopped");
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Input loop body. Terminal errors are reported as `InputClosed` before
/// returning.
fn pump_input<P, R>(
    tick_rate: Duration,
    session: &CancelToken,
    tx: &Sender<AppEvent>,
    mut poll: P,
    mut read: R,
) where
    P: FnMut(Duration) -> io::Result<bool>,
    R: FnMut() -> io::Result<Event>,
{
    let mut last_tick = Instant::now();
    loop {
        if session.is_cancelled() {
            return;
        }

        // Short poll so cancellation is noticed promptly.
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        let sent = match poll(timeout) {
            Ok(true) => match read() {
                Ok(Event::Key(key)) => tx.send(AppEvent::Input(key)),
                Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                Ok(_) => Ok(()),
                Err(err) => {
                    tracing::error!(error = %err, "terminal read failed");
                    // receiver may already be gone
                    let _ = tx.send(AppEvent::InputClosed);
                    return;
                }
            },
            Ok(false) => Ok(()),
            Err(err) => {
                tracing::error!(error = %err, "terminal poll failed");
                let _ = tx.send(AppEvent::InputClosed);
                return;
            }
        };
        if sent.is_err() {
            return;
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
