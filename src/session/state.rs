//! Session state
//!
//! The three view flags ({wallet_connected, loading, mood_sent}), the owned
//! input buffer, the cached mood text and the transition methods the event
//! loop drives. Transitions are applied in message-arrival order; when a
//! read races a write the last resolution wins.
//!
//! `loading` covers the whole submit flow (broadcast, confirmation and the
//! chained read-back) and is reset on every exit path, so it can never be
//! left stuck after a failure.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Causes that raise the blocking alert modal. Everything else surfaces
/// through the status line and the diagnostic log only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    WrongNetwork { expected: u64, actual: u64 },
    EmptyInput,
}

impl Alert {
    pub fn message(&self) -> String {
        match self {
            Alert::WrongNetwork { expected, actual } => format!(
                "Change the network: connected to chain {actual}, expected chain {expected}"
            ),
            Alert::EmptyInput => "Please type your dream".to_string(),
        }
    }
}

/// Derived view phase. A successful submission walks these in order with
/// nothing skipped: Disconnected -> ConnectedIdle -> Loading -> Submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Disconnected,
    ConnectedIdle,
    Loading,
    Submitted,
}

/// Rocket art state: shaking while the transaction is pending, taking off
/// once it is mined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RocketState {
    #[default]
    Idle,
    Shake,
    Takeoff,
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please type your dream")]
    EmptyInput,
}

/// Validate dream text: non-empty after trimming.
pub fn validate_input(text: &str) -> Result<String, SessionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(SessionError::EmptyInput)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Per-page session state. Created once at startup, lives for the process.
#[derive(Debug, Default)]
pub struct Session {
    /// Whether a validated wallet handle exists
    pub wallet_connected: bool,
    /// Whether a submission is in flight (broadcast through read-back)
    pub loading: bool,
    /// Set only after a successful read-back following a mined write
    pub mood_sent: bool,
    /// Cached copy of the contract's stored dream; possibly stale
    pub mood: Option<String>,
    /// Owned input buffer (no environment lookups at submit time)
    pub input: String,
    /// Active blocking alert, if any
    pub alert: Option<Alert>,
    /// Non-blocking status line
    pub status: Option<String>,
    /// When the mood was last read back successfully
    pub last_refreshed: Option<DateTime<Utc>>,
    pub rocket: RocketState,
    awaiting_readback: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if !self.wallet_connected {
            Phase::Disconnected
        } else if self.loading {
            Phase::Loading
        } else if self.mood_sent {
            Phase::Submitted
        } else {
            Phase::ConnectedIdle
        }
    }

    /// Whether keystrokes should land in the input buffer
    pub fn input_enabled(&self) -> bool {
        self.wallet_connected && !self.loading && !self.mood_sent && self.alert.is_none()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn raise_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Wallet handle established and network-guarded
    pub fn connected(&mut self) {
        self.wallet_connected = true;
    }

    /// Validate the owned input and enter the loading state.
    ///
    /// Empty or whitespace-only input raises the blocking alert and leaves
    /// every flag untouched; the alert is the only observable effect.
    pub fn begin_submit(&mut self) -> Result<String, SessionError> {
        let text = match validate_input(&self.input) {
            Ok(text) => text,
            Err(err) => {
                self.raise_alert(Alert::EmptyInput);
                return Err(err);
            }
        };

        self.loading = true;
        self.rocket = RocketState::Shake;
        Ok(text)
    }

    /// Transaction mined; the chained read-back is now expected.
    pub fn write_confirmed(&mut self) {
        self.rocket = RocketState::Takeoff;
        self.awaiting_readback = true;
    }

    /// Write failed anywhere between broadcast and confirmation.
    pub fn write_failed(&mut self) {
        self.loading = false;
        self.awaiting_readback = false;
        self.rocket = RocketState::Idle;
    }

    /// A read resolved. Completes the submission when one was pending.
    pub fn mood_loaded(&mut self, text: String) {
        self.mood = Some(text);
        self.last_refreshed = Some(Utc::now());
        if self.awaiting_readback {
            self.awaiting_readback = false;
            self.loading = false;
            self.mood_sent = true;
        }
    }

    /// A read failed. View state stays as it was (stale read on failure);
    /// a pending read-back is abandoned without marking the mood sent.
    pub fn read_failed(&mut self) {
        if self.awaiting_readback {
            self.awaiting_readback = false;
            self.loading = false;
            self.rocket = RocketState::Idle;
        }
    }

    /// "Send other": clear the displayed mood and the input, re-enable entry.
    pub fn send_other(&mut self) {
        self.input.clear();
        self.mood = None;
        self.mood_sent = false;
        self.rocket = RocketState::Idle;
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }
}
