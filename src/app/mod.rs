//! Terminal application
//!
//! Owns the session state, the wallet connector and a tokio runtime.
//! Blockchain work runs on background tasks that resolve to [`Message`]
//! values; the event loop drains them every tick and applies them to the
//! session in arrival order (last write wins). Rendering is never blocked
//! by an in-flight call, and a broadcast transaction cannot be aborted.

mod ui;

use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::contract::{self, ContractError, MinedMood};
use crate::session::{Alert, Phase, Session};
use crate::wallet::{self, chain_name, WalletConnector, WalletError, WalletHandle};
use alloy::primitives::Address;

/// Results of background blockchain tasks
pub enum Message {
    Connected(WalletHandle),
    ConnectFailed(WalletError),
    MoodLoaded(String),
    ReadFailed(ContractError),
    WriteConfirmed(MinedMood),
    WriteFailed(ContractError),
}

/// Central application type that orchestrates state and drives the UI.
pub struct App {
    running: bool,
    session: Session,
    connector: WalletConnector,
    contract_address: Address,
    runtime: Runtime,
    message_tx: mpsc::Sender<Message>,
    message_rx: mpsc::Receiver<Message>,
}

impl App {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let contract_address = contract::parse_address(&config.contract.address)?;
        let connector = WalletConnector::new(config.wallet_config());
        let runtime = Runtime::new()?;
        let (message_tx, message_rx) = mpsc::channel();

        Ok(Self {
            running: false,
            session: Session::new(),
            connector,
            contract_address,
            runtime,
            message_tx,
            message_rx,
        })
    }

    /// Run the event loop until quit. Connecting the wallet (and the
    /// initial read it chains) starts here, explicitly, once.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> anyhow::Result<()> {
        self.running = true;
        self.start_connect();

        while self.running {
            self.tick();
            terminal.draw(|frame| ui::render(frame, &self.session))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn tick(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    fn handle_events(&mut self) -> anyhow::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Paste(content) => self.on_paste_event(content),
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_message(&mut self, message: Message) {
        match message {
            Message::Connected(handle) => {
                let chain = chain_name(handle.chain_id());
                self.connector.adopt(handle);
                self.session.connected();
                self.session.set_status(format!("Wallet connected ({chain})"));
                // Connecting chains straight into the first read.
                self.start_read();
            }
            Message::ConnectFailed(err) => {
                tracing::error!(error = %err, "Wallet connection failed");
                match err {
                    WalletError::WrongNetwork { expected, actual } => {
                        self.session.raise_alert(Alert::WrongNetwork { expected, actual });
                    }
                    other => {
                        self.session
                            .set_status(format!("Wallet connection failed: {other}"));
                    }
                }
            }
            Message::MoodLoaded(text) => {
                let was_submitting = self.session.loading;
                self.session.mood_loaded(text);
                if was_submitting && self.session.mood_sent {
                    self.session.set_status("Dream sent and read back from chain");
                } else {
                    self.session.set_status("Dreams refreshed");
                }
            }
            Message::ReadFailed(err) => {
                tracing::error!(error = %err, "Mood read failed");
                self.session.read_failed();
                self.session.set_status(format!("Could not read dreams: {err}"));
            }
            Message::WriteConfirmed(mined) => {
                self.session.write_confirmed();
                let block = mined
                    .block_number
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "?".to_string());
                self.session
                    .set_status(format!("Mined in block {block}, reading back..."));
                self.start_read();
            }
            Message::WriteFailed(err) => {
                tracing::error!(error = %err, "Mood write failed");
                self.session.write_failed();
                self.session.set_status(format!("Transaction failed: {err}"));
            }
        }
    }

    fn on_key_event(&mut self, key: KeyEvent) {
        // An active alert is blocking: nothing but dismissal (or quit).
        if self.session.alert.is_some() {
            match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                    self.session.dismiss_alert()
                }
                KeyCode::Char('c') | KeyCode::Char('C')
                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    self.running = false;
                }
                _ => {}
            }
            return;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C'))
            | (_, KeyCode::Esc) => {
                self.running = false;
            }
            (KeyModifiers::CONTROL, KeyCode::Char('r') | KeyCode::Char('R')) => {
                // Reads may be re-triggered at any time, even mid-write;
                // whichever resolution lands last wins.
                if self.session.wallet_connected {
                    self.start_read();
                } else {
                    self.start_connect();
                }
            }
            (_, KeyCode::Enter) => match self.session.phase() {
                Phase::Disconnected => self.start_connect(),
                Phase::ConnectedIdle => self.start_submit(),
                Phase::Submitted => self.send_other(),
                Phase::Loading => {}
            },
            (_, KeyCode::Char('o') | KeyCode::Char('O')) if self.session.mood_sent => {
                self.send_other();
            }
            (_, KeyCode::Char('c') | KeyCode::Char('C'))
                if !self.session.wallet_connected =>
            {
                self.start_connect();
            }
            (_, KeyCode::Backspace) if self.session.input_enabled() => {
                self.session.backspace();
            }
            (modifiers, KeyCode::Char(c))
                if self.session.input_enabled() && !modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.session.push_char(c);
            }
            _ => {}
        }
    }

    fn on_paste_event(&mut self, content: String) {
        if !self.session.input_enabled() {
            return;
        }
        for c in content.chars() {
            if matches!(c, '\r' | '\n') {
                continue;
            }
            self.session.push_char(c);
        }
    }

    /// Acquire the wallet handle on a background task. Reuses the cached
    /// handle when one exists; the guard only runs on fresh acquisitions.
    fn start_connect(&mut self) {
        if self.connector.is_connected() {
            return;
        }
        self.session.set_status("Connecting wallet...");
        let config = self.connector.config().clone();
        self.spawn_task(move || async move {
            match wallet::establish(config).await {
                Ok(handle) => Message::Connected(handle),
                Err(err) => Message::ConnectFailed(err),
            }
        });
    }

    fn start_read(&mut self) {
        let Some(handle) = self.connector.handle().cloned() else {
            self.start_connect();
            return;
        };
        self.session.set_status("Reading dreams...");
        let address = self.contract_address;
        self.spawn_task(move || async move {
            match contract::read_mood(&handle, address).await {
                Ok(mood) => Message::MoodLoaded(mood),
                Err(err) => Message::ReadFailed(err),
            }
        });
    }

    fn start_submit(&mut self) {
        let Some(handle) = self.connector.handle().cloned() else {
            self.start_connect();
            return;
        };
        let text = match self.session.begin_submit() {
            Ok(text) => text,
            // Alert already raised; the blocked submit is the only effect.
            Err(_) => return,
        };
        self.session.set_status("Sending your dream to the moon...");
        let address = self.contract_address;
        self.spawn_task(move || async move {
            match contract::write_mood(&handle, address, &text).await {
                Ok(mined) => Message::WriteConfirmed(mined),
                Err(err) => Message::WriteFailed(err),
            }
        });
    }

    fn send_other(&mut self) {
        self.session.send_other();
        self.session.set_status("Type a new dream");
    }

    fn spawn_task<F, Fut>(&self, task: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Message> + Send + 'static,
    {
        let sender = self.message_tx.clone();
        self.runtime.handle().spawn(async move {
            let message = task().await;
            let _ = sender.send(message);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::RocketState;
    use alloy::primitives::TxHash;

    fn test_app() -> App {
        App::new(Config::default()).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn connect(app: &mut App) {
        app.handle_message(Message::Connected(WalletHandle::test_handle(
            wallet::SEPOLIA_CHAIN_ID,
        )));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.on_key_event(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_connect_adopts_handle_and_triggers_read() {
        let mut app = test_app();
        assert_eq!(app.session.phase(), Phase::Disconnected);

        connect(&mut app);
        assert!(app.session.wallet_connected);
        assert!(app.connector.is_connected());
        // The chained read is already in flight.
        assert_eq!(app.session.status.as_deref(), Some("Reading dreams..."));
    }

    #[test]
    fn test_wrong_network_raises_blocking_alert() {
        let mut app = test_app();
        app.handle_message(Message::ConnectFailed(WalletError::WrongNetwork {
            expected: wallet::SEPOLIA_CHAIN_ID,
            actual: 1,
        }));

        assert!(!app.session.wallet_connected);
        assert!(matches!(
            app.session.alert,
            Some(Alert::WrongNetwork { actual: 1, .. })
        ));

        // Keystrokes are swallowed until the alert is dismissed.
        app.on_key_event(key(KeyCode::Char('x')));
        assert!(app.session.input.is_empty());
        app.on_key_event(key(KeyCode::Enter));
        assert!(app.session.alert.is_none());
    }

    #[test]
    fn test_other_connect_failures_stay_non_blocking() {
        let mut app = test_app();
        app.handle_message(Message::ConnectFailed(WalletError::MissingKey));
        assert!(app.session.alert.is_none());
        assert!(app
            .session
            .status
            .as_deref()
            .unwrap()
            .contains("Wallet connection failed"));
    }

    #[test]
    fn test_full_submission_flow() {
        let mut app = test_app();
        connect(&mut app);

        type_text(&mut app, "fly to mars");
        assert_eq!(app.session.input, "fly to mars");

        app.on_key_event(key(KeyCode::Enter));
        assert_eq!(app.session.phase(), Phase::Loading);
        assert_eq!(app.session.rocket, RocketState::Shake);

        // Typing while the transaction is pending is ignored.
        app.on_key_event(key(KeyCode::Char('z')));
        assert_eq!(app.session.input, "fly to mars");

        app.handle_message(Message::WriteConfirmed(MinedMood {
            tx_hash: TxHash::ZERO,
            block_number: Some(42),
        }));
        assert_eq!(app.session.phase(), Phase::Loading);
        assert_eq!(app.session.rocket, RocketState::Takeoff);

        app.handle_message(Message::MoodLoaded("fly to mars".to_string()));
        assert_eq!(app.session.phase(), Phase::Submitted);
        assert_eq!(app.session.mood.as_deref(), Some("fly to mars"));
        assert!(app.session.mood_sent);
    }

    #[test]
    fn test_empty_submission_alerts_only() {
        let mut app = test_app();
        connect(&mut app);

        app.on_key_event(key(KeyCode::Enter));
        assert_eq!(app.session.alert, Some(Alert::EmptyInput));
        assert!(!app.session.loading);
        assert_eq!(app.session.phase(), Phase::ConnectedIdle);
    }

    #[test]
    fn test_write_failure_recovers_the_ui() {
        let mut app = test_app();
        connect(&mut app);
        type_text(&mut app, "x");
        app.on_key_event(key(KeyCode::Enter));
        assert!(app.session.loading);

        app.handle_message(Message::WriteFailed(ContractError::Transaction(
            "nonce too low".to_string(),
        )));
        assert!(!app.session.loading);
        assert_eq!(app.session.phase(), Phase::ConnectedIdle);
        assert!(app
            .session
            .status
            .as_deref()
            .unwrap()
            .contains("Transaction failed"));
    }

    #[test]
    fn test_send_other_reopens_input() {
        let mut app = test_app();
        connect(&mut app);
        type_text(&mut app, "fly to mars");
        app.on_key_event(key(KeyCode::Enter));
        app.handle_message(Message::WriteConfirmed(MinedMood {
            tx_hash: TxHash::ZERO,
            block_number: None,
        }));
        app.handle_message(Message::MoodLoaded("fly to mars".to_string()));
        assert_eq!(app.session.phase(), Phase::Submitted);

        app.on_key_event(key(KeyCode::Char('o')));
        assert_eq!(app.session.phase(), Phase::ConnectedIdle);
        assert!(app.session.input.is_empty());
        assert!(app.session.mood.is_none());

        type_text(&mut app, "new dream");
        assert_eq!(app.session.input, "new dream");
    }

    #[test]
    fn test_read_failure_leaves_stale_mood() {
        let mut app = test_app();
        connect(&mut app);
        app.handle_message(Message::MoodLoaded("old dream".to_string()));

        app.handle_message(Message::ReadFailed(ContractError::Rpc(
            "gateway down".to_string(),
        )));
        assert_eq!(app.session.mood.as_deref(), Some("old dream"));
        assert_eq!(app.session.phase(), Phase::ConnectedIdle);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        app.running = true;
        app.on_key_event(key(KeyCode::Esc));
        assert!(!app.running);

        let mut app = test_app();
        app.running = true;
        app.on_key_event(ctrl('c'));
        assert!(!app.running);
    }

    #[test]
    fn test_paste_goes_into_the_owned_buffer() {
        let mut app = test_app();
        connect(&mut app);
        app.on_paste_event("build a\r\nlighthouse".to_string());
        assert_eq!(app.session.input, "build alighthouse");
    }
}
