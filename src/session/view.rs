//! View-State Renderer
//!
//! Pure mapping from the three view flags to the pair of on-screen
//! controls. Mirrors the source page's two button renderers: an action
//! button next to the input and a reader button above the mood line, four
//! variants each.

/// Button variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    ConnectWallet,
    Submit,
    Spinner,
    Sent,
    ReadMood,
    SendOther,
}

impl Control {
    pub fn label(self) -> &'static str {
        match self {
            Control::ConnectWallet => "Connect wallet",
            Control::Submit => "Send dream",
            Control::Spinner => "...",
            Control::Sent => "Sent",
            Control::ReadMood => "Read Dreams",
            Control::SendOther => "Send other",
        }
    }
}

/// The two controls derived from the current flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSet {
    /// Button next to the input box
    pub action: Control,
    /// Button above the mood line
    pub reader: Control,
}

/// Pure function of {wallet_connected, loading, mood_sent}.
pub fn controls(wallet_connected: bool, loading: bool, mood_sent: bool) -> ControlSet {
    if !wallet_connected {
        return ControlSet {
            action: Control::ConnectWallet,
            reader: Control::ConnectWallet,
        };
    }
    if mood_sent {
        return ControlSet {
            action: Control::Sent,
            reader: Control::SendOther,
        };
    }
    if loading {
        return ControlSet {
            action: Control::Spinner,
            reader: Control::Spinner,
        };
    }
    ControlSet {
        action: Control::Submit,
        reader: Control::ReadMood,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnected_shows_connect_only() {
        let set = controls(false, false, false);
        assert_eq!(set.action, Control::ConnectWallet);
        assert_eq!(set.reader, Control::ConnectWallet);

        // Disconnected wins over any stale flags.
        let set = controls(false, true, true);
        assert_eq!(set.action, Control::ConnectWallet);
    }

    #[test]
    fn test_connected_idle() {
        let set = controls(true, false, false);
        assert_eq!(set.action, Control::Submit);
        assert_eq!(set.reader, Control::ReadMood);
    }

    #[test]
    fn test_loading_shows_spinners() {
        let set = controls(true, true, false);
        assert_eq!(set.action, Control::Spinner);
        assert_eq!(set.reader, Control::Spinner);
    }

    #[test]
    fn test_submitted_shows_sent_and_send_other() {
        let set = controls(true, false, true);
        assert_eq!(set.action, Control::Sent);
        assert_eq!(set.reader, Control::SendOther);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Control::ReadMood.label(), "Read Dreams");
        assert_eq!(Control::SendOther.label(), "Send other");
    }
}
