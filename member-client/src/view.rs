//! View capability
//!
//! The controller never touches a screen directly. It reports through
//! [`MemberView`], so the same handlers drive the terminal front end and
//! the tests.

use tokio::sync::mpsc;

use crate::card::DetailCard;

/// Dialog flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// Dialog title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Éxito",
            Self::Error => "Error",
        }
    }
}

/// Page side effects the controller may request.
///
/// Handlers run concurrently, so implementations take `&self`.
pub trait MemberView: Send + Sync {
    /// Show a detail card, replacing any card already shown.
    fn render_detail(&self, card: DetailCard);

    /// Reset the create form: text fields empty, activo unchecked.
    fn clear_form(&self);

    /// Show a modal dialog.
    fn show_message(&self, kind: MessageKind, text: &str);
}

/// One view side effect, as data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Detail(DetailCard),
    ClearForm,
    Message { kind: MessageKind, text: String },
}

/// View that forwards every side effect over a channel.
///
/// The receiving end (a UI loop, a test) applies them in arrival order.
#[derive(Debug, Clone)]
pub struct ChannelView {
    tx: mpsc::UnboundedSender<ViewEvent>,
}

impl ChannelView {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ViewEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, event: ViewEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!("view receiver dropped, event discarded");
        }
    }
}

impl MemberView for ChannelView {
    fn render_detail(&self, card: DetailCard) {
        self.send(ViewEvent::Detail(card));
    }

    fn clear_form(&self) {
        self.send(ViewEvent::ClearForm);
    }

    fn show_message(&self, kind: MessageKind, text: &str) {
        self.send(ViewEvent::Message {
            kind,
            text: text.to_string(),
        });
    }
}
