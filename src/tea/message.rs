/// Central message type for the quote client
///
/// User input, timer ticks and API results all flow through here.
use crate::api::{ApiResult, Quote};
use crate::keyboard::UserAction;

/// Main application message type
#[derive(Debug, Clone)]
pub enum Message {
    /// System-level messages
    System(SystemMessage),

    /// UI interaction messages
    UI(UIMessage),

    /// Quote loading and history messages
    Quote(QuoteMessage),
}

/// System-level messages for application lifecycle
#[derive(Debug, Clone)]
pub enum SystemMessage {
    /// Application should quit
    Quit,

    /// Terminal was resized
    Resize(u16, u16),

    /// Periodic tick, drives toast fading
    Tick,
}

/// UI-related messages
#[derive(Debug, Clone)]
pub enum UIMessage {
    /// A bound user action was triggered
    Action(UserAction),

    /// Left mouse button pressed at a terminal cell
    Click { column: u16, row: u16 },

    /// Show a toast notification
    ShowToast(String),
}

/// Quote-specific messages
#[derive(Debug, Clone)]
pub enum QuoteMessage {
    /// Start loading today's quote
    LoadToday,

    /// Today's quote request finished
    TodayLoaded {
        request_id: u64,
        result: ApiResult<Quote>,
    },

    /// Fetch recent quotes and open the history view
    ShowHistory,

    /// Recent quotes request finished
    HistoryLoaded {
        request_id: u64,
        result: ApiResult<Vec<Quote>>,
    },

    /// Close the history view
    HideHistory,

    /// Copy the current quote to the clipboard
    Copy,
}

impl From<SystemMessage> for Message {
    fn from(message: SystemMessage) -> Self {
        Message::System(message)
    }
}

impl From<UIMessage> for Message {
    fn from(message: UIMessage) -> Self {
        Message::UI(message)
    }
}

impl From<QuoteMessage> for Message {
    fn from(message: QuoteMessage) -> Self {
        Message::Quote(message)
    }
}
