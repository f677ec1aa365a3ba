/// Application model following TEA pattern
///
/// Holds everything the views render. Only [`crate::tea::update`] mutates it.
use crate::api::{Quote, DEFAULT_HISTORY_LIMIT};
use crate::theme::Theme;
use crate::ui::toast::ToastManager;

/// Which of the three main regions is visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState {
    Loading,
    Content,
    Error(String),
}

/// History overlay state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HistoryModal {
    #[default]
    Hidden,
    Open { quotes: Vec<Quote>, scroll: u16 },
}

impl HistoryModal {
    pub fn is_open(&self) -> bool {
        matches!(self, HistoryModal::Open { .. })
    }
}

/// Ids of the latest issued requests; older responses are stale
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    today: u64,
    history: u64,
}

impl RequestTracker {
    pub fn next_today(&mut self) -> u64 {
        self.today += 1;
        self.today
    }

    pub fn next_history(&mut self) -> u64 {
        self.history += 1;
        self.history
    }

    pub fn is_latest_today(&self, request_id: u64) -> bool {
        request_id == self.today
    }

    pub fn is_latest_history(&self, request_id: u64) -> bool {
        request_id == self.history
    }
}

/// Main application model containing all state
#[derive(Debug, Clone)]
pub struct Model {
    /// Visible main region
    pub ui_state: UiState,

    /// Last successfully loaded quote; kept while an error is shown
    current_quote: Option<Quote>,

    /// History overlay
    pub history: HistoryModal,

    /// Whether the key binding overlay is shown
    pub show_help: bool,

    /// Active toasts
    pub toasts: ToastManager,

    /// Number of quotes requested for the history view
    pub history_limit: u32,

    /// Terminal dimensions
    pub terminal_size: (u16, u16),

    pub requests: RequestTracker,

    pub theme: Theme,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl Model {
    pub fn new(history_limit: u32, theme: Theme) -> Self {
        Self {
            ui_state: UiState::Loading,
            current_quote: None,
            history: HistoryModal::Hidden,
            show_help: false,
            toasts: ToastManager::new(),
            history_limit,
            terminal_size: (0, 0),
            requests: RequestTracker::default(),
            theme,
            should_quit: false,
        }
    }

    pub fn current_quote(&self) -> Option<&Quote> {
        self.current_quote.as_ref()
    }

    pub fn set_current_quote(&mut self, quote: Quote) {
        self.current_quote = Some(quote);
    }

    /// The quote shown in the content region, if that region is visible
    pub fn displayed_quote(&self) -> Option<&Quote> {
        match self.ui_state {
            UiState::Content => self.current_quote.as_ref(),
            _ => None,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT, Theme::default())
    }
}
