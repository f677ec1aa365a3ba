/// Update function for TEA pattern
///
/// Central update function that handles all messages and updates the model accordingly.
use crate::keyboard::UserAction;
use crate::tea::command::{NetworkCommand, SystemCommand};
use crate::tea::message::{QuoteMessage, SystemMessage, UIMessage};
use crate::tea::model::{HistoryModal, UiState};
use crate::tea::{Command, Message, Model, UpdateResult};
use crate::ui::history;
use ratatui::layout::Rect;
use tokio::time::Instant;

/// Toast after a successful copy
pub const COPIED_MESSAGE: &str = "语录已复制";

/// Toast when the service refused the history request
pub const HISTORY_FAILED_MESSAGE: &str = "获取历史语录失败";

/// Toast when the history request never got a readable answer
pub const HISTORY_NETWORK_FAILED_MESSAGE: &str = "网络连接失败";

/// Main update function that processes messages and returns updated model with commands
pub fn update(model: Model, message: Message) -> UpdateResult<Model> {
    match message {
        Message::System(msg) => update_system(model, msg),
        Message::UI(msg) => update_ui(model, msg),
        Message::Quote(msg) => update_quote(model, msg),
    }
}

/// Handle system messages
fn update_system(mut model: Model, message: SystemMessage) -> UpdateResult<Model> {
    match message {
        SystemMessage::Quit => {
            model.should_quit = true;
            UpdateResult::just_model(model)
        }

        SystemMessage::Resize(width, height) => {
            model.terminal_size = (width, height);
            UpdateResult::just_model(model)
        }

        SystemMessage::Tick => {
            model.toasts.update(Instant::now());
            UpdateResult::just_model(model)
        }
    }
}

/// Handle UI messages
fn update_ui(mut model: Model, message: UIMessage) -> UpdateResult<Model> {
    match message {
        UIMessage::Action(action) => update_action(model, action),

        UIMessage::Click { column, row } => {
            if !model.history.is_open() {
                return UpdateResult::just_model(model);
            }

            let (width, height) = model.terminal_size;
            let modal = history::modal_area(Rect::new(0, 0, width, height));
            if contains(modal, column, row) {
                UpdateResult::just_model(model)
            } else {
                // Click on the backdrop
                update_quote(model, QuoteMessage::HideHistory)
            }
        }

        UIMessage::ShowToast(text) => {
            model.toasts.show(text);
            UpdateResult::just_model(model)
        }
    }
}

/// Translate a bound user action
fn update_action(mut model: Model, action: UserAction) -> UpdateResult<Model> {
    let modal_open = model.history.is_open();

    match action {
        UserAction::Quit => update_system(model, SystemMessage::Quit),

        UserAction::ToggleHelp => {
            model.show_help = !model.show_help;
            UpdateResult::just_model(model)
        }

        UserAction::HideHistory => {
            if model.show_help {
                model.show_help = false;
                return UpdateResult::just_model(model);
            }
            update_quote(model, QuoteMessage::HideHistory)
        }

        UserAction::ScrollUp | UserAction::ScrollDown => {
            if let HistoryModal::Open { scroll, .. } = &mut model.history {
                *scroll = if action == UserAction::ScrollUp {
                    scroll.saturating_sub(1)
                } else {
                    scroll.saturating_add(1)
                };
            }
            UpdateResult::just_model(model)
        }

        // The history overlay covers the quote view
        UserAction::Retry | UserAction::Copy | UserAction::ShowHistory if modal_open => {
            UpdateResult::just_model(model)
        }

        UserAction::Retry => update_quote(model, QuoteMessage::LoadToday),
        UserAction::Copy => update_quote(model, QuoteMessage::Copy),
        UserAction::ShowHistory => update_quote(model, QuoteMessage::ShowHistory),
    }
}

/// Handle quote messages
fn update_quote(mut model: Model, message: QuoteMessage) -> UpdateResult<Model> {
    match message {
        QuoteMessage::LoadToday => {
            let request_id = model.requests.next_today();
            model.ui_state = UiState::Loading;

            UpdateResult::with_command(
                model,
                Command::network(NetworkCommand::FetchTodayQuote { request_id }),
            )
        }

        QuoteMessage::TodayLoaded { request_id, result } => {
            if !model.requests.is_latest_today(request_id) {
                tracing::debug!("Dropping stale today's quote response #{}", request_id);
                return UpdateResult::just_model(model);
            }

            match result {
                Ok(quote) => {
                    tracing::info!("Loaded quote for {}", quote.date);
                    model.set_current_quote(quote);
                    model.ui_state = UiState::Content;
                }
                Err(e) => {
                    tracing::warn!("Failed to load today's quote: {:?}", e);
                    model.ui_state = UiState::Error(e.to_string());
                }
            }
            UpdateResult::just_model(model)
        }

        QuoteMessage::ShowHistory => {
            if model.history.is_open() {
                return UpdateResult::just_model(model);
            }

            let request_id = model.requests.next_history();
            let limit = model.history_limit;
            UpdateResult::with_command(
                model,
                Command::network(NetworkCommand::FetchRecentQuotes { request_id, limit }),
            )
        }

        QuoteMessage::HistoryLoaded { request_id, result } => {
            if !model.requests.is_latest_history(request_id) {
                tracing::debug!("Dropping stale history response #{}", request_id);
                return UpdateResult::just_model(model);
            }

            match result {
                Ok(quotes) => {
                    tracing::debug!("Opening history with {} quotes", quotes.len());
                    model.history = HistoryModal::Open { quotes, scroll: 0 };
                }
                Err(e) => {
                    tracing::warn!("Failed to load recent quotes: {:?}", e);
                    let text = if e.is_transport() {
                        HISTORY_NETWORK_FAILED_MESSAGE
                    } else {
                        HISTORY_FAILED_MESSAGE
                    };
                    model.toasts.show(text);
                }
            }
            UpdateResult::just_model(model)
        }

        QuoteMessage::HideHistory => {
            model.history = HistoryModal::Hidden;
            UpdateResult::just_model(model)
        }

        QuoteMessage::Copy => {
            let Some(text) = model.current_quote().map(|quote| quote.clipboard_text()) else {
                return UpdateResult::just_model(model);
            };

            model.toasts.show(COPIED_MESSAGE);
            UpdateResult::with_command(model, Command::system(SystemCommand::CopyToClipboard(text)))
        }
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
