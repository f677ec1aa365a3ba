mod common;

use common::socrates;
use daily_quote::api::error::NETWORK_FAILURE_MESSAGE;
use daily_quote::api::{ApiError, Quote};
use daily_quote::keyboard::UserAction;
use daily_quote::tea::update::{COPIED_MESSAGE, HISTORY_FAILED_MESSAGE, HISTORY_NETWORK_FAILED_MESSAGE};
use daily_quote::tea::{
    update, Command, HistoryModal, Message, Model, NetworkCommand, QuoteMessage, SystemCommand,
    SystemMessage, UIMessage, UiState,
};

fn action(model: Model, action: UserAction) -> daily_quote::tea::UpdateResult<Model> {
    update(model, action.message())
}

fn today_loaded(request_id: u64, result: Result<Quote, ApiError>) -> Message {
    QuoteMessage::TodayLoaded { request_id, result }.into()
}

fn history_loaded(request_id: u64, result: Result<Vec<Quote>, ApiError>) -> Message {
    QuoteMessage::HistoryLoaded { request_id, result }.into()
}

/// Model with today's quote loaded through the normal message flow
fn loaded_model() -> Model {
    let result = update(Model::default(), QuoteMessage::LoadToday.into());
    update(result.model, today_loaded(1, Ok(socrates()))).model
}

#[test]
fn test_load_today_sets_loading_and_requests_quote() {
    let result = update(Model::default(), QuoteMessage::LoadToday.into());

    assert_eq!(result.model.ui_state, UiState::Loading);
    assert!(matches!(
        result.commands.as_slice(),
        [Command::Network(NetworkCommand::FetchTodayQuote { request_id: 1 })]
    ));
}

#[test]
fn test_successful_load_shows_content() {
    let model = loaded_model();

    assert_eq!(model.ui_state, UiState::Content);
    assert_eq!(model.displayed_quote(), Some(&socrates()));
    assert_eq!(model.current_quote(), Some(&socrates()));
}

#[test]
fn test_application_failure_shows_message_verbatim() {
    let result = update(Model::default(), QuoteMessage::LoadToday.into());
    let result = update(
        result.model,
        today_loaded(1, Err(ApiError::Application("X".to_string()))),
    );

    assert_eq!(result.model.ui_state, UiState::Error("X".to_string()));
    assert!(result.model.displayed_quote().is_none());
}

#[test]
fn test_transport_failure_shows_generic_message() {
    let result = update(Model::default(), QuoteMessage::LoadToday.into());
    let result = update(
        result.model,
        today_loaded(1, Err(ApiError::network("connection refused"))),
    );

    assert_eq!(
        result.model.ui_state,
        UiState::Error(NETWORK_FAILURE_MESSAGE.to_string())
    );
}

#[test]
fn test_failed_reload_keeps_stale_quote_hidden() {
    let model = loaded_model();
    let result = action(model, UserAction::Retry);
    assert_eq!(result.model.ui_state, UiState::Loading);

    let result = update(result.model, today_loaded(2, Err(ApiError::network("reset"))));
    assert!(result.model.displayed_quote().is_none());
    assert_eq!(result.model.current_quote(), Some(&socrates()));
}

#[test]
fn test_stale_today_response_is_dropped() {
    let result = update(Model::default(), QuoteMessage::LoadToday.into());
    let result = update(result.model, QuoteMessage::LoadToday.into());
    assert!(matches!(
        result.commands.as_slice(),
        [Command::Network(NetworkCommand::FetchTodayQuote { request_id: 2 })]
    ));

    // The newer request resolves first
    let newer = Quote::new("我思故我在。", "笛卡尔", "2024-03-16");
    let result = update(result.model, today_loaded(2, Ok(newer.clone())));
    let result = update(result.model, today_loaded(1, Ok(socrates())));

    assert_eq!(result.model.ui_state, UiState::Content);
    assert_eq!(result.model.current_quote(), Some(&newer));
}

#[test]
fn test_copy_before_any_quote_does_nothing() {
    let result = action(Model::default(), UserAction::Copy);

    assert!(result.commands.is_empty());
    assert!(!result.model.toasts.has_toasts());
}

#[test]
fn test_copy_after_failed_first_load_does_nothing() {
    let result = update(Model::default(), QuoteMessage::LoadToday.into());
    let result = update(result.model, today_loaded(1, Err(ApiError::application(None))));
    let result = action(result.model, UserAction::Copy);

    assert!(result.commands.is_empty());
    assert!(!result.model.toasts.has_toasts());
}

#[test]
fn test_copy_quote() {
    let result = action(loaded_model(), UserAction::Copy);

    match result.commands.as_slice() {
        [Command::System(SystemCommand::CopyToClipboard(text))] => {
            assert_eq!(text, "认识你自己。\n—— 苏格拉底");
        }
        other => panic!("unexpected commands: {:?}", other),
    }
    assert_eq!(result.model.toasts.toasts().len(), 1);
    assert_eq!(result.model.toasts.toasts()[0].message, COPIED_MESSAGE);
}

#[test]
fn test_rapid_copies_stack_toasts() {
    let result = action(loaded_model(), UserAction::Copy);
    let result = action(result.model, UserAction::Copy);
    assert_eq!(result.model.toasts.toasts().len(), 2);
}

#[test]
fn test_show_history_requests_recent_quotes() {
    let result = action(loaded_model(), UserAction::ShowHistory);

    assert!(!result.model.history.is_open());
    assert!(matches!(
        result.commands.as_slice(),
        [Command::Network(NetworkCommand::FetchRecentQuotes { request_id: 1, limit: 20 })]
    ));
}

#[test]
fn test_history_opens_on_success() {
    let result = action(loaded_model(), UserAction::ShowHistory);
    let quotes = vec![socrates(), Quote::new("我思故我在。", "笛卡尔", "2024-03-14")];
    let result = update(result.model, history_loaded(1, Ok(quotes.clone())));

    assert_eq!(result.model.history, HistoryModal::Open { quotes, scroll: 0 });
    assert_eq!(result.model.ui_state, UiState::Content);
}

#[test]
fn test_history_opens_when_empty() {
    let result = action(loaded_model(), UserAction::ShowHistory);
    let result = update(result.model, history_loaded(1, Ok(Vec::new())));

    assert_eq!(
        result.model.history,
        HistoryModal::Open { quotes: Vec::new(), scroll: 0 }
    );
}

#[test]
fn test_history_application_failure_only_toasts() {
    let model = loaded_model();
    let result = action(model, UserAction::ShowHistory);
    let result = update(
        result.model,
        history_loaded(1, Err(ApiError::Application("数据库不可用".to_string()))),
    );

    assert!(!result.model.history.is_open());
    assert_eq!(result.model.ui_state, UiState::Content);
    assert_eq!(result.model.current_quote(), Some(&socrates()));
    assert_eq!(result.model.toasts.toasts().len(), 1);
    assert_eq!(result.model.toasts.toasts()[0].message, HISTORY_FAILED_MESSAGE);
}

#[test]
fn test_history_transport_failure_toast() {
    let result = action(loaded_model(), UserAction::ShowHistory);
    let result = update(result.model, history_loaded(1, Err(ApiError::network("refused"))));

    assert!(!result.model.history.is_open());
    assert_eq!(
        result.model.toasts.toasts()[0].message,
        HISTORY_NETWORK_FAILED_MESSAGE
    );
}

#[test]
fn test_stale_history_response_is_dropped() {
    let result = action(loaded_model(), UserAction::ShowHistory);
    let result = action(result.model, UserAction::ShowHistory);
    let result = update(result.model, history_loaded(1, Err(ApiError::network("late"))));

    assert!(!result.model.toasts.has_toasts());
}

#[test]
fn test_escape_closes_history() {
    let result = action(loaded_model(), UserAction::ShowHistory);
    let result = update(result.model, history_loaded(1, Ok(vec![socrates()])));
    let result = action(result.model, UserAction::HideHistory);

    assert_eq!(result.model.history, HistoryModal::Hidden);
}

#[test]
fn test_actions_behind_open_history_are_ignored() {
    let result = action(loaded_model(), UserAction::ShowHistory);
    let result = update(result.model, history_loaded(1, Ok(vec![socrates()])));

    for blocked in [UserAction::Retry, UserAction::Copy, UserAction::ShowHistory] {
        let outcome = action(result.model.clone(), blocked);
        assert!(outcome.commands.is_empty(), "{:?} should be ignored", blocked);
        assert!(outcome.model.history.is_open());
        assert_eq!(outcome.model.ui_state, UiState::Content);
    }
}

#[test]
fn test_scroll_history() {
    let result = action(loaded_model(), UserAction::ShowHistory);
    let result = update(result.model, history_loaded(1, Ok(vec![socrates()])));
    let result = action(result.model, UserAction::ScrollUp);
    let result = action(result.model, UserAction::ScrollDown);
    let result = action(result.model, UserAction::ScrollDown);

    assert!(matches!(result.model.history, HistoryModal::Open { scroll: 2, .. }));
}

fn model_with_open_history() -> Model {
    let model = update(loaded_model(), SystemMessage::Resize(80, 24).into()).model;
    let result = action(model, UserAction::ShowHistory);
    update(result.model, history_loaded(1, Ok(vec![socrates()]))).model
}

#[test]
fn test_click_on_backdrop_closes_history() {
    let result = update(
        model_with_open_history(),
        UIMessage::Click { column: 0, row: 0 }.into(),
    );
    assert!(!result.model.history.is_open());
}

#[test]
fn test_click_inside_history_keeps_it_open() {
    let result = update(
        model_with_open_history(),
        UIMessage::Click { column: 40, row: 12 }.into(),
    );
    assert!(result.model.history.is_open());
}

#[test]
fn test_show_toast_message() {
    let result = update(Model::default(), UIMessage::ShowToast("你好".to_string()).into());
    assert_eq!(result.model.toasts.toasts()[0].message, "你好");

    // A tick right away keeps the fresh toast
    let result = update(result.model, SystemMessage::Tick.into());
    assert!(result.model.toasts.has_toasts());
}

#[test]
fn test_quit_action() {
    let result = action(Model::default(), UserAction::Quit);
    assert!(result.model.should_quit);
}
