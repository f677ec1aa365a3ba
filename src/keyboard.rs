//! User actions and their key bindings

use crate::tea::{Message, UIMessage};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Everything the user can ask the client to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserAction {
    Retry,
    Copy,
    ShowHistory,
    HideHistory,
    ScrollUp,
    ScrollDown,
    ToggleHelp,
    Quit,
}

impl UserAction {
    /// Short description shown in the help overlay
    pub fn description(&self) -> &'static str {
        match self {
            UserAction::Retry => "重新加载今日语录",
            UserAction::Copy => "复制语录",
            UserAction::ShowHistory => "查看历史语录",
            UserAction::HideHistory => "关闭弹窗",
            UserAction::ScrollUp => "向上滚动",
            UserAction::ScrollDown => "向下滚动",
            UserAction::ToggleHelp => "显示/隐藏帮助",
            UserAction::Quit => "退出",
        }
    }

    pub fn message(self) -> Message {
        Message::UI(UIMessage::Action(self))
    }
}

/// Key binding table; the first matching entry wins
pub const KEY_BINDINGS: &[(KeyCode, UserAction)] = &[
    (KeyCode::Char('r'), UserAction::Retry),
    (KeyCode::F(5), UserAction::Retry),
    (KeyCode::Char('c'), UserAction::Copy),
    (KeyCode::Char('y'), UserAction::Copy),
    (KeyCode::Char('h'), UserAction::ShowHistory),
    (KeyCode::Esc, UserAction::HideHistory),
    (KeyCode::Up, UserAction::ScrollUp),
    (KeyCode::Char('k'), UserAction::ScrollUp),
    (KeyCode::Down, UserAction::ScrollDown),
    (KeyCode::Char('j'), UserAction::ScrollDown),
    (KeyCode::Char('?'), UserAction::ToggleHelp),
    (KeyCode::Char('q'), UserAction::Quit),
];

/// Resolve a key press to an action
pub fn action_for_key(key: &KeyEvent) -> Option<UserAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UserAction::Quit),
            _ => None,
        };
    }

    KEY_BINDINGS
        .iter()
        .find(|(code, _)| *code == key.code)
        .map(|(_, action)| *action)
}

/// Human readable key name for the help overlay
pub fn key_label(code: &KeyCode) -> String {
    match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        other => format!("{:?}", other),
    }
}
