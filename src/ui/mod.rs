//! Terminal views for the quote client
//!
//! Rendering is a pure function of the [`Model`]: the main screen shows exactly
//! one of the loading, content and error regions, with the history overlay,
//! the help overlay and toasts drawn on top.

pub mod help;
pub mod history;
pub mod quote_view;
pub mod toast;

use crate::tea::{Model, UiState};
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use thiserror::Error;
use tokio::time::Instant;

/// Smallest terminal the quote view fits in
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;

const TITLE: &str = "每日一言";

/// View errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("Terminal too small: {width}x{height}, need at least {}x{}", MIN_WIDTH, MIN_HEIGHT)]
    TerminalTooSmall { width: u16, height: u16 },
}

/// Named screen regions of the main view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRegions {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl ViewRegions {
    /// Split the terminal area, failing when it cannot hold every region
    pub fn bind(area: Rect) -> Result<Self, ViewError> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return Err(ViewError::TerminalTooSmall {
                width: area.width,
                height: area.height,
            });
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(5),    // Quote, loading or error
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        Ok(Self {
            header: chunks[0],
            body: chunks[1],
            footer: chunks[2],
        })
    }
}

/// Render the whole screen
pub fn render(frame: &mut Frame, model: &Model) {
    let area = frame.size();
    let theme = &model.theme;

    frame.render_widget(Block::default().style(theme.base()), area);

    let regions = match ViewRegions::bind(area) {
        Ok(regions) => regions,
        Err(e) => {
            frame.render_widget(Paragraph::new(e.to_string()).style(theme.error()), area);
            return;
        }
    };

    render_header(frame, regions.header, theme);

    match &model.ui_state {
        UiState::Loading => quote_view::render_loading(frame, regions.body, theme),
        UiState::Content => {
            if let Some(quote) = model.current_quote() {
                quote_view::render_quote(frame, regions.body, quote, theme);
            }
        }
        UiState::Error(message) => quote_view::render_error(frame, regions.body, message, theme),
    }

    render_footer(frame, regions.footer, theme);

    if let crate::tea::HistoryModal::Open { quotes, scroll } = &model.history {
        history::render(frame, area, quotes, *scroll, theme);
    }

    if model.show_help {
        help::render(frame, area, theme);
    }

    toast::ToastRenderer::render(frame, area, &model.toasts, theme, Instant::now());
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        theme.author().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().padding(ratatui::widgets::Padding::vertical(1)));

    frame.render_widget(title, area);
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let hints = Paragraph::new("r 刷新 · c 复制 · h 历史 · ? 帮助 · q 退出")
        .style(theme.muted())
        .alignment(Alignment::Center);

    frame.render_widget(hints, area);
}

/// Helper function to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
