//! Main quote region: loading, quote card and error panel

use crate::api::Quote;
use crate::format::format_date;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub const LOADING_MESSAGE: &str = "正在加载今日语录...";
pub const RETRY_HINT: &str = "按 r 重试";

pub fn render_loading(frame: &mut Frame, area: Rect, theme: &Theme) {
    let loading = Paragraph::new(LOADING_MESSAGE)
        .style(theme.muted())
        .alignment(Alignment::Center)
        .block(card_block(theme, false));

    frame.render_widget(loading, area);
}

/// Quote card: formatted date, the quote, then the author line
pub fn render_quote(frame: &mut Frame, area: Rect, quote: &Quote, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(format_date(&quote.date), theme.muted())),
        Line::default(),
        Line::from(Span::styled(quote.content.as_str(), theme.quote_text())),
        Line::default(),
        Line::from(Span::styled(quote.attribution(), theme.author())).alignment(Alignment::Right),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(card_block(theme, true));

    frame.render_widget(card, area);
}

/// Error panel with the failure message shown verbatim
pub fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(message, theme.error())),
        Line::default(),
        Line::from(Span::styled(RETRY_HINT, theme.muted())),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(card_block(theme, false));

    frame.render_widget(panel, area);
}

fn card_block(theme: &Theme, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(focused))
        .padding(Padding::new(2, 2, 1, 1))
}
