//! History overlay listing recent quotes

use crate::api::Quote;
use crate::format::format_date;
use crate::theme::Theme;
use crate::ui::centered_rect;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shown instead of the list when the service has no quotes yet
pub const EMPTY_HISTORY_PLACEHOLDER: &str = "暂无历史语录";

const TITLE: &str = " 历史语录 ";

/// Area covered by the overlay; clicks outside it close the overlay
pub fn modal_area(area: Rect) -> Rect {
    centered_rect(70, 80, area)
}

pub fn render(frame: &mut Frame, area: Rect, quotes: &[Quote], scroll: u16, theme: &Theme) {
    let modal = modal_area(area);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title(TITLE)
        .title_bottom(Line::from(" Esc 关闭 · ↑↓ 滚动 ").alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_style(theme.border(true))
        .style(theme.base());

    let paragraph = if quotes.is_empty() {
        Paragraph::new(Line::from(Span::styled(EMPTY_HISTORY_PLACEHOLDER, theme.muted())))
            .alignment(Alignment::Center)
    } else {
        Paragraph::new(history_lines(quotes, theme))
            .wrap(Wrap { trim: true })
            .scroll((scroll, 0))
    };

    frame.render_widget(paragraph.block(block), modal);
}

/// One dated block per quote, in the order the service returned them
fn history_lines<'a>(quotes: &'a [Quote], theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::with_capacity(quotes.len() * 4);

    for (index, quote) in quotes.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(format_date(&quote.date), theme.muted())));
        lines.push(Line::from(Span::styled(quote.content.as_str(), theme.quote_text())));
        lines.push(Line::from(Span::styled(quote.attribution(), theme.author())));
    }

    lines
}
