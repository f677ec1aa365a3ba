/// Help overlay listing the key bindings
use crate::keyboard::{key_label, KEY_BINDINGS};
use crate::theme::Theme;
use crate::ui::centered_rect;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let popup = centered_rect(50, 70, area);
    frame.render_widget(Clear, popup);

    let lines: Vec<Line> = KEY_BINDINGS
        .iter()
        .map(|(code, action)| {
            Line::from(vec![
                Span::styled(format!("{:>6}  ", key_label(code)), theme.author()),
                Span::styled(action.description(), theme.base()),
            ])
        })
        .collect();

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" 快捷键 ")
            .borders(Borders::ALL)
            .border_style(theme.border(true))
            .style(theme.base()),
    );

    frame.render_widget(help, popup);
}
