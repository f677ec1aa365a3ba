/// Toast notifications for short user feedback
///
/// Toasts appear centered at the top of the screen, fade in, stay for two
/// seconds, fade out for 300 ms and are then dropped. Toasts raised in quick
/// succession stack; there is no de-duplication or queuing.
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::collections::VecDeque;
use tokio::time::{Duration, Instant};
use uuid::Uuid;

/// Delay before a new toast is fully shown
pub const FADE_IN: Duration = Duration::from_millis(10);

/// Time from creation until the toast starts fading out
pub const DISPLAY_DURATION: Duration = Duration::from_secs(2);

/// Length of the fade-out transition
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// Height per toast (including borders)
const TOAST_HEIGHT: u16 = 3;

/// Lifecycle phase of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
    Expired,
}

/// Toast notification item
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    /// Create a new toast notification
    pub fn new(message: String) -> Self {
        Self::created_at(message, Instant::now())
    }

    /// Create a toast with an explicit creation time
    pub fn created_at(message: String, created_at: Instant) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message,
            created_at,
        }
    }

    pub fn phase_at(&self, now: Instant) -> ToastPhase {
        let elapsed = now.saturating_duration_since(self.created_at);
        if elapsed < FADE_IN {
            ToastPhase::Entering
        } else if elapsed < DISPLAY_DURATION {
            ToastPhase::Visible
        } else if elapsed < DISPLAY_DURATION + EXIT_TRANSITION {
            ToastPhase::Leaving
        } else {
            ToastPhase::Expired
        }
    }

    /// Check if toast has expired
    pub fn is_expired(&self, now: Instant) -> bool {
        self.phase_at(now) == ToastPhase::Expired
    }
}

/// Toast notification manager
#[derive(Debug, Clone, Default)]
pub struct ToastManager {
    toasts: VecDeque<Toast>,
}

impl ToastManager {
    /// Create a new toast manager
    pub fn new() -> Self {
        Self {
            toasts: VecDeque::new(),
        }
    }

    /// Add a toast notification
    pub fn add_toast(&mut self, toast: Toast) {
        tracing::debug!("Toast: {}", toast.message);
        self.toasts.push_back(toast);
    }

    /// Add a toast with the given message, starting now
    pub fn show(&mut self, message: impl Into<String>) {
        self.add_toast(Toast::new(message.into()));
    }

    /// Remove expired toasts
    pub fn update(&mut self, now: Instant) {
        self.toasts.retain(|toast| !toast.is_expired(now));
    }

    /// Get current toasts
    pub fn toasts(&self) -> &VecDeque<Toast> {
        &self.toasts
    }

    /// Check if there are any active toasts
    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    /// Clear all toasts
    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

/// Toast renderer for displaying notifications
pub struct ToastRenderer;

impl ToastRenderer {
    /// Render toasts centered at the top, oldest first
    pub fn render(frame: &mut Frame, area: Rect, toasts: &ToastManager, theme: &Theme, now: Instant) {
        let mut current_y = area.y + 1;

        for toast in toasts.toasts() {
            let phase = toast.phase_at(now);
            if phase == ToastPhase::Expired {
                continue;
            }
            if current_y + TOAST_HEIGHT > area.bottom() {
                break; // No more space
            }

            let width = (display_width(&toast.message) + 4).min(area.width);
            let toast_area = Rect {
                x: area.x + (area.width.saturating_sub(width)) / 2,
                y: current_y,
                width,
                height: TOAST_HEIGHT,
            };

            Self::render_individual_toast(frame, toast_area, toast, phase, theme);
            current_y += TOAST_HEIGHT;
        }
    }

    fn render_individual_toast(
        frame: &mut Frame,
        area: Rect,
        toast: &Toast,
        phase: ToastPhase,
        theme: &Theme,
    ) {
        // Clear the area first for proper overlay
        frame.render_widget(Clear, area);

        let dimmed = phase != ToastPhase::Visible;
        let style = theme.toast(dimmed);
        let paragraph = Paragraph::new(toast.message.as_str())
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style));

        frame.render_widget(paragraph, area);
    }
}

/// Terminal cell width of a single-line message
fn display_width(text: &str) -> u16 {
    Line::raw(text).width().min(u16::MAX as usize) as u16
}
