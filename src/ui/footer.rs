//! Key hints for the focused control.

use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, MUTED_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hints that apply to `focus`; the quit and submit chords are always listed.
pub fn key_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Text => " Type or paste text │ Enter: New line │ Tab: Next │ Ctrl+S: Summarize │ Esc: Quit",
        Focus::Mode => " ←/→/Space: Switch mode │ Tab: Next │ Ctrl+S: Summarize │ Esc: Quit",
        Focus::Length => " 0-9: Length │ Enter: Summarize │ Tab: Next │ Esc: Quit",
        Focus::Submit => " Enter/Space: Summarize │ Shift+Tab: Back │ Esc: Quit",
    }
}

pub fn footer(focus: Focus) -> Paragraph<'static> {
    let style = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);

    Paragraph::new(Line::from(key_hints(focus)))
        .style(style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title_bottom(Line::from(format!(" v{} ", VERSION)).right_aligned()),
        )
}
