use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    endpoint: &'a str,
    busy: bool,
}

impl<'a> Header<'a> {
    pub fn new(endpoint: &'a str, busy: bool) -> Self {
        Self { endpoint, busy }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(MUTED_TEXT);
        let (dot, dot_style) = if self.busy {
            ("●", Style::default().fg(ACCENT))
        } else {
            ("●", Style::default().fg(STATUS_OK))
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(dot, dot_style),
            Span::styled("  ", text_style),
            Span::styled("Text Summarizer", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("POST {}", self.endpoint), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
