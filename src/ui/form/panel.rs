//! Terminal rendering of the summarization form.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::api::Mode;
use crate::ui::app::Focus;
use crate::ui::layout::form_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};

use super::controller::FormController;
use super::view::OutputView;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the whole form into `area`.
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    form: &FormController,
    focus: Focus,
    animation_tick: u8,
) {
    let state = form.state();
    let regions = form_regions(area, state.length_visible());

    render_text_area(frame, regions.text, &state.text, focus == Focus::Text);

    let counter = form.counter();
    let counter_style = if counter.over_limit {
        Style::default().fg(STATUS_ERROR)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(counter.label(), counter_style))),
        regions.counter,
    );

    render_mode_selector(frame, regions.mode, state.mode, focus == Focus::Mode);

    if state.length_visible() {
        render_length_field(
            frame,
            regions.length,
            &state.length_input,
            focus == Focus::Length,
        );
    }

    frame.render_widget(
        Paragraph::new(submit_button(
            state.submit_label(),
            state.submit_enabled(),
            focus == Focus::Submit,
        )),
        regions.submit,
    );

    render_output_panel(frame, regions.output, &form.output(), animation_tick);
}

fn field_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

/// Text area; shows the tail of the text so the insertion point stays visible.
fn render_text_area(frame: &mut Frame, area: Rect, text: &str, focused: bool) {
    let block = field_block(" Text ", focused);
    let inner = block.inner(area);

    let lines: Vec<&str> = text.split('\n').collect();
    let visible = inner.height as usize;
    let skip = lines.len().saturating_sub(visible);
    let shown: Vec<Line> = lines
        .iter()
        .skip(skip)
        .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(HEADER_TEXT))))
        .collect();

    frame.render_widget(Paragraph::new(shown).block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let row = (lines.len() - skip).saturating_sub(1) as u16;
        let col = lines.last().map(|l| l.chars().count()).unwrap_or(0) as u16;
        let x = inner.x + col.min(inner.width.saturating_sub(1));
        let y = inner.y + row.min(inner.height.saturating_sub(1));
        frame.set_cursor_position((x, y));
    }
}

fn render_mode_selector(frame: &mut Frame, area: Rect, selected: Mode, focused: bool) {
    let mut spans = vec![Span::raw(" ")];
    for mode in Mode::ALL {
        let (marker, style) = if mode == selected {
            let mut style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
            if focused {
                style = style.bg(ACTIVE_HIGHLIGHT);
            }
            ("(•) ", style)
        } else {
            ("( ) ", Style::default().fg(MUTED_TEXT))
        };
        spans.push(Span::styled(format!("{}{}", marker, mode.display_name()), style));
        spans.push(Span::raw("   "));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(field_block(" Mode ", focused)),
        area,
    );
}

fn render_length_field(frame: &mut Frame, area: Rect, raw: &str, focused: bool) {
    let block = field_block(" Sentences ", focused);
    let inner = block.inner(area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", raw),
            Style::default().fg(HEADER_TEXT),
        )))
        .block(block),
        area,
    );

    if focused && inner.width > 0 && inner.height > 0 {
        let col = 1 + raw.chars().count() as u16;
        frame.set_cursor_position((inner.x + col.min(inner.width.saturating_sub(1)), inner.y));
    }
}

fn submit_button(label: &str, enabled: bool, focused: bool) -> Line<'static> {
    let style = if !enabled {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    } else if focused {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };

    Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("[ {} ]", label), style),
    ])
}

fn render_output_panel(frame: &mut Frame, area: Rect, view: &OutputView, animation_tick: u8) {
    let lines = output_lines(view, animation_tick);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(field_block(" Output ", false)),
        area,
    );
}

fn output_lines(view: &OutputView, animation_tick: u8) -> Vec<Line<'static>> {
    match view {
        OutputView::Hidden => Vec::new(),
        OutputView::Loading { message } => {
            let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
            vec![Line::from(vec![
                Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
                Span::styled(*message, Style::default().fg(HEADER_TEXT)),
            ])]
        }
        OutputView::Summary { heading, lines } => {
            let mut out = vec![
                Line::from(Span::styled(
                    heading.clone(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            out.extend(lines.iter().map(|line| {
                Line::from(Span::styled(line.clone(), Style::default().fg(HEADER_TEXT)))
            }));
            out
        }
        OutputView::Error { text } => vec![Line::from(Span::styled(
            text.clone(),
            Style::default().fg(STATUS_ERROR),
        ))],
    }
}
