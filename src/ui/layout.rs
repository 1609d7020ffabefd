use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Regions of the form inside the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRegions {
    pub text: Rect,
    pub counter: Rect,
    pub mode: Rect,
    /// Zero-width when the length field is hidden.
    pub length: Rect,
    pub submit: Rect,
    pub output: Rect,
}

pub fn form_regions(body: Rect, length_visible: bool) -> FormRegions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Percentage(40),
        ])
        .split(body);

    let options = if length_visible {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(32), Constraint::Length(20)])
            .split(rows[2])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(32), Constraint::Length(0)])
            .split(rows[2])
    };

    FormRegions {
        text: rows[0],
        counter: rows[1],
        mode: options[0],
        length: options[1],
        submit: rows[3],
        output: rows[4],
    }
}
