use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// The scrollback buffer behind the log region.
///
/// Lines are appended in the exact order they arrive and are never
/// truncated, rotated, or cleared. Unbounded growth is accepted: this is a
/// viewer for short-lived development sessions, not a long-running log
/// store.
#[derive(Debug)]
pub struct LogView {
    lines: Vec<String>,
    scroll_offset: usize,
    viewport_height: usize,
}

impl LogView {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            scroll_offset: 0,
            viewport_height: 1,
        }
    }

    /// Appends one line and pins the view to the bottom, so the newest line
    /// is always visible. Empty lines are kept as-is, not filtered.
    pub fn append(&mut self, line: String) {
        self.lines.push(line);
        self.scroll_offset = self.max_offset();
    }

    /// The full buffer content: each line followed by a newline.
    pub fn rendered(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// The largest offset that still shows a full viewport of lines.
    pub fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport_height.max(1))
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + 1).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(self.viewport_height.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_offset =
            (self.scroll_offset + self.viewport_height.max(1)).min(self.max_offset());
    }

    /// Records the height of the drawing area so offsets stay meaningful
    /// across resizes.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height.max(1);
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.lines.iter()
    }
}

impl Default for LogView {
    fn default() -> Self {
        Self::new()
    }
}

pub fn draw_log_view(f: &mut Frame<'_>, area: Rect, view: &mut LogView) {
    // Two rows go to the block borders.
    view.set_viewport_height(area.height.saturating_sub(2) as usize);

    let lines: Vec<Line> = view.iter().map(|l| Line::from(l.as_str())).collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title("Logs"))
        .scroll((view.scroll_offset().min(u16::MAX as usize) as u16, 0));

    f.render_widget(paragraph, area);
}
