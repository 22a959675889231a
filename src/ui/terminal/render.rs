use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{stdout, Write};
use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::events::TOGGLE_KEY;
use super::TerminalUI;

/// Title, prompt, and help rows.
const CHROME_ROWS: u16 = 3;

const HELP_TEXT: &str =
    " Enter: run | Tab: complete | ↑↓: history | PgUp/PgDn: scroll | Esc: hide | Ctrl+C: quit";

impl TerminalUI {
    pub(super) fn render(&mut self) -> Result<()> {
        if self.console.begin_frame() {
            self.scroll_offset = 0;
        }

        let mut stdout = stdout();
        queue!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        let (width, height) = self.terminal_size;
        if !self.console.is_visible() {
            self.render_hidden_hint(&mut stdout, width)?;
            stdout.flush()?;
            return Ok(());
        }

        self.render_title(&mut stdout, width)?;
        self.render_scrollback(&mut stdout, 1, width, self.page_size())?;

        self.render_help_line(&mut stdout, height.saturating_sub(1), width)?;
        // Drawn last so the terminal cursor is left on the caret.
        self.render_input_line(&mut stdout, height.saturating_sub(2), width)?;

        stdout.flush()?;
        Ok(())
    }

    /// Rows available for scrollback lines.
    pub(super) fn page_size(&self) -> usize {
        self.terminal_size.1.saturating_sub(CHROME_ROWS).max(1) as usize
    }

    fn render_hidden_hint(&self, stdout: &mut impl Write, width: u16) -> Result<()> {
        let hint = format!(" Console hidden. Press {} to open, Ctrl+C to quit.", TOGGLE_KEY);
        queue!(
            stdout,
            cursor::Hide,
            SetForegroundColor(Color::DarkGrey),
            Print(truncate_to_width(&hint, width as usize)),
            ResetColor
        )?;
        Ok(())
    }

    fn render_title(&self, stdout: &mut impl Write, width: u16) -> Result<()> {
        let log = self.console.scrollback();
        let mut title = format!(
            " devconsole | {} commands | {}/{} lines",
            self.console.registry().len(),
            log.len(),
            log.max_lines()
        );
        if self.scroll_offset > 0 {
            title.push_str(&format!(" | scrolled up {}", self.scroll_offset));
        }

        let display_text = truncate_to_width(&title, width as usize);
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetBackgroundColor(Color::DarkGrey),
            SetForegroundColor(Color::White),
            Print(display_text)
        )?;

        let padding = (width as usize).saturating_sub(UnicodeWidthStr::width(display_text));
        if padding > 0 {
            queue!(stdout, Print(" ".repeat(padding)))?;
        }
        queue!(stdout, ResetColor)?;
        Ok(())
    }

    fn render_scrollback(
        &mut self,
        stdout: &mut impl Write,
        top: u16,
        width: u16,
        rows: usize,
    ) -> Result<()> {
        let log = self.console.scrollback();
        let range = visible_range(log.len(), rows, self.scroll_offset);
        // Keep the offset within what can actually be shown.
        self.scroll_offset = log.len() - range.end;

        for (row, line) in log
            .lines()
            .skip(range.start)
            .take(range.len())
            .enumerate()
        {
            queue!(stdout, cursor::MoveTo(0, top + row as u16))?;
            match line_color(line) {
                Some(color) => queue!(
                    stdout,
                    SetForegroundColor(color),
                    Print(truncate_to_width(line, width as usize)),
                    ResetColor
                )?,
                None => queue!(stdout, Print(truncate_to_width(line, width as usize)))?,
            }
        }
        Ok(())
    }

    fn render_input_line(&self, stdout: &mut impl Write, row: u16, width: u16) -> Result<()> {
        let session = self.console.session();
        queue!(
            stdout,
            cursor::MoveTo(0, row),
            SetForegroundColor(Color::Cyan),
            Print(&self.prompt),
            ResetColor,
            Print(session.input())
        )?;

        let input_display_width: usize = session
            .input()
            .chars()
            .take(session.cursor())
            .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
            .sum();
        let cursor_x = UnicodeWidthStr::width(self.prompt.as_str()) + input_display_width;

        if cursor_x < width as usize {
            queue!(stdout, cursor::MoveTo(cursor_x as u16, row), cursor::Show)?;
        } else {
            queue!(stdout, cursor::Hide)?;
        }
        Ok(())
    }

    fn render_help_line(&self, stdout: &mut impl Write, row: u16, width: u16) -> Result<()> {
        queue!(
            stdout,
            cursor::MoveTo(0, row),
            SetForegroundColor(Color::DarkGrey),
            Print(truncate_to_width(HELP_TEXT, width as usize)),
            ResetColor
        )?;
        Ok(())
    }
}

/// Indices of the scrollback lines that fit in `rows`, `offset` lines up
/// from the bottom. The offset is clamped so the window never runs past
/// the oldest line.
fn visible_range(total: usize, rows: usize, offset: usize) -> Range<usize> {
    let max_offset = total.saturating_sub(rows);
    let end = total - offset.min(max_offset);
    end.saturating_sub(rows)..end
}

/// Longest prefix of `text` that fits in `width` terminal columns.
fn truncate_to_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (index, c) in text.char_indices() {
        used += UnicodeWidthChar::width(c).unwrap_or(0);
        if used > width {
            return &text[..index];
        }
    }
    text
}

fn line_color(line: &str) -> Option<Color> {
    if line.starts_with("> ") {
        Some(Color::Cyan)
    } else if line.starts_with("Error: ")
        || line.ends_with(" not found")
        || line.contains("[ERROR]")
    {
        Some(Color::Red)
    } else if line.contains("[WARN]") {
        Some(Color::Yellow)
    } else if line.contains("[DEBUG]") || line.contains("[TRACE]") {
        Some(Color::DarkGrey)
    } else {
        None
    }
}
