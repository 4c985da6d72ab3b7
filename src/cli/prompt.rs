use std::io::{self, Write};

use crossterm::{
    cursor::MoveToColumn,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};

/// Source of a replacement description for `edit`.
pub trait DescriptionPrompt {
    /// `Ok(None)` means the user backed out.
    fn edit_description(&mut self, current: &str) -> io::Result<Option<String>>;
}

/// Single-line editor on the terminal, pre-filled with the current text.
pub struct TerminalPrompt {
    label: String,
}

impl Default for TerminalPrompt {
    fn default() -> Self { Self { label: "Edit Description".to_string() } }
}

impl TerminalPrompt {
    fn redraw(&self, out: &mut impl Write, line: &LineBuffer) -> io::Result<()> {
        let prefix = format!("{}: ", self.label);
        let column = prefix.chars().count() + line.cursor;
        queue!(
            out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(&prefix),
            Print(line.text()),
            MoveToColumn(u16::try_from(column).unwrap_or(u16::MAX)),
        )?;
        out.flush()
    }
}

impl DescriptionPrompt for TerminalPrompt {
    fn edit_description(&mut self, current: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        let mut line = LineBuffer::new(current);
        let raw = RawMode::enable()?;
        self.redraw(&mut stdout, &line)?;
        let result = loop {
            let Event::Key(key) = event::read()? else { continue };
            // Only presses; repeats and releases would double the input.
            if key.kind != KeyEventKind::Press { continue; }
            match line.apply(key) {
                LineEdit::Continue => self.redraw(&mut stdout, &line)?,
                LineEdit::Accept => break Some(line.text()),
                LineEdit::Cancel => break None,
            }
        };
        drop(raw);
        writeln!(stdout)?;
        Ok(result)
    }
}

struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) { let _ = terminal::disable_raw_mode(); }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEdit { Continue, Accept, Cancel }

#[derive(Debug)]
struct LineBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl LineBuffer {
    fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    fn text(&self) -> String { self.chars.iter().collect() }

    fn apply(&mut self, key: KeyEvent) -> LineEdit {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return LineEdit::Cancel;
        }
        match key.code {
            KeyCode::Enter => return LineEdit::Accept,
            KeyCode::Esc => return LineEdit::Cancel,
            KeyCode::Char(c) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.chars.len() => { self.chars.remove(self.cursor); }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            _ => {}
        }
        LineEdit::Continue
    }
}
