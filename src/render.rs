//! Rendering backend - buffered terminal output and cursor management
//!
//! The renderer either writes to stdout through a buffer, or (for tests and
//! snapshotting) captures everything into memory via [`Renderer::headless`].

use anyhow::Result;
use std::io::{self, BufWriter, Write};

/// Default buffer capacity for write batching (16KB)
const WRITE_BUFFER_CAPACITY: usize = 16 * 1024;

enum Sink {
    Terminal(BufWriter<io::Stdout>),
    Memory(Vec<u8>),
}

impl Sink {
    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Sink::Terminal(w) => w,
            Sink::Memory(buf) => buf,
        }
    }
}

/// Terminal renderer handling output and cursor state
///
/// Call `flush()` after a batch of operations to ensure output is displayed.
pub struct Renderer {
    sink: Sink,
    in_alt_screen: bool,
}

impl Renderer {
    /// Create a renderer writing to stdout
    pub fn new() -> Result<Self> {
        let writer = BufWriter::with_capacity(WRITE_BUFFER_CAPACITY, io::stdout());
        Ok(Renderer {
            sink: Sink::Terminal(writer),
            in_alt_screen: false,
        })
    }

    /// Create a renderer that captures output in memory
    pub fn headless() -> Self {
        Renderer {
            sink: Sink::Memory(Vec::new()),
            in_alt_screen: false,
        }
    }

    /// Captured output of a headless renderer, with escape sequences left in
    pub fn output(&self) -> String {
        match &self.sink {
            Sink::Memory(buf) => String::from_utf8_lossy(buf).into_owned(),
            Sink::Terminal(_) => String::new(),
        }
    }

    /// Captured output with ANSI escape sequences stripped
    pub fn plain_output(&self) -> String {
        strip_ansi(&self.output())
    }

    /// Discard captured output
    pub fn clear_output(&mut self) {
        if let Sink::Memory(buf) = &mut self.sink {
            buf.clear();
        }
    }

    /// Enter alternative screen buffer
    pub fn enter_alt_screen(&mut self) -> Result<()> {
        if !self.in_alt_screen {
            write!(self.sink.writer(), "\x1b[?1049h")?;
            self.flush()?;
            self.in_alt_screen = true;
        }
        Ok(())
    }

    /// Exit alternative screen buffer
    pub fn exit_alt_screen(&mut self) -> Result<()> {
        if self.in_alt_screen {
            write!(self.sink.writer(), "\x1b[?1049l")?;
            self.flush()?;
            self.in_alt_screen = false;
        }
        Ok(())
    }

    /// Clear the screen
    pub fn clear(&mut self) -> Result<()> {
        write!(self.sink.writer(), "\x1b[2J")?;
        Ok(())
    }

    /// Move cursor to position (0-indexed)
    #[inline]
    pub fn move_cursor(&mut self, col: u16, row: u16) -> Result<()> {
        write!(self.sink.writer(), "\x1b[{};{}H", row + 1, col + 1)?;
        Ok(())
    }

    /// Hide cursor
    pub fn hide_cursor(&mut self) -> Result<()> {
        write!(self.sink.writer(), "\x1b[?25l")?;
        Ok(())
    }

    /// Show cursor
    pub fn show_cursor(&mut self) -> Result<()> {
        write!(self.sink.writer(), "\x1b[?25h")?;
        Ok(())
    }

    /// Write text at current cursor position
    #[inline]
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        write!(self.sink.writer(), "{}", text)?;
        Ok(())
    }

    /// Write text with ANSI color/style codes, resetting afterwards
    #[inline]
    pub fn write_styled(&mut self, text: &str, style: &str) -> Result<()> {
        if style.is_empty() {
            return self.write_text(text);
        }
        write!(self.sink.writer(), "{}{}\x1b[0m", style, text)?;
        Ok(())
    }

    /// Write a repeated character
    #[inline]
    pub fn write_repeated(&mut self, ch: char, count: usize) -> Result<()> {
        let writer = self.sink.writer();
        for _ in 0..count {
            write!(writer, "{}", ch)?;
        }
        Ok(())
    }

    /// Flush output buffer to terminal
    pub fn flush(&mut self) -> Result<()> {
        self.sink.writer().flush()?;
        Ok(())
    }

    /// Check if the renderer is in alternative screen mode
    pub fn in_alt_screen(&self) -> bool {
        self.in_alt_screen
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        // Restore the terminal even when unwinding
        let _ = self.exit_alt_screen();
        let _ = self.show_cursor();
        let _ = self.flush();
    }
}

/// Remove CSI escape sequences; cursor moves become newlines so rows stay apart
fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.peek() != Some(&'[') {
            continue;
        }
        chars.next();
        for terminator in chars.by_ref() {
            if terminator.is_ascii_alphabetic() {
                if terminator == 'H' {
                    out.push('\n');
                }
                break;
            }
        }
    }

    out
}
