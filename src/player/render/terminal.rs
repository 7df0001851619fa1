//! Terminal renderer for text frames.
//!
//! Every frame identifier names a UTF-8 text file (ASCII art). Files are
//! read once in `prepare`; `show` clears the screen and draws the frame
//! centred, on top of the optional background frame.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use tracing::debug;
use unicode_width::UnicodeWidthChar;

use super::Renderer;
use crate::sequence::Sequence;

/// Text content of one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameArt {
    lines: Vec<String>,
    width: usize,
}

impl FrameArt {
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text
            .lines()
            .map(|l| l.trim_end_matches('\r').to_string())
            .collect();
        let width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
        Self { lines, width }
    }

    /// Widest line in terminal columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

fn display_width(line: &str) -> usize {
    line.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// One terminal cell; `None` marks the second half of a wide character.
type Cell = Option<char>;

/// Draw `frame` centred over `background` on a `cols` x `rows` canvas.
///
/// Spaces in the frame are transparent so the background shows through.
/// Content larger than the canvas is clipped on the right and bottom.
pub fn compose(
    frame: &FrameArt,
    background: Option<&FrameArt>,
    cols: usize,
    rows: usize,
) -> Vec<String> {
    let mut canvas: Vec<Vec<Cell>> = vec![vec![Some(' '); cols]; rows];
    if let Some(background) = background {
        paint(&mut canvas, background, cols);
    }
    paint(&mut canvas, frame, cols);

    canvas
        .into_iter()
        .map(|row| {
            let line: String = row.into_iter().flatten().collect();
            line.trim_end().to_string()
        })
        .collect()
}

fn paint(canvas: &mut [Vec<Cell>], art: &FrameArt, cols: usize) {
    let left = cols.saturating_sub(art.width) / 2;
    let top = canvas.len().saturating_sub(art.height()) / 2;

    for (row, line) in canvas.iter_mut().skip(top).zip(&art.lines) {
        let mut col = left;
        for ch in line.chars() {
            let width = ch.width().unwrap_or(0);
            if width == 0 {
                continue;
            }
            if col + width > cols {
                break;
            }
            if ch != ' ' {
                row[col] = Some(ch);
                for cell in &mut row[col + 1..col + width] {
                    *cell = None;
                }
            }
            col += width;
        }
    }
}

/// Renderer that draws text frames to a terminal.
pub struct TerminalRenderer<W: Write = Stdout> {
    out: W,
    directory: PathBuf,
    background_name: Option<String>,
    background: Option<FrameArt>,
    frames: HashMap<String, FrameArt>,
    viewport: Option<(u16, u16)>,
    current: Option<String>,
}

impl TerminalRenderer<Stdout> {
    /// Renderer drawing to stdout, loading frames from `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self::with_writer(io::stdout(), directory)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W, directory: impl Into<PathBuf>) -> Self {
        Self {
            out,
            directory: directory.into(),
            background_name: None,
            background: None,
            frames: HashMap::new(),
            viewport: None,
            current: None,
        }
    }

    /// Draw `name` (a file in the frame directory) under every frame.
    pub fn background(mut self, name: impl Into<String>) -> Self {
        self.background_name = Some(name.into());
        self
    }

    /// Fixed canvas size instead of the terminal size.
    pub fn viewport(mut self, cols: u16, rows: u16) -> Self {
        self.viewport = Some((cols, rows));
        self
    }

    /// Identifier currently on screen.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Repaint the current frame (after a resize).
    pub fn redraw(&mut self) -> io::Result<()> {
        match self.current.clone() {
            Some(identifier) => self.draw(&identifier),
            None => Ok(()),
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn load(&self, name: &str) -> io::Result<FrameArt> {
        let path = self.directory.join(name);
        read_art(&path)
    }

    fn canvas_size(&self, art: &FrameArt) -> (usize, usize) {
        let (cols, rows) = self
            .viewport
            .or_else(|| terminal::size().ok())
            .unwrap_or((art.width() as u16, art.height() as u16));
        (cols as usize, rows as usize)
    }

    fn draw(&mut self, identifier: &str) -> io::Result<()> {
        let art = self.frames.get(identifier).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("Frame was not prepared: {}", identifier),
            )
        })?;
        let (cols, rows) = self.canvas_size(art);
        let lines = compose(art, self.background.as_ref(), cols, rows);

        queue!(self.out, Clear(ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            queue!(self.out, MoveTo(0, row as u16), Print(line))?;
        }
        self.out.flush()
    }
}

fn read_art(path: &Path) -> io::Result<FrameArt> {
    let text = fs::read_to_string(path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))?;
    Ok(FrameArt::from_text(&text))
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn prepare(&mut self, sequence: &Sequence) -> io::Result<()> {
        for identifier in sequence.identifiers() {
            if self.frames.contains_key(identifier) {
                continue;
            }
            let art = self.load(identifier)?;
            self.frames.insert(identifier.to_string(), art);
        }
        if let Some(name) = self.background_name.clone() {
            self.background = Some(self.load(&name)?);
        }
        debug!(
            frames = self.frames.len(),
            directory = %self.directory.display(),
            "Frames loaded"
        );
        Ok(())
    }

    fn show(&mut self, identifier: &str) -> io::Result<()> {
        self.draw(identifier)?;
        self.current = Some(identifier.to_string());
        Ok(())
    }
}
