//! Batch progress reporting.

use std::io::Write;
use std::sync::Mutex;

const BAR_WIDTH: usize = 10;

/// Receives progress updates from the batch runner. Implementations may be
/// called from several worker threads.
pub trait ProgressReporter: Send + Sync {
    fn start(&self, total: usize);
    fn advance(&self, completed: usize, total: usize);
    fn finish(&self);

    /// Called before the runner emits a log event, so a reporter that keeps
    /// a line open can end it first.
    fn suspend(&self) {}
}

/// Render `[#####.....] 5/10`.
pub fn render_progress_bar(completed: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        width
    } else {
        (completed.min(total) * width) / total
    };
    format!(
        "[{}{}] {}/{}",
        "#".repeat(filled),
        ".".repeat(width - filled),
        completed,
        total
    )
}

struct ConsoleState {
    out: Box<dyn Write + Send>,
    line_open: bool,
}

/// Single-line progress bar, redrawn in place with `\r`. Writes to stderr
/// by default.
pub struct ConsoleProgress {
    state: Mutex<ConsoleState>,
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::with_writer(Box::new(std::io::stderr()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            state: Mutex::new(ConsoleState {
                out,
                line_open: false,
            }),
        }
    }

    fn draw(&self, completed: usize, total: usize) {
        if let Ok(mut state) = self.state.lock() {
            let bar = render_progress_bar(completed, total, BAR_WIDTH);
            let _ = write!(state.out, "\r{}", bar);
            let _ = state.out.flush();
            state.line_open = true;
        }
    }

    fn end_line(&self) {
        if let Ok(mut state) = self.state.lock() {
            if state.line_open {
                let _ = writeln!(state.out);
                let _ = state.out.flush();
                state.line_open = false;
            }
        }
    }
}

impl ProgressReporter for ConsoleProgress {
    fn start(&self, total: usize) {
        self.draw(0, total);
    }

    fn advance(&self, completed: usize, total: usize) {
        self.draw(completed, total);
    }

    fn finish(&self) {
        self.end_line();
    }

    fn suspend(&self) {
        self.end_line();
    }
}

/// Discards all updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn start(&self, _total: usize) {}
    fn advance(&self, _completed: usize, _total: usize) {}
    fn finish(&self) {}
}
