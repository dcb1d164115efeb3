//! Where reports are written.
//!
//! Errors and results go to stdout so they can be piped; warnings go to
//! stderr next to the log output.

/// Line sink for reports.
///
/// Implementors provide the two streams; the formatting helpers are shared.
pub trait Output {
    fn stdout(&mut self, line: &str);

    fn stderr(&mut self, line: &str);

    fn section(&mut self, name: &str) {
        self.stdout(&format!("{name}:"));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.stdout(&format!("{key}: {value}"));
    }

    fn list_item(&mut self, text: &str) {
        self.stdout(&format!("  - {text}"));
    }

    /// A file that was created or changed.
    fn added_item(&mut self, text: &str) {
        self.stdout(&format!("  + {text}"));
    }

    /// Printed as is, normally `file: message`.
    fn error(&mut self, msg: &str) {
        self.stdout(msg);
    }

    fn warning(&mut self, msg: &str) {
        self.stderr(&format!("warning: {msg}"));
    }

    fn divider(&mut self, label: &str) {
        self.stdout(&format!("── {label} ──"));
    }

    fn preformatted(&mut self, text: &str) {
        self.stdout(text);
    }

    fn newline(&mut self) {
        self.stdout("");
    }
}

pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// The process's own stdout and stderr.
#[derive(Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn stdout(&mut self, line: &str) {
        println!("{line}");
    }

    fn stderr(&mut self, line: &str) {
        eprintln!("{line}");
    }
}

/// Both streams interleaved in one list, for asserting on rendered reports.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn stdout(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn stderr(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
