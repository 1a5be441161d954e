//! Where user-facing messages go.

/// Line-oriented sink for the messages the form reports.
///
/// A message may span several lines (separated by `\n`).
pub trait Console {
    fn line(&mut self, text: &str);
}

impl<C: Console + ?Sized> Console for &mut C {
    fn line(&mut self, text: &str) {
        (**self).line(text);
    }
}

/// Prints every message to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Console for Stdout {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Keeps every message in memory, one entry per printed line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Whether any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Console for Transcript {
    fn line(&mut self, text: &str) {
        self.lines.extend(text.split('\n').map(str::to_string));
    }
}
