use colored::Colorize;

// =============================================================================
// Output sinks
// =============================================================================

/// Where lesson text goes. Every observable line passes through here.
pub trait Sink {
    fn emit(&mut self, line: String);

    /// Blank separator line.
    fn blank(&mut self) {
        self.emit(String::new());
    }
}

/// Prints straight to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Sink for Stdout {
    fn emit(&mut self, line: String) {
        println!("{line}");
    }
}

/// Keeps every line so tests can inspect what a lesson said.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Sink for Transcript {
    fn emit(&mut self, line: String) {
        self.lines.push(line);
    }
}

// =============================================================================
// Lesson framing
// =============================================================================

fn rule(width: usize) -> String {
    "=".repeat(width)
}

fn styled(text: String, color: bool) -> String {
    if color {
        text.bold().cyan().to_string()
    } else {
        text
    }
}

pub fn banner(sink: &mut dyn Sink, title: &str, width: usize, color: bool) {
    sink.emit(styled(rule(width), color));
    sink.emit(styled(format!("  {title}"), color));
    sink.emit(styled(rule(width), color));
}

pub fn section(sink: &mut dyn Sink, title: &str, color: bool) {
    sink.blank();
    let header = format!("--- {title} ---");
    sink.emit(if color { header.yellow().to_string() } else { header });
}

pub fn complete(sink: &mut dyn Sink, width: usize, color: bool) {
    sink.blank();
    banner(sink, "Tutorial Complete!", width, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_records_in_order() {
        let mut transcript = Transcript::new();
        transcript.emit("one".into());
        transcript.blank();
        transcript.emit("two".into());

        assert_eq!(transcript.lines(), ["one", "", "two"]);
        assert_eq!(transcript.take().len(), 3);
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_plain_banner() {
        let mut transcript = Transcript::new();
        banner(&mut transcript, "VIRTUAL FUNCTIONS", 10, false);
        assert_eq!(
            transcript.lines(),
            ["==========", "  VIRTUAL FUNCTIONS", "=========="]
        );
    }

    #[test]
    fn test_section_and_complete() {
        let mut transcript = Transcript::new();
        section(&mut transcript, "BANK ACCOUNT DEMO", false);
        complete(&mut transcript, 4, false);
        assert_eq!(
            transcript.lines(),
            ["", "--- BANK ACCOUNT DEMO ---", "", "====", "  Tutorial Complete!", "===="]
        );
    }
}
