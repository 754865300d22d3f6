//! Check outcomes, section grouping, and console rendering.

use std::fmt::{self, Write as _};

/// Outcome of a single check line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
    Warn,
    Info,
}

impl Status {
    pub const fn marker(&self) -> &'static str {
        match self {
            Status::Pass => "✅",
            Status::Fail => "❌",
            Status::Warn => "⚠️",
            Status::Info => "ℹ️",
        }
    }
}

/// One reported line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckLine {
    pub status: Status,
    pub message: String,
}

impl CheckLine {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl fmt::Display for CheckLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {} {}", self.status.marker(), self.message)
    }
}

/// Lines produced by one checker, under a heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    pub title: String,
    pub lines: Vec<CheckLine>,
}

impl SectionReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: CheckLine) {
        self.lines.push(line);
    }

    pub fn count(&self, status: Status) -> usize {
        self.lines.iter().filter(|line| line.status == status).count()
    }

    pub fn has_failures(&self) -> bool {
        self.count(Status::Fail) > 0
    }

    pub fn render(&self) -> String {
        let mut out = format!("\n{}\n", self.title);
        for line in &self.lines {
            let _ = writeln!(out, "{line}");
        }
        out
    }
}

/// Pass/fail decision for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ready,
    NotReady,
}

impl Verdict {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Verdict::Ready => 0,
            Verdict::NotReady => 1,
        }
    }
}

/// All sections of a run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub sections: Vec<SectionReport>,
}

impl RunReport {
    pub fn push(&mut self, section: SectionReport) {
        self.sections.push(section);
    }

    /// True once any required check failed. Never cleared by later sections.
    pub fn has_errors(&self) -> bool {
        self.sections.iter().any(SectionReport::has_failures)
    }

    pub fn verdict(&self) -> Verdict {
        if self.has_errors() {
            Verdict::NotReady
        } else {
            Verdict::Ready
        }
    }

    pub fn count(&self, status: Status) -> usize {
        self.sections.iter().map(|section| section.count(status)).sum()
    }

    /// Final banner, plus next steps when the project is ready.
    pub fn render_summary(&self, next_steps: &[String]) -> String {
        let mut out = String::from("\n");
        match self.verdict() {
            Verdict::Ready => {
                out.push_str("🎉 All checks passed! Your project is ready for deployment.\n");
                if !next_steps.is_empty() {
                    out.push_str("\nNext steps:\n");
                    for (index, step) in next_steps.iter().enumerate() {
                        let _ = writeln!(out, "  {}. {step}", index + 1);
                    }
                }
            }
            Verdict::NotReady => {
                out.push_str("❌ Deployment check failed.\n");
                out.push_str("Please fix the issues marked ❌ above before deploying.\n");
            }
        }
        out
    }
}
