//! Tracing initialization and per-section span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` on stderr so stdout carries only the report.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper recording the start and finish of one checklist section.
pub struct SectionSpan {
    span: Span,
    started_at: Instant,
    section: &'static str,
}

impl SectionSpan {
    /// Start a section span.
    pub fn start(section: &'static str) -> Self {
        let span = info_span!(target: "deploy_check::checks", "check_section", section);
        debug!(target: "deploy_check::checks", section, "Starting check section");
        Self {
            span,
            started_at: Instant::now(),
            section,
        }
    }

    /// Close the span while recording line counts.
    pub fn finish(self, passed: usize, failed: usize, warnings: usize) {
        let elapsed_us = self.started_at.elapsed().as_micros();
        let _entered = self.span.enter();
        debug!(
            target: "deploy_check::checks",
            section = self.section,
            passed,
            failed,
            warnings,
            elapsed_us,
            "Completed check section"
        );
    }
}
