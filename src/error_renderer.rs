//! Error rendering using ariadne
//!
//! This module renders parse errors and error-value diagnostics with
//! source snippets and annotations.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use lispy::{Interpreter, render_error};
///
/// if let Err(e) = Interpreter::default().evaluate("(+ 1 2") {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for tests, web UIs, etc.)
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render the diagnostic of an error value to stderr
pub fn render_diagnostic(source: &str, diagnostic: &Diagnostic) {
    render_diagnostics(
        source,
        std::slice::from_ref(diagnostic),
        &mut std::io::stderr(),
        true,
    )
    .ok();
}

/// Render the diagnostic of an error value to a String without color codes
pub fn render_diagnostic_to_string_no_color(source: &str, diagnostic: &Diagnostic) -> String {
    let mut buf = Vec::new();
    render_diagnostics(source, std::slice::from_ref(diagnostic), &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    render_diagnostics(error.source_text(), &error.diagnostics(), writer, use_color)
}

fn render_diagnostics(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let kind = match diag.severity {
            Severity::Error => ReportKind::Error,
        };

        let mut report = Report::build(kind, ("<stdin>", diag.span.0.clone()))
            .with_message(&diag.message)
            .with_config(ariadne::Config::default().with_color(use_color));

        if let Some(code) = &diag.code {
            report = report.with_code(code);
        }

        let color = colors.next();
        report = report.with_label(
            Label::new(("<stdin>", diag.span.0.clone()))
                .with_message(&diag.message)
                .with_color(color),
        );

        for help_msg in &diag.help {
            report = report.with_help(help_msg);
        }

        // Reborrow the writer so it stays usable for the next diagnostic
        report
            .finish()
            .write(("<stdin>", Source::from(source)), &mut *writer)?;
    }

    Ok(())
}
