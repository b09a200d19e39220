//! Styled terminal text. Everything here returns strings; printing and
//! screen clearing are left to the caller.

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::Write;

use crate::batch::BatchReport;

pub fn banner() -> String {
    format!(
        "{}\n{}\n",
        "MUST GPA chart downloader".cyan().bold(),
        "Fetches GPA charts from the MUST CMS and binds them into a PDF".yellow()
    )
}

pub fn menu_header() -> String {
    format!("\n{}", "MENU:".white().bold())
}

pub fn error_line(message: &str) -> String {
    message.red().to_string()
}

pub fn success_line(message: &str) -> String {
    message.green().to_string()
}

pub fn report_lines(report: &BatchReport) -> String {
    let mut out = success_line(&format!("\nPDF saved to {}", report.document.display()));
    if report.placeholders > 0 {
        out.push('\n');
        out.push_str(
            &format!(
                "{} of {} chart(s) were unavailable and replaced by placeholders",
                report.placeholders, report.pages
            )
            .yellow()
            .to_string(),
        );
    }
    out
}

/// Clear the terminal and move the cursor home.
pub fn clear_screen<W: Write>(out: &mut W) -> std::io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}
