//! At the command line, the parser runs as a batch checker: read a file,
//! parse it, report every diagnostic, and exit accordingly.

use std::path::Path;

use marl_css::errors::{Errors, Severity};
use marl_css::parse::{parse, Options};
use marl_css::source::Sources;

pub struct Summary {
    pub num_warnings: usize,
}

pub fn run(path: &Path) -> anyhow::Result<Summary> {
    let file = std::fs::read_to_string(path)?;
    let mut sources = Sources::new();
    let id = sources.add(file);
    let source = sources.get(id);

    let mut errors = Errors::new();
    let _ = parse(&mut errors, source, Options::default());
    let num_warnings = errors.num_warnings();

    let mut reports: Vec<_> = errors.drain().collect();
    reports.sort_by_key(|(id, _)| *id);

    for (_, error) in reports {
        let severity = match error.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };

        let (line, column) = line_column(&source.content, error.at.start);
        eprintln!("{}:{line}:{column}: {severity}: {}", path.display(), error.title);

        for (message, at) in &error.labels {
            let (line, column) = line_column(&source.content, at.start);
            eprintln!("{}:{line}:{column}: note: {message}", path.display());
        }

        for (message, _) in &error.notes {
            eprintln!("  note: {message}");
        }
    }

    Ok(Summary { num_warnings })
}

fn line_column(content: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(content.len());
    let before = &content[..offset];
    let line = before.matches('\n').count() + 1;
    let column = offset - before.rfind('\n').map_or(0, |newline| newline + 1) + 1;
    (line, column)
}
