//! Ariadne-based rendering of conversion errors.

use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::error::ConversionError;

fn error_code(err: &ConversionError) -> &'static str {
    match err {
        ConversionError::NoConversion { .. } => "E0101",
        ConversionError::UntypedSource { .. } => "E0102",
    }
}

fn help(err: &ConversionError) -> Option<&'static str> {
    let target = err.target();
    if target.as_tuple().is_some() {
        Some("tuple elements are matched by name first, then by position")
    } else if target.as_function().is_some() {
        Some("a value converts to a function type only if it converts to the function's result")
    } else {
        None
    }
}

/// Render a conversion error as a colorless diagnostic.
pub fn render_diagnostic(error: &ConversionError, source: &str, _filename: &str) -> String {
    let config = Config::default().with_color(false);
    let source_len = source.len();

    // Ariadne needs a non-empty span inside the source.
    let span = error.span();
    let start = (span.start as usize).min(source_len.saturating_sub(1));
    let end = (span.end as usize).min(source_len).max(start);
    let range: Range<usize> = if start == end {
        start..(end + 1).min(source_len)
    } else {
        start..end
    };

    let label = match error {
        ConversionError::NoConversion { from, .. } => format!("this expression has type `{}`", from),
        ConversionError::UntypedSource { .. } => "this expression has no type yet".to_string(),
    };

    let mut builder = Report::build(ReportKind::Error, range.clone())
        .with_code(error_code(error))
        .with_message(error.to_string())
        .with_config(config)
        .with_label(Label::new(range).with_message(label).with_color(Color::Red));
    if let Some(help) = help(error) {
        builder = builder.with_help(help);
    }

    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = builder.finish().write(Source::from(source), &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
