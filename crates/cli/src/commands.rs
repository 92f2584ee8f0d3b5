//! Command implementations.
//!
//! Each command returns the text to print so `main` owns all output.

use anyhow::Context;
use std::cmp::Ordering;
use uuidkit::{Format, TimeLayout, Uuid};

/// Generates `count` identifiers in `layout`, each rendered in `format`.
///
/// Identifiers are produced lazily, one per `next()`.
pub fn new_ids(
    layout: TimeLayout,
    count: usize,
    format: Format,
) -> impl Iterator<Item = String> {
    (0..count).map(move |_| Uuid::generate(layout).to_string_as(format))
}

/// Parses `text` and renders it in `to`.
///
/// With `from` set the text must be in that layout, otherwise the layout is inferred.
pub fn convert(text: &str, from: Option<Format>, to: Format) -> anyhow::Result<String> {
    let uuid = parse_arg(text, from)?;
    Ok(uuid.to_string_as(to))
}

/// Returns `less`, `equal` or `greater` for the byte-wise order of `a` against `b`.
pub fn compare(a: &str, b: &str) -> anyhow::Result<&'static str> {
    let a = parse_arg(a, None)?;
    let b = parse_arg(b, None)?;
    Ok(match a.cmp(&b) {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    })
}

/// Describes `text`: its bytes followed by every layout, one per line.
pub fn inspect(text: &str) -> anyhow::Result<Vec<String>> {
    let uuid = parse_arg(text, None)?;

    let bytes = uuid
        .as_bytes()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![format!("bytes: {bytes}")];
    lines.extend(
        Format::ALL
            .iter()
            .map(|&format| format!("{format}: {}", uuid.formatted(format))),
    );
    Ok(lines)
}

fn parse_arg(text: &str, format: Option<Format>) -> anyhow::Result<Uuid> {
    let parsed = match format {
        Some(format) => Uuid::parse_as(text, format),
        None => Uuid::parse(text),
    };
    parsed.with_context(|| format!("could not parse '{text}'"))
}
