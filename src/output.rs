use std::io::Write;

use clap::ValueEnum;
use serde_json::json;

use crate::{error::Result, models::SearchResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Numbered title/link blocks
    #[default]
    Text,
    Json,
    Markdown,
}

/// Writes `result` in the chosen format. Item numbers are positions in the
/// API's `data` array, so a `null` slot leaves a gap in the numbering.
pub fn render<W: Write>(writer: &mut W, result: &SearchResult, format: Format) -> Result<()> {
    match format {
        Format::Text => render_text(writer, result)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *writer, &format_as_json(result))
                .map_err(std::io::Error::from)?;
            writeln!(writer)?;
        }
        Format::Markdown => writer.write_all(format_as_markdown(result).as_bytes())?,
    }

    writer.flush()?;
    Ok(())
}

fn render_text<W: Write>(writer: &mut W, result: &SearchResult) -> std::io::Result<()> {
    if result.is_empty() {
        writeln!(writer, "\nNothing found for '{}'.", result.query)?;
        return Ok(());
    }

    writeln!(
        writer,
        "\n--- Search results for '{}' ({} found) ---",
        result.query, result.count
    )?;

    for (position, item) in result.items() {
        writeln!(writer, "\n{}. Title: {}", position, item.title)?;
        writeln!(writer, "   Link: {}", item.url)?;
    }

    writeln!(writer, "\n--- End of results ---")
}

fn format_as_json(result: &SearchResult) -> serde_json::Value {
    let results: Vec<serde_json::Value> = result
        .items()
        .map(|(position, item)| {
            json!({
                "position": position,
                "title": item.title,
                "url": item.url,
            })
        })
        .collect();

    json!({
        "query": result.query,
        "count": result.count,
        "results": results,
    })
}

fn format_as_markdown(result: &SearchResult) -> String {
    let mut markdown = format!("# GIF results for \"{}\"\n\n", result.query);

    if result.is_empty() {
        markdown.push_str("_Nothing found._\n");
        return markdown;
    }

    for (position, item) in result.items() {
        markdown.push_str(&format!("{}. [{}]({})\n", position, item.title, item.url));
    }

    markdown
}
