//! Extraction of script-embedded JSON blobs (`ytInitialData`,
//! `ytInitialPlayerResponse`, ...) from a page snapshot.

use regex::Regex;
use serde_json::Value;

use crate::{error::Error, page::Page};

/// Finds a top-level `<var_name> = {...};` assignment in any of the page's
/// script elements and parses the assigned object.
///
/// The object span is taken from the first `{` after the assignment to the
/// first `};` (shortest match). That is deliberately best-effort: a `};`
/// inside a string literal truncates the span and the parse fails. Every
/// failure mode yields `None`; parse errors are logged and the remaining
/// scripts are still searched, the first successful parse wins.
#[tracing::instrument(skip(page))]
pub fn script_data(page: &Page, var_name: &str) -> Option<Value> {
    let needle = format!("{var_name} =");
    let assignment_re =
        Regex::new(&format!(r"(?s){}\s*=\s*(\{{.*?\}});", regex::escape(var_name))).ok()?;

    for text in page.scripts() {
        if !text.contains(&needle) {
            continue;
        }
        match parse_assignment(&text, &assignment_re) {
            Ok(value) => {
                tracing::info!(var_name, "Parsed script data blob");
                return Some(value);
            }
            Err(Error::Json(e)) => {
                tracing::error!(var_name, error = %e, "Failed to parse script data blob");
            }
            Err(e) => {
                tracing::debug!(var_name, error = %e, "Assignment did not yield a blob");
            }
        }
    }

    tracing::debug!(var_name, "Script data blob not found");
    None
}

fn parse_assignment(text: &str, assignment_re: &Regex) -> Result<Value, Error> {
    let raw = assignment_re
        .captures(text)
        .and_then(|cap| cap.get(1))
        .ok_or(Error::ParseError(
            "No `{...};` span found after the assignment",
        ))?;
    Ok(serde_json::from_str(raw.as_str())?)
}
