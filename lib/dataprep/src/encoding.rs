//! Top-categories column codec
//!
//! The perfume table stores each row's top categories as a string-encoded
//! list of (category, score) pairs. The canonical encoding is a JSON
//! array of `[name, score]` pairs. The legacy export format — a Python
//! tuple-literal like `[('Floral', 0.91), ('Sweet', 0.63)]` — is accepted
//! by a strict scanner that never evaluates anything.

use crate::error::{DataError, Result};
use accord_core::{Category, CategoryScore};

/// Encode top categories into the canonical JSON form
pub fn encode_top_categories(entries: &[CategoryScore]) -> Result<String> {
    let pairs: Vec<(&str, f32)> = entries
        .iter()
        .map(|entry| (entry.category.name(), entry.score))
        .collect();
    Ok(serde_json::to_string(&pairs)?)
}

/// Parse a stored top-categories string
///
/// Accepts the canonical JSON encoding or the legacy tuple-literal
/// form. An empty or whitespace-only string parses as no categories.
/// Anything else is rejected.
pub fn parse_top_categories(raw: &str) -> Result<Vec<CategoryScore>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let pairs = match serde_json::from_str::<Vec<(String, f32)>>(trimmed) {
        Ok(pairs) => pairs,
        Err(_) => parse_legacy_pairs(trimmed)?,
    };

    pairs
        .into_iter()
        .map(|(name, score)| {
            let category: Category = name
                .parse()
                .map_err(|_| DataError::InvalidTopCategories(format!("unknown category '{name}'")))?;
            Ok(CategoryScore::new(category, score))
        })
        .collect()
}

/// Strict scanner for the legacy `[('Name', 0.9), ...]` form
fn parse_legacy_pairs(raw: &str) -> Result<Vec<(String, f32)>> {
    let invalid = |reason: &str| DataError::InvalidTopCategories(reason.to_string());

    let inner = raw
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| invalid("expected a bracketed list"))?;

    let mut pairs = Vec::new();
    let mut rest = inner.trim();

    while !rest.is_empty() {
        rest = rest
            .strip_prefix('(')
            .ok_or_else(|| invalid("expected '(' opening a pair"))?
            .trim_start();

        let quote = rest
            .chars()
            .next()
            .filter(|c| *c == '\'' || *c == '"')
            .ok_or_else(|| invalid("expected a quoted category name"))?;
        rest = &rest[1..];

        let end = rest
            .find(quote)
            .ok_or_else(|| invalid("unterminated category name"))?;
        let name = rest[..end].to_string();
        rest = rest[end + 1..].trim_start();

        rest = rest
            .strip_prefix(',')
            .ok_or_else(|| invalid("expected ',' between name and score"))?
            .trim_start();

        let close = rest
            .find(')')
            .ok_or_else(|| invalid("expected ')' closing a pair"))?;
        let score: f32 = rest[..close]
            .trim()
            .parse()
            .map_err(|_| invalid("score is not a number"))?;
        rest = rest[close + 1..].trim_start();

        pairs.push((name, score));

        if let Some(after_comma) = rest.strip_prefix(',') {
            rest = after_comma.trim_start();
        } else if !rest.is_empty() {
            return Err(invalid("expected ',' between pairs"));
        }
    }

    Ok(pairs)
}
