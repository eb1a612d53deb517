//! Detail-page eligibility and long-form description structure.
//!
//! A condition or service gets its own page only when its long-form
//! description has text. The flag is always derived, never stored.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Whether an entity with this long-form text gets a detail page.
///
/// `None`, empty, and whitespace-only values all answer `false`.
#[must_use]
pub fn has_detail_page(long_text: Option<&str>) -> bool {
    long_text.is_some_and(|text| !text.trim().is_empty())
}

/// Normalize a long-form field before it is written: blank becomes `None`.
#[must_use]
pub fn normalize_long_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
}

/// One block of a detail-page body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DescriptionBlock {
    /// A block starting with `## `.
    Heading { text: String },
    /// A block starting with `- `, one item per line.
    List { items: Vec<String> },
    Paragraph { text: String },
}

/// Split a description into blocks separated by blank lines.
///
/// Headings start with `## `, bullet lists with `- `; everything else is a
/// paragraph. Empty blocks and empty list items are skipped.
#[must_use]
pub fn parse_description(text: &str) -> Vec<DescriptionBlock> {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(parse_block)
        .filter(|block| !matches!(block, DescriptionBlock::List { items } if items.is_empty()))
        .collect()
}

fn parse_block(block: &str) -> DescriptionBlock {
    if let Some(heading) = block.strip_prefix("## ") {
        return DescriptionBlock::Heading {
            text: heading.trim().to_string(),
        };
    }

    if block.starts_with("- ") {
        let items = block
            .lines()
            .map(|line| {
                let line = line.trim();
                line.strip_prefix('-').unwrap_or(line).trim().to_string()
            })
            .filter(|item| !item.is_empty())
            .collect();
        return DescriptionBlock::List { items };
    }

    DescriptionBlock::Paragraph {
        text: block.to_string(),
    }
}
