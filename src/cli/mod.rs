//! CLI support code.
//!
//! The binary in `main.rs` is a thin dispatcher: it parses arguments and
//! maps each command onto one record-store operation. The helpers here are
//! the presentation pieces around that dispatch.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `init` | Initialize the vault |
//! | `add` | Add a new prompt |
//! | `use` | Retrieve a prompt for use (counts the use, copies to clipboard) |
//! | `get` | Show a prompt without counting a use |
//! | `list` | List prompts with optional category/tag filters |
//! | `search` | Full-text search across name, content, and description |
//! | `delete` | Delete a prompt |
//! | `update` | Update fields of an existing prompt |
//! | `export` | Export prompts to a JSON file |
//! | `import` | Import prompts from a JSON file |
//! | `categories` | List configured categories with counts |
//! | `stats` | Show vault statistics |
//! | `interactive` | Guided prompt creation |

pub mod clipboard;
mod interactive;
mod render;

pub use interactive::run_interactive_add;
pub use render::{render_detail, render_table};

/// Splits a comma-separated tag string into trimmed, non-empty tags.
///
/// An empty input yields an empty list, which on update means "clear the
/// tags" rather than "leave them alone"; that distinction is carried by
/// whether the flag was supplied at all.
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}
