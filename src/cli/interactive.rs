//! Guided prompt creation.

// Interactive flows talk to the terminal directly.
#![allow(clippy::print_stdout)]

use crate::cli::parse_tags;
use crate::models::Prompt;
use crate::services::{NewPrompt, PromptStore};
use crate::{Error, Result};
use std::io::{BufRead, Write};

/// Line that terminates multi-line content entry.
const CONTENT_TERMINATOR: &str = "---";

fn ask<R: BufRead>(input: &mut R, label: &str) -> Result<String> {
    print!("{label}");
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| Error::MissingRequiredInput(format!("could not read input: {e}")))?;
    Ok(line.trim().to_string())
}

/// Runs the interactive add flow, reading answers from `input`.
///
/// Asks for name, category (defaulting to the configured default), tags,
/// description, and multi-line content terminated by a line containing only
/// `---`. The reader is injected so tests can drive the flow from a string.
pub fn run_interactive_add<R: BufRead>(store: &PromptStore, input: &mut R) -> Result<Prompt> {
    println!("\nAdd New Prompt");
    println!("{}", "\u{2500}".repeat(40));

    let name = ask(input, "Name: ")?;
    if name.is_empty() {
        return Err(Error::MissingRequiredInput("name".to_string()));
    }

    let config = store.storage().load_config()?;
    println!("Categories: {}", config.categories.join(", "));
    let mut category = ask(input, &format!("Category [{}]: ", config.default_category))?;
    if category.is_empty() {
        category = config.default_category;
    }

    let tags = parse_tags(&ask(input, "Tags (comma-separated): ")?);
    let description = ask(input, "Description (optional): ")?;

    println!("\nEnter prompt content (end with a line containing only '{CONTENT_TERMINATOR}'):");
    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| Error::MissingRequiredInput(format!("could not read input: {e}")))?;
        if read == 0 || line.trim() == CONTENT_TERMINATOR {
            break;
        }
        lines.push(line.trim_end_matches(['\r', '\n']).to_string());
    }
    let content = lines.join("\n");
    if content.is_empty() {
        return Err(Error::MissingRequiredInput("content".to_string()));
    }

    store.add(
        NewPrompt::new(name, content)
            .with_category(category)
            .with_tags(tags)
            .with_description(description),
    )
}
