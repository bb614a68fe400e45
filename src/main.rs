//! Binary entry point for promptvault.
//!
//! This binary is a thin dispatcher: each subcommand maps onto one record
//! store operation, plus console rendering of the result.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print macros in the main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use promptvault::cli::{self, render_detail, render_table};
use promptvault::{
    Error, ImportOptions, NewPrompt, PromptFilter, PromptPatch, PromptStore, export_to_file,
    import_from_file,
};
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;

/// Promptvault - save, organize, and reuse your best AI prompts.
#[derive(Parser)]
#[command(name = "promptvault")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the vault.
    Init,

    /// Add a new prompt.
    Add {
        /// Prompt name.
        name: String,

        /// Prompt content (or use --file).
        content: Option<String>,

        /// Category.
        #[arg(short, long, default_value = "general")]
        category: String,

        /// Comma-separated tags.
        #[arg(short, long)]
        tags: Option<String>,

        /// Description.
        #[arg(short, long, default_value = "")]
        description: String,

        /// Read content from a file.
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Retrieve a prompt for use (counts the use, copies to clipboard).
    Use {
        /// Prompt name or id.
        name: String,

        /// Don't copy to the clipboard.
        #[arg(long)]
        no_copy: bool,
    },

    /// Show a prompt without counting a use.
    Get {
        /// Prompt name or id.
        name: String,
    },

    /// List prompts.
    List {
        /// Filter by category.
        #[arg(short, long)]
        category: Option<String>,

        /// Filter by tag.
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Search prompts by name, content, or description.
    Search {
        /// Search query.
        query: String,
    },

    /// Delete a prompt.
    Delete {
        /// Prompt name or id.
        name: String,

        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },

    /// Update a prompt.
    Update {
        /// Prompt name or id.
        name: String,

        /// New category.
        #[arg(short, long)]
        category: Option<String>,

        /// New comma-separated tags (pass "" to clear).
        #[arg(short, long)]
        tags: Option<String>,

        /// New name.
        #[arg(short = 'n', long)]
        new_name: Option<String>,

        /// Read new content from a file.
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Export prompts to a JSON file.
    Export {
        /// Output file path.
        file: PathBuf,

        /// Export only this category.
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Import prompts from a JSON file.
    Import {
        /// Input file path.
        file: PathBuf,

        /// Overwrite existing prompts with the same name.
        #[arg(long)]
        overwrite: bool,
    },

    /// List configured categories with prompt counts.
    Categories,

    /// Show vault statistics.
    Stats,

    /// Guided prompt creation.
    Interactive,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\u{2717} {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(command: Commands) -> promptvault::Result<ExitCode> {
    let store = PromptStore::open_default()?;

    match command {
        Commands::Init => cmd_init(&store),
        Commands::Add {
            name,
            content,
            category,
            tags,
            description,
            file,
        } => cmd_add(&store, name, content, category, tags, description, file),
        Commands::Use { name, no_copy } => cmd_use(&store, &name, no_copy),
        Commands::Get { name } => {
            let prompt = store.get(&name)?;
            println!("{}", render_detail(&prompt));
            Ok(ExitCode::SUCCESS)
        }
        Commands::List { category, tag } => {
            let mut filter = PromptFilter::new();
            if let Some(category) = category {
                filter = filter.with_category(category);
            }
            if let Some(tag) = tag {
                filter = filter.with_tag(tag);
            }
            println!("{}", render_table(&store.list(&filter)?));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Search { query } => {
            let found = store.list(&PromptFilter::new().with_search(query))?;
            println!("{}", render_table(&found));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Delete { name, yes } => cmd_delete(&store, &name, yes),
        Commands::Update {
            name,
            category,
            tags,
            new_name,
            file,
        } => cmd_update(&store, &name, category, tags, new_name, file),
        Commands::Export { file, category } => {
            let result = export_to_file(&store, &file, category.as_deref())?;
            println!(
                "\u{2713} Exported {} prompts to {}",
                result.exported,
                result.path.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Commands::Import { file, overwrite } => {
            let result = import_from_file(
                &store,
                &file,
                ImportOptions::new().with_overwrite(overwrite),
            )?;
            println!(
                "\u{2713} Imported {} prompts ({} skipped)",
                result.imported, result.skipped
            );
            Ok(ExitCode::SUCCESS)
        }
        Commands::Categories => cmd_categories(&store),
        Commands::Stats => cmd_stats(&store),
        Commands::Interactive => {
            let mut stdin = std::io::stdin().lock();
            let prompt = cli::run_interactive_add(&store, &mut stdin)?;
            println!(
                "\u{2713} Added prompt '{}' [{}]",
                prompt.name, prompt.category
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn cmd_init(store: &PromptStore) -> promptvault::Result<ExitCode> {
    let outcome = store.storage().ensure_initialized()?;
    if outcome.created_vault {
        println!(
            "\u{2713} Created vault at {}",
            store.storage().vault_path().display()
        );
    }
    if outcome.created_config {
        println!(
            "\u{2713} Created config at {}",
            store.storage().config_path().display()
        );
    }
    println!("\u{2713} Vault initialized!");
    Ok(ExitCode::SUCCESS)
}

fn cmd_add(
    store: &PromptStore,
    name: String,
    content: Option<String>,
    category: String,
    tags: Option<String>,
    description: String,
    file: Option<PathBuf>,
) -> promptvault::Result<ExitCode> {
    let content = match file {
        Some(path) => std::fs::read_to_string(&path).map_err(|e| {
            Error::MissingRequiredInput(format!("could not read {}: {e}", path.display()))
        })?,
        None => content.unwrap_or_default(),
    };
    if content.is_empty() {
        return Err(Error::MissingRequiredInput(
            "content (pass it inline or with --file FILE)".to_string(),
        ));
    }

    let tags = tags.as_deref().map(cli::parse_tags).unwrap_or_default();
    let prompt = store.add(
        NewPrompt::new(name, content)
            .with_category(category)
            .with_tags(tags)
            .with_description(description),
    )?;
    println!(
        "\u{2713} Added prompt '{}' [{}]",
        prompt.name, prompt.category
    );
    Ok(ExitCode::SUCCESS)
}

fn cmd_use(store: &PromptStore, name: &str, no_copy: bool) -> promptvault::Result<ExitCode> {
    let prompt = store.retrieve_for_use(name)?;

    if !no_copy {
        if cli::clipboard::copy(&prompt.content) {
            println!("\u{2713} Copied '{}' to clipboard!", prompt.name);
        } else {
            println!("(clipboard unavailable; content printed below)");
        }
    }

    println!("\n{}\n", prompt.content);
    Ok(ExitCode::SUCCESS)
}

fn cmd_delete(store: &PromptStore, name: &str, yes: bool) -> promptvault::Result<ExitCode> {
    if !yes {
        print!("Delete '{name}'? [y/N]: ");
        use std::io::Write as _;
        let _ = std::io::stdout().flush();

        let mut answer = String::new();
        let _ = std::io::stdin().lock().read_line(&mut answer);
        if !answer.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled");
            return Ok(ExitCode::SUCCESS);
        }
    }

    let removed = store.delete(name)?;
    println!("\u{2713} Deleted prompt '{}'", removed.name);
    Ok(ExitCode::SUCCESS)
}

fn cmd_update(
    store: &PromptStore,
    name: &str,
    category: Option<String>,
    tags: Option<String>,
    new_name: Option<String>,
    file: Option<PathBuf>,
) -> promptvault::Result<ExitCode> {
    let mut patch = PromptPatch::new();
    if let Some(path) = file {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Error::MissingRequiredInput(format!("could not read {}: {e}", path.display()))
        })?;
        patch = patch.with_content(content);
    }
    if let Some(new_name) = new_name {
        patch = patch.with_name(new_name);
    }
    if let Some(category) = category {
        patch = patch.with_category(category);
    }
    if let Some(tags) = tags {
        patch = patch.with_tags(cli::parse_tags(&tags));
    }

    let updated = store.update(name, patch)?;
    println!("\u{2713} Updated prompt '{}'", updated.name);
    Ok(ExitCode::SUCCESS)
}

fn cmd_categories(store: &PromptStore) -> promptvault::Result<ExitCode> {
    println!("\nCategories:");
    for count in store.categories()? {
        println!("  \u{2022} {} ({} prompts)", count.name, count.prompts);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_stats(store: &PromptStore) -> promptvault::Result<ExitCode> {
    let stats = store.stats()?;

    println!("\nVault Statistics");
    println!("{}", "\u{2500}".repeat(40));
    println!("  Total prompts:  {}", stats.total_prompts);
    println!("  Total uses:     {}", stats.total_uses);
    if let Some((name, uses)) = &stats.most_used {
        println!("  Most used:      {name} ({uses} uses)");
    }
    if !stats.by_category.is_empty() {
        println!("\n  By category:");
        for count in &stats.by_category {
            println!("    {}: {}", count.name, count.prompts);
        }
    }
    Ok(ExitCode::SUCCESS)
}
