//! CLI probe for the news feed engine.
//!
//! # Responsibility
//! - Apply filters from the command line to a fresh feed session.
//! - Print the same summary/cards/empty-state the UI renders.

use clap::Parser;
use newsfeed_core::display::{EMPTY_STATE_HINT, EMPTY_STATE_TITLE, RESET_FILTERS_LABEL};
use newsfeed_core::{init_logging, Catalog, FeedConfig, FeedSession, FeedView};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "newsfeed", version, about = "Browse the built-in news catalog")]
struct Cli {
    /// Category name; the all-category label or `all` disables the filter.
    #[arg(long, short)]
    category: Option<String>,

    /// Date window: all|today|week|month.
    #[arg(long, short)]
    date: Option<String>,

    /// Tag to select; repeat for several (any-of match).
    #[arg(long = "tag", short)]
    tags: Vec<String>,

    /// Reference date (YYYY-MM-DD) or `today`; defaults to the catalog's.
    #[arg(long, env = "NEWSFEED_REFERENCE_DATE")]
    reference_date: Option<String>,

    /// List categories, date windows and the tag vocabulary, then exit.
    #[arg(long)]
    options: bool,

    /// Absolute directory for rolling file logs.
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level used with --log-dir.
    #[arg(long, default_value_t = newsfeed_core::default_log_level().to_string())]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("newsfeed: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(cli.log_level.as_str(), log_dir)?;
    }

    let catalog = Catalog::builtin().map_err(|err| err.to_string())?;
    let config = FeedConfig::from_catalog(&catalog)
        .with_reference_override(cli.reference_date.as_deref())
        .map_err(|err| err.to_string())?;

    if cli.options {
        print_options(&catalog);
        return Ok(());
    }

    let mut session = FeedSession::new(catalog, config);
    if let Some(category) = cli.category.as_deref() {
        session.set_category(category);
    }
    if let Some(date) = cli.date.as_deref() {
        session.set_date_filter(date);
    }
    for tag in &cli.tags {
        if !session.state().tags.contains(tag) {
            session.toggle_tag(tag);
        }
    }

    print_view(&session.view());
    Ok(())
}

fn print_options(catalog: &Catalog) {
    println!("categories: {}", catalog.category_options().join(", "));
    let windows = catalog
        .date_filters()
        .iter()
        .map(|option| format!("{} ({})", option.window.as_str(), option.label))
        .collect::<Vec<_>>();
    println!("date filters: {}", windows.join(", "));
    println!("tags: {}", catalog.all_tags().join(", "));
}

fn print_view(view: &FeedView) {
    println!(
        "category={} date={} reference_date={}",
        view.selected_category,
        view.selected_date_filter.as_str(),
        view.reference_date
    );
    println!("{}", view.summary);

    if view.is_empty {
        println!();
        println!("{EMPTY_STATE_TITLE}");
        println!("{EMPTY_STATE_HINT}");
        println!("[{RESET_FILTERS_LABEL}]");
        return;
    }

    for item in &view.items {
        println!();
        println!("#{} [{}] {}", item.id, item.category, item.title);
        println!("  {}", item.date_label);
        println!("  {}", item.description);
        println!("  tags: {}", item.tags.join(", "));
    }
}
