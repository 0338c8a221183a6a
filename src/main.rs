use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use geocat::catalog::{Catalog, CatalogView};
use geocat::cli::Cli;
use geocat::cli::commands::Commands;
use geocat::config::Config;
use geocat::content::{self, Announcement};
use geocat::submit::{ContactMessage, HttpSubmitter, SubmissionPayload, Submitter, ToolProposal};
use geocat::tui;

fn setup_logging(level: Option<&str>) -> Result<()> {
    // Logs go to a file; the terminal belongs to the TUI
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("geocat")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("geocat.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level
        && std::env::var("RUST_LOG").is_err()
    {
        builder.parse_filters(level);
    }
    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => {
            // Default: launch TUI mode
            run_tui(config).await
        }
        Some(Commands::List { query, tag, limit, all }) => {
            handle_list(query.as_deref(), tag.as_deref(), *limit, *all, config)
        }
        Some(Commands::Tags) => handle_tags(config),
        Some(Commands::Show { name }) => handle_show(name, config),
        Some(Commands::Contact { name, email, message }) => {
            let payload = SubmissionPayload::Contact(ContactMessage::new(name, email, message));
            send_payload(payload, config, cli.is_verbose()).await
        }
        Some(Commands::Submit {
            name,
            link,
            description,
            tags,
            submitter,
            email,
        }) => {
            let mut proposal = ToolProposal::new(name, link);
            proposal.description = description.clone().unwrap_or_default();
            proposal.tags = tags.clone();
            proposal.submitter = submitter.clone();
            proposal.email = email.clone();
            send_payload(SubmissionPayload::Proposal(proposal), config, cli.is_verbose()).await
        }
    }
}

async fn run_tui(config: &Config) -> Result<()> {
    info!("Launching TUI mode");

    let catalog = Catalog::load(&config.data)?;
    let announcement = Announcement::load(&config.data)?;
    let contributors = content::load_contributors(&config.data)?;

    let view = CatalogView::with_page_size(catalog.into_tools(), config.catalog.page_size);
    let app = tui::App::new(view, announcement, contributors);
    let submitter: Arc<dyn Submitter> = Arc::new(HttpSubmitter::new(&config.submit)?);

    let terminal = tui::init_terminal()?;
    let mut runner = tui::TuiRunner::new(terminal, app, submitter, config.tui.tick_rate_ms);
    let result = runner.run().await;

    // Leave the terminal usable even when the loop errored
    tui::restore_terminal()?;
    result
}

fn handle_list(
    query: Option<&str>,
    tag: Option<&str>,
    limit: Option<usize>,
    all: bool,
    config: &Config,
) -> Result<()> {
    info!("Listing tools - query: {:?}, tag: {:?}", query, tag);

    let catalog = Catalog::load(&config.data)?;
    let mut view = CatalogView::with_page_size(catalog.into_tools(), config.catalog.page_size);
    if let Some(q) = query {
        view.set_query(q.to_string());
    }
    if let Some(t) = tag {
        view.select_tag(Some(t.to_string()));
    }

    let filtered = view.filtered();
    let shown = if all {
        filtered.len()
    } else {
        limit.unwrap_or(view.page_size()).min(filtered.len())
    };

    for tool in filtered.iter().take(shown) {
        let stars = tool.stars.map(|s| format!(" ★{}", s)).unwrap_or_default();
        println!(
            "{} {}{}  {}",
            tool.icon,
            tool.name.bold(),
            stars.yellow(),
            tool.tags.join(", ").dimmed()
        );
    }

    println!(
        "{}",
        format!("Showing {} of {} tools", shown, filtered.len()).dimmed()
    );
    Ok(())
}

fn handle_tags(config: &Config) -> Result<()> {
    info!("Listing tag vocabulary");

    let catalog = Catalog::load(&config.data)?;
    let mut view = CatalogView::new(catalog.into_tools());

    for tag in view.tags().to_vec() {
        view.select_tag(Some(tag.clone()));
        println!("{}  {}", tag.magenta(), view.filtered_len().to_string().dimmed());
    }
    Ok(())
}

fn handle_show(name: &str, config: &Config) -> Result<()> {
    info!("Showing tool: {}", name);

    let catalog = Catalog::load(&config.data)?;
    let Some(tool) = catalog.find(name) else {
        eyre::bail!("No tool named '{}' in the catalogue (try `geocat list`)", name);
    };

    println!("{} {}", tool.icon, tool.name.bold());
    println!("  {}", tool.link.cyan());
    if !tool.category.is_empty() {
        println!("  Category: {}", tool.category);
    }
    if let Some(stars) = tool.stars {
        println!("  Stars: {}", stars.to_string().yellow());
    }
    if !tool.tags.is_empty() {
        println!("  Tags: {}", tool.tags.join(", ").magenta());
    }
    if !tool.description.is_empty() {
        println!("\n  {}", tool.description);
    }
    Ok(())
}

async fn send_payload(payload: SubmissionPayload, config: &Config, verbose: bool) -> Result<()> {
    info!("Sending {} payload", payload.kind());

    if verbose {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }

    let submitter = HttpSubmitter::new(&config.submit)?;
    submitter.submit(&payload).await?;

    let confirmation = match payload {
        SubmissionPayload::Contact(_) => "Message sent.",
        SubmissionPayload::Proposal(_) => "Proposal submitted for review.",
    };
    println!("{}", confirmation.green());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
