use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use apostle_parser::records::{PersonRecord, RoleType};
use apostle_parser::settings::Settings;
use apostle_parser::{parse_document, store, ParsedDocument};

#[derive(Parser)]
#[command(name = "apostle_parser", about = "Extract office-holder records from scraped biographies")]
struct Cli {
    /// Raw text to parse (overrides APOSTLES_INPUT)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the input and write the JSON records (default)
    Parse {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// People overview table
    Overview {
        /// Only people who held this role type (e.g. "First Counselor")
        #[arg(short = 't', long = "type")]
        role_type: Option<String>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
    /// Show parsing statistics
    Stats,
}

fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load().context("Failed to load settings")?;
    if let Some(input) = cli.input {
        settings.input = input;
    }
    init_tracing(&settings.log_filter);

    let t0 = Instant::now();
    let parsed = load(&settings)?;

    match cli.command.unwrap_or(Commands::Parse {
        output: None,
        compact: false,
    }) {
        Commands::Parse { output, compact } => {
            let output = output.or_else(|| settings.output.clone());
            let pretty = settings.pretty && !compact;
            store::write_records(&parsed.people, output.as_deref(), pretty)
                .context("Failed to write records")?;
        }
        Commands::Overview { role_type, limit } => {
            let filter = match role_type.as_deref() {
                Some(name) => Some(
                    RoleType::from_name(name)
                        .with_context(|| format!("Unknown role type '{}'", name))?,
                ),
                None => None,
            };
            print_overview(&parsed.people, filter, limit);
        }
        Commands::Stats => print_stats(&parsed),
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}

fn load(settings: &Settings) -> anyhow::Result<ParsedDocument> {
    let text = store::read_source(&settings.input).context("Failed to read input")?;
    Ok(text.map(|t| parse_document(&t)).unwrap_or_default())
}

fn print_overview(people: &[PersonRecord], filter: Option<RoleType>, limit: usize) {
    let rows: Vec<&PersonRecord> = people
        .iter()
        .filter(|p| filter.map_or(true, |kind| p.held(kind)))
        .take(limit)
        .collect();
    if rows.is_empty() {
        println!("No people found.");
        return;
    }

    println!(
        "{:>3} | {:<28} | {:<10} | {:<10} | {:>5} | {:<16}",
        "#", "Name", "Ordained", "Died", "Roles", "Latest role"
    );
    println!("{}", "-".repeat(88));

    for (i, p) in rows.iter().enumerate() {
        let latest = p.latest_role().map(|r| r.kind.as_str()).unwrap_or("-");
        println!(
            "{:>3} | {:<28} | {:<10} | {:<10} | {:>5} | {:<16}",
            i + 1,
            truncate(&p.name, 28),
            p.ordination_date.as_deref().unwrap_or("-"),
            p.death_date.as_deref().unwrap_or("-"),
            p.roles.len(),
            latest
        );
    }

    println!("\n{} people | id: <slug>", rows.len());
}

fn print_stats(parsed: &ParsedDocument) {
    let c = &parsed.counts;
    println!("Blocks:      {}", c.blocks);
    println!("People:      {}", c.people);
    println!("No roles:    {}", c.dropped_no_roles);
    println!("Implausible: {}", c.dropped_implausible);
    println!("Links:       {}", c.links);
    println!("Roles:       {}", c.total_roles());
    for kind in RoleType::ALL {
        println!("  {:<17}{}", format!("{}:", kind), c.roles.get(&kind).copied().unwrap_or(0));
    }
    if !c.duplicate_ids.is_empty() {
        println!("Duplicate ids: {}", c.duplicate_ids.join(", "));
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
