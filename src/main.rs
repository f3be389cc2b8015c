use clap::Parser;
use fxjournal::cli::commands::{Cli, Commands};
use fxjournal::cli::view::View;
use fxjournal::domain::entities::trade::RawTradeInput;
use fxjournal::FxJournal;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let backend = std::env::var("FXJOURNAL_BACKEND").unwrap_or_else(|_| "sqlite".into());
    let store_path = std::env::var("FXJOURNAL_STORE").ok();

    let journal = match FxJournal::new(&backend, store_path.as_deref()) {
        Ok(journal) => journal,
        Err(e) => {
            eprintln!("Error opening journal: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(&journal, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(journal: &FxJournal, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let view = View::for_command(&cmd);
    match cmd {
        Commands::Add { json } => {
            let mut input: RawTradeInput = serde_json::from_str(&json)?;
            if input.date.trim().is_empty() {
                input.date = chrono::Local::now().format("%Y-%m-%dT%H:%M").to_string();
            }
            let trade = journal.add_trade(&input)?;
            eprintln!("Saved trade {}", trade.id);
            render(journal, view.after_submit(), None)
        }
        Commands::Delete { id } => {
            journal.delete_trade(&id)?;
            eprintln!("Deleted trade {id}");
            render(journal, view, None)
        }
        Commands::History { limit } => render(journal, view, limit),
        Commands::Dashboard | Commands::Analytics => render(journal, view, None),
    }
}

fn render(
    journal: &FxJournal,
    view: View,
    limit: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let out = match view {
        View::Dashboard => serde_json::to_string_pretty(&journal.dashboard())?,
        View::History => serde_json::to_string_pretty(&journal.trades(limit))?,
        View::Analytics => serde_json::to_string_pretty(&journal.analytics_report())?,
        View::NewTrade => return Ok(()),
    };
    println!("{out}");
    Ok(())
}
