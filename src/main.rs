use chrono::NaiveDate;
use clap::Parser;
use moodlog::application::{
    init::init, list_entries, show_calendar, show_stats, ConfigService, LogMoodService,
    ShowEntryService,
};
use moodlog::cli::{
    format_calendar, format_entry_line, format_entry_list, format_mood_scale, format_show,
    format_stats, Cli, Commands,
};
use moodlog::error::MoodlogError;
use moodlog::infrastructure::FileSystemStore;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Log { mood, time_ref }) => {
            let store = FileSystemStore::discover()?;
            let config = store.load_config()?;
            let service = LogMoodService::new(store);

            let outcome = service.execute(&mood, time_ref.as_deref())?;
            println!(
                "Logged {}",
                format_entry_line(&outcome.entry, config.emoji)
            );
            if let Some(previous) = outcome.replaced {
                println!("Replaced earlier mood: {}", previous);
            }
            Ok(())
        }
        Some(Commands::Show { time_ref }) => {
            let store = FileSystemStore::discover()?;
            let config = store.load_config()?;
            let service = ShowEntryService::new(store);

            let (date, entry) = service.execute(time_ref.as_deref())?;
            println!("{}", format_show(date, entry.as_ref(), config.emoji));
            Ok(())
        }
        Some(Commands::List { from, to, limit }) => {
            let store = FileSystemStore::discover()?;
            let config = store.load_config()?;

            let from = from.as_deref().map(parse_date_arg).transpose()?;
            let to = to.as_deref().map(parse_date_arg).transpose()?;

            let entries = list_entries(&store, from, to, limit)?;
            println!(
                "{}",
                format_entry_list(&entries, config.emoji).trim_end_matches('\n')
            );
            Ok(())
        }
        Some(Commands::Stats) => {
            let store = FileSystemStore::discover()?;
            let config = store.load_config()?;

            let stats = show_stats(&store)?;
            println!("{}", format_stats(&stats, config.emoji).trim_end_matches('\n'));
            Ok(())
        }
        Some(Commands::Calendar { month }) => {
            let store = FileSystemStore::discover()?;
            let config = store.load_config()?;

            let grid = show_calendar(&store, &config, month.as_deref())?;
            print!("{}", format_calendar(&grid, config.emoji));
            println!();
            println!("{}", format_mood_scale(config.emoji));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let store = FileSystemStore::discover()?;
            let service = ConfigService::new(store);

            if list {
                let config = service.list()?;
                println!(
                    "week_start = {}",
                    format!("{:?}", config.week_start).to_lowercase()
                );
                println!("emoji = {}", config.emoji);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: week_start, emoji, created");
                Ok(())
            }
        }
        None => {
            println!("moodlog - Terminal mood journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Parse a YYYY-MM-DD command-line date argument
fn parse_date_arg(s: &str) -> Result<NaiveDate, MoodlogError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| MoodlogError::Config(format!("Invalid date format: '{}'", s)))
}
