// taskmind - quick capture, recurring dates and suggestions for your todo list
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use anyhow::Context as _;
use chrono::{Local, NaiveDate, Utc};
use std::env;
use taskmind_lib::{
    capture::{self, render_preview},
    intelligence::SuggestionEngine,
    logging::{init_logging, DEFAULT_LEVEL},
    model::AnalysisContext,
    recurrence::{self, occurrences},
    Config, Result, TaskmindError,
};

const DEFAULT_OCCURRENCES: usize = 1;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Grab whatever the user typed
    let mut args: Vec<String> = env::args().collect();

    let verbose = take_flag(&mut args, "--verbose");

    let config = Config::load_default().context("failed to load config")?;
    let level = if verbose {
        "debug"
    } else {
        config.log_level.as_deref().unwrap_or(DEFAULT_LEVEL)
    };
    let _logger = init_logging(level)?;

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let command = args[1].clone();

    let result = match command.as_str() {
        "parse" => handle_parse(&args[2..]),
        "next" => handle_next(&args[2..]),
        "suggest" => handle_suggest(&args[2..], &config).await,
        "version" | "-v" | "--version" => {
            println!("taskmind v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("✗ {}", e.user_message());
        std::process::exit(1);
    }

    Ok(())
}

/// Remove `flag` from args, reporting whether it was there
fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}

fn handle_parse(args: &[String]) -> Result<()> {
    let json = args.iter().any(|a| a == "--json");
    let text = args
        .iter()
        .filter(|a| a.as_str() != "--json")
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    if text.trim().is_empty() {
        eprintln!("Error: Nothing to parse");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let parsed = capture::parse(&text, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    let title = if parsed.has_title() {
        parsed.title.as_str()
    } else {
        "(empty)"
    };
    println!("Title:   {}", title);

    let preview = render_preview(&parsed);
    if !preview.is_empty() {
        println!("Parsed:  {}", preview);
    }

    Ok(())
}

fn handle_next(args: &[String]) -> Result<()> {
    let mut positional = Vec::new();
    let mut count = DEFAULT_OCCURRENCES;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--count" => {
                i += 1;
                if let Some(n) = args.get(i).and_then(|s| s.parse().ok()) {
                    count = n;
                }
            }
            arg => positional.push(arg.to_string()),
        }
        i += 1;
    }

    let (date, rule_text) = match positional.as_slice() {
        [date, rest @ ..] if !rest.is_empty() => (date, rest.join(" ")),
        _ => {
            eprintln!("Usage: taskmind next <YYYY-MM-DD> <rule-json> [--count N]");
            return Ok(());
        }
    };

    let anchor = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| TaskmindError::InvalidDate(date.to_string()))?;
    let rule = recurrence::parse_rule(&rule_text)
        .ok_or_else(|| TaskmindError::InvalidRule(rule_text.clone()))?;

    println!("Repeats {}", rule);
    for date in occurrences(anchor, &rule).take(count) {
        println!("  {}", date.format("%a %Y-%m-%d"));
    }

    Ok(())
}

async fn handle_suggest(args: &[String], config: &Config) -> Result<()> {
    let json = args.iter().any(|a| a == "--json");
    let path = match args.iter().find(|a| a.as_str() != "--json") {
        Some(path) => path,
        None => {
            eprintln!("Usage: taskmind suggest <snapshot.json> [--json]");
            return Ok(());
        }
    };

    let text = tokio::fs::read_to_string(path).await?;
    let snapshot: AnalysisContext = serde_json::from_str(&text)
        .map_err(|e| TaskmindError::InvalidSnapshot(format!("{}: {}", path, e)))?;

    let engine = SuggestionEngine::with_config(config.suggestions.clone());
    let suggestions = engine.generate(&snapshot, Utc::now());

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("No suggestions right now. Your list looks tidy!");
        return Ok(());
    }

    println!("{}", "=".repeat(60));
    println!("Suggestions");
    println!("{}", "=".repeat(60));

    for (i, suggestion) in suggestions.iter().enumerate() {
        println!("\n{}. [{}] {}", i + 1, suggestion.suggestion_type, suggestion.content);
        println!("   {}", suggestion.reasoning);
    }

    println!("\n{}", "=".repeat(60));

    Ok(())
}

fn print_usage() {
    println!(
        r#"taskmind v{} - Smarter quick capture for your task list

USAGE:
    taskmind [--verbose] <COMMAND> [OPTIONS]

COMMANDS:
    parse <text> [--json]                  Parse a quick-capture line
    next <date> <rule> [--count N]         Show upcoming dates for a recurrence rule
    suggest <snapshot.json> [--json]       Suggest changes for a task snapshot
    version                                Show version
    help                                   Show this help

EXAMPLES:
    taskmind parse "Call mom tomorrow at 5pm !high @phone"
    taskmind next 2026-01-31 '{{"frequency":"monthly"}}' --count 4
    taskmind next 2026-03-02 '{{"frequency":"weekly","daysOfWeek":[1,3,5]}}'
    taskmind suggest tasks.json

CONFIG:
    ~/.taskmind/config.toml (optional). RUST_LOG overrides the log level.
"#,
        env!("CARGO_PKG_VERSION")
    );
}
