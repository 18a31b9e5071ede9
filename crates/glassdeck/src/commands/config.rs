use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> anyhow::Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();

    println!("{}", "Configuration".bold());
    println!("  {} {}", "path:".dimmed(), path.display());
    println!();

    let defaults = config.defaults.unwrap_or_default();
    print_entry("defaults.theme", defaults.theme.as_deref(), "warm");
    print_entry(
        "defaults.start_slide",
        defaults.start_slide.map(|s| s.to_string()).as_deref(),
        "1",
    );
    print_entry(
        "defaults.show_hint",
        defaults.show_hint.map(|b| b.to_string()).as_deref(),
        "true",
    );
    Ok(())
}

fn print_entry(key: &str, value: Option<&str>, default: &str) {
    match value {
        Some(v) => println!("  {} {}", format!("{key}:").cyan(), v),
        None => println!(
            "  {} {} {}",
            format!("{key}:").cyan(),
            default.dimmed(),
            "(default)".dimmed()
        ),
    }
}

fn set(key: &str, value: &str) -> anyhow::Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!(
        "{} {key} = {value}",
        "Saved".green().bold()
    );
    println!("  {} {}", "->".dimmed(), path.display());
    Ok(())
}
