use clap::Parser;
use colored::Colorize;

mod app;
mod cli;
mod commands;
mod config;
mod deck;
mod nav;
mod render;
mod theme;

fn main() {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = cli.run() {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}
