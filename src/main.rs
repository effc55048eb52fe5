//! # folio CLI

use std::env;

use clap::Parser;

use crate::cli::Commands;

mod cli;

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let mut args: Vec<String> = vec![];
    env::args().for_each(|arg| {
        if let Some(at_stripped) = arg.strip_prefix('@') {
            args.push("--search".to_string());
            args.push(at_stripped.to_string());
        } else {
            args.push(arg);
        }
    });

    let cli = Cli::parse_from(args);

    folio::init().await;

    match &cli.command {
        Commands::Check(cmd) => {
            cmd.exec().await;
        }
        Commands::Config(cmd) => {
            cmd.exec().await;
        }
        Commands::Contact(cmd) => {
            cmd.exec().await;
        }
        Commands::Dividends(cmd) => {
            cmd.exec().await;
        }
        Commands::Experience(cmd) => {
            cmd.exec().await;
        }
        Commands::Profile(cmd) => {
            cmd.exec().await;
        }
        Commands::Projects(cmd) => {
            cmd.exec().await;
        }
        Commands::Show(cmd) => {
            cmd.exec().await;
        }
    }
}
