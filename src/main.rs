use anyhow::Result;
use buildfix::cli::{Cli, Commands};
use buildfix::{BuildfixContext, commands};
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, generate};
use colored::Colorize;
use std::io;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "Error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Fix {
            root,
            from,
            to,
            exclude,
        } => {
            let ctx = BuildfixContext::new()?;
            commands::fix::execute(&ctx, root.as_deref(), from.as_deref(), to.as_deref(), &exclude)?;
        }
        Commands::List { root, suffix } => {
            let ctx = BuildfixContext::new()?;
            commands::list::execute(&ctx, root.as_deref(), &suffix)?;
        }
        Commands::Config {
            key,
            value,
            unset,
            list,
        } => {
            let mut ctx = BuildfixContext::new()?;
            commands::config::execute(&mut ctx, key.as_deref(), value, unset, list)?;
        }
        Commands::Completion { shell } => {
            print_completions(shell, &mut Cli::command());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("buildfix=debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_completions<G: Generator>(g: G, cmd: &mut clap::Command) {
    generate(g, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
