use std::io::Read as _;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser as _;
use phasetime::cli::Cli;
use phasetime::config::Config;
use phasetime::parser::collect_units;
use phasetime::report::{render_units, render_units_diff};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;

    let report = match &cli.path2 {
        None => {
            let input = read_input(&cli.path)?;
            render_units(&config, &collect_units(&config, &input))
        }
        Some(path2) => {
            if cli.path == "-" && path2 == "-" {
                bail!("only one input may come from stdin");
            }
            let first = collect_units(&config, &read_input(&cli.path)?);
            let second = collect_units(&config, &read_input(path2)?);
            render_units_diff(&config, &first, &second)
        }
    };

    print!("{report}");
    Ok(())
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read log file '{path}'"))
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    if verbose {
        builder.filter_module("phasetime", log::LevelFilter::Debug);
    }
    builder.init();
}
