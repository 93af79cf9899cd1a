//! classdivider: divide a class of students into groups.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use classdivider::config;
use classdivider::env;
use classdivider::logging;
use classdivider::models;
use classdivider::roster;

use std::process;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use cli::args::Cli;
use config::Config;
use env::Env;
use models::NameIndex;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();

    logging::init(&env, cli.verbose);

    let work_dir = std::env::current_dir().ok();
    let config = Config::load(work_dir.as_deref(), &env).context("failed to load configuration")?;

    let students = roster::read_students(&cli.students_file).map_err(|e| {
        anyhow!(
            "Unable to open or read students file '{}': {}.",
            cli.students_file.display(),
            e.reason()
        )
    })?;

    let partitioner = cli.partitioner(&config).map_err(|e| anyhow!("{e}"))?;

    if let Err(e) = partitioner.check(students.len()) {
        tracing::debug!(error = %e, "division rejected");
        return Err(anyhow!(
            "Unable to divide a class of {} into groups of {}+/-{} students.",
            students.len(),
            partitioner.group_size(),
            partitioner.deviation(),
        ));
    }

    let partition = partitioner.divide(&students);
    let names = NameIndex::from_students(&students);

    let format = cli.resolved_format(&config);
    print!("{}", format.render(&partition, &names));

    if !cli.quiet {
        cli::print_summary(&partition, &names);
    }

    Ok(())
}
