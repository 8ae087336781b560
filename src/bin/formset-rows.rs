//! CLI tool to render form-set rows as an "add" button would append them.
//!
//! Usage:
//!   formset-rows --initial 2 --adds 3
//!   formset-rows --prefix plans --trigger add-plan --management -o rows.html

use clap::Parser;
use formset_rows::cli::{Cli, run, write_output};
use std::io::{self, Write};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let report = match run(&cli) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if let Some(out_path) = &cli.output {
        if let Err(e) = write_output(out_path, &report.html) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    } else {
        let mut stdout = io::stdout();
        if let Err(e) = writeln!(stdout, "{}", report.html) {
            eprintln!("Error writing output: {e}");
            process::exit(1);
        }
    }

    eprintln!(
        "Appended {} row(s), TOTAL_FORMS = {}",
        report.indices.len(),
        report.total_forms
    );
}
