//! Command-line front end: run the row appender against an in-memory page
//! and print the rows it produced.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};

use crate::appender::RowAppender;
use crate::count::FormCount;
use crate::error::FormsetError;
use crate::naming::{DIAGNOSTICOS, Prefix, management_form_html};
use crate::page::{BindingIds, MemoryDocument};
use crate::row::RowTemplate;

/// Render the rows a form-set "add" button would append.
#[derive(Parser, Debug)]
#[command(name = "formset-rows", version)]
pub struct Cli {
    /// Form-set prefix used in every field name
    #[arg(long, default_value = DIAGNOSTICOS)]
    pub prefix: String,

    /// Id of the add button on the page
    #[arg(long, default_value = "add-diagnostico")]
    pub trigger: String,

    /// Starting TOTAL_FORMS text (taken verbatim, like the page field)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub initial: String,

    /// Number of add clicks to simulate
    #[arg(long, default_value_t = 1)]
    pub adds: usize,

    /// Prepend the management form reflecting the final counter
    #[arg(long)]
    pub management: bool,

    /// INITIAL_FORMS value for the management form
    #[arg(long, default_value_t = 0)]
    pub initial_forms: u32,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default `tracing` filter directive for the chosen verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// What one CLI run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub html: String,
    pub indices: Vec<FormCount>,
    pub total_forms: String,
}

pub fn run(cli: &Cli) -> Result<RunReport, FormsetError> {
    let prefix = Prefix::new(cli.prefix.as_str())?;
    let ids = BindingIds::for_prefix(&prefix, cli.trigger.as_str());
    let mut page = MemoryDocument::with_bindings(&ids, cli.initial.as_str());

    let indices = {
        let host = page.bind(&ids)?;
        RowAppender::new(host, RowTemplate::new(prefix.clone())).add_rows(cli.adds)?
    };

    let total_forms = page
        .input_value(&ids.total_forms)
        .unwrap_or_default()
        .to_string();

    let mut parts = Vec::new();
    if cli.management {
        parts.push(management_form_html(&prefix, &total_forms, cli.initial_forms));
    }
    parts.extend(
        page.rows(&ids.container)
            .unwrap_or_default()
            .iter()
            .map(|row| row.to_html()),
    );

    tracing::info!(%prefix, rows = indices.len(), total_forms = %total_forms, "render complete");

    Ok(RunReport {
        html: parts.join("\n"),
        indices,
        total_forms,
    })
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_output(path: &Path, contents: &str) -> Result<(), FormsetError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| FormsetError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| FormsetError::Io {
        path: path.to_path_buf(),
        source,
    })
}
