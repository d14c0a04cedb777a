//! Command-line surface: argument parsing and the one-shot commands.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use crate::api::EntriesApi;
use crate::catalog::{Entry, EntryId, EntryInput, EntryType};
use crate::list::{EntryList, Saved};
use crate::ui::table::{format_budget, format_duration};

#[derive(Parser, Debug)]
#[command(name = "favreel", version, about = "Browse and manage your favorite movies and TV shows")]
pub struct Cli {
    /// Path to the config file (default: ~/.config/favreel/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding FAVREEL_API_URL and the config file
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Interactive table (default)
    Browse,
    /// Print entries
    List {
        /// Entries per request
        #[arg(long, value_name = "N")]
        limit: Option<u32>,
        /// Follow the cursor until every entry is loaded
        #[arg(long)]
        all: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Create an entry
    Add(EntryArgs),
    /// Replace an entry (every field is sent)
    Update {
        id: i64,
        #[command(flatten)]
        entry: EntryArgs,
    },
    /// Delete an entry
    Delete { id: i64 },
}

impl Command {
    /// Page size for this command: `list --limit` wins over `default`.
    pub fn page_size(&self, default: u32) -> u32 {
        match self {
            Command::List { limit: Some(limit), .. } => *limit,
            _ => default,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindArg {
    #[default]
    Movie,
    TvShow,
}

impl From<KindArg> for EntryType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Movie => EntryType::Movie,
            KindArg::TvShow => EntryType::TvShow,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct EntryArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long = "type", value_enum, default_value_t = KindArg::Movie)]
    pub kind: KindArg,
    #[arg(long)]
    pub director: Option<String>,
    #[arg(long)]
    pub budget: Option<f64>,
    #[arg(long)]
    pub location: Option<String>,
    /// Runtime in minutes
    #[arg(long)]
    pub duration: Option<f64>,
    /// Release year or airing period, e.g. "2010" or "2008-2013"
    #[arg(long)]
    pub year_time: Option<String>,
    #[arg(long)]
    pub poster_url: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl EntryArgs {
    /// Blank text flags are sent as null, like empty form fields.
    pub fn to_input(&self) -> EntryInput {
        let text = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        EntryInput {
            title: self.title.trim().to_string(),
            kind: self.kind.into(),
            director: text(&self.director),
            budget: self.budget,
            location: text(&self.location),
            duration: self.duration,
            year_time: text(&self.year_time),
            poster_url: text(&self.poster_url),
            notes: text(&self.notes),
        }
    }
}

/// Runs a non-interactive command against `list`, writing results to `out`.
pub async fn run_command<A, W>(command: Command, list: &EntryList<A>, out: &mut W) -> anyhow::Result<()>
where
    A: EntriesApi,
    W: Write,
{
    match command {
        Command::Browse => anyhow::bail!("browse runs the interactive terminal UI"),
        Command::List { all, json, .. } => {
            if all {
                list.load_all().await?;
            } else {
                list.load_more().await?;
            }
            let state = list.snapshot();
            if json {
                serde_json::to_writer_pretty(&mut *out, &state.entries)?;
                writeln!(out)?;
            } else {
                write_table(out, &state.entries)?;
                if state.has_more && !all {
                    writeln!(out, "More entries available (use --all)")?;
                }
            }
        }
        Command::Add(args) => {
            let saved = list.create(&args.to_input()).await?;
            report_saved(out, "Created", &saved)?;
        }
        Command::Update { id, entry } => {
            let saved = list.update(EntryId(id), &entry.to_input()).await?;
            report_saved(out, "Updated", &saved)?;
        }
        Command::Delete { id } => {
            list.delete(EntryId(id)).await?;
            writeln!(out, "Deleted entry {}", id)?;
        }
    }
    Ok(())
}

/// The entry is saved even when the reload fails, so that is only a warning.
fn report_saved<W: Write>(out: &mut W, verb: &str, saved: &Saved) -> std::io::Result<()> {
    writeln!(out, "{} entry {} ({})", verb, saved.entry.id, saved.entry.title)?;
    if let Err(err) = &saved.reload {
        eprintln!("Warning: entry saved, but reloading the list failed: {}", err);
    }
    Ok(())
}

fn write_table<W: Write>(out: &mut W, entries: &[Entry]) -> std::io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No entries");
    }
    writeln!(
        out,
        "{:>6}  {:<32}  {:<8}  {:<20}  {:>14}  {:>8}  {}",
        "ID", "TITLE", "TYPE", "DIRECTOR", "BUDGET", "DURATION", "YEAR/TIME"
    )?;
    for entry in entries {
        writeln!(
            out,
            "{:>6}  {:<32}  {:<8}  {:<20}  {:>14}  {:>8}  {}",
            entry.id,
            truncate(&entry.title, 32),
            entry.kind.label(),
            truncate(entry.director.as_deref().unwrap_or("-"), 20),
            entry.budget.map(format_budget).unwrap_or_else(|| "-".to_string()),
            entry.duration.map(format_duration).unwrap_or_else(|| "-".to_string()),
            entry.year_time.as_deref().unwrap_or("-"),
        )?;
    }
    Ok(())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
