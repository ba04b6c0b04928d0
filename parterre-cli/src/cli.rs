//! Command-line interface orchestration for parterre.
//!
//! The CLI offers a `components` command that reads a whitespace-separated
//! edge list from a file, folds every edge into a disjoint-set forest, and
//! renders the resulting partition of the universe.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use parterre_core::{DisjointSetForest, ForestError, Partition};
use thiserror::Error;
use tracing::instrument;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "parterre", about = "Compute the connected components of an edge list.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Partition an edge list into connected components.
    Components(ComponentsCommand),
}

/// Options accepted by the `components` command.
#[derive(Debug, Args, Clone)]
pub struct ComponentsCommand {
    /// Path to a UTF-8 file with one `p q` index pair per line. Blank lines
    /// and lines starting with `#` are skipped.
    pub path: PathBuf,

    /// Size of the element universe. Defaults to the largest referenced
    /// index plus one.
    #[arg(long)]
    pub elements: Option<usize>,

    /// Override name for the edge list (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading the edge list.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A line of the edge list did not hold two element indices.
    #[error("`{path}` line {line}: expected two element indices, found `{content}`")]
    MalformedLine {
        /// Path of the offending file.
        path: PathBuf,
        /// One-based line number of the offending line.
        line: usize,
        /// The offending line content, trimmed.
        content: String,
    },
    /// The forest rejected an edge endpoint.
    #[error(transparent)]
    Core(#[from] ForestError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported for the edge list.
    pub source: String,
    /// Partition of the universe into connected components.
    pub partition: Partition,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing, or folding the edge list
/// fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use parterre_cli::cli::{Cli, Command, ComponentsCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0 1\n2 3\n")?;
/// let cli = Cli {
///     command: Command::Components(ComponentsCommand {
///         path: file.path().to_path_buf(),
///         elements: None,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.partition.group_count(), 2);
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Components(command) => components_command(command),
    }
}

#[instrument(
    name = "cli.components",
    err,
    skip(command),
    fields(path = %command.path.display(), elements = command.elements),
)]
fn components_command(command: ComponentsCommand) -> Result<ExecutionSummary, CliError> {
    let ComponentsCommand {
        path,
        elements,
        name,
    } = command;
    let source = derive_source_name(&path, name.as_deref());
    let reader = open_edge_reader(&path)?;
    let edges = parse_edge_list(&path, reader)?;
    let element_count = elements.unwrap_or_else(|| implied_element_count(&edges));

    let mut forest = DisjointSetForest::new(element_count);
    for &(p, q) in &edges {
        forest.union(p, q)?;
    }

    Ok(ExecutionSummary {
        source,
        partition: forest.partition(),
    })
}

fn open_edge_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn parse_edge_list(path: &Path, reader: impl BufRead) -> Result<Vec<(usize, usize)>, CliError> {
    let mut edges = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        let edge = parse_edge(content).ok_or_else(|| CliError::MalformedLine {
            path: path.to_path_buf(),
            line: index + 1,
            content: content.to_owned(),
        })?;
        edges.push(edge);
    }
    Ok(edges)
}

fn parse_edge(content: &str) -> Option<(usize, usize)> {
    let mut tokens = content.split_whitespace();
    let p = tokens.next()?.parse().ok()?;
    let q = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((p, q))
}

fn implied_element_count(edges: &[(usize, usize)]) -> usize {
    edges
        .iter()
        .map(|&(p, q)| p.max(q) + 1)
        .max()
        .unwrap_or(0)
}

fn derive_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "edge_list".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// One line per component: the group index, a tab, and the members separated
/// by spaces.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use parterre_cli::cli::{ExecutionSummary, render_summary};
/// # use parterre_core::Partition;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     source: "demo".into(),
///     partition: Partition::from_groups(3, vec![vec![0, 2], vec![1]]),
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.contains("components: 2"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "source: {}", summary.source)?;
    writeln!(writer, "elements: {}", summary.partition.element_count())?;
    writeln!(writer, "components: {}", summary.partition.group_count())?;
    for (index, group) in summary.partition.groups().iter().enumerate() {
        let members = group
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{index}\t{members}")?;
    }
    Ok(())
}
