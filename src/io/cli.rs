//! Command-line interface for the symbol frequency and weight batch jobs

use crate::frequency::ranking::RankPolicy;
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::report::{open_input, open_output, write_report};
use crate::jobs::counting::{count_corpus, count_words, load_tokenizer};
use crate::jobs::strip::strip_symbols;
use crate::jobs::weights::{WeightOptions, load_frequencies, update_weights};
use crate::table::repository::{SymbolRepository, SymbolScope};
use crate::table::sqlite::SqliteRepository;
use crate::table::symbol::MatchType;
use crate::tokenize::script::Script;
use crate::tokenize::symbols::SymbolSet;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "symrank")]
#[command(
    author,
    version,
    about = "Rank transliteration symbols by how often they occur in real text"
)]
/// Command-line arguments shared by every job
pub struct Cli {
    /// Job to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log every weight change and loaded table detail
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Batch jobs
#[derive(Subcommand)]
pub enum Command {
    /// Count symbol occurrences in raw corpus text
    CountCorpus(CountArgs),
    /// Count symbol occurrences in a `word frequency` report, weighted by frequency
    CountWords(CountArgs),
    /// Drop words that are themselves table symbols from a `word frequency` report
    StripSymbols(StripArgs),
    /// Rewrite table weights from a `symbol frequency` report
    UpdateWeights(WeightArgs),
}

/// Arguments of the counting jobs
#[derive(Args)]
pub struct CountArgs {
    /// Symbol table database
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Corpus text or word report
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Symbol report destination, standard output when omitted
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Recognize every table symbol, not only those competing for a pattern
    #[arg(long)]
    pub all_symbols: bool,

    /// Append to OUTPUT instead of replacing it
    #[arg(long)]
    pub append: bool,
}

impl CountArgs {
    /// Which table rows feed the tokenizer
    pub const fn scope(&self) -> SymbolScope {
        if self.all_symbols {
            SymbolScope::All
        } else {
            SymbolScope::MultiCandidate
        }
    }
}

/// Arguments of the strip job
#[derive(Args)]
pub struct StripArgs {
    /// Symbol table database
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Word report to filter
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Filtered report destination, standard output when omitted
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Append to OUTPUT instead of replacing it
    #[arg(long)]
    pub append: bool,
}

/// Arguments of the weight update job
#[derive(Args)]
pub struct WeightArgs {
    /// Symbol table database to update
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Symbol report with observed frequencies
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination of the `pattern rank symbol` listing, standard output when omitted
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// How frequencies become weights
    #[arg(short, long, value_enum, default_value_t = RankPolicy::Percentage)]
    pub policy: RankPolicy,

    /// Only update rows of this match type
    #[arg(short, long, value_enum)]
    pub match_type: Option<MatchType>,

    /// List the new ranks without keeping the updates
    #[arg(long)]
    pub dry_run: bool,
}

impl WeightArgs {
    /// Options passed to the update job
    pub const fn options(&self) -> WeightOptions {
        WeightOptions {
            policy: self.policy,
            match_type: self.match_type,
            dry_run: self.dry_run,
        }
    }
}

/// Runs the selected job with progress tracking
pub struct CommandRunner {
    cli: Cli,
    progress: ProgressManager,
}

impl CommandRunner {
    /// Create a runner for the parsed arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self { cli, progress }
    }

    /// Run the selected job to completion
    ///
    /// # Errors
    ///
    /// Returns an error if the table, the input or the output cannot be used
    pub fn run(&mut self) -> Result<()> {
        match &self.cli.command {
            Command::CountCorpus(args) => Self::count(args, true, &mut self.progress),
            Command::CountWords(args) => Self::count(args, false, &mut self.progress),
            Command::StripSymbols(args) => Self::strip(args, &mut self.progress),
            Command::UpdateWeights(args) => Self::update(args, &mut self.progress),
        }
    }

    fn count(args: &CountArgs, corpus: bool, progress: &mut ProgressManager) -> Result<()> {
        check_append(args.append, args.output.as_deref())?;
        let repository = SqliteRepository::open(&args.table)?;
        let tokenizer = load_tokenizer(&repository, args.scope(), Script::default())?;
        let reader = open_input(&args.input)?;

        let (tally, _) = if corpus {
            count_corpus(reader, &tokenizer, progress)
        } else {
            count_words(reader, &tokenizer, progress)
        }
        .with_path(&args.input, "read input")?;

        let mut writer = open_output(args.output.as_deref(), args.append)?;
        write_report(&mut writer, tally.sorted())
            .with_path(output_label(args.output.as_deref()), "write report")
    }

    fn strip(args: &StripArgs, progress: &mut ProgressManager) -> Result<()> {
        check_append(args.append, args.output.as_deref())?;
        let repository = SqliteRepository::open(&args.table)?;
        let symbols: SymbolSet = repository.symbol_values(SymbolScope::All)?.into_iter().collect();
        let reader = open_input(&args.input)?;
        let mut writer = open_output(args.output.as_deref(), args.append)?;

        strip_symbols(reader, &mut writer, &symbols, progress)
            .with_path(&args.input, "strip report")?;
        Ok(())
    }

    fn update(args: &WeightArgs, progress: &mut ProgressManager) -> Result<()> {
        let mut repository = SqliteRepository::open(&args.table)?;
        let frequencies = load_frequencies(open_input(&args.input)?)
            .with_path(&args.input, "read symbol report")?;
        let mut listing = open_output(args.output.as_deref(), false)?;

        update_weights(
            &mut repository,
            &frequencies.counts,
            args.options(),
            &mut listing,
            progress,
        )?;
        Ok(())
    }
}

fn output_label(path: Option<&Path>) -> &Path {
    path.unwrap_or_else(|| Path::new("<stdout>"))
}

fn check_append(append: bool, output: Option<&Path>) -> Result<()> {
    if append && output.is_none() {
        return Err(invalid_parameter(
            "append",
            &append,
            &"appending needs an OUTPUT path",
        ));
    }
    Ok(())
}
