use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::debug;

use glohsen_score::config::Config;
use glohsen_score::output;
use glohsen_score::profile::{
    HistoryProvider, PlaceholderHistory, ProfessionalProfile, ProfileAdapter, RecordedHistory,
};
use glohsen_score::scoring::{
    validate_criteria, AdditiveScoreModel, CandidateData, CriteriaSelection,
    MultiplicativeCriteriaModel, ScoreBreakdown,
};
use glohsen_score::search::CandidateSearch;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a candidate record (JSON or YAML, "-" reads JSON from stdin)
    Score {
        input: String,
    },
    /// Convert a professional profile to a candidate record and score it
    Profile {
        input: String,

        /// Activity history file keyed by profile id
        #[arg(long, conflicts_with = "placeholder_history")]
        history: Option<PathBuf>,

        /// Use the fixed legacy activity values instead of recorded history
        #[arg(long)]
        placeholder_history: bool,

        /// Date that closes open experience entries (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Evaluate the employer criteria product
    Criteria {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Run the simulated "find matching candidates" search
    Search {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Write a config file populated with the default rubric
    Init {
        /// Destination (defaults to ~/.config/glohsen-score/config.yaml)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(clap::Args, Debug)]
struct SelectionArgs {
    /// Slider positions file (JSON or YAML)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Override one slider, e.g. --set experience=8 (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    assignments: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "glohsen-score")]
#[command(about = "GLOHSEN Score calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/glohsen-score/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = glohsen_score::logging::init(cli.verbose) {
        eprintln!("Logging setup failed: {:#}", e);
    }

    let is_init = matches!(cli.command, Commands::Init { .. });

    // Load and validate config; init writes one instead
    let config = if is_init {
        Config::default()
    } else {
        let config_path = cli.config.map(PathBuf::from);
        let config = match glohsen_score::config::load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        };

        if let Err(errors) = glohsen_score::config::validate_config(&config) {
            eprintln!("Config errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
        config
    };

    let use_colors = output::should_use_colors();
    if let Err(e) = run(cli.command, &config, cli.format, use_colors).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(if is_init { EXIT_CONFIG } else { EXIT_INPUT });
    }

    std::process::exit(EXIT_SUCCESS);
}

async fn run(
    command: Commands,
    config: &Config,
    format: OutputFormat,
    use_colors: bool,
) -> Result<()> {
    let model = AdditiveScoreModel::new(config.rubric());

    match command {
        Commands::Score { input } => {
            let data: CandidateData = glohsen_score::input::read_source(&input)?;
            let breakdown = model.compute(&data);
            print_breakdown(&breakdown, &model, format, use_colors)?;
        }
        Commands::Profile {
            input,
            history,
            placeholder_history,
            today,
        } => {
            let profile: ProfessionalProfile = glohsen_score::input::read_source(&input)?;
            let provider: Box<dyn HistoryProvider> = match (history, placeholder_history) {
                (Some(path), _) => Box::new(RecordedHistory::load(&path)?),
                (None, true) => Box::new(PlaceholderHistory),
                (None, false) => Box::new(RecordedHistory::default()),
            };

            let mut adapter = ProfileAdapter::new(provider);
            if let Some(today) = today {
                adapter = adapter.with_today(today);
            }
            let data = adapter.to_candidate_data(&profile);
            debug!(?data, "candidate data from profile");

            let breakdown = model.compute(&data);
            print_breakdown(&breakdown, &model, format, use_colors)?;
        }
        Commands::Criteria { selection } => {
            let selection = build_selection(selection.file.as_deref(), &selection.assignments)?;
            let score = MultiplicativeCriteriaModel.score(&selection);
            match format {
                OutputFormat::Table => {
                    println!("{}", output::format_criteria(&selection, &score, use_colors))
                }
                OutputFormat::Tsv => println!("{}", output::format_criteria_tsv(&selection, &score)),
                OutputFormat::Json => {
                    let value = serde_json::json!({
                        "selection": selection,
                        "score": score,
                        "display": score.display(),
                    });
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
            }
        }
        Commands::Search { selection } => {
            let selection = build_selection(selection.file.as_deref(), &selection.assignments)?;
            let search = config.search_config().to_search()?;
            debug!(delay = ?search.delay, "starting simulated search");

            let outcome = search.find_matching(&selection).await?;
            match format {
                OutputFormat::Table => {
                    println!("{}", output::format_search_outcome(&outcome, use_colors))
                }
                OutputFormat::Tsv => println!("{}\t{}", outcome.matches, outcome.criteria.capped),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
            }
        }
        Commands::Init { path, force } => {
            let target = match path {
                Some(path) => path,
                None => glohsen_score::config::get_config_path()?,
            };
            glohsen_score::config::write_default_config(&target, force)?;
            println!("Config written to {}", target.display());
        }
    }

    Ok(())
}

fn print_breakdown(
    breakdown: &ScoreBreakdown,
    model: &AdditiveScoreModel,
    format: OutputFormat,
    use_colors: bool,
) -> Result<()> {
    match format {
        OutputFormat::Table => println!(
            "{}",
            output::format_breakdown(breakdown, model.rubric(), use_colors)
        ),
        OutputFormat::Tsv => println!("{}", output::format_breakdown_tsv(breakdown)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(breakdown)?),
    }
    Ok(())
}

/// Start from the file (or the default sliders), then apply --set overrides
fn build_selection(file: Option<&Path>, assignments: &[String]) -> Result<CriteriaSelection> {
    let mut selection = match file {
        Some(path) => {
            let selection: CriteriaSelection = glohsen_score::input::read_document(path)?;
            if let Err(errors) = validate_criteria(&selection) {
                anyhow::bail!("{}: {}", path.display(), errors.join("; "));
            }
            selection
        }
        None => CriteriaSelection::default(),
    };

    for assignment in assignments {
        selection
            .apply_assignment(assignment)
            .with_context(|| format!("Invalid --set '{}'", assignment))?;
    }

    Ok(selection)
}
