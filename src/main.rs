use accord_core::PerfumeCatalog;
use accord_embed::{CategoryVectors, HashEmbedder, DEFAULT_EMBEDDING_DIM};
use accord_similarity::{BlendConfig, CategoryStrategy, CompatibilityScorer, NOT_FOUND_MESSAGE};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Perfume compatibility scoring and data preparation
#[derive(Parser, Debug)]
#[command(name = "accord")]
#[command(about = "Perfume compatibility scoring and data preparation", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Embedding dimension
    #[arg(long, default_value_t = DEFAULT_EMBEDDING_DIM)]
    embedding_dim: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clean a raw perfume table: drop incomplete rows, normalize notes, deduplicate
    Clean {
        /// Input perfume table (CSV)
        #[arg(short, long)]
        input: PathBuf,
        /// Cleaned output table (CSV)
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Extract the unique note vocabulary from a cleaned perfume table
    ExtractNotes {
        /// Cleaned perfume table (CSV)
        #[arg(short, long)]
        input: PathBuf,
        /// Output vocabulary file, one note per line
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Assign each vocabulary note to its closest scent category
    CategorizeNotes {
        /// Vocabulary file, one note per line
        #[arg(short, long)]
        input: PathBuf,
        /// Output categorized-notes table (CSV)
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Tag each perfume with its top 3 scent categories
    TagPerfumes {
        /// Cleaned perfume table (CSV)
        #[arg(short, long)]
        input: PathBuf,
        /// Output tagged perfume table (CSV)
        #[arg(short, long)]
        output: PathBuf,
        /// Build category vectors from this categorized-notes table
        /// instead of the built-in exemplar lists
        #[arg(long)]
        notes_table: Option<PathBuf>,
    },
    /// Score the compatibility of two perfumes from a tagged table
    Score {
        /// Tagged perfume table (CSV)
        #[arg(short, long)]
        data: PathBuf,

        brand1: String,
        name1: String,
        brand2: String,
        name2: String,

        /// Weight of note-level similarity in the blend
        #[arg(long, default_value_t = 0.5)]
        note_weight: f32,

        /// Weight of category compatibility in the blend
        #[arg(long, default_value_t = 0.5)]
        category_weight: f32,

        /// Category compatibility formula
        #[arg(long, value_enum, default_value_t = StrategyArg::VectorCosine)]
        strategy: StrategyArg,

        /// Print the per-component breakdown as JSON
        #[arg(long)]
        explain: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Cosine similarity of category score vectors
    VectorCosine,
    /// Pairwise sum over the compatibility matrix
    MatrixWeighted,
}

impl From<StrategyArg> for CategoryStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::VectorCosine => CategoryStrategy::VectorCosine,
            StrategyArg::MatrixWeighted => CategoryStrategy::MatrixWeighted,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting accord v{}", env!("CARGO_PKG_VERSION"));

    let embedder = HashEmbedder::new(args.embedding_dim);

    match args.command {
        Command::Clean { input, output } => {
            let records = accord_dataprep::read_perfume_table(&input)?;
            info!(rows = records.len(), "loaded {:?}", input);
            let (cleaned, stats) = accord_dataprep::clean_records(records);
            accord_dataprep::write_perfume_table(&output, &cleaned)?;
            info!(
                kept = stats.kept,
                dropped = stats.dropped_missing_name,
                deduplicated = stats.deduplicated,
                "cleaned table written to {:?}",
                output
            );
        }
        Command::ExtractNotes { input, output } => {
            let records = accord_dataprep::read_perfume_table(&input)?;
            let vocabulary = accord_dataprep::extract_note_vocabulary(&records);
            accord_dataprep::write_note_list(&output, &vocabulary)?;
            info!(notes = vocabulary.len(), "vocabulary written to {:?}", output);
        }
        Command::CategorizeNotes { input, output } => {
            let notes = accord_dataprep::read_note_list(&input)?;
            let vectors = CategoryVectors::from_exemplars(&embedder);
            let assignments = accord_dataprep::assign_categories(&embedder, &vectors, &notes);
            accord_dataprep::write_categorized_notes(&output, &assignments)?;
            info!(
                notes = assignments.len(),
                "categorized notes written to {:?}", output
            );
        }
        Command::TagPerfumes {
            input,
            output,
            notes_table,
        } => {
            let mut records = accord_dataprep::read_perfume_table(&input)?;
            let vectors = match notes_table {
                Some(path) => {
                    let assignments = accord_dataprep::read_categorized_notes(&path)?;
                    info!(
                        notes = assignments.len(),
                        "category vectors rebuilt from {:?}", path
                    );
                    CategoryVectors::from_assignments(&embedder, &assignments)
                }
                None => CategoryVectors::from_exemplars(&embedder),
            };
            accord_dataprep::tag_perfumes(&embedder, &vectors, &mut records)?;
            accord_dataprep::write_perfume_table(&output, &records)?;
            info!(
                perfumes = records.len(),
                "tagged table written to {:?}", output
            );
        }
        Command::Score {
            data,
            brand1,
            name1,
            brand2,
            name2,
            note_weight,
            category_weight,
            strategy,
            explain,
        } => {
            let records = accord_dataprep::read_perfume_table(&data)?;
            let catalog = PerfumeCatalog::from_records(records);
            info!(perfumes = catalog.len(), "catalog loaded from {:?}", data);

            let config =
                BlendConfig::new(note_weight, category_weight).with_strategy(strategy.into());
            let scorer = CompatibilityScorer::with_config(embedder, catalog, config)?;

            if explain {
                match (
                    scorer.catalog().find(&brand1, &name1).cloned(),
                    scorer.catalog().find(&brand2, &name2).cloned(),
                ) {
                    (Some(perfume1), Some(perfume2)) => {
                        let breakdown = scorer.score_explained(&perfume1, &perfume2)?;
                        println!("{}", serde_json::to_string_pretty(&breakdown)?);
                    }
                    _ => println!("{NOT_FOUND_MESSAGE}"),
                }
            } else {
                println!("{}", scorer.query(&brand1, &name1, &brand2, &name2));
            }
        }
    }

    Ok(())
}
