//! svmtrace command line interface
//!
//! Generates the blob dataset, trains the SGD hinge-loss SVM and prints the
//! points and per-epoch hyperplanes as literal blocks on stdout.

use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{error, info};
use std::io;
use std::path::PathBuf;
use std::process;
use svmtrace::api::quick;
use svmtrace::core::{Result, ShufflePolicy};
use svmtrace::render::LiteralWriter;
use svmtrace::RunConfig;

#[derive(Parser)]
#[command(name = "svmtrace")]
#[command(about = "Trace an SGD-trained linear SVM on synthetic 2-D blobs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "svmtrace contributors")]
struct Cli {
    /// JSON run configuration; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of points to generate
    #[arg(short = 'n', long)]
    points: Option<usize>,

    /// Number of training epochs
    #[arg(short, long)]
    epochs: Option<usize>,

    /// Seed for generation and shuffling
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of clusters
    #[arg(long)]
    clusters: Option<usize>,

    /// Per-coordinate standard deviation of each cluster
    #[arg(long)]
    cluster_std: Option<f64>,

    /// L2 regularization strength
    #[arg(long)]
    alpha: Option<f64>,

    /// Constant learning rate
    #[arg(long)]
    eta0: Option<f64>,

    /// Visit points in dataset order every epoch
    #[arg(long)]
    no_shuffle: bool,

    /// How the shuffling source is seeded across epochs
    #[arg(long)]
    shuffle_policy: Option<CliShufflePolicy>,

    /// Literal target language
    #[arg(short, long)]
    target: Option<CliTarget>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliShufflePolicy {
    /// Fresh source seeded with seed + epoch each epoch (default)
    #[value(name = "reseed-per-epoch")]
    ReseedPerEpoch,
    /// One source advanced across all epochs
    #[value(name = "single-stream")]
    SingleStream,
}

impl From<CliShufflePolicy> for ShufflePolicy {
    fn from(cli_policy: CliShufflePolicy) -> Self {
        match cli_policy {
            CliShufflePolicy::ReseedPerEpoch => ShufflePolicy::ReseedPerEpoch,
            CliShufflePolicy::SingleStream => ShufflePolicy::SingleStream,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliTarget {
    /// C++ header with std::vector initializers
    #[value(name = "cpp")]
    Cpp,
    /// Python lists of tuples
    #[value(name = "python")]
    Python,
}

impl CliTarget {
    fn name(self) -> &'static str {
        match self {
            CliTarget::Cpp => "cpp",
            CliTarget::Python => "python",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    config.validate()?;
    info!(
        "Run parameters: points={}, epochs={}, seed={}, clusters={}, cluster_std={}",
        config.n_points, config.n_epochs, config.seed, config.n_clusters, config.cluster_std
    );

    let (dataset, trace) = quick::run(&config)?;
    if let Some(plane) = trace.last() {
        info!(
            "Final hyperplane: {:.8}x + {:.8}y + {:.8} = 0",
            plane.w1, plane.w2, plane.b
        );
    }

    let stdout = io::stdout();
    let mut writer = LiteralWriter::new(stdout.lock(), config.literal_target()?);
    writer.write_dataset(&dataset)?;
    writer.write_trace(&trace)?;
    writer.into_inner()?;
    Ok(())
}

/// Defaults, then the config file, then command line flags
fn resolve_config(cli: &Cli) -> Result<RunConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from: {path:?}");
            RunConfig::load_from_file(path)?
        }
        None => RunConfig::default(),
    };

    if let Some(points) = cli.points {
        config.n_points = points;
    }
    if let Some(epochs) = cli.epochs {
        config.n_epochs = epochs;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(clusters) = cli.clusters {
        config.n_clusters = clusters;
    }
    if let Some(cluster_std) = cli.cluster_std {
        config.cluster_std = cluster_std;
    }
    if let Some(alpha) = cli.alpha {
        config.alpha = alpha;
    }
    if let Some(eta0) = cli.eta0 {
        config.eta0 = eta0;
    }
    if cli.no_shuffle {
        config.shuffle = false;
    }
    if let Some(policy) = cli.shuffle_policy {
        config.shuffle_policy = policy.into();
    }
    if let Some(target) = cli.target {
        config.target = target.name().to_string();
    }
    Ok(config)
}
