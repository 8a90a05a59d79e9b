use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chromatune::accessibility::cvd_report;
use chromatune::fitness::breakdown;
use chromatune::models::{parse_color, AppConfig, Palette};
use chromatune::search::{
    find_optimal_color_path, genetic, hill_climbing, simulated_annealing, CrossoverOperation,
};
use chromatune::seed::{harmony_palette, seed_population, Harmony};

#[derive(Parser)]
#[command(name = "chromatune", version)]
#[command(about = "Search for readable, harmonious UI palettes")]
struct Cli {
    /// YAML config file (falls back to $CHROMATUNE_CONFIG, then defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimize a five-color palette around a primary color
    Optimize {
        /// Primary brand color (hex or CSS name)
        #[arg(short, long)]
        primary: String,

        #[arg(short, long, value_enum, default_value_t = Method::Hill)]
        method: Method,

        /// Harmony used to build the starting palette
        #[arg(long, default_value_t = Harmony::Complementary)]
        harmony: Harmony,

        /// Explicit starting palette: accent, background, surface, button text, main text
        #[arg(long, num_args = 5, value_name = "COLOR")]
        start: Option<Vec<String>>,

        /// Random seed (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Crossover operator for the genetic method (overrides the config file)
        #[arg(long)]
        crossover: Option<CrossoverOperation>,
    },
    /// Order colors into an evenly stepped sequence, keeping the first in place
    Path {
        #[arg(required = true, num_args = 2.., value_name = "COLOR")]
        colors: Vec<String>,

        #[arg(short, long)]
        iterations: Option<u32>,

        #[arg(long)]
        seed: Option<u64>,
    },
    /// Score a palette and report how it holds up under color-vision deficiencies
    Score {
        #[arg(short, long)]
        primary: String,

        /// accent, background, surface, button text, main text
        #[arg(num_args = 5, required = true, value_name = "COLOR")]
        colors: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Steepest-ascent hill climbing
    Hill,
    /// Simulated annealing
    Anneal,
    /// Genetic algorithm over a seeded population
    Genetic,
}

impl Method {
    /// Optimize flags given on the command line that this method never reads.
    fn ignored_flags(self, seed: bool, crossover: bool) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        if seed && self == Method::Hill {
            ignored.push("--seed");
        }
        if crossover && self != Method::Genetic {
            ignored.push("--crossover");
        }
        ignored
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromatune=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().compact().without_time())
        .init();

    let config = AppConfig::load_or_default(cli.config.as_deref());

    match cli.command {
        Commands::Optimize {
            primary,
            method,
            harmony,
            start,
            seed,
            crossover,
        } => {
            for flag in method.ignored_flags(seed.is_some(), crossover.is_some()) {
                tracing::warn!(?method, flag, "Flag has no effect with this method, ignoring");
            }
            run_optimize(
                &config,
                &primary,
                method,
                harmony,
                start,
                seed.or(config.seed),
                crossover,
            )
        }
        Commands::Path {
            colors,
            iterations,
            seed,
        } => run_path(&config, &colors, iterations, seed.or(config.seed)),
        Commands::Score { primary, colors } => run_score(&primary, &colors),
    }
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_optimize(
    config: &AppConfig,
    primary: &str,
    method: Method,
    harmony: Harmony,
    start: Option<Vec<String>>,
    seed: Option<u64>,
    crossover: Option<CrossoverOperation>,
) -> anyhow::Result<()> {
    let primary = parse_color(primary).context("Invalid primary color")?;
    let start = match start {
        Some(colors) => Palette::from_hex(&colors).context("Invalid starting palette")?,
        None => harmony_palette(&primary, harmony),
    };
    let mut rng = rng_for(seed);

    tracing::info!(%primary, ?method, start = %start, "Optimizing palette");

    match method {
        Method::Hill => print_json(&hill_climbing(
            &primary,
            start.colors(),
            &config.hill_climbing,
        )?),
        Method::Anneal => print_json(&simulated_annealing(
            &primary,
            start.colors(),
            &config.annealing,
            &mut rng,
        )?),
        Method::Genetic => {
            let mut options = config.genetic.options.clone();
            if let Some(crossover) = crossover {
                options.crossover_operation = crossover;
            }
            let size = config.genetic.population_size.max(2);
            let mut population = seed_population(&primary, size, &mut rng);
            population[0] = start;
            print_json(&genetic(&primary, &population, &options, &mut rng)?)
        }
    }
}

fn run_path(
    config: &AppConfig,
    colors: &[String],
    iterations: Option<u32>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let mut options = config.path.clone();
    if let Some(iterations) = iterations {
        options.iterations = iterations;
    }
    let mut rng = rng_for(seed);
    print_json(&find_optimal_color_path(colors, &options, &mut rng)?)
}

#[derive(Serialize)]
struct ScoreReport {
    fitness: f64,
    breakdown: chromatune::fitness::FitnessBreakdown,
    cvd: Vec<chromatune::accessibility::CvdSeparation>,
}

fn run_score(primary: &str, colors: &[String]) -> anyhow::Result<()> {
    let primary = parse_color(primary).context("Invalid primary color")?;
    let palette = Palette::from_hex(colors).context("Invalid palette")?;
    let breakdown = breakdown(&primary, &palette);

    print_json(&ScoreReport {
        fitness: breakdown.total(),
        breakdown,
        cvd: cvd_report(&palette),
    })
}
