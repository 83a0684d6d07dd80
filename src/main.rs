//! Scrabble Tiles CLI
//!
//! Usage:
//!   scrabble-tiles [OPTIONS] [FILE]
//!
//! Reads one word per line (commas also separate words) and prints the board
//! as SVG, plain text, or a data URI.

mod logging;

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::warn;

use scrabble_tiles::layout::{lint, GenerationConfig, Generator, StepEvent};
use scrabble_tiles::words::samples;
use scrabble_tiles::{
    layout_words, parse_word_list, render_svg_with_stylesheet, render_text, to_data_uri,
    GenerationError, Layout, LetterPoints, RenderConfig, Stylesheet, SvgConfig, WordList,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Svg,
    Text,
    DataUri,
}

#[derive(Parser)]
#[command(name = "scrabble-tiles")]
#[command(about = "Lay out a list of words as crossing Scrabble tiles")]
struct Cli {
    /// Word list file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Use a built-in word list instead of FILE
    #[arg(long, conflicts_with = "input")]
    sample: Option<String>,

    /// List the built-in word lists
    #[arg(long)]
    list_samples: bool,

    /// Seed for reproducible boards
    #[arg(long)]
    seed: Option<u64>,

    /// Keep the first N words in the order given instead of longest first
    #[arg(long, default_value_t = 0)]
    preserve_order: usize,

    /// Attempts allowed per word before giving up
    #[arg(long, default_value_t = 10)]
    budget: usize,

    /// Keep trying until the budget runs out even when a full pass places nothing
    #[arg(long)]
    no_stuck_detection: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Hide point values on the tiles
    #[arg(long)]
    no_points: bool,

    /// Stylesheet file for tile colours (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Letter point overrides (TOML format)
    #[arg(long)]
    points: Option<PathBuf>,

    /// Check the finished board for placement problems
    #[arg(long)]
    lint: bool,

    /// Print the board to stderr after every step
    #[arg(long)]
    steps: bool,

    /// More log output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// No log output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);

    if cli.list_samples {
        for name in samples::names() {
            println!("{}", name);
        }
        return;
    }

    let words = read_words(&cli);
    let config = build_config(&cli);

    let result = if cli.steps {
        run_with_steps(words, &config)
    } else {
        layout_words(&words, &config)
    };

    let layout = match result {
        Ok(layout) => layout,
        Err(e) => report_generation_error(&e),
    };

    if cli.lint {
        let warnings = lint::check(&layout);
        for warning in &warnings {
            eprintln!("lint: {}", warning);
        }
        if !warnings.is_empty() {
            process::exit(1);
        }
    }

    match cli.format {
        OutputFormat::Svg => println!(
            "{}",
            render_svg_with_stylesheet(&layout, &config.svg, &config.stylesheet, &config.points)
        ),
        OutputFormat::Text => println!("{}", render_text(&layout)),
        OutputFormat::DataUri => println!(
            "{}",
            to_data_uri(&render_svg_with_stylesheet(
                &layout,
                &config.svg,
                &config.stylesheet,
                &config.points
            ))
        ),
    }
}

/// Pick the word list from --sample, FILE, stdin, or the default sample
fn read_words(cli: &Cli) -> WordList {
    if let Some(name) = &cli.sample {
        return match samples::sample(name) {
            Some(words) => words,
            None => {
                let known: Vec<_> = samples::names().collect();
                eprintln!(
                    "Error: unknown sample '{}' (available: {})",
                    name,
                    known.join(", ")
                );
                process::exit(1);
            }
        };
    }

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None if io::stdin().is_terminal() => {
            warn!("no input given, using the default word list");
            return samples::default_words();
        }
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                process::exit(1);
            }
            (buffer, "<stdin>".to_string())
        }
    };

    match parse_word_list(&source) {
        Ok(words) => words,
        Err(errors) => {
            for error in &errors {
                eprint!("{}", error.format(&source, &filename));
            }
            process::exit(1);
        }
    }
}

fn build_config(cli: &Cli) -> RenderConfig {
    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let points = match (&cli.points, cli.no_points) {
        (_, true) => LetterPoints::empty(),
        (Some(path), false) => match LetterPoints::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading points '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        (None, false) => LetterPoints::standard(),
    };

    let generation = GenerationConfig::new()
        .with_budget_per_word(cli.budget)
        .with_preserve_order(cli.preserve_order)
        .with_stuck_detection(!cli.no_stuck_detection);

    let mut config = RenderConfig::new()
        .with_generation(generation)
        .with_svg(SvgConfig::default().with_points(!cli.no_points))
        .with_stylesheet(stylesheet)
        .with_points(points);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config
}

/// Step the generator by hand, printing each intermediate board to stderr
fn run_with_steps(words: WordList, config: &RenderConfig) -> Result<Layout, GenerationError> {
    let mut generator = Generator::new(words, config.generation.clone(), config.rng())?;
    let mut step = 0;
    while let Some(event) = generator.next() {
        step += 1;
        match &event {
            StepEvent::Placed(placement) => eprintln!(
                "step {}: placed {} at ({}, {}) {:?}",
                step,
                placement.word,
                placement.x,
                placement.y,
                placement.orientation
            ),
            StepEvent::Requeued { word, reason } => {
                eprintln!("step {}: requeued {} ({})", step, word, reason)
            }
            StepEvent::Finished(status) => eprintln!("step {}: finished {:?}", step, status),
        }
        eprintln!("{}\n", render_text(&generator.snapshot()));
    }
    generator.run()
}

fn report_generation_error(error: &GenerationError) -> ! {
    eprintln!("Error: {}", error);
    if !error.unplaced().is_empty() {
        eprintln!("Unplaced words:");
        for word in error.unplaced() {
            eprintln!("  {}", word);
        }
    }
    if let Some(partial) = error.partial_layout() {
        eprintln!("Partial board:\n{}", render_text(partial));
    }
    process::exit(1);
}
