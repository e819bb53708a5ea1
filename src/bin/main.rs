use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use crossterm::style::Stylize;
use sentiment_core::core::normalizer::NormalizerOptions;
use sentiment_core::corpus::CorpusSource;
use sentiment_core::{load_model, train, Label, ModelFormat, NaiveBayesModel, TextPipeline, TrainConfig};
use std::io::{stdin, BufRead};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "sentiment-train")]
#[command(about = "Train and run a Naive Bayes sentiment classifier", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the dataset, fit, evaluate and save a model
    Train {
        /// JSON config file; flags below override it
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Corpus whose records are all positive
        #[arg(long)]
        positive: Vec<PathBuf>,

        /// Corpus whose records are all negative
        #[arg(long)]
        negative: Vec<PathBuf>,

        /// Corpus carrying a label per record
        #[arg(long)]
        labeled: Vec<PathBuf>,

        /// Where to write the model
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Model file format (bincode, json)
        #[arg(long, value_parser = parse_format)]
        format: Option<ModelFormat>,

        #[arg(long)]
        seed: Option<u64>,

        /// Share of examples used for training
        #[arg(long)]
        train_ratio: Option<f64>,

        /// Additive smoothing for the conditional estimates
        #[arg(long)]
        smoothing: Option<f64>,

        #[command(flatten)]
        text: TextArgs,

        /// Print the N most informative features after training
        #[arg(long, default_value = "0")]
        show_features: usize,
    },

    /// Classify texts given as arguments, or one per stdin line
    Classify {
        #[arg(short, long, default_value = "classifier.bin")]
        model: PathBuf,

        #[command(flatten)]
        text: TextArgs,

        texts: Vec<String>,
    },

    /// Print what a saved model has learned
    Inspect {
        #[arg(short, long, default_value = "classifier.bin")]
        model: PathBuf,

        #[arg(long, default_value = "10")]
        top: usize,
    },
}

/// Options that must match between training and classification.
#[derive(Args)]
struct TextArgs {
    /// Directory with stopwords.txt, lexicon.txt and lemmas.txt
    #[arg(long)]
    assets: Option<PathBuf>,

    #[arg(long)]
    language: Option<String>,

    /// Keep only letters and digits in each token
    #[arg(long)]
    strip_non_alphanumeric: bool,

    #[arg(long)]
    lowercase: bool,
}

fn parse_format(s: &str) -> std::result::Result<ModelFormat, String> {
    match s.to_ascii_lowercase().as_str() {
        "bincode" | "bin" => Ok(ModelFormat::Bincode),
        "json" => Ok(ModelFormat::Json),
        _ => Err(format!("unknown model format '{s}' (expected bincode or json)")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Train {
            config,
            positive,
            negative,
            labeled,
            model,
            format,
            seed,
            train_ratio,
            smoothing,
            text,
            show_features,
        } => {
            let mut config = match config {
                Some(path) => TrainConfig::from_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => TrainConfig::default(),
            };
            config.corpora.extend(positive.into_iter().map(CorpusSource::positive));
            config.corpora.extend(negative.into_iter().map(CorpusSource::negative));
            config.corpora.extend(labeled.into_iter().map(CorpusSource::labeled));
            if let Some(path) = model {
                config.model_path = path;
            }
            config.format = format.or(config.format);
            config.seed = seed.or(config.seed);
            if let Some(ratio) = train_ratio {
                config.train_ratio = ratio;
            }
            if let Some(smoothing) = smoothing {
                config.smoothing = smoothing;
            }
            if let Some(language) = text.language {
                config.language = language;
            }
            if let Some(dir) = text.assets {
                config.assets_dir = Some(dir);
            }
            config.strip_non_alphanumeric |= text.strip_non_alphanumeric;
            config.lowercase |= text.lowercase;

            info!(corpora = config.corpora.len(), "starting training run");
            let run = train(&config)?;
            let report = &run.report;

            println!("\n{}", "Training finished".bold());
            println!("{:-<60}", "");
            println!("  Examples:      {} positive, {} negative", report.positive_examples, report.negative_examples);
            println!("  Split:         {} train / {} test (seed {})", report.train_size, report.test_size, report.seed);
            println!("  Vocabulary:    {} features", report.vocabulary);
            let c = &report.confusion;
            println!(
                "  Confusion:     tp {}  fp {}  tn {}  fn {}",
                c.true_positive, c.false_positive, c.true_negative, c.false_negative
            );
            println!("  Accuracy is:   {}", format!("{:.4}", report.accuracy).green().bold());

            if show_features > 0 {
                print_informative(&run.model, show_features);
            }

            run.save()
                .with_context(|| format!("saving model to {}", report.model_path.display()))?;
            println!("\nModel saved to '{}' ({:?})", report.model_path.display(), report.format);
        }

        Commands::Classify { model, text, texts } => {
            let classifier = load_model(&model)
                .with_context(|| format!("loading model {}", model.display()))?;
            let options = NormalizerOptions {
                strip_non_alphanumeric: text.strip_non_alphanumeric,
                lowercase: text.lowercase,
            };
            let language = text.language.unwrap_or_else(|| "english".to_string());
            let pipeline = TextPipeline::load(&language, text.assets.as_deref(), options)?;

            let texts = if texts.is_empty() {
                stdin().lock().lines().collect::<std::io::Result<Vec<_>>>()?
            } else {
                texts
            };
            for line in texts.iter().filter(|t| !t.trim().is_empty()) {
                let prediction = classifier.predict(&pipeline.featurize(line));
                let label = match prediction.label {
                    Label::Positive => prediction.label.to_string().green(),
                    Label::Negative => prediction.label.to_string().red(),
                };
                println!("{label}\t{:.4}\t{line}", prediction.score);
            }
        }

        Commands::Inspect { model, top } => {
            let classifier = load_model(&model)
                .with_context(|| format!("loading model {}", model.display()))?;
            println!("\n{} {}", "Model".bold(), model.display());
            println!("{:-<60}", "");
            println!("  Trained on:    {} examples", classifier.training_examples());
            println!("  Vocabulary:    {} features", classifier.vocabulary_len());
            println!("  Smoothing:     {}", classifier.smoothing());
            for label in Label::ALL {
                println!("  P({label}):\t {:.4}", classifier.prior(label));
            }
            print_informative(&classifier, top);
        }
    }

    Ok(())
}

fn print_informative(model: &NaiveBayesModel, n: usize) {
    println!("\nMost Informative Features");
    for feature in model.most_informative_features(n) {
        let favours = match feature.favours {
            Label::Positive => "pos : neg".green(),
            Label::Negative => "neg : pos".red(),
        };
        println!("{:>30} = True    {} = {:>8.1} : 1.0", feature.name, favours, feature.ratio);
    }
}
