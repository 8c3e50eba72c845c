use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use gizi_classify::engine;
use gizi_classify::summary::MeasurementSummary;
use gizi_classify::trend::PriorBmi;
use gizi_cli::config::{self, GiziConfig};
use gizi_cli::request::{ClassifyRequest, SubjectInput, SuppliedPrevious, read_request};
use gizi_core::models::measurement::{Measurement, MeasurementInput, MeasurementPosture};
use gizi_core::models::reference::ReferenceTable;
use gizi_core::models::subject::Gender;
use gizi_reference::loader::{self, ReferenceManifest};
use gizi_reference::sample;
use gizi_reference::store::ReferenceStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gizi")]
#[command(about = "Anthropometric nutritional-status classification")]
struct Cli {
    /// Config file (defaults to $GIZI_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reference table directory, overriding the config
    #[arg(long, global = true)]
    reference_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one measurement and print the record as JSON
    Classify(ClassifyArgs),
    /// List the age categories and their accepted input ranges
    Categories,
    /// Count measurement records by category and status
    Summary {
        /// JSON array of records printed by `classify`
        file: PathBuf,
    },
    /// Inspect or export reference tables
    Tables {
        #[command(subcommand)]
        command: TablesCommand,
    },
    /// Show or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args)]
struct ClassifyArgs {
    /// JSON request file; replaces the measurement flags
    #[arg(long, conflicts_with_all = ["gender", "dob", "weight", "height"])]
    input: Option<PathBuf>,

    /// Subject name
    #[arg(long)]
    name: Option<String>,
    /// L or P
    #[arg(long, required_unless_present = "input")]
    gender: Option<Gender>,
    /// Date of birth (YYYY-MM-DD)
    #[arg(long, required_unless_present = "input")]
    dob: Option<jiff::civil::Date>,
    /// Measurement date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<jiff::civil::Date>,
    /// Weight in kg
    #[arg(long, required_unless_present = "input")]
    weight: Option<f64>,
    /// Height or length in cm
    #[arg(long, required_unless_present = "input")]
    height: Option<f64>,
    /// berdiri or berbaring
    #[arg(long)]
    posture: Option<MeasurementPosture>,
    /// Head circumference in cm
    #[arg(long)]
    head: Option<f64>,
    /// Waist circumference in cm
    #[arg(long)]
    waist: Option<f64>,
    /// Mid-upper arm circumference (LILA) in cm
    #[arg(long)]
    arm: Option<f64>,
    #[arg(long)]
    pregnant: bool,
    #[arg(long)]
    notes: Option<String>,

    /// BMI of the previous measurement, for the trend
    #[arg(long, requires = "previous_date")]
    previous_bmi: Option<f64>,
    /// Date of the previous measurement (YYYY-MM-DD)
    #[arg(long, requires = "previous_bmi")]
    previous_date: Option<jiff::civil::Date>,

    /// Skip the input range checks
    #[arg(long)]
    no_validate: bool,
}

#[derive(Subcommand)]
enum TablesCommand {
    /// Row counts per table
    List,
    /// Write the built-in sample rows as table files
    ExportSample {
        /// Target directory
        dir: PathBuf,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective config
    Show,
    /// Write a default config file if none exists
    Init,
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    let config_path = config::config_path(cli.config.as_deref())?;
    let config = config::load_config(&config_path)?;

    init_tracing(config.log_json);

    let reference_dir = cli.reference_dir.or_else(|| config.reference_dir.clone());

    match cli.command {
        Commands::Classify(args) => {
            let refs = load_reference(reference_dir.as_deref())?;
            let record = classify(&refs, args)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Categories => {
            for classifier in gizi_classify::all_classifiers() {
                let limits = classifier.input_limits();
                println!(
                    "{}\t{}\tweight {}-{} kg\theight {}-{} cm",
                    classifier.category(),
                    classifier.name(),
                    limits.weight.min,
                    limits.weight.max,
                    limits.height.min,
                    limits.height.max,
                );
            }
        }
        Commands::Summary { file } => {
            let contents = std::fs::read_to_string(&file)
                .map_err(|e| eyre::eyre!("failed to read {}: {e}", file.display()))?;
            let records: Vec<Measurement> = serde_json::from_str(&contents)?;
            let summary = MeasurementSummary::from_results(records.iter().map(|m| &m.result));
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Tables { command } => match command {
            TablesCommand::List => {
                let refs = load_reference(reference_dir.as_deref())?;
                for table in ReferenceTable::ALL {
                    println!("{table}\t{}", refs.len(table));
                }
            }
            TablesCommand::ExportSample { dir } => export_sample(&dir)?,
        },
        Commands::Config { command } => match command {
            ConfigCommand::Show => {
                println!("# {}", config_path.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigCommand::Init => {
                if config_path.exists() {
                    println!("Config already exists at {}", config_path.display());
                } else {
                    config::save_config(&config_path, &GiziConfig::default())?;
                    println!("Wrote {}", config_path.display());
                }
            }
        },
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_reference(dir: Option<&Path>) -> eyre::Result<ReferenceStore> {
    match dir {
        Some(dir) => Ok(loader::load_dir(dir)?.store),
        None => {
            tracing::info!("no reference directory configured, using sample rows");
            Ok(sample::sample_store()?)
        }
    }
}

fn classify(refs: &ReferenceStore, args: ClassifyArgs) -> eyre::Result<Measurement> {
    let today = jiff::Zoned::now().date();

    let request = match &args.input {
        Some(path) => read_request(path)?,
        None => request_from_flags(&args, today)?,
    };
    let ClassifyRequest {
        subject,
        measurement,
        previous,
    } = request;
    let subject = subject.into_subject();

    if !args.no_validate {
        engine::validate(subject.date_of_birth, &measurement, today)?;
    }

    let result = engine::classify_with_trend(
        refs,
        &SuppliedPrevious(previous),
        &subject,
        &measurement,
        None,
    );

    Ok(Measurement::record(
        uuid::Uuid::new_v4(),
        &subject,
        measurement,
        result,
        jiff::Timestamp::now(),
    ))
}

fn request_from_flags(args: &ClassifyArgs, today: jiff::civil::Date) -> eyre::Result<ClassifyRequest> {
    let (Some(gender), Some(dob), Some(weight), Some(height)) =
        (args.gender, args.dob, args.weight, args.height)
    else {
        return Err(eyre::eyre!("--gender, --dob, --weight and --height are required"));
    };

    let mut measurement = MeasurementInput::new(args.date.unwrap_or(today), weight, height);
    measurement.posture = args.posture;
    measurement.head_circumference = args.head;
    measurement.waist_circumference = args.waist;
    measurement.arm_circumference = args.arm;
    measurement.is_pregnant = args.pregnant;
    measurement.notes = args.notes.clone();

    let previous = match (args.previous_bmi, args.previous_date) {
        (Some(bmi), Some(date)) => Some(PriorBmi { bmi, date }),
        _ => None,
    };

    Ok(ClassifyRequest {
        subject: SubjectInput {
            name: args.name.clone(),
            gender,
            date_of_birth: dob,
        },
        measurement,
        previous,
    })
}

fn export_sample(dir: &Path) -> eyre::Result<()> {
    let rows = sample::sample_rows();
    for table in ReferenceTable::ALL {
        let table_rows: Vec<_> = rows
            .iter()
            .filter(|(t, _)| *t == table)
            .map(|(_, row)| row.clone())
            .collect();
        if table_rows.is_empty() {
            continue;
        }
        let path = loader::write_table(dir, table, &table_rows)?;
        println!("{table}\t{}\t{}", table_rows.len(), path.display());
    }

    loader::write_manifest(
        dir,
        &ReferenceManifest {
            source: "WHO Child Growth Standards 2006 / PMK No. 2 Tahun 2020 (sample rows)".to_string(),
            version: None,
        },
    )?;
    Ok(())
}
