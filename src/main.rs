use anyhow::Context;
use clap::{Parser, ValueEnum};
use medirank::{Bleeding, DiagnosisReport, Diagnoser, Nausea, PatientRecord, ReferenceTable, Severity};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Diagnosis support tool using Euclidean distance-based similarity analysis
#[derive(Parser, Debug)]
#[command(name = "medirank")]
#[command(about = "Rank reference diseases against a patient's symptoms", long_about = None)]
struct Args {
    /// Patient name shown on the report
    #[arg(long, default_value = "John Doe")]
    patient_name: String,

    /// Doctor name shown on the report
    #[arg(long, default_value = "Dr. Zahari")]
    doctor_name: String,

    /// Body temperature in Celsius (35.0 - 42.0)
    #[arg(long, default_value_t = 38.5)]
    fever: f64,

    /// Platelet count (10 - 500)
    #[arg(long, default_value_t = 55.0)]
    platelet: f64,

    /// WBC count (0.5 - 30.0)
    #[arg(long, default_value_t = 3.0)]
    wbc: f64,

    /// Bleeding: No, Yes
    #[arg(long, default_value = "No")]
    bleeding: Bleeding,

    /// Fatigue: None, Mild, Moderate, Severe
    #[arg(long, default_value = "None")]
    fatigue: Severity,

    /// Pain: None, Mild, Moderate, Severe
    #[arg(long, default_value = "None")]
    pain: Severity,

    /// Nausea: None, Slight, Frequent
    #[arg(long, default_value = "None")]
    nausea: Nausea,

    /// JSON reference table file; the built-in table is used when omitted
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Args {
    fn record(&self) -> PatientRecord {
        PatientRecord {
            patient_name: Some(self.patient_name.clone()),
            doctor_name: Some(self.doctor_name.clone()),
            fever: self.fever,
            platelet: self.platelet,
            wbc: self.wbc,
            bleeding: self.bleeding,
            fatigue: self.fatigue,
            pain: self.pain,
            nausea: self.nausea,
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

    // stdout carries the report
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting MediRank v{}", env!("CARGO_PKG_VERSION"));

    let diagnoser = match &args.tables {
        Some(path) => {
            info!("Loading reference table from {:?}", path);
            let table = ReferenceTable::from_path(path)
                .with_context(|| format!("failed to load reference table {}", path.display()))?;
            Diagnoser::from_references(table)
        }
        None => Diagnoser::builtin(),
    };
    info!("{} reference diseases loaded", diagnoser.references().len());

    let record = args.record();
    record.validate()?;

    let diagnosis = diagnoser.diagnose(&record)?;
    let report = DiagnosisReport::new(&record, &diagnosis);

    match args.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.to_json_pretty()?),
    }

    Ok(())
}
