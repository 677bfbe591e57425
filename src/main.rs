use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use kira_rebaqc::error::Result;
use kira_rebaqc::input::{LoadOptions, load_frames, load_profile};
use kira_rebaqc::logging;
use kira_rebaqc::model::{ActivityKind, Coupling, Modifiers, Preset, RiskLevel};
use kira_rebaqc::pipeline::Engine;
use kira_rebaqc::pipeline::stage7_report::{
    FrameAssessment, ReportMode, Stage7Input, write_reports,
};

#[derive(Debug, Parser)]
#[command(name = "kira-rebaqc", version, about = "REBA-style ergonomic risk scoring from pose keypoints")]
struct Cli {
    /// Debug-level logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score every frame of a keypoint file and write reports.
    Run(RunArgs),
    /// Print a built-in scoring profile as JSON.
    Profile {
        #[arg(long, value_enum, default_value_t = Preset::Reba)]
        name: Preset,
    },
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Frame file (.json or .jsonl).
    #[arg(long)]
    input: PathBuf,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = ReportMode::Frame)]
    mode: ReportMode,

    /// Built-in scoring profile.
    #[arg(long, value_enum, default_value_t = Preset::Reba)]
    profile: Preset,

    /// JSON scoring profile; overrides --profile.
    #[arg(long)]
    profile_file: Option<PathBuf>,

    /// Handled load in kilograms.
    #[arg(long, default_value_t = 0.0)]
    weight: f64,

    #[arg(long, value_enum, default_value_t = Coupling::Good)]
    coupling: Coupling,

    #[arg(long, value_enum, default_value_t = ActivityKind::None)]
    activity: ActivityKind,

    /// Force or load is applied suddenly.
    #[arg(long)]
    sudden_force: bool,

    /// Image width / height of the source video.
    #[arg(long, default_value_t = 1.0)]
    aspect_ratio: f64,
}

impl RunArgs {
    fn modifiers(&self) -> Modifiers {
        Modifiers {
            weight_kg: self.weight,
            sudden_force: self.sudden_force,
            coupling: self.coupling,
            activity: self.activity,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Run(args) => run_assessment(&args),
        Command::Profile { name } => {
            println!("{}", serde_json::to_string_pretty(&name.profile())?);
            Ok(())
        }
    }
}

fn run_assessment(args: &RunArgs) -> Result<()> {
    let profile = match &args.profile_file {
        Some(path) => load_profile(path)?,
        None => args.profile.profile(),
    };
    let engine = Engine::new(profile)?;

    let options = LoadOptions {
        aspect_ratio: args.aspect_ratio,
    };
    let frames = load_frames(&args.input, &options)?;
    let defaults = args.modifiers();

    let assessments: Vec<FrameAssessment> = frames
        .iter()
        .map(|frame| {
            let modifiers = frame.modifiers.as_ref().unwrap_or(&defaults);
            FrameAssessment {
                frame: frame.index,
                timestamp_ms: frame.timestamp_ms,
                result: engine.assess(&frame.keypoints, modifiers),
            }
        })
        .collect();

    let degraded = assessments.iter().filter(|a| a.result.degraded).count();
    if degraded > 0 {
        warn!(
            "{} of {} frames scored with defaulted or one-sided segments",
            degraded,
            assessments.len()
        );
    }
    let high = assessments
        .iter()
        .filter(|a| a.result.risk.level >= RiskLevel::High)
        .count();
    info!(
        "assessed {} frames with profile {}; {} at high risk or above",
        assessments.len(),
        engine.profile().name,
        high
    );

    let input = Stage7Input {
        frames: &assessments,
        profile: engine.profile(),
        input_path: args.input.display().to_string(),
        tool_name: "kira-rebaqc".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &args.out, args.mode)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
