use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ennea_classifier::{
    Classifier, PrimaryQuestion, QuestionBank, StackQuestion, StageAnswers, StageKind,
    WingQuestion,
};
use ennea_relations::{
    CompatibilityCalculator, CompatibilityResult, InsightArtifact, PairTables, Synthesizer,
    TritypeComposer, TritypeSelection,
};
use ennea_taxonomy::{parse_json_or_toml, Category, CategoryProfiles};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use flags::{CenterFlag, StageFlag};

mod flags;
mod report;

#[derive(Parser)]
#[command(name = "ennea")]
#[command(about = "Enneagram classification, compatibility and tritypes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Output JSON on stdout (implies --quiet)
    #[arg(long, global = true)]
    json: bool,

    /// Category profiles file (JSON or TOML) replacing the bundled one
    #[arg(long, global = true)]
    categories: Option<PathBuf>,

    /// Question bank file (JSON or TOML) replacing the bundled one
    #[arg(long, global = true)]
    questions: Option<PathBuf>,

    /// Pair tables file (JSON or TOML) replacing the bundled one
    #[arg(long, global = true)]
    pairs: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a completed questionnaire
    Classify(ClassifyArgs),

    /// Score two categories and describe how they relate
    Compat(CompatArgs),

    /// Order a tritype and write its portrait
    Tritype(TritypeArgs),

    /// List the questionnaire
    Questions(QuestionsArgs),
}

#[derive(Args)]
struct ClassifyArgs {
    /// Answers file with `primary`, `wing` and `stack` maps of question id -> 1..5
    #[arg(long)]
    answers: PathBuf,
}

#[derive(Args)]
struct CompatArgs {
    /// First category (1-9)
    a: Category,

    /// Second category (1-9)
    b: Category,
}

#[derive(Args)]
struct TritypeArgs {
    /// Gut center category (8, 9 or 1)
    #[arg(long)]
    gut: Category,

    /// Heart center category (2, 3 or 4)
    #[arg(long)]
    heart: Category,

    /// Head center category (5, 6 or 7)
    #[arg(long)]
    head: Category,

    /// Center the tritype leads with
    #[arg(long, value_enum)]
    lead: CenterFlag,
}

#[derive(Args)]
struct QuestionsArgs {
    /// Only list one stage
    #[arg(long, value_enum)]
    stage: Option<StageFlag>,
}

#[derive(Serialize)]
struct CompatOutput<'a> {
    compatibility: &'a CompatibilityResult,
    insight: &'a InsightArtifact,
}

#[derive(Serialize)]
struct QuestionListing<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    primary: Option<&'a [PrimaryQuestion]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wing: Option<&'a [WingQuestion]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<&'a [StackQuestion]>,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    if cli.json {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match &cli.command {
        Commands::Classify(args) => run_classify(&cli, args),
        Commands::Compat(args) => run_compat(&cli, args),
        Commands::Tritype(args) => run_tritype(&cli, args),
        Commands::Questions(args) => run_questions(&cli, args),
    }
}

fn run_classify(cli: &Cli, args: &ClassifyArgs) -> Result<()> {
    let bank = load_questions(cli.questions.as_deref())?;
    let answers = load_answers(&args.answers)?;

    let result = Classifier::new(&bank)
        .classify(&answers)
        .with_context(|| format!("Failed to classify {}", args.answers.display()))?;
    log::info!("classified as {} {}", result.wing, result.stack_code());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render_classification(&result));
    }
    Ok(())
}

fn run_compat(cli: &Cli, args: &CompatArgs) -> Result<()> {
    let profiles = load_profiles(cli.categories.as_deref())?;
    let tables = load_pairs(cli.pairs.as_deref())?;

    let calculator = CompatibilityCalculator::new(tables.scoring())?;
    let compat = calculator.compatibility(args.a, args.b);
    let insight = Synthesizer::new(&profiles, &tables).synthesize(args.a, args.b, &compat)?;

    if cli.json {
        let output = CompatOutput {
            compatibility: &compat,
            insight: &insight,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", report::render_compatibility(&compat, &insight));
    }
    Ok(())
}

fn run_tritype(cli: &Cli, args: &TritypeArgs) -> Result<()> {
    let profiles = load_profiles(cli.categories.as_deref())?;
    let selection = TritypeSelection::new(args.gut, args.heart, args.head)?;
    let result = TritypeComposer::new(&profiles).compose(&selection, args.lead.as_domain());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render_tritype(&result));
    }
    Ok(())
}

fn run_questions(cli: &Cli, args: &QuestionsArgs) -> Result<()> {
    let bank = load_questions(cli.questions.as_deref())?;
    let stage = args.stage.map(StageFlag::as_domain);

    if cli.json {
        let wanted = |kind: StageKind| stage.map_or(true, |s| s == kind);
        let listing = QuestionListing {
            primary: wanted(StageKind::Primary).then(|| bank.primary_questions()),
            wing: wanted(StageKind::Wing).then(|| bank.wing_questions()),
            stack: wanted(StageKind::Stack).then(|| bank.stack_questions()),
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        print!("{}", report::render_questions(&bank, stage));
    }
    Ok(())
}

fn load_answers(path: &Path) -> Result<StageAnswers> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read answers {}", path.display()))?;
    parse_json_or_toml(&bytes).with_context(|| format!("Invalid answers in {}", path.display()))
}

fn load_profiles(path: Option<&Path>) -> Result<CategoryProfiles> {
    match path {
        Some(path) => CategoryProfiles::from_file(path),
        None => Ok(CategoryProfiles::bundled()),
    }
}

fn load_questions(path: Option<&Path>) -> Result<QuestionBank> {
    match path {
        Some(path) => QuestionBank::from_file(path),
        None => Ok(QuestionBank::bundled()),
    }
}

fn load_pairs(path: Option<&Path>) -> Result<PairTables> {
    match path {
        Some(path) => PairTables::from_file(path),
        None => Ok(PairTables::bundled()),
    }
}
