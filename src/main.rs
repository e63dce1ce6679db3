use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use muffle::censor::{rules, Censor, Language};
use muffle::harness::{self, RunStats, SweepConfig, PREPOSITIONS_EN};

#[derive(Parser, Debug)]
#[command(name = "muffle")]
#[command(about = "Obfuscation-aware profanity censor for multilingual chat text")]
#[command(version)]
struct Args {
    /// Text to censor; omit when running rule checks or batch sweeps
    text: Option<String>,

    /// Language of the pattern set: en, de, es or ru
    #[arg(long, default_value = "en")]
    lang: String,

    /// Bracket-diagnostic output (<FLAGGED>) instead of a censor string
    #[arg(long)]
    diagnostic: bool,

    /// Replacement string for censored regions
    #[arg(long)]
    replacement: Option<String>,

    /// Validate the built-in pattern set of every language and exit
    #[arg(long)]
    check_rules: bool,

    /// File(s) of abusive lines that must all be censored (glob patterns allowed)
    #[arg(long)]
    abusive_file: Vec<String>,

    /// File(s) of clean lines that must pass through unchanged (glob patterns allowed)
    #[arg(long)]
    clean_file: Vec<String>,

    /// File(s) of clean words to combine with prepositions (glob patterns allowed)
    #[arg(long)]
    prepositions_file: Vec<String>,

    /// Stats output file path for batch sweeps
    #[arg(long, default_value = "run_stats.json")]
    stats_out: PathBuf,

    /// Abort a batch run on the first failing file
    #[arg(long)]
    fail_fast: bool,

    /// Suppress console progress bars
    #[arg(long)]
    no_progress: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    let language: Language = args
        .lang
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    if args.check_rules {
        return check_rules();
    }

    let batch = !args.abusive_file.is_empty()
        || !args.clean_file.is_empty()
        || !args.prepositions_file.is_empty();

    if batch {
        return run_batch(&args, language).await;
    }

    let text = match &args.text {
        Some(text) => text.clone(),
        None => anyhow::bail!("No text given; pass a text argument or a batch flag"),
    };

    let mut censor = build_censor(&args, language);
    let censored = censor.censor(&text)?;
    if let Some(pattern) = censor.last_pattern() {
        info!(pattern, "Replacement made");
    }
    println!("{censored}");
    Ok(())
}

fn build_censor(args: &Args, language: Language) -> Censor {
    if args.diagnostic {
        Censor::diagnostic(language)
    } else if let Some(replacement) = &args.replacement {
        Censor::with_replacement(language, replacement.clone())
    } else {
        Censor::new(language)
    }
}

fn check_rules() -> Result<()> {
    info!("Validating built-in pattern sets");
    let violations = rules::validate_all();
    if violations.is_empty() {
        println!("All rules are valid.");
        return Ok(());
    }
    for violation in &violations {
        eprintln!("{violation}");
    }
    anyhow::bail!("{} rule violation(s) found", violations.len());
}

/// Expand a glob-capable path argument into concrete paths.
fn expand(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let mut matched = false;
        for entry in glob::glob(pattern)? {
            paths.push(entry?);
            matched = true;
        }
        if !matched {
            anyhow::bail!("No files match {pattern}");
        }
    }
    Ok(paths)
}

async fn run_batch(args: &Args, language: Language) -> Result<()> {
    info!(lang = language.code(), "Starting batch sweep");

    // Rule problems invalidate every downstream result, so gate on them first.
    let violations = rules::validate_all();
    if !violations.is_empty() {
        for violation in &violations {
            eprintln!("{violation}");
        }
        anyhow::bail!("Fix the rules before sweeping word lists");
    }

    // Diagnostic mode shows the reviewer what fired in each failure report.
    let mut censor = Censor::diagnostic(language);
    let config = SweepConfig {
        show_progress: !args.no_progress,
        ..SweepConfig::default()
    };
    let mut stats = RunStats::default();
    let mut all_passed = true;

    for path in expand(&args.abusive_file)? {
        let passed = harness::sweep_abusive_file(&mut censor, &path, &config, &mut stats).await?;
        all_passed &= passed;
        if !passed && args.fail_fast {
            break;
        }
    }

    if all_passed || !args.fail_fast {
        for path in expand(&args.clean_file)? {
            let passed = harness::sweep_clean_file(&mut censor, &path, &config, &mut stats).await?;
            all_passed &= passed;
            if !passed && args.fail_fast {
                break;
            }
        }
    }

    if all_passed || !args.fail_fast {
        for path in expand(&args.prepositions_file)? {
            let passed = harness::sweep_clean_with_prepositions(
                &mut censor,
                &path,
                PREPOSITIONS_EN,
                &config,
                &mut stats,
            )
            .await?;
            all_passed &= passed;
            if !passed && args.fail_fast {
                break;
            }
        }
    }

    stats.write_json(&args.stats_out).await?;

    println!(
        "muffle v{} - checked {} files, {} lines",
        env!("CARGO_PKG_VERSION"),
        stats.files_checked,
        stats.lines_checked
    );
    println!(
        "Missed abusive lines: {}, false positives: {}",
        stats.missed_abusive.len(),
        stats.false_positives.len()
    );

    if !stats.is_clean() {
        anyhow::bail!("Batch sweep failed; see {}", args.stats_out.display());
    }
    println!("Batch sweep passed.");
    Ok(())
}
