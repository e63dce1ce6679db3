// Batch regression sweeps over word-list files. An abusive list must come
// back fully censored; a clean list must pass through untouched, both line
// by line and recombined into long texts, and optionally interleaved with
// prepositions (the combination that historically produced the most false
// positives).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tokio::fs;
use tracing::{info, warn};

use crate::censor::Censor;

/// English function words used by the preposition sweep.
pub const PREPOSITIONS_EN: &[&str] = &[
    "a", "an", "the", "at", "in", "about", "before", "against", "for", "to", "by", "from", "of",
    "since", "with", "on", "off", "up", "out", "ago", "onto", "over", "past", "through", "under",
    "till", "untill",
];

/// Combined clean lines are flushed through the censor once they exceed this
/// many characters, so long-text behavior gets exercised too.
const COMBINED_FLUSH_CHARS: usize = 2000;

/// Knobs shared by all sweeps.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Stop scanning a file after this many failures.
    pub failure_limit: usize,
    /// Show a progress bar for the long preposition sweep.
    pub show_progress: bool,
    /// Censored outputs containing one of these substrings are known-bad
    /// word/preposition combinations and do not count as failures.
    pub allowlist: Vec<String>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            failure_limit: 10,
            show_progress: true,
            allowlist: Vec::new(),
        }
    }
}

/// One line (or combination) that did not behave as expected.
#[derive(Debug, Clone, Serialize)]
pub struct SweepFailure {
    pub file: PathBuf,
    pub text: String,
    pub censored: String,
    /// Pattern that fired, for false-positive hunting.
    pub pattern: Option<String>,
}

/// Aggregated results of a batch run, serialized with `--stats-out`.
#[derive(Debug, Default, Serialize)]
pub struct RunStats {
    pub files_checked: usize,
    pub lines_checked: u64,
    /// Abusive lines the censor left unchanged.
    pub missed_abusive: Vec<SweepFailure>,
    /// Clean lines or combinations the censor altered.
    pub false_positives: Vec<SweepFailure>,
}

impl RunStats {
    pub fn is_clean(&self) -> bool {
        self.missed_abusive.is_empty() && self.false_positives.is_empty()
    }

    /// Write the report as pretty JSON.
    pub async fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write stats to {}", path.display()))?;
        info!("Wrote run stats to {}", path.display());
        Ok(())
    }
}

async fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(content
        .lines()
        .map(|l| l.trim_end_matches('\r').to_string())
        .filter(|l| !l.is_empty())
        .collect())
}

/// Every line of `path` is abusive and must be altered by the censor.
/// Returns true when the file passed in full.
pub async fn sweep_abusive_file(
    censor: &mut Censor,
    path: &Path,
    config: &SweepConfig,
    stats: &mut RunStats,
) -> Result<bool> {
    info!("Checking abusive word file {}", path.display());
    let lines = read_lines(path).await?;
    stats.files_checked += 1;

    let mut failures = 0;
    for line in &lines {
        stats.lines_checked += 1;
        let censored = censor.censor(line)?;
        if censored == *line {
            warn!("Abusive line not censored: {line}");
            stats.missed_abusive.push(SweepFailure {
                file: path.to_path_buf(),
                text: line.clone(),
                censored,
                pattern: None,
            });
            failures += 1;
            if failures > config.failure_limit {
                break;
            }
        }
    }

    if failures == 0 {
        info!("All {} abusive lines censored in {}", lines.len(), path.display());
    }
    Ok(failures == 0)
}

/// Every line of `path` is clean and must pass through unchanged. Lines are
/// also recombined into long texts and re-checked, since span windows can
/// match across line boundaries once lines are joined.
pub async fn sweep_clean_file(
    censor: &mut Censor,
    path: &Path,
    config: &SweepConfig,
    stats: &mut RunStats,
) -> Result<bool> {
    info!("Checking clean word file {}", path.display());
    let lines = read_lines(path).await?;
    stats.files_checked += 1;

    let mut failures = 0;
    let mut combined = String::new();

    for line in &lines {
        stats.lines_checked += 1;
        combined.push(' ');
        combined.push_str(line);

        let censored = censor.censor(line)?;
        if censored != *line {
            if record_false_positive(censor, path, line, censored, stats, &config.allowlist) {
                failures += 1;
            }
            combined.clear();
            if failures > config.failure_limit {
                break;
            }
        }

        if combined.chars().count() > COMBINED_FLUSH_CHARS {
            let censored = censor.censor(&combined)?;
            if censored != combined {
                if record_false_positive(censor, path, &combined, censored, stats, &config.allowlist)
                {
                    failures += 1;
                }
                if failures > config.failure_limit {
                    break;
                }
            }
            combined.clear();
        }
    }

    if failures <= config.failure_limit && !combined.is_empty() {
        let censored = censor.censor(&combined)?;
        if censored != combined
            && record_false_positive(censor, path, &combined, censored, stats, &config.allowlist)
        {
            failures += 1;
        }
    }

    if failures == 0 {
        info!("All {} clean lines untouched in {}", lines.len(), path.display());
    }
    Ok(failures == 0)
}

/// Combine every word of `path` with the preposition list ("word at word in
/// word ...") and expect no replacements. This is the slowest sweep, hence
/// the progress bar.
pub async fn sweep_clean_with_prepositions(
    censor: &mut Censor,
    path: &Path,
    prepositions: &[&str],
    config: &SweepConfig,
    stats: &mut RunStats,
) -> Result<bool> {
    info!("Checking {} against preposition combinations", path.display());
    let words = read_lines(path).await?;
    stats.files_checked += 1;

    let bar = if config.show_progress {
        let bar = ProgressBar::new(words.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                .expect("static progress template"),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut failures = 0;
    for word in &words {
        bar.inc(1);
        stats.lines_checked += 1;

        // "w p1 w p2 w ... pn w": each preposition adjacent to the word on
        // both sides, the combination that best provokes window matches.
        let mut combined = String::with_capacity(word.len() * (prepositions.len() + 2));
        combined.push_str(word);
        for preposition in prepositions {
            combined.push(' ');
            combined.push_str(preposition);
            combined.push(' ');
            combined.push_str(word);
        }

        let censored = censor.censor(&combined)?;
        if censored != combined {
            if record_false_positive(censor, path, &combined, censored, stats, &config.allowlist) {
                failures += 1;
            }
            if failures > config.failure_limit {
                break;
            }
        }
    }
    bar.finish_and_clear();

    if failures == 0 {
        info!("No preposition-combination false positives in {}", path.display());
    }
    Ok(failures == 0)
}

/// Record a clean-text alteration unless the allowlist covers it. Returns
/// true when it counted as a failure.
fn record_false_positive(
    censor: &Censor,
    path: &Path,
    text: &str,
    censored: String,
    stats: &mut RunStats,
    allowlist: &[String],
) -> bool {
    if allowlist.iter().any(|allowed| censored.contains(allowed)) {
        return false;
    }
    warn!(
        pattern = censor.last_pattern(),
        "False positive in {}: {censored}",
        path.display()
    );
    stats.false_positives.push(SweepFailure {
        file: path.to_path_buf(),
        text: text.to_string(),
        censored,
        pattern: censor.last_pattern().map(str::to_string),
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::censor::Language;

    fn config() -> SweepConfig {
        SweepConfig {
            show_progress: false,
            ..SweepConfig::default()
        }
    }

    async fn write_temp(lines: &[&str]) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, lines.join("\n")).await.unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn test_abusive_sweep_passes_on_real_words() {
        let (_dir, path) = write_temp(&["fuck", "f-u-c-k", "$hit", "биточки нет", "bitch"]).await;
        let mut censor = Censor::diagnostic(Language::English);
        let mut stats = RunStats::default();
        // "биточки нет" is not abusive, so this sweep must report a miss.
        let ok = sweep_abusive_file(&mut censor, &path, &config(), &mut stats)
            .await
            .unwrap();
        assert!(!ok);
        assert_eq!(stats.missed_abusive.len(), 1);
        assert_eq!(stats.missed_abusive[0].text, "биточки нет");
    }

    #[tokio::test]
    async fn test_clean_sweep_flags_false_positive() {
        let (_dir, path) = write_temp(&["grape", "fuck", "melon"]).await;
        let mut censor = Censor::new(Language::English);
        let mut stats = RunStats::default();
        let ok = sweep_clean_file(&mut censor, &path, &config(), &mut stats)
            .await
            .unwrap();
        assert!(!ok);
        assert_eq!(stats.false_positives.len(), 1);
        assert_eq!(stats.false_positives[0].pattern.as_deref(), Some("fuck"));
    }

    #[tokio::test]
    async fn test_clean_sweep_passes_clean_words() {
        let (_dir, path) = write_temp(&["grape", "melon", "concatenate", "scrapyard"]).await;
        let mut censor = Censor::new(Language::English);
        let mut stats = RunStats::default();
        let ok = sweep_clean_file(&mut censor, &path, &config(), &mut stats)
            .await
            .unwrap();
        assert!(ok, "{:?}", stats.false_positives);
        assert!(stats.is_clean());
    }

    #[tokio::test]
    async fn test_preposition_sweep_catches_boundary_match() {
        // "an" followed by "us" concatenates to "anus" inside the window,
        // the classic preposition false positive.
        let (_dir, path) = write_temp(&["us"]).await;
        let mut censor = Censor::new(Language::English);
        let mut stats = RunStats::default();
        let ok = sweep_clean_with_prepositions(
            &mut censor,
            &path,
            PREPOSITIONS_EN,
            &config(),
            &mut stats,
        )
        .await
        .unwrap();
        assert!(!ok);
        assert_eq!(stats.false_positives[0].pattern.as_deref(), Some("anus"));
    }

    #[tokio::test]
    async fn test_preposition_sweep_passes_harmless_words() {
        let (_dir, path) = write_temp(&["grape", "melon"]).await;
        let mut censor = Censor::new(Language::English);
        let mut stats = RunStats::default();
        let ok = sweep_clean_with_prepositions(
            &mut censor,
            &path,
            PREPOSITIONS_EN,
            &config(),
            &mut stats,
        )
        .await
        .unwrap();
        assert!(ok, "{:?}", stats.false_positives);
    }

    #[tokio::test]
    async fn test_allowlist_suppresses_known_combination() {
        let (_dir, path) = write_temp(&["fuck"]).await;
        let mut censor = Censor::diagnostic(Language::English);
        let mut stats = RunStats::default();
        let config = SweepConfig {
            show_progress: false,
            allowlist: vec!["<FUCK>".to_string()],
            ..SweepConfig::default()
        };
        let ok = sweep_clean_file(&mut censor, &path, &config, &mut stats)
            .await
            .unwrap();
        assert!(ok);
        assert!(stats.false_positives.is_empty());
    }

    #[tokio::test]
    async fn test_stats_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        let stats = RunStats {
            files_checked: 2,
            lines_checked: 10,
            ..RunStats::default()
        };
        stats.write_json(&path).await.unwrap();
        let raw = fs::read_to_string(&path).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["files_checked"], 2);
        assert_eq!(value["lines_checked"], 10);
    }
}
