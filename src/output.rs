//! Terminal presentation: coloured reports, JSON output and progress bars.

use std::path::Path;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::hash::{BatchReport, ChecksumError, DumpReport, FileReport, Outcome, Progress, Verdict};

/// Print an error to stderr in the `shazam: error:` form.
pub fn print_error(err: &ChecksumError) {
    let text = err.to_string();
    let mut lines = text.lines();
    if let Some(first) = lines.next() {
        eprintln!("{} {}", "shazam: error:".red().bold(), first);
    }
    for line in lines {
        eprintln!("  {}", line.dimmed());
    }
}

/// One inline message for a single missing file, an itemised list for several.
pub fn print_missing(paths: &[&Path]) {
    match paths {
        [] => {}
        [only] => eprintln!("{} cannot read: '{}'", "shazam: error:".red().bold(), only.display()),
        many => {
            eprintln!("{} Files that were not found or cannot be read:", "shazam: error:".red().bold());
            for path in many {
                eprintln!("  -> '{}'", path.display());
            }
        }
    }
}

fn verdict_line(entry: &FileReport) -> String {
    match &entry.verdict {
        Verdict::Match => format!("'{}' was not modified.", entry.path.display()).green().to_string(),
        Verdict::Mismatch => format!("'{}' was probably modified!", entry.path.display()).red().to_string(),
        Verdict::Error(reason) => format!("'{}': {}", entry.path.display(), reason).yellow().to_string(),
        Verdict::Computed => format!("'{}' was hashed.", entry.path.display()),
    }
}

/// Print the digest lines of a compute batch, `<digest> <path>` per file.
pub fn print_sums(report: &BatchReport) {
    for entry in &report.entries {
        match &entry.digest {
            Some(digest) => println!("{} {}", digest, entry.path.display()),
            None => println!("{}", verdict_line(entry)),
        }
    }
    if let Some((path, lines)) = &report.written {
        println!("\nFile '{}' was created with {} entries!", path.display(), lines);
    }
    print_missing(&report.missing());
    if report.unwritten.is_some() {
        print_error(&ChecksumError::NoAvailableFiles);
    }
}

/// Print the result of a verify batch; `verbose` adds both checksums per file.
pub fn print_checks(report: &BatchReport, verbose: bool) {
    let alg = report.algorithm.name().to_uppercase();
    for entry in &report.entries {
        if verbose {
            println!(" ┌── {}", verdict_line(entry));
            println!(" │ ORIGINAL {}SUM:  {}", alg, entry.reference.as_deref().unwrap_or("-"));
            println!(" │ CURRENT  {}SUM:  {}", alg, entry.digest.as_deref().unwrap_or("-"));
            println!(" └──────────────");
        } else {
            println!("{}", verdict_line(entry));
        }
    }
    if report.entries.len() > 1 {
        let summary = format!(
            "{} matched, {} modified, {} failed",
            report.matches(),
            report.mismatches(),
            report.errors()
        );
        println!("\n{}", summary.bold());
    }
    if !report.missing().is_empty() && !report.entries.is_empty() {
        println!();
    }
    print_missing(&report.missing());
}

/// Print every digest of one file.
pub fn print_dump(report: &DumpReport) {
    let name = report
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.path.display().to_string());
    println!(" ┌── '{}'", name.bold());
    for (alg, digest) in &report.digests {
        println!(" │ {:>6}: {} {}", alg.name(), digest, report.path.display());
    }
    println!(" └────────────────────");
}

/// Print any serialisable report as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Process exit code for a batch: 0 success, 1 failure or mismatch, 2 partial success.
pub fn exit_code(report: &BatchReport) -> i32 {
    match report.outcome {
        Outcome::Failure => 1,
        _ if !report.all_matched() => 1,
        Outcome::PartialSuccess => 2,
        Outcome::Success => 0,
    }
}

/// Progress observer drawing an indicatif bar on stderr.
pub struct BarProgress {
    bar: Option<ProgressBar>,
}

impl BarProgress {
    pub fn new() -> Self {
        Self { bar: None }
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for BarProgress {
    fn begin(&mut self, total: u64, label: &str) {
        let bar = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar.set_message(label.to_string());
        self.bar = Some(bar);
    }

    fn advance(&mut self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn end(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
