// Batch orchestration module
// Classify, hash, compare and report over the files of one invocation

use std::path::{Path, PathBuf};

use super::algorithm::DigestAlgorithm;
use super::engine::HashEngine;
use super::error::ChecksumError;
use super::file::{ExistenceState, FileIdentity};
use super::manifest::SumManifest;
use super::progress::{NoProgress, Progress};
use super::registry::FileRegistry;
use super::verify;

/// Stages of one invocation, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Classifying,
    Hashing,
    Comparing,
    Reporting,
    Done,
}

/// Overall result of a batch operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Every requested file was processed
    Success,
    /// Some files were not found or unreadable, the rest were processed
    PartialSuccess,
    /// Nothing could be processed
    Failure,
}

/// What happened to one file
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Digest computed, nothing to compare against
    Computed,
    Match,
    Mismatch,
    /// Hashing or comparison failed for this file only
    Error(String),
}

/// Result for a single file
#[derive(Debug, Clone, serde::Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub algorithm: DigestAlgorithm,
    pub digest: Option<String>,
    pub reference: Option<String>,
    pub verdict: Verdict,
    #[serde(skip)]
    index: usize,
}

/// Report of a compute or verify batch
#[derive(Debug, Clone, serde::Serialize)]
pub struct BatchReport {
    pub algorithm: DigestAlgorithm,
    pub entries: Vec<FileReport>,
    pub not_found: Vec<PathBuf>,
    pub unreadable: Vec<PathBuf>,
    /// Sum file written by this batch and its number of lines
    pub written: Option<(PathBuf, usize)>,
    /// Sum file that was requested but not written, since no digest was available
    pub unwritten: Option<PathBuf>,
    pub outcome: Outcome,
}

impl BatchReport {
    fn new(algorithm: DigestAlgorithm) -> Self {
        Self {
            algorithm,
            entries: Vec::new(),
            not_found: Vec::new(),
            unreadable: Vec::new(),
            written: None,
            unwritten: None,
            outcome: Outcome::Failure,
        }
    }

    pub fn matches(&self) -> usize {
        self.entries.iter().filter(|e| e.verdict == Verdict::Match).count()
    }

    pub fn mismatches(&self) -> usize {
        self.entries.iter().filter(|e| e.verdict == Verdict::Mismatch).count()
    }

    pub fn errors(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.verdict, Verdict::Error(_)))
            .count()
    }

    /// Not found and unreadable paths together
    pub fn missing(&self) -> Vec<&Path> {
        self.not_found
            .iter()
            .chain(self.unreadable.iter())
            .map(PathBuf::as_path)
            .collect()
    }

    /// True when no comparison failed or errored
    pub fn all_matched(&self) -> bool {
        self.mismatches() == 0 && self.errors() == 0
    }

    fn finish(&mut self) {
        let processed = self
            .entries
            .iter()
            .any(|e| !matches!(e.verdict, Verdict::Error(_)));
        self.outcome = if !processed {
            Outcome::Failure
        } else if self.not_found.is_empty() && self.unreadable.is_empty() {
            Outcome::Success
        } else {
            Outcome::PartialSuccess
        };
    }
}

/// Every supported digest of one file
#[derive(Debug, Clone, serde::Serialize)]
pub struct DumpReport {
    pub path: PathBuf,
    pub digests: Vec<(DigestAlgorithm, String)>,
}

/// Runs the supported workflows over a registry owned for one invocation
pub struct Processor {
    registry: FileRegistry,
    engine: HashEngine,
    progress: Box<dyn Progress>,
}

impl Processor {
    pub fn new(engine: HashEngine) -> Self {
        Self {
            registry: FileRegistry::new(),
            engine,
            progress: Box::new(NoProgress),
        }
    }

    pub fn with_progress(mut self, progress: Box<dyn Progress>) -> Self {
        self.progress = progress;
        self
    }

    pub fn registry(&self) -> &FileRegistry {
        &self.registry
    }

    fn stage(&self, stage: Stage) {
        tracing::debug!(?stage, tracked = self.registry.len(), "batch stage");
    }

    /// Hash every found path and report the rest as missing
    ///
    /// With `output` set, the digests are also written to that sum file.
    pub fn compute_only(
        &mut self,
        paths: &[PathBuf],
        algorithm: DigestAlgorithm,
        output: Option<&Path>,
    ) -> Result<BatchReport, ChecksumError> {
        self.stage(Stage::Classifying);
        let mut files: Vec<FileIdentity> = paths
            .iter()
            .map(|p| FileIdentity::new(p, None, &mut self.registry))
            .collect();
        let mut report = BatchReport::new(algorithm);

        self.stage(Stage::Hashing);
        self.hash_found(&mut files, algorithm, &mut report);

        self.stage(Stage::Reporting);
        report.finish();
        if let Some(target) = output {
            match SumManifest::write(target, &files, algorithm) {
                Ok(n) => report.written = Some((target.to_path_buf(), n)),
                Err(ChecksumError::NoAvailableFiles) => {
                    tracing::warn!(path = %target.display(), "no digests to write");
                    report.unwritten = Some(target.to_path_buf());
                }
                Err(e) => return Err(e),
            }
        }
        self.stage(Stage::Done);
        Ok(report)
    }

    /// Hash one file and compare it against `reference`
    ///
    /// When `algorithm` is not given it is inferred from the file name or the
    /// reference length.
    pub fn verify_one(
        &mut self,
        path: &Path,
        reference: &str,
        algorithm: Option<DigestAlgorithm>,
    ) -> Result<BatchReport, ChecksumError> {
        self.stage(Stage::Classifying);
        let mut files = vec![FileIdentity::new(path, Some(reference), &mut self.registry)];
        if files[0].reference_value().is_none() {
            return Err(ChecksumError::InvalidHexReference {
                reference: reference.to_string(),
            });
        }
        let algorithm = match algorithm {
            Some(alg) => alg,
            None => verify::infer_algorithm(&files[0])?,
        };
        tracing::debug!(%algorithm, "verifying single file");

        let mut report = BatchReport::new(algorithm);
        self.stage(Stage::Hashing);
        self.hash_found(&mut files, algorithm, &mut report);

        self.stage(Stage::Comparing);
        self.compare(&files, algorithm, &mut report);

        self.stage(Stage::Reporting);
        report.finish();
        self.stage(Stage::Done);
        Ok(report)
    }

    /// Verify every entry of a sum file
    ///
    /// The algorithm comes from `algorithm` or else the sum file's name. Any
    /// structural problem with the sum file aborts before hashing starts.
    pub fn verify_many(
        &mut self,
        manifest: &Path,
        algorithm: Option<DigestAlgorithm>,
    ) -> Result<BatchReport, ChecksumError> {
        let algorithm = match algorithm {
            Some(alg) => alg,
            None => SumManifest::algorithm_for(manifest)?,
        };
        let lines = SumManifest::parse(manifest)?;

        self.stage(Stage::Classifying);
        let mut files: Vec<FileIdentity> = lines
            .iter()
            .map(|line| FileIdentity::new(&line.path, Some(&line.reference), &mut self.registry))
            .collect();
        let mut report = BatchReport::new(algorithm);

        self.stage(Stage::Hashing);
        self.hash_found(&mut files, algorithm, &mut report);

        self.stage(Stage::Comparing);
        self.compare(&files, algorithm, &mut report);

        self.stage(Stage::Reporting);
        report.finish();
        self.stage(Stage::Done);
        Ok(report)
    }

    /// Hash one file with every supported algorithm in a single pass
    pub fn dump_all(&mut self, path: &Path) -> Result<DumpReport, ChecksumError> {
        self.stage(Stage::Classifying);
        let mut file = FileIdentity::new(path, None, &mut self.registry);
        match self.registry.classify(&file.full_path()) {
            Some(ExistenceState::Found) => {}
            Some(ExistenceState::ExistsButUnreadable) => {
                return Err(ChecksumError::Unreadable { path: file.full_path() })
            }
            _ => return Err(ChecksumError::FileNotFound { path: file.full_path() }),
        }

        self.stage(Stage::Hashing);
        self.engine
            .compute(&mut file, &DigestAlgorithm::ALL, self.progress.as_mut())?;

        self.stage(Stage::Reporting);
        let digests = DigestAlgorithm::ALL
            .into_iter()
            .filter_map(|alg| file.digest(alg).map(|d| (alg, d.to_string())))
            .collect();
        self.stage(Stage::Done);
        Ok(DumpReport {
            path: file.full_path(),
            digests,
        })
    }

    /// Hash the found files, recording missing ones and per-file failures
    ///
    /// A single file reports progress per chunk, several files per file.
    fn hash_found(
        &mut self,
        files: &mut [FileIdentity],
        algorithm: DigestAlgorithm,
        report: &mut BatchReport,
    ) {
        let search = self.registry.search(files);
        report
            .not_found
            .extend(search.not_found.iter().map(|&i| files[i].full_path()));
        report
            .unreadable
            .extend(search.unreadable.iter().map(|&i| files[i].full_path()));
        let found = search.found;
        if found.is_empty() {
            tracing::warn!("none of the given files were found");
            return;
        }

        let per_file = found.len() > 1;
        if per_file {
            self.progress.begin(found.len() as u64, "Hashing files");
        }
        for idx in found {
            let file = &mut files[idx];
            let result = if per_file {
                self.engine.compute(file, &[algorithm], &mut NoProgress)
            } else {
                self.engine.compute(file, &[algorithm], self.progress.as_mut())
            };
            let verdict = match result {
                Ok(()) => Verdict::Computed,
                Err(e) => {
                    tracing::warn!(path = %file.full_path().display(), error = %e, "hashing failed");
                    Verdict::Error(first_line(&e))
                }
            };
            report.entries.push(FileReport {
                path: file.full_path(),
                algorithm,
                digest: file.digest(algorithm).map(str::to_string),
                reference: file.reference().map(str::to_string),
                verdict,
                index: idx,
            });
            if per_file {
                self.progress.advance();
            }
        }
        if per_file {
            self.progress.end();
        }
    }

    /// Turn computed entries into match, mismatch or error verdicts
    fn compare(&self, files: &[FileIdentity], algorithm: DigestAlgorithm, report: &mut BatchReport) {
        for entry in report.entries.iter_mut() {
            if entry.verdict != Verdict::Computed {
                continue;
            }
            entry.verdict = match verify::matches(&files[entry.index], algorithm) {
                Ok(true) => Verdict::Match,
                Ok(false) => Verdict::Mismatch,
                Err(e) => Verdict::Error(first_line(&e)),
            };
        }
    }
}

fn first_line(err: &ChecksumError) -> String {
    err.to_string().lines().next().unwrap_or_default().to_string()
}
