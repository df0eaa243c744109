use crate::backend::{ImageBackend, ResizeMode};
use crate::constants::{
    DEFAULT_JOBS, DEFAULT_QUALITY, ORIGINAL_FILE_EXTENSION, PROGRESS_BAR_CHARS,
    PROGRESS_BAR_TEMPLATE, TEMP_DIR_PREFIX, TEMP_DIR_RAND_LEN,
};
use crate::error::{ResizeError, Result};
use crate::processing::{process_single_image, StageOptions};
use crate::{info, verbose, warn};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// One resize run, fixed before any file is touched.
#[derive(Debug, Clone)]
pub struct ResizeJob {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub mode: ResizeMode,
    pub quality: u8,
    pub jobs: usize,
    /// Source file names in directory-listing order.
    pub files: Vec<String>,
}

impl ResizeJob {
    /// Builds a job and enumerates the `.jpg` files in `input_dir`.
    pub fn new(input_dir: PathBuf, output_dir: PathBuf, mode: ResizeMode) -> Result<Self> {
        let files = collect_jpg_files(&input_dir)?;
        Ok(Self {
            input_dir,
            output_dir,
            mode,
            quality: DEFAULT_QUALITY,
            jobs: DEFAULT_JOBS,
            files,
        })
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// `0` means one worker per CPU.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing to do; no temp directory was created.
    NoInputFiles { input_dir: PathBuf },
    Completed { count: usize },
}

/// Per-run scratch directory inside the output directory.
///
/// Removed by [`TempWorkspace::close`] on normal paths and by `Drop` while
/// unwinding.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: TempDir,
}

impl TempWorkspace {
    pub fn create(parent: &Path) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(TEMP_DIR_PREFIX)
            .rand_bytes(TEMP_DIR_RAND_LEN)
            .tempdir_in(parent)
            .map_err(|source| ResizeError::DirectoryUnavailable {
                path: parent.to_path_buf(),
                source,
            })?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn close(self) -> Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir
            .close()
            .map_err(|source| ResizeError::Cleanup { path, source })
    }
}

pub fn is_jpg_file(path: &Path) -> bool {
    let expected = ORIGINAL_FILE_EXTENSION.trim_start_matches('.');
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext == expected)
        .unwrap_or(false)
}

/// Names of the `.jpg` files directly inside `input_dir`.
///
/// Case-sensitive; `photo.JPG` and `photo.jpeg` are skipped. Order is
/// whatever the directory listing yields.
pub fn collect_jpg_files(input_dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(input_dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || !is_jpg_file(path) {
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) => files.push(name.to_string()),
            None => warn!("Skipping non UTF-8 file name: {:?}", path),
        }
    }

    Ok(files)
}

fn create_progress_bar(total: usize) -> ProgressBar {
    if crate::logger::is_quiet() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::with_template(PROGRESS_BAR_TEMPLATE) {
        pb.set_style(style.progress_chars(PROGRESS_BAR_CHARS));
    }
    pb
}

fn report_progress(progress: &ProgressBar, index: usize, total: usize, original: &str, converted: &str) {
    progress.suspend(|| {
        info!("({}/{}) resized {} to {}", index + 1, total, original, converted);
    });
    progress.inc(1);
}

/// Drive every file of the job through the three stages.
///
/// The temp directory is created only when there is work, and removed on
/// every path out of this function. Files already written to the output
/// directory stay there when a later file fails.
pub fn run(job: &ResizeJob, backend: &dyn ImageBackend) -> Result<RunOutcome> {
    if job.files.is_empty() {
        info!("no jpg files found in {}", job.input_dir.display());
        return Ok(RunOutcome::NoInputFiles {
            input_dir: job.input_dir.clone(),
        });
    }

    let workspace = TempWorkspace::create(&job.output_dir)?;
    verbose!("Working directory: {}", workspace.path().display());

    let result = process_files(job, backend, workspace.path());
    let cleanup = workspace.close();

    let count = match (result, cleanup) {
        (Ok(count), Ok(())) => count,
        (Ok(_), Err(cleanup_err)) => return Err(cleanup_err),
        (Err(err), Ok(())) => return Err(err),
        (Err(err), Err(cleanup_err)) => {
            warn!("{}", cleanup_err);
            return Err(err);
        }
    };

    info!(
        "Done, resized {} jpg files (input dir: {}, output dir: {})",
        count,
        job.input_dir.display(),
        job.output_dir.display()
    );

    Ok(RunOutcome::Completed { count })
}

fn process_files(job: &ResizeJob, backend: &dyn ImageBackend, temp_dir: &Path) -> Result<usize> {
    let options = StageOptions {
        input_dir: &job.input_dir,
        temp_dir,
        output_dir: &job.output_dir,
        mode: job.mode,
        quality: job.quality,
    };
    let total = job.files.len();
    let progress = create_progress_bar(total);

    let result = if job.jobs <= 1 {
        process_sequential(job, backend, &options, &progress)
    } else {
        process_parallel(job, backend, &options, &progress)
    };

    progress.finish_and_clear();
    result
}

/// One file at a time, stopping at the first failure.
fn process_sequential(
    job: &ResizeJob,
    backend: &dyn ImageBackend,
    options: &StageOptions<'_>,
    progress: &ProgressBar,
) -> Result<usize> {
    let total = job.files.len();

    for (index, original) in job.files.iter().enumerate() {
        let converted = process_single_image(backend, original, options)?;
        report_progress(progress, index, total, original, &converted);
    }

    Ok(total)
}

/// `job.jobs` files at a time on a rayon pool.
///
/// Results are reported in listing order. A failure stops the run after its
/// chunk; other files of that chunk may already be written.
fn process_parallel(
    job: &ResizeJob,
    backend: &dyn ImageBackend,
    options: &StageOptions<'_>,
    progress: &ProgressBar,
) -> Result<usize> {
    let total = job.files.len();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(job.jobs)
        .build()?;
    verbose!("Using {} parallel workers", job.jobs);

    for (chunk_index, chunk) in job.files.chunks(job.jobs).enumerate() {
        let results: Vec<Result<String>> = pool.install(|| {
            chunk
                .par_iter()
                .map(|original| process_single_image(backend, original, options))
                .collect()
        });

        for (offset, (original, result)) in chunk.iter().zip(results).enumerate() {
            let converted = result?;
            report_progress(progress, chunk_index * job.jobs + offset, total, original, &converted);
        }
    }

    Ok(total)
}
