//! Downloads and download-completion waits.

use crate::error::{FileError, FileResult};
use crate::manage::list_files;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Download a URL into `dir`, named after the last URL path segment.
///
/// The directory is created if missing and an existing file with the same
/// name is replaced. Returns the path of the downloaded file.
pub async fn download_to_dir(url: &str, dir: &Path) -> FileResult<PathBuf> {
    let parsed: reqwest::Url = url
        .parse()
        .map_err(|_| FileError::NoFileName(url.to_string()))?;
    let file_name = parsed
        .path_segments()
        .and_then(|segments| segments.last())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| FileError::NoFileName(url.to_string()))?
        .to_string();

    std::fs::create_dir_all(dir).map_err(FileError::io(dir))?;
    let target = dir.join(&file_name);
    if target.is_file() {
        std::fs::remove_file(&target).map_err(FileError::io(&target))?;
    }

    tracing::debug!(url, target = %target.display(), "downloading file");
    let bytes = reqwest::get(parsed)
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    std::fs::write(&target, &bytes).map_err(FileError::io(&target))?;
    Ok(target)
}

/// Wait until the files in `dir` stop growing.
///
/// Considers a download finished when the combined size of the directory's
/// files is unchanged across one check interval. Errors with
/// [`FileError::Timeout`] when the deadline passes first.
pub async fn wait_for_download(
    dir: &Path,
    timeout: Duration,
    check_interval: Duration,
) -> FileResult<()> {
    let started = Instant::now();
    let mut previous: Option<u64> = None;

    while started.elapsed() < timeout {
        let current = total_size(dir)?;
        if current > 0 && previous == Some(current) {
            return Ok(());
        }
        previous = Some(current);
        sleep(check_interval).await;
    }
    Err(FileError::Timeout {
        dir: dir.to_path_buf(),
        waited_secs: started.elapsed().as_secs(),
    })
}

/// Wait until at least one file with `extension` shows up in `dir`.
///
/// The extension match is case-insensitive and ignores a leading dot.
/// Returns the matching files, or [`FileError::Timeout`].
pub async fn wait_for_files(
    dir: &Path,
    extension: &str,
    timeout: Duration,
) -> FileResult<Vec<PathBuf>> {
    let started = Instant::now();

    loop {
        let matches: Vec<PathBuf> = list_files(dir)?
            .into_iter()
            .filter(|path| has_extension(path, extension))
            .collect();
        if !matches.is_empty() {
            return Ok(matches);
        }
        if started.elapsed() >= timeout {
            return Err(FileError::Timeout {
                dir: dir.to_path_buf(),
                waited_secs: started.elapsed().as_secs(),
            });
        }
        sleep(Duration::from_secs(1)).await;
    }
}

pub(crate) fn has_extension(path: &Path, extension: &str) -> bool {
    let wanted = extension.trim_start_matches('.');
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

fn total_size(dir: &Path) -> FileResult<u64> {
    let mut total = 0;
    for path in list_files(dir)? {
        let meta = std::fs::metadata(&path).map_err(FileError::io(&path))?;
        total += meta.len();
    }
    Ok(total)
}
