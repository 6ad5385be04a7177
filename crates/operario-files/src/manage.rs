//! Working-directory management: moves, cleanups, backups.

use crate::download::has_extension;
use crate::error::{FileError, FileResult};
use chrono::Local;
use std::path::{Path, PathBuf};

/// List the plain files in `dir` (subdirectories excluded).
pub fn list_files(dir: &Path) -> FileResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(FileError::io(dir))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(FileError::io(dir))?;
        if entry.path().is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Whether `dir` holds a file whose name starts with `prefix`
/// (case-insensitive).
pub fn has_file_with_prefix(dir: &Path, prefix: &str) -> FileResult<bool> {
    let prefix = prefix.to_lowercase();
    Ok(list_files(dir)?.iter().any(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase().starts_with(&prefix))
            .unwrap_or(false)
    }))
}

/// Move every file with `extension` from `source` into `destination`,
/// creating the destination if missing. Returns how many files moved.
pub fn move_by_extension(
    source: &Path,
    destination: &Path,
    extension: &str,
) -> FileResult<usize> {
    std::fs::create_dir_all(destination).map_err(FileError::io(destination))?;
    let mut moved = 0;
    for path in list_files(source)? {
        if !has_extension(&path, extension) {
            continue;
        }
        let file_name = path
            .file_name()
            .ok_or_else(|| FileError::NoFileName(path.display().to_string()))?;
        let target = destination.join(file_name);
        std::fs::rename(&path, &target).map_err(FileError::io(&path))?;
        moved += 1;
    }
    tracing::debug!(
        source = %source.display(),
        destination = %destination.display(),
        moved,
        "moved files by extension"
    );
    Ok(moved)
}

/// Delete everything inside `dir` (files and subdirectories), keeping the
/// directory itself. Creates the directory when missing.
pub fn clear_dir(dir: &Path) -> FileResult<()> {
    std::fs::create_dir_all(dir).map_err(FileError::io(dir))?;
    let entries = std::fs::read_dir(dir).map_err(FileError::io(dir))?;
    for entry in entries {
        let entry = entry.map_err(FileError::io(dir))?;
        let path = entry.path();
        if path.is_dir() {
            std::fs::remove_dir_all(&path).map_err(FileError::io(&path))?;
        } else {
            std::fs::remove_file(&path).map_err(FileError::io(&path))?;
        }
    }
    Ok(())
}

/// Delete a single file.
pub fn delete_file(path: &Path) -> FileResult<()> {
    std::fs::remove_file(path).map_err(FileError::io(path))
}

/// Delete every file in `dir` with the given extension.
pub fn delete_by_extension(dir: &Path, extension: &str) -> FileResult<usize> {
    let mut deleted = 0;
    for path in list_files(dir)? {
        if has_extension(&path, extension) {
            std::fs::remove_file(&path).map_err(FileError::io(&path))?;
            deleted += 1;
        }
    }
    Ok(deleted)
}

/// Delete `dir` and everything in it. Missing directory is not an error.
pub fn remove_dir(dir: &Path) -> FileResult<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir).map_err(FileError::io(dir))?;
    }
    Ok(())
}

/// Move `file` into `backup_dir` under a timestamped name:
/// `{prefix}_{original stem}_{YYYY_MM_DD_HH_MM_SS}{extension}`.
///
/// Returns the backup path.
pub fn backup_file(file: &Path, backup_dir: &Path, prefix: &str) -> FileResult<PathBuf> {
    std::fs::create_dir_all(backup_dir).map_err(FileError::io(backup_dir))?;

    let stem = file
        .file_stem()
        .ok_or_else(|| FileError::NoFileName(file.display().to_string()))?
        .to_string_lossy();
    let extension = file
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let timestamp = Local::now().format("%Y_%m_%d_%H_%M_%S");

    let target = backup_dir.join(format!("{prefix}_{stem}_{timestamp}{extension}"));
    std::fs::rename(file, &target).map_err(FileError::io(file))?;
    tracing::debug!(file = %file.display(), target = %target.display(), "file moved to backup");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_files_skips_directories() {
        let tmp = TempDir::new().expect("create temp dir");
        std::fs::write(tmp.path().join("a.txt"), b"a").expect("write file");
        std::fs::create_dir(tmp.path().join("sub")).expect("create subdir");

        let files = list_files(tmp.path()).expect("list files");
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.txt"));
    }

    #[test]
    fn test_has_file_with_prefix() {
        let tmp = TempDir::new().expect("create temp dir");
        std::fs::write(tmp.path().join("Relatorio_Abril.xlsx"), b"x").expect("write file");

        assert!(has_file_with_prefix(tmp.path(), "relatorio").expect("check prefix"));
        assert!(!has_file_with_prefix(tmp.path(), "nota").expect("check prefix"));
    }

    #[test]
    fn test_move_by_extension() {
        let tmp = TempDir::new().expect("create temp dir");
        let dest = tmp.path().join("pdfs");
        std::fs::write(tmp.path().join("a.pdf"), b"a").expect("write file");
        std::fs::write(tmp.path().join("b.PDF"), b"b").expect("write file");
        std::fs::write(tmp.path().join("c.txt"), b"c").expect("write file");

        let moved = move_by_extension(tmp.path(), &dest, ".pdf").expect("move files");
        assert_eq!(moved, 2);
        assert!(dest.join("a.pdf").is_file());
        assert!(tmp.path().join("c.txt").is_file());
    }

    #[test]
    fn test_clear_dir_keeps_directory() {
        let tmp = TempDir::new().expect("create temp dir");
        std::fs::write(tmp.path().join("a.txt"), b"a").expect("write file");
        std::fs::create_dir(tmp.path().join("sub")).expect("create subdir");
        std::fs::write(tmp.path().join("sub/b.txt"), b"b").expect("write nested file");

        clear_dir(tmp.path()).expect("clear dir");
        assert!(tmp.path().is_dir());
        assert!(list_files(tmp.path()).expect("list files").is_empty());
        assert!(!tmp.path().join("sub").exists());
    }

    #[test]
    fn test_delete_by_extension() {
        let tmp = TempDir::new().expect("create temp dir");
        std::fs::write(tmp.path().join("a.tmp"), b"a").expect("write file");
        std::fs::write(tmp.path().join("b.tmp"), b"b").expect("write file");
        std::fs::write(tmp.path().join("keep.txt"), b"k").expect("write file");

        assert_eq!(delete_by_extension(tmp.path(), "tmp").expect("delete"), 2);
        assert!(tmp.path().join("keep.txt").is_file());
    }

    #[test]
    fn test_backup_file_naming() {
        let tmp = TempDir::new().expect("create temp dir");
        let backup = tmp.path().join("backup");
        let original = tmp.path().join("planilha.xlsx");
        std::fs::write(&original, b"data").expect("write file");

        let target =
            backup_file(&original, &backup, "Arquivo_Original").expect("backup file");
        assert!(!original.exists());
        assert!(target.is_file());

        let name = target.file_name().expect("file name").to_string_lossy().into_owned();
        assert!(name.starts_with("Arquivo_Original_planilha_"));
        assert!(name.ends_with(".xlsx"));
    }

    #[test]
    fn test_remove_dir_missing_is_ok() {
        let tmp = TempDir::new().expect("create temp dir");
        remove_dir(&tmp.path().join("nope")).expect("missing dir tolerated");
    }
}
