//! Operario Files - download handling and working directories.
//!
//! Robots that drive portals end up babysitting a download directory:
//! wait for the browser to finish writing, collect files by extension,
//! move what was processed into timestamped backups and clear the
//! directory for the next run. This crate is that toolbox.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod download;
pub mod error;
pub mod manage;

pub use download::{download_to_dir, wait_for_download, wait_for_files};
pub use error::{FileError, FileResult};
pub use manage::{
    backup_file, clear_dir, delete_by_extension, delete_file, has_file_with_prefix, list_files,
    move_by_extension, remove_dir,
};
