//! Locating and reading puzzle inputs

use crate::error::InputError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where puzzle inputs come from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// `{dir}/{year}_day{day:02}.txt`
    Directory(PathBuf),
    /// One explicit file, used for the single selected solver
    File(PathBuf),
}

impl InputSource {
    pub fn path_for(&self, year: u16, day: u8) -> PathBuf {
        match self {
            InputSource::Directory(dir) => dir.join(format!("{}_day{:02}.txt", year, day)),
            InputSource::File(path) => path.clone(),
        }
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path_for(year, day).is_file()
    }

    /// Read the input for `year`/`day`
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        read_file(&self.path_for(year, day))
    }
}

fn read_file(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::Missing(path.to_path_buf()),
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
