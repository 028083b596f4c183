use super::{Resource, ResourceLocator};
use crate::error::{AppError, Result};
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const MANIFEST_FILE_ENV: &str = "RUNFILES_MANIFEST_FILE";
pub const RUNFILES_DIR_ENV: &str = "RUNFILES_DIR";
pub const MAIN_WORKSPACE: &str = "_main";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    /// Explicit logical name → real path table
    Manifest(HashMap<String, PathBuf>),
    /// A runfiles tree where logical names are relative paths
    Directory(PathBuf),
    /// A source checkout; the workspace prefix is dropped from names
    Workspace(PathBuf),
}

/// Locates data files the way Bazel's runfiles libraries do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunfilesLocator {
    mode: Mode,
}

impl RunfilesLocator {
    /// Discovers runfiles from the process environment and executable location.
    pub fn from_env() -> Result<Self> {
        let exe = std::env::current_exe().ok();
        let cwd = std::env::current_dir()?;
        Self::discover(|key| std::env::var_os(key), exe.as_deref(), &cwd)
    }

    /// Discovery order: manifest env var, directory env var, `<exe>.runfiles/`,
    /// `<exe>.runfiles_manifest`, then the working directory.
    pub fn discover<F>(env: F, exe: Option<&Path>, cwd: &Path) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let set = |key: &str| env(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        if let Some(manifest) = set(MANIFEST_FILE_ENV) {
            debug!(path = %manifest.display(), "using runfiles manifest from environment");
            return Self::from_manifest(&manifest);
        }
        if let Some(dir) = set(RUNFILES_DIR_ENV) {
            debug!(path = %dir.display(), "using runfiles directory from environment");
            return Ok(Self::from_dir(dir));
        }

        if let Some(exe) = exe {
            let dir = sibling(exe, ".runfiles");
            if dir.is_dir() {
                debug!(path = %dir.display(), "using runfiles directory next to executable");
                return Ok(Self::from_dir(dir));
            }
            let manifest = sibling(exe, ".runfiles_manifest");
            if manifest.is_file() {
                debug!(path = %manifest.display(), "using runfiles manifest next to executable");
                return Self::from_manifest(&manifest);
            }
        }

        debug!(path = %cwd.display(), "no runfiles found, resolving against working directory");
        Ok(Self::from_workspace(cwd))
    }

    pub fn from_manifest(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| AppError::ResourceUnreadable {
            name: MANIFEST_FILE_ENV.to_string(),
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_manifest_str(&content))
    }

    /// Parses manifest lines of the form `<logical> <real path>`.
    pub fn from_manifest_str(content: &str) -> Self {
        let entries = content
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| match line.split_once(' ') {
                Some((name, real)) => (name.to_string(), PathBuf::from(real)),
                None => (line.to_string(), PathBuf::from(line)),
            })
            .collect();
        Self {
            mode: Mode::Manifest(entries),
        }
    }

    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            mode: Mode::Directory(dir.into()),
        }
    }

    pub fn from_workspace(root: impl Into<PathBuf>) -> Self {
        Self {
            mode: Mode::Workspace(root.into()),
        }
    }

    /// Maps a logical name to a filesystem path without touching the disk.
    /// Returns `None` only in manifest mode, for names the manifest lacks.
    pub fn rlocation(&self, name: &str) -> Option<PathBuf> {
        if Path::new(name).is_absolute() {
            return Some(PathBuf::from(name));
        }

        match &self.mode {
            Mode::Manifest(entries) => entries.get(name).cloned(),
            Mode::Directory(dir) => Some(dir.join(name)),
            Mode::Workspace(root) => {
                let prefix = format!("{}/", MAIN_WORKSPACE);
                Some(root.join(name.strip_prefix(&prefix).unwrap_or(name)))
            }
        }
    }
}

fn sibling(exe: &Path, suffix: &str) -> PathBuf {
    let mut name = exe.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

impl ResourceLocator for RunfilesLocator {
    fn resolve(&self, name: &str) -> Result<Resource> {
        let path = self
            .rlocation(name)
            .ok_or_else(|| AppError::ResourceNotFound {
                name: name.to_string(),
                path: PathBuf::from(name),
            })?;

        let content = fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => AppError::ResourceNotFound {
                name: name.to_string(),
                path: path.clone(),
            },
            _ => AppError::ResourceUnreadable {
                name: name.to_string(),
                path: path.clone(),
                source,
            },
        })?;

        Ok(Resource {
            name: name.to_string(),
            origin: path.display().to_string(),
            content,
        })
    }
}
