use crate::api::{InvApi, InvPaths};
use crate::config::InvConfig;
use crate::error::{InvError, Result};
use crate::model::Scope;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Overrides the global data directory.
pub const HOME_ENV: &str = "INVTRACK_HOME";

const PROJECT_DATA_DIR: &str = "save";
const PROJECT_EXPORT_DIR: &str = "export";
const GLOBAL_EXPORT_DIR: &str = "export";

pub struct InvContext {
    pub api: InvApi<FileStore>,
    pub scope: Scope,
    pub config: InvConfig,
}

/// Resolves the data and export directories for `scope`.
///
/// Project scope keeps everything next to `cwd` (`./save`, `./export`). Global
/// scope uses `$INVTRACK_HOME` when set, otherwise the platform data directory.
pub fn resolve_paths(cwd: &Path, scope: Scope) -> Result<InvPaths> {
    match scope {
        Scope::Project => Ok(InvPaths::new(
            cwd.join(PROJECT_DATA_DIR),
            cwd.join(PROJECT_EXPORT_DIR),
        )),
        Scope::Global => {
            let data_dir = global_data_dir()?;
            let export_dir = data_dir.join(GLOBAL_EXPORT_DIR);
            Ok(InvPaths::new(data_dir, export_dir))
        }
    }
}

fn global_data_dir() -> Result<PathBuf> {
    if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "invtrack", "invtrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| InvError::Api("Could not determine the global data directory".into()))
}

pub fn initialize(cwd: &Path, use_global: bool) -> Result<InvContext> {
    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };

    let paths = resolve_paths(cwd, scope)?;
    debug!(
        ?scope,
        data_dir = %paths.data_dir.display(),
        export_dir = %paths.export_dir.display(),
        "resolved inventory paths"
    );

    let config = InvConfig::load(&paths.data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "could not load settings, using defaults");
        InvConfig::default()
    });

    let api = InvApi::new(FileStore::new(), paths, config);
    Ok(InvContext { api, scope, config })
}
