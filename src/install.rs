use std::fs;

use crate::error::InstallError;
use crate::paths::InstallPaths;
use crate::util::copy_tree;

/// What a run was asked to do. Resolved once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Install,
    Uninstall,
    /// Reinstall from the bundled assets; nothing is fetched.
    Pull,
}

impl Mode {
    /// First set flag wins: install, then uninstall, then pull.
    pub fn from_flags(install: bool, uninstall: bool, pull: bool) -> Option<Self> {
        if install {
            Some(Mode::Install)
        } else if uninstall {
            Some(Mode::Uninstall)
        } else if pull {
            Some(Mode::Pull)
        } else {
            None
        }
    }
}

/// A single filesystem step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RemoveTarget,
    CopyAssets,
}

impl Action {
    pub fn describe(&self, paths: &InstallPaths) -> String {
        match self {
            Action::RemoveTarget => format!("remove {}", paths.target_display),
            Action::CopyAssets => format!(
                "copy {} to {}",
                paths.source_dir.display(),
                paths.target_display
            ),
        }
    }
}

pub fn plan(mode: Mode) -> Vec<Action> {
    match mode {
        Mode::Install | Mode::Pull => vec![Action::RemoveTarget, Action::CopyAssets],
        Mode::Uninstall => vec![Action::RemoveTarget],
    }
}

/// Drop any previous install, then copy the bundled assets. Safe to repeat.
pub fn install(paths: &InstallPaths, plugin: &str) -> Result<u64, InstallError> {
    println!("> Remove any previous {} installation", plugin);
    remove_assets(paths)?;
    println!("> Copying {} assets to '{}'", plugin, paths.static_display);
    copy_assets(paths)
}

pub fn uninstall(paths: &InstallPaths, plugin: &str) -> Result<(), InstallError> {
    println!("> Remove {} assets in '{}'", plugin, paths.target_display);
    remove_assets(paths)?;
    Ok(())
}

/// Delete the plugin directory if present. The shared `plugins/` directory stays,
/// other plugins may live there. Returns whether anything was removed.
pub fn remove_assets(paths: &InstallPaths) -> Result<bool, InstallError> {
    let target = &paths.target_dir;
    if !target.is_dir() {
        tracing::debug!(target = %target.display(), "nothing to remove");
        return Ok(false);
    }
    fs::remove_dir_all(target).map_err(|source| InstallError::Remove {
        path: target.clone(),
        source,
    })?;
    tracing::debug!(target = %target.display(), "removed previous assets");
    Ok(true)
}

pub fn copy_assets(paths: &InstallPaths) -> Result<u64, InstallError> {
    let files = copy_tree(&paths.source_dir, &paths.target_dir)?;
    tracing::debug!(files, target = %paths.target_dir.display(), "assets copied");
    Ok(files)
}

/// Run the filesystem steps for `mode`, or only print them when `dry_run` is set.
pub fn execute(
    mode: Mode,
    paths: &InstallPaths,
    plugin: &str,
    dry_run: bool,
) -> Result<(), InstallError> {
    if dry_run {
        for action in plan(mode) {
            println!("[dry-run] would {}", action.describe(paths));
        }
        return Ok(());
    }

    tracing::info!(?mode, target = %paths.target_dir.display(), "running");
    match mode {
        Mode::Install | Mode::Pull => install(paths, plugin).map(|_| ()),
        Mode::Uninstall => uninstall(paths, plugin),
    }
}
