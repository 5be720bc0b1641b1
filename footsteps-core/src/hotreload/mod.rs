//! Hot reload of the footstep configuration file.
//!
//! A `notify` watcher pushes filesystem events into a channel; the host drains
//! it from the tick thread with [`ConfigWatcher::poll`]. A changed file is
//! parsed first and only swapped in when it parses, so a broken edit keeps the
//! previous registrations.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Instant;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::block::BlockLookup;
use crate::config::FootstepsConfig;
use crate::error::Result;
use crate::logging::TimingSpan;
use crate::registry::{Footsteps, LoadReport};

/// Hot-reload bookkeeping
#[derive(Debug, Clone, Default)]
pub struct HotReloadState {
    pub watched_file: PathBuf,
    pub reload_count: u32,
    pub failure_count: u32,
    pub last_reload_success: bool,
    /// Seconds since the watcher started
    pub last_reload_time: f64,
    pub last_error: Option<String>,
    pub last_report: Option<LoadReport>,
}

/// Watches one config file and reloads a [`Footsteps`] registry from it
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<notify::Result<Event>>,
    started: Instant,
    state: HotReloadState,
}

impl ConfigWatcher {
    /// Watch `path`; the file must exist
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        std::fs::metadata(&path)?;

        let (tx, rx) = channel();
        let mut watcher = notify::recommended_watcher(tx)?;
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        info!(path = %path.display(), "Footstep config hot reload enabled");
        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            started: Instant::now(),
            state: HotReloadState {
                watched_file: path,
                ..HotReloadState::default()
            },
        })
    }

    /// Drain pending events; reload once if any touched the config file.
    ///
    /// Returns whether the reload succeeded, or `None` when nothing changed.
    pub fn poll(&mut self, footsteps: &mut Footsteps, lookup: &dyn BlockLookup) -> Option<bool> {
        let mut changed = false;
        while let Ok(result) = self.receiver.try_recv() {
            match result {
                Ok(event) => changed |= is_config_modify_event(&event, &self.state.watched_file),
                Err(e) => warn!(error = %e, "File watcher error"),
            }
        }
        changed.then(|| self.reload(footsteps, lookup))
    }

    /// Reload now, regardless of pending events
    pub fn reload(&mut self, footsteps: &mut Footsteps, lookup: &dyn BlockLookup) -> bool {
        let path = self.state.watched_file.clone();
        match reload_config(&path, footsteps, lookup) {
            Ok(report) => {
                self.state.reload_count += 1;
                self.state.last_reload_success = true;
                self.state.last_error = None;
                self.state.last_report = Some(report);
                info!(count = self.state.reload_count, "Footstep config reloaded");
            }
            Err(e) => {
                self.state.failure_count += 1;
                self.state.last_reload_success = false;
                self.state.last_error = Some(e.to_string());
                error!(path = %path.display(), error = %e, "Footstep config reload failed, keeping previous");
            }
        }
        self.state.last_reload_time = self.started.elapsed().as_secs_f64();
        self.state.last_reload_success
    }

    pub fn state(&self) -> &HotReloadState {
        &self.state
    }

    pub fn status(&self) -> HotReloadStatus {
        HotReloadStatus::from_state(&self.state)
    }
}

/// Parse `path`, then replace every registration in `footsteps` with it.
///
/// On a parse error `footsteps` is left untouched.
pub fn reload_config(path: &Path, footsteps: &mut Footsteps, lookup: &dyn BlockLookup) -> Result<LoadReport> {
    let _span = TimingSpan::new("footsteps_reload");
    let config = FootstepsConfig::from_path(path)?;
    footsteps.clear();
    Ok(footsteps.load(&config, lookup))
}

/// Whether `event` modifies or creates the watched file
pub fn is_config_modify_event(event: &Event, watched_file: &Path) -> bool {
    let Some(name) = watched_file.file_name() else {
        return false;
    };
    (event.kind.is_modify() || matches!(event.kind, EventKind::Create(_)))
        && event.paths.iter().any(|p| p.file_name() == Some(name))
}

/// Serializable hot-reload status
#[derive(Debug, Serialize, Deserialize)]
pub struct HotReloadStatus {
    pub watched_file: String,
    pub reload_count: u32,
    pub failure_count: u32,
    pub last_reload_success: bool,
    pub last_reload_time: f64,
    pub last_error: Option<String>,
    pub last_report: Option<LoadReport>,
}

impl HotReloadStatus {
    pub fn from_state(state: &HotReloadState) -> Self {
        Self {
            watched_file: state.watched_file.display().to_string(),
            reload_count: state.reload_count,
            failure_count: state.failure_count,
            last_reload_success: state.last_reload_success,
            last_reload_time: state.last_reload_time,
            last_error: state.last_error.clone(),
            last_report: state.last_report.clone(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }
}
