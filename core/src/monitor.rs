use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::alert_log::AlertLog;
use crate::config::MonitorConfig;
use crate::count::parse_count;
use crate::model::{AlertLine, CameraEntry, MonitoringState};
use crate::poller::{AlertSource, ClockModuloSource, Poller, PollerHandle};
use crate::targets;
use crate::Error;

pub const TEST_ALERT_MESSAGE: &str = "Test alert triggered";
pub const STOPPED_MESSAGE: &str = "Monitoring stopped";

#[derive(Debug, Clone)]
pub enum PanelAction {
    SetCameraCount(String),
    EditName { index: usize, value: String },
    EditUrl { index: usize, value: String },
    SaveConfiguration,
    ToggleMonitoring,
    TestAlert,
}

#[derive(Debug)]
pub enum PanelOutcome {
    Regenerated { count: usize },
    Edited,
    Saved { count: usize },
    Toggled(MonitoringState),
    Refused(Error),
    Logged,
}

impl PanelOutcome {
    /// Text for the result popup, if this outcome produces one.
    pub fn notice(&self) -> Option<String> {
        match self {
            PanelOutcome::Saved { count } => Some(format!("Saved {count} camera(s).")),
            PanelOutcome::Refused(error) => Some(error.user_summary()),
            PanelOutcome::Regenerated { .. }
            | PanelOutcome::Edited
            | PanelOutcome::Toggled(_)
            | PanelOutcome::Logged => None,
        }
    }
}

/// Camera configuration plus the Idle/Monitoring state machine. Drafts are the
/// rows being edited; `cameras` is what the last save accepted.
pub struct MonitorPanel {
    drafts: Vec<CameraEntry>,
    cameras: Vec<CameraEntry>,
    state: MonitoringState,
    log: AlertLog,
    poller: Option<PollerHandle>,
    source: Arc<dyn AlertSource>,
    poll_interval: Duration,
    max_count: usize,
}

impl MonitorPanel {
    pub fn new(config: &MonitorConfig, log: AlertLog) -> Self {
        let source = Arc::new(ClockModuloSource::new(config.alert_period_secs));
        Self::with_source(config, log, source)
    }

    pub fn with_source(config: &MonitorConfig, log: AlertLog, source: Arc<dyn AlertSource>) -> Self {
        let mut panel = Self {
            drafts: Vec::new(),
            cameras: Vec::new(),
            state: MonitoringState::Idle,
            log,
            poller: None,
            source,
            poll_interval: config.poll_interval(),
            max_count: config.max_count.max(1),
        };
        panel.set_camera_count(config.initial_cameras);
        panel
    }

    pub fn drafts(&self) -> &[CameraEntry] {
        &self.drafts
    }

    pub fn cameras(&self) -> &[CameraEntry] {
        &self.cameras
    }

    pub fn state(&self) -> MonitoringState {
        self.state
    }

    pub fn status_label(&self) -> String {
        format!("Status: {}", self.state)
    }

    pub fn log(&self) -> &AlertLog {
        &self.log
    }

    /// Replaces the draft rows with `count` fresh ones named `Camera N`.
    pub fn set_camera_count(&mut self, count: usize) -> usize {
        let count = count.clamp(1, self.max_count);
        self.drafts = (1..=count)
            .map(|number| CameraEntry::new(CameraEntry::default_name(number), ""))
            .collect();
        debug!(target: targets::MONITOR, count, "Camera rows regenerated");
        count
    }

    pub fn set_camera_count_input(&mut self, raw: &str) -> usize {
        self.set_camera_count(parse_count(raw, self.max_count))
    }

    pub fn set_camera_name(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.drafts.get_mut(index) {
            Some(entry) => {
                entry.name = value.into();
                true
            }
            None => false,
        }
    }

    pub fn set_camera_url(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.drafts.get_mut(index) {
            Some(entry) => {
                entry.url = value.into();
                true
            }
            None => false,
        }
    }

    /// Keeps only complete rows; incomplete ones are dropped without feedback.
    /// A running session keeps the camera snapshot it started with.
    pub fn save_configuration(&mut self) -> usize {
        self.cameras = self
            .drafts
            .iter()
            .filter(|entry| entry.is_complete())
            .map(CameraEntry::trimmed)
            .collect();
        let dropped = self.drafts.len() - self.cameras.len();
        for camera in &self.cameras {
            debug!(target: targets::MONITOR, %camera, "Camera accepted");
        }
        info!(
            target: targets::MONITOR,
            saved = self.cameras.len(),
            dropped,
            "Camera configuration saved"
        );
        self.cameras.len()
    }

    pub fn toggle_monitoring(&mut self) -> Result<MonitoringState, Error> {
        match self.state {
            MonitoringState::Idle => self.start_monitoring()?,
            MonitoringState::Monitoring => self.stop_monitoring(),
        }
        Ok(self.state)
    }

    fn start_monitoring(&mut self) -> Result<(), Error> {
        if self.cameras.is_empty() {
            warn!(target: targets::MONITOR, "{}", Error::NoCameras.technical_detail());
            return Err(Error::NoCameras);
        }

        let handle = Poller::spawn(
            self.cameras.clone(),
            self.log.clone(),
            Arc::clone(&self.source),
            self.poll_interval,
        )
        .map_err(|source| Error::PollerSpawn { source })?;

        self.poller = Some(handle);
        self.state = MonitoringState::Monitoring;
        self.log.append(
            format!("Monitoring started ({} camera(s))", self.cameras.len()),
            false,
        );
        Ok(())
    }

    fn stop_monitoring(&mut self) {
        if let Some(handle) = self.poller.take() {
            handle.stop();
        }
        self.state = MonitoringState::Idle;
        self.log.append(STOPPED_MESSAGE, false);
    }

    pub fn test_alert(&self) -> AlertLine {
        self.append_log(TEST_ALERT_MESSAGE, true)
    }

    pub fn append_log(&self, message: impl Into<String>, is_alert: bool) -> AlertLine {
        self.log.append(message, is_alert)
    }

    pub fn apply(&mut self, action: PanelAction) -> PanelOutcome {
        match action {
            PanelAction::SetCameraCount(raw) => PanelOutcome::Regenerated {
                count: self.set_camera_count_input(&raw),
            },
            PanelAction::EditName { index, value } => {
                self.set_camera_name(index, value);
                PanelOutcome::Edited
            }
            PanelAction::EditUrl { index, value } => {
                self.set_camera_url(index, value);
                PanelOutcome::Edited
            }
            PanelAction::SaveConfiguration => PanelOutcome::Saved {
                count: self.save_configuration(),
            },
            PanelAction::ToggleMonitoring => match self.toggle_monitoring() {
                Ok(state) => PanelOutcome::Toggled(state),
                Err(error) => PanelOutcome::Refused(error),
            },
            PanelAction::TestAlert => {
                self.test_alert();
                PanelOutcome::Logged
            }
        }
    }
}
