use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::{debug, error, trace};

use crate::alert_log::AlertLog;
use crate::model::CameraEntry;
use crate::targets;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_ALERT_PERIOD_SECS: u64 = 10;

/// Decides on each wake whether something worth logging happened.
pub trait AlertSource: Send + Sync {
    fn poll(&self, now: SystemTime, cameras: &[CameraEntry]) -> Option<String>;
}

/// Stand-in detector: fires whenever the wall-clock second is a multiple of
/// `period_secs`, naming the configured cameras in turn.
#[derive(Debug)]
pub struct ClockModuloSource {
    period_secs: u64,
    next_camera: AtomicUsize,
}

impl ClockModuloSource {
    pub fn new(period_secs: u64) -> Self {
        Self {
            period_secs: period_secs.max(1),
            next_camera: AtomicUsize::new(0),
        }
    }
}

impl Default for ClockModuloSource {
    fn default() -> Self {
        Self::new(DEFAULT_ALERT_PERIOD_SECS)
    }
}

impl AlertSource for ClockModuloSource {
    fn poll(&self, now: SystemTime, cameras: &[CameraEntry]) -> Option<String> {
        let secs = now.duration_since(UNIX_EPOCH).ok()?.as_secs();
        if secs % self.period_secs != 0 {
            return None;
        }
        if cameras.is_empty() {
            return Some("Trespassing detected".to_string());
        }
        let index = self.next_camera.fetch_add(1, Ordering::Relaxed) % cameras.len();
        Some(format!(
            "Trespassing detected on {}",
            cameras[index].name
        ))
    }
}

/// Stop switch for one monitoring session.
pub struct PollerHandle {
    active: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl PollerHandle {
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Clears the session flag; the thread exits at its next wake.
    pub fn stop(&self) {
        self.active.store(false, Ordering::Release);
    }

    pub fn is_finished(&self) -> bool {
        self.thread
            .as_ref()
            .map_or(true, |thread| thread.is_finished())
    }

    /// Stops the session and blocks until the thread has exited.
    pub fn join(mut self) {
        self.stop();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                error!(target: targets::POLLER, "Poller thread panicked");
            }
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for PollerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PollerHandle")
            .field("active", &self.is_active())
            .field("finished", &self.is_finished())
            .finish()
    }
}

pub struct Poller;

impl Poller {
    pub fn spawn(
        cameras: Vec<CameraEntry>,
        log: AlertLog,
        source: Arc<dyn AlertSource>,
        interval: Duration,
    ) -> std::io::Result<PollerHandle> {
        let active = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&active);

        let thread = thread::Builder::new()
            .name("deskforms-poller".to_string())
            .spawn(move || {
                debug!(
                    target: targets::POLLER,
                    cameras = cameras.len(),
                    interval_ms = interval.as_millis() as u64,
                    "Poller started"
                );
                loop {
                    thread::sleep(interval);
                    if !flag.load(Ordering::Acquire) {
                        break;
                    }
                    trace!(target: targets::POLLER, "Poller wake");
                    if let Some(message) = source.poll(SystemTime::now(), &cameras) {
                        log.append(message, true);
                    }
                }
                debug!(target: targets::POLLER, "Poller exited");
            })?;

        Ok(PollerHandle {
            active,
            thread: Some(thread),
        })
    }
}
