use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::model::AlertLine;
use crate::targets;

/// Append-only panel log shared between the UI thread and the poller.
#[derive(Debug, Clone, Default)]
pub struct AlertLog {
    inner: Arc<Mutex<Vec<AlertLine>>>,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, message: impl Into<String>, is_alert: bool) -> AlertLine {
        let line = AlertLine::new(message, is_alert);
        if line.is_alert {
            warn!(target: targets::MONITOR, "{}", line.message);
        } else {
            info!(target: targets::MONITOR, "{}", line.message);
        }
        if let Ok(mut guard) = self.inner.lock() {
            guard.push(line.clone());
        }
        line
    }

    pub fn snapshot(&self) -> Vec<AlertLine> {
        if let Ok(guard) = self.inner.lock() {
            return guard.clone();
        }
        Vec::new()
    }

    /// Lines appended after the first `offset`, for incremental refresh.
    pub fn since(&self, offset: usize) -> Vec<AlertLine> {
        if let Ok(guard) = self.inner.lock() {
            return guard.iter().skip(offset).cloned().collect();
        }
        Vec::new()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn alert_count(&self) -> usize {
        self.inner
            .lock()
            .map(|guard| guard.iter().filter(|line| line.is_alert).count())
            .unwrap_or(0)
    }

    pub fn to_text(&self) -> String {
        let mut output = String::new();
        for line in self.snapshot() {
            output.push_str(&line.format_line());
            output.push('\n');
        }
        output
    }
}
