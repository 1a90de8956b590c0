use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Name,
    Description,
    Link,
}

impl ItemField {
    pub const ALL: [ItemField; 3] = [ItemField::Name, ItemField::Description, ItemField::Link];

    pub fn label(self) -> &'static str {
        match self {
            ItemField::Name => "Name",
            ItemField::Description => "Description",
            ItemField::Link => "Link",
        }
    }

    /// Placeholder shown in an empty input for item `number` (1-based).
    pub fn hint(self, number: usize) -> String {
        format!("Enter {} {number}", self.label())
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One item group as typed by the user, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormItem {
    pub name: String,
    pub description: String,
    pub link: String,
}

impl FormItem {
    pub fn field(&self, field: ItemField) -> &str {
        match field {
            ItemField::Name => &self.name,
            ItemField::Description => &self.description,
            ItemField::Link => &self.link,
        }
    }

    pub fn field_mut(&mut self, field: ItemField) -> &mut String {
        match field {
            ItemField::Name => &mut self.name,
            ItemField::Description => &mut self.description,
            ItemField::Link => &mut self.link,
        }
    }

    pub fn empty_fields(&self) -> Vec<ItemField> {
        ItemField::ALL
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect()
    }

    pub fn to_record(&self) -> ItemRecord {
        ItemRecord {
            name: self.name.trim().to_string(),
            desc: self.description.trim().to_string(),
            link: self.link.trim().to_string(),
        }
    }
}

/// Element of the saved JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub desc: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CameraEntry {
    pub name: String,
    pub url: String,
}

impl CameraEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn default_name(number: usize) -> String {
        format!("Camera {number}")
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.url.trim().is_empty()
    }

    pub fn trimmed(&self) -> CameraEntry {
        CameraEntry::new(self.name.trim(), self.url.trim())
    }
}

impl fmt::Display for CameraEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonitoringState {
    #[default]
    Idle,
    Monitoring,
}

impl MonitoringState {
    pub fn is_active(self) -> bool {
        matches!(self, MonitoringState::Monitoring)
    }
}

impl fmt::Display for MonitoringState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitoringState::Idle => f.write_str("Idle"),
            MonitoringState::Monitoring => f.write_str("Monitoring"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertLine {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub is_alert: bool,
}

impl AlertLine {
    pub fn new(message: impl Into<String>, is_alert: bool) -> Self {
        Self {
            timestamp: Local::now(),
            message: message.into(),
            is_alert,
        }
    }

    /// Local wall clock, `HH:MM:SS`.
    pub fn clock_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    pub fn format_line(&self) -> String {
        let kind = if self.is_alert { "ALERT" } else { "INFO" };
        format!("[{}] {:<5} {}", self.clock_label(), kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn record_uses_desc_key_and_trims() {
        let item = FormItem {
            name: "  Lamp ".to_string(),
            description: "Desk lamp\n".to_string(),
            link: " http://lamp ".to_string(),
        };
        let json = serde_json::to_string(&item.to_record()).expect("serialize");
        assert_eq!(
            json,
            r#"{"name":"Lamp","desc":"Desk lamp","link":"http://lamp"}"#
        );
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let item = FormItem {
            name: "A".to_string(),
            description: "   ".to_string(),
            link: String::new(),
        };
        assert_eq!(
            item.empty_fields(),
            vec![ItemField::Description, ItemField::Link]
        );
    }

    #[test]
    fn camera_requires_name_and_url() {
        assert!(CameraEntry::new("Gate", "rtsp://gate").is_complete());
        assert!(!CameraEntry::new("Gate", " ").is_complete());
        assert!(!CameraEntry::new("", "rtsp://gate").is_complete());
        assert_eq!(
            CameraEntry::new("Gate", "rtsp://gate").to_string(),
            "Gate (rtsp://gate)"
        );
    }

    #[test]
    fn alert_line_formats_local_clock() {
        let line = AlertLine {
            timestamp: Local
                .with_ymd_and_hms(2024, 3, 4, 1, 1, 1)
                .earliest()
                .expect("local time"),
            message: "Motion on Gate".to_string(),
            is_alert: true,
        };
        assert_eq!(line.format_line(), "[01:01:01] ALERT Motion on Gate");

        let info = AlertLine {
            is_alert: false,
            ..line
        };
        assert_eq!(info.format_line(), "[01:01:01] INFO  Motion on Gate");
    }
}
