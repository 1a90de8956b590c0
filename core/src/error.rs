use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Incomplete items: {items:?}")]
    IncompleteItems {
        /// 1-based item numbers with at least one empty field.
        items: Vec<usize>,
        empty_fields: usize,
    },
    #[error("No cameras configured")]
    NoCameras,
    #[error("Poller thread could not start")]
    PollerSpawn {
        #[source]
        source: std::io::Error,
    },
    #[error("JSON {action} error")]
    Json {
        action: StorageAction,
        path: Option<String>,
        #[source]
        source: serde_json::Error,
    },
    #[error("Storage {action} error")]
    StorageIo {
        action: StorageAction,
        path: Option<String>,
        #[source]
        source: std::io::Error,
    },
    #[error("RON config error")]
    Ron {
        path: Option<String>,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("Config read error")]
    ConfigIo {
        path: Option<String>,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageAction {
    Load,
    Save,
}

impl fmt::Display for StorageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageAction::Load => f.write_str("load"),
            StorageAction::Save => f.write_str("save"),
        }
    }
}

impl Error {
    pub fn user_summary(&self) -> String {
        match self {
            Error::IncompleteItems { .. } => "Please fill in all fields!".to_string(),
            Error::NoCameras => "Please configure at least one camera first.".to_string(),
            Error::PollerSpawn { .. } => "Monitoring could not be started.".to_string(),
            Error::Json { action, .. } => format!("Failed to {action} item data."),
            Error::StorageIo { action, .. } => format!("Failed to {action} the data file."),
            Error::Ron { .. } => "Configuration file is malformed.".to_string(),
            Error::ConfigIo { .. } => "Failed to read configuration file.".to_string(),
        }
    }

    pub fn technical_detail(&self) -> String {
        match self {
            Error::IncompleteItems {
                items,
                empty_fields,
            } => format!(
                "{empty_fields} empty field(s) in item(s) {}.",
                items
                    .iter()
                    .map(|item| item.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
            Error::NoCameras => "Monitoring refused: camera list is empty.".to_string(),
            Error::PollerSpawn { source } => format!("Poller thread spawn failed: {source}"),
            Error::Json {
                action,
                path,
                source,
            } => {
                let path = path
                    .as_ref()
                    .map(|value| format!(" path={value}."))
                    .unwrap_or_default();
                format!("JSON {action} error.{path} {source}")
            }
            Error::StorageIo {
                action,
                path,
                source,
            } => {
                let path = path
                    .as_ref()
                    .map(|value| format!(" path={value}."))
                    .unwrap_or_default();
                format!("Storage {action} error.{path} {source}")
            }
            Error::Ron { path, source } => {
                let path = path
                    .as_ref()
                    .map(|value| format!(" path={value}."))
                    .unwrap_or_default();
                format!("RON config error.{path} {source}")
            }
            Error::ConfigIo { path, source } => {
                let path = path
                    .as_ref()
                    .map(|value| format!(" path={value}."))
                    .unwrap_or_default();
                format!("Config read error.{path} {source}")
            }
        }
    }
}
