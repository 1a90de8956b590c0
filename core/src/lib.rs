pub mod alert_log;
pub mod config;
pub mod count;
pub mod error;
pub mod form;
pub mod model;
pub mod monitor;
pub mod poller;
pub mod storage;
pub mod targets;

pub use alert_log::AlertLog;
pub use config::{AppConfig, FormConfig, LogLevel, MonitorConfig};
pub use count::{parse_count, DEFAULT_MAX_COUNT, MIN_COUNT};
pub use error::{Error, StorageAction};
pub use form::{FormAction, FormOutcome, ItemForm, SaveReport, SAVE_SUCCESS_MESSAGE};
pub use model::{AlertLine, CameraEntry, FormItem, ItemField, ItemRecord, MonitoringState};
pub use monitor::{MonitorPanel, PanelAction, PanelOutcome};
pub use poller::{AlertSource, ClockModuloSource, Poller, PollerHandle};
pub use storage::{ItemStore, JsonFileStore, MemoryItemStore};
