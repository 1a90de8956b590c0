use deskforms_core::{FormConfig, ItemField, MonitorConfig};

#[derive(Debug, Clone)]
pub enum FormMessage {
    CountChanged(String),
    FieldChanged {
        index: usize,
        field: ItemField,
        value: String,
    },
    Submit,
    DismissNotice,
}

#[derive(Debug, Clone)]
pub enum MonitorMessage {
    LogTick,
    CameraCountChanged(String),
    CameraNameChanged(usize, String),
    CameraUrlChanged(usize, String),
    SaveConfiguration,
    ToggleMonitoring,
    TestAlert,
    CopyLog,
    DismissNotice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
    pub tone: NoticeTone,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Done",
            message: message.into(),
            tone: NoticeTone::Success,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            title: "Warning",
            message: message.into(),
            tone: NoticeTone::Warning,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormFlags {
    pub config: FormConfig,
}

#[derive(Debug, Clone, Default)]
pub struct MonitorFlags {
    pub config: MonitorConfig,
}
