pub const FORM: &str = "form";
pub const MONITOR: &str = "monitor";
pub const POLLER: &str = "poller";
pub const STORAGE: &str = "storage";
pub const CONFIG: &str = "config";
pub const UI: &str = "ui";
