mod form;
mod helpers;
mod monitor;
mod notice_overlay;
mod styles;
mod types;

pub use form::ItemFormApp;
pub use monitor::MonitorPanelApp;
pub use types::{FormFlags, FormMessage, MonitorFlags, MonitorMessage, Notice, NoticeTone};
