pub mod app;
pub mod logging;

use iced::Application;

pub use app::{FormFlags, ItemFormApp, MonitorFlags, MonitorPanelApp};
pub use logging::init_logging;

pub type UiResult = iced::Result;

pub fn run_item_form(flags: FormFlags) -> UiResult {
    ItemFormApp::run(iced::Settings::with_flags(flags))
}

pub fn run_monitor_panel(flags: MonitorFlags) -> UiResult {
    MonitorPanelApp::run(iced::Settings::with_flags(flags))
}
