use deskforms_core::{targets, AppConfig};
use deskforms_ui::{init_logging, run_monitor_panel, MonitorFlags, UiResult};

fn main() -> UiResult {
    let (config, load_error) = AppConfig::load_or_default();
    init_logging(config.log_level);
    AppConfig::report_load(load_error.as_ref());

    tracing::info!(
        target: targets::UI,
        alert_period_secs = config.monitor.alert_period_secs,
        "Monitor panel starting"
    );

    run_monitor_panel(MonitorFlags {
        config: config.monitor,
    })
}
