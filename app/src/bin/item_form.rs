use deskforms_core::{targets, AppConfig};
use deskforms_ui::{init_logging, run_item_form, FormFlags, UiResult};

fn main() -> UiResult {
    let (config, load_error) = AppConfig::load_or_default();
    init_logging(config.log_level);
    AppConfig::report_load(load_error.as_ref());

    tracing::info!(
        target: targets::UI,
        output = %config.form.output_path.display(),
        "Item form starting"
    );

    run_item_form(FormFlags {
        config: config.form,
    })
}
