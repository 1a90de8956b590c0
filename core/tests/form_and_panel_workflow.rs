use std::sync::Arc;
use std::time::SystemTime;

use deskforms_core::{
    AlertLog, AlertSource, CameraEntry, Error, FormAction, FormOutcome, ItemField, ItemForm,
    ItemStore, JsonFileStore, MonitorConfig, MonitorPanel, MonitoringState, PanelAction,
    SAVE_SUCCESS_MESSAGE,
};

struct NeverFires;

impl AlertSource for NeverFires {
    fn poll(&self, _now: SystemTime, _cameras: &[CameraEntry]) -> Option<String> {
        None
    }
}

fn quick_panel() -> MonitorPanel {
    let config = MonitorConfig {
        poll_interval_ms: 5,
        ..MonitorConfig::default()
    };
    MonitorPanel::with_source(&config, AlertLog::new(), Arc::new(NeverFires))
}

fn fill_all(form: &mut ItemForm, store: &dyn ItemStore) {
    for index in 0..form.count() {
        for field in ItemField::ALL {
            form.apply(
                FormAction::EditField {
                    index,
                    field,
                    value: format!("{field}-{index}"),
                },
                store,
            );
        }
    }
}

#[test]
fn filled_form_saves_array_of_requested_length() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("data.json"));

    for count in [1usize, 2, 7] {
        let mut form = ItemForm::new();
        form.apply(FormAction::SetCount(count.to_string()), &store);
        fill_all(&mut form, &store);

        let outcome = form.apply(FormAction::Submit, &store);
        assert_eq!(outcome.notice().as_deref(), Some(SAVE_SUCCESS_MESSAGE));

        let records = store.load().expect("load");
        assert_eq!(records.len(), count);
        for (index, record) in records.iter().enumerate() {
            assert_eq!(record.name, format!("Name-{index}"));
            assert_eq!(record.desc, format!("Description-{index}"));
            assert_eq!(record.link, format!("Link-{index}"));
        }
    }
}

#[test]
fn invalid_submit_never_touches_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.json");
    let store = JsonFileStore::new(&path);

    let mut form = ItemForm::new();
    form.apply(FormAction::SetCount("3".to_string()), &store);
    fill_all(&mut form, &store);
    form.apply(FormAction::Submit, &store);
    let before = std::fs::read_to_string(&path).expect("first save");

    form.apply(
        FormAction::EditField {
            index: 1,
            field: ItemField::Name,
            value: String::new(),
        },
        &store,
    );
    for _ in 0..2 {
        let outcome = form.apply(FormAction::Submit, &store);
        assert!(matches!(
            outcome,
            FormOutcome::Rejected(Error::IncompleteItems { .. })
        ));
        assert_eq!(
            outcome.notice().as_deref(),
            Some("Please fill in all fields!")
        );
    }

    assert_eq!(std::fs::read_to_string(&path).expect("read"), before);
    assert!(form.is_flagged(1, ItemField::Name));
}

#[test]
fn mixed_form_flags_only_empty_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.json");
    let store = JsonFileStore::new(&path);

    let mut form = ItemForm::new();
    form.set_count(3);
    let rows = [("A", "a", "http://a"), ("", "b", "http://b"), ("C", "c", "http://c")];
    for (index, (name, desc, link)) in rows.into_iter().enumerate() {
        form.set_field(index, ItemField::Name, name);
        form.set_field(index, ItemField::Description, desc);
        form.set_field(index, ItemField::Link, link);
    }

    assert!(form.submit(&store).is_err());
    assert!(!path.exists());
    assert_eq!(form.flagged_count(), 1);
    assert!(form.is_flagged(1, ItemField::Name));
}

#[test]
fn panel_keeps_two_of_three_cameras() {
    let mut panel = quick_panel();
    panel.apply(PanelAction::SetCameraCount("3".to_string()));
    panel.apply(PanelAction::EditUrl {
        index: 0,
        value: "rtsp://10.0.0.1/stream".to_string(),
    });
    panel.apply(PanelAction::EditUrl {
        index: 2,
        value: "rtsp://10.0.0.3/stream".to_string(),
    });

    panel.apply(PanelAction::SaveConfiguration);
    let names: Vec<&str> = panel.cameras().iter().map(|camera| camera.name.as_str()).collect();
    assert_eq!(names, ["Camera 1", "Camera 3"]);
}

#[test]
fn empty_panel_never_starts_monitoring() {
    let mut panel = quick_panel();
    panel.apply(PanelAction::SaveConfiguration);
    assert!(panel.cameras().is_empty());

    panel.apply(PanelAction::ToggleMonitoring);
    assert_eq!(panel.state(), MonitoringState::Idle);
    assert_eq!(panel.status_label(), "Status: Idle");
    assert!(panel.log().is_empty());
}

#[test]
fn start_stop_cycle_ends_idle_with_two_transition_lines() {
    let mut panel = quick_panel();
    panel.apply(PanelAction::SetCameraCount("2".to_string()));
    panel.apply(PanelAction::EditUrl {
        index: 0,
        value: "rtsp://front".to_string(),
    });
    panel.apply(PanelAction::EditUrl {
        index: 1,
        value: "rtsp://back".to_string(),
    });
    panel.apply(PanelAction::SaveConfiguration);

    panel.apply(PanelAction::ToggleMonitoring);
    panel.apply(PanelAction::TestAlert);
    panel.apply(PanelAction::ToggleMonitoring);

    assert_eq!(panel.state(), MonitoringState::Idle);
    let lines = panel.log().snapshot();
    let transitions = lines.iter().filter(|line| !line.is_alert).count();
    assert_eq!(transitions, 2);
    assert_eq!(panel.log().alert_count(), 1);
    assert!(lines[0].message.starts_with("Monitoring started"));
    assert_eq!(lines[2].message, "Monitoring stopped");
}
