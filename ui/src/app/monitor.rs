use std::time::Duration;

use iced::alignment::Horizontal;
use iced::theme;
use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Application, Command, Element, Length, Subscription, Theme};

use deskforms_core::{
    targets, AlertLine, AlertLog, MonitorPanel, MonitoringState, PanelAction, PanelOutcome,
};

use crate::app::helpers::{log_line_color, monitoring_color, notice_color, MUTED_COLOR, TITLE_COLOR};
use crate::app::notice_overlay::NoticeOverlay;
use crate::app::styles::{CardStyle, NoticeCardStyle, StatusBadgeStyle};
use crate::app::types::{MonitorFlags, MonitorMessage, Notice};

const LOG_REFRESH: Duration = Duration::from_millis(250);

pub struct MonitorPanelApp {
    panel: MonitorPanel,
    count_input: String,
    log_lines: Vec<AlertLine>,
    notice: Option<Notice>,
    copy_status: Option<String>,
}

impl MonitorPanelApp {
    fn dispatch(&mut self, action: PanelAction) {
        let outcome = self.panel.apply(action);
        if let PanelOutcome::Toggled(state) = &outcome {
            tracing::info!(target: targets::UI, "Monitoring state is now {}", state);
        }
        if let Some(message) = outcome.notice() {
            self.notice = Some(match outcome {
                PanelOutcome::Saved { .. } => Notice::success(message),
                _ => Notice::warning(message),
            });
        }
        self.refresh_log();
    }

    fn refresh_log(&mut self) {
        let fresh = self.panel.log().since(self.log_lines.len());
        self.log_lines.extend(fresh);
    }

    fn copy_log(&self) -> String {
        let text = self.panel.log().to_text();
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => {
                tracing::info!(target: targets::UI, "Monitor log copied to clipboard");
                "Copied".to_string()
            }
            Err(error) => {
                tracing::warn!(target: targets::UI, "Clipboard copy failed: {}", error);
                format!("Failed: {error}")
            }
        }
    }

    fn header_view(&self) -> Element<'_, MonitorMessage> {
        let active = self.panel.state().is_active();
        let badge = container(text(self.panel.status_label()).size(14))
            .padding([4, 12])
            .style(theme::Container::Custom(Box::new(StatusBadgeStyle {
                color: monitoring_color(active),
            })));

        row![
            text("Trespassing Detection")
                .size(28)
                .style(theme::Text::Color(TITLE_COLOR)),
            badge,
        ]
        .spacing(12)
        .align_items(Alignment::Center)
        .into()
    }

    fn camera_rows_view(&self) -> Element<'_, MonitorMessage> {
        let count_row = row![
            text("Number of Cameras:").size(18),
            text_input("1", &self.count_input)
                .on_input(MonitorMessage::CameraCountChanged)
                .padding(8)
                .width(Length::Fixed(100.0)),
        ]
        .spacing(10)
        .align_items(Alignment::Center);

        let rows = self.panel.drafts().iter().enumerate().fold(
            Column::new().spacing(8),
            |rows, (index, entry)| {
                rows.push(
                    row![
                        text_input(&format!("Camera {} name", index + 1), &entry.name)
                            .on_input(move |value| MonitorMessage::CameraNameChanged(index, value))
                            .padding(8)
                            .width(Length::FillPortion(1)),
                        text_input("rtsp://host/stream", &entry.url)
                            .on_input(move |value| MonitorMessage::CameraUrlChanged(index, value))
                            .padding(8)
                            .width(Length::FillPortion(2)),
                    ]
                    .spacing(8),
                )
            },
        );

        let saved = text(format!("{} camera(s) configured", self.panel.cameras().len()))
            .size(14)
            .style(theme::Text::Color(MUTED_COLOR));

        let card = column![
            count_row,
            scrollable(rows).height(Length::Fixed(220.0)),
            row![
                button("Save configuration").on_press(MonitorMessage::SaveConfiguration),
                saved
            ]
            .spacing(12)
            .align_items(Alignment::Center),
        ]
        .spacing(12);

        container(card)
            .padding(12)
            .width(Length::Fill)
            .style(theme::Container::Custom(Box::new(CardStyle)))
            .into()
    }

    fn controls_view(&self) -> Element<'_, MonitorMessage> {
        let (label, style) = match self.panel.state() {
            MonitoringState::Idle => ("Start monitoring", theme::Button::Positive),
            MonitoringState::Monitoring => ("Stop monitoring", theme::Button::Destructive),
        };
        let copy_status = self.copy_status.as_deref().unwrap_or("Ready");

        row![
            button(label).style(style).on_press(MonitorMessage::ToggleMonitoring),
            button("Test alert")
                .style(theme::Button::Secondary)
                .on_press(MonitorMessage::TestAlert),
            button("Copy log").on_press(MonitorMessage::CopyLog),
            text(format!("Clipboard: {copy_status}"))
                .size(12)
                .style(theme::Text::Color(MUTED_COLOR)),
        ]
        .spacing(10)
        .align_items(Alignment::Center)
        .into()
    }

    fn log_view(&self) -> Element<'_, MonitorMessage> {
        let lines = self.log_lines.iter().fold(Column::new().spacing(4), |lines, line| {
            lines.push(
                text(line.format_line())
                    .size(14)
                    .horizontal_alignment(Horizontal::Left)
                    .style(theme::Text::Color(log_line_color(line.is_alert))),
            )
        });

        container(
            column![
                text(format!(
                    "Log ({} alert(s))",
                    self.log_lines.iter().filter(|line| line.is_alert).count()
                ))
                .size(18),
                scrollable(lines).height(Length::Fill).width(Length::Fill),
            ]
            .spacing(8),
        )
        .padding(12)
        .height(Length::Fill)
        .width(Length::Fill)
        .style(theme::Container::Box)
        .into()
    }

    fn notice_view(&self) -> Element<'_, MonitorMessage> {
        let Some(notice) = &self.notice else {
            return Space::new(Length::Shrink, Length::Shrink).into();
        };
        let accent = notice_color(notice.tone);
        let card = column![
            text(notice.title).size(22),
            text(&notice.message).size(18).style(theme::Text::Color(accent)),
            button("Close")
                .padding([8, 24])
                .on_press(MonitorMessage::DismissNotice),
        ]
        .spacing(16)
        .align_items(Alignment::Center);

        container(card)
            .padding(20)
            .width(Length::Fixed(400.0))
            .style(theme::Container::Custom(Box::new(NoticeCardStyle { accent })))
            .into()
    }
}

impl Application for MonitorPanelApp {
    type Executor = iced::executor::Default;
    type Message = MonitorMessage;
    type Theme = Theme;
    type Flags = MonitorFlags;

    fn new(flags: MonitorFlags) -> (Self, Command<MonitorMessage>) {
        let panel = MonitorPanel::new(&flags.config, AlertLog::new());
        let count_input = panel.drafts().len().to_string();
        tracing::info!(
            target: targets::UI,
            interval_ms = flags.config.poll_interval_ms,
            "Monitor panel ready"
        );
        (
            Self {
                panel,
                count_input,
                log_lines: Vec::new(),
                notice: None,
                copy_status: None,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        "Trespassing Detection".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: MonitorMessage) -> Command<MonitorMessage> {
        match message {
            MonitorMessage::LogTick => self.refresh_log(),
            MonitorMessage::CameraCountChanged(value) => {
                self.dispatch(PanelAction::SetCameraCount(value.clone()));
                self.count_input = value;
            }
            MonitorMessage::CameraNameChanged(index, value) => {
                self.dispatch(PanelAction::EditName { index, value });
            }
            MonitorMessage::CameraUrlChanged(index, value) => {
                self.dispatch(PanelAction::EditUrl { index, value });
            }
            MonitorMessage::SaveConfiguration => self.dispatch(PanelAction::SaveConfiguration),
            MonitorMessage::ToggleMonitoring => self.dispatch(PanelAction::ToggleMonitoring),
            MonitorMessage::TestAlert => self.dispatch(PanelAction::TestAlert),
            MonitorMessage::CopyLog => self.copy_status = Some(self.copy_log()),
            MonitorMessage::DismissNotice => self.notice = None,
        }
        Command::none()
    }

    fn subscription(&self) -> Subscription<MonitorMessage> {
        iced::time::every(LOG_REFRESH).map(|_| MonitorMessage::LogTick)
    }

    fn view(&self) -> Element<'_, MonitorMessage> {
        let content = column![
            self.header_view(),
            self.camera_rows_view(),
            self.controls_view(),
            self.log_view(),
        ]
        .spacing(16)
        .padding(16);

        let page = container(content).width(Length::Fill).height(Length::Fill);

        NoticeOverlay::new(page, self.notice_view(), self.notice.is_some()).into()
    }
}

#[cfg(test)]
mod tests {
    use deskforms_core::MonitorConfig;

    use super::*;
    use crate::app::types::NoticeTone;

    fn app() -> MonitorPanelApp {
        MonitorPanelApp::new(MonitorFlags {
            config: MonitorConfig {
                poll_interval_ms: 5,
                alert_period_secs: 3_600,
                ..MonitorConfig::default()
            },
        })
        .0
    }

    #[test]
    fn start_with_no_cameras_warns_and_stays_idle() {
        let mut app = app();
        let _ = app.update(MonitorMessage::ToggleMonitoring);

        let notice = app.notice.clone().expect("warning");
        assert_eq!(notice.tone, NoticeTone::Warning);
        assert_eq!(app.panel.state(), MonitoringState::Idle);
        assert!(app.log_lines.is_empty());
    }

    #[test]
    fn save_reports_count_and_start_logs_transition() {
        let mut app = app();
        let _ = app.update(MonitorMessage::CameraCountChanged("2".to_string()));
        let _ = app.update(MonitorMessage::CameraUrlChanged(1, "rtsp://yard".to_string()));
        let _ = app.update(MonitorMessage::SaveConfiguration);
        assert_eq!(
            app.notice.as_ref().map(|notice| notice.message.as_str()),
            Some("Saved 1 camera(s).")
        );

        let _ = app.update(MonitorMessage::ToggleMonitoring);
        assert_eq!(app.panel.state(), MonitoringState::Monitoring);
        let _ = app.update(MonitorMessage::ToggleMonitoring);
        assert_eq!(app.panel.state(), MonitoringState::Idle);
        assert_eq!(app.log_lines.len(), 2);
    }

    #[test]
    fn test_alert_is_rendered_as_alert() {
        let mut app = app();
        let _ = app.update(MonitorMessage::TestAlert);
        assert!(app.notice.is_none());
        assert_eq!(app.log_lines.len(), 1);
        assert!(app.log_lines[0].is_alert);
    }
}
