use iced::theme;
use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Application, Command, Element, Length, Theme};

use deskforms_core::{
    targets, FormAction, FormOutcome, ItemField, ItemForm, JsonFileStore,
};

use crate::app::helpers::{item_title, notice_color, MUTED_COLOR, TITLE_COLOR};
use crate::app::notice_overlay::NoticeOverlay;
use crate::app::styles::{input_style, CardStyle, NoticeCardStyle};
use crate::app::types::{FormFlags, FormMessage, Notice};

pub struct ItemFormApp {
    form: ItemForm,
    store: JsonFileStore,
    count_input: String,
    notice: Option<Notice>,
}

impl ItemFormApp {
    fn dispatch(&mut self, action: FormAction) {
        let outcome = self.form.apply(action, &self.store);
        match &outcome {
            FormOutcome::Saved(report) => {
                tracing::info!(
                    target: targets::UI,
                    saved = report.saved,
                    "Items written to {}",
                    report.destination
                );
            }
            FormOutcome::Rejected(error) => {
                tracing::warn!(target: targets::UI, "{}", error.technical_detail());
            }
            FormOutcome::Regenerated { .. } | FormOutcome::Edited => {}
        }
        if let Some(message) = outcome.notice() {
            self.notice = Some(match outcome {
                FormOutcome::Saved(_) => Notice::success(message),
                _ => Notice::warning(message),
            });
        }
    }

    fn count_row(&self) -> Element<'_, FormMessage> {
        row![
            text("Number of Items:").size(22).style(theme::Text::Color(TITLE_COLOR)),
            text_input("1", &self.count_input)
                .on_input(FormMessage::CountChanged)
                .size(22)
                .padding(10)
                .width(Length::Fixed(120.0)),
            text(format!("{} group(s)", self.form.count()))
                .size(14)
                .style(theme::Text::Color(MUTED_COLOR)),
        ]
        .spacing(10)
        .align_items(Alignment::Center)
        .into()
    }

    fn field_input(&self, index: usize, field: ItemField) -> Element<'_, FormMessage> {
        let value = self.form.items()[index].field(field);
        text_input(&field.hint(index + 1), value)
            .on_input(move |value| FormMessage::FieldChanged {
                index,
                field,
                value,
            })
            .size(18)
            .padding(10)
            .style(input_style(self.form.is_flagged(index, field)))
            .into()
    }

    fn item_card(&self, index: usize) -> Element<'_, FormMessage> {
        let mut card = Column::new().spacing(10).push(
            text(item_title(index))
                .size(20)
                .style(theme::Text::Color(TITLE_COLOR)),
        );
        for field in ItemField::ALL {
            card = card.push(self.field_input(index, field));
        }

        container(card)
            .padding(15)
            .width(Length::Fill)
            .style(theme::Container::Custom(Box::new(CardStyle)))
            .into()
    }

    fn items_view(&self) -> Element<'_, FormMessage> {
        let cards = (0..self.form.count()).fold(Column::new().spacing(15).padding(10), |cards, index| {
            cards.push(self.item_card(index))
        });

        scrollable(cards).height(Length::Fill).width(Length::Fill).into()
    }

    fn notice_view(&self) -> Element<'_, FormMessage> {
        let Some(notice) = &self.notice else {
            return Space::new(Length::Shrink, Length::Shrink).into();
        };
        let accent = notice_color(notice.tone);
        let card = column![
            text(notice.title).size(22),
            text(&notice.message).size(20).style(theme::Text::Color(accent)),
            button(text("Close").size(18))
                .padding([8, 24])
                .on_press(FormMessage::DismissNotice),
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

impl Application for ItemFormApp {
    type Executor = iced::executor::Default;
    type Message = FormMessage;
    type Theme = Theme;
    type Flags = FormFlags;

    fn new(flags: FormFlags) -> (Self, Command<FormMessage>) {
        let store = JsonFileStore::new(flags.config.output_path.clone());
        tracing::info!(target: targets::UI, path = %store.path().display(), "Item form ready");
        (
            Self {
                form: ItemForm::with_max_count(flags.config.max_count),
                store,
                count_input: "1".to_string(),
                notice: None,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        "Dynamic Item Form".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: FormMessage) -> Command<FormMessage> {
        match message {
            FormMessage::CountChanged(value) => {
                self.dispatch(FormAction::SetCount(value.clone()));
                self.count_input = value;
            }
            FormMessage::FieldChanged {
                index,
                field,
                value,
            } => self.dispatch(FormAction::EditField {
                index,
                field,
                value,
            }),
            FormMessage::Submit => self.dispatch(FormAction::Submit),
            FormMessage::DismissNotice => self.notice = None,
        }
        Command::none()
    }

    fn view(&self) -> Element<'_, FormMessage> {
        let save = button(text("Save Data").size(24))
            .padding(14)
            .width(Length::Fill)
            .style(theme::Button::Positive)
            .on_press(FormMessage::Submit);

        let content = column![self.count_row(), self.items_view(), save]
            .spacing(15)
            .padding(20);

        let page = container(content).width(Length::Fill).height(Length::Fill);

        NoticeOverlay::new(page, self.notice_view(), self.notice.is_some()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(dir: &tempfile::TempDir) -> ItemFormApp {
        let flags = FormFlags {
            config: deskforms_core::FormConfig {
                output_path: dir.path().join("data.json"),
                ..Default::default()
            },
        };
        ItemFormApp::new(flags).0
    }

    #[test]
    fn count_text_is_kept_while_form_uses_coerced_value() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app(&dir);
        let _ = app.update(FormMessage::CountChanged("abc".to_string()));
        assert_eq!(app.count_input, "abc");
        assert_eq!(app.form.count(), 1);

        let _ = app.update(FormMessage::CountChanged("4".to_string()));
        assert_eq!(app.form.count(), 4);
    }

    #[test]
    fn failed_submit_shows_warning_and_dismisses() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app(&dir);
        let _ = app.update(FormMessage::Submit);

        let notice = app.notice.clone().expect("notice");
        assert_eq!(notice.message, "Please fill in all fields!");
        assert_eq!(notice.tone, crate::app::types::NoticeTone::Warning);
        assert!(!dir.path().join("data.json").exists());

        let _ = app.update(FormMessage::DismissNotice);
        assert!(app.notice.is_none());
    }

    #[test]
    fn successful_submit_writes_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app(&dir);
        for field in ItemField::ALL {
            let _ = app.update(FormMessage::FieldChanged {
                index: 0,
                field,
                value: "x".to_string(),
            });
        }
        let _ = app.update(FormMessage::Submit);

        assert_eq!(
            app.notice.as_ref().map(|notice| notice.message.as_str()),
            Some("Data saved successfully!")
        );
        assert!(dir.path().join("data.json").exists());
    }
}
