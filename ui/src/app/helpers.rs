use iced::Color;

use crate::app::types::NoticeTone;

pub(crate) const TITLE_COLOR: Color = Color::from_rgb(0.92, 0.92, 0.92);
pub(crate) const MUTED_COLOR: Color = Color::from_rgb(0.62, 0.64, 0.68);
pub(crate) const FLAGGED_COLOR: Color = Color::from_rgb(1.0, 0.2, 0.2);

pub(crate) fn notice_color(tone: NoticeTone) -> Color {
    match tone {
        NoticeTone::Success => Color::from_rgb8(0x00, 0xcc, 0x99),
        NoticeTone::Warning => Color::from_rgb8(0xe0, 0x4f, 0x4f),
    }
}

pub(crate) fn log_line_color(is_alert: bool) -> Color {
    if is_alert {
        Color::from_rgb8(0xe0, 0x4f, 0x4f)
    } else {
        Color::from_rgb8(0xc8, 0xcc, 0xd2)
    }
}

pub(crate) fn monitoring_color(active: bool) -> Color {
    if active {
        Color::from_rgb8(0x22, 0xc5, 0x5e)
    } else {
        MUTED_COLOR
    }
}

pub(crate) fn item_title(index: usize) -> String {
    format!("Item {}", index + 1)
}
