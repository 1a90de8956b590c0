use iced::theme;
use iced::widget::{container, text_input};
use iced::{Background, Border, Color, Theme};

use crate::app::helpers::FLAGGED_COLOR;

/// Red input used for fields left empty on the last submit.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FlaggedInputStyle;

impl FlaggedInputStyle {
    fn flag(mut appearance: text_input::Appearance) -> text_input::Appearance {
        appearance.background = Background::Color(Color {
            a: 0.25,
            ..FLAGGED_COLOR
        });
        appearance.border = Border {
            color: FLAGGED_COLOR,
            width: 2.0,
            ..appearance.border
        };
        appearance
    }
}

impl text_input::StyleSheet for FlaggedInputStyle {
    type Style = Theme;

    fn active(&self, style: &Self::Style) -> text_input::Appearance {
        Self::flag(<Theme as text_input::StyleSheet>::active(
            style,
            &theme::TextInput::Default,
        ))
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        Self::flag(<Theme as text_input::StyleSheet>::focused(
            style,
            &theme::TextInput::Default,
        ))
    }

    fn placeholder_color(&self, style: &Self::Style) -> Color {
        <Theme as text_input::StyleSheet>::placeholder_color(style, &theme::TextInput::Default)
    }

    fn value_color(&self, style: &Self::Style) -> Color {
        <Theme as text_input::StyleSheet>::value_color(style, &theme::TextInput::Default)
    }

    fn disabled_color(&self, style: &Self::Style) -> Color {
        <Theme as text_input::StyleSheet>::disabled_color(style, &theme::TextInput::Default)
    }

    fn selection_color(&self, style: &Self::Style) -> Color {
        <Theme as text_input::StyleSheet>::selection_color(style, &theme::TextInput::Default)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        <Theme as text_input::StyleSheet>::disabled(style, &theme::TextInput::Default)
    }
}

pub(crate) fn input_style(flagged: bool) -> theme::TextInput {
    if flagged {
        theme::TextInput::Custom(Box::new(FlaggedInputStyle))
    } else {
        theme::TextInput::Default
    }
}

/// Rounded panel behind one item group or camera row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CardStyle;

impl container::StyleSheet for CardStyle {
    type Style = Theme;

    fn appearance(&self, style: &Self::Style) -> container::Appearance {
        let palette = style.extended_palette();
        container::Appearance {
            background: Some(Background::Color(palette.background.weak.color)),
            text_color: Some(palette.background.weak.text),
            border: Border {
                color: palette.background.strong.color,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..container::Appearance::default()
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct NoticeCardStyle {
    pub(crate) accent: Color,
}

impl container::StyleSheet for NoticeCardStyle {
    type Style = Theme;

    fn appearance(&self, style: &Self::Style) -> container::Appearance {
        let palette = style.extended_palette();
        container::Appearance {
            background: Some(Background::Color(palette.background.base.color)),
            text_color: Some(palette.background.base.text),
            border: Border {
                color: self.accent,
                width: 2.0,
                radius: 12.0.into(),
            },
            ..container::Appearance::default()
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct StatusBadgeStyle {
    pub(crate) color: Color,
}

impl container::StyleSheet for StatusBadgeStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(Color::WHITE),
            background: Some(Background::Color(self.color)),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 999.0.into(),
            },
            ..container::Appearance::default()
        }
    }
}
