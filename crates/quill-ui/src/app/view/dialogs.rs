use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};

use crate::app::{App, Message};
use crate::style::colors;

impl App {
    pub fn view_find_modal(&self) -> Element<'_, Message> {
        let modal_content = column![
            text("Find").size(16).color(colors::TEXT_PRIMARY),
            Space::with_height(12),
            text_input("Enter text to find...", &self.find_input)
                .on_input(Message::FindInputChanged)
                .on_submit(Message::FindSubmit)
                .padding(Padding::from([8, 12]))
                .size(13),
            Space::with_height(16),
            row![
                Self::dialog_button("Cancel", Message::FindCancel, false),
                Space::with_width(12),
                Self::dialog_button("Find", Message::FindSubmit, true),
            ]
            .align_y(iced::Alignment::Center),
        ]
        .padding(24)
        .width(Length::Fixed(320.0));

        Self::dialog_box(modal_content.into())
    }

    pub fn view_find_report_modal(&self) -> Element<'_, Message> {
        let body = match &self.find_report {
            Some(report) if report.count > 0 => {
                format!("Found '{}' {} times.", report.query, report.count)
            }
            Some(report) => format!("'{}' not found.", report.query),
            None => String::new(),
        };

        let modal_content = column![
            text("Result").size(16).color(colors::TEXT_PRIMARY),
            Space::with_height(12),
            text(body).size(13).color(colors::TEXT_SECONDARY),
            Space::with_height(16),
            Self::dialog_button("OK", Message::DismissFindReport, true),
        ]
        .padding(24)
        .width(Length::Fixed(320.0))
        .align_x(iced::Alignment::Center);

        Self::dialog_box(modal_content.into())
    }

    pub fn view_error_modal(&self) -> Element<'_, Message> {
        let message = self.error_message.as_deref().unwrap_or_default();

        let modal_content = column![
            text("Error").size(16).color(Color::from_rgb(0.9, 0.4, 0.4)),
            Space::with_height(12),
            text(message).size(13).color(colors::TEXT_SECONDARY),
            Space::with_height(16),
            Self::dialog_button("OK", Message::DismissError, true),
        ]
        .padding(24)
        .width(Length::Fixed(380.0))
        .align_x(iced::Alignment::Center);

        Self::dialog_box(modal_content.into())
    }

    pub fn view_about_modal(&self) -> Element<'_, Message> {
        let modal_content = column![
            text("Quill").size(20).color(colors::ACCENT),
            Space::with_height(8),
            text("A notepad built with Rust & iced")
                .size(13)
                .color(colors::TEXT_SECONDARY),
            Space::with_height(12),
            text(concat!("Version ", env!("CARGO_PKG_VERSION")))
                .size(12)
                .color(colors::TEXT_MUTED),
            Space::with_height(20),
            Self::dialog_button("Close", Message::HideAbout, true),
        ]
        .padding(24)
        .width(Length::Fixed(320.0))
        .align_x(iced::Alignment::Center);

        Self::dialog_box(modal_content.into())
    }

    /// Centers dialog content inside the window, boxed in the chrome style.
    fn dialog_box(content: Element<'_, Message>) -> Element<'_, Message> {
        container(container(content).style(|_| container::Style {
            background: Some(Background::Color(colors::BG_MEDIUM)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }

    fn dialog_button(label: &str, msg: Message, primary: bool) -> Element<'_, Message> {
        let styled = if primary {
            button(text(label).size(13).color(Color::WHITE))
                .padding(Padding::from([8, 20]))
                .style(|_: &Theme, status: button::Status| {
                    let bg = match status {
                        button::Status::Hovered => Color::from_rgb(0.40, 0.58, 0.95),
                        _ => colors::ACCENT,
                    };
                    button::Style {
                        background: Some(Background::Color(bg)),
                        text_color: Color::WHITE,
                        border: Border {
                            radius: 4.0.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }
                })
        } else {
            button(text(label).size(13).color(colors::TEXT_PRIMARY))
                .padding(Padding::from([8, 20]))
                .style(|_: &Theme, status: button::Status| {
                    let bg = match status {
                        button::Status::Hovered => colors::BG_HOVER,
                        _ => colors::BG_LIGHT,
                    };
                    button::Style {
                        background: Some(Background::Color(bg)),
                        text_color: colors::TEXT_PRIMARY,
                        border: Border {
                            color: colors::BORDER,
                            width: 1.0,
                            radius: 4.0.into(),
                        },
                        ..Default::default()
                    }
                })
        };

        styled.on_press(msg).into()
    }
}
