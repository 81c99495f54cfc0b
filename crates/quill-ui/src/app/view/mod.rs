pub mod dialogs;
pub mod editor;
pub mod menu;
pub mod status;

use iced::widget::{column, container, mouse_area, stack, Space};
use iced::{Background, Color, Element, Length};

use crate::app::{App, Message};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let mut content = column![self.view_menu_bar(), self.view_editor_area()];
        if self.notepad.view().status_bar_visible() {
            content = content.push(self.view_status_bar());
        }

        let base: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        // One overlay at a time; errors outrank everything else.
        if self.error_message.is_some() {
            Self::modal(base, self.view_error_modal(), Message::DismissError)
        } else if self.find_visible {
            Self::modal(base, self.view_find_modal(), Message::FindCancel)
        } else if self.find_report.is_some() {
            Self::modal(base, self.view_find_report_modal(), Message::DismissFindReport)
        } else if self.about_visible {
            Self::modal(base, self.view_about_modal(), Message::HideAbout)
        } else if self.active_menu.is_some() {
            stack![
                base,
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                )
                .on_press(Message::CloseTopMenu),
                self.view_menu_dropdown(),
            ]
            .into()
        } else {
            base
        }
    }

    /// Stacks a dialog over a dimmed backdrop; clicking the backdrop sends
    /// `on_backdrop`.
    fn modal<'a>(
        base: Element<'a, Message>,
        dialog: Element<'a, Message>,
        on_backdrop: Message,
    ) -> Element<'a, Message> {
        stack![
            base,
            mouse_area(
                container(Space::new(Length::Fill, Length::Fill))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(|_| container::Style {
                        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
                        ..Default::default()
                    })
            )
            .on_press(on_backdrop),
            dialog,
        ]
        .into()
    }
}
