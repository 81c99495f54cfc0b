use iced::widget::{container, horizontal_space, row, text};
use iced::{Background, Element, Length, Padding};

use crate::app::{App, Message};
use crate::style::{to_iced, Layout};

impl App {
    pub fn view_status_bar(&self) -> Element<'_, Message> {
        let palette = self.notepad.view().theme().palette();
        let fg = to_iced(palette.status_bar.foreground);
        let bg = to_iced(palette.status_bar.background);

        let status_content = row![
            text(self.status.to_string()).size(12).color(fg),
            horizontal_space(),
            text(self.notepad.document().display_name()).size(12).color(fg),
        ]
        .padding(Padding::from([4, 12]))
        .align_y(iced::Alignment::Center);

        container(status_content)
            .width(Length::Fill)
            .height(Layout::STATUS_BAR_HEIGHT)
            .style(move |_| container::Style {
                background: Some(Background::Color(bg)),
                ..Default::default()
            })
            .into()
    }
}
