use iced::widget::{container, text_editor, Column, Row, Space};
use iced::{Background, Border, Color, Element, Font, Length};

use crate::app::{App, Message};
use crate::style::{to_iced, Layout};

impl App {
    pub fn view_editor_area(&self) -> Element<'_, Message> {
        let mut items: Vec<Element<'_, Message>> = vec![self.view_editor()];

        // The indicator hides itself whenever the whole buffer fits.
        if self.viewport.shows_scrollbar() {
            items.push(self.view_scrollbar());
        }

        Row::with_children(items).height(Length::Fill).into()
    }

    fn view_editor(&self) -> Element<'_, Message> {
        let palette = self.notepad.view().theme().palette();
        let editor_bg = to_iced(palette.editor.background);
        let editor_fg = to_iced(palette.editor.foreground);
        let selection = Color::from_rgba(0.25, 0.46, 0.85, 0.55);

        // The widget scrolls natively; wrapping it in scrollable() would
        // reset the scroll position on every re-render.
        text_editor(&self.content)
            .height(Length::Fill)
            .padding(8)
            .font(Font::MONOSPACE)
            .size(f32::from(self.notepad.view().font_size()))
            .style(move |_theme, _status| text_editor::Style {
                background: Background::Color(editor_bg),
                border: Border {
                    width: 0.0,
                    radius: 0.0.into(),
                    color: Color::TRANSPARENT,
                },
                icon: editor_fg,
                placeholder: Color {
                    a: 0.5,
                    ..editor_fg
                },
                value: editor_fg,
                selection,
            })
            .on_action(Message::EditorAction)
            .into()
    }

    /// Slim vertical indicator driven by the viewport fraction pair.
    fn view_scrollbar(&self) -> Element<'_, Message> {
        let palette = self.notepad.view().theme().palette();
        let thumb_color = Color {
            a: 0.45,
            ..to_iced(palette.editor.foreground)
        };

        let above = (self.viewport.first * 1000.0).round() as u16;
        let thumb = (self.viewport.span() * 1000.0).round().max(1.0) as u16;
        let below = ((1.0 - self.viewport.last) * 1000.0).round() as u16;

        let mut track: Vec<Element<'_, Message>> = Vec::new();
        if above > 0 {
            track.push(Space::new(Length::Fill, Length::FillPortion(above)).into());
        }
        track.push(
            container(Space::new(Length::Fill, Length::FillPortion(thumb)))
                .width(Length::Fill)
                .style(move |_| container::Style {
                    background: Some(Background::Color(thumb_color)),
                    border: Border {
                        radius: 3.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                })
                .into(),
        );
        if below > 0 {
            track.push(Space::new(Length::Fill, Length::FillPortion(below)).into());
        }

        let editor_bg = to_iced(palette.editor.background);
        container(Column::with_children(track).height(Length::Fill))
            .width(Length::Fixed(Layout::SCROLLBAR_WIDTH))
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(editor_bg)),
                ..Default::default()
            })
            .into()
    }
}
