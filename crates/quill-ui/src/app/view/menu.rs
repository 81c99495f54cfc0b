use iced::widget::{button, column, container, horizontal_space, row, text, Column, Row, Space};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};

use quill_core::{Command, ThemeKind};

use crate::app::{App, Message, TopMenu};
use crate::style::{colors, to_iced, Layout};

impl App {
    pub fn view_menu_bar(&self) -> Element<'_, Message> {
        let palette = self.notepad.view().theme().palette();
        let menu_fg = to_iced(palette.menu.foreground);

        let menus = [
            TopMenu::File,
            TopMenu::Edit,
            TopMenu::View,
            TopMenu::Theme,
            TopMenu::Help,
        ];

        let mut items: Vec<Element<'_, Message>> = Vec::new();

        for menu in menus {
            let is_active = self.active_menu == Some(menu);

            let menu_btn = button(text(Self::menu_label(menu)).size(13).color(menu_fg))
                .padding(Padding::from([5, 10]))
                .style(move |_: &Theme, status: button::Status| {
                    let bg = if is_active || matches!(status, button::Status::Hovered) {
                        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
                    } else {
                        Color::TRANSPARENT
                    };
                    button::Style {
                        background: Some(Background::Color(bg)),
                        text_color: menu_fg,
                        border: Border::default(),
                        ..Default::default()
                    }
                })
                .on_press(Message::ToggleTopMenu(menu));

            items.push(menu_btn.into());
        }

        items.push(horizontal_space().into());

        let bar = Row::with_children(items)
            .spacing(2)
            .padding(Padding::from([2, 6]))
            .align_y(iced::Alignment::Center);

        let menu_bg = to_iced(palette.menu.background);
        container(bar)
            .width(Length::Fill)
            .height(Layout::MENU_BAR_HEIGHT)
            .style(move |_| container::Style {
                background: Some(Background::Color(menu_bg)),
                ..Default::default()
            })
            .into()
    }

    fn menu_label(menu: TopMenu) -> &'static str {
        match menu {
            TopMenu::File => "File",
            TopMenu::Edit => "Edit",
            TopMenu::View => "View",
            TopMenu::Theme => "Theme",
            TopMenu::Help => "Help",
        }
    }

    /// Build a single dropdown item straight from a command.
    fn menu_item(command: Command) -> Element<'static, Message> {
        button(
            row![
                text(command.display_name()).size(12).color(colors::TEXT_PRIMARY),
                horizontal_space(),
                text(command.shortcut()).size(11).color(colors::TEXT_MUTED),
            ]
            .width(Length::Fill)
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([6, 16]))
        .style(|_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered => colors::BG_HOVER,
                _ => Color::TRANSPARENT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: colors::TEXT_PRIMARY,
                border: Border::default(),
                ..Default::default()
            }
        })
        .on_press(Message::Command(command))
        .into()
    }

    fn menu_separator() -> Element<'static, Message> {
        container(Space::new(Length::Fill, 1))
            .padding(Padding::from([4, 8]))
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BORDER)),
                ..Default::default()
            })
            .into()
    }

    pub fn view_menu_dropdown(&self) -> Element<'_, Message> {
        let menu = match self.active_menu {
            Some(menu) => menu,
            None => return Space::new(0, 0).into(),
        };

        let mut items: Vec<Element<'_, Message>> = Vec::new();

        match menu {
            TopMenu::File => {
                items.push(Self::menu_item(Command::New));
                items.push(Self::menu_item(Command::Open));
                items.push(Self::menu_item(Command::Save));
                items.push(Self::menu_separator());
                items.push(Self::menu_item(Command::Exit));
            }
            TopMenu::Edit => {
                items.push(Self::menu_item(Command::Cut));
                items.push(Self::menu_item(Command::Copy));
                items.push(Self::menu_item(Command::Paste));
                items.push(Self::menu_item(Command::Find));
            }
            TopMenu::View => {
                items.push(Self::menu_item(Command::ZoomIn));
                items.push(Self::menu_item(Command::ZoomOut));
                items.push(Self::menu_separator());
                items.push(Self::menu_item(Command::ToggleStatusBar));
            }
            TopMenu::Theme => {
                for theme in ThemeKind::ALL {
                    items.push(Self::menu_item(Command::ApplyTheme(theme)));
                }
            }
            TopMenu::Help => {
                items.push(Self::menu_item(Command::About));
            }
        }

        let menu_content = Column::with_children(items)
            .width(Length::Fixed(220.0))
            .padding(4);

        let menu_offset_x = match menu {
            TopMenu::File => 6.0,
            TopMenu::Edit => 48.0,
            TopMenu::View => 90.0,
            TopMenu::Theme => 138.0,
            TopMenu::Help => 196.0,
        };

        let menu_box = container(menu_content).style(|_| container::Style {
            background: Some(Background::Color(colors::BG_MEDIUM)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        });

        column![
            Space::with_height(Length::Fixed(Layout::MENU_BAR_HEIGHT)),
            row![Space::with_width(Length::Fixed(menu_offset_x)), menu_box],
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
