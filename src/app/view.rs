use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, button, column, container, horizontal_space, row, text, text_input};
use iced::{Color, Element, Length, Padding};

use super::messages::Message;
use super::state::App;
use crate::anim::{ElementId, ElementStyle};
use crate::config::ThemeMode;
use crate::deck::ElementKind;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        if self.deck.is_empty() {
            return container(text("No slides in this deck.").size(self.config.body_font_size as f32))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .into();
        }

        let current = self.navigator.current();
        let slide_opacity = self
            .navigator
            .visibility(current)
            .map(|v| v.opacity)
            .unwrap_or(1.0);

        let mut body = Column::new().spacing(16).max_width(960);
        if let Some(slide) = self.deck.slide(current) {
            body = body.push(
                text(slide.title.as_str())
                    .size(self.config.title_font_size as f32)
                    .color(self.text_color(slide_opacity)),
            );

            for (index, element) in slide.elements.iter().enumerate() {
                let style = if element.animate {
                    self.stage.style_of(ElementId {
                        slide: current,
                        element: index,
                    })
                } else {
                    ElementStyle::VISIBLE
                };

                let size = match element.kind {
                    ElementKind::Heading => self.config.title_font_size * 3 / 4,
                    ElementKind::Body | ElementKind::Bullet => self.config.body_font_size,
                };
                let label = match element.kind {
                    ElementKind::Bullet => format!("\u{2022} {}", element.text),
                    _ => element.text.clone(),
                };

                body = body.push(
                    container(
                        text(label)
                            .size(size as f32)
                            .color(self.text_color(style.opacity * slide_opacity)),
                    )
                    .padding(Padding {
                        top: style.offset_y.max(0.0),
                        right: 0.0,
                        bottom: 0.0,
                        left: 0.0,
                    }),
                );
            }
        }

        let slide_area = container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .padding(32);

        // Visually subdued live region for assistive technology.
        let announcement = text(self.announcer.latest().unwrap_or_default())
            .size(12)
            .color(self.text_color(0.5));

        let footer = if self.nav_visible() {
            let (prev_label, next_label) = if self.icons_loaded {
                ("\u{2039}", "\u{203A}")
            } else {
                ("Prev", "Next")
            };

            let prev_button = if self.navigator.can_go_previous() {
                button(prev_label).on_press(Message::PreviousSlide)
            } else {
                button(prev_label)
            };
            let next_button = if self.navigator.can_go_next() {
                button(next_label).on_press(Message::NextSlide)
            } else {
                button(next_label)
            };

            let counter = row![
                text_input("", &self.page_input)
                    .on_input(Message::PageInputChanged)
                    .on_submit(Message::PageInputSubmitted)
                    .width(48),
                text(format!("/ {}", self.deck.len())).size(self.config.body_font_size as f32 * 0.75),
            ]
            .spacing(6)
            .align_y(Vertical::Center);

            row![
                announcement,
                horizontal_space(),
                prev_button,
                counter,
                next_button,
            ]
            .spacing(10)
            .align_y(Vertical::Center)
            .width(Length::Fill)
        } else {
            row![announcement].width(Length::Fill)
        };

        column![slide_area, container(footer).padding(12)]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn text_color(&self, opacity: f32) -> Color {
        let base = match self.config.theme {
            ThemeMode::Day => Color::from_rgb(0.1, 0.1, 0.12),
            ThemeMode::Night => Color::from_rgb(0.95, 0.95, 0.92),
        };
        Color {
            a: opacity.clamp(0.0, 1.0),
            ..base
        }
    }
}
