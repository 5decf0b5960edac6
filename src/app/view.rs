// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::media::LoadedContent;
use crate::ui::design_tokens::{border, palette, spacing, typography};
use crate::ui::MovableView;
use iced::widget::{column, container, text, Container};
use iced::{Border, Element, Length, Point, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub content: &'a LoadedContent,
    pub width: Length,
    pub height: Length,
    pub last_position: Option<Point>,
}

/// Renders a status line above the container holding the movable element.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let element = MovableView::new(ctx.content)
        .width(ctx.width)
        .height(ctx.height)
        .on_move(Message::ElementMoved);
    let size = element.measurement().size;

    let status = match ctx.last_position {
        Some(position) => format!(
            "{:.0}x{:.0} at ({:.1}, {:.1})",
            size.width, size.height, position.x, position.y
        ),
        None => format!("{:.0}x{:.0}, drag it around", size.width, size.height),
    };

    let region: Container<'_, Message> = container(element.into_element())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(region_style);

    column![
        text(status).size(typography::BODY).color(palette::GRAY_400),
        region
    ]
    .spacing(spacing::XS)
    .padding(spacing::MD)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn region_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(palette::WHITE.into()),
        border: Border {
            color: palette::GRAY_100,
            width: border::WIDTH_SM,
            ..Default::default()
        },
        ..Default::default()
    }
}
