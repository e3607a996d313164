// SPDX-License-Identifier: MPL-2.0
//! Attribution footer.

use crate::apod::NASA_API_WEBSITE;
use crate::i18n::fluent::I18n;
use crate::ui::components::picture_card::Action;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(i18n: &I18n) -> Element<'a, Action> {
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr("footer-attribution")).size(typography::CAPTION))
        .push(
            button(Text::new("api.nasa.gov").size(typography::CAPTION))
                .on_press(Action::OpenInBrowser(NASA_API_WEBSITE.to_string()))
                .padding(spacing::XXS)
                .style(styles::button::tab(false)),
        );

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::navbar)
        .into()
}
