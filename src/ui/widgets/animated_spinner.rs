// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a canvas.
//!
//! The spinner holds no clock of its own: the app advances a shared rotation
//! angle on each tick and rebuilds the spinner with it.

use crate::config::SPINNER_STEP_RADIANS;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::canvas::{self, path::Arc, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::{Column, Container, Text};
use iced::{alignment, mouse, Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, TAU};

const STROKE_WIDTH: f32 = 4.0;

/// Advances `rotation` by one tick, wrapping at a full turn.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + SPINNER_STEP_RADIANS) % TAU
}

pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::SPINNER,
        }
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame: &mut Frame| {
            let center = frame.center();
            let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

            frame.stroke(
                &Path::circle(center, radius),
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(Color { a: 0.2, ..self.color }),
            );

            // Quarter-turn arc starting at twelve o'clock
            let start = self.rotation - FRAC_PI_2;
            let arc = Path::new(|builder| {
                builder.arc(Arc {
                    center,
                    radius,
                    start_angle: Radians(start),
                    end_angle: Radians(start + FRAC_PI_2 * 1.5),
                });
            });
            frame.stroke(
                &arc,
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round),
            );
        });

        vec![geometry]
    }
}

/// Spinner with a caption, centered in the available width.
pub fn loading<Message: 'static>(label: String, color: Color, rotation: f32) -> Element<'static, Message> {
    let column = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(AnimatedSpinner::new(color, rotation).into_element())
        .push(Text::new(label).size(typography::BODY));

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
}
