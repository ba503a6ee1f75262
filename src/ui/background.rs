// SPDX-License-Identifier: MPL-2.0
//! Decorative rotating torus-knot background using Canvas.
//!
//! Purely presentational: the mesh never reads or affects cart state. The
//! per-frame loop lives in the application's animation subscription, which
//! is dropped (and with it this widget's redraw source) whenever the
//! animation is disabled or the view goes away.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Number of polyline segments used to trace the knot curve.
const SEGMENTS: usize = 240;

/// Camera distance for the perspective projection.
const CAMERA_Z: f32 = 5.0;

/// Rotating (2,3) torus-knot wireframe.
pub struct TorusKnot {
    cache: Cache,
    rotation: f32, // Rotation angle in radians, applied to both the x and y axes
}

impl TorusKnot {
    /// Creates the mesh at the given rotation angle.
    #[must_use]
    pub fn new(rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
        }
    }

    /// Creates a full-window Canvas widget from this mesh.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Point on the (2,3) torus knot at parameter `t`, rotated by the
    /// current angle around the x and then the y axis.
    fn knot_point(&self, t: f32) -> (f32, f32, f32) {
        let x = (2.0 + (3.0 * t).cos()) * (2.0 * t).cos();
        let y = (2.0 + (3.0 * t).cos()) * (2.0 * t).sin();
        let z = (3.0 * t).sin();

        let (sin_r, cos_r) = self.rotation.sin_cos();

        // Rotate around the x axis
        let (y, z) = (y * cos_r - z * sin_r, y * sin_r + z * cos_r);
        // Rotate around the y axis
        let (x, z) = (x * cos_r + z * sin_r, -x * sin_r + z * cos_r);

        (x, y, z)
    }
}

impl<Message> canvas::Program<Message> for TorusKnot {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let scale = frame.width().min(frame.height()) / 2.5;

                let project = |(x, y, z): (f32, f32, f32)| {
                    // Simple pinhole projection with the camera on the z axis
                    let depth = CAMERA_Z - z;
                    Point::new(
                        center.x + x * scale / depth,
                        center.y + y * scale / depth,
                    )
                };

                let mut path = canvas::path::Builder::new();
                path.move_to(project(self.knot_point(0.0)));

                #[allow(clippy::cast_precision_loss)]
                // SEGMENTS=240, i∈[1,240] - well within f32 precision
                for i in 1..=SEGMENTS {
                    let t = i as f32 / SEGMENTS as f32 * 2.0 * PI;
                    path.line_to(project(self.knot_point(t)));
                }

                frame.stroke(
                    &path.build(),
                    Stroke::default()
                        .with_width(2.0)
                        .with_color(Color {
                            a: opacity::MESH_SUBTLE,
                            ..palette::MESH_ACCENT
                        })
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knot_point_is_on_closed_curve() {
        let mesh = TorusKnot::new(0.0);
        let start = mesh.knot_point(0.0);
        let end = mesh.knot_point(2.0 * PI);

        assert!((start.0 - end.0).abs() < 1e-4);
        assert!((start.1 - end.1).abs() < 1e-4);
        assert!((start.2 - end.2).abs() < 1e-4);
    }

    #[test]
    fn rotation_moves_points() {
        let still = TorusKnot::new(0.0);
        let rotated = TorusKnot::new(0.5);

        let a = still.knot_point(1.0);
        let b = rotated.knot_point(1.0);
        assert!((a.0 - b.0).abs() > 1e-4 || (a.1 - b.1).abs() > 1e-4);
    }

    #[test]
    fn knot_stays_inside_camera_distance() {
        // The projection divides by CAMERA_Z - z; the curve's |z| is at most 1.
        let mesh = TorusKnot::new(1.3);
        for i in 0..SEGMENTS {
            let t = i as f32 / SEGMENTS as f32 * 2.0 * PI;
            let (_, _, z) = mesh.knot_point(t);
            assert!(z < CAMERA_Z - 1.0);
        }
    }
}
