// SPDX-License-Identifier: MPL-2.0
//! Canvas renderer for the wireframe scene.

use super::{DeferredScene, FloatingShape};
use crate::ui::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};

/// Perspective focal length for the projection, in mesh units.
const FOCAL: f32 = 4.0;

/// Vertical bob amplitude in logical pixels.
const BOB_AMPLITUDE: f32 = 8.0;

/// Canvas program drawing the floating wireframe shapes.
///
/// A program instance is created per view pass with the current animation
/// angle baked in; the cache therefore lives exactly one frame, which is
/// fine for a scene this small.
pub struct SceneCanvas<'a> {
    scene: &'a DeferredScene,
    cache: Cache,
}

impl<'a> SceneCanvas<'a> {
    #[must_use]
    pub fn new(scene: &'a DeferredScene) -> Self {
        Self {
            scene,
            cache: Cache::default(),
        }
    }

    /// Wraps the program in a fixed-size canvas widget.
    ///
    /// The size matches the placeholder bounds exactly so mounting the scene
    /// never shifts the surrounding layout.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::SCENE_WIDTH))
            .height(Length::Fixed(sizing::SCENE_HEIGHT))
            .into()
    }

    fn draw_shape(frame: &mut Frame, shape: &FloatingShape, base_angle: f32, elapsed: f32) {
        let spin = base_angle * shape.spin;
        let bob = (elapsed * shape.float).sin() * BOB_AMPLITUDE;

        let center = Point::new(
            frame.width() * shape.anchor.0,
            frame.height() * shape.anchor.1 + bob,
        );

        let color = Color {
            a: opacity::WIREFRAME,
            ..shape.color
        };

        // Project all vertices once, then stroke each edge
        let projected: Vec<Point> = shape
            .mesh
            .vertices()
            .iter()
            .map(|v| {
                let rotated = v.rotate_y(spin).rotate_x(spin * 0.6);
                let (x, y) = rotated.project(FOCAL);
                Point::new(center.x + x * shape.scale, center.y + y * shape.scale)
            })
            .collect();

        for &(a, b) in shape.mesh.edges() {
            let edge = Path::line(projected[a], projected[b]);
            frame.stroke(&edge, Stroke::default().with_width(1.0).with_color(color));
        }
    }
}

impl<Message> canvas::Program<Message> for SceneCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let Some(model) = self.scene.model() else {
            return Vec::new();
        };

        let base_angle = self.scene.base_angle();
        let elapsed = self.scene.elapsed();

        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                for shape in model.shapes() {
                    Self::draw_shape(frame, shape, base_angle, elapsed);
                }
            });

        vec![geometry]
    }
}
