// SPDX-License-Identifier: MPL-2.0
//! Deferred decorative scene.
//!
//! The animated wireframe backdrop is pure decoration, so it must never cost
//! anything at startup. The [`DeferredScene`] gate keeps the scene unbuilt
//! until the hero section is actually shown, builds the meshes off the update
//! loop, and renders a fixed-size placeholder in the meantime so the layout
//! never shifts when the canvas appears.
//!
//! Build completions carry the generation that scheduled them; a completion
//! arriving after [`DeferredScene::retire`] (or after a newer build started)
//! is discarded instead of resurrecting a torn-down scene.

pub mod canvas;
pub mod geometry;

use crate::ui::design_tokens::palette;
use geometry::Wireframe;
use iced::Color;

/// Spin speed of the slowest shape, in radians per second.
const BASE_SPIN_RATE: f32 = 0.5;

/// One floating shape: a mesh plus its placement and animation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingShape {
    pub mesh: Wireframe,
    /// Horizontal/vertical placement as a fraction of the canvas (0..1).
    pub anchor: (f32, f32),
    /// Mesh scale in logical pixels.
    pub scale: f32,
    /// Spin speed multiplier relative to [`BASE_SPIN_RATE`].
    pub spin: f32,
    /// Vertical bob speed multiplier.
    pub float: f32,
    pub color: Color,
}

/// The fully built scene model.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneModel {
    shapes: Vec<FloatingShape>,
}

impl SceneModel {
    /// Builds the landing scene: octahedron, torus, icosahedron.
    ///
    /// Construction is deliberately kept out of `new()` paths; the gate runs
    /// it inside an async task so the first frame never pays for it.
    #[must_use]
    pub fn build() -> Self {
        Self {
            shapes: vec![
                FloatingShape {
                    mesh: Wireframe::octahedron(),
                    anchor: (0.25, 0.4),
                    scale: 52.0,
                    spin: 2.5,
                    float: 2.0,
                    color: palette::PRIMARY_500,
                },
                FloatingShape {
                    mesh: Wireframe::torus(1.0, 0.3, 24, 10),
                    anchor: (0.72, 0.3),
                    scale: 44.0,
                    spin: 1.8,
                    float: 1.0,
                    color: palette::ACCENT_500,
                },
                FloatingShape {
                    mesh: Wireframe::icosahedron(),
                    anchor: (0.6, 0.75),
                    scale: 34.0,
                    spin: 2.0,
                    float: 1.0,
                    color: palette::WIRE_SKY,
                },
            ],
        }
    }

    #[must_use]
    pub fn shapes(&self) -> &[FloatingShape] {
        &self.shapes
    }
}

/// Where the gate currently is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
enum Phase {
    /// Nothing built; placeholder rendered.
    Dormant,
    /// An async build has been scheduled and not yet applied.
    Building,
    /// The scene is built and animating.
    Ready(SceneModel),
}

/// Deferred mount gate for the decorative scene.
#[derive(Debug)]
pub struct DeferredScene {
    phase: Phase,
    /// Bumped on every build request and on retire; stale completions are
    /// recognized by comparing against this.
    generation: u64,
    /// Animation clock in seconds, advanced by ticks while `Ready`.
    elapsed: f32,
}

impl Default for DeferredScene {
    fn default() -> Self {
        Self::new()
    }
}

impl DeferredScene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Dormant,
            generation: 0,
            elapsed: 0.0,
        }
    }

    /// Requests an asynchronous build.
    ///
    /// Returns the generation to tag the build task with, or `None` when a
    /// build is already in flight or the scene is already up.
    pub fn request_build(&mut self) -> Option<u64> {
        match self.phase {
            Phase::Dormant => {
                self.generation += 1;
                self.phase = Phase::Building;
                Some(self.generation)
            }
            Phase::Building | Phase::Ready(_) => None,
        }
    }

    /// Applies a finished build.
    ///
    /// The model is dropped when the generation is stale or the gate is no
    /// longer waiting for a build.
    pub fn on_built(&mut self, generation: u64, model: SceneModel) {
        if generation != self.generation {
            return;
        }
        if matches!(self.phase, Phase::Building) {
            self.phase = Phase::Ready(model);
            self.elapsed = 0.0;
        }
    }

    /// Tears the scene down and invalidates any in-flight build.
    pub fn retire(&mut self) {
        self.generation += 1;
        self.phase = Phase::Dormant;
        self.elapsed = 0.0;
    }

    /// Advances the animation clock. Only meaningful while `Ready`.
    pub fn tick(&mut self, delta_secs: f32) {
        if matches!(self.phase, Phase::Ready(_)) {
            self.elapsed += delta_secs;
        }
    }

    /// Returns `true` once the scene is built and animating.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready(_))
    }

    /// Returns `true` while a build task is outstanding.
    #[must_use]
    pub fn is_building(&self) -> bool {
        matches!(self.phase, Phase::Building)
    }

    /// The built model, if any.
    #[must_use]
    pub fn model(&self) -> Option<&SceneModel> {
        match &self.phase {
            Phase::Ready(model) => Some(model),
            _ => None,
        }
    }

    /// Animation clock in seconds since the scene became ready.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Current spin angle in radians for a unit spin multiplier.
    #[must_use]
    pub fn base_angle(&self) -> f32 {
        self.elapsed * BASE_SPIN_RATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_gate_is_dormant() {
        let gate = DeferredScene::new();
        assert!(!gate.is_ready());
        assert!(!gate.is_building());
        assert!(gate.model().is_none());
    }

    #[test]
    fn request_build_transitions_to_building_once() {
        let mut gate = DeferredScene::new();

        let first = gate.request_build();
        assert!(first.is_some());
        assert!(gate.is_building());

        // A second request while building is refused
        assert!(gate.request_build().is_none());
    }

    #[test]
    fn on_built_with_matching_generation_mounts_scene() {
        let mut gate = DeferredScene::new();
        let generation = gate.request_build().expect("build scheduled");

        gate.on_built(generation, SceneModel::build());
        assert!(gate.is_ready());
        assert_eq!(gate.model().map(|m| m.shapes().len()), Some(3));
    }

    #[test]
    fn stale_build_after_retire_is_discarded() {
        let mut gate = DeferredScene::new();
        let generation = gate.request_build().expect("build scheduled");

        // Component torn down while the build is in flight
        gate.retire();
        gate.on_built(generation, SceneModel::build());

        assert!(!gate.is_ready(), "stale build must not resurrect the scene");
        assert!(gate.model().is_none());
    }

    #[test]
    fn rebuild_after_retire_uses_fresh_generation() {
        let mut gate = DeferredScene::new();
        let old = gate.request_build().expect("build scheduled");
        gate.retire();

        let new = gate.request_build().expect("second build scheduled");
        assert_ne!(old, new);

        // Only the new generation may mount
        gate.on_built(old, SceneModel::build());
        assert!(!gate.is_ready());
        gate.on_built(new, SceneModel::build());
        assert!(gate.is_ready());
    }

    #[test]
    fn request_build_is_refused_while_ready() {
        let mut gate = DeferredScene::new();
        let generation = gate.request_build().expect("build scheduled");
        gate.on_built(generation, SceneModel::build());

        assert!(gate.request_build().is_none());
    }

    #[test]
    fn tick_advances_clock_only_when_ready() {
        let mut gate = DeferredScene::new();
        gate.tick(1.0);
        assert_eq!(gate.elapsed(), 0.0);

        let generation = gate.request_build().expect("build scheduled");
        gate.tick(1.0);
        assert_eq!(gate.elapsed(), 0.0);

        gate.on_built(generation, SceneModel::build());
        gate.tick(0.5);
        gate.tick(0.5);
        assert!((gate.elapsed() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn retire_resets_animation_clock() {
        let mut gate = DeferredScene::new();
        let generation = gate.request_build().expect("build scheduled");
        gate.on_built(generation, SceneModel::build());
        gate.tick(2.0);

        gate.retire();
        assert_eq!(gate.elapsed(), 0.0);
    }

    #[test]
    fn scene_model_builds_three_shapes() {
        let model = SceneModel::build();
        assert_eq!(model.shapes().len(), 3);
    }
}
