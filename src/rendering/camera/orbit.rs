//! Orbit camera - mouse-driven rotation and zoom around the board center
//!
//! Right mouse drag adjusts yaw/pitch (pitch clamped so the camera stays
//! above the board and short of straight-down gimbal lock); the scroll
//! wheel sets a distance target that the camera approaches with smooth
//! interpolation each frame.
//!
//! `AccumulatedMouseMotion` and `AccumulatedMouseScroll` are already
//! frame-accumulated; their deltas are not multiplied by delta time.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};

/// Radians per mouse movement dot
pub const RADIANS_PER_DOT: f32 = 1.0 / 180.0;

/// Component marking a camera as orbiting a fixed focus point
#[derive(Component, Debug, Reflect)]
#[reflect(Component)]
pub struct OrbitCamera {
    /// Point the camera orbits and looks at
    pub focus: Vec3,

    /// Current distance from the focus
    pub distance: f32,

    /// Distance target set by scroll input, approached via interpolation
    pub target_distance: f32,

    /// Closest allowed distance
    pub min_distance: f32,

    /// Farthest allowed distance
    pub max_distance: f32,

    /// Rotation around Y, radians; wraps naturally
    pub yaw: f32,

    /// Elevation angle, radians; negative values look down at the focus.
    /// Clamped to [`Self::MIN_PITCH`]..[`Self::MAX_PITCH`]
    pub pitch: f32,

    /// Distance change per scroll tick
    pub zoom_speed: f32,

    /// Interpolation factor for zoom (0.0 to 1.0); lower is smoother
    pub zoom_smoothing: f32,

    /// Mouse rotation sensitivity multiplier
    pub rotation_sensitivity: f32,
}

impl OrbitCamera {
    /// Steepest allowed look-down angle, just short of straight down
    pub const MIN_PITCH: f32 = -1.52;

    /// Shallowest allowed angle, just above the board plane
    pub const MAX_PITCH: f32 = -0.05;

    /// Orbit parameters sized to a board of the given side length
    pub fn for_span(span: f32) -> Self {
        Self {
            focus: Vec3::ZERO,
            distance: span * 2.5,
            target_distance: span * 2.5,
            min_distance: span * 0.75,
            max_distance: span * 4.0,
            yaw: 0.0,
            pitch: -1.0,
            zoom_speed: 2.0,
            zoom_smoothing: 0.15,
            rotation_sensitivity: 1.0,
        }
    }

    /// Camera transform for the current yaw/pitch/distance
    pub fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        let translation = self.focus + rotation * (Vec3::Z * self.distance);
        Transform::from_translation(translation).looking_at(self.focus, Vec3::Y)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::for_span(8.0)
    }
}

/// System that feeds mouse input into the orbit parameters
pub fn orbit_camera_input_system(
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut query: Query<&mut OrbitCamera>,
) {
    for mut orbit in query.iter_mut() {
        if mouse_scroll.delta.y != 0.0 {
            // Scroll up = zoom in = shorter distance
            let zoom_delta = -mouse_scroll.delta.y * orbit.zoom_speed;
            orbit.target_distance =
                (orbit.target_distance + zoom_delta).clamp(orbit.min_distance, orbit.max_distance);
        }

        if mouse_button.pressed(MouseButton::Right) && mouse_motion.delta != Vec2::ZERO {
            orbit.pitch = (orbit.pitch
                - mouse_motion.delta.y * RADIANS_PER_DOT * orbit.rotation_sensitivity)
                .clamp(OrbitCamera::MIN_PITCH, OrbitCamera::MAX_PITCH);
            orbit.yaw -= mouse_motion.delta.x * RADIANS_PER_DOT * orbit.rotation_sensitivity;
        }
    }
}

/// System that applies the orbit parameters to the camera transform
pub fn orbit_camera_update_system(mut query: Query<(&mut Transform, &mut OrbitCamera)>) {
    for (mut transform, mut orbit) in query.iter_mut() {
        orbit.distance = orbit.distance.lerp(orbit.target_distance, orbit.zoom_smoothing);
        *transform = orbit.transform();
    }
}
