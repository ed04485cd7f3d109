//! Camera setup - one configurable camera, two modes
//!
//! The scene gets exactly one camera, selected by
//! [`CameraMode`](crate::core::CameraMode):
//!
//! - **Orbit**: perspective camera orbiting the board center with mouse
//!   rotation and smoothed scroll zoom
//! - **Fixed**: static orthographic camera at an isometric offset, sized so
//!   the whole board fits; this is the camera the debounced resize refit
//!   targets

pub mod orbit;

pub use orbit::{orbit_camera_input_system, orbit_camera_update_system, OrbitCamera};

use bevy::camera::ScalingMode;
use bevy::prelude::*;

use crate::core::{CameraMode, ViewerSettings, ViewerState};
use crate::rendering::board::BoardLayout;
use crate::rendering::resize::default_viewport_height;

/// Marker component for the fixed orthographic camera
#[derive(Component)]
pub struct FixedCamera;

/// Spawns the configured camera when the scene is built
pub fn setup_camera(
    mut commands: Commands,
    settings: Res<ViewerSettings>,
    layout: Res<BoardLayout>,
) {
    match settings.camera_mode {
        CameraMode::Orbit => {
            let orbit = OrbitCamera::for_span(layout.board_span());
            let transform = orbit.transform();
            commands.spawn((Camera3d::default(), transform, orbit, Name::new("Orbit Camera")));
        }
        CameraMode::Fixed => {
            let focus = Vec3::ZERO;
            let offset = layout.board_span() * 0.75;
            let position = Vec3::new(focus.x + offset, offset, focus.z + offset);

            commands.spawn((
                Camera3d::default(),
                Projection::from(OrthographicProjection {
                    scaling_mode: ScalingMode::FixedVertical {
                        viewport_height: default_viewport_height(&layout),
                    },
                    ..OrthographicProjection::default_3d()
                }),
                Transform::from_translation(position).looking_at(focus, Vec3::Y),
                FixedCamera,
                Name::new("Fixed Camera"),
            ));
        }
    }

    info!("[CAMERA] Spawned {} camera", settings.camera_mode.name());
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<OrbitCamera>();
        app.add_systems(OnEnter(ViewerState::Viewing), setup_camera);
        app.add_systems(
            Update,
            (orbit_camera_input_system, orbit_camera_update_system)
                .chain()
                .run_if(in_state(ViewerState::Viewing)),
        );
    }
}
