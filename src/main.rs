use bevy::prelude::*;

use boardscape::core::{CorePlugin, WindowConfig};
use boardscape::rendering::{BoardAssetsPlugin, BoardPlugin, CameraPlugin, PiecePlugin, ResizePlugin};

fn main() {
    let primary_window = Some(WindowConfig::default().to_window());

    App::new()
        // Engine plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window,
            ..default()
        }))
        // Application infrastructure
        .add_plugins(CorePlugin)
        // Scene plugins
        .add_plugins((
            BoardAssetsPlugin,
            BoardPlugin,
            PiecePlugin,
            CameraPlugin,
            ResizePlugin,
        ))
        // Startup systems
        .add_systems(Startup, setup_lighting)
        .run();
}

fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });

    commands.spawn((
        PointLight {
            shadows_enabled: true,
            intensity: 100_000.0,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0),
        Name::new("Key Light"),
    ));
}
