//! Debounced window-resize handling
//!
//! Window managers deliver resize events in bursts - one per frame during
//! an interactive drag. The refit work only matters for the final size, so
//! events are coalesced through a trailing-edge debounce: each event
//! cancels any pending timer and schedules a new one, and only a quiet
//! period of the full delay lets the action fire, with the arguments of the
//! last event.
//!
//! The timer state is an explicit object ([`Debouncer`]) rather than
//! closure capture, so the cancel-and-reschedule contract is visible and
//! testable in isolation.
//!
//! The debounced action refits the fixed orthographic camera's viewport so
//! the whole board stays visible at the new aspect ratio. The surface
//! buffers themselves are rescaled by the engine; nothing here blocks the
//! render loop, and a missing camera simply means there is nothing to
//! refit.

use std::time::Duration;

use bevy::ecs::message::MessageReader;
use bevy::camera::ScalingMode;
use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::core::{ViewerSettings, ViewerState};
use crate::rendering::board::BoardLayout;
use crate::rendering::camera::FixedCamera;

/// Margin factor between the board extent and the viewport edge
const VIEWPORT_MARGIN: f32 = 1.5;

/// Logical size of the render surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

/// Trailing-edge debouncer with explicit pending-timer state
///
/// `schedule` cancels any pending timer and starts a new one holding the
/// latest payload; `tick` advances the pending timer and yields the payload
/// exactly once, no earlier than the full delay after the last `schedule`.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    timer: Option<Timer>,
    pending: Option<SurfaceSize>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            timer: None,
            pending: None,
        }
    }

    /// Change the quiet-period length for subsequent schedules
    ///
    /// An already-pending timer keeps its original delay.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record the latest payload and restart the quiet-period timer
    pub fn schedule(&mut self, payload: SurfaceSize) {
        self.pending = Some(payload);
        self.timer = Some(Timer::new(self.delay, TimerMode::Once));
    }

    /// Advance the pending timer; yields the payload when the quiet period
    /// has fully elapsed
    pub fn tick(&mut self, delta: Duration) -> Option<SurfaceSize> {
        let timer = self.timer.as_mut()?;
        timer.tick(delta);
        if timer.just_finished() {
            self.timer = None;
            self.pending.take()
        } else {
            None
        }
    }

    /// Whether a firing is currently scheduled
    pub fn is_pending(&self) -> bool {
        self.timer.is_some()
    }
}

/// Resource wrapping the resize debouncer
#[derive(Resource, Deref, DerefMut)]
pub struct ResizeDebounce(pub Debouncer);

impl Default for ResizeDebounce {
    fn default() -> Self {
        Self(Debouncer::new(Duration::from_millis(200)))
    }
}

/// Orthographic viewport height that keeps the board fully visible
///
/// `FixedVertical` scaling fixes the vertical extent; the horizontal extent
/// is `viewport_height × aspect`. For surfaces taller than wide the height
/// is stretched so the width still covers the board.
pub fn fit_viewport_height(layout: &BoardLayout, size: SurfaceSize) -> f32 {
    let base = default_viewport_height(layout);
    if size.width <= 0.0 || size.height <= 0.0 {
        return base;
    }
    base * (size.height / size.width).max(1.0)
}

/// Viewport height for an unknown (or square) surface
pub fn default_viewport_height(layout: &BoardLayout) -> f32 {
    layout.board_span() * VIEWPORT_MARGIN
}

/// Applies the configured debounce delay once settings are resident
pub fn configure_resize_debounce(
    settings: Res<ViewerSettings>,
    mut debounce: ResMut<ResizeDebounce>,
) {
    debounce.set_delay(Duration::from_millis(settings.resize_debounce_ms));
}

/// Feeds window-resize messages into the debouncer
///
/// Every message reschedules; only the last size of a burst survives.
pub fn watch_resize_events(
    mut resize_messages: MessageReader<WindowResized>,
    mut debounce: ResMut<ResizeDebounce>,
) {
    for message in resize_messages.read() {
        debounce.schedule(SurfaceSize {
            width: message.width,
            height: message.height,
        });
    }
}

/// Fires the debounced refit when the quiet period elapses
pub fn apply_debounced_resize(
    time: Res<Time>,
    mut debounce: ResMut<ResizeDebounce>,
    layout: Res<BoardLayout>,
    mut fixed_cameras: Query<&mut Projection, With<FixedCamera>>,
) {
    let Some(size) = debounce.tick(time.delta()) else {
        return;
    };

    info!("[RESIZE] Surface settled at {}x{}", size.width, size.height);

    for mut projection in fixed_cameras.iter_mut() {
        if let Projection::Orthographic(ortho) = projection.as_mut() {
            ortho.scaling_mode = ScalingMode::FixedVertical {
                viewport_height: fit_viewport_height(&layout, size),
            };
        }
    }
}

pub struct ResizePlugin;

impl Plugin for ResizePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ResizeDebounce>();
        app.add_systems(OnEnter(ViewerState::Viewing), configure_resize_debounce);
        app.add_systems(
            Update,
            (watch_resize_events, apply_debounced_resize).chain(),
        );
    }
}
