//! Move animation
//!
//! A moving piece slides in a straight line from its origin to its
//! destination. The duration grows with the distance travelled: a fixed
//! number of frames per square (see [`GameSettings::animation_seconds`]).
//!
//! [`GameSettings::animation_seconds`]: crate::core::GameSettings::animation_seconds

use bevy::prelude::*;

use super::pieces::{CaptureGhost, PIECE_Z};
use crate::game::resources::MoveAnimation;

/// Straight-line slide between two square centers
#[derive(Component, Debug, Clone)]
pub struct PieceAnimation {
    start: Vec2,
    end: Vec2,
    timer: Timer,
}

impl PieceAnimation {
    pub fn new(start: Vec2, end: Vec2, seconds: f32) -> Self {
        Self {
            start,
            end,
            timer: Timer::from_seconds(seconds, TimerMode::Once),
        }
    }

    /// Position after the animation has run for its current elapsed time
    pub fn position(&self) -> Vec2 {
        self.start.lerp(self.end, self.timer.fraction())
    }

    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    fn tick(&mut self, delta: std::time::Duration) {
        self.timer.tick(delta);
    }
}

/// Advance sliding pieces; drop the capture ghost once the mover lands
pub fn animate_pieces(
    mut commands: Commands,
    time: Res<Time>,
    mut animation: ResMut<MoveAnimation>,
    mut moving: Query<(Entity, &mut PieceAnimation, &mut Transform)>,
    ghosts: Query<Entity, With<CaptureGhost>>,
) {
    let mut landed = false;
    for (entity, mut slide, mut transform) in &mut moving {
        slide.tick(time.delta());
        let position = slide.position();
        transform.translation.x = position.x;
        transform.translation.y = position.y;

        if slide.is_finished() {
            transform.translation.z = PIECE_Z;
            commands.entity(entity).remove::<PieceAnimation>();
            landed = true;
        }
    }

    if landed {
        for ghost in &ghosts {
            commands.entity(ghost).despawn();
        }
        animation.set_running(false);
        trace!("[ANIMATION] Move finished");
    }
}
