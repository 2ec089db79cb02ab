//! Move animation bookkeeping shared between game flow and rendering

use bevy::prelude::*;
use chess_engine::Move;

/// Move waiting to be animated, and whether an animation is still playing
///
/// Game flow sets `pending` when a move is played; the piece renderer takes
/// it when it rebuilds the pieces and marks the animation as running until
/// the moving piece reaches its square. Board input is ignored while busy.
#[derive(Resource, Debug, Default, Clone)]
pub struct MoveAnimation {
    pending: Option<Move>,
    running: bool,
}

impl MoveAnimation {
    pub fn queue(&mut self, mv: Move) {
        self.pending = Some(mv);
    }

    pub fn take_pending(&mut self) -> Option<Move> {
        self.pending.take()
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Drop anything queued or playing; used by undo and reset
    pub fn cancel(&mut self) {
        self.pending = None;
        self.running = false;
    }

    pub fn is_busy(&self) -> bool {
        self.running || self.pending.is_some()
    }
}
