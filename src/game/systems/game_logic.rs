//! Game flow - applying commands to the running game

use bevy::prelude::*;

use crate::core::GameSettings;
use crate::game::events::GameCommand;
use crate::game::resources::{ActiveGame, MoveAnimation, Selection};

/// Apply every [`GameCommand`] written this frame, in order
///
/// Undo and reset also drop the selection and any animation in flight, so
/// nothing on screen refers to a position that no longer exists.
pub fn apply_game_commands(
    mut reader: MessageReader<GameCommand>,
    mut game: ResMut<ActiveGame>,
    mut selection: ResMut<Selection>,
    mut animation: ResMut<MoveAnimation>,
    settings: Res<GameSettings>,
) {
    for command in reader.read() {
        match command {
            GameCommand::PlayMove(mv) => match game.play(*mv) {
                Ok(played) => {
                    info!(
                        "[MOVE] {}. {} {}{}",
                        (game.state().move_log.len() + 1) / 2,
                        played.piece_moved.color,
                        played,
                        if played.is_pawn_promotion { "=Q" } else { "" }
                    );
                    selection.clear();
                    if settings.animate_moves {
                        animation.queue(played);
                    }
                    if let Some(message) = game.status().message() {
                        info!("[GAME] {}", message);
                    }
                }
                Err(e) => warn!("[MOVE] Rejected {}: {}", mv, e),
            },
            GameCommand::Undo => {
                match game.undo() {
                    Some(undone) => info!("[MOVE] Undid {}", undone),
                    None => debug!("[MOVE] Nothing to undo"),
                }
                selection.clear();
                animation.cancel();
            }
            GameCommand::Reset => {
                game.reset();
                selection.clear();
                animation.cancel();
                info!("[GAME] New game");
            }
        }
    }
}
