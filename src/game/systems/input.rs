//! Mouse and keyboard input
//!
//! Left clicks on the board go through [`Selection::click`]; a completed
//! move is sent on as [`GameCommand::PlayMove`]. Clicks are ignored while a
//! move is animating and once the game has ended (undo and reset still work).
//!
//! | Key | Command |
//! |-----|---------|
//! | Z   | [`GameCommand::Undo`] |
//! | R   | [`GameCommand::Reset`] |

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use chess_engine::Square;

use crate::game::events::GameCommand;
use crate::game::resources::{ActiveGame, ClickOutcome, MoveAnimation, Selection};
use crate::rendering::BoardLayout;

/// Turn left clicks on the board into selections and moves
pub fn handle_board_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    window: Single<&Window, With<PrimaryWindow>>,
    camera: Single<(&Camera, &GlobalTransform)>,
    layout: Res<BoardLayout>,
    game: Res<ActiveGame>,
    animation: Res<MoveAnimation>,
    mut selection: ResMut<Selection>,
    mut commands: MessageWriter<GameCommand>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    if !board_accepts_clicks(&game, &animation) {
        return;
    }

    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let (camera, camera_transform) = *camera;
    let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };
    let Some(square) = layout.square_at(world) else {
        return;
    };

    if let Some(command) = click_square(square, &game, &mut selection) {
        commands.write(command);
    }
}

/// Whether a click on the board may change the selection
///
/// False while a move is still sliding and after checkmate or stalemate.
pub fn board_accepts_clicks(game: &ActiveGame, animation: &MoveAnimation) -> bool {
    !animation.is_busy() && !game.is_over()
}

/// Feed a clicked square to the selection; a completed move becomes a command
pub fn click_square(
    square: Square,
    game: &ActiveGame,
    selection: &mut Selection,
) -> Option<GameCommand> {
    match selection.click(square, &game.state().board, game.valid_moves()) {
        ClickOutcome::Move(mv) => {
            debug!("[INPUT] Move entered: {}", mv);
            Some(GameCommand::PlayMove(mv))
        }
        ClickOutcome::Selected(square) => {
            debug!("[INPUT] Selected {}", square);
            None
        }
        ClickOutcome::Deselected => {
            debug!("[INPUT] Selection cleared");
            None
        }
        ClickOutcome::Ignored => None,
    }
}

/// Z takes back a move, R starts a new game
pub fn handle_keyboard(keys: Res<ButtonInput<KeyCode>>, mut commands: MessageWriter<GameCommand>) {
    if keys.just_pressed(KeyCode::KeyZ) {
        commands.write(GameCommand::Undo);
    }
    if keys.just_pressed(KeyCode::KeyR) {
        commands.write(GameCommand::Reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::Move;

    fn sq(name: &str) -> Square {
        Square::from_notation(name).unwrap()
    }

    fn play(game: &mut ActiveGame, notation: &str) -> Move {
        let mv = Move::from_notation(notation, &game.state().board).unwrap();
        game.play(mv).unwrap()
    }

    #[test]
    fn test_two_clicks_make_a_move_command() {
        let game = ActiveGame::default();
        let mut selection = Selection::default();

        assert_eq!(click_square(sq("g1"), &game, &mut selection), None);
        assert!(selection.is_selected());

        let command = click_square(sq("f3"), &game, &mut selection);
        let expected = Move::from_notation("g1f3", &game.state().board).unwrap();
        assert_eq!(command, Some(GameCommand::PlayMove(expected)));
        assert!(!selection.is_selected());
    }

    #[test]
    fn test_clicks_blocked_while_move_animates() {
        let mut game = ActiveGame::default();
        let mut animation = MoveAnimation::default();
        assert!(board_accepts_clicks(&game, &animation));

        let played = play(&mut game, "e2e4");
        animation.queue(played);
        assert!(!board_accepts_clicks(&game, &animation));

        // Still blocked once the renderer has taken the move and is sliding it
        animation.take_pending();
        animation.set_running(true);
        assert!(!board_accepts_clicks(&game, &animation));

        animation.set_running(false);
        assert!(board_accepts_clicks(&game, &animation));
    }

    #[test]
    fn test_clicks_blocked_after_checkmate_until_undo() {
        let mut game = ActiveGame::default();
        let animation = MoveAnimation::default();
        for notation in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            play(&mut game, notation);
        }
        assert!(!board_accepts_clicks(&game, &animation));

        game.undo();
        assert!(board_accepts_clicks(&game, &animation));
    }
}
