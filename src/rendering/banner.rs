//! Game over banner
//!
//! Centered over the board: gray text with a black drop shadow two pixels
//! down and to the right. Shown once the final move has finished animating
//! and removed again by undo or reset.

use bevy::prelude::*;

use super::board::BoardLayout;
use crate::game::resources::{ActiveGame, MoveAnimation};

/// Z layer of the banner, above every piece
pub const BANNER_Z: f32 = 10.0;

const BANNER_FONT_SIZE: f32 = 32.0;
const SHADOW_OFFSET: Vec2 = Vec2::new(2.0, -2.0);

#[derive(Component, Debug)]
pub struct GameOverBanner;

/// Text the banner should show right now, if any
///
/// Nothing while a move is still animating, so the final move lands before
/// the result appears.
pub fn banner_message(game: &ActiveGame, animation: &MoveAnimation) -> Option<String> {
    if animation.is_busy() {
        return None;
    }
    game.status().message()
}

/// Show or clear the banner when the game or its animation changes
pub fn update_game_over_banner(
    mut commands: Commands,
    game: Res<ActiveGame>,
    animation: Res<MoveAnimation>,
    layout: Res<BoardLayout>,
    existing: Query<Entity, With<GameOverBanner>>,
) {
    if !game.is_changed() && !animation.is_changed() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let Some(message) = banner_message(&game, &animation) else {
        return;
    };

    let center = layout.board_center();
    let font = TextFont {
        font_size: BANNER_FONT_SIZE,
        ..default()
    };

    commands.spawn((
        Text2d::new(message.clone()),
        font.clone(),
        TextColor(Color::BLACK),
        Transform::from_translation((center + SHADOW_OFFSET).extend(BANNER_Z)),
        GameOverBanner,
    ));
    commands.spawn((
        Text2d::new(message.clone()),
        font,
        TextColor(Color::srgb(0.5, 0.5, 0.5)),
        Transform::from_translation(center.extend(BANNER_Z + 0.1)),
        GameOverBanner,
    ));

    debug!("[BANNER] {}", message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::Move;

    fn fools_mate() -> (ActiveGame, Move) {
        let mut game = ActiveGame::default();
        let mut last = None;
        for notation in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            let mv = Move::from_notation(notation, &game.state().board).unwrap();
            last = Some(game.play(mv).unwrap());
        }
        (game, last.unwrap())
    }

    #[test]
    fn test_no_banner_while_playing() {
        let game = ActiveGame::default();
        assert_eq!(banner_message(&game, &MoveAnimation::default()), None);
    }

    #[test]
    fn test_banner_waits_for_final_move_to_land() {
        let (game, last) = fools_mate();
        let mut animation = MoveAnimation::default();
        animation.queue(last);
        assert_eq!(banner_message(&game, &animation), None);

        animation.take_pending();
        animation.set_running(true);
        assert_eq!(banner_message(&game, &animation), None);

        animation.set_running(false);
        assert_eq!(
            banner_message(&game, &animation).as_deref(),
            Some("Black wins by checkmate")
        );
    }

    #[test]
    fn test_banner_cleared_by_undo() {
        let (mut game, _) = fools_mate();
        let animation = MoveAnimation::default();
        assert!(banner_message(&game, &animation).is_some());

        game.undo();
        assert_eq!(banner_message(&game, &animation), None);
    }
}
