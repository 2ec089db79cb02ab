//! Selection highlights
//!
//! The selected square gets a translucent blue overlay and each square its
//! piece can legally move to gets a translucent yellow one. Only pieces of
//! the side to move are highlighted.

use bevy::prelude::*;
use chess_engine::Square;

use super::board::BoardLayout;
use crate::core::GameSettings;
use crate::game::resources::{ActiveGame, Selection};

/// Z layer of the overlays, between squares and pieces
pub const HIGHLIGHT_Z: f32 = 1.0;

/// Marker for highlight overlays
#[derive(Component, Debug)]
pub struct SquareHighlight;

/// Squares to highlight for the current selection: the selected square
/// first, then its destinations
pub fn highlighted_squares(game: &ActiveGame, selection: &Selection) -> Option<(Square, Vec<Square>)> {
    let selected = selection.selected()?;
    if game.state().board.color_at(selected) != Some(game.state().side_to_move) {
        return None;
    }
    let targets = game.valid_moves_from(selected).map(|mv| mv.to).collect();
    Some((selected, targets))
}

/// Redraw the overlays when the selection or the game changes
pub fn update_highlights(
    mut commands: Commands,
    game: Res<ActiveGame>,
    selection: Res<Selection>,
    layout: Res<BoardLayout>,
    settings: Res<GameSettings>,
    existing: Query<Entity, With<SquareHighlight>>,
) {
    if !game.is_changed() && !selection.is_changed() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let Some((selected, targets)) = highlighted_squares(&game, &selection) else {
        return;
    };

    let size = Vec2::splat(layout.square_size);
    let mut spawn = |square: Square, color: Color| {
        commands.spawn((
            Sprite::from_color(color, size),
            Transform::from_translation(layout.square_center(square).extend(HIGHLIGHT_Z)),
            SquareHighlight,
        ));
    };

    spawn(selected, settings.selected_highlight_color());
    let move_color = settings.move_highlight_color();
    for target in targets {
        spawn(target, move_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::Board;

    #[test]
    fn test_no_selection_no_highlights() {
        let game = ActiveGame::default();
        assert!(highlighted_squares(&game, &Selection::default()).is_none());
    }

    #[test]
    fn test_own_pawn_highlights_two_targets() {
        let game = ActiveGame::default();
        let mut selection = Selection::default();
        let e2 = Square::from_notation("e2").unwrap();
        selection.click(e2, &game.state().board, game.valid_moves());

        let (selected, targets) = highlighted_squares(&game, &selection).unwrap();
        assert_eq!(selected, e2);
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn test_opponent_piece_not_highlighted() {
        let game = ActiveGame::default();
        let mut selection = Selection::default();
        let board: Board = game.state().board;
        selection.click(Square::from_notation("e7").unwrap(), &board, game.valid_moves());
        assert!(selection.is_selected());
        assert!(highlighted_squares(&game, &selection).is_none());
    }
}
