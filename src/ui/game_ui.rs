//! Side panel next to the board
//!
//! Shows whose turn it is (and check), the result once the game has ended,
//! the move log in numbered pairs, and buttons mirroring the Z / R keys.
//!
//! # Execution
//!
//! Runs in the `EguiPrimaryContextPass` schedule. The panel only reads the
//! game; its buttons write [`GameCommand`]s like the keyboard does.

use bevy_egui::egui;
use chess_engine::{GameStatus, Move};

use crate::game::resources::ActiveGame;
use crate::game::GameCommand;
use crate::ui::styles::UiColors;
use crate::ui::system_params::GamePanelParams;

/// One numbered line of the move log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveLogRow {
    pub number: usize,
    pub white: String,
    pub black: Option<String>,
}

/// Coordinate text of a move, with `=Q` for promotions
pub fn move_text(mv: &Move) -> String {
    if mv.is_pawn_promotion {
        format!("{mv}=Q")
    } else {
        mv.to_string()
    }
}

/// Pair up the move log as White / Black rows
pub fn format_move_log(moves: &[Move]) -> Vec<MoveLogRow> {
    moves
        .chunks(2)
        .enumerate()
        .map(|(index, pair)| MoveLogRow {
            number: index + 1,
            white: move_text(&pair[0]),
            black: pair.get(1).map(move_text),
        })
        .collect()
}

/// Headline text and color for the current position
pub fn status_line(game: &ActiveGame) -> (String, egui::Color32) {
    match game.status() {
        status @ (GameStatus::Checkmate { .. } | GameStatus::Stalemate) => (
            status.message().unwrap_or_default(),
            UiColors::ACCENT_GOLD,
        ),
        GameStatus::Playing => {
            let side = game.state().side_to_move;
            if game.in_check() {
                (format!("{side} to move - check!"), UiColors::DANGER)
            } else {
                (format!("{side} to move"), UiColors::TEXT_PRIMARY)
            }
        }
    }
}

/// Draw the side panel
pub fn game_panel_ui(mut params: GamePanelParams) {
    let Ok(ctx) = params.contexts.ctx_mut() else {
        return;
    };

    let game = &params.game;
    let width = params.settings.side_panel_width as f32;
    let mut command = None;

    egui::SidePanel::right("game_panel")
        .resizable(false)
        .exact_width(width)
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_DARK)
                .inner_margin(10.0),
        )
        .show(ctx, |ui| {
            let (status, color) = status_line(game);
            ui.label(egui::RichText::new(status).size(18.0).color(color).strong());
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let can_undo = !game.state().move_log.is_empty();
                if ui
                    .add_enabled(can_undo, egui::Button::new("Undo (Z)"))
                    .clicked()
                {
                    command = Some(GameCommand::Undo);
                }
                if ui.button("New game (R)").clicked() {
                    command = Some(GameCommand::Reset);
                }
            });

            ui.separator();
            ui.label(
                egui::RichText::new("Moves")
                    .size(14.0)
                    .color(UiColors::TEXT_TERTIARY),
            );

            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    egui::Grid::new("move_log")
                        .num_columns(3)
                        .striped(true)
                        .show(ui, |ui| {
                            for row in format_move_log(&game.state().move_log) {
                                ui.colored_label(UiColors::TEXT_TERTIARY, format!("{}.", row.number));
                                ui.colored_label(UiColors::TEXT_SECONDARY, row.white);
                                ui.colored_label(
                                    UiColors::TEXT_SECONDARY,
                                    row.black.unwrap_or_default(),
                                );
                                ui.end_row();
                            }
                        });
                });
        });

    if let Some(command) = command {
        params.commands.write(command);
    }
}
