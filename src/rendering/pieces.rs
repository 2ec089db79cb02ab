//! Piece sprites
//!
//! Pieces are rebuilt from the board every time [`ActiveGame`] changes; with
//! at most 32 entities this is simpler than diffing. When the change was a
//! move queued in [`MoveAnimation`], the moved piece is spawned on its origin
//! square with a [`PieceAnimation`], and a [`CaptureGhost`] of the taken
//! piece stays on the destination until the mover arrives.
//!
//! # Styles
//!
//! - [`PieceStyle::Discs`] - a colored disc with the piece letter on top
//! - [`PieceStyle::Images`] - one image per piece code (`wK.png`, `bp.png`, ...)

use std::collections::HashMap;

use bevy::prelude::*;
use chess_engine::{Color as PieceColor, Move, Piece, PieceKind, Square};

use super::animation::PieceAnimation;
use super::board::BoardLayout;
use crate::core::{GameSettings, PieceStyle};
use crate::game::resources::{ActiveGame, MoveAnimation};

/// Z layer of pieces at rest
pub const PIECE_Z: f32 = 2.0;
/// Z layer of the piece currently sliding, above everything else on the board
pub const MOVING_PIECE_Z: f32 = 3.0;

/// Fraction of a square covered by a disc
const DISC_SCALE: f32 = 0.4;
/// Fraction of a square used for the piece letter
const LETTER_SCALE: f32 = 0.45;

/// A piece entity standing on (or heading to) `square`
#[derive(Component, Debug, Clone, Copy)]
pub struct PieceSprite {
    pub square: Square,
    pub piece: Piece,
}

/// Captured piece kept visible while the capturing move animates
#[derive(Component, Debug, Clone, Copy)]
pub struct CaptureGhost;

/// Handles shared by every piece of one style
#[derive(Resource, Debug, Clone)]
pub enum PieceAssets {
    Discs {
        mesh: Handle<Mesh>,
        white: Handle<ColorMaterial>,
        black: Handle<ColorMaterial>,
        font_size: f32,
    },
    Images {
        images: HashMap<Piece, Handle<Image>>,
        size: f32,
    },
}

/// Build the piece handles for the configured style
pub fn load_piece_assets(
    mut commands: Commands,
    settings: Res<GameSettings>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let square = settings.square_size as f32;
    let assets = match &settings.piece_style {
        PieceStyle::Discs => PieceAssets::Discs {
            mesh: meshes.add(Circle::new(square * DISC_SCALE)),
            white: materials.add(ColorMaterial::from(Color::srgb(0.96, 0.94, 0.88))),
            black: materials.add(ColorMaterial::from(Color::srgb(0.15, 0.15, 0.17))),
            font_size: square * LETTER_SCALE,
        },
        PieceStyle::Images { dir } => {
            let images = [PieceColor::White, PieceColor::Black]
                .into_iter()
                .flat_map(|color| PieceKind::ALL.map(|kind| Piece::new(color, kind)))
                .map(|piece| {
                    let path = dir.join(format!("{}.png", piece.code()));
                    (piece, asset_server.load(path))
                })
                .collect::<HashMap<_, _>>();
            info!("[PIECES] Loading {} piece images from {}", images.len(), dir.display());
            PieceAssets::Images {
                images,
                size: square,
            }
        }
    };
    commands.insert_resource(assets);
}

impl PieceAssets {
    /// Spawn one piece at `position`
    fn spawn(&self, commands: &mut Commands, piece: Piece, square: Square, position: Vec3) -> Entity {
        let transform = Transform::from_translation(position);
        let marker = PieceSprite { square, piece };
        let name = Name::new(format!("{} {}", piece.code(), square));

        match self {
            PieceAssets::Discs {
                mesh,
                white,
                black,
                font_size,
            } => {
                let (material, letter_color) = match piece.color {
                    PieceColor::White => (white.clone(), Color::BLACK),
                    PieceColor::Black => (black.clone(), Color::WHITE),
                };
                commands
                    .spawn((
                        Mesh2d(mesh.clone()),
                        MeshMaterial2d(material),
                        transform,
                        marker,
                        name,
                    ))
                    .with_children(|parent| {
                        parent.spawn((
                            Text2d::new(piece.kind.letter().to_string()),
                            TextFont {
                                font_size: *font_size,
                                ..default()
                            },
                            TextColor(letter_color),
                            Transform::from_xyz(0.0, 0.0, 0.1),
                        ));
                    })
                    .id()
            }
            PieceAssets::Images { images, size } => {
                let sprite = Sprite {
                    image: images.get(&piece).cloned().unwrap_or_default(),
                    custom_size: Some(Vec2::splat(*size)),
                    ..default()
                };
                commands.spawn((sprite, transform, marker, name)).id()
            }
        }
    }
}

/// Rebuild the piece entities whenever the game changes
pub fn sync_piece_sprites(
    mut commands: Commands,
    game: Res<ActiveGame>,
    layout: Res<BoardLayout>,
    assets: Res<PieceAssets>,
    settings: Res<GameSettings>,
    mut animation: ResMut<MoveAnimation>,
    existing: Query<Entity, Or<(With<PieceSprite>, With<CaptureGhost>)>>,
) {
    if !game.is_changed() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let animated = animation
        .take_pending()
        .filter(|mv| game.state().last_move() == Some(mv));

    let board = &game.state().board;
    for (square, piece) in board.pieces() {
        match animated {
            Some(mv) if mv.to == square => {
                spawn_moving_piece(&mut commands, &assets, &layout, &settings, piece, mv);
            }
            _ => {
                let position = layout.square_center(square).extend(PIECE_Z);
                assets.spawn(&mut commands, piece, square, position);
            }
        }
    }

    if let Some(mv) = animated {
        if let Some(captured) = mv.piece_captured {
            let position = layout.square_center(mv.to).extend(PIECE_Z);
            let ghost = assets.spawn(&mut commands, captured, mv.to, position);
            commands
                .entity(ghost)
                .remove::<PieceSprite>()
                .insert(CaptureGhost);
        }
        animation.set_running(true);
    }

    debug!("[PIECES] Synced {} pieces", board.pieces().count());
}

fn spawn_moving_piece(
    commands: &mut Commands,
    assets: &PieceAssets,
    layout: &BoardLayout,
    settings: &GameSettings,
    piece: Piece,
    mv: Move,
) {
    let start = layout.square_center(mv.from);
    let end = layout.square_center(mv.to);
    let seconds = settings.animation_seconds(mv.manhattan_distance());
    let entity = assets.spawn(commands, piece, mv.to, start.extend(MOVING_PIECE_Z));
    commands
        .entity(entity)
        .insert(PieceAnimation::new(start, end, seconds));
}
