//! System organization using SystemSets
//!
//! # Execution Order
//!
//! Systems run in this order each frame:
//! 1. **Input** - board clicks and keyboard shortcuts become [`GameCommand`]s
//! 2. **Execution** - commands are applied to the running game
//! 3. **Visual** - pieces, animation, highlights and the result banner follow
//!
//! [`GameCommand`]: super::events::GameCommand

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Input handling (mouse, keyboard)
    Input,

    /// Apply move / undo / reset commands
    Execution,

    /// Visual updates
    Visual,
}
