//! Player and item movement
//!
//! An active pointer overrides the keyboard: the player eases toward it by a
//! fixed fraction of the remaining distance each frame, which keeps noisy
//! touch input from jittering the box.

use super::state::GameState;
use crate::consts::*;

/// Advance the player one frame from the latest input state
pub fn move_player(state: &mut GameState) {
    let player = &mut state.player;
    if let Some(target) = state.input.pointer {
        // Ease toward the pointer, measured from the box center
        let center = player.pos + player.size * 0.5;
        player.pos += (target - center) * POINTER_EASE;
    } else {
        if state.input.left {
            player.pos.x -= PLAYER_SPEED;
        }
        if state.input.right {
            player.pos.x += PLAYER_SPEED;
        }
        if state.input.up {
            player.pos.y -= PLAYER_SPEED;
        }
        if state.input.down {
            player.pos.y += PLAYER_SPEED;
        }
    }

    player.pos.x = player.pos.x.min(state.bounds.x - player.size.x).max(0.0);
    player.pos.y = player.pos.y.min(state.bounds.y - player.size.y).max(0.0);
}

/// Items fall straight down at their own speed; no horizontal drift
pub fn move_items(state: &mut GameState) {
    for item in &mut state.items {
        item.pos.y += item.vy;
    }
}
