//! Frame rendering
//!
//! Read-only view of the simulation state. Nothing in here mutates
//! gameplay; all state transitions, including restart, happen in
//! `sim::tick`.

use macroquad::prelude::*;

use crate::consts::*;
use crate::sim::{GamePhase, GameState};

const HUD_FONT_SIZE: f32 = 30.0;

/// Draw one complete frame of the current state
pub fn draw(state: &GameState) {
    clear_background(WHITE);

    // Ground strip along the bottom edge
    draw_rectangle(
        0.0,
        WINDOW_HEIGHT - GROUND_THICKNESS,
        WINDOW_WIDTH,
        GROUND_THICKNESS,
        BROWN,
    );

    for platform in &state.platforms {
        draw_rectangle(platform.x, platform.y, platform.w, platform.h, GREEN);
    }

    for enemy in &state.enemies {
        draw_rectangle(enemy.rect.x, enemy.rect.y, enemy.rect.w, enemy.rect.h, BLUE);
    }

    draw_rectangle(
        state.player.pos.x,
        state.player.pos.y,
        PLAYER_SIZE,
        PLAYER_SIZE,
        RED,
    );

    draw_hud(state);

    match state.phase {
        GamePhase::Playing => {}
        GamePhase::GameOver => draw_game_over(),
        GamePhase::Won => draw_won(state.score),
    }
}

fn draw_hud(state: &GameState) {
    draw_text(
        &format!("Score: {}", state.score),
        10.0,
        30.0,
        HUD_FONT_SIZE,
        BLACK,
    );
    draw_text(
        &format!("Lives: {}", state.lives),
        10.0,
        60.0,
        HUD_FONT_SIZE,
        BLACK,
    );

    // The jump hint is only live during play; terminal banners replace it
    if state.phase == GamePhase::Playing {
        let (hint, color) = if state.player.on_ground {
            ("CAN JUMP - Press SPACEBAR", GREEN)
        } else {
            ("IN AIR - Cannot jump", RED)
        };
        draw_text(hint, 10.0, 90.0, HUD_FONT_SIZE, color);
    }
}

/// Draw `text` centered horizontally with its baseline at `y`
fn draw_text_centered(text: &str, y: f32, color: Color) {
    let dims = measure_text(text, None, HUD_FONT_SIZE as u16, 1.0);
    draw_text(
        text,
        (WINDOW_WIDTH - dims.width) / 2.0,
        y,
        HUD_FONT_SIZE,
        color,
    );
}

fn draw_game_over() {
    draw_text_centered(
        "GAME OVER! Press R to restart",
        WINDOW_HEIGHT / 2.0,
        BLACK,
    );
}

fn draw_won(score: u32) {
    draw_text_centered(
        "YOU WIN! All enemies defeated!",
        WINDOW_HEIGHT / 2.0 - 40.0,
        GREEN,
    );
    draw_text_centered(
        &format!("Final Score: {score}"),
        WINDOW_HEIGHT / 2.0,
        BLACK,
    );
    draw_text_centered(
        "Press R to play again",
        WINDOW_HEIGHT / 2.0 + 40.0,
        BLACK,
    );
}
