//! Pounce entry point
//!
//! Window setup and the frame loop. Input is sampled once per display
//! frame and fed to the fixed 60 Hz simulation through an accumulator,
//! so gameplay speed does not depend on the display refresh rate.

use macroquad::prelude::*;

use pounce::consts::*;
use pounce::render;
use pounce::sim::{GameState, TickInput, tick};

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Pounce starting");

    let mut state = GameState::new();
    let mut input = TickInput::default();
    let mut accumulator: f32 = 0.0;

    prevent_quit();
    loop {
        if is_quit_requested() {
            log::info!("quit requested, final score {}", state.score);
            break;
        }

        // Held keys are resampled every frame; the jump edge latches
        // until a tick consumes it, so a press between ticks is not lost
        input.left = is_key_down(KeyCode::Left);
        input.right = is_key_down(KeyCode::Right);
        input.restart = is_key_down(KeyCode::R);
        if is_key_pressed(KeyCode::Space) {
            input.jump = true;
        }

        // Cap dt so a stall does not burst a pile of ticks at once
        accumulator += get_frame_time().min(0.25);

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input);
            accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            input.jump = false;
        }
        if substeps == MAX_SUBSTEPS {
            // Too far behind; drop the backlog instead of spiraling
            accumulator = 0.0;
        }

        render::draw(&state);
        next_frame().await;
    }
}
