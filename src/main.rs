//! Breakout entry point
//!
//! Headless native driver: the autopilot plays one game through the same key
//! events a windowed host would send, then quits.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use breakout_core::input::autopilot;
use breakout_core::{Game, Key, Settings};

/// Give up on a demo run after this many ticks
const MAX_DEMO_TICKS: u32 = 20_000;

fn main() {
    env_logger::init();
    log::info!("Breakout (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(Path::new(&path)) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });

    let mut game = match Game::new(settings, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid settings: {e}");
            std::process::exit(1);
        }
    };

    let mut held_left = false;
    let mut held_right = false;
    let mut snapshot = game.snapshot();

    for _ in 0..MAX_DEMO_TICKS {
        let want = autopilot(game.state());
        press(&mut game, Key::Left, &mut held_left, want.move_left);
        press(&mut game, Key::Right, &mut held_right, want.move_right);

        snapshot = game.on_tick();
        if snapshot.game_over {
            break;
        }
    }

    match serde_json::to_string(&snapshot) {
        Ok(json) => log::debug!("Final snapshot: {json}"),
        Err(e) => log::warn!("Could not serialize snapshot: {e}"),
    }
    println!("{}", snapshot.status);

    game.on_key_up(Key::Escape);
    log::info!("Exiting after {} ticks", game.state().time_ticks);
}

/// Send a key event only when the held state changes
fn press(game: &mut Game, key: Key, held: &mut bool, want: bool) {
    if want == *held {
        return;
    }
    if want {
        game.on_key_down(key);
    } else {
        game.on_key_up(key);
    }
    *held = want;
}
