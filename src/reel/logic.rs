//! Reel-in game logic: fish AI, bar physics, overlap scoring, win/loss.

use super::types::{ReelGame, ReelParams, ReelResult};
use crate::core::constants::{
    REEL_AUTO_SMOOTHING, REEL_BOUNCE_DAMPING, REEL_FRAMES_PER_SECOND, REEL_FRICTION,
    REEL_MAX_FRAME_SECS, REEL_OVERLAP_TOLERANCE, REEL_TARGET_HEIGHT, REEL_TRACK_HEIGHT,
    TARGET_GLIDE_FACTOR, TARGET_RETARGET_BASE_FRAMES, TARGET_RETARGET_SPREAD_FRAMES,
    TARGET_RETARGET_SPREAD_PER_DIFFICULTY, TARGET_SPEED_BASE, TARGET_SPEED_JITTER,
    TARGET_SPEED_PER_DIFFICULTY, TARGET_WOBBLE_BASE, TARGET_WOBBLE_FREQUENCY,
    TARGET_WOBBLE_PER_DIFFICULTY,
};
use rand::Rng;

/// Sets whether the reel input is held. Ignored once the game is over.
pub fn set_holding(game: &mut ReelGame, held: bool) {
    if game.is_over() {
        return;
    }
    game.holding = held;
}

/// Advances the reel-in by one frame of `dt_secs` seconds.
///
/// Frame deltas are clamped to 50ms so a stalled frame cannot teleport the
/// fish or drain the timer in one jump. Returns the result on the frame the
/// game ends, `None` otherwise (including every call after the end).
pub fn tick_reel(
    game: &mut ReelGame,
    dt_secs: f64,
    params: &ReelParams,
    rng: &mut impl Rng,
) -> Option<ReelResult> {
    if game.is_over() {
        return None;
    }

    let dt = if dt_secs > 0.0 {
        dt_secs.min(REEL_MAX_FRAME_SECS)
    } else {
        0.0
    };
    let frames = dt * REEL_FRAMES_PER_SECOND;

    game.elapsed += dt;
    game.time_remaining -= dt;

    update_target(game, params, frames, rng);
    update_player(game, params, frames);

    game.overlapping = params.auto || bar_overlaps_target(game, params.bar_height());

    if game.overlapping {
        game.progress += params.catch_rate() * dt;
    } else {
        game.progress -= params.decay_rate() * dt;
    }
    game.progress = game.progress.clamp(0.0, 100.0);

    let result = if game.progress >= 100.0 {
        Some(ReelResult::Landed)
    } else if game.progress <= 0.0 || game.time_remaining <= 0.0 {
        Some(ReelResult::Escaped)
    } else {
        None
    };
    game.game_result = result;
    result
}

/// Fish AI: periodically pick a new goal, glide toward it, wobble.
fn update_target(game: &mut ReelGame, params: &ReelParams, frames: f64, rng: &mut impl Rng) {
    let difficulty = params.difficulty as f64;
    let max_position = REEL_TRACK_HEIGHT - REEL_TARGET_HEIGHT;

    game.target_timer -= frames;
    if game.target_timer <= 0.0 {
        game.target_goal = uniform(rng, max_position);
        let spread =
            TARGET_RETARGET_SPREAD_FRAMES - difficulty * TARGET_RETARGET_SPREAD_PER_DIFFICULTY;
        game.target_timer = TARGET_RETARGET_BASE_FRAMES + uniform(rng, spread);
        game.target_speed = TARGET_SPEED_BASE
            + difficulty * TARGET_SPEED_PER_DIFFICULTY
            + uniform(rng, TARGET_SPEED_JITTER);
    }

    let distance = game.target_goal - game.target_position;
    let step = game.target_speed * frames * TARGET_GLIDE_FACTOR;
    if distance.abs() < step {
        game.target_position = game.target_goal;
    } else {
        game.target_position += distance.signum() * step;
    }

    let wobble_phase = game.elapsed * 1000.0 * TARGET_WOBBLE_FREQUENCY;
    let amplitude = TARGET_WOBBLE_BASE + difficulty * TARGET_WOBBLE_PER_DIFFICULTY;
    game.target_position += wobble_phase.sin() * amplitude * frames;

    game.target_position = game.target_position.clamp(0.0, max_position);
}

/// Bar movement: gravity and boost when playing, smoothing when automated.
fn update_player(game: &mut ReelGame, params: &ReelParams, frames: f64) {
    let bar_height = params.bar_height();

    if params.auto {
        let goal = game.target_position - bar_height / 2.0 + REEL_TARGET_HEIGHT / 2.0;
        let blend = 1.0 - (1.0 - REEL_AUTO_SMOOTHING).powf(frames);
        game.player_position += (goal - game.player_position) * blend;
        game.player_velocity = 0.0;
    } else {
        if game.holding {
            game.player_velocity += params.boost() * frames;
        } else {
            game.player_velocity -= params.gravity() * frames;
        }
        game.player_velocity *= REEL_FRICTION;
        game.player_position += game.player_velocity * frames;
    }

    let max_position = REEL_TRACK_HEIGHT - bar_height;
    if game.player_position < 0.0 {
        game.player_position = 0.0;
        if !params.auto {
            game.player_velocity = game.player_velocity.abs() * REEL_BOUNCE_DAMPING;
        }
    } else if game.player_position > max_position {
        game.player_position = max_position;
        if !params.auto {
            game.player_velocity = -game.player_velocity.abs() * REEL_BOUNCE_DAMPING;
        }
    }
}

/// Overlap test with a small tolerance band shaved off the fish zone.
pub fn bar_overlaps_target(game: &ReelGame, bar_height: f64) -> bool {
    let bar_top = game.player_position + bar_height;
    let target_top = game.target_position + REEL_TARGET_HEIGHT;
    game.player_position < target_top - REEL_OVERLAP_TOLERANCE
        && bar_top > game.target_position + REEL_OVERLAP_TOLERANCE
}

/// Uniform sample in `[0, max)`, or 0 for an empty range.
fn uniform(rng: &mut impl Rng, max: f64) -> f64 {
    if max > 0.0 {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}
