//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation by exactly one frame.

use serde::{Deserialize, Serialize};

use super::collision::{WallContact, paddle_contact, wall_contact};
use super::state::GameState;
use crate::consts::BALL_SPEED;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Up arrow held
    pub up: bool,
    /// Down arrow held
    pub down: bool,
}

/// What happened during a tick. Purely informational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub wall: Option<WallContact>,
    pub paddle_hit: bool,
    pub new_high_score: bool,
}

/// Advance the game state by one frame.
///
/// Order is fixed: paddle input, ball movement, wall chain, paddle check.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();
    state.frame = state.frame.wrapping_add(1);

    state.paddle.move_on_input(input);
    state.ball.advance();

    events.wall = resolve_walls(state);
    if let Some(contact) = events.wall {
        log::debug!(
            "frame {}: wall {} at {:?}",
            state.frame,
            contact.as_str(),
            state.ball.rect.origin()
        );
    }

    if paddle_contact(&state.ball.rect, &state.paddle.rect) {
        state.ball.vel.x = state.ball.vel.x.wrapping_neg();
        events.paddle_hit = true;
        events.new_high_score = state.record_hit();
        log::debug!("frame {}: paddle hit, score {}", state.frame, state.score);
        if events.new_high_score {
            log::info!("New high score: {}", state.high_score);
        }
    }

    events
}

/// Apply the first matching wall rule, if any
fn resolve_walls(state: &mut GameState) -> Option<WallContact> {
    let contact = wall_contact(&state.ball.rect, state.bounds)?;
    match contact {
        WallContact::RightExit => {
            log::debug!("Rally over at score {}", state.score);
            state.reset_rally();
        }
        WallContact::Left => state.ball.vel.x = BALL_SPEED,
        WallContact::Top => state.ball.vel.y = BALL_SPEED,
        WallContact::Bottom => state.ball.vel.y = -BALL_SPEED,
    }
    Some(contact)
}

/// Run `tick` once per input, returning the final frame's events
pub fn run<'a, I>(state: &mut GameState, inputs: I) -> TickEvents
where
    I: IntoIterator<Item = &'a TickInput>,
{
    inputs
        .into_iter()
        .fold(TickEvents::default(), |_, input| tick(state, input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Ball, Paddle, Rect};
    use glam::IVec2;
    use proptest::prelude::*;

    const IDLE: TickInput = TickInput { up: false, down: false };

    fn state_with_ball(x: i32, y: i32, vx: i32, vy: i32) -> GameState {
        GameState::with_entities(
            Paddle::default(),
            Ball::new(Rect::new(x, y, 15, 15), IVec2::new(vx, vy)),
        )
    }

    #[test]
    fn test_first_frame_from_start() {
        let mut state = GameState::new();
        let events = tick(&mut state, &IDLE);
        assert_eq!(state.ball.rect.origin(), IVec2::new(3, 3));
        assert_eq!(state.ball.vel, IVec2::splat(BALL_SPEED));
        assert_eq!(events, TickEvents::default());
        assert_eq!(state.score, 0);
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_right_exit_resets_position_and_score() {
        let mut state = state_with_ball(641, 100, 3, -3);
        state.score = 7;
        state.high_score = 9;

        let events = tick(&mut state, &IDLE);
        assert_eq!(events.wall, Some(WallContact::RightExit));
        assert_eq!(state.ball.rect.origin(), IVec2::ZERO);
        assert_eq!(state.ball.vel, IVec2::new(3, -3));
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 9);
    }

    #[test]
    fn test_right_exit_wins_over_top() {
        let mut state = state_with_ball(700, -10, 3, -3);
        let events = tick(&mut state, &IDLE);
        assert_eq!(events.wall, Some(WallContact::RightExit));
        // Top rule did not fire
        assert_eq!(state.ball.vel.y, -3);
    }

    #[test]
    fn test_top_contact_only_sets_velocity() {
        let mut state = state_with_ball(100, 2, 3, -3);
        let events = tick(&mut state, &IDLE);
        assert_eq!(events.wall, Some(WallContact::Top));
        assert_eq!(state.ball.rect.origin(), IVec2::new(103, -1));
        assert_eq!(state.ball.vel, IVec2::new(3, 3));

        // Already at y = -1: advance then force downward
        let mut state = state_with_ball(100, -1, 3, -3);
        tick(&mut state, &IDLE);
        assert_eq!(state.ball.vel.y, BALL_SPEED);
        assert_eq!(state.ball.vel.x, 3);
        assert_eq!(state.ball.rect.origin(), IVec2::new(103, -4));
    }

    #[test]
    fn test_left_contact_forces_rightward() {
        let mut state = state_with_ball(2, 100, -3, 3);
        tick(&mut state, &IDLE);
        assert_eq!(state.ball.vel.x, BALL_SPEED);

        // Idempotent, not a toggle
        let mut state = state_with_ball(-10, 100, 3, 3);
        tick(&mut state, &IDLE);
        assert_eq!(state.ball.vel.x, BALL_SPEED);
    }

    #[test]
    fn test_bottom_contact_forces_upward() {
        let mut state = state_with_ball(100, 478, 3, 3);
        let events = tick(&mut state, &IDLE);
        assert_eq!(events.wall, Some(WallContact::Bottom));
        assert_eq!(state.ball.vel, IVec2::new(3, -3));
    }

    #[test]
    fn test_paddle_hit_refires_while_pinned() {
        // Zero velocity keeps the corner inside the paddle region
        let mut state = state_with_ball(605, 250, 0, 0);
        let mut hits = 0;
        for _ in 0..3 {
            if tick(&mut state, &IDLE).paddle_hit {
                hits += 1;
            }
        }
        assert_eq!(hits, 3);
        assert_eq!(state.score, 3);
        assert_eq!(state.high_score, 3);
    }

    #[test]
    fn test_paddle_hit_flips_vx_each_frame() {
        // Ball oscillates between x=603 and x=606, staying past the leading edge
        let mut state = state_with_ball(603, 250, 3, 0);
        let original_vx = state.ball.vel.x;
        for _ in 0..3 {
            assert!(tick(&mut state, &IDLE).paddle_hit);
        }
        assert_eq!(state.score, 3);
        assert_eq!(state.ball.vel.x, -original_vx);
    }

    #[test]
    fn test_paddle_check_runs_after_wall_rule() {
        // Bottom contact and paddle contact in the same frame
        let paddle = Paddle::new(Rect::new(600, 400, 15, 100));
        let ball = Ball::new(Rect::new(610, 477, 15, 15), IVec2::new(3, 3));
        let mut state = GameState::with_entities(paddle, ball);

        let events = tick(&mut state, &IDLE);
        assert_eq!(events.wall, Some(WallContact::Bottom));
        assert!(events.paddle_hit);
        assert_eq!(state.ball.vel, IVec2::new(-3, -3));
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_paddle_moves_before_collision() {
        // Ball corner is one step below the paddle; moving down brings it in range
        let paddle = Paddle::new(Rect::new(600, 200, 15, 100));
        let ball = Ball::new(Rect::new(605, 304, 15, 15), IVec2::new(0, 0));
        let mut state = GameState::with_entities(paddle, ball);

        let events = tick(&mut state, &TickInput { up: false, down: true });
        assert_eq!(state.paddle.rect.y, 206);
        assert!(events.paddle_hit);
    }

    #[test]
    fn test_run_sequence() {
        let mut state = GameState::new();
        let inputs = vec![IDLE; 10];
        run(&mut state, &inputs);
        assert_eq!(state.frame, 10);
        assert_eq!(state.ball.rect.origin(), IVec2::new(30, 30));
    }

    #[test]
    fn test_determinism() {
        let inputs: Vec<TickInput> = (0..500)
            .map(|i| TickInput {
                up: i % 7 == 0,
                down: i % 3 == 0,
            })
            .collect();

        let mut state1 = GameState::new();
        let mut state2 = GameState::new();
        run(&mut state1, &inputs);
        run(&mut state2, &inputs);
        assert_eq!(state1, state2);
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>()).prop_map(|(up, down)| TickInput { up, down })
    }

    proptest! {
        #[test]
        fn prop_high_score_never_decreases(
            x in -50i32..700,
            y in -50i32..530,
            vx in -6i32..=6,
            vy in -6i32..=6,
            inputs in proptest::collection::vec(arb_input(), 1..200),
        ) {
            let mut state = state_with_ball(x, y, vx, vy);
            let mut last = state.high_score;
            for input in &inputs {
                tick(&mut state, input);
                prop_assert!(state.high_score >= last);
                prop_assert!(state.high_score >= state.score);
                last = state.high_score;
            }
        }

        #[test]
        fn prop_plain_advance_when_no_rule_fires(
            x in 1i32..590,
            y in 1i32..470,
            vx in 0i32..=6,
            vy in -6i32..=6,
        ) {
            // Keep the corner clear of every wall and of the paddle column
            prop_assume!(x + vx > 0 && x + vx < 600);
            prop_assume!(y + vy > 0 && y + vy < 480);

            let mut state = state_with_ball(x, y, vx, vy);
            let events = tick(&mut state, &IDLE);
            prop_assert_eq!(events, TickEvents::default());
            prop_assert_eq!(state.ball.rect.origin(), IVec2::new(x + vx, y + vy));
            prop_assert_eq!(state.ball.vel, IVec2::new(vx, vy));
        }

        #[test]
        fn prop_reset_clears_score(
            score in 0u32..10_000,
            high in 0u32..10_000,
            y in -100i32..600,
            vx in 1i32..=6,
            vy in -6i32..=6,
        ) {
            let high = high.max(score);
            let mut state = state_with_ball(641, y, vx, vy);
            state.score = score;
            state.high_score = high;

            tick(&mut state, &IDLE);
            prop_assert_eq!(state.score, 0);
            prop_assert_eq!(state.high_score, high);
            prop_assert_eq!(state.ball.rect.origin(), IVec2::ZERO);
            prop_assert_eq!(state.ball.vel, IVec2::new(vx, vy));
        }
    }
}
