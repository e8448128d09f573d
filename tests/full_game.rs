use arena_pong::Settings;
use arena_pong::platform::{FrameClock, KeyState};
use arena_pong::sim::{GameEvent, GamePhase, GameState, Shape, TickInput, tick};
use glam::Vec2;

const FRAME_MS: f64 = 1000.0 / 60.0;

/// Run a game with both paddles pinned to the top until it ends
fn play_out(settings: Settings) -> (GameState, Vec<GameEvent>) {
    let mut state = GameState::new(settings).unwrap();
    let mut clock = FrameClock::new();
    let mut seen = Vec::new();

    tick(
        &mut state,
        &TickInput {
            serve: true,
            ..Default::default()
        },
        0.0,
    );
    assert_eq!(state.phase, GamePhase::Playing);

    for frame in 0..20_000u32 {
        let Some(dt) = clock.advance(frame as f64 * FRAME_MS) else {
            continue;
        };
        let input = TickInput {
            pointer_y: Some(0.0),
            ..Default::default()
        };
        tick(&mut state, &input, dt);
        seen.extend(state.events.iter().copied());
        if state.is_over() {
            break;
        }
    }
    (state, seen)
}

#[test]
fn game_runs_to_over() {
    let (state, events) = play_out(Settings::default());

    assert_eq!(state.phase, GamePhase::Over);
    assert_eq!(state.lives, 0);
    assert!(state.score > 0.0);

    let lost: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, GameEvent::LifeLost { .. }))
        .collect();
    assert_eq!(lost, vec![&GameEvent::LifeLost { remaining: 1 }]);
    assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));
    assert!(events.contains(&GameEvent::WallBounce));

    let snapshot = state.snapshot();
    let message = snapshot.game_over_message.unwrap();
    assert_eq!(
        message,
        format!("Game over! Your high score: {}", state.score.floor())
    );
}

#[test]
fn more_lives_last_longer() {
    let (short, _) = play_out(Settings::default());
    let (long, events) = play_out(Settings {
        lives: 4,
        ..Default::default()
    });

    assert!(long.score > short.score);
    let lost = events
        .iter()
        .filter(|e| matches!(e, GameEvent::LifeLost { .. }))
        .count();
    assert_eq!(lost, 3);
}

#[test]
fn paddles_mirror_pointer() {
    let mut state = GameState::new(Settings::default()).unwrap();
    state.play();

    let mut keys = KeyState::default();
    let mut input = TickInput {
        pointer_y: Some(250.0),
        ..Default::default()
    };
    keys.apply(&mut input);
    tick(&mut state, &input, 1.0 / 60.0);
    assert_eq!(state.paddles[0].pos().y, 250.0);
    assert_eq!(state.paddles[1].pos().y, 250.0);

    keys.key_down("ArrowDown");
    let mut input = TickInput::default();
    keys.apply(&mut input);
    tick(&mut state, &input, 1.0 / 60.0);
    assert_eq!(state.paddles[0].pos().y, 255.0);
    assert_eq!(state.paddles[1].pos().y, 255.0);
}

#[test]
fn snapshot_json_for_renderer() {
    let mut state = GameState::new(Settings::default()).unwrap();
    state.play();
    state.update(0.5);

    let json = serde_json::to_value(state.snapshot()).unwrap();
    assert_eq!(json["phase"], "Playing");
    assert_eq!(json["display_score"], 5);
    assert_eq!(json["lives"], 2);
    assert_eq!(json["ball"]["pos"][0], 500.0);
    assert_eq!(json["ball"]["pos"][1], 400.0);
    assert_eq!(json["arena"]["width"], 800.0);
    assert!(json["game_over_message"].is_null());
}

/// One short frame with the ball's left edge 25px right of the left paddle
fn left_paddle_reach(json: &str) -> GameState {
    let settings = Settings::from_json(json).unwrap();
    let mut state = GameState::new(settings).unwrap();
    state.play();
    for paddle in &mut state.paddles {
        let x = paddle.pos().x;
        paddle.place(Vec2::new(x, 300.0));
    }
    state.ball.body.pos = Vec2::new(100.0, 300.0);
    state.ball.vel = Vec2::new(-200.0, 0.0);
    assert_eq!(state.ball.left(), 85.0);

    state.update(0.001);
    state
}

#[test]
fn half_width_margin_is_configurable() {
    let full = left_paddle_reach(r#"{ "contact_margin": 1.0 }"#);
    assert_eq!(full.events, vec![GameEvent::PaddleHit { paddle: 0 }]);
    assert_eq!(full.ball.vel, Vec2::new(200.0, 0.0));

    let half = left_paddle_reach(r#"{ "contact_margin": 0.5 }"#);
    assert_eq!(half.settings.contact_margin, 0.5);
    assert!(half.events.is_empty());
    assert_eq!(half.ball.vel, Vec2::new(-200.0, 0.0));
}
