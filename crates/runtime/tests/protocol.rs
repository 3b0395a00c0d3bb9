//! End-to-end tests for the turn handshake driven through [`RuntimeHandle`].

use std::collections::VecDeque;
use std::time::Duration;

use game_core::{Bee, BeeKind, EngineError, GameState, Phase, Player, RngOracle, ScriptedRng};
use runtime::{EventKind, Runtime, RuntimeError, TurnProtocol};

fn scripted_runtime(state: GameState, rng: ScriptedRng) -> Runtime {
    Runtime::builder()
        .initial_state(state)
        .rng(rng)
        .build()
        .expect("runtime should build")
}

#[tokio::test]
async fn killing_the_queen_ends_the_game_on_the_player_phase() {
    let state = GameState::new(
        Player::with_miss_chance(0),
        vec![Bee::new(BeeKind::Queen, 1, 100)],
    );
    let runtime = scripted_runtime(state, ScriptedRng::new().with_rolls([0]));
    let handle = runtime.handle();

    let event = handle.submit_action().await.expect("player phase");
    assert_eq!(event.kind, EventKind::GameOver);
    assert_eq!(event.message, "You killed the Queen bee.");
    assert_eq!(event.state.round, 1);
    assert_eq!(event.state.hits, 1);
    assert_eq!(event.state.stings, 0);

    let err = handle.submit_action().await.unwrap_err();
    assert!(matches!(err, RuntimeError::GameFinished));
    let err = handle.await_engine_turn().await.unwrap_err();
    assert!(matches!(err, RuntimeError::GameFinished));
}

#[tokio::test]
async fn lethal_sting_ends_the_game_on_the_hive_phase() {
    let state = GameState::new(
        Player {
            health: 1,
            miss_chance: 100,
        },
        vec![Bee::new(BeeKind::Drone, 60, 0)],
    );
    let runtime = scripted_runtime(state, ScriptedRng::new().with_rolls([0, 1]));
    let handle = runtime.handle();

    let player = handle.submit_action().await.expect("player phase");
    assert_eq!(player.kind, EventKind::PlayerAttack);
    assert_eq!(
        player.message,
        "Miss! You just missed the hive, better luck next time!"
    );

    let hive = handle.await_engine_turn().await.expect("hive phase");
    assert_eq!(hive.kind, EventKind::GameOver);
    assert_eq!(hive.message, "A drone bee just killed you!");
    assert_eq!(hive.state.player.health, 0);
    assert_eq!(hive.state.stings, 1);
    assert_eq!(hive.state.hits, 0);
}

#[tokio::test]
async fn killed_worker_leaves_the_hive() {
    let state = GameState::new(
        Player::with_miss_chance(10),
        vec![
            Bee::new(BeeKind::Queen, 100, 10),
            Bee::new(BeeKind::Worker, 25, 15),
        ],
    );
    let rng = ScriptedRng::new().with_picks([1, 0]).with_rolls([50, 100]);
    let runtime = scripted_runtime(state, rng);
    let handle = runtime.handle();

    let player = handle.submit_action().await.expect("player phase");
    assert_eq!(player.kind, EventKind::PlayerAttack);
    assert_eq!(player.message, "You killed a worker bee.");
    assert_eq!(player.state.hive.len(), 1);
    assert_eq!(player.state.hits, 1);
    assert_eq!(player.state.count(BeeKind::Worker), 0);

    let hive = handle.await_engine_turn().await.expect("hive phase");
    assert_eq!(hive.kind, EventKind::HiveAttack);
    assert_eq!(
        hive.message,
        "Sting! You just got stun by the Queen bee. You have 90 HP left."
    );
    assert_eq!(hive.state.round, 1);

    let next = handle.submit_action().await.expect("second round");
    assert_eq!(next.state.round, 2);
}

#[tokio::test]
async fn event_snapshots_are_detached_from_the_live_state() {
    let state = GameState::new(
        Player::with_miss_chance(0),
        vec![
            Bee::new(BeeKind::Queen, 100, 100),
            Bee::new(BeeKind::Worker, 75, 100),
        ],
    );
    let rng = ScriptedRng::new().with_picks([1]).with_fallback_roll(0);
    let runtime = scripted_runtime(state, rng);
    let handle = runtime.handle();

    let first = handle.submit_action().await.expect("player phase");
    let worker_health = first.state.hive[1].health;
    assert_eq!(worker_health, 50);

    handle.await_engine_turn().await.expect("hive phase");
    let second = handle.submit_action().await.expect("second player phase");

    assert_eq!(first.state.hive[1].health, worker_health);
    assert_eq!(first.state.round, 1);
    assert_eq!(second.state.round, 2);
    assert_eq!(second.state.hits, 2);
}

#[tokio::test]
async fn awaiting_the_hive_before_acting_is_rejected() {
    let runtime = scripted_runtime(
        GameState::new(
            Player::with_miss_chance(100),
            vec![Bee::new(BeeKind::Queen, 100, 100)],
        ),
        ScriptedRng::new().with_fallback_roll(0),
    );
    let handle = runtime.handle();

    let err = handle.await_engine_turn().await.unwrap_err();
    assert!(matches!(err, RuntimeError::OutOfTurn { .. }));

    // The rejected call left the session untouched.
    let event = handle.submit_action().await.expect("player phase");
    assert_eq!(event.state.round, 1);
    assert_eq!(event.state.hits, 0);

    let err = handle.submit_action().await.unwrap_err();
    assert!(matches!(err, RuntimeError::OutOfTurn { .. }));
}

struct SlowRng {
    delay: Duration,
}

impl RngOracle for SlowRng {
    fn pick_index(&mut self, _len: usize) -> usize {
        std::thread::sleep(self.delay);
        0
    }

    fn roll_percent(&mut self) -> u32 {
        100
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn slow_worker_surfaces_a_timeout() {
    let runtime = Runtime::builder()
        .initial_state(GameState::new(
            Player::with_miss_chance(100),
            vec![Bee::new(BeeKind::Queen, 100, 100)],
        ))
        .rng(SlowRng {
            delay: Duration::from_millis(300),
        })
        .reply_timeout(Some(Duration::from_millis(20)))
        .build()
        .expect("runtime should build");

    let err = runtime.handle().submit_action().await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Timeout {
            request: runtime::Request::SubmitAction,
            ..
        }
    ));

    runtime.abort().await.expect("abort");
}

/// Blocks the worker for a scripted delay on each pick.
struct StallingRng {
    delays: VecDeque<Duration>,
}

impl RngOracle for StallingRng {
    fn pick_index(&mut self, _len: usize) -> usize {
        if let Some(delay) = self.delays.pop_front() {
            std::thread::sleep(delay);
        }
        0
    }

    fn roll_percent(&mut self) -> u32 {
        50
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn request_abandoned_while_queued_is_skipped() {
    let runtime = Runtime::builder()
        .initial_state(GameState::new(
            Player::with_miss_chance(0),
            vec![Bee::new(BeeKind::Queen, 100, 100)],
        ))
        .rng(StallingRng {
            delays: VecDeque::from([Duration::ZERO, Duration::from_millis(300)]),
        })
        .reply_timeout(Some(Duration::from_millis(100)))
        .build()
        .expect("runtime should build");
    let mut events = runtime.subscribe_events();
    let handle = runtime.handle();

    let player = handle.submit_action().await.expect("player phase");
    assert_eq!(player.kind, EventKind::PlayerAttack);

    // The worker is still stuck resolving the hive phase.
    let err = handle.await_engine_turn().await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Timeout {
            request: runtime::Request::AwaitEngineTurn,
            ..
        }
    ));

    tokio::time::sleep(Duration::from_millis(300)).await;

    let hive = handle.await_engine_turn().await.expect("retried hive phase");
    assert_eq!(hive.kind, EventKind::HiveAttack);
    assert_eq!(
        hive.message,
        "Buzz! That was close! The Queen bee just missed you!"
    );

    let next = handle.submit_action().await.expect("next round");
    assert_eq!(next.state.round, 2);

    let mut observed = Vec::new();
    while let Ok(event) = events.try_recv() {
        observed.push(event);
    }
    // The round 2 hive phase may already have been published.
    assert!(observed.len() >= 3);
    assert_eq!(observed[..3], [player, hive, next]);

    runtime.abort().await.expect("abort");
}

#[tokio::test]
async fn calls_after_abort_fail_fast() {
    let runtime = scripted_runtime(
        GameState::new(
            Player::with_miss_chance(0),
            vec![Bee::new(BeeKind::Queen, 100, 0)],
        ),
        ScriptedRng::new(),
    );
    let handle = runtime.handle();

    runtime.abort().await.expect("abort");

    let err = handle.submit_action().await.unwrap_err();
    assert!(matches!(err, RuntimeError::CommandChannelClosed));
}

#[tokio::test]
async fn shutdown_completes_once_handles_are_dropped() {
    let runtime = scripted_runtime(
        GameState::new(
            Player::with_miss_chance(0),
            vec![Bee::new(BeeKind::Queen, 100, 0)],
        ),
        ScriptedRng::new(),
    );

    {
        let handle = runtime.handle();
        handle.submit_action().await.expect("player phase");
    }

    tokio::time::timeout(Duration::from_secs(1), runtime.shutdown())
        .await
        .expect("shutdown should not hang")
        .expect("worker joined");
}

#[tokio::test]
async fn observers_see_every_event_in_order() {
    let runtime = scripted_runtime(
        GameState::new(
            Player::with_miss_chance(0),
            vec![
                Bee::new(BeeKind::Queen, 10, 100),
                Bee::new(BeeKind::Drone, 60, 100),
            ],
        ),
        ScriptedRng::new().with_picks([1, 0, 0]).with_fallback_roll(0),
    );
    let mut events = runtime.subscribe_events();
    let handle = runtime.handle();

    let rounds = handle.play_round().await.expect("first round");
    let second = handle.play_round().await.expect("second round");
    assert!(second.is_game_over());

    let mut observed = Vec::new();
    while let Ok(event) = events.try_recv() {
        observed.push(event);
    }

    let driven: Vec<_> = rounds.iter().chain(second.iter()).cloned().collect();
    assert_eq!(observed, driven);
    assert_eq!(observed.last().map(|e| e.kind), Some(EventKind::GameOver));
}

#[tokio::test]
async fn seeded_standard_game_runs_to_completion() {
    let runtime = Runtime::builder()
        .config(runtime::RuntimeConfig {
            seed: Some(2024),
            ..Default::default()
        })
        .build()
        .expect("runtime should build");
    let handle = runtime.handle();

    let mut last_round = 0;
    let mut last_hits = 0;
    let mut last_stings = 0;
    let last = loop {
        let events = handle.play_round().await.expect("round");
        for event in events.iter() {
            assert!(event.state.round >= last_round);
            assert!(event.state.hits >= last_hits);
            assert!(event.state.stings >= last_stings);
            assert!(event.state.hive.len() <= 31);
            last_round = event.state.round;
            last_hits = event.state.hits;
            last_stings = event.state.stings;
        }
        if events.is_game_over() {
            break events.last().clone();
        }
        assert!(last_round < 10_000, "game should end");
    };

    assert_eq!(last.kind, EventKind::GameOver);
    let queen_dead = last.state.queen().is_some_and(|queen| queen.is_dead());
    assert!(queen_dead || !last.state.player.is_alive());

    let err = handle.submit_action().await.unwrap_err();
    assert!(matches!(err, RuntimeError::GameFinished));
}

#[tokio::test]
async fn empty_hive_is_rejected_at_build_time() {
    let result = Runtime::builder()
        .initial_state(GameState::new(Player::with_miss_chance(10), Vec::new()))
        .rng(ScriptedRng::new())
        .build();

    assert!(matches!(result, Err(RuntimeError::EmptyHive)));
}

#[tokio::test]
async fn emptied_hive_fails_the_hive_phase_and_finishes_the_game() {
    let runtime = scripted_runtime(
        GameState::new(
            Player::with_miss_chance(0),
            vec![Bee::new(BeeKind::Worker, 25, 15)],
        ),
        ScriptedRng::new().with_fallback_roll(0),
    );
    let handle = runtime.handle();

    let player = handle.submit_action().await.expect("player phase");
    assert_eq!(player.kind, EventKind::PlayerAttack);
    assert_eq!(player.message, "You killed a worker bee.");
    assert!(player.state.hive.is_empty());

    let err = handle.await_engine_turn().await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Engine(EngineError::EmptyHive {
            phase: Phase::Hive,
            round: 1
        })
    ));

    let err = handle.submit_action().await.unwrap_err();
    assert!(matches!(err, RuntimeError::GameFinished));
    let err = handle.await_engine_turn().await.unwrap_err();
    assert!(matches!(err, RuntimeError::GameFinished));
}
