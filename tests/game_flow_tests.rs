//! Integration tests for the game flow
//!
//! Drives the container through a real Bevy app: play a move through the
//! rules boundary, watch the position string change, re-derive the grid
//! through the codec, and verify that leaving the game resets everything to
//! the `"start"` sentinel.

use bevy::prelude::*;

use solmate::board::codec::{derive_grid, PieceKind, START_POSITION};
use solmate::core::{AppState, CorePlugin};
use solmate::game::{attempt_move, GamePlugin, PositionString, RulesEngine, Selection};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    // Resources normally provided by DefaultPlugins and the board plugin;
    // the windowless input systems skip themselves without a primary window.
    app.init_resource::<ButtonInput<MouseButton>>();
    app.init_resource::<solmate::rendering::BoardState>();
    app.init_resource::<solmate::rendering::BoardLayout>();
    app.add_plugins(CorePlugin);
    app.add_plugins(GamePlugin);
    app
}

#[test]
fn test_position_starts_at_the_sentinel() {
    let mut app = test_app();
    app.update();

    let position = app.world().resource::<PositionString>();
    assert_eq!(position.0, START_POSITION);

    // The sentinel renders the canonical 32-piece grid.
    let grid = derive_grid(&position.0);
    let pieces = grid.iter().flatten().filter(|c| c.is_some()).count();
    assert_eq!(pieces, 32);
}

#[test]
fn test_accepted_move_flows_into_the_position_string() {
    let mut app = test_app();
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::InGame);
    app.update();

    // Play 1. e4 through the container boundary.
    let accepted = {
        let world = app.world_mut();
        world.resource_scope(|world, mut rules: Mut<RulesEngine>| {
            let mut position = world.resource_mut::<PositionString>();
            attempt_move(&mut rules, &mut position, (6, 4), (4, 4))
        })
    };
    assert!(accepted);

    let position = app.world().resource::<PositionString>();
    assert_ne!(position.0, START_POSITION);

    // The engine's output round-trips through the codec: pawn on e4.
    let grid = derive_grid(&position.0);
    assert_eq!(grid[4][4].map(|p| p.kind), Some(PieceKind::Pawn));
    assert_eq!(grid[6][4], None);

    let rules = app.world().resource::<RulesEngine>();
    assert_eq!(rules.history(), ["e4"]);
}

#[test]
fn test_rejected_move_changes_nothing() {
    let mut app = test_app();
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::InGame);
    app.update();

    let accepted = {
        let world = app.world_mut();
        world.resource_scope(|world, mut rules: Mut<RulesEngine>| {
            let mut position = world.resource_mut::<PositionString>();
            // A rook cannot jump over its own pawn.
            attempt_move(&mut rules, &mut position, (7, 0), (4, 0))
        })
    };
    assert!(!accepted);

    let position = app.world().resource::<PositionString>();
    assert_eq!(position.0, START_POSITION);
    let rules = app.world().resource::<RulesEngine>();
    assert!(rules.history().is_empty());
}

#[test]
fn test_exiting_the_game_resets_the_container() {
    let mut app = test_app();
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::InGame);
    app.update();

    {
        let world = app.world_mut();
        let accepted = world.resource_scope(|world, mut rules: Mut<RulesEngine>| {
            let mut position = world.resource_mut::<PositionString>();
            attempt_move(&mut rules, &mut position, (6, 4), (4, 4))
        });
        assert!(accepted);
        world.resource_mut::<Selection>().selected = Some((0, 0));
    }

    // Exit Game: OnExit(InGame) resets the engine and transient state.
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::MainMenu);
    app.update();

    let position = app.world().resource::<PositionString>();
    assert_eq!(position.0, START_POSITION);
    let rules = app.world().resource::<RulesEngine>();
    assert!(rules.history().is_empty());
    let selection = app.world().resource::<Selection>();
    assert!(!selection.is_selected());
}
