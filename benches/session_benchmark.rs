//! Benchmarks for the command path: parsing, running commands, drawing the map.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use dark_forest::{GameState, RoomRegistry, WorldData, parse_command, render_map};

/// A full tour of the built-in world, including every gate.
const TOUR: &[&str] = &[
    "gather wood", "gather wood", "gather wood", "n", "gather food", "gather food",
    "gather food", "n", "s", "e", "n", "s", "s", "gather stone", "gather stone",
    "gather stone", "s", "w", "n", "w", "e", "look", "inventory",
];

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_command", |b| {
        b.iter(|| {
            for input in TOUR {
                black_box(parse_command(black_box(input)));
            }
        });
    });
}

fn bench_world_load(c: &mut Criterion) {
    c.bench_function("load_builtin_world", |b| {
        b.iter(|| {
            let world = WorldData::builtin().unwrap();
            black_box(RoomRegistry::from_records(&world.rooms).unwrap())
        });
    });
}

fn bench_tour(c: &mut Criterion) {
    let world = WorldData::builtin().unwrap();

    c.bench_function("session_tour", |b| {
        b.iter(|| {
            let mut game = GameState::from_world(&world).unwrap();
            game.describe_current_room();
            for input in TOUR {
                black_box(game.execute(&parse_command(input)));
            }
            black_box(game)
        });
    });
}

fn bench_render_map(c: &mut Criterion) {
    let world = WorldData::builtin().unwrap();
    let mut game = GameState::from_world(&world).unwrap();
    game.describe_current_room();
    for input in TOUR {
        game.execute(&parse_command(input));
    }

    c.bench_function("render_map", |b| {
        b.iter(|| black_box(render_map(black_box(&game))));
    });
}

criterion_group!(benches, bench_parse, bench_world_load, bench_tour, bench_render_map);
criterion_main!(benches);
