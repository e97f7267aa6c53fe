use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_checkers::game_state::checkers_rules::GameRules;
use plum_checkers::game_state::checkers_types::{Board, Color};
use plum_checkers::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    to_move: Color,
    rules: GameRules,
    expected_nodes: &'static [usize],
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "start_lenient_dark",
        to_move: Color::Dark,
        rules: GameRules::lenient(),
        expected_nodes: &[7, 49, 379],
    },
    BenchCase {
        name: "start_forced_dark",
        to_move: Color::Dark,
        rules: GameRules::forced_capture(),
        expected_nodes: &[7, 49, 302],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "start_lenient_dark",
        to_move: Color::Dark,
        rules: GameRules::lenient(),
        expected_nodes: &[7, 49, 379, 2872],
    },
    BenchCase {
        name: "start_forced_dark",
        to_move: Color::Dark,
        rules: GameRules::forced_capture(),
        expected_nodes: &[7, 49, 302, 1469, 7361],
    },
    BenchCase {
        name: "start_forced_light",
        to_move: Color::Light,
        rules: GameRules::forced_capture(),
        expected_nodes: &[7, 49, 302, 1469],
    },
];

fn selected_cases() -> &'static [BenchCase] {
    match std::env::var("CHECKERS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let suite_name = match std::env::var("CHECKERS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let board = Board::with_rules(case.rules);

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&board, case.to_move, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes as u64));
            let bench_name = format!("{}_d{}", case.name, depth);

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&board), case.to_move, black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
