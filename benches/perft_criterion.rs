use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bitboard_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use bitboard_rules::game_state::chess_types::Position;
use bitboard_rules::move_generation::perft::{perft, perft_counts, perft_divide};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2812],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "position_2",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "position_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2812, 43_238],
    },
    BenchCase {
        name: "position_4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        expected_nodes: &[6, 264, 9467],
    },
    BenchCase {
        name: "position_5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        expected_nodes: &[44, 1486, 62_379],
    },
];

fn suite_name() -> &'static str {
    match std::env::var("PERFT_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn bench_perft(c: &mut Criterion) {
    let suite = suite_name();
    let cases = if suite == "standard" { CASES_STANDARD } else { CASES_QUICK };

    let mut group = c.benchmark_group(format!("perft_{suite}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in cases {
        let position = Position::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let mut warmup = position.clone();
            assert_eq!(
                perft(&mut warmup, depth),
                *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name,
                depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            let mut bench_position = position.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let nodes = perft(black_box(&mut bench_position), black_box(depth));
                        assert_eq!(nodes, *expected);
                        black_box(nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

/// Divide and detailed counting at each case's deepest depth. Both walk the
/// same tree as plain perft, so their totals must agree with it.
fn bench_perft_breakdowns(c: &mut Criterion) {
    let suite = suite_name();
    let cases = if suite == "standard" { CASES_STANDARD } else { CASES_QUICK };

    let mut group = c.benchmark_group(format!("perft_breakdown_{suite}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in cases {
        let Some((&expected_nodes, _)) = case.expected_nodes.split_last() else {
            continue;
        };
        let depth = case.expected_nodes.len() as u8;
        let mut position = Position::from_fen(case.fen).expect("benchmark FEN should parse");

        let divided: u64 = perft_divide(&mut position, depth).iter().map(|(_, n)| n).sum();
        assert_eq!(divided, expected_nodes, "divide mismatch for {} depth {}", case.name, depth);
        assert_eq!(
            perft_counts(&mut position, depth).nodes,
            expected_nodes,
            "detailed mismatch for {} depth {}",
            case.name,
            depth
        );

        group.throughput(Throughput::Elements(expected_nodes));

        group.bench_function(BenchmarkId::new("divide", format!("{}_d{}", case.name, depth)), |b| {
            b.iter(|| black_box(perft_divide(black_box(&mut position), black_box(depth))))
        });

        group.bench_function(BenchmarkId::new("detailed", format!("{}_d{}", case.name, depth)), |b| {
            b.iter(|| {
                let counts = perft_counts(black_box(&mut position), black_box(depth));
                assert_eq!(counts.nodes, expected_nodes);
                black_box(counts)
            })
        });
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft, bench_perft_breakdowns);
criterion_main!(perft_benches);
