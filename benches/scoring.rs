use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use five_dice::{score_all, DieRoller, GameConfig, GameEngine, GameRng};

fn gen_dice_samples(n: usize) -> Vec<[u8; 5]> {
    let mut rng = GameRng::new(0x1234_5678);
    (0..n)
        .map(|_| std::array::from_fn(|_| rng.roll_die()))
        .collect()
}

fn bench_score_all(c: &mut Criterion) {
    let mut g = c.benchmark_group("five_dice_scoring");
    for &n in &[256usize, 4096usize] {
        let samples = gen_dice_samples(n);
        g.bench_with_input(BenchmarkId::new("score_all_batch", n), &samples, |b, s| {
            b.iter(|| {
                for dice in s.iter() {
                    black_box(score_all(black_box(dice)));
                }
            })
        });
    }
    g.finish();
}

fn bench_two_player_game(c: &mut Criterion) {
    c.bench_function("two_player_game", |b| {
        b.iter(|| {
            let mut engine = GameEngine::new(GameConfig::default().with_seed(7)).unwrap();
            while !engine.is_finished() {
                engine.roll_dice().unwrap();
                let best = engine
                    .open_previews()
                    .into_iter()
                    .max_by_key(|&(_, score)| score)
                    .map(|(category, _)| category)
                    .unwrap();
                engine.score_category(best).unwrap();
            }
            black_box(engine.winner().unwrap())
        })
    });
}

criterion_group!(benches, bench_score_all, bench_two_player_game);
criterion_main!(benches);
