use oddsmith::cards::deck::Deck;
use oddsmith::cards::hand::Hand;
use oddsmith::cards::hole::Hole;
use oddsmith::cards::strength::Strength;
use oddsmith::simulation::spot::Spot;
use rand::SeedableRng;
use rand::rngs::SmallRng;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_river_hand,
        estimating_preflop_equity,
        estimating_river_equity,
}

fn evaluating_river_hand(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card Hand", |b| {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let hand = Deck::new().deal(7, rng);
        b.iter(|| Strength::from(hand))
    });
}

fn estimating_preflop_equity(c: &mut criterion::Criterion) {
    c.bench_function("estimate preflop equity, 1k trials", |b| {
        let pocket = Hole::try_from("As Ah").unwrap();
        let spot = Spot::new(pocket, Hand::empty(), 1).unwrap();
        b.iter(|| spot.equity_seeded(1_000, 0))
    });
}

fn estimating_river_equity(c: &mut criterion::Criterion) {
    c.bench_function("estimate river equity, 1k trials", |b| {
        let pocket = Hole::try_from("Qs Jh").unwrap();
        let public = Hand::try_from("2c 7d Th 9h 3s").unwrap();
        let spot = Spot::new(pocket, public, 2).unwrap();
        b.iter(|| spot.equity_seeded(1_000, 0))
    });
}
