use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eca::{AutomatonEngine, RuleTable, SeedPolicy};

const SEED: u64 = 42;
const N: usize = 1 << 16;

fn rule_step(c: &mut Criterion) {
    for rule in [30, 110] {
        let mut engine =
            AutomatonEngine::with_seed(RuleTable::from(rule), N, SeedPolicy::UniformRandom, Some(SEED))
                .unwrap();
        c.bench_function(&format!("rule {} step, {} cells", rule, N), |b| {
            b.iter(|| black_box(engine.step()))
        });
    }
}

fn self_biasing_step(c: &mut Criterion) {
    let mut engine = AutomatonEngine::with_seed(
        RuleTable::from(0),
        N,
        SeedPolicy::SelfBiasingRandom,
        Some(SEED),
    )
    .unwrap();
    c.bench_function(&format!("self-biasing step, {} cells", N), |b| {
        b.iter(|| black_box(engine.step()))
    });
}

criterion_group!(benches, rule_step, self_biasing_step);
criterion_main!(benches);
