use impact_profiling::benchmark::criterion::{self, Criterion};
use impact_vector::benchmark::Target;

fn vector_operations(c: &mut Criterion) {
    criterion::bench_targets(c, Target::ALL);
}

criterion::criterion_group!(
    name = benches;
    config = criterion::config();
    targets = vector_operations
);
criterion::criterion_main!(benches);
