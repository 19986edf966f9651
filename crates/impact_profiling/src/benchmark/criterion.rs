//! Benchmarking using `criterion`.

pub use criterion::*;

use crate::benchmark::{BenchmarkTarget, Benchmarker};
use std::time::Duration;

/// Hands the benchmarked closure of one target to a criterion benchmark
/// group.
#[allow(missing_debug_implementations)]
pub struct GroupBenchmarker<'g, 'c> {
    group: &'g mut BenchmarkGroup<'c, measurement::WallTime>,
    id: &'static str,
}

impl Benchmarker for GroupBenchmarker<'_, '_> {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        self.group.bench_function(self.id, |b| b.iter(&mut *f));
    }
}

/// Benchmarks all the given targets. Consecutive targets from the same
/// module share a benchmark group named after the module, and each target is
/// identified by its function name within the group.
pub fn bench_targets<T: BenchmarkTarget>(c: &mut Criterion, targets: &[T]) {
    for module_targets in targets.chunk_by(|a, b| module_name(a) == module_name(b)) {
        let mut group = c.benchmark_group(module_name(&module_targets[0]));
        for target in module_targets {
            target.execute(GroupBenchmarker {
                group: &mut group,
                id: function_name(target),
            });
        }
        group.finish();
    }
}

/// Criterion configuration for the vector benchmarks. Vector operations are
/// in the nanosecond range, so a short warm-up is plenty.
pub fn config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .noise_threshold(0.03)
}

fn module_name(target: &impl BenchmarkTarget) -> &'static str {
    split_target_name(target.name()).0
}

fn function_name(target: &impl BenchmarkTarget) -> &'static str {
    split_target_name(target.name()).1
}

fn split_target_name(name: &'static str) -> (&'static str, &'static str) {
    name.rsplit_once("::").unwrap_or(("targets", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_names_split_into_module_and_function() {
        assert_eq!(
            split_target_name("vector::add_vector3"),
            ("vector", "add_vector3")
        );
        assert_eq!(split_target_name("a::b::c"), ("a::b", "c"));
    }

    #[test]
    fn unqualified_target_names_go_in_default_group() {
        assert_eq!(split_target_name("lone"), ("targets", "lone"));
    }
}
