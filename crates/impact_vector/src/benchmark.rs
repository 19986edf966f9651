//! Benchmark targets for the vector operations.

pub mod benchmarks;

impact_profiling::define_target_enum! {
    Target,
    crate::benchmark::benchmarks,
    vector => {
        add_vector2,
        add_vector3,
        add_vector4,
        dot_vector2,
        dot_vector3,
        dot_vector4,
        normalize_vector2,
        normalize_vector3,
        normalize_vector4,
        lerp_vector2,
        lerp_vector3,
        lerp_vector4,
        clamp_vector2,
        clamp_vector3,
        clamp_vector4,
        approx_eq_vector2,
        approx_eq_vector3,
        approx_eq_vector4,
    },
}

/// Runs the given target repeatedly for at least `duration` seconds,
/// starting `delay` seconds after the call.
pub fn benchmark(target: Target, duration: f64, delay: f64) {
    impact_profiling::benchmark::benchmark(&target, duration, delay);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_target_runs() {
        for &target in Target::ALL {
            benchmark(target, 0.0, 0.0);
        }
    }

    #[test]
    fn target_names_are_qualified_by_module() {
        assert_eq!(Target::VectorAddVector3.name(), "vector::add_vector3");
        assert!(Target::ALL.iter().all(|target| target.name().starts_with("vector::")));
    }

    #[test]
    fn targets_are_benchmark_targets_with_same_name() {
        use impact_profiling::benchmark::BenchmarkTarget;

        for target in Target::ALL {
            assert_eq!(BenchmarkTarget::name(target), target.name());
        }
    }
}
