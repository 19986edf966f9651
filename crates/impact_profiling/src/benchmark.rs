//! Running benchmark targets for a fixed duration.

#[cfg(feature = "criterion")]
pub mod criterion;

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

/// Something that can run a closure repeatedly and measure it.
pub trait Benchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T);
}

/// A named piece of code to benchmark. Usually implemented by the enum
/// generated with [`define_target_enum!`](crate::define_target_enum).
pub trait BenchmarkTarget {
    /// Name of the target on the form `module::function`.
    fn name(&self) -> &'static str;

    /// Sets up the benchmarked code and hands it to the benchmarker.
    fn execute<B: Benchmarker>(&self, benchmarker: B);
}

/// Runs the benchmarked closure in a loop until the requested duration has
/// passed, then logs how many iterations were completed.
#[derive(Clone, Debug)]
pub struct BasicBenchmarker {
    label: String,
    duration: Duration,
    delayer: Delayer,
}

/// Holds back the start of a benchmark until a given time has passed since
/// the program started, which gives external profilers time to attach.
#[derive(Clone, Debug)]
pub struct Delayer {
    program_start: Instant,
    delay: Duration,
}

/// Summary of a completed [`BasicBenchmarker`] run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkSummary {
    pub iterations: u64,
    pub elapsed: Duration,
}

impl BasicBenchmarker {
    pub fn new(label: impl Into<String>, duration: Duration, delayer: Delayer) -> Self {
        Self {
            label: label.into(),
            duration,
            delayer,
        }
    }

    /// Like [`Benchmarker::benchmark`], but also returns the summary that
    /// gets logged.
    pub fn run<T>(self, f: &mut impl FnMut() -> T) -> BenchmarkSummary {
        self.delayer.wait();

        let start = Instant::now();
        let mut iterations = 0_u64;
        loop {
            black_box(f());
            iterations += 1;

            if start.elapsed() > self.duration {
                break;
            }
        }
        let summary = BenchmarkSummary {
            iterations,
            elapsed: start.elapsed(),
        };

        log::info!(
            "{}: {} iterations in {:.3} s ({:.2} ns/iter)",
            self.label,
            summary.iterations,
            summary.elapsed.as_secs_f64(),
            summary.nanos_per_iteration(),
        );

        summary
    }
}

impl Benchmarker for BasicBenchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        self.run(f);
    }
}

impl Delayer {
    pub fn new(program_start: Instant, delay_seconds: f64) -> Self {
        Self {
            program_start,
            delay: Duration::from_secs_f64(delay_seconds),
        }
    }

    fn wait(self) {
        let remaining = self.delay.saturating_sub(self.program_start.elapsed());
        if remaining > Duration::ZERO {
            log::debug!("Waiting {:.2} s before starting", remaining.as_secs_f64());
            std::thread::sleep(remaining);
        }
    }
}

impl BenchmarkSummary {
    pub fn nanos_per_iteration(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e9 / self.iterations.max(1) as f64
    }
}

/// Runs the given target with a [`BasicBenchmarker`] that runs for at least
/// `duration` seconds, starting `delay` seconds after this function was
/// called.
pub fn benchmark(target: &impl BenchmarkTarget, duration: f64, delay: f64) {
    let start = Instant::now();

    let delayer = Delayer::new(start, delay);
    let duration = Duration::from_secs_f64(duration);

    let benchmarker = BasicBenchmarker::new(target.name(), duration, delayer);

    target.execute(benchmarker);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_benchmarker_runs_closure_at_least_once() {
        let benchmarker =
            BasicBenchmarker::new("once", Duration::ZERO, Delayer::new(Instant::now(), 0.0));
        let mut calls = 0;
        let summary = benchmarker.run(&mut || calls += 1);
        assert_eq!(summary.iterations, 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn basic_benchmarker_counts_every_call() {
        let benchmarker = BasicBenchmarker::new(
            "counted",
            Duration::from_millis(5),
            Delayer::new(Instant::now(), 0.0),
        );
        let mut calls = 0_u64;
        let summary = benchmarker.run(&mut || calls += 1);
        assert!(summary.iterations >= 1);
        assert_eq!(summary.iterations, calls);
        assert!(summary.elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn delayer_waits_until_delay_has_passed_since_program_start() {
        let program_start = Instant::now();
        Delayer::new(program_start, 0.01).wait();
        assert!(program_start.elapsed() >= Duration::from_millis(10));
    }

    struct CountingTarget {
        executions: std::cell::Cell<u32>,
    }

    impl BenchmarkTarget for CountingTarget {
        fn name(&self) -> &'static str {
            "test::counting"
        }

        fn execute<B: Benchmarker>(&self, benchmarker: B) {
            benchmarker.benchmark(&mut || 1 + 1);
            self.executions.set(self.executions.get() + 1);
        }
    }

    #[test]
    fn benchmark_function_executes_target_once() {
        let target = CountingTarget {
            executions: std::cell::Cell::new(0),
        };
        benchmark(&target, 0.0, 0.0);
        assert_eq!(target.executions.get(), 1);
    }

    #[test]
    fn nanos_per_iteration_handles_zero_iterations() {
        let summary = BenchmarkSummary {
            iterations: 0,
            elapsed: Duration::from_secs(1),
        };
        assert_eq!(summary.nanos_per_iteration(), 1e9);
    }
}
