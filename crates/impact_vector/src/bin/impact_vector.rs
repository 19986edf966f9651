use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand, ValueEnum};
    use impact_vector::benchmark::Target;

    #[derive(Debug, Parser)]
    #[command(about = "The Impact vector library", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Run a benchmarking target
        Benchmark {
            /// Benchmarking target to run
            #[arg(short, long, value_enum)]
            target: Target,

            /// Number of seconds to run the target for (it will always be run at least
            /// once)
            #[arg(short, long, default_value_t = 0.0)]
            duration: f64,

            /// Minimum number of seconds from the program is started until the target
            /// is run
            #[arg(long, default_value_t = 0.0)]
            delay: f64,
        },
        /// Run every benchmarking target in turn
        BenchmarkAll {
            /// Number of seconds to run each target for
            #[arg(short, long, default_value_t = 1.0)]
            duration: f64,
        },
        /// List the available benchmarking targets
        List,
    }

    pub fn main() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();

        let cli = Cli::parse();
        log::debug!("Parsed command line: {cli:?}");

        match cli.command {
            Command::Benchmark {
                target,
                duration,
                delay,
            } => {
                validate_seconds("duration", duration)?;
                validate_seconds("delay", delay)?;
                impact_vector::benchmark::benchmark(target, duration, delay);
            }
            Command::BenchmarkAll { duration } => {
                validate_seconds("duration", duration)?;
                for &target in Target::ALL {
                    impact_vector::benchmark::benchmark(target, duration, 0.0);
                }
            }
            Command::List => {
                for target in Target::ALL {
                    if let Some(value) = target.to_possible_value() {
                        println!("{:<32} {}", value.get_name(), target.name());
                    }
                }
            }
        }
        Ok(())
    }

    fn validate_seconds(name: &str, seconds: f64) -> Result<()> {
        if !seconds.is_finite() || seconds < 0.0 {
            anyhow::bail!("The {name} must be a non-negative number of seconds, got {seconds}");
        }
        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
