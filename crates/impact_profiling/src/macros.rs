//! Macros for declaring benchmark targets.

/// Defines an enum with one variant per benchmark function, grouped by the
/// module the functions live in. Variant names are the camel-cased
/// concatenation of the module and function name, so `vector => { add_vector3 }`
/// becomes `VectorAddVector3`.
///
/// The enum implements [`BenchmarkTarget`](crate::benchmark::BenchmarkTarget)
/// and derives [`clap::ValueEnum`] when the invoking crate has a `cli`
/// feature enabled.
#[macro_export]
macro_rules! define_target_enum {
(
    $name:ident,
    $benchmarks_mod:path,
    $(
        $module:ident => {
            $($func:ident),* $(,)?
        }
    ),* $(,)?
) => {
    $crate::pastey::paste! {
        #[allow(clippy::enum_variant_names)]
        #[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
        pub enum $name {
            $(
                $( [<$module:camel $func:camel>] ),*
            ),*
        }

        impl $name {
            /// All targets, in declaration order.
            pub const ALL: &'static [Self] = &[
                $(
                    $( Self::[<$module:camel $func:camel>] ),*
                ),*
            ];

            /// The name of the benchmark function the target runs, qualified
            /// by its module.
            pub fn name(&self) -> &'static str {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => concat!(stringify!($module), "::", stringify!($func)), )*
                    )*
                }
            }
        }

        impl $crate::benchmark::BenchmarkTarget for $name {
            fn name(&self) -> &'static str {
                $name::name(self)
            }

            fn execute<B: $crate::benchmark::Benchmarker>(&self, benchmarker: B) {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => $benchmarks_mod::$module::$func(benchmarker), )*
                    )*
                }
            }
        }
    }};
}
