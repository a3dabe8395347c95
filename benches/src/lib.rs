//! Helpers shared by the benchmarks.

/// Adds a path prefix to a benchmark name, so that groups from different modules do not
/// collide in the criterion report.
#[macro_export]
macro_rules! bench {
    ($name:literal) => {
        concat!(module_path!(), "::", $name)
    };
}
