pub use day_ranges::fuzzing::{run_fuzz_intervals, Data};
