#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_case;

// Re-export
pub use assertions::{assert_coefficients_finite, assert_results_log, assert_uniform_profile};
pub use fixtures::*;
pub use test_case::{TestCase, TestCaseBuilder};
