//! Common utilities for integration tests
#![allow(dead_code)]

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::ExponentialDecay;
pub use test_helpers::{
    assert_profiles_close,
    concentration,
    create_simple_scenario,
    is_non_increasing,
    relative_error,
    run_euler,
    sign_changes,
    total_mass,
};
