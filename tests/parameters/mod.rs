//! Integration tests for the parameter system
//!
//! These tests verify that the parameter system behaves correctly in various scenarios.

// Tests for the Parameter struct
mod parameter_tests;




// Host models composing trees out of their own sub-models
mod model_tests;
