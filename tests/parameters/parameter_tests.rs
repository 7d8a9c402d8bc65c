//! Integration tests for the Parameter struct
//!
//! These tests verify that the Parameter struct behaves correctly in various scenarios.

use paramtree_rs::parameters::{Bounds, BoundsError, Parameter, ParameterError};
use std::f64::{INFINITY, NEG_INFINITY};

#[test]
fn test_parameter_lifecycle() {
    // Create a parameter
    let mut param = Parameter::new("spread", 0.3);

    // Check initial state
    assert_eq!(param.name(), "spread");
    assert_eq!(param.value(), 0.3);
    assert_eq!(param.min(), NEG_INFINITY);
    assert_eq!(param.max(), INFINITY);

    // Change value
    param.set_value(0.6).unwrap();
    assert_eq!(param.value(), 0.6);
    assert_eq!(param.init_value(), 0.3);

    // Reset to initial value
    param.reset();
    assert_eq!(param.value(), 0.3);

    // Set bounds
    param.set_bounds(0.0, 1.0).unwrap();
    assert_eq!(param.bounds(), Bounds::unit());

    // Set value outside bounds (should fail)
    assert!(param.set_value(-0.5).is_err());
    assert!(param.set_value(1.5).is_err());

    // Set value inside bounds (should succeed)
    assert!(param.set_value(0.5).is_ok());
    assert_eq!(param.value(), 0.5);
}

#[test]
fn test_invalid_bounds() {
    let mut param = Parameter::new("spread", 0.3);

    assert_eq!(
        param.set_bounds(1.0, 0.0),
        Err(ParameterError::BoundsError(BoundsError::InvalidBounds {
            min: 1.0,
            max: 0.0
        }))
    );

    // The old bounds survive a failed update
    assert_eq!(param.bounds(), Bounds::unbounded());
}

#[test]
fn test_one_sided_bounds() {
    let mut param = Parameter::with_bounds("rate", 5.0, 1.0, INFINITY).unwrap();
    assert!(param.set_value(1e9).is_ok());
    assert!(param.set_value(0.5).is_err());

    let mut param = Parameter::with_bounds("rate", -5.0, NEG_INFINITY, 0.0).unwrap();
    assert!(param.set_value(-1e9).is_ok());
    assert!(param.set_value(0.5).is_err());
}
