//! Example of routing parameters through nested models.
//!
//! Builds a two-sided lymphatic spread model out of `Parameters` leaves and
//! shows prefixed addressing, broadcast, positional updates and the strict
//! unmatched-name policy. Run with `RUST_LOG=debug` to see routing decisions.

use paramtree_rs::parameters::{HasParams, HasParamsExt, ParameterTree, Parameters};
use paramtree_rs::{ParamTreeError, TreeOptions};
use tracing_subscriber::EnvFilter;

fn side(tumor_spread: f64, lnl_spread: f64) -> Result<ParameterTree<'static>, ParamTreeError> {
    let mut tumor = Parameters::new();
    tumor.add_param_with_bounds("spread", tumor_spread, 0.0, 1.0)?;

    let mut lnl = Parameters::new();
    lnl.add_param_with_bounds("spread", lnl_spread, 0.0, 1.0)?;

    ParameterTree::builder()
        .child("tumor", tumor)
        .child("II", lnl)
        .build()
}

fn print_params(title: &str, model: &dyn HasParams) {
    println!("{}", title);
    for (name, value) in model.get_params() {
        println!("  {:<20} {:.3}", name, value);
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Nested parameter routing example");
    println!("================================\n");

    let mut dist = Parameters::new();
    dist.add_param_with_bounds("late_p", 0.5, 0.0, 1.0)?;

    let mut model = ParameterTree::builder()
        .child("ipsi", side(0.3, 0.1)?)
        .child("contra", side(0.05, 0.02)?)
        .child("dist", dist)
        .options(TreeOptions::strict())
        .build()?;

    print_params("1. Initial parameters", &model);

    // A single, fully qualified parameter
    model.set_named("contra_II_spread", 0.04)?;
    print_params("2. After contra_II_spread = 0.04", &model);

    // The side is left out, so both sides are updated
    model.set_named("tumor_spread", 0.25)?;
    print_params("3. After tumor_spread = 0.25 (both sides)", &model);

    // Positional values follow the order printed above
    let values = [0.4, 0.2, 0.1, 0.05, 0.7, 99.0];
    let rest = model.set_positional(&values)?;
    print_params("4. After positional update", &model);
    println!("Unconsumed positional values: {:?}\n", rest);

    // A typo is rejected before anything changes
    match model.set_named("ipsi_tumour_spread", 0.9) {
        Err(err) => println!("5. Rejected update: {}", err),
        Ok(()) => println!("5. Unexpectedly accepted a misspelled name"),
    }

    // Out-of-bounds values are rejected by the leaf
    if let Err(err) = model.set_named("dist_late_p", 1.5) {
        println!("6. Leaf rejected value: {}", err);
    }

    #[cfg(feature = "array")]
    println!("\nAs array: {}", model.to_array());

    Ok(())
}
