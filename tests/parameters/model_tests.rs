//! Host models that compose parameter trees out of their own sub-models
//!
//! A lymphatic spread model: each side of the neck is a small graph of edges
//! with spread probabilities, and a bilateral model joins the two sides.

use paramtree_rs::parameters::{HasParams, HasParamsExt, ParamMap, ParameterTree, Parameters};
use paramtree_rs::{ParamTreeError, Result};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("spread probability {0} is outside [0, 1]")]
struct ProbabilityError(f64);

/// An edge of the lymphatic graph
#[derive(Debug, Clone, PartialEq)]
struct Edge {
    spread: f64,
}

impl HasParams for Edge {
    fn get_params(&self) -> ParamMap {
        let mut params = ParamMap::new();
        params.insert("spread".to_string(), self.spread);
        params
    }

    fn set_params(&mut self, args: &[f64], kwargs: &ParamMap) -> Result<Vec<f64>> {
        let spread = kwargs
            .get("spread")
            .or_else(|| args.first())
            .copied()
            .unwrap_or(self.spread);

        if !(0.0..=1.0).contains(&spread) {
            return Err(ParamTreeError::leaf(ProbabilityError(spread)));
        }
        self.spread = spread;
        Ok(Vec::new())
    }
}

/// One side of the neck: shared edges plus the tree that routes to them
struct Unilateral {
    tumor_to_ii: Rc<RefCell<Edge>>,
    ii_to_iii: Rc<RefCell<Edge>>,
    params: ParameterTree<'static>,
}

impl Unilateral {
    fn new() -> Self {
        let tumor_to_ii = Rc::new(RefCell::new(Edge { spread: 0.3 }));
        let ii_to_iii = Rc::new(RefCell::new(Edge { spread: 0.1 }));

        let params = ParameterTree::builder()
            .child("TtoII", Rc::clone(&tumor_to_ii))
            .child("IItoIII", Rc::clone(&ii_to_iii))
            .build()
            .unwrap();

        Self {
            tumor_to_ii,
            ii_to_iii,
            params,
        }
    }
}

impl HasParams for Unilateral {
    fn get_params(&self) -> ParamMap {
        self.params.get_params()
    }

    fn set_params(&mut self, args: &[f64], kwargs: &ParamMap) -> Result<Vec<f64>> {
        self.params.set_params(args, kwargs)
    }

    fn accepts(&self, name: &str) -> bool {
        self.params.accepts(name)
    }
}

/// Both sides of the neck plus a distribution over diagnosis times
struct Bilateral {
    ipsi: Rc<RefCell<Unilateral>>,
    contra: Rc<RefCell<Unilateral>>,
    params: ParameterTree<'static>,
}

impl Bilateral {
    fn new() -> Self {
        let ipsi = Rc::new(RefCell::new(Unilateral::new()));
        let contra = Rc::new(RefCell::new(Unilateral::new()));

        let mut distribution = Parameters::new();
        distribution
            .add_param_with_bounds("late", 0.5, 0.0, 1.0)
            .unwrap();

        let params = ParameterTree::builder()
            .child("ipsi", Rc::clone(&ipsi))
            .child("contra", Rc::clone(&contra))
            .child("dist", distribution)
            .build()
            .unwrap();

        Self {
            ipsi,
            contra,
            params,
        }
    }
}

#[test]
fn test_bilateral_flat_names() {
    let model = Bilateral::new();

    assert_eq!(
        model.params.param_names(),
        vec![
            "ipsi_TtoII_spread",
            "ipsi_IItoIII_spread",
            "contra_TtoII_spread",
            "contra_IItoIII_spread",
            "dist_late",
        ]
    );
}

#[test]
fn test_symmetric_update_reaches_both_sides() {
    let mut model = Bilateral::new();

    model.params.set_named("TtoII_spread", 0.6).unwrap();

    assert_eq!(model.ipsi.borrow().tumor_to_ii.borrow().spread, 0.6);
    assert_eq!(model.contra.borrow().tumor_to_ii.borrow().spread, 0.6);
    assert_eq!(model.ipsi.borrow().ii_to_iii.borrow().spread, 0.1);
}

#[test]
fn test_one_sided_update() {
    let mut model = Bilateral::new();

    model.params.set_named("contra_IItoIII_spread", 0.05).unwrap();

    assert_eq!(model.contra.borrow().ii_to_iii.borrow().spread, 0.05);
    assert_eq!(model.ipsi.borrow().ii_to_iii.borrow().spread, 0.1);
}

#[test]
fn test_positional_update_of_whole_model() {
    let mut model = Bilateral::new();

    let rest = model
        .params
        .set_positional(&[0.11, 0.12, 0.21, 0.22, 0.9, 42.0])
        .unwrap();

    assert_eq!(rest, vec![42.0]);
    assert_eq!(model.ipsi.borrow().ii_to_iii.borrow().spread, 0.12);
    assert_eq!(model.contra.borrow().tumor_to_ii.borrow().spread, 0.21);
    assert_eq!(model.params.get_params()["dist_late"], 0.9);
}

#[test]
fn test_leaf_error_passes_through_unchanged() {
    let mut model = Bilateral::new();

    let err = model.params.set_named("ipsi_TtoII_spread", 1.5).unwrap_err();
    match err {
        ParamTreeError::Leaf(inner) => {
            assert_eq!(
                inner.downcast_ref::<ProbabilityError>(),
                Some(&ProbabilityError(1.5))
            );
        }
        other => panic!("Expected leaf error, got {:?}", other),
    }
    assert_eq!(model.ipsi.borrow().tumor_to_ii.borrow().spread, 0.3);
}

#[test]
fn test_short_lived_tree_over_borrowed_edges() {
    let mut left = Edge { spread: 0.2 };
    let mut right = Edge { spread: 0.4 };

    ParameterTree::builder()
        .child("left", &mut left)
        .child("right", &mut right)
        .build()
        .unwrap()
        .set_named("spread", 0.5)
        .unwrap();

    assert_eq!(left, Edge { spread: 0.5 });
    assert_eq!(right, Edge { spread: 0.5 });
}
