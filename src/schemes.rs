//! Discretisation scheme descriptors
//!
//! The descriptors carry what the external generator needs to pick a
//! discretisation: scheme family and order. Central differencing
//! covers the spatial derivatives, Runge-Kutta the time integration.
use crate::{Result, SetupError};
use std::collections::BTreeMap;

/// Properties shared by all scheme descriptors
#[enum_dispatch]
pub trait SchemeProps {
    /// Scheme name, used as key in the scheme collection
    fn name(&self) -> &'static str;
    /// Order of the spatial stencil, or number of Runge-Kutta stages
    fn order(&self) -> usize;
    /// True for spatial schemes
    fn is_spatial(&self) -> bool;
}

/// Central differencing of a given (even) order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Central {
    order: usize,
}

impl SchemeProps for Central {
    fn name(&self) -> &'static str {
        "central"
    }

    fn order(&self) -> usize {
        self.order
    }

    fn is_spatial(&self) -> bool {
        true
    }
}

/// Explicit Runge-Kutta time integration with a given stage count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RungeKutta {
    stages: usize,
}

impl SchemeProps for RungeKutta {
    fn name(&self) -> &'static str {
        "runge_kutta"
    }

    fn order(&self) -> usize {
        self.stages
    }

    fn is_spatial(&self) -> bool {
        false
    }
}

/// Any of the supported scheme descriptors
#[enum_dispatch(SchemeProps)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Central differencing (spatial)
    Central(Central),
    /// Runge-Kutta integration (temporal)
    RungeKutta(RungeKutta),
}

/// Central differencing scheme of order `order`.
///
/// # Errors
/// Central stencils are symmetric, the order must be positive and
/// even.
pub fn central(order: usize) -> Result<Scheme> {
    if order == 0 || order % 2 != 0 {
        return Err(SetupError::InvalidScheme {
            name: "central".to_string(),
            reason: format!("order must be positive and even, got {}", order),
        });
    }
    Ok(Scheme::Central(Central { order }))
}

/// Runge-Kutta scheme with `stages` stages.
///
/// # Errors
/// The stage count must be positive.
pub fn runge_kutta(stages: usize) -> Result<Scheme> {
    if stages == 0 {
        return Err(SetupError::InvalidScheme {
            name: "runge_kutta".to_string(),
            reason: "stage count must be positive".to_string(),
        });
    }
    Ok(Scheme::RungeKutta(RungeKutta { stages }))
}

/// Collection of schemes keyed by name, one entry per family
#[derive(Debug, Clone, Default)]
pub struct Schemes {
    schemes: BTreeMap<&'static str, Scheme>,
}

impl Schemes {
    /// Empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a scheme under its name. A scheme of the same family
    /// is replaced.
    pub fn insert(&mut self, scheme: Scheme) -> &mut Self {
        self.schemes.insert(scheme.name(), scheme);
        self
    }

    /// Scheme registered under `name`
    pub fn get(&self, name: &str) -> Option<&Scheme> {
        self.schemes.get(name)
    }

    /// First spatial scheme, if any
    pub fn spatial(&self) -> Option<&Scheme> {
        self.schemes.values().find(|s| s.is_spatial())
    }

    /// First temporal scheme, if any
    pub fn temporal(&self) -> Option<&Scheme> {
        self.schemes.values().find(|s| !s.is_spatial())
    }

    /// Number of registered schemes
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    /// True if no scheme is registered
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Iterate over the registered schemes
    pub fn iter(&self) -> impl Iterator<Item = &Scheme> {
        self.schemes.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn central_requires_even_order() {
        assert!(central(4).is_ok());
        assert!(central(3).is_err());
        assert!(central(0).is_err());
    }

    #[test]
    fn runge_kutta_requires_stages() {
        assert!(runge_kutta(3).is_ok());
        assert!(runge_kutta(0).is_err());
    }

    #[test]
    fn collection_finds_spatial_and_temporal() {
        let mut schemes = Schemes::new();
        schemes.insert(central(4).unwrap());
        schemes.insert(runge_kutta(3).unwrap());
        assert_eq!(schemes.len(), 2);
        assert_eq!(schemes.spatial().unwrap().order(), 4);
        assert_eq!(schemes.temporal().unwrap().order(), 3);
        assert!(schemes.get("central").is_some());
    }

    #[test]
    fn insert_replaces_same_family() {
        let mut schemes = Schemes::new();
        schemes.insert(central(4).unwrap());
        schemes.insert(central(6).unwrap());
        assert_eq!(schemes.len(), 1);
        assert_eq!(schemes.spatial().unwrap().order(), 6);
    }
}
