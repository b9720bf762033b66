//! Role-tagged equation sets of a problem setup
//!
//! Equations are declared as strings in Einstein notation, e.g.
//! `"Eq(Der(rho,t), - Skew(rho*u_j,x_j))"`. Index expansion and
//! discretisation happen in the external generator; this module only
//! checks that a declaration is well-formed and keeps the equations
//! grouped by their role in the simulation.
use crate::{Result, SetupError};

/// A single equation declaration of the form `Eq(lhs, rhs)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    text: String,
    lhs: String,
    rhs: String,
}

impl Equation {
    /// Parse an equation string.
    ///
    /// The string must be a single `Eq(..)` call with balanced
    /// parentheses; left- and right-hand side are split at the first
    /// comma outside of nested calls and must both be non-empty.
    ///
    /// # Errors
    /// [`SetupError::MalformedEquation`] when the shape is violated.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let inner = trimmed
            .strip_prefix("Eq(")
            .and_then(|s| s.strip_suffix(')'))
            .ok_or_else(|| {
                SetupError::MalformedEquation(trimmed.to_string(), "expected `Eq(lhs, rhs)`")
            })?;

        let mut depth = 0_i32;
        let mut split = None;
        for (i, c) in inner.char_indices() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth < 0 {
                        return Err(SetupError::MalformedEquation(
                            trimmed.to_string(),
                            "unbalanced parentheses",
                        ));
                    }
                }
                ',' if depth == 0 && split.is_none() => split = Some(i),
                _ => (),
            }
        }
        if depth != 0 {
            return Err(SetupError::MalformedEquation(
                trimmed.to_string(),
                "unbalanced parentheses",
            ));
        }
        let split = split.ok_or_else(|| {
            SetupError::MalformedEquation(trimmed.to_string(), "missing `,` between lhs and rhs")
        })?;
        let lhs = inner[..split].trim();
        let rhs = inner[split + 1..].trim();
        if lhs.is_empty() || rhs.is_empty() {
            return Err(SetupError::MalformedEquation(
                trimmed.to_string(),
                "empty lhs or rhs",
            ));
        }
        Ok(Self {
            text: trimmed.to_string(),
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        })
    }

    /// Full declaration string
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Left-hand side, e.g. `Der(rho,t)`
    pub fn lhs(&self) -> &str {
        &self.lhs
    }

    /// Right-hand side
    pub fn rhs(&self) -> &str {
        &self.rhs
    }
}

macro_rules! impl_equation_set {
    ($set: ty) => {
        impl $set {
            /// Create an empty set
            pub fn new() -> Self {
                Self {
                    equations: Vec::new(),
                }
            }

            /// Parse and append a single equation.
            ///
            /// # Errors
            /// Fails when the declaration is malformed.
            pub fn add_equation(&mut self, eq: &str) -> Result<&mut Self> {
                self.equations.push(Equation::parse(eq)?);
                Ok(self)
            }

            /// Parse and append several equations, in order.
            ///
            /// # Errors
            /// Fails on the first malformed declaration; earlier
            /// equations of the slice are kept.
            pub fn add_equations(&mut self, eqs: &[&str]) -> Result<&mut Self> {
                for eq in eqs {
                    self.add_equation(eq)?;
                }
                Ok(self)
            }

            /// Declared equations in insertion order
            pub fn equations(&self) -> &[Equation] {
                &self.equations
            }

            /// Number of declared equations
            pub fn len(&self) -> usize {
                self.equations.len()
            }

            /// True if no equation was declared
            pub fn is_empty(&self) -> bool {
                self.equations.is_empty()
            }
        }

        impl Default for $set {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

/// Governing equations solved in time (mass, momentum, energy)
#[derive(Debug, Clone)]
pub struct SimulationEquations {
    equations: Vec<Equation>,
}

/// Algebraic closures evaluated each step (velocity, pressure,
/// temperature)
#[derive(Debug, Clone)]
pub struct ConstituentRelations {
    equations: Vec<Equation>,
}

/// Initial conditions evaluated once on the grid
#[derive(Debug, Clone)]
pub struct GridBasedInitialisation {
    equations: Vec<Equation>,
}

impl_equation_set!(SimulationEquations);
impl_equation_set!(ConstituentRelations);
impl_equation_set!(GridBasedInitialisation);

/// One of the role-tagged sets, in the order they are applied on a
/// block.
#[derive(Debug, Clone)]
pub enum EquationSet {
    /// Constituent relations, evaluated before the residuals
    Constituent(ConstituentRelations),
    /// The governing equations themselves
    Simulation(SimulationEquations),
    /// Grid based initialisation, evaluated once
    Initialisation(GridBasedInitialisation),
}

impl EquationSet {
    /// Role name, used in listings and status output
    pub fn name(&self) -> &'static str {
        match self {
            Self::Constituent(_) => "constituent relations",
            Self::Simulation(_) => "simulation equations",
            Self::Initialisation(_) => "grid based initialisation",
        }
    }

    /// Equations of the set, in insertion order
    pub fn equations(&self) -> &[Equation] {
        match self {
            Self::Constituent(s) => s.equations(),
            Self::Simulation(s) => s.equations(),
            Self::Initialisation(s) => s.equations(),
        }
    }
}

/// Declarative context shared by all equations of a setup:
/// substitutions expanded into the equations, the names treated as
/// constants, and the coordinate symbol.
#[derive(Debug, Clone)]
pub struct EquationContext {
    /// Problem dimension
    pub ndim: usize,
    /// Symbol of the coordinate system, usually `x`
    pub coordinate_symbol: String,
    substitutions: Vec<Equation>,
    constants: Vec<String>,
}

impl EquationContext {
    /// New context for an `ndim` dimensional problem
    pub fn new(ndim: usize, coordinate_symbol: &str) -> Self {
        Self {
            ndim,
            coordinate_symbol: coordinate_symbol.to_string(),
            substitutions: Vec::new(),
            constants: Vec::new(),
        }
    }

    /// Declare a substitution, e.g. the stress tensor.
    ///
    /// # Errors
    /// Fails when the declaration is malformed.
    pub fn add_substitution(&mut self, eq: &str) -> Result<&mut Self> {
        self.substitutions.push(Equation::parse(eq)?);
        Ok(self)
    }

    /// Declare names treated as constants during expansion
    pub fn add_constants(&mut self, names: &[&str]) -> &mut Self {
        self.constants.extend(names.iter().map(|s| (*s).to_string()));
        self
    }

    /// Declared substitutions
    pub fn substitutions(&self) -> &[Equation] {
        &self.substitutions
    }

    /// Declared constant names
    pub fn constants(&self) -> &[String] {
        &self.constants
    }
}
