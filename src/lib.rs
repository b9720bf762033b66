//! # `sbligen`: Problem setup for SBLI-style CFD code generators
//!
//! # Dependencies
//! - cargo >= v1.49
//! - `hdf5` (sudo apt-get install -y libhdf5-dev)
//!
//! # Details
//!
//! This library covers the declarative side of a symbolic CFD code
//! generator: governing equations (compressible Navier-Stokes in
//! Einstein notation), constituent relations, initial conditions and
//! boundary conditions are declared as strings, grouped into a
//! [`block::SimulationBlock`] together with the discretisation schemes.
//! The index expansion, symbolic discretisation and code emission
//! happen in the external generator; `sbligen` prepares its input and
//! post-processes its output:
//!
//! - [`substitute`] patches numeric parameter values and result-output
//!   calls into the generated `<name>.cpp`,
//! - [`latex`] writes the declared equations to a LaTeX listing,
//! - [`io`] reads the solver's `hdf5` result files back for
//!   post-processing.
//!
//! # Example
//! Patch the constants of a generated simulation and request `hdf5`
//! output of the conservative variables:
//! ```no_run
//! use sbligen::substitute::{OutputMode, ParameterSubstitution};
//!
//! let mut sub = ParameterSubstitution::new("opensbli", OutputMode::Hdf5);
//! sub.add_constant("gama", 1.4);
//! sub.add_constant("niter", 5000);
//! sub.add_datasets(&["rho", "rhou0", "rhou1", "rhoE"]);
//! sub.substitute_file_unwrap();
//! ```
//!
//! Declare a problem setup, see `demos/channel_flow_wall.rs` for
//! the complete 2-D channel flow case:
//! ```
//! use sbligen::block::SimulationBlock;
//! use sbligen::boundary::{BoundaryCondition, Side};
//! use sbligen::equations::SimulationEquations;
//! use sbligen::schemes::{central, runge_kutta, Schemes};
//!
//! let mut simulation_eq = SimulationEquations::new();
//! simulation_eq
//!     .add_equation("Eq(Der(rho,t), - Skew(rho*u_j,x_j))")
//!     .unwrap();
//!
//! let mut schemes = Schemes::new();
//! schemes.insert(central(4).unwrap());
//! schemes.insert(runge_kutta(3).unwrap());
//!
//! let mut block = SimulationBlock::new(1, 0);
//! block.set_block_boundaries(vec![
//!     BoundaryCondition::periodic(0, Side::Left),
//!     BoundaryCondition::periodic(0, Side::Right),
//! ]);
//! block.set_discretisation_schemes(schemes);
//! assert!(block.validate().is_ok());
//! ```
//!
//! ## Documentation
//!
//! Download and run:
//!
//! `cargo doc --open`
#![warn(missing_docs)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#[macro_use]
extern crate enum_dispatch;
pub mod block;
pub mod boundary;
pub mod equations;
pub mod io;
pub mod latex;
pub mod schemes;
pub mod substitute;
pub mod types;

pub use block::SimulationBlock;
pub use equations::{ConstituentRelations, GridBasedInitialisation, SimulationEquations};
pub use substitute::{OutputMode, ParameterSubstitution};

use thiserror::Error;

/// Errors raised while declaring a problem setup or patching
/// generated sources.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Equation string does not follow `Eq(lhs, rhs)`
    #[error("malformed equation `{0}`: {1}")]
    MalformedEquation(String, &'static str),
    /// Scheme parameters out of range
    #[error("invalid scheme `{name}`: {reason}")]
    InvalidScheme {
        /// Scheme name
        name: String,
        /// What was wrong
        reason: String,
    },
    /// Block boundary declaration incomplete or contradictory
    #[error("boundary declaration invalid: {0}")]
    InvalidBoundaries(String),
    /// Block misses a spatial or temporal scheme
    #[error("missing discretisation scheme: {0}")]
    MissingScheme(&'static str),
    /// Generated source file could not be read or written
    #[error("cannot access generated source {path:?}: {source}")]
    SourceFile {
        /// Path of the generated source
        path: std::path::PathBuf,
        /// Underlying io error
        source: std::io::Error,
    },
    /// Io failure while reading or writing files
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate wide result type
pub type Result<T> = std::result::Result<T, SetupError>;
