//! Simulation block: the unit the external generator discretises
//!
//! A block collects the equation sets, boundary conditions and
//! discretisation schemes of one grid block and knows the naming
//! contract of the generated code (dataset and block handles).
use crate::boundary::BoundaryCondition;
use crate::equations::EquationSet;
use crate::schemes::Schemes;
use crate::{Result, SetupError};

/// One grid block of the simulation
#[derive(Debug, Clone)]
pub struct SimulationBlock {
    /// Problem dimension
    pub ndim: usize,
    /// Block number, part of every generated handle name
    pub block_number: usize,
    boundaries: Vec<BoundaryCondition>,
    equation_sets: Vec<EquationSet>,
    schemes: Schemes,
}

impl SimulationBlock {
    /// New block of dimension `ndim` with the given block number
    pub fn new(ndim: usize, block_number: usize) -> Self {
        Self {
            ndim,
            block_number,
            boundaries: Vec::new(),
            equation_sets: Vec::new(),
            schemes: Schemes::new(),
        }
    }

    /// Set the boundary conditions of the block
    pub fn set_block_boundaries(&mut self, boundaries: Vec<BoundaryCondition>) -> &mut Self {
        self.boundaries = boundaries;
        self
    }

    /// Set the equation sets, in the order they are applied
    pub fn set_equations(&mut self, equation_sets: Vec<EquationSet>) -> &mut Self {
        self.equation_sets = equation_sets;
        self
    }

    /// Set the discretisation schemes
    pub fn set_discretisation_schemes(&mut self, schemes: Schemes) -> &mut Self {
        self.schemes = schemes;
        self
    }

    /// Declared boundary conditions
    pub fn boundaries(&self) -> &[BoundaryCondition] {
        &self.boundaries
    }

    /// Declared equation sets
    pub fn equation_sets(&self) -> &[EquationSet] {
        &self.equation_sets
    }

    /// Declared schemes
    pub fn schemes(&self) -> &Schemes {
        &self.schemes
    }

    /// Handle name of a dataset in the generated code, e.g. `rho_B0`
    pub fn dat_name(&self, dset: &str) -> String {
        format!("{}_B{}", dset, self.block_number)
    }

    /// Handle name of the block in the generated code,
    /// e.g. `opensbliblock00`
    pub fn block_name(&self, simulation_name: &str) -> String {
        format!("{}block0{}", simulation_name, self.block_number)
    }

    /// Check that the declaration is complete.
    ///
    /// Every direction needs a condition on both sides, declared
    /// exactly once; periodic conditions must pair up across the two
    /// sides of a direction; one spatial and one temporal scheme must
    /// be registered.
    ///
    /// # Errors
    /// Names the offending direction, side or scheme kind.
    pub fn validate(&self) -> Result<()> {
        let mut covered = vec![[false; 2]; self.ndim];
        let mut periodic = vec![[false; 2]; self.ndim];
        for bc in &self.boundaries {
            if bc.direction >= self.ndim {
                return Err(SetupError::InvalidBoundaries(format!(
                    "direction {} out of range for ndim {}",
                    bc.direction, self.ndim
                )));
            }
            let side = bc.side.index();
            if covered[bc.direction][side] {
                return Err(SetupError::InvalidBoundaries(format!(
                    "duplicate condition on direction {} side {}",
                    bc.direction, side
                )));
            }
            covered[bc.direction][side] = true;
            periodic[bc.direction][side] = bc.is_periodic();
        }
        for (direction, sides) in covered.iter().enumerate() {
            for (side, is_covered) in sides.iter().enumerate() {
                if !is_covered {
                    return Err(SetupError::InvalidBoundaries(format!(
                        "no condition on direction {} side {}",
                        direction, side
                    )));
                }
            }
        }
        for (direction, sides) in periodic.iter().enumerate() {
            if sides[0] != sides[1] {
                return Err(SetupError::InvalidBoundaries(format!(
                    "periodic condition on direction {} must cover both sides",
                    direction
                )));
            }
        }
        if self.schemes.spatial().is_none() {
            return Err(SetupError::MissingScheme("spatial"));
        }
        if self.schemes.temporal().is_none() {
            return Err(SetupError::MissingScheme("temporal"));
        }
        Ok(())
    }

    /// Print a summary of the declared setup
    pub fn print_summary(&self) {
        println!(
            "block {} ({}d): {} boundary conditions, {} schemes",
            self.block_number,
            self.ndim,
            self.boundaries.len(),
            self.schemes.len()
        );
        for set in &self.equation_sets {
            println!("  {}: {} equations", set.name(), set.equations().len());
            for eq in set.equations() {
                println!("    {}", eq.text());
            }
        }
        for bc in &self.boundaries {
            println!(
                "  direction {} side {}: {}",
                bc.direction,
                bc.side,
                bc.kind_name()
            );
        }
    }
}
