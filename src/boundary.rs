//! Collection of boundary condition declarations
//!
//! A boundary condition sits on one side of one direction of a block.
//! Wall conditions may carry additional equations enforced on the
//! boundary plane, e.g. the isothermal energy closure.
use crate::equations::Equation;
use crate::Result;
use std::fmt;

/// Side of a direction, `Left` is the lower index end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Lower index end (side 0)
    Left,
    /// Upper index end (side 1)
    Right,
}

impl Side {
    /// Side index used by the generated code (0 or 1)
    pub fn index(&self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Kind of a boundary condition
#[derive(Debug, Clone)]
pub enum BoundaryKind {
    /// Periodic wrap-around
    Periodic,
    /// No-slip wall at fixed temperature, with the equations enforced
    /// on the wall plane
    IsothermalWall {
        /// Equations evaluated on the boundary plane
        wall_equations: Vec<Equation>,
    },
}

/// Boundary condition on one side of one direction
#[derive(Debug, Clone)]
pub struct BoundaryCondition {
    /// Direction index, 0..ndim
    pub direction: usize,
    /// Side of the direction
    pub side: Side,
    /// Kind and kind-specific data
    pub kind: BoundaryKind,
}

impl BoundaryCondition {
    /// Periodic boundary on `side` of `direction`
    pub fn periodic(direction: usize, side: Side) -> Self {
        Self {
            direction,
            side,
            kind: BoundaryKind::Periodic,
        }
    }

    /// Isothermal wall on `side` of `direction`, enforcing the given
    /// equations on the wall plane.
    ///
    /// # Errors
    /// Fails when a wall equation is malformed.
    pub fn isothermal_wall(direction: usize, side: Side, wall_equations: &[&str]) -> Result<Self> {
        let wall_equations = wall_equations
            .iter()
            .map(|eq| Equation::parse(eq))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            direction,
            side,
            kind: BoundaryKind::IsothermalWall { wall_equations },
        })
    }

    /// True for periodic boundaries
    pub fn is_periodic(&self) -> bool {
        matches!(self.kind, BoundaryKind::Periodic)
    }

    /// Kind name for listings and status output
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            BoundaryKind::Periodic => "periodic",
            BoundaryKind::IsothermalWall { .. } => "isothermal wall",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periodic_sides() {
        let bc = BoundaryCondition::periodic(0, Side::Right);
        assert!(bc.is_periodic());
        assert_eq!(bc.side.index(), 1);
        assert_eq!(bc.kind_name(), "periodic");
    }

    #[test]
    fn wall_parses_equations() {
        let bc = BoundaryCondition::isothermal_wall(
            1,
            Side::Left,
            &["Eq(DataObject(rhoE), DataObject(rho)/((gama-1)*gama*Minf*Minf))"],
        )
        .unwrap();
        match &bc.kind {
            BoundaryKind::IsothermalWall { wall_equations } => {
                assert_eq!(wall_equations.len(), 1);
                assert_eq!(wall_equations[0].lhs(), "DataObject(rhoE)");
            }
            BoundaryKind::Periodic => panic!("expected a wall"),
        }
    }

    #[test]
    fn wall_rejects_malformed_equation() {
        assert!(BoundaryCondition::isothermal_wall(1, Side::Left, &["rhoE = 0"]).is_err());
    }
}
