//! 2-D compressible laminar channel flow with isothermal walls.
//!
//! Declares the governing equations, closures, initial conditions,
//! boundaries and schemes for the external generator and writes the
//! equation listing to `equations.tex`.
//!
//! Run with `cargo run --example channel_flow_wall`
use sbligen::block::SimulationBlock;
use sbligen::boundary::{BoundaryCondition, Side};
use sbligen::equations::{
    ConstituentRelations, EquationContext, EquationSet, GridBasedInitialisation,
    SimulationEquations,
};
use sbligen::latex::LatexWriter;
use sbligen::schemes::{central, runge_kutta, Schemes};

fn main() -> sbligen::Result<()> {
    // Problem dimension
    let ndim = 2;

    // Compressible Navier-Stokes in Einstein notation, skew-symmetric
    // formulation of the convective terms
    let mass = "Eq(Der(rho,t), - Skew(rho*u_j,x_j))";
    let momentum =
        "Eq(Der(rhou_i,t) , - Skew(rhou_i*u_j, x_j) - Der(p,x_i)  + Der(tau_i_j,x_j))";
    let energy = "Eq(Der(rhoE,t), - Skew(rhoE*u_j,x_j) - Conservative(p*u_j,x_j) + Der(q_j,x_j) + Der(u_i*tau_i_j ,x_j))";

    // Substitutions used in the equations
    let stress_tensor =
        "Eq(tau_i_j, (1.0/Re)*(Der(u_i,x_j)+ Der(u_j,x_i)- (2/3)* KD(_i,_j)* Der(u_k,x_k)))";
    let heat_flux = "Eq(q_j, (1.0/((gama-1)*Minf*Minf*Pr*Re))*Der(T,x_j))";

    let mut context = EquationContext::new(ndim, "x");
    context.add_substitution(stress_tensor)?;
    context.add_substitution(heat_flux)?;
    context.add_constants(&["Re", "Pr", "gama", "Minf", "mu"]);

    let mut simulation_eq = SimulationEquations::new();
    simulation_eq.add_equations(&[mass, momentum, energy])?;

    // Constituent relations closing the system
    let mut constituent = ConstituentRelations::new();
    constituent.add_equations(&[
        "Eq(u_i, rhou_i/rho)",
        "Eq(p, (gama-1)*(rhoE - rho*(1/2)*(KD(_i,_j)*u_i*u_j)))",
        "Eq(T, p*gama*Minf*Minf/(rho))",
    ])?;

    // Initial conditions, quiescent flow with a perturbed density
    // profile across the channel
    let mut initial = GridBasedInitialisation::new();
    initial.add_equations(&[
        "Eq(DataObject(x0), block.deltas[0]*block.grid_indexes[0])",
        "Eq(DataObject(x1), block.deltas[1]*block.grid_indexes[1])",
        "Eq(GridVariable(u0), 0)",
        "Eq(GridVariable(u1), 0)",
        "Eq(GridVariable(p), 1.0/(gama*Minf*Minf))",
        "Eq(GridVariable(r), 1.0/(1.0+0.01944*(1-(DataObject(x1)-1)**4)))",
        "Eq(DataObject(rho), r)",
        "Eq(DataObject(rhou0), r*u0)",
        "Eq(DataObject(rhou1), r*u1)",
        "Eq(DataObject(rhoE), p/(gama-1) + 0.5* r*(u0**2 + u1**2))",
    ])?;

    // Write the declared equations to a LaTeX listing
    let mut latex = LatexWriter::new();
    latex.open(
        "equations.tex",
        "Einstein Expansion of the simulation equations",
    )?;
    latex.write_string("Simulation equations")?;
    for eq in simulation_eq.equations() {
        latex.write_expression(eq)?;
    }
    latex.write_string("Constituent relations")?;
    for eq in constituent.equations() {
        latex.write_expression(eq)?;
    }
    latex.write_string("Substitutions")?;
    for eq in context.substitutions() {
        latex.write_expression(eq)?;
    }
    latex.close()?;
    println!("equations.tex written");

    // Central scheme for spatial and Runge-Kutta for temporal
    // discretisation
    let mut schemes = Schemes::new();
    schemes.insert(central(4)?);
    schemes.insert(runge_kutta(3)?);

    // Periodic in x0, isothermal walls in x1
    let rho_e_wall = "Eq(DataObject(rhoE), DataObject(rho)/((gama-1)*gama*Minf*Minf))";
    let boundaries = vec![
        BoundaryCondition::periodic(0, Side::Left),
        BoundaryCondition::periodic(0, Side::Right),
        BoundaryCondition::isothermal_wall(1, Side::Left, &[rho_e_wall])?,
        BoundaryCondition::isothermal_wall(1, Side::Right, &[rho_e_wall])?,
    ];

    let mut block = SimulationBlock::new(ndim, 0);
    block.set_block_boundaries(boundaries);
    block.set_equations(vec![
        EquationSet::Constituent(constituent),
        EquationSet::Simulation(simulation_eq),
        EquationSet::Initialisation(initial),
    ]);
    block.set_discretisation_schemes(schemes);

    block.validate()?;
    block.print_summary();
    Ok(())
}
