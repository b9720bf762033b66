//! Patch the generated inviscid shock simulation.
//!
//! Substitutes the numeric constants into `opensbli.cpp` and requests
//! `hdf5` output of the conservative variables and coordinates. When
//! a result file is already present, its datasets are read back and
//! their norms printed.
//!
//! Run with `cargo run --example inviscid_shock`
use sbligen::io::{l2_norm, SolverOutput};
use sbligen::substitute::{OutputMode, ParameterSubstitution};
use sbligen::types::Parameter;

fn main() {
    let simulation_name = "opensbli";
    let constants: &[(&str, Parameter)] = &[
        ("gama", Parameter::Float(1.4)),
        ("Minf", Parameter::Float(2.0)),
        ("Twall", Parameter::Float(1.67619431)),
        ("dt", Parameter::Float(1e-1)),
        ("niter", Parameter::Int(5000)),
        ("block0np0", Parameter::Int(457)),
        ("block0np1", Parameter::Int(255)),
        ("Delta0block0", Parameter::Float(350.0 / 456.0)),
        ("Delta1block0", Parameter::Float(115.0 / 254.0)),
        ("Lx1", Parameter::Float(115.0)),
        ("stretchfactor", Parameter::Float(5.0)),
    ];
    let dsets = ["rho", "rhou0", "rhou1", "rhoE", "x0", "x1"];

    let mut sub = ParameterSubstitution::new(simulation_name, OutputMode::Hdf5);
    sub.add_constants(constants);
    sub.add_datasets(&dsets);
    sub.substitute_file_unwrap();

    // Post-process an existing result file
    if std::path::Path::new(&format!("{}.h5", simulation_name)).exists() {
        if let Some(output) = SolverOutput::read_unwrap(simulation_name, &dsets) {
            for (name, array) in &output.datasets {
                let norm: f64 = l2_norm(array, array).sqrt();
                println!("{:12}: l2 norm {:10.4e}", name, norm);
            }
        }
    }
}
