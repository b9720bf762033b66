//! `Hdf5` read back of solver results
//!
//! The patched solver fetches its datasets into `<name>.h5` (see
//! [`crate::substitute`] with [`crate::OutputMode::Hdf5`]). This
//! module reads those files back for post-processing.
use hdf5::H5Type;
use ndarray::{ArrayBase, ArrayD, Data, Dimension};
use std::path::Path;

/// Io result type, errors are `hdf5` errors
pub type Result<T> = hdf5::Result<T>;

/// Read an ndarray of dynamic dimensionality from an hdf5 file
///
/// # Errors
/// When file or variable does not exist.
pub fn read_from_hdf5<A, P>(filename: P, varname: &str) -> Result<ArrayD<A>>
where
    A: H5Type,
    P: AsRef<Path>,
{
    let file = hdf5::File::open(filename)?;
    let data = file.dataset(varname)?;
    let y: ArrayD<A> = data.read_dyn::<A>()?;
    Ok(y)
}

/// Write an ndarray into `filename`, creating the file on first use
/// and appending afterwards. Reference results for comparison runs
/// are stored this way.
///
/// # Errors
/// When the file cannot be created, or when the dataset already
/// exists with a different shape (assigning the new value fails).
pub fn write_to_hdf5<A, S, D>(filename: &str, varname: &str, array: &ArrayBase<S, D>) -> Result<()>
where
    A: H5Type,
    S: Data<Elem = A>,
    D: Dimension,
{
    let file = if Path::new(filename).exists() {
        hdf5::File::append(filename)?
    } else {
        hdf5::File::create(filename)?
    };
    // Overwrite an existing dataset, otherwise create it
    let dset = match file.dataset(varname) {
        Ok(dset) => dset,
        Err(..) => file
            .new_dataset::<A>()
            .no_chunk()
            .shape(array.shape())
            .create(varname)?,
    };
    dset.write(&array.view())?;
    Ok(())
}

/// Inner product of two equally shaped arrays, used for norms of
/// read back datasets
pub fn l2_norm<A, S, D>(a: &ArrayBase<S, D>, b: &ArrayBase<S, D>) -> A
where
    A: num_traits::Float + std::iter::Sum,
    S: Data<Elem = A>,
    D: Dimension,
{
    a.iter().zip(b.iter()).map(|(x, y)| *x * *y).sum()
}

/// Datasets of one simulation, read back from `<name>.h5`
#[derive(Debug, Clone)]
pub struct SolverOutput {
    /// Dataset arrays in declaration order
    pub datasets: Vec<(String, ArrayD<f64>)>,
}

impl SolverOutput {
    /// Read the named datasets from `<simulation_name>.h5`.
    ///
    /// # Errors
    /// When the file or one of the datasets does not exist.
    pub fn read(simulation_name: &str, datasets: &[&str]) -> Result<Self> {
        let filename = format!("{}.h5", simulation_name);
        let mut out = Vec::with_capacity(datasets.len());
        for dset in datasets {
            let array = read_from_hdf5::<f64, _>(&filename, dset)?;
            out.push(((*dset).to_string(), array));
        }
        println!(" <== {:?}", filename);
        Ok(Self { datasets: out })
    }

    /// Read the named datasets, and handle error
    pub fn read_unwrap(simulation_name: &str, datasets: &[&str]) -> Option<Self> {
        match Self::read(simulation_name, datasets) {
            Ok(output) => {
                println!("Reading file {:?} was successfull.", simulation_name);
                Some(output)
            }
            Err(e) => {
                eprintln!(
                    "Error while reading file {:?}. Error: {}",
                    simulation_name, e
                );
                None
            }
        }
    }

    /// Array of the dataset `name`, if it was read
    pub fn get(&self, name: &str) -> Option<&ArrayD<f64>> {
        self.datasets
            .iter()
            .find(|(dset, _)| dset == name)
            .map(|(_, array)| array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn l2_norm_of_ones() {
        let a = Array2::<f64>::ones((4, 3));
        let norm: f64 = l2_norm(&a, &a);
        assert!((norm - 12.0).abs() < 1e-12);
    }

    #[test]
    fn write_then_read_back_in_declaration_order() {
        let dir = std::env::temp_dir().join("sbligen_io_test");
        std::fs::create_dir_all(&dir).unwrap();
        let sim = dir.join("opensbli");
        let sim = sim.to_str().unwrap();
        let filename = format!("{}.h5", sim);
        let _ = std::fs::remove_file(&filename);

        let rho = Array2::<f64>::ones((4, 3));
        let rho_e = Array2::<f64>::from_elem((4, 3), 2.0);
        write_to_hdf5(&filename, "rho", &rho).unwrap();
        write_to_hdf5(&filename, "rhoE", &rho_e).unwrap();

        let out = SolverOutput::read(sim, &["rhoE", "rho"]).unwrap();
        assert_eq!(out.datasets[0].0, "rhoE");
        assert_eq!(out.datasets[1].0, "rho");
        assert_eq!(out.get("rho").unwrap().shape(), &[4, 3]);
        let rho_e_back = out.get("rhoE").unwrap();
        let norm: f64 = l2_norm(rho_e_back, rho_e_back);
        assert!((norm - 48.0).abs() < 1e-12);
    }

    #[test]
    fn solver_output_lookup() {
        let out = SolverOutput {
            datasets: vec![
                ("rho".to_string(), ArrayD::zeros(vec![2, 2])),
                ("rhoE".to_string(), ArrayD::ones(vec![2, 2])),
            ],
        };
        assert!(out.get("rhoE").is_some());
        assert!(out.get("p").is_none());
    }
}
