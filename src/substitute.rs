//! Patch numeric constants and output calls into generated sources
//!
//! The external generator emits `<name>.cpp` with placeholder
//! assignments of the form `CONST=Input;` and a single `ops_exit();`
//! call site. This module replaces the placeholders with declared
//! values and prefixes the exit call with result-output calls, either
//! plain text dumps or `hdf5` fetches.
//!
//! Patching is idempotent: placeholders vanish on the first pass and
//! output calls are only inserted when they are not already in place,
//! so a second pass returns the text unchanged.
use crate::types::Parameter;
use crate::{Result, SetupError};
use std::fs;
use std::path::PathBuf;

/// The call site in front of which output calls are inserted
const EXIT_MARKER: &str = "ops_exit();";

/// How the patched solver writes its results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One plain text dump per dataset
    Text,
    /// One `hdf5` file with a block fetch plus one fetch per dataset
    Hdf5,
}

/// What a substitution pass did to the source
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Constants whose placeholder was replaced
    pub substituted: Vec<String>,
    /// Constants with no placeholder in the source
    pub missing: Vec<String>,
    /// True when output calls were inserted at the exit call site
    pub exit_patched: bool,
}

impl Report {
    /// Print the outcome of the pass
    pub fn print(&self) {
        for name in &self.substituted {
            println!("substituted constant: {}", name);
        }
        for name in &self.missing {
            println!("no placeholder for constant: {}", name);
        }
        if self.exit_patched {
            println!("output calls inserted at exit call site");
        }
    }
}

/// Parameter and output-call substitution for one generated source
#[derive(Debug, Clone)]
pub struct ParameterSubstitution {
    simulation_name: String,
    constants: Vec<(String, Parameter)>,
    datasets: Vec<String>,
    mode: OutputMode,
}

impl ParameterSubstitution {
    /// New substitution for the simulation `<name>.cpp`
    pub fn new(simulation_name: &str, mode: OutputMode) -> Self {
        Self {
            simulation_name: simulation_name.to_string(),
            constants: Vec::new(),
            datasets: Vec::new(),
            mode,
        }
    }

    /// Declare the value of one constant
    pub fn add_constant<P: Into<Parameter>>(&mut self, name: &str, value: P) -> &mut Self {
        self.constants.push((name.to_string(), value.into()));
        self
    }

    /// Declare several constants at once
    pub fn add_constants(&mut self, pairs: &[(&str, Parameter)]) -> &mut Self {
        for (name, value) in pairs {
            self.constants.push(((*name).to_string(), *value));
        }
        self
    }

    /// Declare the datasets the solver should write out
    pub fn add_datasets(&mut self, names: &[&str]) -> &mut Self {
        self.datasets.extend(names.iter().map(|s| (*s).to_string()));
        self
    }

    /// Path of the generated source, `./<name>.cpp`
    pub fn source_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.cpp", self.simulation_name))
    }

    /// The output calls inserted in front of `ops_exit();`
    fn output_calls(&self) -> String {
        let mut calls = String::new();
        match self.mode {
            OutputMode::Text => {
                for dset in &self.datasets {
                    calls.push_str(&format!(
                        "ops_print_dat_to_txtfile({}_B0, \"{}.dat\");\n",
                        dset, dset
                    ));
                }
            }
            OutputMode::Hdf5 => {
                calls.push_str(&format!(
                    "ops_fetch_block_hdf5_file({}block00, \"{}.h5\");\n",
                    self.simulation_name, self.simulation_name
                ));
                for dset in &self.datasets {
                    calls.push_str(&format!(
                        "ops_fetch_dat_hdf5_file({}_B0, \"{}.h5\");\n",
                        dset, self.simulation_name
                    ));
                }
            }
        }
        calls
    }

    /// Apply the substitution to `source` and return the patched text
    /// together with a [`Report`].
    ///
    /// Placeholders of the form `CONST=Input;` are replaced with
    /// `CONST = value;`. Constants without a placeholder are skipped
    /// and recorded as missing. The first `ops_exit();` is prefixed
    /// with the output calls, unless they are already in place or no
    /// call is to be made. Text outside the markers is untouched.
    pub fn substitute_str(&self, source: &str) -> (String, Report) {
        let mut s = source.to_string();
        let mut report = Report::default();

        for (name, value) in &self.constants {
            let old = format!("{}=Input;", name);
            if s.contains(&old) {
                let new = format!("{} = {};", name, value.format());
                s = s.replace(&old, &new);
                report.substituted.push(name.clone());
            } else {
                report.missing.push(name.clone());
            }
        }

        let calls = self.output_calls();
        if !calls.is_empty() && s.contains(EXIT_MARKER) && !s.contains(&calls) {
            let patched = format!("{}{}", calls, EXIT_MARKER);
            s = s.replacen(EXIT_MARKER, &patched, 1);
            report.exit_patched = true;
        }

        (s, report)
    }

    /// Rewrite `./<name>.cpp` in place.
    ///
    /// # Errors
    /// Fails when the generated source cannot be read or written.
    /// Missing placeholders are not an error, see [`Report`].
    pub fn substitute_file(&self) -> Result<Report> {
        let path = self.source_path();
        let source = fs::read_to_string(&path).map_err(|source| SetupError::SourceFile {
            path: path.clone(),
            source,
        })?;
        let (patched, report) = self.substitute_str(&source);
        fs::write(&path, patched).map_err(|source| SetupError::SourceFile {
            path: path.clone(),
            source,
        })?;
        Ok(report)
    }

    /// Rewrite `./<name>.cpp` in place, and handle error
    pub fn substitute_file_unwrap(&self) {
        match self.substitute_file() {
            Ok(report) => {
                println!("Patching file {:?} was successfull.", self.source_path());
                report.print();
            }
            Err(e) => eprintln!(
                "Error while patching file {:?}. Error: {}",
                self.source_path(),
                e
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "\
#include \"opensbli.h\"
double gama;
gama=Input;
double dt;
dt=Input;
int niter;
niter=Input;
// main loop
run();
ops_exit();
";

    fn shock_substitution(mode: OutputMode) -> ParameterSubstitution {
        let mut sub = ParameterSubstitution::new("opensbli", mode);
        sub.add_constant("gama", 1.4);
        sub.add_constant("dt", 1e-1);
        sub.add_constant("niter", 5000);
        sub.add_datasets(&["rho", "rhoE"]);
        sub
    }

    #[test]
    fn constants_are_substituted() {
        let sub = shock_substitution(OutputMode::Hdf5);
        let (patched, report) = sub.substitute_str(SOURCE);
        assert!(patched.contains("gama = 1.400000;"));
        assert!(patched.contains("dt = 0.100000;"));
        assert!(patched.contains("niter = 5000;"));
        assert!(!patched.contains("=Input;"));
        assert_eq!(report.substituted, vec!["gama", "dt", "niter"]);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn missing_placeholder_is_skipped() {
        let mut sub = shock_substitution(OutputMode::Hdf5);
        sub.add_constant("Minf", 2.0);
        let (patched, report) = sub.substitute_str(SOURCE);
        assert!(!patched.contains("Minf"));
        assert_eq!(report.missing, vec!["Minf"]);
    }

    #[test]
    fn hdf5_mode_inserts_fetch_calls() {
        let sub = shock_substitution(OutputMode::Hdf5);
        let (patched, report) = sub.substitute_str(SOURCE);
        assert!(report.exit_patched);
        let expected = "ops_fetch_block_hdf5_file(opensbliblock00, \"opensbli.h5\");\n\
                        ops_fetch_dat_hdf5_file(rho_B0, \"opensbli.h5\");\n\
                        ops_fetch_dat_hdf5_file(rhoE_B0, \"opensbli.h5\");\n\
                        ops_exit();";
        assert!(patched.contains(expected));
        assert_eq!(patched.matches("ops_exit();").count(), 1);
    }

    #[test]
    fn text_mode_inserts_dump_calls() {
        let sub = shock_substitution(OutputMode::Text);
        let (patched, report) = sub.substitute_str(SOURCE);
        assert!(report.exit_patched);
        assert!(patched.contains("ops_print_dat_to_txtfile(rho_B0, \"rho.dat\");\n"));
        assert!(patched.contains("ops_print_dat_to_txtfile(rhoE_B0, \"rhoE.dat\");\n"));
        assert!(!patched.contains("hdf5"));
    }

    #[test]
    fn unrelated_text_is_untouched() {
        let sub = shock_substitution(OutputMode::Hdf5);
        let (patched, _) = sub.substitute_str(SOURCE);
        assert!(patched.contains("#include \"opensbli.h\"\n"));
        assert!(patched.contains("// main loop\nrun();\n"));
        assert!(patched.contains("double gama;\n"));
    }

    #[test]
    fn second_pass_is_a_noop() {
        let sub = shock_substitution(OutputMode::Hdf5);
        let (once, _) = sub.substitute_str(SOURCE);
        let (twice, report) = sub.substitute_str(&once);
        assert_eq!(once, twice);
        assert!(!report.exit_patched);
        assert_eq!(report.substituted.len(), 0);
        assert_eq!(report.missing.len(), 3);
    }

    #[test]
    fn empty_dataset_list_leaves_exit_untouched() {
        let mut sub = ParameterSubstitution::new("opensbli", OutputMode::Text);
        sub.add_constant("gama", 1.4);
        let (patched, report) = sub.substitute_str(SOURCE);
        assert!(!report.exit_patched);
        assert!(patched.contains("run();\nops_exit();"));
    }

    #[test]
    fn file_roundtrip() {
        // The simulation name may carry a path prefix, the source
        // lives next to it as `<name>.cpp`
        let dir = std::env::temp_dir().join("sbligen_substitute_test");
        std::fs::create_dir_all(&dir).unwrap();
        let sim = dir.join("opensbli");
        let sim = sim.to_str().unwrap();

        let mut sub = ParameterSubstitution::new(sim, OutputMode::Hdf5);
        sub.add_constant("gama", 1.4);
        sub.add_constant("dt", 1e-1);
        sub.add_constant("niter", 5000);
        sub.add_datasets(&["rho", "rhoE"]);

        std::fs::write(sub.source_path(), SOURCE).unwrap();
        let report = sub.substitute_file().unwrap();
        assert_eq!(report.substituted.len(), 3);
        let patched = std::fs::read_to_string(sub.source_path()).unwrap();
        assert!(patched.contains("gama = 1.400000;"));

        // Second in-place run leaves the file unchanged
        sub.substitute_file().unwrap();
        assert_eq!(std::fs::read_to_string(sub.source_path()).unwrap(), patched);
    }

    #[test]
    fn missing_file_is_an_error() {
        let sub = ParameterSubstitution::new("does_not_exist_here", OutputMode::Text);
        assert!(sub.substitute_file().is_err());
    }
}
