//! Write declared equations to a LaTeX listing
//!
//! The listing is a plain record of what was declared, one display
//! equation per expression. Operator calls like `Der(u,x_j)` are kept
//! verbatim, the generator's own documentation pass owns any prettier
//! rendering.
use crate::equations::Equation;
use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writer for the equation listing
#[derive(Debug, Default)]
pub struct LatexWriter {
    file: Option<BufWriter<File>>,
}

impl LatexWriter {
    /// New writer without an open file
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `path` and write the document preamble with `title`.
    ///
    /// # Errors
    /// When the file cannot be created.
    pub fn open<P: AsRef<Path>>(&mut self, path: P, title: &str) -> Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        writeln!(file, "\\documentclass{{article}}")?;
        writeln!(file, "\\usepackage{{breqn}}")?;
        writeln!(file, "\\begin{{document}}")?;
        writeln!(file, "\\section*{{{}}}", title)?;
        self.file = Some(file);
        Ok(())
    }

    /// Write a paragraph of plain text. Without an open file this is
    /// a no-op.
    ///
    /// # Errors
    /// When the file cannot be written.
    pub fn write_string(&mut self, s: &str) -> Result<()> {
        if let Some(file) = &mut self.file {
            writeln!(file, "{}", s)?;
        }
        Ok(())
    }

    /// Write one equation as a display math block.
    ///
    /// # Errors
    /// When the file cannot be written.
    pub fn write_expression(&mut self, eq: &Equation) -> Result<()> {
        if let Some(file) = &mut self.file {
            writeln!(file, "\\begin{{dmath*}}")?;
            writeln!(file, "{} = {}", eq.lhs(), eq.rhs())?;
            writeln!(file, "\\end{{dmath*}}")?;
        }
        Ok(())
    }

    /// Close the document. A writer without an open file is left
    /// untouched.
    ///
    /// # Errors
    /// When the closing lines cannot be written.
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut file) = self.file.take() {
            writeln!(file, "\\end{{document}}")?;
            file.flush()?;
        }
        Ok(())
    }
}

impl Drop for LatexWriter {
    fn drop(&mut self) {
        // Best effort, errors surface through an explicit close
        let _ = self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_complete_document() {
        let path = std::env::temp_dir().join("sbligen_latex_test.tex");
        let mut latex = LatexWriter::new();
        latex.open(&path, "Einstein Expansion").unwrap();
        latex.write_string("Simulation equations").unwrap();
        latex
            .write_expression(&Equation::parse("Eq(Der(rho,t), - Skew(rho*u_j,x_j))").unwrap())
            .unwrap();
        latex
            .write_expression(&Equation::parse("Eq(u_i, rhou_i/rho)").unwrap())
            .unwrap();
        latex.close().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("\\documentclass{article}"));
        assert_eq!(text.matches("\\begin{dmath*}").count(), 2);
        assert!(text.contains("Der(rho,t) = - Skew(rho*u_j,x_j)"));
        assert!(text.trim_end().ends_with("\\end{document}"));
    }

    #[test]
    fn close_without_open_is_a_noop() {
        let mut latex = LatexWriter::new();
        assert!(latex.close().is_ok());
        assert!(latex.write_string("nothing").is_ok());
    }
}
