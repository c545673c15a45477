// src/output.rs
use crate::mc::mc_engine::ConvergencePoint;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

pub fn write_convergence<W: Write>(out: &mut W, rows: &[ConvergencePoint]) -> io::Result<()> {
    writeln!(out, "num_paths,mc_price,std_error,analytic_price,abs_error")?;
    for row in rows {
        writeln!(
            out,
            "{},{},{},{},{}",
            row.num_paths, row.mc_price, row.std_error, row.analytic_price, row.abs_error
        )?;
    }
    Ok(())
}

pub fn write_convergence_to_csv<P: AsRef<Path>>(
    filename: P,
    rows: &[ConvergencePoint],
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    write_convergence(&mut file, rows)
}

pub fn write_summary_to_csv<P: AsRef<Path>>(
    filename: P,
    summary_data: &[(&str, &str)],
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}
