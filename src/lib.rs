//! Fuel requirements for a list of module masses.
//!
//! The input holds one mass per line. It is summed twice: once with the
//! fuel each module needs directly, and once with the fuel that fuel needs
//! in turn.

pub mod error;
pub mod fuel;
pub mod input;

use std::io::Write;
use std::path::Path;

use log::debug;

pub use crate::error::{FuelError, Result};
pub use crate::fuel::{fuel_for_mass, fuel_requirement, Fuel, Mass};
pub use crate::input::Masses;

/// Where the masses are read from, relative to the working directory.
pub const INPUT_PATH: &str = "input";

/// Opens `path`, applies `calculate` to every mass in it and sums the results.
///
/// The file is closed again before returning.
pub fn sum_fuel<P, F>(path: P, calculate: F) -> Result<Fuel>
where
    P: AsRef<Path>,
    F: Fn(Mass) -> Fuel,
{
    let path = path.as_ref();
    let mut masses = Masses::open(path)?;

    let total = itertools::process_results(&mut masses, |masses| {
        masses
            .map(&calculate)
            .try_fold(0, |total: Fuel, fuel| total.checked_add(fuel))
    })?
    .ok_or_else(|| FuelError::Overflow {
        path: path.to_path_buf(),
    })?;

    debug!(
        "{}: {} lines, total fuel {}",
        path.display(),
        masses.lines_read(),
        total
    );
    Ok(total)
}

/// Writes both labeled sums, running the second pass only after the first
/// has been reported.
pub fn run<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> anyhow::Result<()> {
    use anyhow::Context;

    let path = path.as_ref();

    let direct = sum_fuel(path, fuel_for_mass).context("summing fuel for module masses")?;
    writeln!(out, "1-1:\n{}", direct)?;

    let recursive =
        sum_fuel(path, fuel_requirement).context("summing fuel including added fuel")?;
    writeln!(out, "1-2:\n{}", recursive)?;

    Ok(())
}
