//! Interactive console frontend for the CLI binary.
//!
//! Collects the circuit description from stdin prompts, runs the solver and
//! renders the report as aligned tables. Input parsing is fail-fast: the
//! first non-numeric answer aborts the run with a diagnostic, there is no
//! retry loop.

use std::io::{self, BufRead, Write};

use crate::circuit::{MeshCircuit, MeshId, Topology};
use crate::error::{MeshwiseError, Result};
use crate::report::Report;

/// Write one line to the console, surfacing the failure if the stream is
/// gone.
fn say(output: &mut impl Write, text: &str) -> Result<()> {
    writeln!(output, "{text}")
        .map_err(|e| MeshwiseError::invalid_input(format!("console write failed: {e}")))
}

/// Print a prompt and read one trimmed line from `input`.
fn ask(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<String> {
    write!(output, "{prompt}").and_then(|_| output.flush()).map_err(|e| {
        MeshwiseError::invalid_input(format!("console write failed: {e}"))
    })?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| MeshwiseError::invalid_input(format!("console read failed: {e}")))?;
    if read == 0 {
        return Err(MeshwiseError::invalid_input("unexpected end of input"));
    }
    Ok(line.trim().to_string())
}

fn ask_usize(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<usize> {
    let answer = ask(input, output, prompt)?;
    answer
        .parse()
        .map_err(|_| MeshwiseError::invalid_input(format!("'{answer}' is not a whole number")))
}

fn ask_f64(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<f64> {
    let answer = ask(input, output, prompt)?;
    answer
        .parse()
        .map_err(|_| MeshwiseError::invalid_input(format!("'{answer}' is not a number")))
}

/// Collect a full circuit description from interactive prompts.
///
/// Prompt order: mesh count, then per mesh its net source voltage and its
/// exclusive resistor values, then one shared-resistance question per mesh
/// pair where an answer of 0 means "no connection".
pub fn collect_circuit(input: &mut impl BufRead, output: &mut impl Write) -> Result<MeshCircuit> {
    let n = ask_usize(input, output, "Enter the total number of meshes: ")?;
    let mut circuit = MeshCircuit::new(n)?;

    say(output, "\n--- 1. Mesh setup ---")?;
    for i in 0..n {
        say(output, &format!("\n--- Mesh {} ---", i + 1))?;
        let voltage = ask_f64(
            input,
            output,
            &format!(
                "  Net source voltage in mesh {} (V) [positive if driving clockwise]: ",
                i + 1
            ),
        )?;
        circuit.set_mesh_source(i, voltage)?;

        let count = ask_usize(
            input,
            output,
            &format!("  How many exclusive (non-shared) resistors in mesh {}?: ", i + 1),
        )?;
        for k in 0..count {
            let value = ask_f64(
                input,
                output,
                &format!("    Exclusive resistor {} value (Ohm): ", k + 1),
            )?;
            circuit.register_resistor(
                format!("R{}_p{}", i + 1, k + 1),
                value,
                Topology::Exclusive(MeshId(i)),
            )?;
        }
    }

    say(output, "\n--- 2. Shared resistors ---")?;
    for i in 0..n {
        for j in (i + 1)..n {
            let value = ask_f64(
                input,
                output,
                &format!(
                    "  Shared resistance between mesh {} and mesh {} (Ohm) (0 if none): ",
                    i + 1,
                    j + 1
                ),
            )?;
            if value > 0.0 {
                circuit.register_resistor(
                    format!("R_c{}-{}", i + 1, j + 1),
                    value,
                    Topology::Shared(MeshId(i), MeshId(j)),
                )?;
            }
        }
    }

    Ok(circuit)
}

/// Render the mesh-current table, the per-component table and the total
/// power line with `precision` decimal places.
pub fn render_report(output: &mut impl Write, report: &Report, precision: usize) -> io::Result<()> {
    writeln!(output, "\n=== Analysis results ===")?;

    writeln!(output, "\n--- A. Mesh currents ---")?;
    writeln!(output, "{:<8} {:>14}", "Mesh", "Current (A)")?;
    for (i, current) in report.mesh_currents.as_slice().iter().enumerate() {
        writeln!(output, "{:<8} {:>14.precision$}", format!("I{}", i + 1), current)?;
    }

    writeln!(output, "\n--- B. Per-component results ---")?;
    writeln!(
        output,
        "{:<12} {:>12} {:>14} {:>16}",
        "Resistor", "Value (Ohm)", "Current (A)", "Power (W)"
    )?;
    for component in &report.components {
        match &component.figures {
            Ok(figures) => writeln!(
                output,
                "{:<12} {:>12.1} {:>14.precision$} {:>16.precision$}",
                component.name, component.resistance, figures.current, figures.power
            )?,
            Err(e) => writeln!(
                output,
                "{:<12} {:>12.1} {:>14} {:>16}   ({e})",
                component.name, component.resistance, "ERROR", "ERROR"
            )?,
        }
    }

    writeln!(output, "\n--- C. Total power ---")?;
    writeln!(
        output,
        "Total dissipated power: {:.precision$} W",
        report.total_power()
    )?;

    Ok(())
}

/// Run the whole interactive session: collect, solve, render.
pub fn run(precision: usize) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    writeln!(output, "=============================================").ok();
    writeln!(output, "  Meshwise - DC circuit mesh analysis").ok();
    writeln!(output, "=============================================").ok();
    writeln!(output, "Based on Kirchhoff's Voltage Law (KVL)\n").ok();

    let circuit = collect_circuit(&mut input, &mut output)?;
    let report = circuit.component_report()?;
    render_report(&mut output, &report, precision)
        .map_err(|e| MeshwiseError::invalid_input(format!("console write failed: {e}")))?;

    Ok(())
}
