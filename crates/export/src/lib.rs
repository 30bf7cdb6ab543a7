//! Report writers for step results.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod text {
    use std::io::{self, Write};

    use kinematics_step::StepReport;

    /// Render the three result lines, each value to two decimals.
    pub fn render(report: &StepReport) -> String {
        format!(
            "Corrected New Velocity: {:.2} km/h\nCorrected New Distance: {:.2} km\nCorrected Remaining Fuel: {:.2} kg\n",
            report.new_velocity.value(),
            report.new_distance.value(),
            report.remaining_fuel.value(),
        )
    }

    pub fn write_report(writer: &mut dyn Write, report: &StepReport) -> io::Result<()> {
        writer.write_all(render(report).as_bytes())?;
        writer.flush()
    }
}

pub mod json {
    use std::io::{self, Write};

    use kinematics_step::{StepInputs, StepReport};
    use serde::Serialize;
    use serde_json::to_writer_pretty;

    #[derive(Serialize)]
    struct Envelope<'a> {
        inputs: &'a StepInputs,
        report: &'a StepReport,
    }

    /// Write inputs and the full report (SI intermediates and fuel status included) as pretty JSON.
    pub fn write_report(
        writer: &mut dyn Write,
        inputs: &StepInputs,
        report: &StepReport,
    ) -> io::Result<()> {
        to_writer_pretty(&mut *writer, &Envelope { inputs, report })?;
        writeln!(writer)?;
        writer.flush()
    }
}
