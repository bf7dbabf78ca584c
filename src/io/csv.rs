use std::io::{self, Write};

use crate::sim::record::SimulationRecord;

/// Write a simulation record in CSV format.
///
/// Columns: time, angle_deg, omega_deg_s, sun_angle_deg, error_deg,
///          torque_commanded, torque_applied
pub fn write_record<W: Write>(writer: &mut W, record: &SimulationRecord) -> io::Result<()> {
    writeln!(
        writer,
        "time,angle_deg,omega_deg_s,sun_angle_deg,error_deg,\
         torque_commanded,torque_applied"
    )?;

    for s in record {
        writeln!(
            writer,
            "{:.4},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
            s.time,
            s.angle,
            s.omega,
            s.sun_angle,
            s.error,
            s.torque_commanded,
            s.torque_applied,
        )?;
    }

    Ok(())
}

/// Write a simulation record to a CSV file at the given path.
pub fn write_record_file(path: &str, record: &SimulationRecord) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_record(&mut file, record)?;
    file.flush()
}
