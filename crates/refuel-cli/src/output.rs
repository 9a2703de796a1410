//! Output formatting module

use refuel_domain::{Assignment, Dispatch};
use refuel_types::{OutputFormat, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{self, Write};

pub fn output_dispatch(output_format: OutputFormat, dispatch: &Dispatch) -> Result<()> {
    write_dispatch(&mut io::stdout().lock(), output_format, dispatch)
}

/// Write the batch result in the requested format
pub fn write_dispatch<W: Write>(out: &mut W, output_format: OutputFormat, dispatch: &Dispatch) -> Result<()> {
    match output_format {
        OutputFormat::Json => writeln!(out, "{}", render_json(&dispatch.assignments)?)?,
        OutputFormat::Table => write!(out, "{}", render_table(dispatch))?,
    }
    out.flush()?;
    Ok(())
}

/// Pretty-printed JSON array, tab indented
pub fn render_json(assignments: &[Assignment]) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    assignments.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn render_table(dispatch: &Dispatch) -> String {
    let mut out = String::new();
    out.push_str("\nRefuel Assignments\n");
    out.push_str("==================\n");

    if dispatch.assignments.is_empty() {
        out.push_str("  No vehicles to refuel.\n");
    } else {
        out.push_str(&format!(
            "{:<16} {:<10} {:>12} {:>10}\n",
            "Plate", "Employee", "Fuel added", "Price"
        ));
        out.push_str("-".repeat(51).as_str());
        out.push('\n');
        for a in &dispatch.assignments {
            out.push_str(&format!(
                "{:<16} {:<10} {:>10.2} L {:>10.3}\n",
                truncate_str(&a.licence_plate, 16),
                truncate_str(&a.employee, 10),
                a.fuel_added,
                a.price
            ));
        }
        out.push_str("-".repeat(51).as_str());
        out.push('\n');
        out.push_str(&format!(
            "{:<27} {:>10.2} L {:>10.3}\n",
            "Total",
            dispatch.total_fuel(),
            dispatch.total_price()
        ));
    }

    out.push_str("\nEmployee Pay\n");
    out.push_str("------------\n");
    out.push_str(&format!(
        "{:<10} {:>10} {:>6} {:>10}\n",
        "Employee", "Commission", "Tasks", "Paid"
    ));
    for employee in dispatch.crew.members() {
        out.push_str(&format!(
            "{:<10} {:>9.0}% {:>6} {:>10.4}\n",
            truncate_str(&employee.name, 10),
            employee.commission * 100.0,
            dispatch.task_count(&employee.name),
            employee.paid
        ));
    }

    out
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
