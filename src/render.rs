use std::io;
use std::io::Write;

use itertools::Itertools;

use crate::assignment::Assignment;
use crate::truth_table::TruthTable;

const fn cell(value: bool) -> &'static str {
    if value {
        "T"
    } else {
        "F"
    }
}

/// Write the table as aligned plain text: symbols first, then one column per
/// formula, `T` and `F` for the values.
pub fn write_table<W: Write>(table: &TruthTable, writer: &mut W) -> io::Result<()> {
    let headers: Vec<String> = table
        .symbols()
        .names()
        .map(String::from)
        .chain(table.formulas().iter().cloned())
        .collect();

    let widths: Vec<usize> = headers.iter().map(|h| h.chars().count().max(1)).collect();

    writeln!(
        writer,
        "{}",
        headers
            .iter()
            .zip(&widths)
            .map(|(h, &w)| format!("{h:<w$}"))
            .join("  ")
            .trim_end()
    )?;
    writeln!(writer, "{}", widths.iter().map(|w| "-".repeat(*w)).join("  "))?;

    for row in table.rows() {
        let line = row
            .assignment
            .values()
            .iter()
            .chain(row.values)
            .zip(&widths)
            .map(|(v, &w)| format!("{:<w$}", cell(*v)))
            .join("  ");

        writeln!(writer, "{}", line.trim_end())?;
    }

    Ok(())
}

/// Write the table as csv with a header row, `1` and `0` for the values.
pub fn write_csv<W: Write>(table: &TruthTable, writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(
        table
            .symbols()
            .names()
            .map(String::from)
            .chain(table.formulas().iter().cloned()),
    )?;

    for row in table.rows() {
        csv_writer.write_record(
            row.assignment
                .values()
                .iter()
                .chain(row.values)
                .map(|&v| if v { "1" } else { "0" }),
        )?;
    }

    csv_writer.flush()?;

    Ok(())
}

/// Write one n-bit binary string per assignment.
pub fn write_assignments<W, I>(assignments: I, writer: &mut W) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Assignment>,
{
    for assignment in assignments {
        writeln!(writer, "{assignment}")?;
    }

    Ok(())
}
