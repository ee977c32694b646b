use std::io::{self, Write};

use roster_core::models::student::StudentRecord;

const RULE_WIDTH: usize = 50;

/// Write students as a fixed-width table.
pub fn write_table<W: Write>(out: &mut W, students: &[StudentRecord]) -> io::Result<()> {
    if students.is_empty() {
        writeln!(out, "No students to display.")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{:<10} {:<20} {:<5} Grades", "ID", "Name", "Age")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for student in students {
        writeln!(out, "{}", format_row(student))?;
    }
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    Ok(())
}

pub fn format_row(student: &StudentRecord) -> String {
    let grades = student
        .grades
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let mut row = format!(
        "{:<10} {:<20} {:<5} {}",
        student.id(),
        student.name,
        student.age,
        grades
    );
    if !student.grades.is_empty() {
        row.push_str(&format!(" (avg {:.1})", student.average_grade()));
    }
    row.trim_end().to_string()
}
