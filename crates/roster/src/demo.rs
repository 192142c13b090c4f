//! Menu text and the scripted demonstration run by `roster-demo`.
//!
//! Nothing here holds logic: it sequences calls into [`Roster`] and renders
//! the results as pretty JSON.

use std::io::Write;

use roster_core::{Student, StudentId};
use roster_store::RecordStore;
use serde_json::to_string_pretty;

use crate::roster::Roster;

/// The operations menu.
pub const MENU: &str = "\
=== STUDENT ROSTER ===
1. Admit student
2. List students
3. Find student by id
4. Update gpa
5. Change active flag
6. List active students
7. Average gpa
0. Exit";

/// The three students admitted by the demonstration.
pub fn demo_students() -> Vec<Student> {
    vec![
        Student::new(1, "Ana", 20, "Engineering", true, 8.5),
        Student::new(2, "Luis", 22, "Medicine", true, 9.2),
        Student::new(3, "Carlos", 19, "Law", true, 7.8),
    ]
}

/// Run the fixed demonstration against `roster`, writing to `out`.
pub fn run_demo<S: RecordStore>(roster: &mut Roster<S>, out: &mut impl Write) -> anyhow::Result<()> {
    section(out, "Admitting students")?;
    for student in demo_students() {
        writeln!(out, "{}", to_string_pretty(&roster.admit(student))?)?;
    }

    section(out, "Listing all students")?;
    writeln!(out, "{}", to_string_pretty(&roster.list_all())?)?;

    section(out, "Finding id 2")?;
    writeln!(out, "{}", to_string_pretty(&roster.find_by_id(StudentId(2)))?)?;

    section(out, "Updating gpa of id 3")?;
    writeln!(out, "{}", to_string_pretty(&roster.update_gpa(StudentId(3), 9.0))?)?;

    section(out, "Setting id 1 inactive")?;
    writeln!(
        out,
        "{}",
        to_string_pretty(&roster.update_active_flag(StudentId(1), false))?
    )?;

    section(out, "Listing active students")?;
    writeln!(out, "{}", to_string_pretty(&roster.list_active())?)?;

    section(out, "Average gpa")?;
    writeln!(out, "{}", roster.average_gpa())?;

    Ok(())
}

fn section(out: &mut impl Write, title: &str) -> std::io::Result<()> {
    writeln!(out, "\n--- {title} ---")
}
