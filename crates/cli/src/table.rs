//! Column-aligned result tables

use console::{measure_text_width, pad_str, Alignment};
use staffdir_search::{Employee, ScoredRecord};

const EMPLOYEE_HEADERS: [&str; 6] = ["ID", "Name", "Email", "Role", "Department", "Status"];

/// Render employees in the order given.
pub fn employee_table(employees: &[&Employee]) -> String {
    let rows: Vec<Vec<String>> = employees.iter().map(|e| employee_cells(e)).collect();
    render(&EMPLOYEE_HEADERS, &rows)
}

/// Render scored employees with their score and best field.
pub fn scored_table(scored: &[ScoredRecord<'_, Employee>]) -> String {
    let headers: Vec<&str> = EMPLOYEE_HEADERS
        .iter()
        .copied()
        .chain(["Score", "Matched"])
        .collect();

    let rows: Vec<Vec<String>> = scored
        .iter()
        .map(|s| {
            let mut cells = employee_cells(s.record);
            cells.push(format!("{:.3}", s.score));
            cells.push(s.field.map(|f| f.as_str()).unwrap_or("-").to_string());
            cells
        })
        .collect();

    render(&headers, &rows)
}

fn employee_cells(e: &Employee) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.full_name().trim().to_string(),
        e.email.clone(),
        e.role.clone(),
        e.department.clone(),
        e.status.clone(),
    ]
}

fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let rules: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();

    let mut out = String::new();
    push_line(&mut out, headers.iter().copied(), &widths);
    push_line(&mut out, rules.iter().map(String::as_str), &widths);
    for row in rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| pad_str(cell, *width, Alignment::Left, None).into_owned())
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
