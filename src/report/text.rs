use crate::report::ScoreRow;

const HEADERS: [&str; 7] = [
    "name",
    "feat/bug PR",
    "doc PR",
    "feat/bug issue",
    "doc issue",
    "total",
    "rate",
];

/// Renders an aligned plain-text table with an `avg` row ahead of the
/// per-participant rows.
pub fn to_text(rows: &[ScoreRow]) -> String {
    let mut table: Vec<[String; 7]> = Vec::with_capacity(rows.len() + 1);
    table.push(average_row(rows));
    for row in rows {
        table.push([
            row.name.clone(),
            row.feat_bug_pr_points.to_string(),
            row.doc_pr_points.to_string(),
            row.feat_bug_issue_points.to_string(),
            row.doc_issue_points.to_string(),
            row.total.to_string(),
            format!("{:.1}%", row.rate),
        ]);
    }

    let mut widths: [usize; 7] = [0; 7];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.len();
    }
    for line in &table {
        for (i, cell) in line.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut output = String::new();
    push_line(
        &mut output,
        &HEADERS.map(|header| header.to_string()),
        &widths,
    );
    push_separator(&mut output, &widths);
    for line in &table {
        push_line(&mut output, line, &widths);
    }
    output
}

fn average_row(rows: &[ScoreRow]) -> [String; 7] {
    let n = rows.len() as f64;
    let avg = |value: u64| {
        if rows.is_empty() {
            0.0
        } else {
            value as f64 / n
        }
    };
    let rate_sum: f64 = rows.iter().map(|row| row.rate).sum();
    [
        "avg".to_string(),
        format!("{:.1}", avg(rows.iter().map(|r| r.feat_bug_pr_points).sum())),
        format!("{:.1}", avg(rows.iter().map(|r| r.doc_pr_points).sum())),
        format!(
            "{:.1}",
            avg(rows.iter().map(|r| r.feat_bug_issue_points).sum())
        ),
        format!("{:.1}", avg(rows.iter().map(|r| r.doc_issue_points).sum())),
        format!("{:.1}", avg(rows.iter().map(|r| r.total).sum())),
        format!(
            "{:.1}%",
            if rows.is_empty() { 0.0 } else { rate_sum / n }
        ),
    ]
}

fn push_line(output: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let mut parts = Vec::with_capacity(7);
    for (cell, &width) in cells.iter().zip(widths) {
        parts.push(format!("{cell:<width$}"));
    }
    output.push_str(parts.join(" | ").trim_end());
    output.push('\n');
}

fn push_separator(output: &mut String, widths: &[usize; 7]) {
    let parts: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    output.push_str(&parts.join("-+-"));
    output.push('\n');
}
