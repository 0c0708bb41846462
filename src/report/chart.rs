use crate::report::ScoreRow;

const MAX_BAR_WIDTH: usize = 50;

/// Renders a horizontal bar chart of total scores, one participant per
/// line, the highest score scaled to `MAX_BAR_WIDTH` columns.
pub fn to_chart(rows: &[ScoreRow]) -> String {
    let mut output = String::new();
    output.push_str("Repository Participation Scores\n");
    output.push_str(&format!("Total participants: {}\n\n", rows.len()));
    if rows.is_empty() {
        return output;
    }

    let name_width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);
    let max_total = rows.iter().map(|row| row.total).max().unwrap_or(0);
    for row in rows {
        let bar_len = if max_total == 0 {
            0
        } else {
            (row.total as usize * MAX_BAR_WIDTH).div_ceil(max_total as usize)
        };
        output.push_str(
            format!(
                "{name:<name_width$} | {bar} {total}\n",
                name = row.name,
                bar = "#".repeat(bar_len),
                total = row.total
            )
            .trim_end(),
        );
        output.push('\n');
    }
    output
}
