use crate::report::ScoreRow;

pub fn to_csv(rows: &[ScoreRow]) -> String {
    let mut output = String::new();
    output.push_str("name,feat/bug PR,doc PR,feat/bug issue,doc issue,total,rate\n");
    for row in rows {
        output.push_str(&format!(
            "{},{},{},{},{},{},{:.1}\n",
            row.name,
            row.feat_bug_pr_points,
            row.doc_pr_points,
            row.feat_bug_issue_points,
            row.doc_issue_points,
            row.total,
            row.rate
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_header_and_one_line_per_row() {
        let rows = vec![
            ScoreRow {
                name: "alice".to_string(),
                feat_bug_pr_points: 6,
                doc_pr_points: 10,
                feat_bug_issue_points: 6,
                doc_issue_points: 1,
                total: 23,
                rate: 88.5,
            },
            ScoreRow {
                name: "bob".to_string(),
                feat_bug_pr_points: 3,
                doc_pr_points: 0,
                feat_bug_issue_points: 0,
                doc_issue_points: 0,
                total: 3,
                rate: 11.5,
            },
        ];
        let rendered = to_csv(&rows);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "name,feat/bug PR,doc PR,feat/bug issue,doc issue,total,rate");
        assert_eq!(lines[1], "alice,6,10,6,1,23,88.5");
        assert_eq!(lines[2], "bob,3,0,0,0,3,11.5");
    }

    #[test]
    fn empty_rows_render_header_only() {
        let rendered = to_csv(&[]);
        assert_eq!(rendered.lines().count(), 1);
    }
}
