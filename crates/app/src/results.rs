use apex_core::model::QuizResultRecord;
use comfy_table::{Cell, Table};

pub const EMPTY_LOG_MESSAGE: &str = "No quiz results available yet.";

#[must_use]
pub fn results_table(records: &[QuizResultRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Date", "Subject", "Score", "Percentage", "Passed"]);

    for record in records {
        table.add_row(vec![
            Cell::new(record.date.format("%Y-%m-%d %H:%M")),
            Cell::new(&record.subject),
            Cell::new(format!("{}/{}", record.score, record.total_questions)),
            Cell::new(format!("{}%", record.percentage)),
            Cell::new(if record.passed() { "yes" } else { "no" }),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use apex_core::quiz::QuizOutcome;
    use apex_core::time::fixed_now;

    #[test]
    fn one_row_per_record() {
        let records = vec![
            QuizResultRecord::new("Physics", &QuizOutcome::tally(1, 5), fixed_now()),
            QuizResultRecord::new("Mathematics", &QuizOutcome::tally(5, 5), fixed_now()),
        ];
        let rendered = results_table(&records).to_string();
        assert!(rendered.contains("Physics"));
        assert!(rendered.contains("1/5"));
        assert!(rendered.contains("20%"));
        assert!(rendered.contains("100%"));
        assert!(rendered.contains("yes"));
    }
}
