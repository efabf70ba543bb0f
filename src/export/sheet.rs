use chrono::{DateTime, Local, Utc};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::model::Submission;

/// Name of the single worksheet in the export file.
pub const SHEET_NAME: &str = "Submissions";

/// Column headers, in output order. One spreadsheet row per submission.
pub const COLUMNS: [&str; 12] = [
    "Submission ID",
    "Date",
    "First Name",
    "Last Name",
    "Age",
    "Phone",
    "Email",
    "Street Address",
    "City",
    "State",
    "ZIP Code",
    "Comments",
];

/// Renders a submission timestamp for the "Date" column, in local time.
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Builds the export workbook: a single "Submissions" sheet with a bold
/// header row and one row per submission, in the order given.
pub fn build_workbook(submissions: &[Submission]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    for (col, header) in COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }

    for (i, submission) in submissions.iter().enumerate() {
        write_row(sheet, (i + 1) as u32, submission)?;
    }

    Ok(workbook)
}

fn write_row(sheet: &mut Worksheet, row: u32, s: &Submission) -> Result<(), XlsxError> {
    sheet.write_number(row, 0, s.id as f64)?;
    sheet.write_string(row, 1, format_date(&s.timestamp))?;
    sheet.write_string(row, 2, &s.first_name)?;
    sheet.write_string(row, 3, &s.last_name)?;
    sheet.write_number(row, 4, f64::from(s.age))?;
    sheet.write_string(row, 5, &s.phone)?;
    sheet.write_string(row, 6, &s.email)?;
    sheet.write_string(row, 7, &s.street)?;
    sheet.write_string(row, 8, &s.city)?;
    sheet.write_string(row, 9, &s.state)?;
    sheet.write_string(row, 10, &s.zip)?;
    sheet.write_string(row, 11, &s.comments)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::model::SubmissionDraft;

    fn make_submission(id: u64) -> Submission {
        SubmissionDraft::new(
            "Ann".to_string(),
            "Smith".to_string(),
            30,
            "555-1000".to_string(),
            "a@x.com".to_string(),
            "1 Rd".to_string(),
            "X".to_string(),
            "CA".to_string(),
            "90001".to_string(),
            String::new(),
        )
        .unwrap()
        .into_submission(id, Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap())
    }

    #[test]
    fn column_count_is_twelve() {
        assert_eq!(COLUMNS.len(), 12);
        assert_eq!(COLUMNS[0], "Submission ID");
        assert_eq!(COLUMNS[11], "Comments");
    }

    #[test]
    fn format_date_shape() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap();
        let rendered = format_date(&ts);
        // Local-time rendering; assert the fixed shape rather than the zone.
        assert_eq!(rendered.len(), 19);
        assert_eq!(&rendered[4..5], "-");
        assert_eq!(&rendered[10..11], " ");
        assert_eq!(&rendered[13..14], ":");
    }

    #[test]
    fn empty_submission_list_builds() {
        let workbook = build_workbook(&[]);
        assert!(workbook.is_ok());
    }

    #[test]
    fn workbook_saves_to_nonempty_buffer() {
        let subs = vec![make_submission(1), make_submission(2)];
        let mut workbook = build_workbook(&subs).unwrap();
        let buf = workbook.save_to_buffer().unwrap();
        // xlsx files are zip archives; check the magic.
        assert!(buf.len() > 4);
        assert_eq!(&buf[..2], b"PK");
    }

    #[test]
    fn more_rows_produce_a_larger_file() {
        let one = vec![make_submission(1)];
        let many: Vec<Submission> = (1..=50).map(make_submission).collect();

        let small = build_workbook(&one).unwrap().save_to_buffer().unwrap();
        let large = build_workbook(&many).unwrap().save_to_buffer().unwrap();
        assert!(large.len() > small.len());
    }
}
