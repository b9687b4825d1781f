//! Tests for frequency report reading and writing

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;
    use symrank::io::report::{
        LossyLines, ReportEntry, open_input, open_output, parse_line, read_report, write_report,
    };
    use tempfile::TempDir;

    fn entry(token: &str, count: u64) -> ReportEntry {
        ReportEntry {
            token: token.to_string(),
            count,
        }
    }

    #[test]
    fn test_parse_line_accepts_token_and_count() {
        assert_eq!(parse_line("ക 12"), Some(entry("ക", 12)));
        assert_eq!(parse_line("ക 12\r"), Some(entry("ക", 12)));
    }

    #[test]
    fn test_parse_line_rejects_malformed() {
        assert_eq!(parse_line("ക"), None);
        assert_eq!(parse_line("ക x"), None);
        assert_eq!(parse_line("ക -3"), None);
        assert_eq!(parse_line("ക 1 2"), None);
        assert_eq!(parse_line(" 4"), None);
    }

    // One bad line among good ones is skipped and counted
    #[test]
    fn test_read_report_skips_malformed_lines() -> symrank::Result<()> {
        let input = "ക 3\nbad\n\nമ 1\n";
        let report = read_report(Cursor::new(input))?;

        assert_eq!(report.entries, vec![entry("ക", 3), entry("മ", 1)]);
        assert_eq!(report.lines_read, 4);
        assert_eq!(report.skipped_lines, 1);
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_dropped() -> symrank::Result<()> {
        let mut input = b"a\xFFb 2\n".to_vec();
        input.extend_from_slice("ക 1".as_bytes());
        let report = read_report(Cursor::new(input))?;

        assert_eq!(report.entries, vec![entry("ab", 2), entry("ക", 1)]);
        Ok(())
    }

    #[test]
    fn test_lossy_lines_strip_terminators() -> symrank::Result<()> {
        let mut lines = LossyLines::new(Cursor::new("one\r\ntwo\n\nthree"));
        let collected = lines.by_ref().collect::<symrank::Result<Vec<_>>>()?;

        assert_eq!(collected, vec!["one", "two", "", "three"]);
        assert_eq!(lines.line_number(), 4);
        Ok(())
    }

    #[test]
    fn test_write_report_in_given_order() -> symrank::Result<()> {
        let mut buffer = Vec::new();
        write_report(&mut buffer, [("മ", 7), ("ക", 2)])?;
        assert_eq!(String::from_utf8_lossy(&buffer), "മ 7\nക 2\n");
        Ok(())
    }

    #[test]
    fn test_output_append_and_truncate() -> symrank::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("report.txt");

        write_report(&mut *open_output(Some(&path), false)?, [("ക", 1)])?;
        write_report(&mut *open_output(Some(&path), true)?, [("മ", 2)])?;
        assert_eq!(fs::read_to_string(&path)?, "ക 1\nമ 2\n");

        write_report(&mut *open_output(Some(&path), false)?, [("ത", 3)])?;
        assert_eq!(fs::read_to_string(&path)?, "ത 3\n");
        Ok(())
    }

    #[test]
    fn test_open_input_names_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");

        let error = open_input(&path).err().unwrap();
        assert!(error.to_string().contains("absent.txt"));
    }
}
