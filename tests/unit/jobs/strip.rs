//! Tests for removing symbol words from a word report

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use symrank::io::progress::ProgressManager;
    use symrank::jobs::strip::strip_symbols;
    use symrank::tokenize::SymbolSet;

    #[test]
    fn test_symbol_words_removed_order_kept() -> symrank::Result<()> {
        let symbols: SymbolSet = ["ക", "ഇ"].into_iter().collect();
        let input = "ക 5\nകാക 2\nഇ 1\nമല 9\n";
        let mut output = Vec::new();

        let summary = strip_symbols(
            Cursor::new(input),
            &mut output,
            &symbols,
            &mut ProgressManager::hidden(),
        )?;

        assert_eq!(String::from_utf8_lossy(&output), "കാക 2\nമല 9\n");
        assert_eq!(summary.kept, 2);
        assert_eq!(summary.removed, 2);
        assert_eq!(summary.lines_read, 4);
        Ok(())
    }

    #[test]
    fn test_malformed_lines_are_not_copied() -> symrank::Result<()> {
        let symbols = SymbolSet::new();
        let mut output = Vec::new();

        let summary = strip_symbols(
            Cursor::new("മല 9\nonly-token\n"),
            &mut output,
            &symbols,
            &mut ProgressManager::hidden(),
        )?;

        assert_eq!(String::from_utf8_lossy(&output), "മല 9\n");
        assert_eq!(summary.lines_skipped, 1);
        Ok(())
    }
}
