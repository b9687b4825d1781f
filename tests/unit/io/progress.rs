//! Tests for progress tracking

#[cfg(test)]
mod tests {
    use symrank::io::progress::ProgressManager;

    #[test]
    fn test_hidden_manager_still_counts_lines() {
        let mut progress = ProgressManager::hidden();
        assert!(!progress.is_enabled());

        progress.start_lines("corpus");
        for _ in 0..2_500 {
            progress.tick_line();
        }
        assert_eq!(progress.lines(), 2_500);
        progress.finish("done");
    }

    #[test]
    fn test_start_lines_resets_count() {
        let mut progress = ProgressManager::hidden();
        progress.start_lines("first");
        progress.tick_line();
        progress.start_lines("second");
        assert_eq!(progress.lines(), 0);
    }

    #[test]
    fn test_group_pass_without_display() {
        let mut progress = ProgressManager::hidden();
        progress.start_groups("weights", 3);
        progress.advance_group("ka");
        progress.advance_group("kha");
        progress.finish("weights updated");
        assert_eq!(progress.lines(), 0);
    }

    #[test]
    fn test_default_manager_is_enabled() {
        let mut progress = ProgressManager::default();
        assert!(progress.is_enabled());
        progress.finish("nothing started");
    }
}
