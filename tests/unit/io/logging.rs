//! Tests for log filter selection

#[cfg(test)]
mod tests {
    use symrank::io::configuration::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
    use symrank::io::logging::{default_filter, init};

    #[test]
    fn test_verbose_selects_debug_filter() {
        assert_eq!(default_filter(false), DEFAULT_LOG_FILTER);
        assert_eq!(default_filter(true), VERBOSE_LOG_FILTER);
    }

    // Only one global subscriber can exist per process
    #[test]
    fn test_second_init_keeps_existing_subscriber() {
        let _ = init(false);
        assert!(!init(true));
    }
}
