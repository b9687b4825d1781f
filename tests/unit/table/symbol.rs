//! Tests for symbol type codes, match types and pattern groups

#[cfg(test)]
mod tests {
    use clap::ValueEnum;
    use symrank::table::{MatchType, PatternGroup, SymbolType};

    #[test]
    fn test_symbol_type_codes_round_trip() {
        for code in 1..=13 {
            let symbol_type = SymbolType::from_code(code);
            assert!(!matches!(symbol_type, SymbolType::Unknown(_)));
            assert_eq!(symbol_type.code(), code);
        }
    }

    #[test]
    fn test_rank_relevant_codes() {
        assert_eq!(SymbolType::from_code(2), SymbolType::Consonant);
        assert_eq!(SymbolType::from_code(4), SymbolType::ConsonantVowel);
    }

    // Codes outside the known range are kept rather than rejected
    #[test]
    fn test_unknown_codes_are_preserved() {
        assert_eq!(SymbolType::from_code(0), SymbolType::Unknown(0));
        assert_eq!(SymbolType::from_code(99).code(), 99);
    }

    #[test]
    fn test_match_type_codes_and_names() {
        assert_eq!(MatchType::Exact.code(), 1);
        assert_eq!(MatchType::Possibility.code(), 2);
        assert_eq!(MatchType::Possibility.to_string(), "possibility");
        assert_eq!(MatchType::from_str("exact", true), Ok(MatchType::Exact));
    }

    #[test]
    fn test_empty_group() {
        let group = PatternGroup {
            pattern: "k".to_string(),
            rows: Vec::new(),
        };
        assert!(group.is_empty());
        assert_eq!(group.len(), 0);
    }
}
