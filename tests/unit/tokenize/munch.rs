//! Tests for greedy longest-match tokenization of words and free text

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use symrank::tokenize::{MaximalMunch, Script, SymbolSet, Tokenizer};

    fn set(symbols: &[&str]) -> SymbolSet {
        symbols.iter().collect()
    }

    #[test]
    fn test_word_made_of_two_symbols() {
        let symbols = set(&["ഇ", "ത്"]);
        let tokens: Vec<&str> = MaximalMunch::new("ഇത്", &symbols).collect();
        assert_eq!(tokens, vec!["ഇ", "ത്"]);
    }

    // A known symbol that is also the prefix of a longer one keeps growing
    #[test]
    fn test_prefers_longest_symbol() {
        let symbols = set(&["ക", "ക്ഷ", "ാ"]);
        let tokens: Vec<&str> = MaximalMunch::new("ക്ഷാക", &symbols).collect();
        assert_eq!(tokens, vec!["ക്ഷ", "ാ", "ക"]);
    }

    // When a longer candidate fails the tokenizer falls back to the last full match
    #[test]
    fn test_rewinds_to_last_known_symbol() {
        let symbols = set(&["ab", "abcd", "c"]);
        let mut munch = MaximalMunch::new("abce", &symbols);
        let tokens: Vec<&str> = munch.by_ref().collect();
        assert_eq!(tokens, vec!["ab", "c"]);
        assert_eq!(munch.dropped(), 1);
    }

    #[test]
    fn test_unfinished_prefix_at_word_end() {
        let symbols = set(&["ab", "abcd"]);
        let mut munch = MaximalMunch::new("abc", &symbols);
        let tokens: Vec<&str> = munch.by_ref().collect();
        assert_eq!(tokens, vec!["ab"]);
        assert_eq!(munch.dropped(), 1);
    }

    // Unknown sequences vanish without an error
    #[test]
    fn test_unmatched_characters_are_dropped() {
        let symbols = set(&["ക"]);
        let mut munch = MaximalMunch::new("ഖകഗഘ", &symbols);
        let tokens: Vec<&str> = munch.by_ref().collect();
        assert_eq!(tokens, vec!["ക"]);
        assert_eq!(munch.dropped(), 3);
    }

    #[test]
    fn test_empty_inputs() {
        let symbols = set(&["ക"]);
        assert_eq!(MaximalMunch::new("", &symbols).count(), 0);

        let empty = SymbolSet::new();
        let mut munch = MaximalMunch::new("കക", &empty);
        assert_eq!(munch.by_ref().count(), 0);
        assert_eq!(munch.dropped(), 2);
    }

    #[test]
    fn test_tokens_are_produced_lazily() {
        let symbols = set(&["ക"]);
        let mut munch = MaximalMunch::new("കകക", &symbols);
        assert_eq!(munch.next(), Some("ക"));
        assert_eq!(munch.next(), Some("ക"));
        assert_eq!(munch.next(), Some("ക"));
        assert_eq!(munch.next(), None);
    }

    // Recognition restarts at every character outside the script
    #[test]
    fn test_text_resets_on_script_boundaries() {
        let tokenizer = Tokenizer::new(set(&["ഇ", "ത്", "ഇത്"]), Script::malayalam());
        let tokens: Vec<&str> = tokenizer.text("ഇ-ത് abc ഇത്.").collect();
        assert_eq!(tokens, vec!["ഇ", "ത്", "ഇത്"]);
    }

    #[test]
    fn test_text_counts_dropped_script_characters_only() {
        let tokenizer = Tokenizer::new(set(&["ക"]), Script::malayalam());
        let mut tokens = tokenizer.text("ക latin ഖ ക");
        let collected: Vec<&str> = tokens.by_ref().collect();
        assert_eq!(collected, vec!["ക", "ക"]);
        assert_eq!(tokens.dropped(), 1);
    }

    #[test]
    fn test_word_ignores_script_filtering() {
        let tokenizer = Tokenizer::new(set(&["ab"]), Script::malayalam());
        let tokens: Vec<&str> = tokenizer.word("abab").collect();
        assert_eq!(tokens, vec!["ab", "ab"]);
        assert_eq!(tokenizer.symbols().len(), 1);
    }

    const ALPHABET: [&str; 6] = ["ക", "കാ", "ത", "ത്", "ഇ", "ന്റെ"];

    proptest! {
        // Words built from symbols whose greedy split is unambiguous concatenate back
        #[test]
        fn prop_known_words_round_trip(
            parts in prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), 0..12)
        ) {
            let symbols = set(&ALPHABET);
            let word: String = parts.concat();
            let tokens: Vec<&str> = MaximalMunch::new(&word, &symbols).collect();
            prop_assert_eq!(&tokens.concat(), &word);
            prop_assert_eq!(tokens, parts);
        }
    }
}
