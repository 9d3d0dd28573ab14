#[cfg(test)]
mod tests {
    use crate::{
        DistanceAlgorithm, EditDistance, SuggestionStage, SymSpell, SymSpellConfig,
        SymSpellError, Verbosity, unicode_normalization_form_kc,
    };
    use std::io::{Cursor, Write};

    const SAMPLE_DICTIONARY: &str = "./data/frequency_dictionary_sample.txt";
    const SAMPLE_BIGRAMS: &str = "./data/frequency_bigram_sample.txt";

    fn symspell_with(words: &[(&str, i64)]) -> SymSpell {
        let mut symspell = SymSpell::new(2, 7, 1).unwrap();
        for (word, count) in words {
            symspell.create_dictionary_entry(word, *count, None);
        }
        symspell
    }

    fn sample_symspell() -> SymSpell {
        let mut symspell = SymSpell::new(2, 7, 1).unwrap();
        assert!(symspell.load_dictionary(SAMPLE_DICTIONARY, 0, 1, " ").unwrap());
        assert!(symspell.load_bigram_dictionary(SAMPLE_BIGRAMS, 0, 2, " ").unwrap());
        symspell
    }

    fn terms(suggestions: &[crate::Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.term.as_str()).collect()
    }

    #[test]
    fn test_lookup() {
        let edit_distance_max = 2;
        let symspell = sample_symspell();

        let typo = "hous";
        let correction = "house";
        let results = symspell
            .lookup(typo, Verbosity::Top, edit_distance_max, false, false)
            .unwrap();
        assert_eq!(1, results.len());
        assert_eq!(correction, results[0].term);
        assert_eq!(1, results[0].distance);
        assert_eq!(304113486, results[0].count);

        // case-insensitive lookup, but preserve original case in suggestion
        let typo = "Hous";
        let correction = "House";
        let results = symspell
            .lookup(typo, Verbosity::Top, edit_distance_max, false, true)
            .unwrap();
        assert_eq!(1, results.len());
        assert_eq!(correction, results[0].term);
        assert_eq!(1, results[0].distance);

        let result = symspell.lookup_top("whatevr", 1).unwrap().unwrap();
        assert_eq!("whatever", result.term);
        assert!(symspell.lookup_top("zzzzzzzz", 2).unwrap().is_none());
    }

    #[test]
    fn test_lookup_exact_match_first() {
        let symspell = symspell_with(&[("steam", 10), ("steams", 2)]);

        let results = symspell.lookup("steam", Verbosity::Top, 2, false, false).unwrap();
        assert_eq!(vec!["steam"], terms(&results));
        assert_eq!(0, results[0].distance);

        let results = symspell.lookup("steam", Verbosity::All, 2, false, false).unwrap();
        assert_eq!(vec!["steam", "steams"], terms(&results));
        assert_eq!(vec![0, 1], results.iter().map(|s| s.distance).collect::<Vec<_>>());
    }

    #[test]
    fn test_lookup_verbosity() {
        let symspell = symspell_with(&[("steam", 1), ("steams", 2), ("steem", 3)]);

        let top = symspell.lookup("steems", Verbosity::Top, 2, false, false).unwrap();
        let closest = symspell.lookup("steems", Verbosity::Closest, 2, false, false).unwrap();
        let all = symspell.lookup("steems", Verbosity::All, 2, false, false).unwrap();
        assert_eq!(vec!["steem"], terms(&top));
        assert_eq!(vec!["steem", "steams"], terms(&closest));
        assert_eq!(vec!["steem", "steams", "steam"], terms(&all));
    }

    #[test]
    fn test_lookup_shared_prefix_retains_counts() {
        let mut symspell = SymSpell::new(1, 3, 1).unwrap();
        symspell.create_dictionary_entry("pipe", 5, None);
        symspell.create_dictionary_entry("pips", 10, None);

        let results = symspell.lookup("pipe", Verbosity::All, 1, false, false).unwrap();
        assert_eq!(2, results.len());
        assert_eq!(("pipe", 5), (results[0].term.as_str(), results[0].count));
        assert_eq!(("pips", 10), (results[1].term.as_str(), results[1].count));

        let results = symspell.lookup("pips", Verbosity::All, 1, false, false).unwrap();
        assert_eq!(vec!["pips", "pipe"], terms(&results));

        // equal distance, ordered by count
        let results = symspell.lookup("pip", Verbosity::All, 1, false, false).unwrap();
        assert_eq!(vec!["pips", "pipe"], terms(&results));
        assert_eq!(vec![1, 1], results.iter().map(|s| s.distance).collect::<Vec<_>>());
    }

    #[test]
    fn test_lookup_most_frequent() {
        let symspell = symspell_with(&[("steama", 4), ("steamb", 6), ("steamc", 2)]);

        let results = symspell.lookup("stream", Verbosity::Top, 2, false, false).unwrap();
        assert_eq!(1, results.len());
        assert_eq!("steamb", results[0].term);
        assert_eq!(6, results[0].count);

        let results = symspell.lookup("streama", Verbosity::Top, 2, false, false).unwrap();
        assert_eq!(1, results.len());
        assert_eq!("steama", results[0].term);
        assert_eq!(1, results[0].distance);
    }

    #[test]
    fn test_lookup_closest_tke() {
        let symspell = symspell_with(&[("take", 300163845), ("tie", 1000), ("tree", 800)]);
        let results = symspell.lookup("tke", Verbosity::Closest, 2, false, false).unwrap();
        assert_eq!("take", results[0].term);
        assert!(results.iter().all(|s| s.distance == 1));
    }

    #[test]
    fn test_lookup_distance_algorithm() {
        let symspell = symspell_with(&[("abcd", 10)]);
        assert_eq!(DistanceAlgorithm::DamerauOsa, symspell.distance_algorithm());
        let results = symspell.lookup("abdc", Verbosity::Top, 2, false, false).unwrap();
        assert_eq!(1, results[0].distance);

        let mut symspell = SymSpell::with_config(SymSpellConfig {
            distance_algorithm: DistanceAlgorithm::Levenshtein,
            ..Default::default()
        })
        .unwrap();
        symspell.create_dictionary_entry("abcd", 10, None);
        let results = symspell.lookup("abdc", Verbosity::Top, 2, false, false).unwrap();
        assert_eq!(2, results[0].distance);
    }

    #[test]
    fn test_lookup_below_threshold() {
        let mut symspell = SymSpell::new(2, 7, 10).unwrap();
        symspell.create_dictionary_entry("pawn", 10, None);
        // deletes of a word are not words
        assert!(symspell.lookup("paw", Verbosity::Top, 0, false, false).unwrap().is_empty());
        assert!(symspell.lookup("awn", Verbosity::Top, 0, false, false).unwrap().is_empty());

        symspell.create_dictionary_entry("flame", 20, None);
        symspell.create_dictionary_entry("flam", 1, None);
        assert!(symspell.lookup("flam", Verbosity::Top, 0, false, false).unwrap().is_empty());
        assert_eq!(1, symspell.below_threshold_count());
    }

    #[test]
    fn test_lookup_transfer_casing() {
        let symspell = symspell_with(&[("steam", 1), ("i", 100)]);

        let cases = [
            ("Stream", "Steam"),
            ("StreaM", "SteaM"),
            ("STREAM", "STEAM"),
            ("I", "I"),
        ];
        for (typo, correction) in cases {
            let results = symspell.lookup(typo, Verbosity::Top, 2, false, true).unwrap();
            assert_eq!(correction, results[0].term, "{typo}");
        }
        // without casing transfer the input is taken as is
        assert!(symspell.lookup("STEAM", Verbosity::Top, 0, false, false).unwrap().is_empty());
    }

    #[test]
    fn test_lookup_include_unknown() {
        let symspell = symspell_with(&[("steam", 1)]);
        let results = symspell.lookup("qwertyuiop", Verbosity::Top, 2, true, false).unwrap();
        assert_eq!(1, results.len());
        assert_eq!("qwertyuiop", results[0].term);
        assert_eq!(3, results[0].distance);
        assert_eq!(0, results[0].count);

        let results = symspell.lookup("qwertyuiop", Verbosity::Top, 2, false, false).unwrap();
        assert!(results.is_empty());

        // an empty dictionary is not an error
        let empty = SymSpell::new(2, 7, 1).unwrap();
        assert!(empty.lookup("steam", Verbosity::All, 2, false, false).unwrap().is_empty());
        assert_eq!(1, empty.lookup("steam", Verbosity::All, 2, true, false).unwrap().len());
    }

    #[test]
    fn test_lookup_edit_distance_too_large() {
        let symspell = SymSpell::new(1, 7, 1).unwrap();
        assert!(matches!(
            symspell.lookup("steam", Verbosity::Top, 2, false, false),
            Err(SymSpellError::EditDistanceTooLarge { requested: 2, max: 1 })
        ));
        assert!(symspell.lookup_compound("steam", 2, false).is_err());
        assert!(symspell.word_segmentation("steam", 2, None).is_err());
    }

    #[test]
    fn test_lookup_suggestions_within_bound() {
        let symspell = sample_symspell();
        let mut edit_distance = EditDistance::new(DistanceAlgorithm::DamerauOsa);
        for typo in ["hous", "tke", "teh", "quik", "brwn", "lov", "sixht", "insipred", "couldnt"] {
            for max_edit_distance in 0..=2 {
                for verbosity in [Verbosity::Top, Verbosity::Closest, Verbosity::All] {
                    let results = symspell
                        .lookup(typo, verbosity, max_edit_distance, false, false)
                        .unwrap();
                    for suggestion in &results {
                        assert!(suggestion.distance <= max_edit_distance);
                        assert!(
                            edit_distance.distance(typo, &suggestion.term) <= max_edit_distance,
                            "{typo} {}",
                            suggestion.term
                        );
                    }
                    assert!(results.windows(2).all(|pair| pair[0] <= pair[1]));
                }
                let lookup = |verbosity| {
                    symspell
                        .lookup(typo, verbosity, max_edit_distance, false, false)
                        .unwrap()
                };
                let top = lookup(Verbosity::Top);
                let closest = lookup(Verbosity::Closest);
                let all = lookup(Verbosity::All);
                assert!(top.len() <= 1);
                assert!(closest.len() >= top.len());
                assert!(all.len() >= closest.len());
            }
        }
    }

    #[test]
    fn test_create_dictionary_entry_counts() {
        let mut symspell = SymSpell::new(2, 7, 1).unwrap();
        assert!(symspell.create_dictionary_entry("steama", 2, None));
        assert_eq!(2, symspell.lookup("steama", Verbosity::Top, 2, false, false).unwrap()[0].count);

        // already indexed, only the count changes
        let entry_count = symspell.entry_count();
        assert!(!symspell.create_dictionary_entry("steama", 3, None));
        assert_eq!(Some(5), symspell.word_frequency("steama"));
        assert_eq!(entry_count, symspell.entry_count());

        // counts saturate
        symspell.create_dictionary_entry("steamb", i64::MAX - 10, None);
        symspell.create_dictionary_entry("steamb", 11, None);
        assert_eq!(Some(i64::MAX), symspell.word_frequency("steamb"));
        assert_eq!(6, symspell.max_length());
        assert_eq!(2, symspell.word_count());
    }

    #[test]
    fn test_threshold_migration() {
        let mut symspell = SymSpell::new(2, 7, 5).unwrap();
        assert!(!symspell.create_dictionary_entry("pawn", 3, None));
        assert_eq!(1, symspell.below_threshold_count());
        assert_eq!(0, symspell.word_count());
        assert!(symspell.lookup("pawn", Verbosity::Top, 0, false, false).unwrap().is_empty());
        assert!(symspell.lookup("pawns", Verbosity::Top, 1, false, false).unwrap().is_empty());

        assert!(symspell.create_dictionary_entry("pawn", 3, None));
        assert_eq!(0, symspell.below_threshold_count());
        assert_eq!(Some(6), symspell.word_frequency("pawn"));
        let results = symspell.lookup("pawns", Verbosity::Top, 1, false, false).unwrap();
        assert_eq!("pawn", results[0].term);
        assert_eq!(6, results[0].count);

        symspell.create_dictionary_entry("rook", 1, None);
        assert_eq!(1, symspell.below_threshold_count());
        symspell.purge_below_threshold_words();
        assert_eq!(0, symspell.below_threshold_count());
        // purged words start counting from zero again
        assert!(!symspell.create_dictionary_entry("rook", 4, None));
    }

    #[test]
    fn test_zero_counts() {
        let mut symspell = SymSpell::new(2, 7, 1).unwrap();
        assert!(!symspell.create_dictionary_entry("zero", 0, None));
        assert!(!symspell.create_dictionary_entry("negative", -5, None));
        assert_eq!(0, symspell.word_count());
        assert_eq!(0, symspell.below_threshold_count());

        let mut symspell = SymSpell::new(2, 7, 0).unwrap();
        assert!(symspell.create_dictionary_entry("zero", 0, None));
        assert!(symspell.create_dictionary_entry("negative", -5, None));
        assert_eq!(Some(0), symspell.word_frequency("negative"));
        let results = symspell.lookup("zero", Verbosity::Top, 0, false, false).unwrap();
        assert_eq!(0, results[0].count);
    }

    #[test]
    fn test_delete_dictionary_entry() {
        let mut symspell = symspell_with(&[("stea", 1), ("steama", 2), ("steem", 3)]);
        assert_eq!(6, symspell.max_length());
        let results = symspell.lookup("steama", Verbosity::Top, 2, false, false).unwrap();
        assert_eq!("steama", results[0].term);

        assert!(symspell.delete_dictionary_entry("steama"));
        assert!(!symspell.delete_dictionary_entry("steama"));
        assert_eq!(5, symspell.max_length());
        assert_eq!(2, symspell.word_count());

        let results = symspell.lookup("steama", Verbosity::Top, 2, false, false).unwrap();
        assert_eq!("steem", results[0].term);
        assert_eq!(2, results[0].distance);

        let snapshot = symspell.snapshot();
        assert!(snapshot.deletes.values().flatten().all(|word| word.as_ref() != "steama"));
        assert!(snapshot.deletes.values().all(|words| !words.is_empty()));
    }

    #[test]
    fn test_invalid_construction() {
        assert!(matches!(
            SymSpell::new(2, 2, 1),
            Err(SymSpellError::InvalidPrefixLength {
                prefix_length: 2,
                max_dictionary_edit_distance: 2
            })
        ));
        assert!(SymSpell::new(0, 0, 1).is_err());
        assert!(matches!(
            SymSpell::new(2, 7, -1),
            Err(SymSpellError::NegativeCountThreshold(-1))
        ));
        assert!(matches!(
            SymSpell::with_config(SymSpellConfig { compact_level: 17, ..Default::default() }),
            Err(SymSpellError::InvalidCompactLevel(17))
        ));
        let config = SymSpellConfig {
            compact_level: 16,
            ..Default::default()
        };
        assert!(SymSpell::with_config(config).is_ok());

        // word probabilities need a positive corpus size
        for corpus_word_count in [0, -1] {
            let config = SymSpellConfig {
                corpus_word_count,
                ..Default::default()
            };
            assert!(matches!(
                SymSpell::with_config(config),
                Err(SymSpellError::InvalidCorpusWordCount(n)) if n == corpus_word_count
            ));
        }

        let symspell = SymSpell::default();
        assert_eq!(2, symspell.max_dictionary_edit_distance());
        assert_eq!(7, symspell.prefix_length());
        assert_eq!(1, symspell.count_threshold());
        assert_eq!(1_024_908_267_229, symspell.corpus_word_count());
    }

    #[test]
    fn test_staging() {
        let mut symspell = SymSpell::new(2, 7, 1).unwrap();
        let mut staging = SuggestionStage::new(128);
        assert!(symspell.create_dictionary_entry("steam", 2, Some(&mut staging)));
        assert!(!symspell.create_dictionary_entry("steam", 2, Some(&mut staging)));
        assert!(symspell.create_dictionary_entry("machine", 1, Some(&mut staging)));

        // words are known right away, deletes only after the commit
        assert_eq!(Some(4), symspell.word_frequency("steam"));
        assert_eq!(0, symspell.entry_count());
        assert!(symspell.lookup("steem", Verbosity::Top, 2, false, false).unwrap().is_empty());

        symspell.commit_staged(&mut staging);
        let entry_count = symspell.entry_count();
        assert!(entry_count > 0);
        let results = symspell.lookup("steem", Verbosity::All, 2, false, false).unwrap();
        assert_eq!(vec!["steam"], terms(&results));
        assert_eq!(4, results[0].count);

        // committing twice changes nothing
        symspell.commit_staged(&mut staging);
        assert_eq!(entry_count, symspell.entry_count());
        let again = symspell.lookup("steem", Verbosity::All, 2, false, false).unwrap();
        assert_eq!(results, again);
    }

    #[test]
    fn test_staging_deleted_word() {
        let mut symspell = SymSpell::new(2, 7, 1).unwrap();
        let mut staging = SuggestionStage::new(128);
        symspell.create_dictionary_entry("steam", 2, Some(&mut staging));
        symspell.create_dictionary_entry("machine", 1, Some(&mut staging));

        // deleted before its staged deletes reach the index
        assert!(symspell.delete_dictionary_entry("steam"));
        symspell.commit_staged(&mut staging);
        assert_eq!(None, symspell.word_frequency("steam"));

        for verbosity in [Verbosity::Top, Verbosity::Closest, Verbosity::All] {
            let results = symspell.lookup("steem", verbosity, 2, false, false).unwrap();
            assert!(results.is_empty());
        }
        let results = symspell.lookup("machne", Verbosity::Top, 2, false, false).unwrap();
        assert_eq!("machine", results[0].term);
        assert_eq!(1, results[0].count);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut symspell = SymSpell::new(2, 7, 5).unwrap();
        symspell.create_dictionary_entry("steam", 10, None);
        symspell.create_dictionary_entry("machine", 20, None);
        symspell.create_dictionary_entry("rare", 1, None);
        let snapshot = symspell.snapshot();

        let mut restored = SymSpell::new(2, 7, 5).unwrap();
        restored.restore(snapshot.clone());
        assert_eq!(symspell.word_count(), restored.word_count());
        assert_eq!(symspell.entry_count(), restored.entry_count());
        assert_eq!(7, restored.max_length());
        assert_eq!(
            symspell.lookup("steem", Verbosity::All, 2, false, false).unwrap(),
            restored.lookup("steem", Verbosity::All, 2, false, false).unwrap()
        );
        // below threshold words are not part of the snapshot
        assert_eq!(0, restored.below_threshold_count());
        assert_eq!(snapshot, restored.snapshot());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_snapshot_serde() {
        let symspell = symspell_with(&[("steam", 10), ("machine", 20)]);
        let json = serde_json::to_string(&symspell.snapshot()).unwrap();
        let snapshot: crate::Snapshot = serde_json::from_str(&json).unwrap();

        let mut restored = SymSpell::new(2, 7, 1).unwrap();
        restored.restore(snapshot);
        let results = restored.lookup("machne", Verbosity::Top, 2, false, false).unwrap();
        assert_eq!("machine", results[0].term);
        assert_eq!(20, results[0].count);
    }

    #[test]
    fn test_lookup_compound() {
        let edit_distance_max = 2;
        let symspell = symspell_with(&[
            ("can", 1242323499),
            ("you", 2996181025),
            ("read", 495656375),
            ("this", 3228469771),
        ]);

        let typo = "can yu readthis";
        let correction = "can you read this";
        let results = symspell.lookup_compound(typo, edit_distance_max, false).unwrap();
        assert_eq!(1, results.len());
        assert_eq!(correction, results[0].term);
        assert_eq!(2, results[0].distance);

        // preserve case
        let typo = "Can yu readThis";
        let correction = "Can you read This";
        let results = symspell.lookup_compound(typo, edit_distance_max, true).unwrap();
        assert_eq!(correction, results[0].term);
        assert_eq!(2, results[0].distance);

        let symspell = symspell_with(&[("the", 23135851162), ("quick", 60439126)]);
        let results = symspell.lookup_compound("thequick", edit_distance_max, false).unwrap();
        assert_eq!("the quick", results[0].term);
        assert_eq!(1, results[0].distance);
        assert!(results[0].distance < edit_distance_max + 1);

        // merge of a wrongly split word
        let symspell = symspell_with(&[("steam", 100), ("machine", 200)]);
        let results = symspell.lookup_compound("ste am machie", edit_distance_max, false).unwrap();
        assert_eq!("steam machine", results[0].term);
        assert_eq!(2, results[0].distance);

        // unknown words stay unchanged
        let results = symspell.lookup_compound("qwxz", edit_distance_max, false).unwrap();
        assert_eq!("qwxz", results[0].term);
        assert_eq!(0, results[0].distance);
        assert_eq!(0, results[0].count);
    }

    #[test]
    fn test_lookup_compound_bigrams() {
        let mut symspell = symspell_with(&[("the", 1000), ("love", 500)]);
        let results = symspell.lookup_compound("thelove", 2, false).unwrap();
        assert_eq!("the love", results[0].term);
        assert_eq!(1, results[0].distance);
        assert_eq!(0, results[0].count);

        // a bigram reconstructing the input gets a count above both words
        assert!(symspell.load_bigram_dictionary_line("the love 300", 0, 2, " "));
        assert_eq!(1, symspell.bigram_count());
        let results = symspell.lookup_compound("thelove", 2, false).unwrap();
        assert_eq!("the love", results[0].term);
        assert_eq!(1002, results[0].count);
    }

    #[test]
    fn test_lookup_compound_bigrams_with_single_correction() {
        // split halves rebuild the input: count above the single term correction
        let mut symspell = symspell_with(&[("the", 1000), ("love", 500), ("theglove", 50)]);
        let results = symspell.lookup_compound("thelove", 2, false).unwrap();
        assert_eq!("theglove", results[0].term);
        assert_eq!(50, results[0].count);

        assert!(symspell.load_bigram_dictionary_line("the love 10", 0, 2, " "));
        let results = symspell.lookup_compound("thelove", 2, false).unwrap();
        assert_eq!("the love", results[0].term);
        assert_eq!(1, results[0].distance);
        assert_eq!(52, results[0].count);

        // one split half is the single term correction
        let mut symspell = symspell_with(&[("a", 2000), ("love", 500)]);
        let results = symspell.lookup_compound("aloves", 2, false).unwrap();
        assert_eq!("love", results[0].term);
        assert_eq!(500, results[0].count);

        assert!(symspell.load_bigram_dictionary_line("a love 10", 0, 2, " "));
        let results = symspell.lookup_compound("aloves", 2, false).unwrap();
        assert_eq!("a love", results[0].term);
        assert_eq!(2, results[0].distance);
        assert_eq!(501, results[0].count);
    }

    #[test]
    fn test_lookup_compound_sample() {
        let symspell = sample_symspell();

        let typo = "whereis th elove hehad dated formuch of thepast who couqdn'tread in sixtgrade and ins pired him";
        let correction = "where is the love he had dated for much of the past who couldn't read in sixth grade and inspired him";
        let results = symspell.lookup_compound(typo, 2, false).unwrap();
        assert_eq!(1, results.len());
        assert_eq!(correction, results[0].term);

        let results = symspell.lookup_compound("can yu readthis", 2, false).unwrap();
        assert_eq!("can you read this", results[0].term);
        assert_eq!(2, results[0].distance);
    }

    #[test]
    fn test_word_segmentation() {
        let symspell = symspell_with(&[
            ("the", 23135851162),
            ("quick", 60439126),
            ("brown", 57521120),
            ("fox", 25585013),
        ]);

        let typo = "thequickbrownfox";
        let correction = "the quick brown fox";
        let result = symspell.word_segmentation(typo, 0, None).unwrap();
        assert_eq!(correction, result.segmented_string);
        assert_eq!(correction, result.corrected_string);
        assert_eq!(3, result.distance_sum);

        // correctly spaced input stays unchanged
        let result = symspell.word_segmentation(correction, 0, None).unwrap();
        assert_eq!(correction, result.segmented_string);
        assert_eq!(correction, result.corrected_string);
        assert_eq!(0, result.distance_sum);

        let result = symspell.word_segmentation("the\nquick brown", 0, None).unwrap();
        assert_eq!("the quick brown", result.corrected_string);
        assert_eq!(0, result.distance_sum);

        // whitespace runs never end up inside a word
        let result = symspell.word_segmentation("quick\t\tbrown", 0, None).unwrap();
        let words: Vec<&str> = result.corrected_string.split_whitespace().collect();
        assert_eq!(vec!["quick", "brown"], words);
        assert_eq!(0, result.distance_sum);

        // spell correction, the segmented string keeps the input spelling
        let result = symspell.word_segmentation("thequikbrownfox", 1, None).unwrap();
        assert_eq!("the quik brown fox", result.segmented_string);
        assert_eq!("the quick brown fox", result.corrected_string);
        assert_eq!(4, result.distance_sum);

        // capitalized words keep a capitalized correction
        let result = symspell.word_segmentation("TheQuick", 0, None).unwrap();
        assert_eq!("The Quick", result.corrected_string);

        let result = symspell.word_segmentation("", 0, None).unwrap();
        assert_eq!("", result.corrected_string);
        assert_eq!(0, result.distance_sum);

        // hyphens are removed
        let result = symspell.word_segmentation("quick-brown", 0, None).unwrap();
        assert_eq!("quick brown", result.corrected_string);
    }

    #[test]
    fn test_word_segmentation_punctuation() {
        let symspell = symspell_with(&[
            ("he", 1156711891),
            ("it", 2813163874),
            ("was", 1000000000),
        ]);

        //keep punctuation or apostrophe adjacent to previous word
        let result = symspell.word_segmentation("itwas,", 0, None).unwrap();
        assert_eq!("it was,", result.corrected_string);
        assert_eq!(2, result.distance_sum);

        let result = symspell.word_segmentation("he'sit", 0, None).unwrap();
        assert_eq!("he's it", result.corrected_string);

        let result = symspell.word_segmentation("ITWAS", 0, None).unwrap();
        assert_eq!("IT WAS", result.segmented_string);
        assert_eq!("It Was", result.corrected_string);
    }

    #[test]
    fn test_word_segmentation_sample() {
        let symspell = sample_symspell();
        let typo = "thequickbrownfoxjumpsoverthelazydog";
        let correction = "the quick brown fox jumps over the lazy dog";
        let result = symspell.word_segmentation(typo, 0, None).unwrap();
        assert_eq!(correction, result.segmented_string);
        assert_eq!(8, result.distance_sum);

        // ligatures are normalized
        let result = symspell.word_segmentation("theﬁnd", 0, None);
        assert!(result.is_ok());
    }

    #[test]
    fn test_normalization() {
        let typo = "scientiﬁc";
        let correction = "scientific";
        let result = unicode_normalization_form_kc(typo);
        assert_eq!(correction, result);
    }

    #[test]
    fn test_load_dictionary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "steam 40").unwrap();
        writeln!(file, "machine abc").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "lonely").unwrap();
        writeln!(file, "steam 2").unwrap();
        file.flush().unwrap();

        let mut symspell = SymSpell::new(2, 7, 1).unwrap();
        assert!(symspell.load_dictionary(file.path(), 0, 1, " ").unwrap());
        assert_eq!(3, symspell.word_count());
        assert_eq!(Some(42), symspell.word_frequency("steam"));
        // malformed count falls back to 1
        assert_eq!(Some(1), symspell.word_frequency("machine"));
        assert_eq!(Some(1), symspell.word_frequency("lonely"));
        let results = symspell.lookup("machne", Verbosity::Top, 2, false, false).unwrap();
        assert_eq!("machine", results[0].term);

        assert!(matches!(
            symspell.load_dictionary("./data/does_not_exist.txt", 0, 1, " "),
            Err(SymSpellError::Io(_))
        ));

        let mut symspell = SymSpell::new(2, 7, 1).unwrap();
        let reader = Cursor::new("steam\t7\nmachine\t3\n");
        assert!(symspell.load_dictionary_from_reader(reader, 0, 1, "\t").unwrap());
        assert_eq!(Some(7), symspell.word_frequency("steam"));

        let mut symspell = SymSpell::new(2, 7, 1).unwrap();
        assert!(!symspell.load_dictionary_from_reader(Cursor::new(""), 0, 1, " ").unwrap());
    }

    #[test]
    fn test_load_bigram_dictionary() {
        let mut symspell = SymSpell::new(2, 7, 1).unwrap();
        assert!(symspell.load_bigram_dictionary(SAMPLE_BIGRAMS, 0, 2, " ").unwrap());
        assert_eq!(8, symspell.bigram_count());

        // default separator needs two words and a count
        assert!(!symspell.load_bigram_dictionary_line("where 10", 0, 1, " "));
        assert!(!symspell.load_bigram_dictionary_line("where is many", 0, 2, " "));
        assert!(symspell.load_bigram_dictionary_line("steam machine\t12", 0, 1, "\t"));
        assert_eq!(9, symspell.bigram_count());
    }

    #[test]
    fn test_create_dictionary_from_corpus() {
        let mut symspell = SymSpell::new(2, 7, 1).unwrap();
        let corpus = Cursor::new("The quick, quick fox.\nThe fox's den\n");
        assert!(symspell.create_dictionary_from_reader(corpus).unwrap());
        assert_eq!(Some(2), symspell.word_frequency("the"));
        assert_eq!(Some(2), symspell.word_frequency("quick"));
        assert_eq!(Some(1), symspell.word_frequency("fox's"));
        assert_eq!(5, symspell.word_count());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "steam engine steam").unwrap();
        file.flush().unwrap();
        let mut symspell = SymSpell::new(2, 7, 1).unwrap();
        assert!(symspell.create_dictionary(file.path()).unwrap());
        assert_eq!(Some(2), symspell.word_frequency("steam"));
    }

    #[test]
    fn test_save_dictionary() {
        let symspell = symspell_with(&[("steam", 10), ("machine", 20), ("engine", 10)]);
        let file = tempfile::NamedTempFile::new().unwrap();
        symspell.save_dictionary(file.path(), " ").unwrap();

        let saved = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!("machine 20\nengine 10\nsteam 10\n", saved);

        let mut loaded = SymSpell::new(2, 7, 1).unwrap();
        assert!(loaded.load_dictionary(file.path(), 0, 1, " ").unwrap());
        assert_eq!(symspell.snapshot().words, loaded.snapshot().words);
    }

    #[test]
    fn test_concurrent_lookups() {
        let symspell = sample_symspell();
        let expected = symspell.lookup_compound("can yu readthis", 2, false).unwrap();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..10 {
                        let results =
                            symspell.lookup_compound("can yu readthis", 2, false).unwrap();
                        assert_eq!(expected, results);
                        let result = symspell.lookup_top("hous", 1).unwrap().unwrap();
                        assert_eq!("house", result.term);
                    }
                });
            }
        });
    }
}
