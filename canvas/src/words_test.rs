use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

#[test]
fn default_list_is_non_empty_and_unique() {
    let list = WordList::default();
    assert!(!list.is_empty());
    let unique: HashSet<&str> = DEFAULT_WORDS.iter().copied().collect();
    assert_eq!(unique.len(), list.len());
}

#[test]
fn default_words_are_lowercase_labels() {
    for word in DEFAULT_WORDS {
        assert_eq!(*word, word.to_lowercase(), "{word}");
        assert_eq!(*word, word.trim(), "{word}");
    }
}

#[test]
fn new_rejects_empty_list() {
    assert!(matches!(WordList::new(Vec::new()), Err(ConfigError::EmptyWordList)));
}

#[test]
fn new_drops_blank_entries() {
    assert!(matches!(WordList::new(vec![String::new(), "  ".into()]), Err(ConfigError::EmptyWordList)));
    let list = WordList::new(vec!["cat".into(), " ".into()]).unwrap();
    assert_eq!(list.len(), 1);
    assert!(list.contains("cat"));
}

#[test]
fn contains_is_case_sensitive() {
    let list = WordList::new(vec!["cat".into()]).unwrap();
    assert!(list.contains("cat"));
    assert!(!list.contains("Cat"));
}

#[test]
fn pick_always_returns_member() {
    let list = WordList::default();
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..200 {
        let word = list.pick(&mut rng);
        assert!(list.contains(word), "{word}");
    }
}

#[test]
fn pick_from_single_word_list() {
    let list = WordList::new(vec!["sun".into()]).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(list.pick(&mut rng), "sun");
    assert_eq!(list.pick(&mut rng), "sun");
}

#[test]
fn pick_covers_more_than_one_word() {
    let list = WordList::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    let seen: HashSet<String> = (0..100).map(|_| list.pick(&mut rng).to_owned()).collect();
    assert!(seen.len() > 1);
}
