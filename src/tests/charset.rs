use super::*;

#[test]
fn class_alphabets_agree_with_contains() {
    for class in CharacterClass::ALL {
        for c in class.alphabet().chars() {
            assert!(class.contains(c), "{} should contain {:?}", class.name(), c);
        }
    }
}

#[test]
fn class_alphabets_are_disjoint() {
    let union: std::collections::HashSet<char> = CharacterClass::ALL
        .iter()
        .flat_map(|class| class.alphabet().chars())
        .collect();
    let total: usize = CharacterClass::ALL
        .iter()
        .map(|class| class.alphabet().chars().count())
        .sum();

    assert_eq!(union.len(), total);
}

#[test]
fn symbols_cover_ascii_punctuation() {
    assert_eq!(SYMBOLS.chars().count(), 32);
    assert!(SYMBOLS.chars().all(|c| c.is_ascii_punctuation()));
}

#[test]
fn named_charsets_resolve() {
    let hex = named_charset("hexadecimal").unwrap();

    assert_eq!(hex.chars().count(), 16);
    assert!(named_charset("rot13").is_none());
}

#[test]
fn no_similar_charset_omits_lookalikes() {
    let charset = named_charset("no_similar").unwrap();

    for lookalike in ['i', 'l', '1', 'L', 'o', '0', 'O', 'I'] {
        assert!(!charset.contains(lookalike), "{lookalike} should be absent");
    }
}
