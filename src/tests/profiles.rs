use super::*;

#[test]
fn every_listed_name_resolves() {
    for name in names() {
        assert!(lookup(name).is_some(), "{name} should resolve");
    }
}

#[test]
fn unknown_name_does_not_resolve() {
    assert!(lookup("unbreakable").is_none());
}

#[test]
fn weak_profile_uses_lowercase_and_digits_only() {
    let config = lookup("weak").unwrap();

    assert_eq!(config.length, 8);
    assert!(config.lowercase);
    assert!(!config.uppercase);
    assert!(config.digits);
    assert!(!config.symbols);
    assert!(config.custom_charset.is_none());
}

#[test]
fn strong_profiles_enable_all_classes() {
    let strong = lookup("strong").unwrap();
    let very_strong = lookup("very_strong").unwrap();

    assert_eq!(strong.length, 16);
    assert_eq!(very_strong.length, 20);
    for config in [strong, very_strong] {
        assert!(config.lowercase && config.uppercase && config.digits && config.symbols);
    }
}
