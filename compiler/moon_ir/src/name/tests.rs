use super::*;

#[test]
fn test_name_layout() {
    let name = Name::new(5, 1000);
    assert_eq!(name.shard(), 5);
    assert_eq!(name.local(), 1000);
    assert_ne!(name, Name::new(4, 1000));
}

#[test]
fn test_name_empty_is_default() {
    assert_eq!(Name::EMPTY.shard(), 0);
    assert_eq!(Name::EMPTY.local(), 0);
    assert_eq!(Name::default(), Name::EMPTY);
}

#[test]
fn test_name_max_local() {
    let name = Name::new(15, Name::MAX_LOCAL);
    assert_eq!(name.shard(), 15);
    assert_eq!(name.local(), Name::MAX_LOCAL as usize);
}

#[test]
fn test_name_debug() {
    assert_eq!(format!("{:?}", Name::new(2, 7)), "Name(shard=2, local=7)");
}
