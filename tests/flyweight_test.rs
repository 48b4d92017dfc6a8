//! Tests for the flyweight glyph factory: identity per key

use std::rc::Rc;

use rstest::rstest;

use patternbook::domain::{FlyweightPool, GlyphFactory};

#[test]
fn given_same_key_when_getting_twice_then_returns_same_instance() {
    let mut factory = GlyphFactory::new();

    let first = factory.get('A');
    let second = factory.get('A');

    assert!(Rc::ptr_eq(&first, &second));
}

#[rstest]
#[case('A', 'B')]
#[case('a', 'A')]
#[case(' ', '\n')]
#[case('é', 'e')]
fn given_distinct_keys_when_getting_then_returns_distinct_instances(
    #[case] k1: char,
    #[case] k2: char,
) {
    let mut factory = GlyphFactory::new();

    let first = factory.get(k1);
    let second = factory.get(k2);

    assert!(!Rc::ptr_eq(&first, &second));
    assert_eq!(first.symbol(), k1);
    assert_eq!(second.symbol(), k2);
}

#[test]
fn given_empty_factory_when_getting_a_a_b_then_holds_two_entries() {
    let mut factory = GlyphFactory::new();
    assert!(factory.is_empty());

    let a1 = factory.get('A');
    let a2 = factory.get('A');
    let _b = factory.get('B');

    assert_eq!(factory.len(), 2);
    assert!(Rc::ptr_eq(&a1, &a2));
    assert!(factory.contains('A'));
    assert!(factory.contains('B'));
    assert!(!factory.contains('C'));
}

#[test]
fn given_separate_factories_when_getting_same_key_then_instances_differ() {
    let mut left = GlyphFactory::new();
    let mut right = GlyphFactory::new();

    assert!(!Rc::ptr_eq(&left.get('A'), &right.get('A')));
}

#[test]
fn given_custom_dimensions_when_getting_then_glyph_carries_them() {
    let mut factory = GlyphFactory::with_dimensions(8, 16);

    let glyph = factory.get('x');

    assert_eq!((glyph.width(), glyph.height()), (8, 16));
}

#[test]
fn given_shared_glyph_when_displaying_with_different_sizes_then_state_is_unchanged() {
    let mut factory = GlyphFactory::new();
    let glyph = factory.get('B');

    assert_eq!(glyph.display(10), "B (point size 10)");
    assert_eq!(glyph.display(11), "B (point size 11)");
    assert_eq!(*glyph, *factory.get('B'));
}

#[test]
fn given_generic_pool_when_getting_string_keys_then_keys_are_tracked() {
    let mut pool: FlyweightPool<String, usize> = FlyweightPool::new();

    pool.get_or_insert_with("alpha".to_string(), |k| k.len());
    pool.get_or_insert_with("beta".to_string(), |k| k.len());
    let again = pool.get_or_insert_with("alpha".to_string(), |_| 0);

    assert_eq!(*again, 5);
    let mut keys: Vec<&String> = pool.keys().collect();
    keys.sort();
    assert_eq!(keys, vec!["alpha", "beta"]);
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct FontKey {
    family: String,
    bold: bool,
}

#[test]
fn given_key_without_clone_when_getting_twice_then_pool_stores_it_once() {
    let mut pool: FlyweightPool<FontKey, String> = FlyweightPool::new();
    let key = || FontKey {
        family: "serif".into(),
        bold: true,
    };

    let first = pool.get_or_insert_with(key(), |k| format!("{}-{}", k.family, k.bold));
    let second = pool.get_or_insert_with(key(), |_| unreachable!("entry already exists"));

    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(*first, "serif-true");
    assert_eq!(pool.len(), 1);
    assert!(pool.contains(&key()));
}
