use alloc::string::ToString;
use alloc::vec::Vec;

use quickcheck::QuickCheck;

use crate::{Map, Parser, TreeBuilder, Value};

/// Property: feeding a document in arbitrarily sized byte chunks yields
/// the same tree as parsing it in one call, even when chunk boundaries
/// split tokens, escapes, or multi-byte UTF-8 sequences.
#[test]
fn partition_equivalence() {
    fn prop(map: Map, splits: Vec<usize>) -> bool {
        let tree = Value::Object(map);
        let src = tree.to_string();
        let bytes = src.as_bytes();

        let mut parser = Parser::new(TreeBuilder::new());
        let mut idx = 0;
        for s in splits {
            if idx >= bytes.len() {
                break;
            }
            let size = 1 + s % (bytes.len() - idx);
            parser.feed_bytes(&bytes[idx..idx + size]).unwrap();
            idx += size;
        }
        if idx < bytes.len() {
            parser.feed_bytes(&bytes[idx..]).unwrap();
        }

        parser.finish().unwrap().into_value() == tree
    }

    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Map, Vec<usize>) -> bool);
}

/// Degenerate partition: one byte per feed call.
#[test]
fn single_byte_chunks() {
    fn prop(map: Map) -> bool {
        let tree = Value::Object(map);
        let src = tree.to_string();

        let mut parser = Parser::new(TreeBuilder::new());
        for b in src.as_bytes() {
            parser.feed_bytes(core::slice::from_ref(b)).unwrap();
        }
        parser.finish().unwrap().into_value() == tree
    }

    let tests = if is_ci::cached() { 1_000 } else { 100 };
    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Map) -> bool);
}
