use pretty_assertions::assert_eq;

use super::*;

fn idx(raw: u32) -> FieldIndex {
    FieldIndex::from_raw(raw)
}

#[test]
fn short_names_hang_off_the_root() {
    let tree = RadixTree::from_names(["Id", "Name", "Age"]).unwrap();
    assert_eq!(tree.root().children().len(), 3);
    assert_eq!(tree.node_count(), 4);
    assert_eq!(tree.max_depth(), 1);
    assert!(!tree.root().is_terminal());
}

#[test]
fn children_are_sorted_by_key() {
    let tree = RadixTree::from_names(["Zeta", "Alpha", "Mid"]).unwrap();
    let keys: Vec<u64> = tree
        .root()
        .children()
        .iter()
        .map(|&c| tree.node(c).key())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
}

#[test]
fn shared_eight_char_prefix_shares_a_node() {
    let tree = RadixTree::from_names(["DecimalProp1", "DecimalProp2"]).unwrap();
    // root -> "DecimalP" -> {"rop1", "rop2"}
    assert_eq!(tree.root().children().len(), 1);
    let prefix = tree.node(tree.root().children()[0]);
    assert!(!prefix.is_terminal());
    assert_eq!(prefix.children().len(), 2);
    assert_eq!(tree.max_depth(), 2);
}

#[test]
fn prefix_name_marks_an_inner_node_terminal() {
    let tree = RadixTree::from_names(["Realllll", "ReallllllyLong"]).unwrap();
    let first = tree.node(tree.root().children()[0]);
    assert_eq!(first.field(), Some(idx(0)));
    assert_eq!(first.children().len(), 1);
}

#[test]
fn exact_walk_finds_only_full_names() {
    let tree = RadixTree::from_names(["Id", "Identity", "Realllll", "RealllllX"]).unwrap();
    assert_eq!(tree.get("Id"), Some(idx(0)));
    assert_eq!(tree.get("Identity"), Some(idx(1)));
    assert_eq!(tree.get("Realllll"), Some(idx(2)));
    assert_eq!(tree.get("RealllllX"), Some(idx(3)));
    assert_eq!(tree.get("Iden"), None);
    assert_eq!(tree.get(""), None);
    assert_eq!(tree.get("€"), None);
}

#[test]
fn duplicate_exact_name_is_rejected() {
    let mut tree = RadixTree::new();
    tree.insert("Name", idx(0)).unwrap();
    let before = tree.node_count();
    assert_eq!(
        tree.insert("Name", idx(1)),
        Err(FieldError::DuplicateField {
            name: "Name".to_string()
        })
    );
    assert_eq!(tree.node_count(), before);
    assert_eq!(tree.get("Name"), Some(idx(0)));
}

#[test]
fn unsupported_character_leaves_tree_untouched() {
    let mut tree = RadixTree::new();
    let err = tree.insert("LongPrefixThenΩ", idx(0)).unwrap_err();
    assert_eq!(
        err,
        FieldError::UnsupportedCharacter {
            name: "LongPrefixThenΩ".to_string(),
            ch: 'Ω',
            offset: 14,
        }
    );
    assert_eq!(tree.node_count(), 1);
}

#[test]
fn empty_name_is_rejected() {
    let mut tree = RadixTree::new();
    assert_eq!(tree.insert("", idx(0)), Err(FieldError::EmptyFieldName));
}

#[test]
fn depth_is_ceil_of_longest_name_over_eight() {
    let tree = RadixTree::from_names([
        "a",
        "exactly8",
        "ReallllllyLongggggggPropertyyyyyyyyy1",
    ])
    .unwrap();
    // 37 characters -> 5 chunks.
    assert_eq!(tree.max_depth(), 5);
}
