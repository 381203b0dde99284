use rebuild_bst::{TraversalError, TraversalOrder, Tree, Visit};
use test_case::test_case;

/// Sends the crate's `tracing` output to the test harness. Safe to call from every test.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn tree_of(keys: &[i32]) -> Tree<i32> {
    init_logging();
    keys.iter().copied().collect()
}

#[test_case(TraversalOrder::PreOrder, &[0, 3, 2, 1, 4] ; "pre order")]
#[test_case(TraversalOrder::InOrder, &[0, 1, 2, 3, 4] ; "in order")]
#[test_case(TraversalOrder::PostOrder, &[1, 2, 4, 3, 0] ; "post order")]
#[test_case(TraversalOrder::LevelOrder, &[0, 3, 2, 4, 1] ; "level order")]
fn traversal_orders(order: TraversalOrder, expected: &[i32]) {
    let tree = tree_of(&[0, 3, 2, 1, 4]);
    assert_eq!(tree.to_vec(order), expected);
}

#[test]
fn is_empty_until_first_insert() {
    let mut tree = tree_of(&[]);
    assert!(tree.is_empty());

    tree.insert(1);
    assert!(!tree.is_empty());
    assert_eq!(tree.len(), 1);
}

#[test]
fn contains_inserted_keys_only() {
    let tree = tree_of(&[0, 1, 2, 3, 4]);
    assert_eq!(tree.len(), 5);

    for key in 0..5 {
        assert!(tree.contains(&key), "missing {key}");
    }
    assert!(!tree.contains(&5));
}

#[test]
fn deleting_one_by_one() {
    let mut tree = tree_of(&[0, 1, 2, 3, 4]);
    let mut expected_len = 5;

    for key in [1, 4, 3, 2, 0] {
        assert!(tree.delete(&key));
        expected_len -= 1;
        assert_eq!(tree.len(), expected_len);
        assert!(!tree.contains(&key));
    }
    assert!(tree.is_empty());
}

#[test]
fn rebalance_builds_a_perfect_tree() {
    let tree_keys = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 14];
    let mut tree = tree_of(&tree_keys);
    assert_eq!(tree.len(), 15);
    assert_eq!(tree.height(), 15);

    tree.rebalance();

    assert_eq!(
        tree.to_vec(TraversalOrder::LevelOrder),
        [7, 3, 11, 1, 5, 9, 13, 0, 2, 4, 6, 8, 10, 12, 14]
    );
    assert_eq!(tree.len(), 15);
    assert_eq!(tree.height(), 4);
}

#[test_case(4 ; "just past the last order")]
#[test_case(10 ; "ten")]
#[test_case(u8::MAX ; "largest selector")]
fn unknown_order_selector_is_rejected(selector: u8) {
    init_logging();
    assert_eq!(
        TraversalOrder::try_from(selector),
        Err(TraversalError::UnknownOrder(selector))
    );
}

#[test_case("0" ; "digit")]
#[test_case("depth-first" ; "ambiguous")]
#[test_case("" ; "empty")]
fn unknown_order_name_is_rejected(name: &str) {
    init_logging();
    assert_eq!(
        name.parse::<TraversalOrder>(),
        Err(TraversalError::UnknownOrderName(name.to_owned()))
    );
}

#[test]
fn selector_errors_read_well() {
    assert_eq!(
        TraversalError::UnknownOrder(7).to_string(),
        "traversal order 7 not recognised, expected 0 (pre), 1 (in), 2 (post) or 3 (level)"
    );
    assert_eq!(
        TraversalError::UnknownOrderName("up".to_owned()).to_string(),
        "traversal order \"up\" not recognised"
    );
}

#[test_case(0 ; "pre order")]
#[test_case(1 ; "in order")]
#[test_case(2 ; "post order")]
#[test_case(3 ; "level order")]
fn apply_matches_to_vec(selector: u8) {
    let order = TraversalOrder::try_from(selector).unwrap();
    let tree = tree_of(&[0, 3, 2, 1, 4]);

    let mut from_outside = Vec::new();
    tree.apply(&mut |key: &i32| from_outside.push(*key), order);
    assert_eq!(from_outside, tree.to_vec(order));
}

#[test]
fn apply_accepts_visitor_objects() {
    struct Printer(String);

    impl Visit<i32> for Printer {
        fn visit(&mut self, key: &i32) {
            self.0.push_str(&format!("{key} "));
        }
    }

    let tree = tree_of(&[0, 3, 2, 1, 4]);
    let mut printer = Printer(String::new());
    tree.apply(&mut printer, TraversalOrder::default());
    assert_eq!(printer.0, "0 3 2 1 4 ");
}

#[test]
fn iterating_matches_pre_order() {
    let tree = tree_of(&[0, 3, 2, 1, 4]);
    let expected = tree.to_vec(TraversalOrder::PreOrder);

    let mut looped = Vec::new();
    for key in &tree {
        looped.push(*key);
    }
    let collected: Vec<i32> = tree.iter().copied().collect();

    assert_eq!(looped, expected);
    assert_eq!(collected, expected);
}

#[test]
fn empty_tree_never_fails() {
    let mut tree = tree_of(&[]);

    assert!(!tree.contains(&0));
    for order in TraversalOrder::ALL {
        assert!(tree.to_vec(order).is_empty());
    }
    tree.rebalance();
    assert!(tree.is_empty());
    assert_eq!(tree.iter().count(), 0);
}

#[test]
fn drawing_after_rebalance() {
    let mut tree = tree_of(&[1, 2, 3]);
    tree.rebalance();

    let drawing = tree.draw(rebuild_bst::draw::Layout::with_indent(3)).to_string();
    assert_eq!(drawing, "   3\n2\n   1\n");
}
