use std::fmt::Display;

use pretty_assertions::assert_eq;
use redblack::{Color, Node, Tree};

fn render<K: Display>(node: Option<&Node<K>>) -> String {
    let Some(node) = node else {
        return ".".to_string();
    };
    let color = match node.color() {
        Color::Red => 'R',
        Color::Black => 'B',
    };
    match (node.left(), node.right()) {
        (None, None) => format!("{color}{}", node.key()),
        (left, right) => format!("{color}{}({},{})", node.key(), render(left), render(right)),
    }
}

fn build(keys: &[i32]) -> Tree<i32> {
    let mut tree = Tree::new();
    for &key in keys {
        tree.insert(key);
        assert_eq!(true, tree.validate().is_ok(), "after inserting {key}");
    }
    tree
}

#[test]
fn single_key_is_black_root() {
    let tree = build(&[10]);
    assert_eq!("B10", render(tree.root()));
}

#[test]
fn second_key_hangs_red_on_the_right() {
    let tree = build(&[10, 20]);
    assert_eq!("B10(.,R20)", render(tree.root()));
}

#[test]
fn straight_line_on_the_right_rotates_left() {
    let tree = build(&[10, 20, 30]);
    assert_eq!("B20(R10,R30)", render(tree.root()));
}

#[test]
fn straight_line_on_the_left_rotates_right() {
    let tree = build(&[30, 20, 10]);
    assert_eq!("B20(R10,R30)", render(tree.root()));
}

#[test]
fn zig_zag_on_the_right_rotates_twice() {
    let tree = build(&[10, 30, 20]);
    assert_eq!("B20(R10,R30)", render(tree.root()));
}

#[test]
fn zig_zag_on_the_left_rotates_twice() {
    let tree = build(&[30, 10, 20]);
    assert_eq!("B20(R10,R30)", render(tree.root()));
}

#[test]
fn red_uncle_recolors_up_to_the_root() {
    let tree = build(&[20, 10, 30, 40]);
    assert_eq!("B20(B10,B30(.,R40))", render(tree.root()));
}

#[test]
fn ten_key_sequence_keeps_its_shape() {
    let keys = [9, 5, 4, 6, 2, 8, 7, 3, 1, 0];
    let mut tree = Tree::new();
    let shapes: Vec<_> = keys
        .iter()
        .map(|&key| {
            tree.insert(key);
            render(tree.root())
        })
        .collect();

    assert_eq!(
        vec![
            "B9",
            "B9(R5,.)",
            "B5(R4,R9)",
            "B5(B4,B9(R6,.))",
            "B5(B4(R2,.),B9(R6,.))",
            "B5(B4(R2,.),B8(R6,R9))",
            "B5(B4(R2,.),R8(B6(.,R7),B9))",
            "B5(B3(R2,R4),R8(B6(.,R7),B9))",
            "B5(R3(B2(R1,.),B4),R8(B6(.,R7),B9))",
            "B5(R3(B1(R0,R2),B4),R8(B6(.,R7),B9))",
        ],
        shapes
    );
    assert_eq!(Ok(1), tree.validate());
    assert_eq!((0..10).collect::<Vec<_>>(), tree.iter().copied().collect::<Vec<_>>());
}

#[test]
fn thousand_increasing_keys_stay_logarithmic() {
    let tree: Tree<_> = (0..1000).collect();
    assert_eq!(1000, tree.len());
    let bound = 2.0 * ((tree.len() + 1) as f64).log2();
    assert_eq!(true, (tree.height() as f64) <= bound, "height {}", tree.height());
    assert_eq!(true, tree.validate().is_ok());
}

#[test]
fn thousand_decreasing_keys_stay_logarithmic() {
    let tree: Tree<_> = (0..1000).rev().collect();
    let bound = 2.0 * ((tree.len() + 1) as f64).log2();
    assert_eq!(true, (tree.height() as f64) <= bound, "height {}", tree.height());
    assert_eq!(Some(&0), tree.first());
    assert_eq!(Some(&999), tree.last());
}

#[test]
fn root_has_no_parent() {
    let tree = build(&[4, 2, 6, 1, 3, 5, 7]);
    let root = tree.root().unwrap();
    assert_eq!(true, root.parent().is_none());
    assert_eq!(Color::Black, root.color());
}
