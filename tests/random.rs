use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;
use redblack::{Node, Tree};

/// Black nodes from the root (inclusive) down to every absent child.
fn nil_black_depths<K>(node: Option<&Node<K>>, above: usize, out: &mut Vec<usize>) {
    match node {
        None => out.push(above),
        Some(node) => {
            let here = above + usize::from(node.is_black());
            nil_black_depths(node.left(), here, out);
            nil_black_depths(node.right(), here, out);
        }
    }
}

fn no_red_red<K>(node: Option<&Node<K>>) -> bool {
    node.is_none_or(|node| {
        let children = [node.left(), node.right()];
        let ok_here = node.is_black() || children.iter().flatten().all(|c| c.is_black());
        ok_here && children.into_iter().all(no_red_red)
    })
}

#[test]
fn shuffled_keys() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    let mut keys: Vec<u32> = (0..5_000).collect();
    keys.shuffle(&mut rng);

    let mut tree = Tree::new();
    for (inserted, &key) in keys.iter().enumerate() {
        tree.insert(key);
        if inserted % 500 == 0 {
            assert_eq!(true, tree.validate().is_ok());
        }
    }

    assert_eq!(keys.len(), tree.len());
    assert_eq!(true, tree.iter().copied().eq(0..5_000));
    assert_eq!(true, no_red_red(tree.root()));

    let mut depths = Vec::new();
    nil_black_depths(tree.root(), 0, &mut depths);
    assert_eq!(true, depths.windows(2).all(|w| w[0] == w[1]));
    // The root is black and counted above; black_height leaves it out.
    assert_eq!(depths[0], tree.black_height() + 1);
}

#[test]
fn random_keys_with_duplicates() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let keys: Vec<u8> = (0..2_000).map(|_| rng.random_range(0..32)).collect();

    let mut tree = Tree::new();
    for &key in &keys {
        tree.insert(key);
        assert_eq!(true, tree.root().is_some_and(Node::is_black));
    }

    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(sorted, tree.iter().copied().collect::<Vec<_>>());
    assert_eq!(Ok(tree.black_height()), tree.validate());
    for key in 0..32 {
        assert_eq!(keys.contains(&key), tree.contains(&key));
    }
}
