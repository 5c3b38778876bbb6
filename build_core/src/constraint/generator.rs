//! Forbidden-pair generation from item metadata

use super::ForbiddenPairs;
use crate::catalog::Item;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Derive the forbidden-pair relation for an ordered item sequence
///
/// Indices are positions in `items`. The relation is the union of:
/// - items sharing a limit-group tag exclude each other and themselves
/// - each legendary item excludes itself
/// - boots exclude each other and themselves
pub fn generate_forbidden_pairs<'a, I>(items: I) -> ForbiddenPairs
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut pairs = ForbiddenPairs::new();
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    let mut legendary = Vec::new();
    let mut boots = Vec::new();

    for (index, item) in items.into_iter().enumerate() {
        // An item tagged twice with the same group joins it once
        let tags: BTreeSet<&str> = item.limit_groups().map(|g| g.as_str()).collect();
        for tag in tags {
            groups.entry(tag).or_default().push(index);
        }
        if item.item_type.is_legendary() {
            legendary.push(index);
        }
        if item.item_type.is_boots() {
            boots.push(index);
        }
    }

    for (tag, members) in &groups {
        forbid_all(&mut pairs, members);
        debug!(group = tag, members = members.len(), "limit group");
    }

    for &index in &legendary {
        pairs.forbid_repeat(index);
    }

    forbid_all(&mut pairs, &boots);

    debug!(
        groups = groups.len(),
        legendary = legendary.len(),
        boots = boots.len(),
        pairs = pairs.len(),
        "generated forbidden pairs"
    );

    pairs
}

/// Forbid every member from repeating and from pairing with any other member
fn forbid_all(pairs: &mut ForbiddenPairs, members: &[usize]) {
    for (pos, &i) in members.iter().enumerate() {
        pairs.forbid_repeat(i);
        for &j in &members[pos + 1..] {
            pairs.forbid(i, j);
        }
    }
}
