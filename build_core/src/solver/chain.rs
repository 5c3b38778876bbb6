//! ChoiceChain - Persistent list of chosen indices with shared tails

use std::rc::Rc;

#[derive(Debug)]
struct ChainNode {
    index: usize,
    prev: ChoiceChain,
}

/// Append-only list of item indices
///
/// Each DP cell stores the chain of the cell it extends plus one index, so
/// extending a chain is O(1) and cells reached from the same predecessor
/// share its nodes.
#[derive(Debug, Clone, Default)]
pub struct ChoiceChain {
    head: Option<Rc<ChainNode>>,
    len: usize,
}

impl ChoiceChain {
    pub fn empty() -> Self {
        ChoiceChain::default()
    }

    /// New chain with `index` appended; `self` is unchanged
    pub fn push(&self, index: usize) -> Self {
        ChoiceChain {
            head: Some(Rc::new(ChainNode {
                index,
                prev: self.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Indices from the most recently appended back to the first
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            node: self.head.as_deref(),
        }
    }

    /// Indices in the order they were appended
    pub fn to_vec(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.iter().collect();
        indices.reverse();
        indices
    }
}

// Unlinks unshared nodes iteratively so long chains do not overflow the stack
impl Drop for ChoiceChain {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(node) = head {
            match Rc::try_unwrap(node) {
                Ok(mut node) => head = node.prev.head.take(),
                Err(_) => break,
            }
        }
    }
}

pub struct Iter<'a> {
    node: Option<&'a ChainNode>,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let node = self.node?;
        self.node = node.prev.head.as_deref();
        Some(node.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_original() {
        let base = ChoiceChain::empty().push(2);
        let a = base.push(0);
        let b = base.push(1);

        assert_eq!(base.to_vec(), vec![2]);
        assert_eq!(a.to_vec(), vec![2, 0]);
        assert_eq!(b.to_vec(), vec![2, 1]);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_iter_newest_first() {
        let chain = ChoiceChain::empty().push(5).push(5).push(1);
        assert_eq!(chain.iter().collect::<Vec<_>>(), vec![1, 5, 5]);
    }

    #[test]
    fn test_tails_are_shared() {
        let base = ChoiceChain::empty().push(7);
        let extended = base.push(8);
        let base_node = base.head.as_ref().unwrap();
        let shared = extended.head.as_ref().unwrap().prev.head.as_ref().unwrap();
        assert!(Rc::ptr_eq(base_node, shared));
    }

    #[test]
    fn test_long_chain_drops() {
        let mut chain = ChoiceChain::empty();
        for _ in 0..500_000 {
            chain = chain.push(0);
        }
        assert_eq!(chain.len(), 500_000);
        drop(chain);
    }

    #[test]
    fn test_drop_keeps_shared_tail() {
        let base = ChoiceChain::empty().push(1).push(2);
        let extended = base.push(3);
        drop(extended);
        assert_eq!(base.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_empty() {
        let chain = ChoiceChain::empty();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert!(chain.to_vec().is_empty());
    }
}
