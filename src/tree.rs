use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    error::{Error, Result},
    frequency::FrequencyTable,
    lengths::CodeLengths,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Leaf(u8),
    Internal { left: usize, right: usize },
}

/// Huffman merge tree stored in an arena, children are indices into `nodes`.
#[derive(Debug, Clone)]
pub struct MergeTree {
    nodes: Vec<Node>,
    weights: Vec<u64>,
    root: usize,
}

impl MergeTree {
    /// Merges the two lightest entries until one is left.
    ///
    /// Entries are ordered by `(weight, rank)`. A leaf ranks by its symbol
    /// value, the n-th merged group ranks `256 + n`, so on equal weight leaves
    /// go before groups and older groups before newer ones. The first entry
    /// taken becomes the left child.
    ///
    /// # Returns
    /// [None] if `freq` holds no symbols
    pub fn build(freq: &FrequencyTable) -> Option<MergeTree> {
        let mut tree = MergeTree {
            nodes: Vec::with_capacity(2 * freq.len()),
            weights: Vec::with_capacity(2 * freq.len()),
            root: 0,
        };
        let mut pending = BinaryHeap::with_capacity(freq.len());
        for (symbol, count) in freq.iter() {
            let index = tree.push(Node::Leaf(symbol), count);
            pending.push(Reverse((count, symbol as usize, index)));
        }

        let mut rank = 256;
        while let Some(Reverse((lweight, _, left))) = pending.pop() {
            let Some(Reverse((rweight, _, right))) = pending.pop() else {
                tree.root = left;
                return Some(tree);
            };
            let weight = lweight + rweight;
            let index = tree.push(Node::Internal { left, right }, weight);
            pending.push(Reverse((weight, rank, index)));
            rank += 1;
        }
        None
    }

    fn push(&mut self, node: Node, weight: u64) -> usize {
        self.nodes.push(node);
        self.weights.push(weight);
        self.nodes.len() - 1
    }

    pub fn root(&self) -> Node {
        self.nodes[self.root]
    }

    pub fn weight(&self) -> u64 {
        self.weights[self.root]
    }

    /// Depth of every leaf below the root.
    ///
    /// A tree made of a single leaf gives that leaf length 1.
    pub fn code_lengths(&self) -> Result<CodeLengths> {
        let mut lengths = CodeLengths::new();
        if let Node::Leaf(symbol) = self.root() {
            lengths.set(symbol, 1);
            return Ok(lengths);
        }

        let mut work = vec![(self.root, 0usize)];
        while let Some((index, depth)) = work.pop() {
            match self.nodes[index] {
                Node::Leaf(symbol) => {
                    let length = u8::try_from(depth)
                        .map_err(|_| Error::EncodeImpossible { symbol, depth })?;
                    lengths.set(symbol, length);
                }
                Node::Internal { left, right } => {
                    work.push((right, depth + 1));
                    work.push((left, depth + 1));
                }
            }
        }
        Ok(lengths)
    }
}

/// Code length of every symbol in `freq`, derived from its Huffman merge tree.
pub fn assign_lengths(freq: &FrequencyTable) -> Result<CodeLengths> {
    match MergeTree::build(freq) {
        Some(tree) => tree.code_lengths(),
        None => Ok(CodeLengths::new()),
    }
}
