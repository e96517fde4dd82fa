//! Beam groups of a time signature
//!
//! A `Groups` value lists, per position inside a measure, which beaming
//! action applies there. Positions are in 1/64th-note units; the action packs
//! three 4-bit beam modes (for 8th, 16th and 32nd level beams).

use serde::{Deserialize, Serialize};

use super::layout::BeamMode;

/// Beaming action at one measure position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupNode {
    pub pos: i32,
    pub action: i32,
}

impl GroupNode {
    pub fn new(pos: i32, action: i32) -> Self {
        Self { pos, action }
    }

    /// Beam mode for the given beam level (0 = eighths, 1 = 16ths, 2 = 32nds)
    pub fn beam_mode(&self, level: u32) -> BeamMode {
        let bits = (self.action >> (level * 4)) & 0xf;
        match bits {
            1 => BeamMode::Begin,
            2 => BeamMode::Begin32,
            3 => BeamMode::Begin64,
            _ => BeamMode::Auto,
        }
    }
}

/// Ordered list of beaming nodes
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Groups {
    nodes: Vec<GroupNode>,
}

impl Groups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, keeping the list sorted by position
    pub fn add_node(&mut self, node: GroupNode) {
        let index = self.nodes.partition_point(|n| n.pos <= node.pos);
        self.nodes.insert(index, node);
    }

    pub fn nodes(&self) -> &[GroupNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Beam mode at an exact position, `Auto` when no node is registered there
    pub fn beam_mode_at(&self, pos: i32, level: u32) -> BeamMode {
        self.nodes
            .iter()
            .find(|n| n.pos == pos)
            .map(|n| n.beam_mode(level))
            .unwrap_or(BeamMode::Auto)
    }
}

impl FromIterator<GroupNode> for Groups {
    fn from_iter<I: IntoIterator<Item = GroupNode>>(iter: I) -> Self {
        let mut groups = Groups::new();
        for node in iter {
            groups.add_node(node);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_stay_sorted() {
        let groups: Groups = [GroupNode::new(16, 1), GroupNode::new(0, 0), GroupNode::new(8, 0x10)]
            .into_iter()
            .collect();
        let positions: Vec<i32> = groups.nodes().iter().map(|n| n.pos).collect();
        assert_eq!(positions, vec![0, 8, 16]);
    }

    #[test]
    fn test_beam_mode_levels() {
        let node = GroupNode::new(8, 0x21);
        assert_eq!(node.beam_mode(0), BeamMode::Begin);
        assert_eq!(node.beam_mode(1), BeamMode::Begin32);
        assert_eq!(node.beam_mode(2), BeamMode::Auto);
    }

    #[test]
    fn test_equality_is_element_wise() {
        let a: Groups = [GroupNode::new(0, 1)].into_iter().collect();
        let b: Groups = [GroupNode::new(0, 1)].into_iter().collect();
        let c: Groups = [GroupNode::new(0, 2)].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.beam_mode_at(0, 0), BeamMode::Begin);
        assert_eq!(a.beam_mode_at(4, 0), BeamMode::Auto);
    }
}
