//! Breadth-first distance maps over a [`Topology`].

use std::collections::{BTreeMap, BTreeSet};

use crate::{Cell, Topology};

/// Shortest-step distances from a source cell.
///
/// Built by layered breadth-first expansion: the frontier starts at the
/// source with distance 0 and each round assigns the round index to cells
/// reached for the first time. A cell absent from the map is unreachable
/// from the source within the bound the map was built with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMap {
    source: Cell,
    distances: BTreeMap<Cell, u32>,
}

impl DistanceMap {
    /// Distances to every cell reachable from `source`.
    pub fn from_source(source: Cell, topology: &Topology) -> Self {
        Self::expand(source, topology, u32::MAX)
    }

    /// Distances to every cell within `limit` steps of `source`.
    pub fn bounded(source: Cell, topology: &Topology, limit: u32) -> Self {
        Self::expand(source, topology, limit)
    }

    fn expand(source: Cell, topology: &Topology, limit: u32) -> Self {
        let mut distances = BTreeMap::new();
        if !topology.contains(source) {
            return Self { source, distances };
        }

        distances.insert(source, 0);
        let mut frontier = BTreeSet::from([source]);
        let mut round = 0u32;

        while !frontier.is_empty() && round < limit {
            round += 1;
            let mut next = BTreeSet::new();
            for &cell in &frontier {
                let Some(moves) = topology.legal_moves(cell) else {
                    continue;
                };
                for &direction in moves {
                    let destination = cell.step(direction);
                    if !distances.contains_key(&destination) {
                        next.insert(destination);
                    }
                }
            }
            for &cell in &next {
                distances.insert(cell, round);
            }
            frontier = next;
        }

        Self { source, distances }
    }

    pub fn source(&self) -> Cell {
        self.source
    }

    /// Steps from the source to `cell`, or `None` when unreachable.
    pub fn distance(&self, cell: Cell) -> Option<u32> {
        self.distances.get(&cell).copied()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Reached cells and their distances in ascending cell order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.distances.iter().map(|(cell, distance)| (*cell, *distance))
    }
}

/// Step distance from `source` to the closest of `targets`, searching at
/// most `limit` layers out. Returns `None` when no target is that close,
/// including the trivial cases of an empty target list or a source that is
/// not part of the topology.
pub fn nearest_of(source: Cell, topology: &Topology, targets: &[Cell], limit: u32) -> Option<u32> {
    if targets.is_empty() || !topology.contains(source) {
        return None;
    }
    if targets.contains(&source) {
        return Some(0);
    }

    let mut visited = BTreeSet::from([source]);
    let mut frontier = BTreeSet::from([source]);

    for step in 1..=limit {
        let mut next = BTreeSet::new();
        for &cell in &frontier {
            let Some(moves) = topology.legal_moves(cell) else {
                continue;
            };
            for &direction in moves {
                let destination = cell.step(direction);
                if !visited.contains(&destination) {
                    next.insert(destination);
                }
            }
        }
        if next.is_empty() {
            return None;
        }
        if targets.iter().any(|target| next.contains(target)) {
            return Some(step);
        }
        visited.extend(next.iter().copied());
        frontier = next;
    }

    None
}
