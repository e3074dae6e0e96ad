//! Classification of live hazard sightings into whole-cell groups.

use grid_nav::{Cell, DistanceMap};

use crate::env::HazardSighting;

/// Dynamic hazards split into dangerous and transiently-safe groups for one
/// decision cycle. Derived fresh from sightings every tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HazardSet {
    pub active: Vec<Cell>,
    pub edible: Vec<Cell>,
}

impl HazardSet {
    /// Resolves each sighting to a whole cell.
    ///
    /// Active sightings are already cell-centred and pass through. Edible
    /// sightings may sit between cells; they resolve to whichever rounding
    /// candidate is closest to the agent per the agent-rooted distance map,
    /// with ties and unreachable candidates broken by ascending cell order.
    pub fn classify(sightings: &[HazardSighting], distances: &DistanceMap) -> Self {
        let mut active = Vec::new();
        let mut edible = Vec::new();

        for sighting in sightings {
            if sighting.edible {
                if let Some(cell) = resolve_between_cells(sighting, distances) {
                    edible.push(cell);
                }
            } else {
                active.push(Cell::new(
                    sighting.x.round() as i32,
                    sighting.y.round() as i32,
                ));
            }
        }

        Self { active, edible }
    }

    /// Every classified hazard cell, active first.
    pub fn all(&self) -> impl Iterator<Item = Cell> + '_ {
        self.active.iter().chain(self.edible.iter()).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.edible.is_empty()
    }
}

/// Candidate whole-cell positions for one axis coordinate: the value itself
/// when integral, otherwise both neighbouring integers.
fn axis_candidates(coordinate: f64) -> Vec<i32> {
    if coordinate.fract() == 0.0 {
        vec![coordinate as i32]
    } else {
        vec![
            (coordinate - 0.5).round() as i32,
            (coordinate + 0.5).round() as i32,
        ]
    }
}

fn resolve_between_cells(sighting: &HazardSighting, distances: &DistanceMap) -> Option<Cell> {
    let xs = axis_candidates(sighting.x);
    let ys = axis_candidates(sighting.y);

    xs.iter()
        .flat_map(|&x| ys.iter().map(move |&y| Cell::new(x, y)))
        .map(|cell| (distances.distance(cell).unwrap_or(u32::MAX), cell))
        .min()
        .map(|(_, cell)| cell)
}
