//! Spatial lookups for obstacle and magic-gate point sets.
//!
//! This module provides:
//!
//! - **PointIndex**: grid-hashed point set answering "is any stored point within
//!   distance `d` of this query" in any number of dimensions
//! - **MagicGates**: placement index paired with the teleport destinations
//!
//! Points are bucketed into axis-aligned unit cells. A query visits only the
//! cells overlapping the query ball, and drops to a linear scan when that
//! neighbourhood would contain more cells than there are points (which is the
//! usual case in high dimensions).

use std::collections::HashMap;

use crate::geometry::{vector_norm, Position};

/// Edge length of the hashing cells. Matches the obstacle clearance distance.
const CELL_SIZE: f64 = 1.0;

#[derive(Debug, Clone, Default)]
pub struct PointIndex {
    points: Vec<Position>,
    /// Map from cell coordinates to indices into `points`
    cells: HashMap<Vec<i64>, Vec<usize>>,
}

impl PointIndex {
    /// Build an index over `points`. Callers validate dimensions beforehand.
    pub fn new(points: Vec<Position>) -> Self {
        let mut cells: HashMap<Vec<i64>, Vec<usize>> = HashMap::new();
        for (idx, point) in points.iter().enumerate() {
            cells.entry(cell_of(point)).or_default().push(idx);
        }
        Self { points, cells }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Position] {
        &self.points
    }

    /// True when some stored point lies at Euclidean distance `<= distance` from `query`.
    pub fn any_within(&self, query: &[f64], distance: f64) -> bool {
        if self.points.is_empty() || distance < 0.0 {
            return false;
        }

        let ranges: Vec<(i64, i64)> = query
            .iter()
            .map(|&q| (cell_coord(q - distance), cell_coord(q + distance)))
            .collect();
        let neighbourhood = ranges
            .iter()
            .try_fold(1usize, |acc, (lo, hi)| {
                acc.checked_mul(usize::try_from(hi.saturating_sub(*lo).saturating_add(1)).ok()?)
            });

        match neighbourhood {
            Some(count) if count <= self.points.len() => self.scan_cells(query, distance, &ranges),
            _ => self.scan_all(query, distance),
        }
    }

    fn scan_all(&self, query: &[f64], distance: f64) -> bool {
        self.points
            .iter()
            .any(|point| within(point, query, distance))
    }

    fn scan_cells(&self, query: &[f64], distance: f64, ranges: &[(i64, i64)]) -> bool {
        let mut cell: Vec<i64> = ranges.iter().map(|(lo, _)| *lo).collect();
        loop {
            if let Some(indices) = self.cells.get(&cell) {
                if indices
                    .iter()
                    .any(|&idx| within(&self.points[idx], query, distance))
                {
                    return true;
                }
            }
            // Odometer-style increment over the cell ranges.
            let mut axis = 0;
            loop {
                if axis == cell.len() {
                    return false;
                }
                if cell[axis] < ranges[axis].1 {
                    cell[axis] += 1;
                    break;
                }
                cell[axis] = ranges[axis].0;
                axis += 1;
            }
        }
    }
}

/// Teleport points: landing exactly on a placement moves the walker to one of
/// the destinations.
#[derive(Debug, Clone)]
pub struct MagicGates {
    placements: PointIndex,
    destinations: Vec<Position>,
}

impl MagicGates {
    pub fn new(placements: Vec<Position>, destinations: Vec<Position>) -> Self {
        Self {
            placements: PointIndex::new(placements),
            destinations,
        }
    }

    /// True when `position` coincides with a gate placement.
    pub fn is_gate(&self, position: &[f64]) -> bool {
        self.placements.any_within(position, 0.0)
    }

    pub fn placements(&self) -> &[Position] {
        self.placements.points()
    }

    pub fn destinations(&self) -> &[Position] {
        &self.destinations
    }
}

fn cell_coord(value: f64) -> i64 {
    (value / CELL_SIZE).floor() as i64
}

fn cell_of(point: &[f64]) -> Vec<i64> {
    point.iter().map(|&v| cell_coord(v)).collect()
}

fn within(point: &[f64], query: &[f64], distance: f64) -> bool {
    let diff: Vec<f64> = point.iter().zip(query).map(|(p, q)| p - q).collect();
    vector_norm(&diff) <= distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_within_uses_inclusive_bound() {
        let index = PointIndex::new(vec![vec![0.0, 1.0], vec![0.0, -1.0]]);
        assert!(index.any_within(&[0.0, 0.0], 1.0));
        assert!(index.any_within(&[1.0, 1.0], 1.0));
        assert!(!index.any_within(&[1.0, 0.0], 1.0));
        assert!(!index.any_within(&[2.0, 1.0], 1.0));
    }

    #[test]
    fn zero_distance_matches_exact_points_only() {
        let index = PointIndex::new(vec![vec![3.0, -2.0]]);
        assert!(index.any_within(&[3.0, -2.0], 0.0));
        assert!(!index.any_within(&[3.0, -2.5], 0.0));
    }

    #[test]
    fn high_dimensional_queries_fall_back_to_scan() {
        let mut target = vec![0.0; 12];
        target[5] = 0.5;
        let index = PointIndex::new(vec![target]);
        assert!(index.any_within(&vec![0.0; 12], 1.0));
        let mut far = vec![0.0; 12];
        far[0] = 3.0;
        assert!(!index.any_within(&far, 1.0));
    }

    #[test]
    fn cell_scan_agrees_with_linear_scan() {
        let points: Vec<Position> = (-5..5)
            .flat_map(|x| (-5..5).map(move |y| vec![x as f64 * 1.7, y as f64 * 0.9]))
            .collect();
        let index = PointIndex::new(points);
        for qx in -8..8 {
            for qy in -8..8 {
                let query = [qx as f64 * 0.63, qy as f64 * 0.41];
                assert_eq!(
                    index.any_within(&query, 0.5),
                    index.scan_all(&query, 0.5),
                    "mismatch at {query:?}"
                );
            }
        }
    }

    #[test]
    fn empty_index_never_matches() {
        let index = PointIndex::default();
        assert!(index.is_empty());
        assert!(!index.any_within(&[0.0, 0.0], 10.0));
    }

    #[test]
    fn magic_gates_detect_placements() {
        let gates = MagicGates::new(vec![vec![0.0, 1.0]], vec![vec![4.0, 5.0]]);
        assert!(gates.is_gate(&[0.0, 1.0]));
        assert!(!gates.is_gate(&[0.0, 2.0]));
        assert_eq!(gates.destinations(), &[vec![4.0, 5.0]]);
    }
}
