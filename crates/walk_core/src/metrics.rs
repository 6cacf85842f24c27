//! Per-trajectory statistics.
//!
//! Pure functions over a recorded path. `Walker` applies them to its own
//! trajectory and `Simulation` applies them to every stored trial, so no
//! walker state has to be re-pointed to measure an old run.

use crate::error::{WalkError, WalkResult};
use crate::geometry::{dot, exited_radius, vector_norm, Position};

/// Position `n` of `path`, or `InvalidArgument` when `n` is past the end.
fn point_at(path: &[Position], n: usize) -> WalkResult<&Position> {
    path.get(n).ok_or_else(|| {
        WalkError::argument(format!(
            "step index {n} must be less than the path length {}",
            path.len()
        ))
    })
}

/// Euclidean distance from the origin after `n` steps.
pub fn dist_from_origin_after(path: &[Position], n: usize) -> WalkResult<f64> {
    Ok(vector_norm(point_at(path, n)?))
}

/// Perpendicular distance of point `n` from the line through the origin along `axis`.
///
/// `axis` must match the path dimension and have a norm of exactly 1.0.
pub fn dist_from_axis_after(path: &[Position], axis: &[f64], n: usize) -> WalkResult<f64> {
    let dim = path.first().map(Vec::len).ok_or_else(|| WalkError::argument("path is empty"))?;
    if axis.len() != dim {
        return Err(WalkError::argument(format!(
            "axis has {} components but the walk space has {dim} dimensions",
            axis.len()
        )));
    }
    let axis_norm = vector_norm(axis);
    if axis_norm != 1.0 {
        return Err(WalkError::argument(format!(
            "axis must be a unit vector, got norm {axis_norm}"
        )));
    }
    let point = point_at(path, n)?;

    let projection = dot(point, axis) / axis_norm;
    let rejection: Position = point
        .iter()
        .zip(axis)
        .map(|(v, a)| v - projection * a / axis_norm)
        .collect();
    Ok(vector_norm(&rejection))
}

/// Sign changes of the second coordinate among the first `n` points.
///
/// A step counts when it goes from `> 0` to `<= 0`, or from `< 0` to `>= 0`.
/// Touching zero from one side and leaving again counts once.
pub fn times_crossed_y_axis_after(path: &[Position], n: usize) -> WalkResult<usize> {
    if point_at(path, n)?.len() < 2 {
        return Err(WalkError::argument("y-axis crossings need at least two dimensions"));
    }
    let count = path[..n]
        .windows(2)
        .filter(|pair| {
            let (before, after) = (pair[0][1], pair[1][1]);
            (before > 0.0 && after <= 0.0) || (before < 0.0 && after >= 0.0)
        })
        .count();
    Ok(count)
}

/// Index of the first point strictly outside `radius`, or `None` if the path never leaves.
pub fn exited_radius_at(path: &[Position], radius: f64) -> WalkResult<Option<usize>> {
    if radius <= 0.0 {
        return Err(WalkError::argument("radius must be positive"));
    }
    if path.is_empty() {
        return Err(WalkError::argument("path is empty"));
    }
    for (idx, point) in path.iter().enumerate() {
        if exited_radius(point, radius)? {
            return Ok(Some(idx));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_path() -> Vec<Position> {
        vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 1.0],
            vec![0.0, 0.0],
        ]
    }

    #[test]
    fn origin_distance_reads_nth_point() {
        let path = vec![vec![0.0, 0.0], vec![3.0, 4.0]];
        assert_eq!(dist_from_origin_after(&path, 0).unwrap(), 0.0);
        assert_eq!(dist_from_origin_after(&path, 1).unwrap(), 5.0);
        assert!(dist_from_origin_after(&path, 2).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn axis_distance_is_vector_rejection() {
        let path = vec![vec![0.0, 0.0], vec![3.0, 4.0]];
        assert_eq!(dist_from_axis_after(&path, &[0.0, 1.0], 1).unwrap(), 3.0);
        assert_eq!(dist_from_axis_after(&path, &[1.0, 0.0], 1).unwrap(), 4.0);
        assert_eq!(dist_from_axis_after(&path, &[1.0, 0.0], 0).unwrap(), 0.0);
    }

    #[test]
    fn axis_distance_rejects_non_unit_axis_even_with_bad_index() {
        let path = square_path();
        assert!(dist_from_axis_after(&path, &[1.0, 1.0], 1).is_err());
        assert!(dist_from_axis_after(&path, &[1.0, 1.0], 100).is_err());
        assert!(dist_from_axis_after(&path, &[0.0, 0.0], 0).is_err());
    }

    #[test]
    fn axis_distance_rejects_dimension_mismatch() {
        let path = square_path();
        let err = dist_from_axis_after(&path, &[0.0, 0.0, 1.0], 1).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn crossings_use_asymmetric_thresholds() {
        let path: Vec<Position> = [0.0, 1.0, 0.0, -1.0, 0.0, 1.0, -1.0]
            .iter()
            .map(|&y| vec![0.0, y])
            .collect();
        // 1 -> 0 counts, 0 -> -1 does not, -1 -> 0 counts, 0 -> 1 does not.
        // The final 1 -> -1 step lies outside the first six points.
        assert_eq!(times_crossed_y_axis_after(&path, 6).unwrap(), 2);
        assert_eq!(times_crossed_y_axis_after(&path, 3).unwrap(), 1);
        assert_eq!(times_crossed_y_axis_after(&path, 0).unwrap(), 0);
        assert_eq!(times_crossed_y_axis_after(&path, 1).unwrap(), 0);
        assert!(times_crossed_y_axis_after(&path, 7).is_err());
    }

    #[test]
    fn exited_radius_at_reports_first_exit() {
        let path = vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![2.0, 0.0], vec![3.0, 0.0]];
        assert_eq!(exited_radius_at(&path, 1.5).unwrap(), Some(2));
        assert_eq!(exited_radius_at(&path, 2.0).unwrap(), Some(3));
        assert_eq!(exited_radius_at(&path, 3.0).unwrap(), None);
    }

    #[test]
    fn exited_radius_at_validates_inputs() {
        assert!(exited_radius_at(&square_path(), 0.0).is_err());
        assert!(exited_radius_at(&[], 1.0).is_err());
    }
}
