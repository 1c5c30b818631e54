//! Matching utilities for centroid tracking.

use ndarray::Array2;

use crate::tracker::rect::Centroid;

/// Compute the Euclidean distance matrix between tracked objects (rows)
/// and new detections (columns).
pub fn centroid_distance(objects: &[Centroid], inputs: &[Centroid]) -> Array2<f64> {
    let mut dists = Array2::zeros((objects.len(), inputs.len()));
    for (i, o) in objects.iter().enumerate() {
        for (j, d) in inputs.iter().enumerate() {
            dists[[i, j]] = o.distance(d);
        }
    }
    dists
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentResult {
    /// (row, column) pairs, in the order they were assigned.
    pub matches: Vec<(usize, usize)>,
    pub unmatched_objects: Vec<usize>,
    pub unmatched_detections: Vec<usize>,
}

/// Greedy nearest-neighbour assignment.
///
/// Every row picks its closest column (first one on ties). Rows are then
/// visited in ascending order of that distance, stable on row index, and a
/// pair is accepted only if neither the row nor its column was consumed yet.
/// A row whose nearest column was taken stays unmatched even when another
/// free column exists.
pub fn greedy_assignment(dists: &Array2<f64>) -> AssignmentResult {
    let (num_rows, num_cols) = dists.dim();

    if num_rows == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_objects: vec![],
            unmatched_detections: (0..num_cols).collect(),
        };
    }

    if num_cols == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_objects: (0..num_rows).collect(),
            unmatched_detections: vec![],
        };
    }

    let nearest: Vec<(usize, f64)> = dists
        .outer_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .fold((0, f64::INFINITY), |best, (j, &d)| {
                    if d < best.1 { (j, d) } else { best }
                })
        })
        .collect();

    let mut order: Vec<usize> = (0..num_rows).collect();
    order.sort_by(|&a, &b| nearest[a].1.total_cmp(&nearest[b].1));

    let mut used_rows = vec![false; num_rows];
    let mut used_cols = vec![false; num_cols];
    let mut matches = Vec::with_capacity(num_rows.min(num_cols));

    for row in order {
        let col = nearest[row].0;
        if used_rows[row] || used_cols[col] {
            continue;
        }
        used_rows[row] = true;
        used_cols[col] = true;
        matches.push((row, col));
    }

    let unmatched_objects = used_rows
        .iter()
        .enumerate()
        .filter_map(|(i, &u)| if u { None } else { Some(i) })
        .collect();
    let unmatched_detections = used_cols
        .iter()
        .enumerate()
        .filter_map(|(j, &u)| if u { None } else { Some(j) })
        .collect();

    AssignmentResult {
        matches,
        unmatched_objects,
        unmatched_detections,
    }
}
