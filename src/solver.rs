use crate::geometry::{MonitorGeometry, subtended_angle_deg};
use crate::layout::{HeadPosition, compute_display_layout};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub min_distance_cm: f64,
    pub max_distance_cm: f64,
    pub tolerance_deg: f64,
    pub max_iterations: u32,
    /// Solved distances closer than this to the current one are not committed.
    pub min_commit_delta_cm: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_distance_cm: 10.0,
            max_distance_cm: 400.0,
            tolerance_deg: 0.1,
            max_iterations: 50,
            min_commit_delta_cm: 0.5,
        }
    }
}

/// Vertical FOV seen from `head` with the panel `distance_cm` away.
pub fn vertical_fov_at(
    distance_cm: f64,
    geometry: &MonitorGeometry,
    head: HeadPosition,
    triple_angle_deg: f64,
    scale: f64,
) -> Option<f64> {
    let layout = compute_display_layout(head, geometry, distance_cm, triple_angle_deg, scale);
    let (from, to) = layout.side_span();
    subtended_angle_deg(head.side(), from, to)
}

// Bisect the viewing distance until the vertical FOV matches `target_deg`.
//
// Relies on the vertical FOV shrinking as the panel moves away. Always
// returns a distance inside the configured bounds: the first one within
// tolerance, or the closest seen once the iteration budget runs out.
pub fn solve_distance_for_target_vfov(
    target_deg: f64,
    geometry: &MonitorGeometry,
    head: HeadPosition,
    triple_angle_deg: f64,
    scale: f64,
    cfg: &SolverConfig,
) -> f64 {
    let mut lo = cfg.min_distance_cm;
    let mut hi = cfg.max_distance_cm;
    let mut best = (lo + hi) / 2.0;
    let mut best_err = f64::INFINITY;

    for i in 0..cfg.max_iterations {
        let mid = (lo + hi) / 2.0;
        let Some(angle) = vertical_fov_at(mid, geometry, head, triple_angle_deg, scale) else {
            break;
        };
        let err = (angle - target_deg).abs();
        debug!("solver iteration {i}: distance={mid:.3}cm vfov={angle:.4}");

        if err < best_err {
            best = mid;
            best_err = err;
        }
        if err < cfg.tolerance_deg {
            break;
        }
        if angle > target_deg {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    best
}

/// Distance to keep after a solve: the solved one only if it moved far enough.
pub fn commit_distance(current_cm: f64, solved_cm: f64, min_delta_cm: f64) -> f64 {
    if (solved_cm - current_cm).abs() > min_delta_cm {
        solved_cm
    } else {
        current_cm
    }
}
