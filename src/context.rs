use log::info;

use crate::config::{FovMode, SceneConfig};
use crate::games::{GameFov, compute_all};
use crate::geometry::{MonitorGeometry, compute_monitor_geometry, subtended_angle_deg};
use crate::layout::{DisplayLayout, ReferenceFrame, compute_display_layout};
use crate::solver::{commit_distance, solve_distance_for_target_vfov};

/// Subtended angles for the current layout, `None` where undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FovAngles {
    pub vertical: Option<f64>,
    pub horizontal_single: Option<f64>,
    pub horizontal_triple: Option<f64>,
}

/// One full pass over a scene: geometry, layout and angles.
pub struct FovContext {
    pub cfg: SceneConfig,
    pub frame: ReferenceFrame,
    pub geometry: MonitorGeometry,
    /// Distance actually used, after any fixed-FOV adjustment.
    pub distance_cm: f64,
    pub layout: DisplayLayout,
    pub angles: FovAngles,
}

impl FovContext {
    pub fn new(cfg: SceneConfig) -> Self {
        let frame = ReferenceFrame::from(&cfg.backdrop);
        let geometry = compute_monitor_geometry(
            cfg.screen.size_in,
            cfg.screen.aspect.ratio(),
            cfg.screen.curvature_cm,
            frame.scale,
        );

        let distance_cm = match cfg.mode {
            FovMode::Manual => cfg.distance_cm,
            FovMode::FixedVertical { target_deg } => {
                let solved = solve_distance_for_target_vfov(
                    target_deg,
                    &geometry,
                    frame.head,
                    cfg.triple_angle_deg,
                    frame.scale,
                    &cfg.solver,
                );
                let committed =
                    commit_distance(cfg.distance_cm, solved, cfg.solver.min_commit_delta_cm);
                info!(
                    "fixed vertical fov {target_deg}°: solved {solved:.2}cm, using {committed:.2}cm"
                );
                committed
            }
        };

        let layout = compute_display_layout(
            frame.head,
            &geometry,
            distance_cm,
            cfg.triple_angle_deg,
            frame.scale,
        );

        let (from, to) = layout.side_span();
        let vertical = subtended_angle_deg(frame.head.side(), from, to);
        let (from, to) = layout.top_span();
        let horizontal_single = subtended_angle_deg(frame.head.top(), from, to);
        let horizontal_triple = if cfg.triple {
            let (from, to) = layout.triple_span();
            subtended_angle_deg(frame.head.top(), from, to)
        } else {
            horizontal_single
        };

        Self {
            cfg,
            frame,
            geometry,
            distance_cm,
            layout,
            angles: FovAngles {
                vertical,
                horizontal_single,
                horizontal_triple,
            },
        }
    }

    /// Horizontal FOV of the whole setup: triple span when enabled.
    pub fn horizontal(&self) -> Option<f64> {
        self.angles.horizontal_triple
    }

    pub fn vertical(&self) -> Option<f64> {
        self.angles.vertical
    }

    /// Scaled drawing length back in real centimetres, bezels included.
    pub fn real_cm(&self, span: f64) -> f64 {
        span / self.frame.scale + 2.0
    }

    /// Lateral extent of the setup in real centimetres, bezels included.
    pub fn covered_width_cm(&self) -> f64 {
        self.real_cm(self.layout.covered_width(self.cfg.triple))
    }

    /// Per-game settings; empty when either angle is undefined.
    pub fn game_fovs(&self) -> Vec<GameFov> {
        match (self.horizontal(), self.vertical()) {
            (Some(h), Some(v)) => compute_all(h, v, self.cfg.hfov_rad),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{approx, make_context};

    #[test]
    fn single_flat_32_inch_at_70cm() {
        let c = make_context(|cfg| cfg.triple = false);
        // 2 * atan((70.8417 / 2) / 70) in degrees
        let h = c.horizontal().unwrap();
        assert!(approx(h, 53.67990224020696, 1e-6), "h={h}");
        assert_eq!(c.angles.horizontal_single, c.angles.horizontal_triple);

        let v = c.vertical().unwrap();
        assert!(approx(v, 31.776063139453964, 1e-6), "v={v}");
        assert!(approx(c.distance_cm, 70.0, 0.0));
    }

    #[test]
    fn triple_span_widens_horizontal_fov() {
        let single = make_context(|cfg| cfg.triple = false);
        let triple = make_context(|_| {});
        assert!(triple.horizontal().unwrap() > single.horizontal().unwrap());
        // Vertical does not depend on the side panels
        assert_eq!(triple.vertical(), single.vertical());
    }

    #[test]
    fn triple_fov_grows_with_toe_in_angle() {
        let mut prev = 0.0;
        for angle in (0..=90).step_by(10) {
            let c = make_context(|cfg| cfg.triple_angle_deg = angle as f64);
            let h = c.horizontal().unwrap();
            assert!(h > prev, "angle={angle}: {h} <= {prev}");
            prev = h;
        }
    }

    #[test]
    fn close_toed_in_triples_pass_180_degrees() {
        let c = make_context(|cfg| {
            cfg.distance_cm = 40.0;
            cfg.triple_angle_deg = 90.0;
        });
        assert!(c.horizontal().unwrap() > 180.0);
    }

    #[test]
    fn covered_width_in_real_centimetres() {
        let single = make_context(|cfg| cfg.triple = false);
        assert!(approx(single.covered_width_cm(), 70.84165965748336 + 2.0, 1e-9));

        // cos(60°) = 0.5, so side panels add one panel width in total
        let triple = make_context(|_| {});
        assert!(approx(triple.covered_width_cm(), 2.0 * 70.84165965748336 + 2.0, 1e-9));

        let height = triple.real_cm(triple.layout.height);
        assert!(approx(height, 39.848433557334396 + 2.0, 1e-9));
    }

    #[test]
    fn fixed_vertical_mode_moves_the_panel() {
        let c = make_context(|cfg| cfg.mode = FovMode::FixedVertical { target_deg: 55.0 });
        assert!(approx(c.distance_cm, 38.27, 0.5));
        assert!(approx(c.vertical().unwrap(), 55.0, 0.1));
    }

    #[test]
    fn fixed_vertical_mode_keeps_distance_when_already_close() {
        // 70cm already gives ~31.78°
        let c = make_context(|cfg| {
            cfg.mode = FovMode::FixedVertical { target_deg: 31.78 };
        });
        assert!(approx(c.distance_cm, 70.0, 0.0));
    }

    #[test]
    fn curved_panel_pulls_chord_ends_forward() {
        let flat = make_context(|cfg| cfg.triple = false);
        let curved = make_context(|cfg| {
            cfg.triple = false;
            cfg.screen.curvature_cm = 80.0;
        });
        assert!(curved.geometry.is_curved());
        assert!(curved.layout.top_mon_x > flat.layout.top_mon_x);
        // Shorter chord, but closer to the eye: wider than the flat panel
        assert!(curved.horizontal().unwrap() > flat.horizontal().unwrap());
        assert_eq!(curved.vertical(), flat.vertical());
    }

    #[test]
    fn game_table_uses_triple_horizontal_and_vertical() {
        let c = make_context(|_| {});
        let games = c.game_fovs();
        assert_eq!(games.len(), crate::games::list_game_keys().len());

        let iracing = games.iter().find(|g| g.key == "iracing").unwrap();
        assert!(approx(iracing.value, c.horizontal().unwrap(), 1e-12));

        let lmu = games.iter().find(|g| g.key == "lemansultimate").unwrap();
        assert!(approx(lmu.value, c.vertical().unwrap(), 1e-12));
    }
}
