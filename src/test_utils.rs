use crate::config::SceneConfig;
use crate::context::FovContext;

// Check that the error between a and b is close enough
pub fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

pub fn make_context(patch: impl FnOnce(&mut SceneConfig)) -> FovContext {
    let mut cfg = SceneConfig::default();
    patch(&mut cfg);
    FovContext::new(cfg)
}
