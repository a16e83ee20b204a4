use std::fmt;
use std::str::FromStr;

use crate::error::FovError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, e.g. 1.777... for 16:9
    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl FromStr for AspectRatio {
    type Err = FovError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || FovError::InvalidAspectRatio(s.to_string());
        let (w, h) = s.split_once(':').ok_or_else(bad)?;
        let width: u32 = w.trim().parse().map_err(|_| bad())?;
        let height: u32 = h.trim().parse().map_err(|_| bad())?;
        if width == 0 || height == 0 {
            return Err(bad());
        }
        Ok(Self { width, height })
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Physical description of one panel. Curvature is a radius in cm, `<= 0` means flat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSpec {
    pub size_in: f64,
    pub aspect: AspectRatio,
    pub curvature_cm: f64,
}

impl ScreenSpec {
    pub fn is_flat(&self) -> bool {
        self.curvature_cm <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Cn,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Cn => "cn",
        }
    }
}

impl FromStr for Locale {
    type Err = FovError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "cn" | "zh-cn" => Ok(Self::Cn),
            _ => Err(FovError::UnknownLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;

    #[test]
    fn aspect_ratio_parses_and_computes_ratio() {
        let ar: AspectRatio = "16:9".parse().unwrap();
        assert_eq!(ar, AspectRatio::new(16, 9));
        assert!(approx(ar.ratio(), 16.0 / 9.0, 1e-15));

        // Portrait orientations are valid too
        let ar: AspectRatio = "9:32".parse().unwrap();
        assert!(ar.ratio() < 1.0);
    }

    #[test]
    fn aspect_ratio_tolerates_whitespace() {
        let ar: AspectRatio = " 21 : 9 ".parse().unwrap();
        assert_eq!(ar, AspectRatio::new(21, 9));
    }

    #[test]
    fn aspect_ratio_rejects_malformed_input() {
        assert!("16x9".parse::<AspectRatio>().is_err());
        assert!("16:".parse::<AspectRatio>().is_err());
        assert!("0:9".parse::<AspectRatio>().is_err());
        assert!("16:0".parse::<AspectRatio>().is_err());
        assert!("-16:9".parse::<AspectRatio>().is_err());
        assert_eq!(
            "abc".parse::<AspectRatio>(),
            Err(FovError::InvalidAspectRatio("abc".to_string()))
        );
    }

    #[test]
    fn equivalent_pairs_share_a_ratio() {
        assert_eq!(AspectRatio::new(32, 18).ratio(), AspectRatio::new(16, 9).ratio());
        assert_ne!(AspectRatio::new(32, 18), AspectRatio::new(16, 9));
    }

    #[test]
    fn aspect_ratio_displays_as_pair() {
        assert_eq!(AspectRatio::new(16, 10).to_string(), "16:10");
    }

    #[test]
    fn screen_spec_flat_sentinel() {
        let mut spec = ScreenSpec {
            size_in: 32.0,
            aspect: AspectRatio::new(16, 9),
            curvature_cm: 0.0,
        };
        assert!(spec.is_flat());
        spec.curvature_cm = -5.0;
        assert!(spec.is_flat());
        spec.curvature_cm = 80.0;
        assert!(!spec.is_flat());
    }

    #[test]
    fn locale_parses_known_codes() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("CN".parse::<Locale>(), Ok(Locale::Cn));
        assert_eq!("zh-CN".parse::<Locale>(), Ok(Locale::Cn));
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::Cn.code(), "cn");
    }
}
