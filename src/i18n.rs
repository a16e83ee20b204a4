use phf::phf_map;

use crate::types::Locale;

static EN: phf::Map<&'static str, &'static str> = phf_map! {
    "curvature" => "Curvature",
    "flat" => "Flat",
    "tripleMonitor" => "Triple Monitor",
    "singleMonitor" => "Single Monitor",
    "tripleMonitorAngle" => "Triple Monitor Angle",
    "angle" => "angle",
    "distanceToScreen" => "Distance to Screen (cm)",
    "screenSize" => "Screen Size (inch)",
    "inch" => "inch",
    "aspectRatio" => "Aspect Ratio",
    "verticalFov" => "Vertical FOV",
    "horizontalFov" => "Horizontal FOV",
    "undefined" => "n/a",
};

static CN: phf::Map<&'static str, &'static str> = phf_map! {
    "curvature" => "屏幕曲率",
    "flat" => "平面屏",
    "tripleMonitor" => "三屏",
    "singleMonitor" => "单屏",
    "tripleMonitorAngle" => "三屏角度",
    "angle" => "夹角",
    "distanceToScreen" => "眼睛与屏幕距离 (厘米)",
    "screenSize" => "屏幕尺寸 (英寸)",
    "inch" => "英寸",
    "aspectRatio" => "屏幕比例",
    "verticalFov" => "纵向角度",
    "horizontalFov" => "横向角度",
};

/// Label for `key`, falling back to English and then to the key itself.
pub fn tr<'a>(locale: Locale, key: &'a str) -> &'a str {
    let table = match locale {
        Locale::En => &EN,
        Locale::Cn => &CN,
    };
    table
        .get(key)
        .or_else(|| EN.get(key))
        .copied()
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_each_locale() {
        assert_eq!(tr(Locale::En, "flat"), "Flat");
        assert_eq!(tr(Locale::Cn, "flat"), "平面屏");
        assert_eq!(tr(Locale::Cn, "inch"), "英寸");
    }

    #[test]
    fn falls_back_to_english_then_key() {
        assert_eq!(tr(Locale::Cn, "undefined"), "n/a");
        assert_eq!(tr(Locale::En, "noSuchLabel"), "noSuchLabel");
    }

    #[test]
    fn both_tables_cover_the_form_labels() {
        for key in CN.keys() {
            assert!(EN.contains_key(*key), "missing English label for {key}");
        }
    }
}
