use phf::phf_ordered_map;
use std::f64::consts::PI;

use crate::config::HfovRadMode;
use crate::error::FovError;
use crate::types::Locale;

/// How a game turns the calculated angles into its own FOV setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    /// F1 2016-2018 camera offset, -1..1
    CmF1_16_18,
    /// F1 2019-2020 camera offset, -10..10
    CmF1_19_20,
    /// F1 2021+ camera offset, -20..20
    CmF1_21,
    HfovRad,
    HfovDeg,
    VfovDeg,
    VfovDegX2,
    VfovGtr2,
    VfovRace07,
    /// Slider step 0..8 over 30°..70° vertical
    VfovDirtRally,
}

const TRANSFER_TAGS: [(&str, TransferKind); 10] = [
    ("cmf1-16-18", TransferKind::CmF1_16_18),
    ("cmf1-19-20", TransferKind::CmF1_19_20),
    ("cmf1-21", TransferKind::CmF1_21),
    ("hfov-rad", TransferKind::HfovRad),
    ("hfov-deg", TransferKind::HfovDeg),
    ("vfov-deg", TransferKind::VfovDeg),
    ("vfov-degx2", TransferKind::VfovDegX2),
    ("vfov-gtr2", TransferKind::VfovGtr2),
    ("vfov-race07", TransferKind::VfovRace07),
    ("vfov-dirtrally", TransferKind::VfovDirtRally),
];

impl TransferKind {
    pub fn tag(&self) -> &'static str {
        TRANSFER_TAGS
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(tag, _)| *tag)
            .unwrap_or_default()
    }

    /// Map horizontal/vertical FOV (degrees) to the game's value.
    pub fn apply(&self, h_deg: f64, v_deg: f64, hfov_rad: HfovRadMode) -> f64 {
        match self {
            Self::CmF1_16_18 => f1_offset(h_deg, 0.05, 1.0),
            Self::CmF1_19_20 => f1_offset(h_deg, 0.1, 10.0),
            Self::CmF1_21 => f1_offset(h_deg, 1.0, 20.0),
            Self::HfovRad => match hfov_rad {
                HfovRadMode::Literal => v_deg / 180.0 * PI,
                HfovRadMode::Corrected => h_deg / 180.0 * PI,
            },
            Self::HfovDeg => h_deg,
            Self::VfovDeg => v_deg,
            Self::VfovDegX2 => v_deg * 2.0,
            Self::VfovGtr2 => (v_deg / 58.0).clamp(0.5, 1.5),
            Self::VfovRace07 => (v_deg / 58.0).clamp(0.4, 1.5),
            Self::VfovDirtRally => ((v_deg.clamp(30.0, 70.0) - 30.0) / 5.0).ceil(),
        }
    }
}

// F1 titles take an offset from their 77° default, in half-degree steps
fn f1_offset(h_deg: f64, step: f64, limit: f64) -> f64 {
    ((h_deg - 77.0) / 2.0 * step).clamp(-limit, limit)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameFovEntry {
    pub name_en: &'static str,
    pub name_cn: &'static str,
    pub unit: &'static str,
    pub kind: TransferKind,
    pub digits: usize,
}

impl GameFovEntry {
    pub fn name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.name_en,
            Locale::Cn => self.name_cn,
        }
    }
}

macro_rules! game {
    ($en:expr, $cn:expr, $unit:expr, $kind:ident, $digits:expr) => {
        GameFovEntry {
            name_en: $en,
            name_cn: $cn,
            unit: $unit,
            kind: TransferKind::$kind,
            digits: $digits,
        }
    };
}

/// Supported games in display order.
pub static GAMES: phf::OrderedMap<&'static str, GameFovEntry> = phf_ordered_map! {
    "f120162018" => game!("F1 2016-2018", "F1 2016-2018", "", CmF1_16_18, 2),
    "f120192020" => game!("F1 2019-2020", "F1 2019-2020", "", CmF1_19_20, 1),
    "f12021" => game!("F1 2021+", "F1 2021+", "", CmF1_21, 0),
    "richardburnsrally" => game!("Richard Burns Rally", "理查德伯恩斯拉力赛RBR", "rad", HfovRad, 4),
    "projectcars12" => game!("Project Cars 1/2", "赛车计划1/2", "°", HfovDeg, 0),
    "ams2" => game!("Automobilista 2", "AMS2", "°", HfovDeg, 0),
    "eurotrucksim" => game!("Euro Truck Simulator", "欧洲卡车模拟，美洲卡车模拟", "°", HfovDeg, 0),
    "raceroom" => game!("RaceRoom Experience", "RaceRoom", "°", HfovDeg, 1),
    "iracing" => game!("iRacing", "iRacing", "°", HfovDeg, 0),
    "dirtrally12" => game!("Dirt Rally 1/2", "尘埃拉力系列 Dirt Rally 1/2", "°", VfovDegX2, 0),
    "gridautosport" => game!("GRID Autosport", "GRID超级房车赛：赛车运动", "°", VfovDegX2, 1),
    "assettocorsa" => game!("Assetto Corsa", "神力科莎AC", "°", VfovDeg, 1),
    "assettocorsacompetizione" => game!("Assetto Corsa Competizione", "神力科莎竞技ACC", "°", VfovDeg, 1),
    "assettocorsaevo" => game!("Assetto Corsa EVO", "神力科莎AC EVO", "°", VfovDeg, 1),
    "isiengine" => game!("rFactor, Game Stock Car", "rFactor, 等ISI引擎", "°", VfovDeg, 0),
    "ams" => game!("Automobilista", "AMS", "°", VfovDeg, 0),
    "isiengine2" => game!("rFactor 2", "rFactor 2", "°", VfovDeg, 0),
    "lemansultimate" => game!("Le Mans Ultimate", "勒芒终极版LMU", "°", VfovDeg, 0),
    "eawrc" => game!("EA WRC", "EA WRC", "", VfovDeg, 0),
    "gtr2" => game!("GTR 2", "GTR 2", "", VfovGtr2, 1),
    "race07" => game!("Race 07", "Race 07", "", VfovRace07, 1),
};

/// One game's setting for the current angles.
#[derive(Debug, Clone, PartialEq)]
pub struct GameFov {
    pub key: &'static str,
    pub entry: &'static GameFovEntry,
    pub value: f64,
    pub text: String,
}

impl GameFov {
    /// Value with its unit, e.g. "0.5546rad" or "40°".
    pub fn display(&self) -> String {
        format!("{}{}", self.text, self.entry.unit)
    }
}

pub fn list_game_keys() -> Vec<&'static str> {
    GAMES.keys().copied().collect()
}

pub fn lookup(key: &str) -> Result<(&'static str, &'static GameFovEntry), FovError> {
    GAMES
        .get_entry(key)
        .map(|(k, e)| (*k, e))
        .ok_or_else(|| FovError::UnknownGame(key.to_string()))
}

pub fn compute_game_fov(
    key: &str,
    h_deg: f64,
    v_deg: f64,
    hfov_rad: HfovRadMode,
) -> Result<GameFov, FovError> {
    let (key, entry) = lookup(key)?;
    let value = entry.kind.apply(h_deg, v_deg, hfov_rad);
    Ok(GameFov {
        key,
        entry,
        value,
        text: format_fixed(value, entry.digits),
    })
}

/// Every registered game, in display order.
pub fn compute_all(h_deg: f64, v_deg: f64, hfov_rad: HfovRadMode) -> Vec<GameFov> {
    GAMES
        .entries()
        .map(|(key, entry)| {
            let value = entry.kind.apply(h_deg, v_deg, hfov_rad);
            GameFov {
                key: *key,
                entry,
                value,
                text: format_fixed(value, entry.digits),
            }
        })
        .collect()
}

/// Fixed-point rendering; values that round to zero never keep a minus sign.
pub fn format_fixed(value: f64, digits: usize) -> String {
    let s = format!("{value:.digits$}");
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}
