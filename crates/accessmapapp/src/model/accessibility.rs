//! Accessibility tags.
//!
//! A tag names one disability category a place accommodates. The set is
//! closed; every presentation surface reads icons, colors, and texts from
//! [`ACCESSIBILITY`] instead of keeping its own copy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    Visual,
    Hearing,
    Motor,
    Cognitive,
    Speech,
    Sensory,
    Temporary,
    Situational,
    Multiple,
}

/// Display metadata for a single accessibility tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessibilityInfo {
    pub tag: Accessibility,
    pub icon: &'static str,
    pub color: &'static str,
    /// Short label used on filter chips.
    pub label: &'static str,
    /// Longer "for people with ..." description used in tooltips and forms.
    pub description: &'static str,
}

/// Canonical metadata table. Indexed by the enum discriminant.
pub const ACCESSIBILITY: &[AccessibilityInfo] = &[
    AccessibilityInfo {
        tag: Accessibility::Visual,
        icon: "👁️",
        color: "#1890ff",
        label: "Нарушение зрения",
        description: "Для людей с нарушениями зрения",
    },
    AccessibilityInfo {
        tag: Accessibility::Hearing,
        icon: "👂",
        color: "#52c41a",
        label: "Нарушение слуха",
        description: "Для людей с нарушениями слуха",
    },
    AccessibilityInfo {
        tag: Accessibility::Motor,
        icon: "♿",
        color: "#fa8c16",
        label: "Нарушение двигательных функций",
        description: "Для людей с двигательными нарушениями",
    },
    AccessibilityInfo {
        tag: Accessibility::Cognitive,
        icon: "🧠",
        color: "#722ed1",
        label: "Нарушение когнитивных способностей",
        description: "Для людей с когнитивными нарушениями",
    },
    AccessibilityInfo {
        tag: Accessibility::Speech,
        icon: "🗣️",
        color: "#eb2f96",
        label: "Нарушение речи",
        description: "Для людей с нарушениями речи",
    },
    AccessibilityInfo {
        tag: Accessibility::Sensory,
        icon: "🌈",
        color: "#13c2c2",
        label: "Сенсорные нарушения",
        description: "Для людей с сенсорными особенностями",
    },
    AccessibilityInfo {
        tag: Accessibility::Temporary,
        icon: "⏱️",
        color: "#fadb14",
        label: "Временные ограничения",
        description: "Для людей с временными ограничениями",
    },
    AccessibilityInfo {
        tag: Accessibility::Situational,
        icon: "🔄",
        color: "#a0d911",
        label: "Ситуационные ограничения",
        description: "В ситуациях с ограниченными возможностями",
    },
    AccessibilityInfo {
        tag: Accessibility::Multiple,
        icon: "👥",
        color: "#fa541c",
        label: "Множественные нарушения",
        description: "Для людей с множественными нарушениями",
    },
];

impl Accessibility {
    pub const ALL: [Accessibility; 9] = [
        Accessibility::Visual,
        Accessibility::Hearing,
        Accessibility::Motor,
        Accessibility::Cognitive,
        Accessibility::Speech,
        Accessibility::Sensory,
        Accessibility::Temporary,
        Accessibility::Situational,
        Accessibility::Multiple,
    ];

    pub fn info(self) -> &'static AccessibilityInfo {
        &ACCESSIBILITY[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Accessibility::Visual => "visual",
            Accessibility::Hearing => "hearing",
            Accessibility::Motor => "motor",
            Accessibility::Cognitive => "cognitive",
            Accessibility::Speech => "speech",
            Accessibility::Sensory => "sensory",
            Accessibility::Temporary => "temporary",
            Accessibility::Situational => "situational",
            Accessibility::Multiple => "multiple",
        }
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Accessibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Accessibility::ALL
            .into_iter()
            .find(|tag| tag.as_str() == needle)
            .ok_or_else(|| format!("unknown accessibility tag '{}'", s))
    }
}
