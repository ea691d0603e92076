//! Place categories and their display metadata.
//!
//! Categories classify venues (cafe, pharmacy, park...). Unlike accessibility
//! tags they are alternatives: a place belongs to exactly one category and a
//! category filter matches any of the selected ones.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    CafeRestaurant,
    Shopping,
    Healthcare,
    Sports,
    Culture,
    Education,
    Transport,
    Office,
    Accommodation,
    Services,
    Government,
    Entertainment,
    Park,
    Bank,
    Pharmacy,
    HairBeauty,
    Religion,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub category: PlaceCategory,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    /// Lowercase keywords matched by category search.
    pub tags: &'static [&'static str],
}

const fn info(
    category: PlaceCategory,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    color: &'static str,
    tags: &'static [&'static str],
) -> CategoryInfo {
    CategoryInfo {
        category,
        name,
        description,
        icon,
        color,
        tags,
    }
}

/// Canonical metadata table. Indexed by the enum discriminant.
pub const CATEGORIES: &[CategoryInfo] = &[
    info(
        PlaceCategory::CafeRestaurant,
        "Кафе и рестораны",
        "Места, где можно поесть и выпить кофе",
        "🍽️",
        "#fa8c16",
        &["кафе", "ресторан", "еда", "кофе"],
    ),
    info(
        PlaceCategory::Shopping,
        "Магазины",
        "Торговые центры и магазины",
        "🛍️",
        "#eb2f96",
        &["магазин", "торговый центр", "покупки"],
    ),
    info(
        PlaceCategory::Healthcare,
        "Здравоохранение",
        "Больницы, поликлиники и клиники",
        "🏥",
        "#f5222d",
        &["больница", "поликлиника", "врач"],
    ),
    info(
        PlaceCategory::Sports,
        "Спорт",
        "Спортивные объекты и фитнес",
        "⚽",
        "#52c41a",
        &["спорт", "фитнес", "бассейн"],
    ),
    info(
        PlaceCategory::Culture,
        "Культура",
        "Музеи, театры и галереи",
        "🎭",
        "#722ed1",
        &["музей", "театр", "галерея"],
    ),
    info(
        PlaceCategory::Education,
        "Образование",
        "Школы, университеты и библиотеки",
        "🎓",
        "#2f54eb",
        &["школа", "университет", "библиотека"],
    ),
    info(
        PlaceCategory::Transport,
        "Транспорт",
        "Вокзалы, станции и остановки",
        "🚇",
        "#1890ff",
        &["метро", "вокзал", "остановка"],
    ),
    info(
        PlaceCategory::Office,
        "Офисы",
        "Бизнес-центры и офисы",
        "🏢",
        "#595959",
        &["офис", "бизнес-центр"],
    ),
    info(
        PlaceCategory::Accommodation,
        "Проживание",
        "Гостиницы и хостелы",
        "🏨",
        "#13c2c2",
        &["гостиница", "отель", "хостел"],
    ),
    info(
        PlaceCategory::Services,
        "Услуги",
        "Бытовые и прочие услуги",
        "🛠️",
        "#8c8c8c",
        &["услуги", "ремонт", "химчистка"],
    ),
    info(
        PlaceCategory::Government,
        "Госучреждения",
        "МФЦ, администрации и суды",
        "🏛️",
        "#1d39c4",
        &["мфц", "администрация", "госуслуги"],
    ),
    info(
        PlaceCategory::Entertainment,
        "Развлечения",
        "Кинотеатры, клубы и аттракционы",
        "🎬",
        "#fa541c",
        &["кино", "кинотеатр", "развлечения"],
    ),
    info(
        PlaceCategory::Park,
        "Парки",
        "Парки, скверы и зоны отдыха",
        "🌳",
        "#389e0d",
        &["парк", "сквер", "отдых"],
    ),
    info(
        PlaceCategory::Bank,
        "Банки",
        "Отделения банков и банкоматы",
        "🏦",
        "#d48806",
        &["банк", "банкомат"],
    ),
    info(
        PlaceCategory::Pharmacy,
        "Аптеки",
        "Аптеки и оптики",
        "💊",
        "#08979c",
        &["аптека", "лекарства"],
    ),
    info(
        PlaceCategory::HairBeauty,
        "Красота",
        "Парикмахерские и салоны красоты",
        "💇",
        "#c41d7f",
        &["парикмахерская", "салон", "красота"],
    ),
    info(
        PlaceCategory::Religion,
        "Религия",
        "Храмы, мечети и синагоги",
        "⛪",
        "#874d00",
        &["храм", "церковь", "мечеть"],
    ),
    info(
        PlaceCategory::Other,
        "Другое",
        "Прочие места",
        "📍",
        "#d9d9d9",
        &["другое"],
    ),
];

/// Categories shown while the category picker is collapsed.
pub const POPULAR_CATEGORIES: &[PlaceCategory] = &[
    PlaceCategory::CafeRestaurant,
    PlaceCategory::Shopping,
    PlaceCategory::Healthcare,
    PlaceCategory::Government,
    PlaceCategory::Transport,
];

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 18] = [
        PlaceCategory::CafeRestaurant,
        PlaceCategory::Shopping,
        PlaceCategory::Healthcare,
        PlaceCategory::Sports,
        PlaceCategory::Culture,
        PlaceCategory::Education,
        PlaceCategory::Transport,
        PlaceCategory::Office,
        PlaceCategory::Accommodation,
        PlaceCategory::Services,
        PlaceCategory::Government,
        PlaceCategory::Entertainment,
        PlaceCategory::Park,
        PlaceCategory::Bank,
        PlaceCategory::Pharmacy,
        PlaceCategory::HairBeauty,
        PlaceCategory::Religion,
        PlaceCategory::Other,
    ];

    pub fn info(self) -> &'static CategoryInfo {
        &CATEGORIES[self as usize]
    }

    pub fn is_popular(self) -> bool {
        POPULAR_CATEGORIES.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlaceCategory::CafeRestaurant => "cafe_restaurant",
            PlaceCategory::Shopping => "shopping",
            PlaceCategory::Healthcare => "healthcare",
            PlaceCategory::Sports => "sports",
            PlaceCategory::Culture => "culture",
            PlaceCategory::Education => "education",
            PlaceCategory::Transport => "transport",
            PlaceCategory::Office => "office",
            PlaceCategory::Accommodation => "accommodation",
            PlaceCategory::Services => "services",
            PlaceCategory::Government => "government",
            PlaceCategory::Entertainment => "entertainment",
            PlaceCategory::Park => "park",
            PlaceCategory::Bank => "bank",
            PlaceCategory::Pharmacy => "pharmacy",
            PlaceCategory::HairBeauty => "hair_beauty",
            PlaceCategory::Religion => "religion",
            PlaceCategory::Other => "other",
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        PlaceCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| format!("unknown place category '{}'", s))
    }
}

/// Case-insensitive search over category name, description and keywords.
///
/// An empty (or whitespace-only) query returns every category in declaration
/// order.
pub fn search_categories(query: &str) -> Vec<PlaceCategory> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return PlaceCategory::ALL.to_vec();
    }

    CATEGORIES
        .iter()
        .filter(|info| {
            info.name.to_lowercase().contains(&query)
                || info.description.to_lowercase().contains(&query)
                || info.tags.iter().any(|tag| tag.contains(&query))
        })
        .map(|info| info.category)
        .collect()
}
