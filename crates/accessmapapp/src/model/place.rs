use super::{Accessibility, PlaceCategory};
use serde::{Deserialize, Serialize};

/// Raw rating as shipped by the data source: both fields are numeric strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, e.g. "4.6".
    pub count: String,
    /// Number of reviews, e.g. "128".
    pub reviews: String,
}

impl Rating {
    pub fn new(count: impl Into<String>, reviews: impl Into<String>) -> Self {
        Self {
            count: count.into(),
            reviews: reviews.into(),
        }
    }

    pub fn summary(&self) -> RatingSummary {
        RatingSummary::from(self)
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::new("0", "0")
    }
}

/// Parsed view of a [`Rating`]. Unparseable inputs degrade to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary {
    pub value: f64,
    pub reviews: u32,
    pub stars: u8,
}

impl RatingSummary {
    /// One decimal place, the way ratings are displayed everywhere.
    pub fn display(&self) -> String {
        format!("{:.1}", self.value)
    }
}

impl From<&Rating> for RatingSummary {
    fn from(rating: &Rating) -> Self {
        let value = rating
            .count
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        let reviews = rating.reviews.trim().parse::<u32>().unwrap_or(0);
        let stars = value.round().clamp(0.0, 5.0) as u8;
        Self {
            value,
            reviews,
            stars,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntranceType {
    Main,
    Secondary,
    Service,
}

impl EntranceType {
    pub fn label(self) -> &'static str {
        match self {
            EntranceType::Main => "Главный вход",
            EntranceType::Secondary => "Боковой вход",
            EntranceType::Service => "Служебный вход",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParkingType {
    Street,
    Lot,
    Garage,
}

impl ParkingType {
    pub fn label(self) -> &'static str {
        match self {
            ParkingType::Street => "Уличная",
            ParkingType::Lot => "Парковочная площадка",
            ParkingType::Garage => "Паркинг",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parking {
    pub available: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ParkingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
}

/// A physical location with its accessibility metadata.
///
/// Places are reference data: nothing in the core mutates them after the
/// catalog builds them. The builder-style `with_*` methods exist for
/// constructing catalog entries and test fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub photo: String,
    pub name: String,
    pub address: String,
    pub locality_id: String,
    pub accessibility: Vec<Accessibility>,
    pub place_category: PlaceCategory,
    pub rating: Rating,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance_type: Option<EntranceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_elevator: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_ramp: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_disabled_toilet: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking: Option<Parking>,
}

impl Place {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        locality_id: impl Into<String>,
        place_category: PlaceCategory,
    ) -> Self {
        Self {
            id: id.into(),
            photo: String::new(),
            name: name.into(),
            address: address.into(),
            locality_id: locality_id.into(),
            accessibility: Vec::new(),
            place_category,
            rating: Rating::default(),
            is_approved: None,
            entrance_type: None,
            floor: None,
            has_elevator: None,
            has_ramp: None,
            has_disabled_toilet: None,
            parking: None,
        }
    }

    pub fn with_accessibility(mut self, tags: &[Accessibility]) -> Self {
        self.accessibility = tags.to_vec();
        self
    }

    pub fn with_rating(mut self, count: &str, reviews: &str) -> Self {
        self.rating = Rating::new(count, reviews);
        self
    }

    pub fn with_photo(mut self, photo: &str) -> Self {
        self.photo = photo.to_string();
        self
    }

    pub fn approved(mut self) -> Self {
        self.is_approved = Some(true);
        self
    }

    pub fn with_entrance(mut self, entrance: EntranceType, floor: &str) -> Self {
        self.entrance_type = Some(entrance);
        self.floor = Some(floor.to_string());
        self
    }

    pub fn with_facilities(mut self, elevator: bool, ramp: bool, toilet: bool) -> Self {
        self.has_elevator = Some(elevator);
        self.has_ramp = Some(ramp);
        self.has_disabled_toilet = Some(toilet);
        self
    }

    pub fn with_parking(mut self, kind: Option<ParkingType>, distance: Option<&str>) -> Self {
        self.parking = Some(Parking {
            available: kind.is_some(),
            kind,
            distance: distance.map(str::to_string),
        });
        self
    }

    pub fn is_approved(&self) -> bool {
        self.is_approved.unwrap_or(false)
    }

    pub fn supports(&self, tag: Accessibility) -> bool {
        self.accessibility.contains(&tag)
    }
}
