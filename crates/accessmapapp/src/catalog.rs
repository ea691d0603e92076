//! # Catalog
//!
//! The static data source: fixed collections of localities, places and
//! comments, queried by simple lookups. There is no backend behind it; the
//! builtin dataset is compiled in and built once on first access.
//!
//! Lookups never fail. A missing place yields `None`, a place without
//! comments yields an empty vector, and callers decide how to render that.

use crate::model::{
    Accessibility, Comment, EntranceType, Locality, ParkingType, Place, PlaceCategory,
};
use once_cell::sync::Lazy;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    localities: Vec<Locality>,
    places: Vec<Place>,
    comments: Vec<Comment>,
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    localities: builtin_localities(),
    places: builtin_places(),
    comments: builtin_comments(),
});

impl Catalog {
    pub fn new(localities: Vec<Locality>, places: Vec<Place>, comments: Vec<Comment>) -> Self {
        Self {
            localities,
            places,
            comments,
        }
    }

    /// The compiled-in dataset.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn localities(&self) -> &[Locality] {
        &self.localities
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// The first locality is the default selection.
    pub fn default_locality(&self) -> Option<&Locality> {
        self.localities.first()
    }

    pub fn locality(&self, id: &str) -> Option<&Locality> {
        self.localities.iter().find(|l| l.id == id)
    }

    pub fn has_locality(&self, id: &str) -> bool {
        self.locality(id).is_some()
    }

    pub fn place(&self, id: &str) -> Option<&Place> {
        if id.is_empty() {
            return None;
        }
        self.places.iter().find(|p| p.id == id)
    }

    pub fn comments_for(&self, place_id: &str) -> Vec<&Comment> {
        if place_id.is_empty() {
            return Vec::new();
        }
        self.comments
            .iter()
            .filter(|c| c.place_id == place_id)
            .collect()
    }
}

fn builtin_localities() -> Vec<Locality> {
    vec![
        Locality::new("moscow", "Москва"),
        Locality::new("spb", "Санкт-Петербург"),
        Locality::new("ekb", "Екатеринбург"),
        Locality::new("novosibirsk", "Новосибирск"),
        Locality::new("kazan", "Казань"),
        Locality::new("nn", "Нижний Новгород"),
        Locality::new("krasnodar", "Краснодар"),
        Locality::new("vladivostok", "Владивосток"),
    ]
}

fn builtin_places() -> Vec<Place> {
    use Accessibility::*;

    vec![
        Place::new(
            "1",
            "Кофейня «Зерно»",
            "ул. Тверская, 12",
            "moscow",
            PlaceCategory::CafeRestaurant,
        )
        .with_photo("/photos/zerno.jpg")
        .with_accessibility(&[Motor, Visual, Hearing])
        .with_rating("4.7", "128")
        .approved()
        .with_entrance(EntranceType::Main, "1")
        .with_facilities(false, true, true)
        .with_parking(Some(ParkingType::Street), Some("30 м")),
        Place::new(
            "2",
            "ТЦ «Атриум»",
            "ул. Земляной Вал, 33",
            "moscow",
            PlaceCategory::Shopping,
        )
        .with_photo("/photos/atrium.jpg")
        .with_accessibility(&[Motor, Visual, Temporary, Multiple])
        .with_rating("4.5", "342")
        .approved()
        .with_entrance(EntranceType::Main, "1")
        .with_facilities(true, true, true)
        .with_parking(Some(ParkingType::Garage), Some("0 м")),
        Place::new(
            "3",
            "Городская поликлиника № 3",
            "Малая Никитская ул., 8",
            "moscow",
            PlaceCategory::Healthcare,
        )
        .with_photo("/photos/clinic3.jpg")
        .with_accessibility(&[Motor, Hearing, Cognitive])
        .with_rating("3.9", "57")
        .with_entrance(EntranceType::Secondary, "1")
        .with_facilities(true, true, false)
        .with_parking(None, None),
        Place::new(
            "4",
            "МФЦ района Арбат",
            "ул. Новый Арбат, 36",
            "moscow",
            PlaceCategory::Government,
        )
        .with_photo("/photos/mfc-arbat.jpg")
        .with_accessibility(&[Motor, Visual, Hearing, Speech, Cognitive])
        .with_rating("4.2", "211")
        .approved()
        .with_entrance(EntranceType::Main, "1")
        .with_facilities(true, true, true),
        Place::new(
            "5",
            "Парк Горького",
            "ул. Крымский Вал, 9",
            "moscow",
            PlaceCategory::Park,
        )
        .with_photo("/photos/gorky.jpg")
        .with_accessibility(&[Motor, Sensory, Situational])
        .with_rating("4.8", "1024")
        .approved()
        .with_parking(Some(ParkingType::Lot), Some("200 м")),
        Place::new(
            "6",
            "Аптека «Здоровье»",
            "Пятницкая ул., 40",
            "moscow",
            PlaceCategory::Pharmacy,
        )
        .with_accessibility(&[Motor])
        .with_rating("4.0", "15")
        .with_entrance(EntranceType::Main, "1")
        .with_facilities(false, true, false),
        Place::new(
            "7",
            "Эрмитаж",
            "Дворцовая пл., 2",
            "spb",
            PlaceCategory::Culture,
        )
        .with_photo("/photos/hermitage.jpg")
        .with_accessibility(&[Motor, Visual, Hearing, Cognitive, Multiple])
        .with_rating("4.9", "2310")
        .approved()
        .with_entrance(EntranceType::Service, "1")
        .with_facilities(true, true, true)
        .with_parking(Some(ParkingType::Street), Some("150 м")),
        Place::new(
            "8",
            "Московский вокзал",
            "Невский пр., 85",
            "spb",
            PlaceCategory::Transport,
        )
        .with_photo("/photos/moskovsky.jpg")
        .with_accessibility(&[Motor, Visual, Temporary, Situational])
        .with_rating("3.7", "480")
        .with_entrance(EntranceType::Main, "1")
        .with_facilities(true, true, true)
        .with_parking(Some(ParkingType::Lot), Some("100 м")),
        Place::new(
            "9",
            "Библиотека им. Маяковского",
            "наб. реки Фонтанки, 44",
            "spb",
            PlaceCategory::Education,
        )
        .with_accessibility(&[Visual, Hearing, Cognitive, Sensory])
        .with_rating("4.6", "95")
        .approved()
        .with_entrance(EntranceType::Secondary, "2")
        .with_facilities(true, false, true),
        Place::new(
            "10",
            "Ресторан «Тюбетей»",
            "ул. Баумана, 58",
            "kazan",
            PlaceCategory::CafeRestaurant,
        )
        .with_accessibility(&[Motor, Hearing])
        .with_rating("4.4", "76")
        .with_entrance(EntranceType::Main, "1")
        .with_facilities(false, true, false)
        .with_parking(Some(ParkingType::Street), Some("20 м")),
        Place::new(
            "11",
            "Казанский Кремль",
            "Кремлёвская ул., 2",
            "kazan",
            PlaceCategory::Culture,
        )
        .with_photo("/photos/kazan-kremlin.jpg")
        .with_accessibility(&[Motor, Visual, Situational])
        .with_rating("4.9", "1502")
        .approved(),
        Place::new(
            "12",
            "Ельцин Центр",
            "ул. Бориса Ельцина, 3",
            "ekb",
            PlaceCategory::Culture,
        )
        .with_photo("/photos/yeltsin.jpg")
        .with_accessibility(&[Motor, Visual, Hearing, Cognitive, Speech, Sensory])
        .with_rating("4.8", "640")
        .approved()
        .with_entrance(EntranceType::Main, "1")
        .with_facilities(true, true, true)
        .with_parking(Some(ParkingType::Garage), Some("50 м")),
        Place::new(
            "13",
            "Сбербанк, отделение на Красном",
            "Красный пр., 46",
            "novosibirsk",
            PlaceCategory::Bank,
        )
        .with_accessibility(&[Motor, Visual])
        .with_rating("3.5", "22")
        .with_entrance(EntranceType::Main, "1")
        .with_facilities(false, true, false),
        Place::new(
            "14",
            "Гостиница «Волна»",
            "Нижне-Волжская наб., 11",
            "nn",
            PlaceCategory::Accommodation,
        )
        .with_accessibility(&[Motor, Temporary])
        .with_rating("4.1", "38")
        .with_entrance(EntranceType::Main, "1")
        .with_facilities(true, true, true)
        .with_parking(Some(ParkingType::Lot), Some("10 м")),
    ]
}

fn builtin_comments() -> Vec<Comment> {
    vec![
        Comment::new(
            "c1",
            "1",
            "Анна Смирнова",
            "2024-05-12",
            "Пандус у входа удобный, персонал помог с заказом.",
        ),
        Comment::new(
            "c2",
            "1",
            "Игорь Петров",
            "2024-06-01",
            "Есть меню шрифтом Брайля, но столики стоят тесно.",
        ),
        Comment::new(
            "c3",
            "2",
            "Мария Кузнецова",
            "2024-04-20",
            "Лифты работают, туалет для маломобильных на каждом этаже.",
        ),
        Comment::new(
            "c4",
            "3",
            "Олег",
            "2024-03-02",
            "Вход для колясок только со двора, табличек нет.",
        ),
        Comment::new(
            "c5",
            "4",
            "Елена Волкова",
            "2024-07-15T11:20:00+03:00",
            "Есть сурдопереводчик по записи, очередь электронная со звуком.",
        ),
        Comment::new(
            "c6",
            "5",
            "Дмитрий Орлов",
            "2024-08-09",
            "Дорожки ровные, много скамеек. В выходные шумно.",
        ),
        Comment::new(
            "c7",
            "7",
            "Светлана Иванова",
            "2024-02-28",
            "Коляску выдают бесплатно, маршрут без лестниц есть, спросите на входе.",
        ),
        Comment::new(
            "c8",
            "7",
            "Павел",
            "2024-09-01",
            "Аудиогид с тифлокомментариями, очень рекомендую.",
        ),
        Comment::new(
            "c9",
            "8",
            "Наталья Соколова",
            "2024-01-17",
            "Помощь маломобильным пассажирам нужно заказывать заранее.",
        ),
        Comment::new(
            "c10",
            "12",
            "Артём Лебедев",
            "2024-06-23",
            "Всё продумано: тактильные схемы, индукционные петли, лифты.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_place_ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<_> = catalog.places().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.places().len());
    }

    #[test]
    fn builtin_places_reference_known_localities() {
        let catalog = Catalog::builtin();
        for place in catalog.places() {
            assert!(
                catalog.has_locality(&place.locality_id),
                "place {} references unknown locality {}",
                place.id,
                place.locality_id
            );
        }
    }

    #[test]
    fn builtin_comments_reference_known_places() {
        let catalog = Catalog::builtin();
        for comment in catalog.comments() {
            assert!(catalog.place(&comment.place_id).is_some());
        }
    }

    #[test]
    fn default_locality_is_first() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.default_locality().unwrap().id, "moscow");
    }

    #[test]
    fn place_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.place("7").unwrap().name, "Эрмитаж");
        assert!(catalog.place("missing").is_none());
        assert!(catalog.place("").is_none());
    }

    #[test]
    fn comments_lookup_by_place() {
        let catalog = Catalog::builtin();
        let comments = catalog.comments_for("7");
        assert_eq!(comments.len(), 2);
        assert!(comments.iter().all(|c| c.place_id == "7"));
        assert!(catalog.comments_for("14").is_empty());
        assert!(catalog.comments_for("").is_empty());
    }
}
