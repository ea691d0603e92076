//! # Rendering Module
//!
//! Plain `String` builders for every view, colored with `colored`. Layout
//! calculations (width, truncation, padding) use `unicode-width` because
//! place names are Cyrillic and icons are emoji.
//!
//! Render functions return strings instead of printing so they can be tested
//! with canned data; only [`print_messages`] writes to stdout directly.

use accessmapapp::commands::{
    CmdMessage, ListedPlace, MessageLevel, PlaceDetail, Receipt, ScaleStatus,
};
use accessmapapp::model::{Comment, Locality, Place, PlaceCategory};
use accessmapapp::preferences::{ScaleTarget, TextScale};
use accessmapapp::wizard::rate_place::rating_label;
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::cell::Cell;
use std::rc::Rc;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Line width at 100% text scale.
pub const LINE_WIDTH: usize = 80;
/// Narrowest line we render, whatever the scale.
pub const MIN_LINE_WIDTH: usize = 40;
/// Columns taken by everything on a list line except the name.
const LIST_FIXED_WIDTH: usize = 30;
pub const FAVORITE_MARKER: &str = "♥";
const ELLIPSIS: &str = "…";

/// Scale target for the terminal: keeps the current factor where the
/// renderer can read it.
#[derive(Clone, Debug)]
pub struct RenderScale(Rc<Cell<f64>>);

impl Default for RenderScale {
    fn default() -> Self {
        RenderScale(Rc::new(Cell::new(TextScale::DEFAULT.factor())))
    }
}

impl RenderScale {
    pub fn factor(&self) -> f64 {
        self.0.get()
    }

    /// Characters per line: bigger text, shorter lines.
    pub fn line_width(&self) -> usize {
        let width = (LINE_WIDTH as f64 / self.factor()).round() as usize;
        width.max(MIN_LINE_WIDTH)
    }
}

impl ScaleTarget for RenderScale {
    fn apply(&mut self, factor: f64) {
        self.0.set(factor);
    }

    fn clear(&mut self) {
        self.0.set(TextScale::DEFAULT.factor());
    }
}

/// Cut `text` to at most `max_width` columns, ending in an ellipsis when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(ELLIPSIS.width());
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}

fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

pub fn stars(filled: u8) -> String {
    let filled = usize::from(filled.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "да"
    } else {
        "нет"
    }
}

fn accessibility_icons(place: &Place) -> String {
    place
        .accessibility
        .iter()
        .map(|tag| tag.info().icon)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_list_header(locality_name: &str, active_filters: usize) -> String {
    let mut out = format!("{}", locality_name.bold());
    if active_filters > 0 {
        out.push_str(&format!(" {}", format!("(фильтров: {})", active_filters).dimmed()));
    }
    out.push('\n');
    out
}

pub fn render_place_list(places: &[ListedPlace], line_width: usize) -> String {
    let name_width = line_width.saturating_sub(LIST_FIXED_WIDTH).max(10);
    let mut out = String::new();

    for listed in places {
        let place = &listed.place;
        let marker = if listed.is_favorite {
            FAVORITE_MARKER.red().to_string()
        } else {
            " ".to_string()
        };
        let name = pad_to_width(&truncate_to_width(&place.name, name_width), name_width);
        let rating = format!("{} {}", "★".yellow(), listed.rating.display());

        out.push_str(&format!(
            "{} {:>3}  {}  {} {}  {}\n",
            marker,
            place.id.dimmed(),
            name,
            place.place_category.info().icon,
            rating,
            accessibility_icons(place)
        ));
    }
    out
}

pub fn render_detail(detail: &PlaceDetail, line_width: usize) -> String {
    let place = &detail.place.place;
    let mut out = String::new();

    let title = truncate_to_width(&place.name, line_width);
    if detail.place.is_favorite {
        out.push_str(&format!("{} {}\n", title.bold(), FAVORITE_MARKER.red()));
    } else {
        out.push_str(&format!("{}\n", title.bold()));
    }
    match &detail.locality {
        Some(locality) => out.push_str(&format!("{}, {}\n", place.address, locality.name)),
        None => out.push_str(&format!("{}\n", place.address)),
    }

    let category = place.place_category.info();
    let rating = &detail.place.rating;
    out.push_str(&format!(
        "{} {} · {} {} ({})\n",
        category.icon,
        category.name,
        stars(rating.stars).yellow(),
        rating.display(),
        rating.reviews
    ));
    if place.is_approved == Some(false) {
        out.push_str(&format!("{}\n", "На модерации".yellow()));
    }

    if !place.accessibility.is_empty() {
        out.push_str(&format!("\n{}\n", "Доступность".bold()));
        for tag in &place.accessibility {
            let info = tag.info();
            out.push_str(&format!("  {} {}\n", info.icon, info.label));
        }
    }

    let mut facilities = Vec::new();
    if let Some(entrance) = place.entrance_type {
        match &place.floor {
            Some(floor) => facilities.push(format!("Вход: {}, этаж {}", entrance.label(), floor)),
            None => facilities.push(format!("Вход: {}", entrance.label())),
        }
    }
    if let Some(v) = place.has_elevator {
        facilities.push(format!("Лифт: {}", yes_no(v)));
    }
    if let Some(v) = place.has_ramp {
        facilities.push(format!("Пандус: {}", yes_no(v)));
    }
    if let Some(v) = place.has_disabled_toilet {
        facilities.push(format!("Туалет для инвалидов: {}", yes_no(v)));
    }
    if let Some(parking) = &place.parking {
        let mut line = format!("Парковка: {}", yes_no(parking.available));
        if let Some(kind) = parking.kind {
            line.push_str(&format!(", {}", kind.label().to_lowercase()));
        }
        if let Some(distance) = &parking.distance {
            line.push_str(&format!(", {}", distance));
        }
        facilities.push(line);
    }
    if !facilities.is_empty() {
        out.push('\n');
        for line in facilities {
            out.push_str(&format!("  {}\n", line));
        }
    }

    if !detail.comments.is_empty() {
        out.push_str(&format!(
            "\n{}\n",
            format!("Комментарии ({})", detail.comments.len()).bold()
        ));
        for comment in &detail.comments {
            out.push_str(&render_comment(comment, line_width));
        }
    }
    out
}

fn render_comment(comment: &Comment, line_width: usize) -> String {
    let when = match comment.parsed_date() {
        Some(date) => format!("{} ({})", comment.display_date(), format_time_ago(date)),
        None => comment.display_date(),
    };
    let body_width = line_width.saturating_sub(6).max(10);
    format!(
        "  {:<4}{} · {}\n      {}\n",
        comment.initials().cyan(),
        comment.author.bold(),
        when.dimmed(),
        truncate_to_width(&comment.body, body_width)
    )
}

pub fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::with_language(timeago::languages::russian::Russian);
    formatter.convert(duration.to_std().unwrap_or_default())
}

pub fn render_localities(localities: &[Locality], current: &str) -> String {
    let id_width = localities.iter().map(|l| l.id.width()).max().unwrap_or(0);
    let mut out = String::new();
    for locality in localities {
        let marker = if locality.id == current { "*" } else { " " };
        out.push_str(&format!(
            "{} {}  {}\n",
            marker.green(),
            pad_to_width(&locality.id, id_width),
            locality.name
        ));
    }
    out
}

pub fn render_categories(categories: &[PlaceCategory]) -> String {
    let id_width = categories
        .iter()
        .map(|c| c.as_str().width())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for category in categories {
        let info = category.info();
        out.push_str(&format!(
            "{} {}  {}\n",
            info.icon,
            pad_to_width(category.as_str(), id_width),
            info.name
        ));
    }
    out
}

pub fn render_scale(status: &ScaleStatus) -> String {
    let control = |label: &str, enabled: bool| {
        if enabled {
            label.to_string()
        } else {
            label.dimmed().to_string()
        }
    };
    format!(
        "Размер текста: {}  {} {} {}\n",
        status.scale.to_string().bold(),
        control("[up]", status.can_increase),
        control("[down]", status.can_decrease),
        control("[reset]", status.can_reset),
    )
}

pub fn render_receipt(receipt: &Receipt) -> String {
    match receipt {
        Receipt::Place(submission) => {
            let category = submission.category.info();
            format!(
                "Номер заявки: {}\n{}, {}\n{} {}\n",
                submission.id.to_string().dimmed(),
                submission.name.bold(),
                submission.address,
                category.icon,
                category.name
            )
        }
        Receipt::Rating(submission) => {
            let label = rating_label(submission.rating).unwrap_or_default();
            format!(
                "{} {}\nНомер отзыва: {}\n",
                stars(submission.rating).yellow(),
                label,
                submission.id.to_string().dimmed()
            )
        }
    }
}

/// Prints command messages to stdout, colored by level.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}
