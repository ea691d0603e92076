//! Text scale preference.
//!
//! A single integer percentage in `[80, 150]`, moved in steps of 10 and
//! persisted under `page-scale` as a decimal string. Every change is written
//! immediately and pushed to a [`ScaleTarget`] as a factor (`percent / 100`).

use crate::error::Result;
use crate::store::{KeyValueBackend, PAGE_SCALE_KEY};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TextScale(u16);

impl TextScale {
    pub const MIN: TextScale = TextScale(80);
    pub const MAX: TextScale = TextScale(150);
    pub const DEFAULT: TextScale = TextScale(100);
    pub const STEP: u16 = 10;

    /// `None` when `percent` is outside `[MIN, MAX]`.
    pub fn new(percent: i64) -> Option<Self> {
        if (Self::MIN.0 as i64..=Self::MAX.0 as i64).contains(&percent) {
            Some(TextScale(percent as u16))
        } else {
            None
        }
    }

    /// Parse a stored value.
    ///
    /// Leading whitespace is skipped and the longest integer prefix is read,
    /// so `"110"`, `" 110"` and `"110.5"` all give 110. Anything without a
    /// leading integer, or out of range, is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_start();
        let sign_len = usize::from(trimmed.starts_with(['-', '+']));
        let digits = trimmed[sign_len..]
            .chars()
            .take_while(char::is_ascii_digit)
            .count();
        if digits == 0 {
            return None;
        }
        trimmed[..sign_len + digits]
            .parse::<i64>()
            .ok()
            .and_then(Self::new)
    }

    pub fn percent(self) -> u16 {
        self.0
    }

    pub fn factor(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn increased(self) -> Self {
        TextScale((self.0 + Self::STEP).min(Self::MAX.0))
    }

    pub fn decreased(self) -> Self {
        TextScale(self.0.saturating_sub(Self::STEP).max(Self::MIN.0))
    }
}

impl Default for TextScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TextScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<i64> for TextScale {
    type Error = String;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        TextScale::new(value).ok_or_else(|| {
            format!(
                "text scale {} outside {}..={}",
                value,
                Self::MIN.0,
                Self::MAX.0
            )
        })
    }
}

impl From<TextScale> for i64 {
    fn from(scale: TextScale) -> i64 {
        i64::from(scale.0)
    }
}

/// Whatever renders text and should follow the preference.
pub trait ScaleTarget {
    fn apply(&mut self, factor: f64);

    /// Remove any override and fall back to the renderer's own default.
    fn clear(&mut self);
}

/// A target that ignores the scale, for callers that only need the value.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTarget;

impl ScaleTarget for NoopTarget {
    fn apply(&mut self, _factor: f64) {}
    fn clear(&mut self) {}
}

pub struct TextScaleStore<B: KeyValueBackend, T: ScaleTarget = NoopTarget> {
    backend: Rc<B>,
    target: T,
    scale: TextScale,
}

impl<B: KeyValueBackend, T: ScaleTarget> TextScaleStore<B, T> {
    /// Load the stored scale (falling back to 100) and apply it. Never fails.
    pub fn hydrate(backend: Rc<B>, mut target: T) -> Self {
        let scale = match backend.get(PAGE_SCALE_KEY) {
            Ok(Some(raw)) => TextScale::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "invalid stored text scale, using default");
                TextScale::DEFAULT
            }),
            Ok(None) => TextScale::DEFAULT,
            Err(err) => {
                tracing::warn!(error = %err, "could not read text scale, using default");
                TextScale::DEFAULT
            }
        };
        target.apply(scale.factor());

        Self {
            backend,
            target,
            scale,
        }
    }

    pub fn scale(&self) -> TextScale {
        self.scale
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn can_increase(&self) -> bool {
        self.scale < TextScale::MAX
    }

    pub fn can_decrease(&self) -> bool {
        self.scale > TextScale::MIN
    }

    pub fn can_reset(&self) -> bool {
        self.scale != TextScale::DEFAULT
    }

    pub fn increase(&mut self) -> Result<TextScale> {
        self.set(self.scale.increased())
    }

    pub fn decrease(&mut self) -> Result<TextScale> {
        self.set(self.scale.decreased())
    }

    pub fn reset(&mut self) -> Result<TextScale> {
        self.set(TextScale::DEFAULT)
    }

    fn set(&mut self, next: TextScale) -> Result<TextScale> {
        if next == self.scale {
            return Ok(self.scale);
        }
        self.backend
            .set(PAGE_SCALE_KEY, &next.percent().to_string())?;
        self.scale = next;
        self.target.apply(next.factor());
        tracing::debug!(scale = next.percent(), "text scale persisted");
        Ok(next)
    }
}

impl<B: KeyValueBackend, T: ScaleTarget> Drop for TextScaleStore<B, T> {
    fn drop(&mut self) {
        self.target.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemBackend;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Apply(f64),
        Clear,
    }

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<Call>>>);

    impl ScaleTarget for Recorder {
        fn apply(&mut self, factor: f64) {
            self.0.borrow_mut().push(Call::Apply(factor));
        }
        fn clear(&mut self) {
            self.0.borrow_mut().push(Call::Clear);
        }
    }

    fn store_with(raw: Option<&str>) -> (Rc<MemBackend>, TextScaleStore<MemBackend, NoopTarget>) {
        let mut backend = MemBackend::new();
        if let Some(raw) = raw {
            backend = backend.with_value(PAGE_SCALE_KEY, raw);
        }
        let backend = Rc::new(backend);
        let store = TextScaleStore::hydrate(backend.clone(), NoopTarget);
        (backend, store)
    }

    #[test]
    fn parse_accepts_integer_prefix_in_range() {
        assert_eq!(TextScale::parse("110"), TextScale::new(110));
        assert_eq!(TextScale::parse(" 90"), TextScale::new(90));
        assert_eq!(TextScale::parse("120.7"), TextScale::new(120));
        assert_eq!(TextScale::parse("85"), TextScale::new(85));
    }

    #[test]
    fn parse_rejects_garbage_and_out_of_range() {
        for raw in ["", "abc", "px100", "79", "151", "-100", "1e3", "NaN"] {
            assert_eq!(TextScale::parse(raw), None, "input {raw:?}");
        }
    }

    #[test]
    fn hydrate_uses_stored_or_default() {
        assert_eq!(store_with(Some("130")).1.scale().percent(), 130);
        assert_eq!(store_with(Some("9000")).1.scale(), TextScale::DEFAULT);
        assert_eq!(store_with(Some("big")).1.scale(), TextScale::DEFAULT);
        assert_eq!(store_with(None).1.scale(), TextScale::DEFAULT);
    }

    #[test]
    fn increase_three_then_five_more_clamps_at_max() {
        let (backend, mut store) = store_with(None);
        for _ in 0..3 {
            store.increase().unwrap();
        }
        assert_eq!(store.scale().percent(), 130);
        assert_eq!(backend.raw(PAGE_SCALE_KEY).as_deref(), Some("130"));

        for _ in 0..5 {
            store.increase().unwrap();
        }
        assert_eq!(store.scale(), TextScale::MAX);
        assert!(!store.can_increase());
        // 110, 120, 130, 140, 150; the clamped calls write nothing
        assert_eq!(backend.write_count(), 5);
    }

    #[test]
    fn decrease_clamps_at_min() {
        let (_, mut store) = store_with(Some("90"));
        store.decrease().unwrap();
        store.decrease().unwrap();
        assert_eq!(store.scale(), TextScale::MIN);
        assert!(!store.can_decrease());
        assert!(store.can_increase());
    }

    #[test]
    fn scale_never_leaves_bounds() {
        let (_, mut store) = store_with(None);
        let moves = [1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0];
        for up in moves {
            let scale = if up == 1 {
                store.increase().unwrap()
            } else {
                store.decrease().unwrap()
            };
            assert!(scale >= TextScale::MIN && scale <= TextScale::MAX);
        }
    }

    #[test]
    fn reset_returns_to_default() {
        let (backend, mut store) = store_with(Some("140"));
        assert!(store.can_reset());
        store.reset().unwrap();
        assert_eq!(store.scale(), TextScale::DEFAULT);
        assert!(!store.can_reset());
        assert_eq!(backend.raw(PAGE_SCALE_KEY).as_deref(), Some("100"));
    }

    #[test]
    fn write_failure_leaves_scale_unchanged() {
        let (backend, mut store) = store_with(None);
        backend.set_simulate_write_error(true);
        assert!(store.increase().is_err());
        assert_eq!(store.scale(), TextScale::DEFAULT);
    }

    #[test]
    fn target_follows_changes_and_is_cleared_on_drop() {
        let recorder = Recorder::default();
        let log = recorder.0.clone();
        let backend = Rc::new(MemBackend::new().with_value(PAGE_SCALE_KEY, "120"));

        let mut store = TextScaleStore::hydrate(backend, recorder);
        store.decrease().unwrap();
        store.reset().unwrap();
        store.reset().unwrap();
        drop(store);

        assert_eq!(
            *log.borrow(),
            vec![
                Call::Apply(1.2),
                Call::Apply(1.1),
                Call::Apply(1.0),
                Call::Clear
            ]
        );
    }
}
