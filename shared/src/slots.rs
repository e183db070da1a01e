//! Time slots and the mock availability generator.

use crate::date_key::DateKey;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Number of days, starting today, that get generated availability
pub const DAYS_TO_GENERATE: u32 = 14;

/// Status weights in sampling order. Order matters: cumulative thresholds
/// are built front to back and the last entry is the rounding fallback.
pub const DEFAULT_STATUS_WEIGHTS: [(SlotStatus, f64); 4] = [
    (SlotStatus::Booked, 0.4),
    (SlotStatus::Pending, 0.1),
    (SlotStatus::Unavailable, 0.1),
    (SlotStatus::Available, 0.4),
];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SlotTimeError {
    #[error("Slot time must look like HH:MM, got {0:?}")]
    InvalidFormat(String),
    #[error("Slot time {0:?} is out of range")]
    OutOfRange(String),
}

/// Wall-clock start of a slot, `HH:MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime {
    hour: u32,
    minute: u32,
}

impl SlotTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn parse(input: &str) -> Result<Self, SlotTimeError> {
        let invalid = || SlotTimeError::InvalidFormat(input.to_string());

        let (hours, minutes) = input.split_once(':').ok_or_else(invalid)?;
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(hours) || !two_digits(minutes) {
            return Err(invalid());
        }

        let hour = hours.parse::<u32>().map_err(|_| invalid())?;
        let minute = minutes.parse::<u32>().map_err(|_| invalid())?;
        Self::new(hour, minute).ok_or_else(|| SlotTimeError::OutOfRange(input.to_string()))
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for SlotTime {
    type Err = SlotTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for SlotTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Booked,
    Pending,
    Unavailable,
}

impl SlotStatus {
    pub const ALL: [SlotStatus; 4] = [
        SlotStatus::Available,
        SlotStatus::Booked,
        SlotStatus::Pending,
        SlotStatus::Unavailable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Available => "available",
            SlotStatus::Booked => "booked",
            SlotStatus::Pending => "pending",
            SlotStatus::Unavailable => "unavailable",
        }
    }

    /// Legend label
    pub fn label(&self) -> &'static str {
        match self {
            SlotStatus::Available => "Available",
            SlotStatus::Booked => "Booked",
            SlotStatus::Pending => "Pending",
            SlotStatus::Unavailable => "Unavailable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: SlotTime,
    pub status: SlotStatus,
}

impl TimeSlot {
    pub fn available(time: SlotTime) -> Self {
        Self { time, status: SlotStatus::Available }
    }

    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available
    }
}

/// The fixed daily template: 09:00 through 17:00, hourly
pub fn default_slot_times() -> Vec<SlotTime> {
    (9..=17).map(|hour| SlotTime { hour, minute: 0 }).collect()
}

/// Template slots, all available
pub fn default_template() -> Vec<TimeSlot> {
    default_slot_times().into_iter().map(TimeSlot::available).collect()
}

/// Source of per-day status overrides for the booking calendar.
///
/// Days the provider knows nothing about return an empty slice; the slot
/// picker then falls back to the all-available template.
pub trait AvailabilityProvider {
    fn overrides_for(&self, date: DateKey) -> &[TimeSlot];
}

/// Generated availability keyed by date, slots kept in template order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySlotMap {
    days: BTreeMap<DateKey, Vec<TimeSlot>>,
}

impl DaySlotMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: DateKey, slots: Vec<TimeSlot>) {
        self.days.insert(date, slots);
    }

    pub fn get(&self, date: &DateKey) -> Option<&[TimeSlot]> {
        self.days.get(date).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &[TimeSlot])> {
        self.days.iter().map(|(date, slots)| (date, slots.as_slice()))
    }
}

impl AvailabilityProvider for DaySlotMap {
    fn overrides_for(&self, date: DateKey) -> &[TimeSlot] {
        self.get(&date).unwrap_or(&[])
    }
}

/// Produces mock availability by weighted random sampling
#[derive(Debug, Clone, PartialEq)]
pub struct SlotGenerator {
    pub days: u32,
    pub slot_times: Vec<SlotTime>,
    pub weights: Vec<(SlotStatus, f64)>,
}

impl Default for SlotGenerator {
    fn default() -> Self {
        Self {
            days: DAYS_TO_GENERATE,
            slot_times: default_slot_times(),
            weights: DEFAULT_STATUS_WEIGHTS.to_vec(),
        }
    }
}

impl SlotGenerator {
    /// Map a uniform draw in `[0, 1)` onto a status via cumulative weights.
    ///
    /// A draw at or beyond the final threshold falls back to the last
    /// status in the weight list.
    pub fn sample_status(&self, draw: f64) -> SlotStatus {
        let mut cumulative = 0.0;
        for (status, weight) in &self.weights {
            cumulative += weight;
            if draw < cumulative {
                return *status;
            }
        }
        self.weights
            .last()
            .map(|(status, _)| *status)
            .unwrap_or(SlotStatus::Available)
    }

    /// Generate `days` consecutive days starting at `today`
    pub fn generate<R: Rng + ?Sized>(&self, today: DateKey, rng: &mut R) -> DaySlotMap {
        let mut map = DaySlotMap::new();

        for offset in 0..self.days {
            let date = today.add_days(i64::from(offset));
            let slots = self
                .slot_times
                .iter()
                .map(|&time| TimeSlot {
                    time,
                    status: self.sample_status(rng.gen::<f64>()),
                })
                .collect::<Vec<_>>();

            let open = slots.iter().filter(|slot| slot.is_available()).count();
            debug!(%date, open, total = slots.len(), "generated slot availability");
            map.insert(date, slots);
        }

        map
    }

    /// Deterministic generation for tests and reproducible demos
    pub fn generate_seeded(&self, today: DateKey, seed: u64) -> DaySlotMap {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(today, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> DateKey {
        DateKey::parse("2026-10-19").unwrap()
    }

    #[test]
    fn test_slot_time_parse() {
        let time = SlotTime::parse("09:00").unwrap();
        assert_eq!(time.hour(), 9);
        assert_eq!(time.minute(), 0);
        assert_eq!(time.to_string(), "09:00");

        assert_eq!(SlotTime::parse("17:30").unwrap(), SlotTime::new(17, 30).unwrap());

        assert!(matches!(SlotTime::parse("9:00"), Err(SlotTimeError::InvalidFormat(_))));
        assert!(matches!(SlotTime::parse("0900"), Err(SlotTimeError::InvalidFormat(_))));
        assert!(matches!(SlotTime::parse("24:00"), Err(SlotTimeError::OutOfRange(_))));
        assert!(matches!(SlotTime::parse("12:60"), Err(SlotTimeError::OutOfRange(_))));
    }

    #[test]
    fn test_default_template() {
        let template = default_template();
        let times: Vec<String> = template.iter().map(|slot| slot.time.to_string()).collect();
        assert_eq!(
            times,
            vec!["09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00"]
        );
        assert!(template.iter().all(TimeSlot::is_available));
    }

    #[test]
    fn test_sample_status_thresholds() {
        let generator = SlotGenerator::default();

        // booked covers [0.0, 0.4)
        assert_eq!(generator.sample_status(0.0), SlotStatus::Booked);
        assert_eq!(generator.sample_status(0.39), SlotStatus::Booked);
        // pending covers [0.4, 0.5)
        assert_eq!(generator.sample_status(0.4), SlotStatus::Pending);
        assert_eq!(generator.sample_status(0.45), SlotStatus::Pending);
        // unavailable covers [0.5, 0.6)
        assert_eq!(generator.sample_status(0.55), SlotStatus::Unavailable);
        // available covers the rest
        assert_eq!(generator.sample_status(0.6), SlotStatus::Available);
        assert_eq!(generator.sample_status(0.999), SlotStatus::Available);
    }

    #[test]
    fn test_sample_status_falls_back_to_last() {
        let generator = SlotGenerator::default();
        assert_eq!(generator.sample_status(1.0), SlotStatus::Available);

        // Weights that do not sum to one still fall back to the last entry
        let short = SlotGenerator {
            weights: vec![(SlotStatus::Booked, 0.2), (SlotStatus::Pending, 0.2)],
            ..SlotGenerator::default()
        };
        assert_eq!(short.sample_status(0.9), SlotStatus::Pending);
    }

    #[test]
    fn test_generate_shape() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let map = SlotGenerator::default().generate_seeded(today(), 7);
        assert_eq!(map.len(), 14);

        let template_times = default_slot_times();
        for (_, slots) in map.iter() {
            assert_eq!(slots.len(), 9);
            let times: Vec<SlotTime> = slots.iter().map(|slot| slot.time).collect();
            assert_eq!(times, template_times);
            assert!(slots.iter().all(|slot| SlotStatus::ALL.contains(&slot.status)));
        }
    }

    #[test]
    fn test_generate_covers_today_through_two_weeks() {
        let map = SlotGenerator::default().generate_seeded(today(), 1);

        assert!(map.get(&today()).is_some());
        assert!(map.get(&today().add_days(13)).is_some());
        assert!(map.get(&today().add_days(14)).is_none());
        assert!(map.get(&today().add_days(-1)).is_none());
    }

    #[test]
    fn test_generate_seeded_is_reproducible() {
        let generator = SlotGenerator::default();
        let a = generator.generate_seeded(today(), 42);
        let b = generator.generate_seeded(today(), 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_uses_every_status_over_many_draws() {
        let generator = SlotGenerator {
            days: 60,
            ..SlotGenerator::default()
        };
        let map = generator.generate_seeded(today(), 3);

        // 540 draws; each category has at least a 10% share
        for status in SlotStatus::ALL {
            let seen = map
                .iter()
                .flat_map(|(_, slots)| slots.iter())
                .any(|slot| slot.status == status);
            assert!(seen, "expected at least one {} slot", status.as_str());
        }
    }

    #[test]
    fn test_provider_unknown_day_is_empty() {
        let map = SlotGenerator::default().generate_seeded(today(), 5);
        assert!(map.overrides_for(today().add_days(30)).is_empty());
        assert_eq!(map.overrides_for(today()).len(), 9);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let slot = TimeSlot {
            time: SlotTime::new(10, 0).unwrap(),
            status: SlotStatus::Unavailable,
        };
        let json = serde_json::to_string(&slot).unwrap();
        assert_eq!(json, r#"{"time":"10:00","status":"unavailable"}"#);
    }
}
