use crate::booking::BookingSelection;
use crate::date_key::DateKey;
use crate::slots::{default_template, AvailabilityProvider, SlotStatus, TimeSlot};

/// Visual treatment of a slot button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAppearance {
    Available,
    Selected,
    Booked,
    Pending,
    Unavailable,
    /// Day is in the past, status no longer matters
    Past,
}

impl SlotAppearance {
    pub fn css_class(&self) -> &'static str {
        match self {
            SlotAppearance::Available => "time-slot available",
            SlotAppearance::Selected => "time-slot available selected",
            SlotAppearance::Booked => "time-slot booked",
            SlotAppearance::Pending => "time-slot pending",
            SlotAppearance::Unavailable => "time-slot unavailable",
            SlotAppearance::Past => "time-slot past",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotView {
    pub slot: TimeSlot,
    pub selectable: bool,
    pub is_selected: bool,
    pub appearance: SlotAppearance,
}

/// The template for `date` with provider overrides applied.
///
/// Template order is kept; a template time with no override stays available.
pub fn merged_slots<P: AvailabilityProvider + ?Sized>(
    date: DateKey,
    provider: &P,
) -> Vec<TimeSlot> {
    let overrides = provider.overrides_for(date);
    default_template()
        .into_iter()
        .map(|default_slot| {
            overrides
                .iter()
                .find(|slot| slot.time == default_slot.time)
                .copied()
                .unwrap_or(default_slot)
        })
        .collect()
}

/// Merge availability for one day and decide how each slot renders
pub fn day_slots<P: AvailabilityProvider + ?Sized>(
    date: DateKey,
    is_past: bool,
    selection: &BookingSelection,
    provider: &P,
) -> Vec<SlotView> {
    merged_slots(date, provider)
        .into_iter()
        .map(|slot| slot_view(slot, date, is_past, selection))
        .collect()
}

fn slot_view(
    slot: TimeSlot,
    date: DateKey,
    is_past: bool,
    selection: &BookingSelection,
) -> SlotView {
    let is_selected = selection.is(date, slot.time);
    let selectable = slot.is_available() && !is_past;

    let appearance = if is_past {
        SlotAppearance::Past
    } else {
        match slot.status {
            SlotStatus::Available if is_selected => SlotAppearance::Selected,
            SlotStatus::Available => SlotAppearance::Available,
            SlotStatus::Booked => SlotAppearance::Booked,
            SlotStatus::Pending => SlotAppearance::Pending,
            SlotStatus::Unavailable => SlotAppearance::Unavailable,
        }
    };

    SlotView {
        slot,
        selectable,
        is_selected,
        appearance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::{DaySlotMap, SlotTime};

    fn key(raw: &str) -> DateKey {
        DateKey::parse(raw).unwrap()
    }

    fn at(raw: &str) -> SlotTime {
        SlotTime::parse(raw).unwrap()
    }

    fn sparse_map(date: DateKey) -> DaySlotMap {
        // Only three overrides, like a hand-maintained schedule would have
        let mut map = DaySlotMap::new();
        map.insert(
            date,
            vec![
                TimeSlot { time: at("09:00"), status: SlotStatus::Booked },
                TimeSlot { time: at("10:00"), status: SlotStatus::Pending },
                TimeSlot { time: at("14:00"), status: SlotStatus::Unavailable },
            ],
        );
        map
    }

    #[test]
    fn test_merge_overlays_matching_times_only() {
        let date = key("2026-10-20");
        let merged = merged_slots(date, &sparse_map(date));

        assert_eq!(merged.len(), 9);
        assert_eq!(merged[0].status, SlotStatus::Booked);
        assert_eq!(merged[1].status, SlotStatus::Pending);
        assert_eq!(merged[2].status, SlotStatus::Available);
        assert_eq!(merged[5].status, SlotStatus::Unavailable);
        assert_eq!(merged[8].time, at("17:00"));
        assert_eq!(merged[8].status, SlotStatus::Available);
    }

    #[test]
    fn test_merge_ignores_off_template_overrides() {
        let date = key("2026-10-20");
        let mut map = DaySlotMap::new();
        map.insert(date, vec![TimeSlot { time: at("08:30"), status: SlotStatus::Booked }]);

        let merged = merged_slots(date, &map);
        assert_eq!(merged.len(), 9);
        assert!(merged.iter().all(TimeSlot::is_available));
    }

    #[test]
    fn test_merge_unknown_day_is_all_available() {
        let merged = merged_slots(key("2027-01-01"), &DaySlotMap::new());
        assert_eq!(merged, default_template());
    }

    #[test]
    fn test_only_available_slots_are_selectable() {
        let date = key("2026-10-20");
        let views = day_slots(date, false, &BookingSelection::default(), &sparse_map(date));

        assert!(!views[0].selectable);
        assert_eq!(views[0].appearance, SlotAppearance::Booked);
        assert!(!views[1].selectable);
        assert_eq!(views[1].appearance, SlotAppearance::Pending);
        assert!(views[2].selectable);
        assert_eq!(views[2].appearance, SlotAppearance::Available);
        assert!(!views[5].selectable);
        assert_eq!(views[5].appearance, SlotAppearance::Unavailable);
    }

    #[test]
    fn test_past_day_disables_everything() {
        let date = key("2026-10-01");
        let views = day_slots(date, true, &BookingSelection::default(), &DaySlotMap::new());

        assert!(views.iter().all(|view| !view.selectable));
        assert!(views.iter().all(|view| view.appearance == SlotAppearance::Past));

        // Overridden and template slots alike are inert on a past day
        let views = day_slots(date, true, &BookingSelection::default(), &sparse_map(date));
        assert!(views.iter().any(|view| view.slot.is_available()));
        assert!(views.iter().any(|view| view.slot.status == SlotStatus::Booked));
        assert!(views.iter().all(|view| !view.selectable));
        assert!(views.iter().all(|view| view.appearance == SlotAppearance::Past));
    }

    #[test]
    fn test_selection_is_per_date_and_time() {
        let date = key("2026-10-20");
        let other_day = key("2026-10-21");
        let selection = BookingSelection {
            date: Some(date),
            time: Some(at("11:00")),
        };

        let views = day_slots(date, false, &selection, &DaySlotMap::new());
        let selected: Vec<_> = views.iter().filter(|view| view.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].slot.time, at("11:00"));
        assert_eq!(selected[0].appearance, SlotAppearance::Selected);
        assert_eq!(selected[0].appearance.css_class(), "time-slot available selected");

        // Same time on another day is not selected
        let views = day_slots(other_day, false, &selection, &DaySlotMap::new());
        assert!(views.iter().all(|view| !view.is_selected));
    }
}
