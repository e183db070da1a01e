//! Domain logic for the tutoring landing page.
//!
//! Everything here is target independent so it can be tested natively; the
//! `frontend` crate only renders these types and forwards browser events.

pub mod booking;
pub mod calendar;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod date_key;
pub mod preferences;
pub mod slot_picker;
pub mod slots;

pub use booking::{BookingError, BookingForm, BookingRequest, BookingSelection};
pub use calendar::{build_month_view, CalendarDayView, CalendarNavigator, MonthCursor, MonthView};
pub use carousel::{slides_for_width, stars, CarouselState};
pub use config::{
    BioConfig, BookingConfig, ConfigError, ContactConfig, HeroConfig, LandingConfig, Service,
    ServiceIcon, ServicesConfig, Testimonial, TestimonialsConfig,
};
pub use contact::{ContactField, ContactForm, ContactSubmission};
pub use date_key::{DateKey, DateKeyError};
pub use preferences::{InMemoryPreferenceStore, PreferenceError, PreferenceStore};
pub use slot_picker::{merged_slots, SlotAppearance, SlotView};
pub use slots::{
    AvailabilityProvider, DaySlotMap, SlotGenerator, SlotStatus, SlotTime, SlotTimeError, TimeSlot,
};
