use shared::{AvailabilityProvider, DateKey, SlotGenerator};
use std::rc::Rc;

/// Slot availability generated once per page load and shared by reference
#[derive(Clone)]
pub struct SessionAvailability(Rc<dyn AvailabilityProvider>);

impl SessionAvailability {
    /// Mock availability for the next two weeks, different on every load
    pub fn generate(today: DateKey) -> Self {
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        Self::from_provider(SlotGenerator::default().generate_seeded(today, seed))
    }

    pub fn from_provider<P: AvailabilityProvider + 'static>(provider: P) -> Self {
        Self(Rc::new(provider))
    }

    pub fn provider(&self) -> &dyn AvailabilityProvider {
        self.0.as_ref()
    }
}

impl PartialEq for SessionAvailability {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
