pub mod bio_section;
pub mod booking;
pub mod floating_contact_form;
pub mod hero_section;
pub mod services_grid;
pub mod testimonials_carousel;

pub use bio_section::BioSection;
pub use booking::BookingDialog;
pub use floating_contact_form::FloatingContactForm;
pub use hero_section::HeroSection;
pub use services_grid::ServicesGrid;
pub use testimonials_carousel::TestimonialsCarousel;
