pub mod use_booking_form;
pub mod use_calendar;
pub mod use_contact_widget;
pub mod use_viewport_width;
