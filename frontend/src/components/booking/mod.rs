pub mod booking_details_form;
pub mod booking_dialog;
pub mod day_cell;
pub mod time_slot_button;

pub use booking_dialog::BookingDialog;
