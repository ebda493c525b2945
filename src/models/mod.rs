pub mod booking;

pub use booking::BookingRecord;
