mod booking;
mod metric;
mod nav;

pub use booking::{ Booking, BookingStatus, RECENT_BOOKINGS };
pub use metric::{ Metric, SUMMARY_METRICS };
pub use nav::{ NavLink, LANDING_LINKS };
