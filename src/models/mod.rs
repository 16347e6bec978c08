pub mod booking;
pub mod enquiry;
pub mod hostel;
pub mod review;
pub mod user;

pub use booking::{Booking, BookingStatus};
pub use enquiry::{Enquiry, EnquiryKind, EnquiryStatus};
pub use hostel::{Hostel, HostelFilter};
pub use review::Review;
pub use user::{Role, User};
