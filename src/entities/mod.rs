mod driver;
pub mod ride;
mod rider;

pub use driver::Driver;
pub use ride::{Ride, RideClass};
pub use rider::Rider;
