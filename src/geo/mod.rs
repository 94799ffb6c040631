pub mod direction;
pub mod location;

pub use direction::{CoordinateUnit, Direction};
pub use location::{ChangeListener, GeoLocation, GeoProperty, GeoSnapshot};
