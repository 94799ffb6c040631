use super::direction::{CoordinateUnit, Direction};
use serde::{Deserialize, Serialize};
use std::fmt;

const SECONDS_PER_DEGREE: f64 = 3600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoProperty {
    Degrees,
    Minutes,
    Seconds,
    Direction,
    Coordinate,
}

/// 每次修改後通知：先是被設定的屬性，再來是被重新計算的屬性
pub trait ChangeListener {
    fn property_changed(&mut self, property: GeoProperty);
}

impl<F: FnMut(GeoProperty)> ChangeListener for F {
    fn property_changed(&mut self, property: GeoProperty) {
        self(property)
    }
}

/// 正負號只存在 direction 中；設定 coordinate 不會改變 direction
pub struct GeoLocation {
    degrees: f64,
    minutes: f64,
    seconds: f64,
    direction: Direction,
    coordinate: Option<f64>,
    listener: Option<Box<dyn ChangeListener + Send>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoSnapshot {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub direction: Direction,
    pub coordinate: Option<f64>,
}

impl GeoLocation {
    pub fn new() -> Self {
        Self {
            degrees: 0.0,
            minutes: 0.0,
            seconds: 0.0,
            direction: Direction::default(),
            coordinate: None,
            listener: None,
        }
    }

    /// 預設方向為 North，因此以緯度範圍截斷
    pub fn from_coordinate(coordinate: Option<f64>) -> Self {
        let mut location = Self::new();
        location.set_coordinate(coordinate);
        location
    }

    pub fn from_coordinate_with_unit(coordinate: Option<f64>, unit: CoordinateUnit) -> Self {
        let mut location = Self::new();
        if let Some(value) = coordinate {
            location.direction = Direction::infer(unit, value);
        }
        location.set_coordinate(coordinate);
        location
    }

    pub fn from_components(degrees: f64, minutes: f64, seconds: f64, direction: Direction) -> Self {
        let mut location = Self::new();
        location.degrees = degrees.max(0.0);
        location.minutes = minutes.max(0.0);
        location.seconds = seconds.max(0.0);
        location.direction = direction;
        location.recompute_coordinate();
        location
    }

    pub fn with_listener(mut self, listener: impl ChangeListener + Send + 'static) -> Self {
        self.set_listener(listener);
        self
    }

    pub fn set_listener(&mut self, listener: impl ChangeListener + Send + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn coordinate(&self) -> Option<f64> {
        self.coordinate
    }

    pub fn unit(&self) -> CoordinateUnit {
        self.direction.unit()
    }

    pub fn is_unset(&self) -> bool {
        self.coordinate.is_none()
    }

    pub fn set_degrees(&mut self, degrees: f64) {
        self.degrees = degrees.max(0.0);
        self.component_changed(GeoProperty::Degrees);
    }

    pub fn set_minutes(&mut self, minutes: f64) {
        self.minutes = minutes.max(0.0);
        self.component_changed(GeoProperty::Minutes);
    }

    pub fn set_seconds(&mut self, seconds: f64) {
        self.seconds = seconds.max(0.0);
        self.component_changed(GeoProperty::Seconds);
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.component_changed(GeoProperty::Direction);
    }

    // 依目前 direction 的座標軸截斷；NaN 視為未設定
    pub fn set_coordinate(&mut self, coordinate: Option<f64>) {
        self.coordinate = coordinate
            .filter(|value| !value.is_nan())
            .map(|value| self.clamp(value));
        self.notify(GeoProperty::Coordinate);
        self.recompute_components();
        self.notify(GeoProperty::Degrees);
        self.notify(GeoProperty::Minutes);
        self.notify(GeoProperty::Seconds);
    }

    pub fn snapshot(&self) -> GeoSnapshot {
        GeoSnapshot {
            degrees: self.degrees,
            minutes: self.minutes,
            seconds: self.seconds,
            direction: self.direction,
            coordinate: self.coordinate,
        }
    }

    fn component_changed(&mut self, property: GeoProperty) {
        self.notify(property);
        self.recompute_coordinate();
        self.notify(GeoProperty::Coordinate);
    }

    fn notify(&mut self, property: GeoProperty) {
        if let Some(listener) = self.listener.as_mut() {
            listener.property_changed(property);
        }
    }

    fn clamp(&self, value: f64) -> f64 {
        let limit = self.direction.unit().limit();
        let clamped = value.clamp(-limit, limit);
        if clamped != value {
            tracing::debug!(value, clamped, "coordinate clamped to axis range");
        }
        clamped
    }

    fn recompute_coordinate(&mut self) {
        if self.degrees + self.minutes + self.seconds == 0.0 {
            self.coordinate = None;
            return;
        }

        let magnitude =
            self.degrees + self.minutes / SECONDS_PER_MINUTE + self.seconds / SECONDS_PER_DEGREE;
        self.coordinate = Some(self.clamp(magnitude * self.direction.sign()));
    }

    fn recompute_components(&mut self) {
        let Some(coordinate) = self.coordinate else {
            self.degrees = 0.0;
            self.minutes = 0.0;
            self.seconds = 0.0;
            return;
        };

        let total_seconds = (coordinate * SECONDS_PER_DEGREE).round_ties_even().abs();
        let remainder = total_seconds % SECONDS_PER_DEGREE;
        self.degrees = (total_seconds / SECONDS_PER_DEGREE).floor();
        self.minutes = (remainder / SECONDS_PER_MINUTE).floor();
        self.seconds = remainder % SECONDS_PER_MINUTE;
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self::new()
    }
}

// listener 不會被複製
impl Clone for GeoLocation {
    fn clone(&self) -> Self {
        Self {
            degrees: self.degrees,
            minutes: self.minutes,
            seconds: self.seconds,
            direction: self.direction,
            coordinate: self.coordinate,
            listener: None,
        }
    }
}

impl PartialEq for GeoLocation {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot() == other.snapshot()
    }
}

impl fmt::Debug for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoLocation")
            .field("degrees", &self.degrees)
            .field("minutes", &self.minutes)
            .field("seconds", &self.seconds)
            .field("direction", &self.direction)
            .field("coordinate", &self.coordinate)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = (self.degrees * 100.0).round_ties_even() / 100.0;
        write!(
            f,
            "{}\u{b0} {}' {}'' {}",
            degrees, self.minutes, self.seconds, self.direction
        )
    }
}

impl From<GeoSnapshot> for GeoLocation {
    fn from(snapshot: GeoSnapshot) -> Self {
        Self::from_components(
            snapshot.degrees,
            snapshot.minutes,
            snapshot.seconds,
            snapshot.direction,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_listener() -> (Arc<Mutex<Vec<GeoProperty>>>, impl FnMut(GeoProperty) + Send) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        (events, move |property| sink.lock().unwrap().push(property))
    }

    #[test]
    fn test_components_to_coordinate() {
        let location = GeoLocation::from_components(45.0, 30.0, 0.0, Direction::South);
        let coordinate = location.coordinate().unwrap();
        assert!((coordinate + 45.5).abs() < 1e-9);
    }

    #[test]
    fn test_coordinate_to_components() {
        let location = GeoLocation::from_coordinate_with_unit(Some(-122.4194), CoordinateUnit::Longitude);
        assert_eq!(location.direction(), Direction::West);
        assert_eq!(location.degrees(), 122.0);
        assert_eq!(location.minutes(), 25.0);
        // 0.4194 * 3600 = 1509.84 -> 1510 s = 25' 10''
        assert_eq!(location.seconds(), 10.0);
    }

    #[test]
    fn test_negative_components_clamped() {
        let mut location = GeoLocation::new();
        location.set_degrees(-10.0);
        location.set_minutes(-5.0);
        assert_eq!(location.degrees(), 0.0);
        assert_eq!(location.minutes(), 0.0);
        assert!(location.is_unset());
    }

    #[test]
    fn test_coordinate_setter_keeps_direction() {
        let mut location = GeoLocation::from_coordinate_with_unit(Some(10.0), CoordinateUnit::Latitude);
        location.set_coordinate(Some(-20.0));
        assert_eq!(location.direction(), Direction::North);
        assert_eq!(location.degrees(), 20.0);

        // the next component edit recomputes with the stale direction
        location.set_seconds(0.0);
        assert_eq!(location.coordinate(), Some(20.0));
    }

    #[test]
    fn test_latitude_clamp_from_components() {
        let location = GeoLocation::from_components(95.0, 0.0, 0.0, Direction::North);
        assert_eq!(location.coordinate(), Some(90.0));

        let location = GeoLocation::from_components(181.0, 0.0, 0.0, Direction::West);
        assert_eq!(location.coordinate(), Some(-180.0));
    }

    #[test]
    fn test_nan_coordinate_is_unset() {
        let location = GeoLocation::from_coordinate(Some(f64::NAN));
        assert!(location.is_unset());
        assert_eq!(location.degrees(), 0.0);
    }

    #[test]
    fn test_component_setter_notifications() {
        let (events, listener) = recording_listener();
        let mut location = GeoLocation::new().with_listener(listener);
        location.set_minutes(15.0);
        assert_eq!(
            *events.lock().unwrap(),
            vec![GeoProperty::Minutes, GeoProperty::Coordinate]
        );
    }

    #[test]
    fn test_coordinate_setter_notifications() {
        let (events, listener) = recording_listener();
        let mut location = GeoLocation::new().with_listener(listener);
        location.set_coordinate(Some(1.5));
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                GeoProperty::Coordinate,
                GeoProperty::Degrees,
                GeoProperty::Minutes,
                GeoProperty::Seconds,
            ]
        );
    }

    #[test]
    fn test_clone_drops_listener() {
        let (events, listener) = recording_listener();
        let location = GeoLocation::from_coordinate(Some(12.0)).with_listener(listener);
        let mut copy = location.clone();
        copy.set_degrees(13.0);
        assert!(events.lock().unwrap().is_empty());
        assert_ne!(copy, location);
    }

    #[test]
    fn test_moves_across_threads() {
        let (events, listener) = recording_listener();
        let mut location = GeoLocation::new().with_listener(listener);
        let handle = std::thread::spawn(move || {
            location.set_degrees(7.0);
            location
        });
        let location = handle.join().unwrap();
        assert_eq!(location.coordinate(), Some(7.0));
        assert_eq!(events.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_display_rounds_half_to_even() {
        let mut location = GeoLocation::new();
        location.set_degrees(0.125);
        assert_eq!(location.to_string(), "0.12\u{b0} 0' 0'' N");
    }

    #[test]
    fn test_display() {
        let location = GeoLocation::from_components(45.0, 30.0, 15.0, Direction::East);
        assert_eq!(location.to_string(), "45\u{b0} 30' 15'' E");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let location = GeoLocation::from_components(12.0, 5.0, 30.0, Direction::South);
        let restored = GeoLocation::from(location.snapshot());
        assert_eq!(restored, location);
    }
}
