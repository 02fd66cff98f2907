use std::fmt;

use serde::Serialize;

pub const STANDARD_RATE_PER_MILE: f64 = 2.0;
pub const PREMIUM_RATE_PER_MILE: f64 = 3.5;
pub const PREMIUM_SURCHARGE: f64 = 5.0;

pub(crate) const SEPARATOR: &str = "--------------------";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RideClass {
    Standard,
    Premium,
}

impl RideClass {
    pub fn name(&self) -> String {
        match self {
            Self::Standard => "standard".into(),
            Self::Premium => "premium".into(),
        }
    }

    pub fn fare_for(&self, distance: f64) -> f64 {
        match self {
            Self::Standard => distance * STANDARD_RATE_PER_MILE,
            Self::Premium => (distance * PREMIUM_RATE_PER_MILE) + PREMIUM_SURCHARGE,
        }
    }
}

/// A single trip. The fare is always derived from `distance` by the ride's
/// class; there is no way to construct a ride without it.
#[derive(Debug, Serialize)]
pub struct Ride {
    id: String,
    class: RideClass,
    pickup: String,
    dropoff: String,
    /// Miles. Not validated, a negative distance yields a negative fare.
    distance: f64,
    fare: f64,
}

impl Ride {
    pub fn standard(id: &str, pickup: &str, dropoff: &str, distance: f64) -> Self {
        Self::new(RideClass::Standard, id, pickup, dropoff, distance)
    }

    pub fn premium(id: &str, pickup: &str, dropoff: &str, distance: f64) -> Self {
        Self::new(RideClass::Premium, id, pickup, dropoff, distance)
    }

    pub fn new(class: RideClass, id: &str, pickup: &str, dropoff: &str, distance: f64) -> Self {
        let mut ride = Self {
            id: id.into(),
            class,
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            distance,
            fare: 0.0,
        };
        ride.compute_fare();

        ride
    }

    pub fn compute_fare(&mut self) {
        self.fare = self.class.fare_for(self.distance);
    }

    /// Prints the detail block to stdout.
    pub fn describe(&self) {
        print!("{}", self);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn class(&self) -> RideClass {
        self.class
    }

    pub fn pickup(&self) -> &str {
        &self.pickup
    }

    pub fn dropoff(&self) -> &str {
        &self.dropoff
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn fare(&self) -> f64 {
        self.fare
    }
}

impl fmt::Display for Ride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ride ID: {}", self.id)?;
        writeln!(f, "  Pickup: {}", self.pickup)?;
        writeln!(f, "  Dropoff: {}", self.dropoff)?;
        writeln!(f, "  Distance: {:.1} miles", self.distance)?;
        writeln!(f, "  Fare: ${:.2}", self.fare)
    }
}

/// Shared listing used by both owners' reports.
pub(crate) fn fmt_rides(f: &mut fmt::Formatter<'_>, rides: &[Ride], empty: &str) -> fmt::Result {
    if rides.is_empty() {
        return writeln!(f, "  {}", empty);
    }

    for ride in rides {
        write!(f, "{}", ride)?;
        writeln!(f, "{}", SEPARATOR)?;
    }

    Ok(())
}

#[test]
fn standard_fare_test() {
    for distance in [0.0, 1.0, 3.2, 10.5, 250.25] {
        let ride = Ride::standard("S", "A", "B", distance);
        assert_eq!(ride.fare(), 2.0 * distance);
        assert_eq!(ride.class(), RideClass::Standard);
    }
}

#[test]
fn premium_fare_test() {
    for distance in [0.0, 1.0, 4.5, 25.0, 250.25] {
        let ride = Ride::premium("P", "A", "B", distance);
        assert_eq!(ride.fare(), 3.5 * distance + 5.0);
        assert_eq!(ride.class(), RideClass::Premium);
    }
}

#[test]
fn compute_fare_is_idempotent_test() {
    let mut ride = Ride::premium("P002", "Airport", "City Center", 25.0);
    let first = ride.fare();

    ride.compute_fare();
    assert_eq!(ride.fare(), first);
    ride.compute_fare();
    assert_eq!(ride.fare(), 92.5);
}

#[test]
fn negative_distance_test() {
    let ride = Ride::standard("S-neg", "A", "B", -2.0);

    assert_eq!(ride.fare(), -4.0);
    assert!(ride.to_string().contains("  Fare: $-4.00\n"));
}

#[test]
fn details_format_test() {
    let ride = Ride::standard("S003", "Park", "Museum", 3.2);

    assert_eq!(
        ride.to_string(),
        "Ride ID: S003\n  Pickup: Park\n  Dropoff: Museum\n  Distance: 3.2 miles\n  Fare: $6.40\n"
    );
}

#[test]
fn mixed_rides_dispatch_test() {
    let mut rides = vec![
        Ride::standard("A", "x", "y", 10.5),
        Ride::premium("B", "x", "y", 25.0),
        Ride::standard("C", "x", "y", 3.2),
        Ride::premium("D", "x", "y", 4.5),
    ];

    let fares: Vec<String> = rides
        .iter_mut()
        .map(|ride| {
            ride.compute_fare();
            format!("{:.2}", ride.fare())
        })
        .collect();

    assert_eq!(fares, vec!["21.00", "92.50", "6.40", "20.75"]);
}

#[test]
fn serialize_test() {
    let ride = Ride::premium("SysR02", "Mall", "Home", 4.5);
    let value = serde_json::to_value(&ride).unwrap();

    assert_eq!(value["id"], "SysR02");
    assert_eq!(value["class"], "premium");
    assert_eq!(value["fare"], 20.75);
}
