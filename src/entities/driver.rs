use std::fmt;

use serde::Serialize;

use super::ride::{fmt_rides, Ride};

/// A driver and the rides they have completed, in the order recorded.
#[derive(Debug, Serialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    /// 0-5 scale, not validated.
    pub rating: f64,
    rides: Vec<Ride>,
}

impl Driver {
    pub fn new(id: &str, name: &str, rating: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating,
            rides: Vec::new(),
        }
    }

    #[tracing::instrument(skip_all, fields(driver_id = %self.id, ride_id = %ride.id(), class = %ride.class().name()))]
    pub fn record_completed_ride(&mut self, ride: Ride) {
        self.rides.push(ride);

        tracing::debug!("recorded completed ride, total: {}", self.rides.len());
    }

    pub fn rides(&self) -> &[Ride] {
        &self.rides
    }

    /// Prints the driver details and completed rides to stdout.
    pub fn report(&self) {
        print!("{}", self);
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n--- Driver Details ---")?;
        writeln!(f, "Driver ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Rating: {:.1}/5.0", self.rating)?;
        writeln!(f, "Completed Rides ({}):", self.rides.len())?;

        fmt_rides(f, &self.rides, "No rides completed yet.")
    }
}

#[test]
fn record_completed_ride_test() {
    let mut driver = Driver::new("D001", "Alice Smith", 4.8);

    driver.record_completed_ride(Ride::standard("S001-C", "Downtown", "Suburb A", 10.5));
    assert_eq!(driver.rides().len(), 1);

    driver.record_completed_ride(Ride::premium("P002-C", "Airport", "City Center", 25.0));
    assert_eq!(driver.rides().len(), 2);
    assert_eq!(driver.rides().last().unwrap().id(), "P002-C");

    let ids: Vec<&str> = driver.rides().iter().map(|ride| ride.id()).collect();
    assert_eq!(ids, vec!["S001-C", "P002-C"]);
}

#[test]
fn empty_report_test() {
    let driver = Driver::new("D002", "Bob", 3.0);

    assert_eq!(
        driver.to_string(),
        "\n--- Driver Details ---\nDriver ID: D002\nName: Bob\nRating: 3.0/5.0\nCompleted Rides (0):\n  No rides completed yet.\n"
    );
}

#[test]
fn report_lists_rides_test() {
    let mut driver = Driver::new("D001", "Alice Smith", 4.8);
    driver.record_completed_ride(Ride::standard("S003-C", "Park", "Museum", 3.2));

    let report = driver.to_string();
    assert!(report.contains("Completed Rides (1):\nRide ID: S003-C\n"));
    assert!(report.ends_with("  Fare: $6.40\n--------------------\n"));
    assert!(!report.contains("No rides completed yet."));
}

#[test]
fn report_to_stdout_test() {
    let mut driver = Driver::new("D001", "Alice Smith", 4.8);
    driver.report();

    driver.record_completed_ride(Ride::premium("P002-C", "Airport", "City Center", 25.0));
    driver.report();
    driver.rides()[0].describe();
}
