use std::fmt;
use std::io::Write;

use serde::Serialize;

use super::ride::{fmt_rides, Ride};
use crate::error::Error;
use crate::printer::Printer;

#[derive(Debug, Serialize)]
pub struct Rider {
    pub id: String,
    pub name: String,
    rides: Vec<Ride>,
}

impl Rider {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rides: Vec::new(),
        }
    }

    /// Takes the ride, echoing it through `printer` before it joins the
    /// rider's history.
    #[tracing::instrument(skip_all, fields(rider_id = %self.id, ride_id = %ride.id(), class = %ride.class().name()))]
    pub fn request_ride<W: Write>(
        &mut self,
        ride: Ride,
        printer: &mut Printer<W>,
    ) -> Result<(), Error> {
        printer.ride_requested(&self.name, &ride)?;
        self.rides.push(ride);

        tracing::debug!("requested ride, total: {}", self.rides.len());

        Ok(())
    }

    pub fn rides(&self) -> &[Ride] {
        &self.rides
    }

    /// Prints the ride history to stdout.
    pub fn report(&self) {
        print!("{}", self);
    }
}

impl fmt::Display for Rider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n--- {}'s Ride History ---", self.name)?;

        fmt_rides(f, &self.rides, "No rides requested yet.")
    }
}

#[test]
fn request_ride_test() {
    use crate::printer::Format;

    let mut rider = Rider::new("R001", "Sandesh Shrestha");
    let mut printer = Printer::new(Vec::new(), Format::Text);

    rider
        .request_ride(Ride::standard("S001", "Downtown", "Suburb A", 10.5), &mut printer)
        .unwrap();
    assert_eq!(rider.rides().len(), 1);

    rider
        .request_ride(Ride::premium("P002", "Airport", "City Center", 25.0), &mut printer)
        .unwrap();
    assert_eq!(rider.rides().len(), 2);
    assert_eq!(rider.rides().last().unwrap().id(), "P002");
    assert_eq!(rider.rides()[0].id(), "S001");

    let output = String::from_utf8(printer.into_inner()).unwrap();
    assert!(output.starts_with("\nSandesh Shrestha requested a ride.\nRide ID: S001\n"));
    assert!(output.ends_with("  Fare: $92.50\n"));
}

#[test]
fn empty_history_test() {
    let rider = Rider::new("R002", "Nobody");

    assert_eq!(
        rider.to_string(),
        "\n--- Nobody's Ride History ---\n  No rides requested yet.\n"
    );
}

#[test]
fn serialize_history_test() {
    use crate::printer::Format;

    let mut rider = Rider::new("R001", "Sandesh Shrestha");
    let mut printer = Printer::new(std::io::sink(), Format::Text);
    rider
        .request_ride(Ride::standard("S003", "Park", "Museum", 3.2), &mut printer)
        .unwrap();

    let value = serde_json::to_value(&rider).unwrap();
    assert_eq!(value["id"], "R001");
    assert_eq!(value["rides"][0]["id"], "S003");
    assert_eq!(value["rides"][0]["class"], "standard");
}

#[test]
fn report_to_stdout_test() {
    let rider = Rider::new("R001", "Sandesh Shrestha");

    rider.report();
    assert!(rider.rides().is_empty());
}
