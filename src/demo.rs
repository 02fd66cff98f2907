use std::io::Write;

use crate::entities::{Driver, Ride, Rider};
use crate::error::Error;
use crate::printer::Printer;

/// Runs the fixed walkthrough: a rider requests rides, a driver records the
/// completed copies, both histories are printed, then a mixed list of rides
/// is recomputed and printed ride by ride.
#[tracing::instrument(name = "demo::run", skip_all)]
pub fn run<W: Write>(printer: &mut Printer<W>) -> Result<(), Error> {
    printer.banner("--- Ride Sharing System Demonstration ---")?;

    let mut sandesh = Rider::new("R001", "Sandesh Shrestha");

    let ride1 = Ride::standard("S001", "Downtown", "Suburb A", 10.5);
    let ride2 = Ride::premium("P002", "Airport", "City Center", 25.0);
    let ride3 = Ride::standard("S003", "Park", "Museum", 3.2);

    sandesh.request_ride(ride1, printer)?;
    sandesh.request_ride(ride2, printer)?;
    sandesh.request_ride(ride3, printer)?;

    let mut alice = Driver::new("D001", "Alice Smith", 4.8);

    // the rider owns the originals, so the driver gets its own "-C" copies
    alice.record_completed_ride(Ride::standard("S001-C", "Downtown", "Suburb A", 10.5));
    alice.record_completed_ride(Ride::premium("P002-C", "Airport", "City Center", 25.0));
    alice.record_completed_ride(Ride::standard("S003-C", "Park", "Museum", 3.2));

    printer.driver(&alice)?;
    printer.rider(&sandesh)?;

    printer.banner("\n--- Polymorphism Demonstration (List of All Rides in System) ---")?;

    let mut system_rides = vec![
        Ride::standard("SysR01", "Library", "Cafe", 7.0),
        Ride::premium("SysR02", "Mall", "Home", 4.5),
        Ride::standard("SysR03", "Gym", "Cafe", 2.0),
        Ride::premium("SysR04", "School", "Park", 12.0),
    ];

    for ride in system_rides.iter_mut() {
        ride.compute_fare();
        printer.ride(ride)?;
    }

    tracing::info!(
        rider_rides = sandesh.rides().len(),
        driver_rides = alice.rides().len(),
        system_rides = system_rides.len(),
        "demonstration complete"
    );

    printer.banner("\n--- Demonstration Complete ---")
}

#[test]
fn text_transcript_test() {
    use crate::printer::Format;

    let mut printer = Printer::new(Vec::new(), Format::Text);
    run(&mut printer).unwrap();
    let output = String::from_utf8(printer.into_inner()).unwrap();

    let expected = "\
--- Ride Sharing System Demonstration ---

Sandesh Shrestha requested a ride.
Ride ID: S001
  Pickup: Downtown
  Dropoff: Suburb A
  Distance: 10.5 miles
  Fare: $21.00

Sandesh Shrestha requested a ride.
Ride ID: P002
  Pickup: Airport
  Dropoff: City Center
  Distance: 25.0 miles
  Fare: $92.50

Sandesh Shrestha requested a ride.
Ride ID: S003
  Pickup: Park
  Dropoff: Museum
  Distance: 3.2 miles
  Fare: $6.40

--- Driver Details ---
Driver ID: D001
Name: Alice Smith
Rating: 4.8/5.0
Completed Rides (3):
Ride ID: S001-C
  Pickup: Downtown
  Dropoff: Suburb A
  Distance: 10.5 miles
  Fare: $21.00
--------------------
Ride ID: P002-C
  Pickup: Airport
  Dropoff: City Center
  Distance: 25.0 miles
  Fare: $92.50
--------------------
Ride ID: S003-C
  Pickup: Park
  Dropoff: Museum
  Distance: 3.2 miles
  Fare: $6.40
--------------------

--- Sandesh Shrestha's Ride History ---
Ride ID: S001
  Pickup: Downtown
  Dropoff: Suburb A
  Distance: 10.5 miles
  Fare: $21.00
--------------------
Ride ID: P002
  Pickup: Airport
  Dropoff: City Center
  Distance: 25.0 miles
  Fare: $92.50
--------------------
Ride ID: S003
  Pickup: Park
  Dropoff: Museum
  Distance: 3.2 miles
  Fare: $6.40
--------------------

--- Polymorphism Demonstration (List of All Rides in System) ---
Ride ID: SysR01
  Pickup: Library
  Dropoff: Cafe
  Distance: 7.0 miles
  Fare: $14.00
--------------------
Ride ID: SysR02
  Pickup: Mall
  Dropoff: Home
  Distance: 4.5 miles
  Fare: $20.75
--------------------
Ride ID: SysR03
  Pickup: Gym
  Dropoff: Cafe
  Distance: 2.0 miles
  Fare: $4.00
--------------------
Ride ID: SysR04
  Pickup: School
  Dropoff: Park
  Distance: 12.0 miles
  Fare: $47.00
--------------------

--- Demonstration Complete ---
";

    assert_eq!(output, expected);
}

#[test]
fn json_transcript_test() {
    use crate::printer::Format;

    let mut printer = Printer::new(Vec::new(), Format::Json);
    run(&mut printer).unwrap();
    let output = String::from_utf8(printer.into_inner()).unwrap();

    let events: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let kinds: Vec<&str> = events
        .iter()
        .map(|event| event["event"].as_str().unwrap())
        .collect();

    assert_eq!(
        kinds,
        vec![
            "ride_requested",
            "ride_requested",
            "ride_requested",
            "driver",
            "rider",
            "ride",
            "ride",
            "ride",
            "ride"
        ]
    );
    assert_eq!(events[3]["driver"]["rides"][1]["id"], "P002-C");
    assert_eq!(events[4]["rider"]["rides"].as_array().unwrap().len(), 3);
    assert_eq!(events[6]["ride"]["fare"], 20.75);
}
