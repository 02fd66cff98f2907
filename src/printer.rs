use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::entities::{ride::SEPARATOR, Driver, Ride, Rider};
use crate::error::{invalid_config_error, Error};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(invalid_config_error("RIDESHARE_FORMAT", s)),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    RideRequested { rider: &'a str, ride: &'a Ride },
    Ride { ride: &'a Ride },
    Driver { driver: &'a Driver },
    Rider { rider: &'a Rider },
}

/// Console sink. Text mode reproduces the human-readable transcript, json
/// mode emits one event object per line.
pub struct Printer<W: Write> {
    out: W,
    format: Format,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, format: Format) -> Self {
        Self { out, format }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self, text: &str) -> Result<(), Error> {
        if self.format == Format::Text {
            writeln!(self.out, "{}", text)?;
        }

        Ok(())
    }

    pub fn ride_requested(&mut self, rider: &str, ride: &Ride) -> Result<(), Error> {
        match self.format {
            Format::Text => {
                write!(self.out, "\n{} requested a ride.\n{}", rider, ride)?;
                Ok(())
            }
            Format::Json => self.event(&Event::RideRequested { rider, ride }),
        }
    }

    /// A ride's detail block followed by a separator line.
    pub fn ride(&mut self, ride: &Ride) -> Result<(), Error> {
        match self.format {
            Format::Text => {
                writeln!(self.out, "{}{}", ride, SEPARATOR)?;
                Ok(())
            }
            Format::Json => self.event(&Event::Ride { ride }),
        }
    }

    pub fn driver(&mut self, driver: &Driver) -> Result<(), Error> {
        match self.format {
            Format::Text => {
                write!(self.out, "{}", driver)?;
                Ok(())
            }
            Format::Json => self.event(&Event::Driver { driver }),
        }
    }

    pub fn rider(&mut self, rider: &Rider) -> Result<(), Error> {
        match self.format {
            Format::Text => {
                write!(self.out, "{}", rider)?;
                Ok(())
            }
            Format::Json => self.event(&Event::Rider { rider }),
        }
    }

    fn event(&mut self, event: &Event) -> Result<(), Error> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)?;

        Ok(())
    }
}

#[test]
fn format_from_str_test() {
    assert_eq!("text".parse::<Format>().unwrap(), Format::Text);
    assert_eq!(" JSON ".parse::<Format>().unwrap(), Format::Json);
    assert_eq!("yaml".parse::<Format>().unwrap_err().code, 100);
}

#[test]
fn text_ride_test() {
    let mut printer = Printer::new(Vec::new(), Format::Text);
    printer
        .ride(&Ride::standard("SysR03", "Gym", "Cafe", 2.0))
        .unwrap();

    let output = String::from_utf8(printer.into_inner()).unwrap();
    assert_eq!(
        output,
        "Ride ID: SysR03\n  Pickup: Gym\n  Dropoff: Cafe\n  Distance: 2.0 miles\n  Fare: $4.00\n--------------------\n"
    );
}

#[test]
fn json_skips_banners_test() {
    let mut printer = Printer::new(Vec::new(), Format::Json);
    printer.banner("--- heading ---").unwrap();

    assert!(printer.into_inner().is_empty());
}

#[test]
fn json_events_test() {
    let mut printer = Printer::new(Vec::new(), Format::Json);
    let ride = Ride::premium("SysR04", "School", "Park", 12.0);
    printer.ride_requested("Sandesh Shrestha", &ride).unwrap();
    printer.ride(&ride).unwrap();

    let output = String::from_utf8(printer.into_inner()).unwrap();
    let lines: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["event"], "ride_requested");
    assert_eq!(lines[0]["rider"], "Sandesh Shrestha");
    assert_eq!(lines[0]["ride"]["fare"], 47.0);
    assert_eq!(lines[1]["event"], "ride");
    assert_eq!(lines[1]["ride"]["id"], "SysR04");
}
