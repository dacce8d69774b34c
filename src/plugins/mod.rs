mod flight;

pub use flight::{FlightPlugin, FlightSet, StartupSet};
