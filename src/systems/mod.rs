mod influx;
mod mortality;
mod satisfaction;

pub use influx::InfluxSystem;
pub use mortality::MortalitySystem;
pub use satisfaction::SatisfactionSystem;
