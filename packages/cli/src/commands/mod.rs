pub mod init;
pub mod inspect;
pub mod segment;
pub mod strategies;

mod report;

pub use init::{init, InitArgs};
pub use inspect::{inspect, InspectArgs};
pub use segment::{segment, SegmentArgs};
pub use strategies::strategies;
