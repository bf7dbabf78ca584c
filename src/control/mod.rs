pub mod controller;
pub mod pid;
pub mod reference;

pub use controller::{Controller, TorqueCommand};
pub use pid::{Gains, TrackingPid};
pub use reference::SunTrajectory;
