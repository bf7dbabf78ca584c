pub mod plant;
pub mod state;

pub use plant::{derivative, derivative_vec};
pub use state::{PlantParams, PlantState};
