pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod record;

pub use appointment::*;
pub use doctor::*;
pub use patient::*;
pub use record::Record;
