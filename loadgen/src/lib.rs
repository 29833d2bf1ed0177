pub mod config;
pub mod error;
pub mod generator;
pub mod payload;
pub mod plate;
pub mod report;
pub mod transport;

pub use config::{FailurePolicy, LoadConfig};
pub use error::{LoadErr, Result};
pub use generator::LoadGenerator;
pub use payload::EventPayload;
pub use plate::{Plate, is_valid_plate};
pub use report::RunReport;
pub use transport::{HttpTransport, Reply, Transport};
