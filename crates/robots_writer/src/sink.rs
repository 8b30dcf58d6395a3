//! The persistence seam.

use crate::error::PersistenceResult;

/// Destination for rendered robots.txt content.
pub trait RobotsSink {
    /// Persist the rendered text.
    fn persist(&self, content: &str) -> PersistenceResult<()>;

    /// Human-readable description of the destination, for logs.
    fn describe(&self) -> String;
}
