//! # robots_writer
//!
//! Persistence for rendered robots.txt content.
//!
//! The builder in `robots_core` produces a string and stops there. This crate
//! supplies the [`RobotsSink`] seam that receives that string, a [`FileSink`]
//! that enforces target writability before writing, and a [`MemorySink`] for
//! tests.
//!
//! ## Example
//!
//! ```rust,no_run
//! use robots_writer::{FileSink, RobotsSink};
//!
//! let sink = FileSink::in_dir("./public");
//! sink.persist("User-agent: *\nDisallow: /admin")?;
//! # Ok::<(), robots_writer::PersistenceError>(())
//! ```

pub mod error;
pub mod file;
pub mod mock;
pub mod sink;

pub use error::{PersistenceError, PersistenceResult};
pub use file::FileSink;
pub use mock::MemorySink;
pub use sink::RobotsSink;
