#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc
)]

//! State engine for a monochrome dot-matrix drawing surface.
//!
//! The canvas is a square grid of dots stored as a packed bitmap, painted
//! through a pointer-drag session and persisted as a base64 string. The
//! rendering/input layer lives outside this crate and talks to it through
//! [`PaintSession`] and the [`PaintSink`] notification trait.
//!
//! Everything here is synchronous and expects a single mutator thread per
//! canvas (the UI event loop). A concurrent embedding has to add its own
//! synchronization around the session.

mod position;
pub use position::*;

mod error;
pub use error::*;

mod bit_address;
pub use bit_address::*;

mod bitmap;
pub use bitmap::*;

pub mod codec;

mod session;
pub use session::*;
