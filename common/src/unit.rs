//! Marker types distinguishing kinds of [`DateOf`].
//!
//! [`DateOf`]: crate::DateOf

/// Marker of a date a stay starts at.
#[derive(Clone, Copy, Debug)]
pub struct CheckIn;

/// Marker of a date a stay ends at.
#[derive(Clone, Copy, Debug)]
pub struct CheckOut;

/// Marker of a date something (a package tour, for example) begins.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker of a date something (a package tour, for example) ends, inclusive.
#[derive(Clone, Copy, Debug)]
pub struct End;

/// Marker of a date a payment is due.
#[derive(Clone, Copy, Debug)]
pub struct Due;
