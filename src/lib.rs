//! Generation of NACA 4-digit airfoil sections, plane embedding of the
//! resulting contours, and the text/plot exports built on top of them.

pub mod airfoil;
pub mod errors;
pub mod export;
pub mod geometry;
pub mod plot;
pub mod serialize;
