//! invt: Inventory Toolkit
//!
//! An interactive terminal application for maintaining an in-memory catalog
//! of parts and assembled products for a single working session.

pub mod cli;
pub mod core;
pub mod entities;
