//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in velometer-core on top of `embedded-hal` 1.0:
//!
//! - Character display (HD44780 in 4-bit parallel mode)
//! - Marker indicator (GPIO buzzer or LED)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod display;
pub mod indicator;
