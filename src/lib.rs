//! Pressure-inflated 2D soft bodies for games and toys.
//!
//! `squish` simulates a closed ring of point masses joined by springs and
//! filled with an ideal gas. Each frame the host calls
//! [`SoftBody::advance`] with the elapsed time and reads back vertex
//! positions to draw.
//!
//! # Features
//!
//! - **Spring ring**: Hookean edges resting at their construction length
//! - **Gas pressure**: `p = nRT / A - p0` pushing every edge outward
//! - **Semi-implicit Euler**: velocity first, then position
//! - **Floor collision**: flat floor with elastic bounce
//! - **Driver glue**: frame clock, input commands, HUD numbers
//! - **Observable**: Monitor each step via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use squish::{SoftBody, Vec2};
//!
//! let mut body = SoftBody::circle(Vec2::new(300.0f32, 100.0), 50.0, 30, 10.0, 2.0e4).unwrap();
//! body.set_gravity(Vec2::new(0.0, 9.81 * 18.0)).unwrap();
//! body.advance(1.0 / 60.0);
//! assert_eq!(body.vertex_positions().len(), 30);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point_mass;
pub mod spring;
pub mod geometry;
pub mod gas;
pub mod collision;
pub mod softbody;
pub mod driver;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use point_mass::PointMass;
pub use spring::Spring;
pub use gas::GasModel;
pub use collision::Floor;
pub use softbody::SoftBody;
pub use driver::{Command, FrameClock, Hud, Simulation};
pub use config::BodyConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
