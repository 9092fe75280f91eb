//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Every default value that participates in a uniqueness
//! constraint is derived from a process-wide counter, so factory-built records never
//! collide with each other.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let spot = factory::create_parking_spot(&db).await?;
//!
//! // Using builder pattern for customization
//! let spot = factory::parking_spot::ParkingSpotFactory::new(&db)
//!     .license_plate_car("ABC1234")
//!     .apartment("101")
//!     .block("A")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod parking_spot;

pub use parking_spot::create_parking_spot;
