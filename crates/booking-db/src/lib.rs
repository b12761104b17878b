//! # booking-db
//!
//! Database layer implementing the booking-core repository traits.
//!
//! ## Overview
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - PostgreSQL repository implementations
//! - The reservation status catalog loader
//! - [`memory::MemoryStore`], an in-memory implementation of every repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use booking_db::{create_pool, load_status_catalog, run_migrations, DatabaseConfig};
//! use booking_db::PgReservationRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool, None).await?;
//!     let catalog = Arc::new(load_status_catalog(&pool).await?);
//!     let reservations = PgReservationRepository::new(pool, catalog);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryStore, DEFAULT_OFFER_TYPES};
pub use pool::{create_pool, migrations_dir, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    load_status_catalog, PgOfferRepository, PgOfferTypeRepository, PgReservationRepository,
    PgReviewRepository, PgUserRepository,
};
