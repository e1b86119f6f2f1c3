//! Plateful Order Server: dietary-aware food ordering core
//!
//! # Architecture
//!
//! This crate hosts the domain engines behind the mobile ordering app:
//!
//! - **Menu filtering** (`menu`): hazard-tagged catalog + dietary profile
//!   → the subset of items safe for that user, with warning labels
//! - **Cart** (`cart`): session-scoped cart aggregate and registry
//! - **Order lifecycle** (`orders`): guarded NEW → ACCEPTED → COMPLETED
//!   state machine, executed atomically against redb and broadcast to
//!   dashboard subscribers
//! - **Role routing** (`auth`): role → application surface as a standing
//!   navigation constraint
//! - **Catalog store** (`db`): embedded document store for items,
//!   profiles, accounts and the restaurant directory
//! - **Classification** (`classify`): best-effort AI tag suggestions for
//!   new menu items
//!
//! # Module structure
//!
//! ```text
//! order-server/src/
//! ├── core/          # configuration and state wiring
//! ├── auth/          # identity interface, surface routing
//! ├── db/            # embedded catalog store + repositories
//! ├── menu/          # filter engine and menu service
//! ├── cart/          # cart aggregate and session registry
//! ├── orders/        # lifecycle commands, storage, manager
//! ├── services/      # provisioning, intake, checkout, dashboard
//! ├── classify/      # tag suggestion client
//! └── utils/         # logging
//! ```

pub mod auth;
pub mod cart;
pub mod classify;
pub mod core;
pub mod db;
pub mod menu;
pub mod orders;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{AppState, Config};
pub use orders::{OrderStorage, OrdersManager};
pub use shared::error::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
