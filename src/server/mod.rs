//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the group chat API,
//! including endpoints, business logic, data access, and infrastructure. The backend uses
//! Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation, identity resolution, and orchestration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Identity resolution, membership guard, error reporting
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, error policy)
//! - **Startup** (`startup`) - Tracing, database connection, migrations, listener
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Identity middleware** resolves `X-Username` to a user, provisioning it if needed
//! 3. **Controller** parses the path and body, calls a service
//! 4. **Service** runs the membership guard and validation, then the data operations
//! 5. **Controller** converts the domain model to a DTO and responds
//! 6. **Error middleware** logs any error response on the way out

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
