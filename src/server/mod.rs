//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation: API endpoints, business
//! logic, data access, and infrastructure. The backend uses Axum as the web framework and
//! SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Existence and uniqueness rules for favorites
//! - **Data Layer** (`data/`) - Typed database queries and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the database pool)
//! - **Startup** (`startup`) - Logging and database initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** normalizes the path and routes the request to a controller
//! 2. **Controller** extracts path parameters and calls a service
//! 3. **Service** applies business rules and orchestrates repository calls
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts domain models to DTOs and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
