//! Web server for browser-based disease prediction.
//!
//! This module provides a small HTML page and a JSON API using Axum.
//! The dataset is loaded at startup and can be reloaded without a restart.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! disease-predictor serve
//!
//! # Custom port and auto-open browser
//! disease-predictor serve --port 3000 --open
//!
//! # Serve a remote dataset
//! disease-predictor serve --dataset https://example.org/dataset.csv \
//!     --descriptions https://example.org/symptom_Description.csv
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /` - Main page with symptom input form
//! - `POST /api/predict` - Predict diseases (`{"symptoms": "fever, cough"}`)
//! - `GET /api/symptoms?q=&limit=` - Search the symptom vocabulary
//! - `GET /api/dataset` - Loaded state and dataset provenance
//! - `POST /api/dataset/reload` - Re-fetch the dataset tables

pub mod server;
