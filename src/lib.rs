//! # org-search
//!
//! HTTP search service for organizational meetings and policies. A free-text
//! query is authenticated against the hosted auth service, enriched with the
//! caller's newest records, handed to a chat-completion model for ranking,
//! and the reply is parsed into a result list, with a deterministic
//! substring filter as fallback.
//!
//! ## Request pipeline
//!
//! ```text
//!   POST /search { query }  +  Authorization: Bearer <token>
//!                      │
//!                      ▼
//!           ┌─────────────────────┐
//!           │  Validate request   │  400 empty query / 401 missing header
//!           └──────────┬──────────┘
//!                      ▼
//!           ┌─────────────────────┐
//!           │  Verify caller      │  auth service, token forwarded
//!           └──────────┬──────────┘
//!                      ▼
//!         ┌────────────┴────────────┐
//!         ▼                         ▼
//!  ┌──────────────┐         ┌──────────────┐
//!  │ 50 meetings  │         │ 50 policies  │  concurrent, newest first,
//!  └──────┬───────┘         └──────┬───────┘  row visibility per caller
//!         └────────────┬───────────┘
//!                      ▼
//!           ┌─────────────────────┐
//!           │  Chat completion    │  429 / 402 forwarded to caller
//!           └──────────┬──────────┘
//!                      ▼
//!           ┌─────────────────────┐
//!           │ Extract JSON array  │──── none ────┐
//!           └──────────┬──────────┘              ▼
//!                      │               ┌─────────────────────┐
//!                      │               │  Title substring    │
//!                      │               │  filter (3 + 2)     │
//!                      │               └──────────┬──────────┘
//!                      ▼                          │
//!           ┌─────────────────────┐◄──────────────┘
//!           │ {results, degraded} │
//!           └─────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for the store, model, and server
//! - [`models`] - Shared data types: `Meeting`, `Policy`, `SearchResult`, request/response types
//! - [`error`] - `SearchError` taxonomy with its HTTP status and JSON body mapping
//! - [`auth`] - Caller verification against the hosted auth service
//! - [`store`] - Caller-scoped row fetches from the hosted data store
//! - [`llm::rank`] - The chat-completion ranking call and prompt construction
//! - [`llm::extract`] - Best-effort extraction of the result array from reply text
//! - [`search::fallback`] - Deterministic title substring filter for unusable replies
//! - [`api`] - Axum HTTP handlers, router, CORS and tracing layers
//! - [`state`] - Shared application state: config plus the reqwest client

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod search;
pub mod state;
pub mod store;
