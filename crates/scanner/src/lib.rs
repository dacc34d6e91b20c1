#![doc = include_str!("../README.md")]
//!
//! # Module Structure
//!
//! - [`error`]: Domain error types (`ReputationScannerError`)
//! - [`config`]: Scanner configuration (`ReputationScannerConfig`, builder)
//! - [`check`]: `Check` trait and the six built-in checks
//! - [`credentials`]: Explorer API key lookup (`ApiKeyProvider`, config/env providers)
//! - [`registry`]: Ordered check list with full/quick selection (`CheckRegistry`)
//! - [`scoring`]: Score aggregation and risk classification
//! - [`recommend`]: Recommendation derivation
//! - [`report`]: Scan result (`ReputationReport`)
//! - [`scanner`]: Main orchestrator (`ReputationScanner`, `ReputationScannerBuilder`)
//! - [`throttle`]: Inter-address delay strategies for batch runs
//! - [`batch`]: Address list parsing and the batch driver
//!
//! # Architecture
//!
//! ```text
//! address --> CheckRegistry (full | quick)
//!                  |
//!        Check::run (tokio::spawn, per-check timeout)
//!                  |
//!          Vec<CheckResult> --> overall_score --> classify_risk
//!                  |                                   |
//!            recommendations                      RiskLevel
//!                  |                                   |
//!                  +---------> ReputationReport <------+
//! ```

pub mod batch;
pub mod check;
pub mod config;
pub mod credentials;
pub mod error;
pub mod recommend;
pub mod registry;
pub mod report;
pub mod scanner;
pub mod scoring;
pub mod throttle;

// --- Public API Re-exports ---

// Scanner (main orchestrator)
pub use scanner::{ReputationScanner, ReputationScannerBuilder};

// Configuration
pub use config::{ReputationScannerConfig, ReputationScannerConfigBuilder};

// Error
pub use error::ReputationScannerError;

// Checks
pub use check::{
    AccountAgeCheck, AddressFormatCheck, Check, CheckOutcome, ContractCheck, KnownPatternsCheck,
    PatternDenyList, TransactionVolumeCheck, VerificationCheck,
};
pub use registry::CheckRegistry;

// Credentials
pub use credentials::{ApiKeyChain, ApiKeyProvider, EnvApiKeys, NoApiKeys, StaticApiKeys};

// Derivation
pub use recommend::recommendations;
pub use scoring::{classify_risk, overall_score};

// Report
pub use report::ReputationReport;

// Batch
pub use batch::{AddressList, BatchOutcome, BatchScanner, BatchSummary, parse_address_list};
pub use throttle::{FixedDelay, NoThrottle, Throttle};
