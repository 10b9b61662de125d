//! Collaborator boundaries. The core calls these capabilities but does not
//! implement language understanding or generation behind them.

pub mod fact_provider;
pub mod signal_provider;

pub use fact_provider::{FactProvider, FactSet};
pub use signal_provider::{NullSignalProvider, Signal, SignalProvider};
