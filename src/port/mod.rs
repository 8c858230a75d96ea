//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                         ▼                             ▼
//! ┌──────────┐           ┌─────────────┐              ┌───────────┐
//! │ Forecast │           │   Score     │              │ Notifier  │
//! │  Store   │           │   Store     │              │  Adapter  │
//! └──────────┘           └─────────────┘              └───────────┘
//! ```

pub mod outbound;

pub use outbound::notifier::{
    Event, LogNotifier, Notifier, NotifierRegistry, NullNotifier, ScoredEvent,
};
pub use outbound::store::{ForecastStore, ScoreStore};
