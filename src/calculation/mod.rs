//! Calculation logic for the Demurrage & Detention Billing Engine.
//!
//! This module contains all the calculation functions for charging idle
//! container time, including clock timeline resolution, overdue day
//! counting, billing status classification, cost and sale tariff matching,
//! tiered charge proration across both rate schedules, and the assembly
//! pass that turns a set of shipments into billing items.

mod assembler;
mod proration;
mod status;
mod tariff_match;
mod timeline;

pub use assembler::{EvaluationContext, assemble_billing_item, evaluate};
pub use proration::prorate;
pub use status::{AT_RISK_WINDOW_DAYS, classify_status};
pub use tariff_match::{TariffMatch, match_tariffs};
pub use timeline::{ResolvedTimeline, overdue_days, resolve_timeline};
