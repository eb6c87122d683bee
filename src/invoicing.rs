//! Invoice raising against an external billing ledger.
//!
//! The engine itself never talks to a ledger; it hands a fully-checked
//! [`InvoiceRequest`] to whatever implements [`InvoicingGateway`]. The
//! preconditions live here in [`raise_invoice`] so every gateway sees only
//! chargeable, fully priced items. The gateway is invoked exactly once per
//! call and is never retried; a rejection surfaces as
//! [`EngineError::LedgerRejected`] and leaves no engine state behind.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{BillingItem, BillingStatus};

/// Identifier the ledger assigns to a created entry.
pub type LedgerEntryId = String;

/// The payload handed to the ledger for one billing item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceRequest {
    /// The customer the charge is billed to.
    pub customer_id: String,
    /// The shipment the container moved under.
    pub shipment_id: String,
    /// The container the charge accrued on.
    pub container_number: String,
    /// The sale-side total to invoice.
    pub total_sale: Decimal,
    /// ISO 4217 currency code for the amount.
    pub currency: String,
    /// The payment due date.
    pub due_date: NaiveDate,
}

/// Abstraction over the external billing ledger.
///
/// Implementations create one ledger entry per request and return the
/// identifier the ledger assigned. Failures are reported as
/// [`EngineError::LedgerRejected`].
pub trait InvoicingGateway {
    /// Creates a single ledger entry for the given request.
    fn create_ledger_entry(&self, request: &InvoiceRequest) -> EngineResult<LedgerEntryId>;
}

/// Raises an invoice for a billing item after checking the preconditions.
///
/// A charge is only invoiceable when all of the following hold:
///
/// - the item has not already been invoiced,
/// - the charge is fully priced (both tariffs matched),
/// - the sale total is positive,
/// - the clock has stopped, unless `allow_mid_period` is set.
///
/// Any failed precondition returns [`EngineError::InvoiceBlocked`] without
/// touching the gateway. Gateway failures pass through unchanged.
///
/// # Arguments
///
/// * `gateway` - The ledger to create the entry in
/// * `item` - The billing item to invoice
/// * `customer_id` - The customer the charge is billed to
/// * `currency` - ISO 4217 currency code for the amount
/// * `due_date` - The payment due date
/// * `allow_mid_period` - Permit invoicing while the clock still runs
///
/// # Returns
///
/// The identifier the ledger assigned to the new entry.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use demurrage_engine::error::EngineResult;
/// use demurrage_engine::invoicing::{
///     InvoiceRequest, InvoicingGateway, LedgerEntryId, raise_invoice,
/// };
/// use demurrage_engine::models::{
///     BillingItem, BillingStatus, ChargeBreakdown, ChargeOutcome, ChargeTotals, ClockType,
/// };
///
/// struct StubLedger;
///
/// impl InvoicingGateway for StubLedger {
///     fn create_ledger_entry(&self, _request: &InvoiceRequest) -> EngineResult<LedgerEntryId> {
///         Ok("LED-0001".to_string())
///     }
/// }
///
/// let item = BillingItem {
///     shipment_id: "SHP-2025-0042".to_string(),
///     container_number: "MSKU1234567".to_string(),
///     clock_type: ClockType::Demurrage,
///     free_time_expiry: NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(),
///     effective_end: NaiveDate::from_ymd_opt(2025, 1, 12),
///     overdue_days: 5,
///     status: BillingStatus::Overdue,
///     outcome: ChargeOutcome::Priced(ChargeBreakdown {
///         chunks: vec![],
///         totals: ChargeTotals {
///             cost: Decimal::from(250),
///             sale: Decimal::from(410),
///             profit: Decimal::from(160),
///         },
///         unrated_days: 0,
///     }),
/// };
///
/// let due = NaiveDate::from_ymd_opt(2025, 2, 11).unwrap();
/// let ledger_id = raise_invoice(&StubLedger, &item, "CUST-001", "USD", due, false).unwrap();
/// assert_eq!(ledger_id, "LED-0001");
/// ```
pub fn raise_invoice(
    gateway: &dyn InvoicingGateway,
    item: &BillingItem,
    customer_id: &str,
    currency: &str,
    due_date: NaiveDate,
    allow_mid_period: bool,
) -> EngineResult<LedgerEntryId> {
    if item.status == BillingStatus::Invoiced {
        return Err(blocked(item, "already invoiced"));
    }

    let Some(breakdown) = item.outcome.as_priced() else {
        return Err(blocked(item, "charge is not fully priced"));
    };

    if breakdown.totals.sale <= Decimal::ZERO {
        return Err(blocked(item, "no sale charge accrued"));
    }

    if item.effective_end.is_none() && !allow_mid_period {
        return Err(blocked(item, "clock is still running"));
    }

    gateway.create_ledger_entry(&InvoiceRequest {
        customer_id: customer_id.to_string(),
        shipment_id: item.shipment_id.clone(),
        container_number: item.container_number.clone(),
        total_sale: breakdown.totals.sale,
        currency: currency.to_string(),
        due_date,
    })
}

fn blocked(item: &BillingItem, reason: &str) -> EngineError {
    EngineError::InvoiceBlocked {
        container_number: item.container_number.clone(),
        reason: reason.to_string(),
    }
}
