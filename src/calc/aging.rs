use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use super::date::normalize_date;
use crate::config::Bill;

/// Which interest formula the book runs on. The two reflect different
/// historical conventions and diverge for most rates, so the choice is
/// explicit and applied uniformly to every bill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterestPolicy {
    /// `net_amount * rate/100 / 365 * interest_days`, using each bill's
    /// own annual rate.
    AnnualRate,
    /// `net_amount * multiplier * interest_days`, one flat daily constant
    /// for the whole book.
    FixedDaily { multiplier: f64 },
}

impl InterestPolicy {
    /// Interest accrued over `interest_days`, at full f64 precision.
    /// Rounding to minor units happens at display time only.
    pub fn interest(self, net_amount: f64, annual_rate: f64, interest_days: i64) -> f64 {
        if interest_days <= 0 {
            return 0.0;
        }
        let days = interest_days as f64;
        match self {
            InterestPolicy::AnnualRate => net_amount * annual_rate / 100.0 / 365.0 * days,
            InterestPolicy::FixedDaily { multiplier } => net_amount * multiplier * days,
        }
    }
}

/// Lifecycle state of a bill, derived fresh on every calculation.
///
/// Unreceipted bills move from `Pending` to `Overdue` by time alone; once a
/// receipt date exists only the interest flag matters, and there is no path
/// back to the unreceipted states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillStatus {
    Pending,
    Overdue,
    InterestPending,
    Settled,
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BillStatus::Pending => "PENDING",
            BillStatus::Overdue => "OVERDUE",
            BillStatus::InterestPending => "INT. PENDING",
            BillStatus::Settled => "SETTLED",
        };
        write!(f, "{s}")
    }
}

impl FromStr for BillStatus {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s {
            "pending" => Ok(BillStatus::Pending),
            "overdue" => Ok(BillStatus::Overdue),
            "interest-pending" => Ok(BillStatus::InterestPending),
            "settled" => Ok(BillStatus::Settled),
            _ => Err(()),
        }
    }
}

/// A bill together with its derived aging figures. Transient: recomputed
/// from the source bill every time it is needed, never persisted.
#[derive(Debug, Clone)]
pub struct CalculatedBill {
    pub bill: Bill,
    pub total_days: i64,
    pub interest_days: i64,
    pub interest_amount: f64,
    pub status: BillStatus,
}

/// Derive the aging figures and status for one bill.
///
/// `today` stands in for the receipt date while none exists; callers pass
/// the current date, tests pass a fixed one. With a parseable receipt date
/// the result depends on nothing but the bill itself.
///
/// This function is total: missing or garbage dates degrade (zero total
/// days, receipt treated as absent) instead of erroring, and out-of-range
/// numerics compute whatever the arithmetic says. Entry validation is the
/// caller's job.
pub fn calculate(bill: &Bill, policy: InterestPolicy, today: NaiveDate) -> CalculatedBill {
    let bill_date = normalize_date(&bill.bill_date);
    let rec_date = bill.rec_date.as_deref().and_then(normalize_date);

    let total_days = match bill_date {
        Some(start) => {
            let end = rec_date.unwrap_or(today);
            end.signed_duration_since(start).num_days()
        }
        None => 0,
    };

    // Days inside the credit window are interest-free.
    let interest_days = (total_days - bill.credit_days).max(0);
    let interest_amount = policy.interest(bill.net_amount, bill.interest_rate, interest_days);

    let status = match rec_date {
        Some(_) => {
            if bill.interest_paid.is_yes() {
                BillStatus::Settled
            } else {
                BillStatus::InterestPending
            }
        }
        None => {
            if total_days > bill.credit_days {
                BillStatus::Overdue
            } else {
                BillStatus::Pending
            }
        }
    };

    CalculatedBill {
        bill: bill.clone(),
        total_days,
        interest_days,
        interest_amount,
        status,
    }
}

/// Map `calculate` over a collection, preserving order. Bills are
/// independent of each other, so callers rerun this on every render.
pub fn calculate_all(
    bills: &[Bill],
    policy: InterestPolicy,
    today: NaiveDate,
) -> Vec<CalculatedBill> {
    bills.iter().map(|b| calculate(b, policy, today)).collect()
}
