//! Two-installment payment scheduling.
//!
//! A quote total is split into a deposit, due shortly after booking, and a
//! balance, due some time before arrival. Inside that arrival window the
//! balance is due immediately.

use common::{define_kind, Date, DateOf, Money, Percent};

use super::DueDate;

/// Share of a total paid as a deposit.
pub const DEPOSIT_SHARE: Percent = Percent::whole(30);

/// Number of days after booking a deposit is due in.
pub const DEPOSIT_DUE_AFTER_DAYS: u32 = 7;

/// Number of days before arrival a balance is due.
pub const BALANCE_DUE_BEFORE_DAYS: u32 = 30;

define_kind! {
    #[doc = "Way a quote total is paid."]
    enum PaymentTerm {
        #[doc = "Only the deposit is paid now, the balance later."]
        Deposit = 1,

        #[doc = "The whole total is paid now."]
        Full = 2,
    }
}

/// Parameters of [`PaymentSchedule`]s.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Policy {
    /// Share of a total paid as a deposit.
    ///
    /// The rest is the balance.
    pub deposit_share: Percent,

    /// Number of days after booking a deposit is due in.
    pub deposit_due_after_days: u32,

    /// Number of days before arrival a balance is due.
    pub balance_due_before_days: u32,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            deposit_share: DEPOSIT_SHARE,
            deposit_due_after_days: DEPOSIT_DUE_AFTER_DAYS,
            balance_due_before_days: BALANCE_DUE_BEFORE_DAYS,
        }
    }
}

/// Deposit and balance installments of a quote total.
///
/// Installments always sum up to the total exactly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PaymentSchedule {
    /// Amount of the deposit.
    pub deposit_amount: Money,

    /// Amount of the balance.
    pub balance_amount: Money,

    /// Date the deposit is due at.
    pub deposit_due_date: DueDate,

    /// Date the balance is due at.
    pub balance_due_date: DueDate,

    /// Indicator whether arrival is too close for the balance to be
    /// deferred, so it's due on the day of booking.
    pub balance_due_now: bool,
}

/// Computes the [`PaymentSchedule`] of the provided `total` for an arrival at
/// the provided `reference` date, as of `today`.
///
/// [`None`] is returned if the `total` is zero or the `reference` date is
/// unknown.
#[must_use]
pub fn compute_schedule<Of: ?Sized>(
    total: Money,
    reference: Option<DateOf<Of>>,
    today: Date,
    policy: &Policy,
) -> Option<PaymentSchedule> {
    let reference = reference?;
    if total.is_zero() {
        return None;
    }

    let deposit_amount = policy.deposit_share.of(total);
    let balance_amount = total.saturating_sub(deposit_amount);

    let deposit_due_date = today
        .add_days(i64::from(policy.deposit_due_after_days))
        .coerce();
    let raw_balance_due = reference
        .coerce::<()>()
        .add_days(-i64::from(policy.balance_due_before_days));
    let balance_due_now = raw_balance_due <= today;
    let balance_due_date = if balance_due_now {
        today.coerce()
    } else {
        raw_balance_due.coerce()
    };

    Some(PaymentSchedule {
        deposit_amount,
        balance_amount,
        deposit_due_date,
        balance_due_date,
        balance_due_now,
    })
}

/// Returns the amount to be paid now under the provided [`PaymentTerm`].
#[must_use]
pub fn amount_due_now(
    schedule: &PaymentSchedule,
    term: PaymentTerm,
    total: Money,
) -> Money {
    match term {
        PaymentTerm::Full => total,
        PaymentTerm::Deposit => schedule.deposit_amount,
    }
}
