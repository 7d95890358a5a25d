use rust_decimal::Decimal;

use crate::utils::number_utils::clamp_rate;

use super::{CarryOutcome, FeeBreakdown};

/// Charges carry on an investor's gross share.
///
/// The carry is a transfer: callers credit `carry_amount` to Founders.
/// A non-positive gross share pays no carry.
pub fn apply_carry(gross_share: Decimal, carry_rate: Decimal) -> CarryOutcome {
    if gross_share <= Decimal::ZERO {
        return CarryOutcome {
            net: Decimal::ZERO,
            carry_amount: Decimal::ZERO,
        };
    }
    let carry_amount = gross_share * clamp_rate(carry_rate);
    CarryOutcome {
        net: gross_share - carry_amount,
        carry_amount,
    }
}

/// Applies entry then management fee. The management fee is computed on the
/// balance left after the entry fee, so the two compound.
///
/// A non-positive amount yields an all-zero breakdown.
pub fn apply_fees(
    amount: Decimal,
    entry_fee_rate: Decimal,
    management_fee_rate: Decimal,
) -> FeeBreakdown {
    if amount <= Decimal::ZERO {
        return FeeBreakdown::default();
    }

    let entry_fee = amount * clamp_rate(entry_fee_rate);
    let after_entry = amount - entry_fee;
    let management_fee = after_entry * clamp_rate(management_fee_rate);

    FeeBreakdown {
        original_amount: amount,
        entry_fee,
        after_entry,
        management_fee,
        total_fees: entry_fee + management_fee,
        net_amount: after_entry - management_fee,
    }
}
