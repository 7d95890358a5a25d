use log::{debug, error};
use rust_decimal::Decimal;

use crate::constants::{MOONSHOT_FOUNDER_SHARE, MOONSHOT_INVESTOR_SHARE};
use crate::parties::{InvestorActivity, Party, PartyMap};
use crate::utils::number_utils::non_negative;
use crate::weights::CapitalDayWeights;

use super::{MoonshotResult, MoonshotRouting};

/// Splits a moonshot pool: 25% locked to Founders, 75% divided between the
/// investors by their capital-day weights renormalized within the investor
/// subset.
///
/// An inactive investor's would-be share goes to Founders. When neither
/// investor carries any weight the whole investor pool goes to Founders.
/// This rule has no carry and is deliberately separate from
/// [`crate::allocation::allocate`].
pub fn distribute_moonshot(
    pool: Decimal,
    weights: &CapitalDayWeights,
    activity: &InvestorActivity,
) -> MoonshotResult {
    let pool = non_negative(pool);
    if pool.is_zero() {
        return MoonshotResult::zero();
    }

    let base_founder_share = pool * MOONSHOT_FOUNDER_SHARE;
    let investor_pool = pool * MOONSHOT_INVESTOR_SHARE;

    let investor_weight_sum = weights.investor_total();
    let mut investor_weights = PartyMap::default();
    let mut amounts = PartyMap::default();
    let mut routed = MoonshotRouting::default();

    if investor_weight_sum > Decimal::ZERO {
        for party in Party::INVESTORS {
            let relative = weights.get(party) / investor_weight_sum;
            let share = investor_pool * relative;
            investor_weights[party] = relative;
            if activity.is_active(party) {
                amounts[party] = share;
            } else {
                routed.inactive_to_founders[party] = share;
            }
        }
    } else {
        debug!("No investor weight; routing moonshot investor pool to Founders");
        routed.investor_pool_to_founders = investor_pool;
    }

    amounts.founders = base_founder_share + routed.total();

    let result = MoonshotResult {
        pool,
        base_founder_share,
        investor_pool,
        investor_weights,
        amounts,
        routed,
    };

    let verification = result.verify();
    if let Err(err) = &verification {
        error!("Moonshot invariant violated: {}", err);
    }
    debug_assert!(verification.is_ok(), "moonshot invariant violated");

    result
}
