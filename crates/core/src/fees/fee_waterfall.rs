//! Investor fees routed to Founders on top of an allocation.

use log::error;
use rust_decimal::Decimal;

use crate::allocation::AllocationResult;
use crate::errors::{CalculatorError, Result};
use crate::parties::{Party, PartyMap};
use crate::utils::number_utils::within_tolerance;

use super::{apply_fees, FeeSchedule, FeeWaterfall, PartyFees};

/// Charges each active investor's post-carry net the entry and management
/// fees of `schedule` and credits every fee to Founders.
pub fn apply_fee_schedule(allocation: &AllocationResult, schedule: &FeeSchedule) -> FeeWaterfall {
    let entry_fee_rate = schedule.entry_rate();
    let management_fee_rate = schedule.management_rate();

    let mut parties: PartyMap<PartyFees> = allocation.parties.map(|_, p| PartyFees {
        pre_fee_amount: p.net_amount,
        net_amount: p.net_amount,
        ..PartyFees::default()
    });

    let mut collected_entry = Decimal::ZERO;
    let mut collected_management = Decimal::ZERO;
    for party in Party::INVESTORS {
        if !allocation.parties[party].active {
            continue;
        }
        let slot = &mut parties[party];
        let fees = apply_fees(slot.pre_fee_amount, entry_fee_rate, management_fee_rate);
        if fees.original_amount.is_zero() {
            continue;
        }
        slot.entry_fee = fees.entry_fee;
        slot.management_fee = fees.management_fee;
        slot.net_amount = fees.net_amount;
        collected_entry += fees.entry_fee;
        collected_management += fees.management_fee;
    }

    let founders = &mut parties.founders;
    founders.entry_fee = collected_entry;
    founders.management_fee = collected_management;
    founders.net_amount = founders.pre_fee_amount + collected_entry + collected_management;

    let waterfall = FeeWaterfall {
        entry_fee_rate,
        management_fee_rate,
        profit: allocation.profit,
        parties,
        total_fees: collected_entry + collected_management,
    };

    let verification = waterfall.verify();
    if let Err(err) = &verification {
        error!("Fee waterfall invariant violated: {}", err);
    }
    debug_assert!(verification.is_ok(), "fee waterfall invariant violated");

    waterfall
}

impl FeeWaterfall {
    pub fn net_amount(&self, party: Party) -> Decimal {
        self.parties[party].net_amount
    }

    /// Checks that fees only moved money between parties.
    pub fn verify(&self) -> Result<()> {
        let distributed = self.parties.map(|_, p| p.net_amount).total();
        if !within_tolerance(self.profit, distributed) {
            return Err(CalculatorError::ConservationViolated {
                expected: self.profit,
                distributed,
            }
            .into());
        }

        let paid: Decimal = Party::INVESTORS
            .iter()
            .map(|party| self.parties[*party].total_fees())
            .sum();
        let collected = self.parties.founders.total_fees();
        if collected != paid {
            return Err(CalculatorError::FeeRoutingMismatch { collected, paid }.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::allocate;
    use crate::parties::InvestorActivity;
    use crate::weights::CapitalDayWeights;
    use rust_decimal_macros::dec;

    fn allocation(activity: InvestorActivity) -> AllocationResult {
        let weights =
            CapitalDayWeights::from_raw(&PartyMap::new(dec!(50), dec!(30), dec!(20)));
        allocate(dec!(1000), dec!(20), &weights, &activity)
    }

    #[test]
    fn test_fees_route_to_founders() {
        let waterfall = apply_fee_schedule(
            &allocation(InvestorActivity::all_active()),
            &FeeSchedule::new(dec!(10), dec!(2)),
        );

        // Investor A: 240 net after carry -> 24 entry, 4.32 management
        let a = waterfall.parties[Party::InvestorA];
        assert_eq!(a.pre_fee_amount, dec!(240));
        assert_eq!(a.entry_fee, dec!(24));
        assert_eq!(a.management_fee, dec!(4.32));
        assert_eq!(a.net_amount, dec!(211.68));

        // Investor B: 160 -> 16 entry, 2.88 management
        let b = waterfall.parties[Party::InvestorB];
        assert_eq!(b.net_amount, dec!(141.12));

        let f = waterfall.parties[Party::Founders];
        assert_eq!(f.pre_fee_amount, dec!(600));
        assert_eq!(f.entry_fee, dec!(40));
        assert_eq!(f.management_fee, dec!(7.2));
        assert_eq!(f.net_amount, dec!(647.2));

        assert_eq!(waterfall.total_fees, dec!(47.2));
        assert!(waterfall.verify().is_ok());
    }

    #[test]
    fn test_inactive_investor_pays_no_fees() {
        let waterfall = apply_fee_schedule(
            &allocation(InvestorActivity::all_active().with(Party::InvestorB, false)),
            &FeeSchedule::new(dec!(10), Decimal::ZERO),
        );

        assert_eq!(waterfall.parties[Party::InvestorB].total_fees(), Decimal::ZERO);
        assert_eq!(waterfall.parties.founders.entry_fee, dec!(24));
        assert_eq!(waterfall.net_amount(Party::Founders), dec!(784));
        assert!(waterfall.verify().is_ok());
    }

    #[test]
    fn test_empty_schedule_leaves_allocation_unchanged() {
        let base = allocation(InvestorActivity::all_active());
        let waterfall = apply_fee_schedule(&base, &FeeSchedule::default());
        for party in Party::ALL {
            assert_eq!(waterfall.net_amount(party), base.net_amount(party));
        }
        assert_eq!(waterfall.total_fees, Decimal::ZERO);
    }

    #[test]
    fn test_schedule_percentages_clamp() {
        let schedule = FeeSchedule::new(dec!(150), dec!(-5));
        assert_eq!(schedule.entry_rate(), Decimal::ONE);
        assert_eq!(schedule.management_rate(), Decimal::ZERO);
        assert!(FeeSchedule::default().is_empty());
    }
}
