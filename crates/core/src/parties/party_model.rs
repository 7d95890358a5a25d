use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// One of the three parties sharing the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Party {
    Founders,
    InvestorA,
    InvestorB,
}

impl Party {
    pub const ALL: [Party; 3] = [Party::Founders, Party::InvestorA, Party::InvestorB];
    pub const INVESTORS: [Party; 2] = [Party::InvestorA, Party::InvestorB];

    /// Display label used by reports and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Party::Founders => "Founders",
            Party::InvestorA => "Laura",
            Party::InvestorB => "Damon",
        }
    }

    /// Resolves the aliases found in uploads and older scenario files.
    pub fn from_alias(alias: &str) -> Option<Party> {
        match alias.trim().to_ascii_lowercase().as_str() {
            "f" | "founders" | "founder" => Some(Party::Founders),
            "l" | "laura" | "investor" | "investora" => Some(Party::InvestorA),
            "d" | "damon" | "moonbag" | "investorb" => Some(Party::InvestorB),
            _ => None,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Party {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Party::from_alias(s).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown party '{}'",
                s
            )))
        })
    }
}

/// A value for each party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyMap<T> {
    pub founders: T,
    pub investor_a: T,
    pub investor_b: T,
}

impl<T> PartyMap<T> {
    pub fn new(founders: T, investor_a: T, investor_b: T) -> Self {
        Self {
            founders,
            investor_a,
            investor_b,
        }
    }

    /// Builds a map by evaluating `f` for every party.
    pub fn from_fn(mut f: impl FnMut(Party) -> T) -> Self {
        Self {
            founders: f(Party::Founders),
            investor_a: f(Party::InvestorA),
            investor_b: f(Party::InvestorB),
        }
    }

    pub fn get(&self, party: Party) -> &T {
        match party {
            Party::Founders => &self.founders,
            Party::InvestorA => &self.investor_a,
            Party::InvestorB => &self.investor_b,
        }
    }

    pub fn get_mut(&mut self, party: Party) -> &mut T {
        match party {
            Party::Founders => &mut self.founders,
            Party::InvestorA => &mut self.investor_a,
            Party::InvestorB => &mut self.investor_b,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Party, &T) -> U) -> PartyMap<U> {
        PartyMap::from_fn(|party| f(party, self.get(party)))
    }

    /// Iterates in the fixed order Founders, InvestorA, InvestorB.
    pub fn iter(&self) -> impl Iterator<Item = (Party, &T)> {
        Party::ALL.into_iter().map(move |party| (party, self.get(party)))
    }
}

impl PartyMap<Decimal> {
    pub fn total(&self) -> Decimal {
        self.founders + self.investor_a + self.investor_b
    }

    /// `None` when the sum leaves the `Decimal` range.
    pub fn checked_total(&self) -> Option<Decimal> {
        self.founders
            .checked_add(self.investor_a)?
            .checked_add(self.investor_b)
    }

    pub fn investor_total(&self) -> Decimal {
        self.investor_a + self.investor_b
    }
}

impl<T> Index<Party> for PartyMap<T> {
    type Output = T;

    fn index(&self, party: Party) -> &T {
        self.get(party)
    }
}

impl<T> IndexMut<Party> for PartyMap<T> {
    fn index_mut(&mut self, party: Party) -> &mut T {
        self.get_mut(party)
    }
}

/// Deployment flags for the investor parties.
///
/// Founders are always active. An inactive investor ("not deployed") keeps
/// its weight for reporting but its nominal share routes to Founders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorActivity {
    #[serde(default = "default_active")]
    pub investor_a: bool,
    #[serde(default = "default_active")]
    pub investor_b: bool,
}

fn default_active() -> bool {
    true
}

impl Default for InvestorActivity {
    fn default() -> Self {
        Self::all_active()
    }
}

impl InvestorActivity {
    pub fn all_active() -> Self {
        Self {
            investor_a: true,
            investor_b: true,
        }
    }

    pub fn with(mut self, party: Party, active: bool) -> Self {
        match party {
            Party::Founders => {}
            Party::InvestorA => self.investor_a = active,
            Party::InvestorB => self.investor_b = active,
        }
        self
    }

    pub fn is_active(&self, party: Party) -> bool {
        match party {
            Party::Founders => true,
            Party::InvestorA => self.investor_a,
            Party::InvestorB => self.investor_b,
        }
    }
}
