use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for weight percentages in exports
pub const WEIGHT_DISPLAY_PRECISION: u32 = 4;

/// Relative tolerance for the conservation checks (1e-9)
pub const CONSERVATION_TOLERANCE: Decimal = dec!(0.000000001);

/// Share of a moonshot pool locked to Founders before the investor split
pub const MOONSHOT_FOUNDER_SHARE: Decimal = dec!(0.25);

/// Share of a moonshot pool divided across investors
pub const MOONSHOT_INVESTOR_SHARE: Decimal = dec!(0.75);

/// Carry percent applied when a caller provides none
pub const DEFAULT_CARRY_PERCENT: Decimal = dec!(20);

/// Upper bound for percentage inputs (carry, fees)
pub const MAX_PERCENT: Decimal = dec!(100);
