use currencies::Asset;
use finance::{
    amount::{self, Amount},
    duration::Duration,
    error::Result as FinanceResult,
    fraction::Fraction,
    percent::Percent,
    scale::Scale,
};

use crate::{
    error::Result,
    fees::{BorrowFee, FlashloanFee},
    incentive::IncentiveRewardFactor,
    interest_model::{InterestCurve, InterestModel},
    limiter::OutflowLimiter,
    market::MarketParams,
    risk_model::RiskModel,
    table::Table,
};

const MID_KINK: Percent = Percent::from_percent(60);
const HIGH_KINK: Percent = Percent::from_percent(90);
const REVENUE_FACTOR: Percent = Percent::from_percent(5);
const BORROW_WEIGHT: Percent = Percent::HUNDRED;

const VOLATILE: [Percent; 3] = [
    Percent::from_percent(10),
    Percent::from_percent(100),
    Percent::from_percent(300),
];
const STABLE: [Percent; 3] = [
    Percent::from_percent(8),
    Percent::from_percent(50),
    Percent::from_percent(150),
];

/// Borrow rates on the mid kink, on the high kink and at full utilization,
/// plus the minimum borrow amount as a negative power of ten of a whole coin.
const INTEREST_CURVES: [(Asset, [Percent; 3], u8); 8] = [
    (Asset::Sui, VOLATILE, 2),
    (Asset::Cetus, VOLATILE, 0),
    (Asset::WormholeUsdc, STABLE, 2),
    (Asset::WormholeUsdt, STABLE, 2),
    (Asset::WormholeEth, VOLATILE, 3),
    (Asset::WormholeBtc, VOLATILE, 4),
    (Asset::WormholeSol, VOLATILE, 2),
    (Asset::WormholeApt, VOLATILE, 2),
];

/// Whole coins. There is no supply limit for `wormhole_apt` yet.
const SUPPLY_LIMITS: [(Asset, Amount); 7] = [
    (Asset::Sui, 100_000_000),
    (Asset::Cetus, 2_000_000),
    (Asset::WormholeUsdc, 100_000_000),
    (Asset::WormholeUsdt, 100_000_000),
    (Asset::WormholeEth, 10_000),
    (Asset::WormholeBtc, 20),
    (Asset::WormholeSol, 20_000),
];

/// Whole coins
const BORROW_LIMITS: [(Asset, Amount); 8] = [
    (Asset::Sui, 50_000_000),
    (Asset::Cetus, 1_000_000),
    (Asset::WormholeUsdc, 50_000_000),
    (Asset::WormholeUsdt, 50_000_000),
    (Asset::WormholeEth, 5_000),
    (Asset::WormholeBtc, 10),
    (Asset::WormholeSol, 10_000),
    (Asset::WormholeApt, 10_000),
];

/// Whole coins per day
const OUTFLOW_LIMITS: [(Asset, Amount); 8] = [
    (Asset::Sui, 1_000_000),
    (Asset::Cetus, 1_000_000),
    (Asset::WormholeUsdc, 1_000_000),
    (Asset::WormholeUsdt, 1_000_000),
    (Asset::WormholeEth, 500),
    (Asset::WormholeBtc, 5),
    (Asset::WormholeSol, 5_000),
    (Asset::WormholeApt, 5_000),
];
const OUTFLOW_SEGMENT: Duration = Duration::from_minutes(30);

const FLASHLOAN_FEES_BPS: [(Asset, u64); 8] = [
    (Asset::Sui, 0),
    (Asset::Cetus, 30),
    (Asset::WormholeUsdc, 0),
    (Asset::WormholeUsdt, 0),
    (Asset::WormholeEth, 0),
    (Asset::WormholeBtc, 0),
    (Asset::WormholeSol, 0),
    (Asset::WormholeApt, 30),
];

/// Collateral factor, liquidation factor, liquidation penalty and discount in
/// permille, followed by the maximum collateral in whole coins.
const RISK_MODELS: [(Asset, [u32; 4], Amount); 8] = [
    (Asset::Sui, [700, 800, 50, 40], 10_000_000),
    (Asset::Cetus, [500, 600, 100, 90], 1_000_000),
    (Asset::WormholeUsdc, [800, 850, 40, 30], 10_000_000),
    (Asset::WormholeUsdt, [800, 850, 40, 30], 10_000_000),
    (Asset::WormholeEth, [750, 800, 50, 40], 2_000),
    (Asset::WormholeBtc, [700, 800, 50, 40], 10),
    (Asset::WormholeSol, [600, 700, 70, 60], 5_000),
    (Asset::WormholeApt, [600, 700, 70, 60], 5_000),
];

impl MarketParams {
    /// The parameters the mainnet market is deployed with.
    pub fn mainnet() -> Result<Self> {
        Ok(Self::new(
            interest_models()?,
            outflow_limiters()?,
            in_units(&SUPPLY_LIMITS)?,
            in_units(&BORROW_LIMITS)?,
            Asset::ALL.into_iter().map(|asset| (asset, true)).collect(),
            borrow_fees()?,
            flashloan_fees()?,
            incentive_reward_factors()?,
            risk_models()?,
        ))
    }
}

fn interest_models() -> FinanceResult<Table<InterestModel>> {
    INTEREST_CURVES
        .into_iter()
        .map(|(asset, [on_mid_kink, on_high_kink, max], min_borrow_exp)| {
            asset
                .decimal_digits()
                .checked_sub(min_borrow_exp)
                .map_or(Ok(1), |digits| amount::from_whole(1, digits))
                .and_then(|min_borrow_amount| {
                    InterestCurve {
                        base_rate: Percent::ZERO,
                        rate_on_mid_kink: on_mid_kink,
                        mid_kink: MID_KINK,
                        rate_on_high_kink: on_high_kink,
                        high_kink: HIGH_KINK,
                        max_rate: max,
                        revenue_factor: REVENUE_FACTOR,
                        borrow_weight: BORROW_WEIGHT,
                        min_borrow_amount,
                    }
                    .model(Scale::MARKET, Scale::INTEREST_RATE)
                })
                .map(|model| (asset, model))
        })
        .collect()
}

fn outflow_limiters() -> FinanceResult<Table<OutflowLimiter>> {
    OUTFLOW_LIMITS
        .into_iter()
        .map(|(asset, whole)| {
            amount::from_whole(whole, asset.decimal_digits())
                .and_then(|limit| OutflowLimiter::new(limit, Duration::DAY, OUTFLOW_SEGMENT))
                .map(|limiter| (asset, limiter))
        })
        .collect()
}

fn in_units(caps: &[(Asset, Amount)]) -> FinanceResult<Table<Amount>> {
    caps.iter()
        .map(|&(asset, whole)| {
            amount::from_whole(whole, asset.decimal_digits()).map(|units| (asset, units))
        })
        .collect()
}

fn borrow_fees() -> FinanceResult<Table<BorrowFee>> {
    Asset::ALL
        .into_iter()
        .map(|asset| {
            Fraction::new(0, 100)
                .and_then(BorrowFee::new)
                .map(|fee| (asset, fee))
        })
        .collect()
}

fn flashloan_fees() -> FinanceResult<Table<FlashloanFee>> {
    FLASHLOAN_FEES_BPS
        .into_iter()
        .map(|(asset, bps)| FlashloanFee::from_bps(bps).map(|fee| (asset, fee)))
        .collect()
}

fn incentive_reward_factors() -> FinanceResult<Table<IncentiveRewardFactor>> {
    Asset::ALL
        .into_iter()
        .map(|asset| IncentiveRewardFactor::new(1, 1).map(|factor| (asset, factor)))
        .collect()
}

fn risk_models() -> FinanceResult<Table<RiskModel>> {
    RISK_MODELS
        .into_iter()
        .map(
            |(asset, [collateral, liquidation, penalty, discount], max_collateral)| {
                amount::from_whole(max_collateral, asset.decimal_digits())
                    .and_then(|max_collateral_amount| {
                        RiskModel::from_percents(
                            Percent::from_permille(collateral),
                            Percent::from_permille(liquidation),
                            Percent::from_permille(penalty),
                            Percent::from_permille(discount),
                            Scale::MARKET,
                            max_collateral_amount,
                        )
                    })
                    .map(|model| (asset, model))
            },
        )
        .collect()
}

#[cfg(test)]
mod test {
    use currencies::Asset;

    use crate::{error::Error, market::MarketParams};

    #[test]
    fn mainnet() {
        assert!(MarketParams::mainnet().is_ok());
    }

    #[test]
    fn kinks_ordered() {
        let params = MarketParams::mainnet().unwrap();
        assert_eq!(Asset::ALL.len(), params.interest_models().len());
        params.interest_models().iter().for_each(|(_, model)| {
            assert!(model.mid_kink() < model.high_kink());
            assert!(model.high_kink() <= model.scale());
        });
    }

    #[test]
    fn interest_rates() {
        let params = MarketParams::mainnet().unwrap();

        let sui = params.interest_model(Asset::Sui).unwrap();
        assert_eq!(0, sui.base_borrow_rate_per_sec());
        assert_eq!(31_709_791_983, sui.borrow_rate_on_mid_kink());
        assert_eq!(317_097_919_837, sui.borrow_rate_on_high_kink());
        assert_eq!(951_293_759_512, sui.max_borrow_rate());
        assert_eq!(600_000_000_000, sui.mid_kink());
        assert_eq!(900_000_000_000, sui.high_kink());
        assert_eq!(50_000_000_000, sui.revenue_factor());
        assert_eq!(1_000_000_000_000, sui.borrow_weight());
        assert_eq!(10_000_000, sui.interest_rate_scale());

        let usdc = params.interest_model(Asset::WormholeUsdc).unwrap();
        assert_eq!(25_367_833_587, usdc.borrow_rate_on_mid_kink());
        assert_eq!(158_548_959_918, usdc.borrow_rate_on_high_kink());
        assert_eq!(475_646_879_756, usdc.max_borrow_rate());
    }

    #[test]
    fn min_borrow_amounts() {
        let params = MarketParams::mainnet().unwrap();
        let min_borrow = |asset| params.interest_model(asset).unwrap().min_borrow_amount();

        assert_eq!(10_000_000, min_borrow(Asset::Sui));
        assert_eq!(1_000_000_000, min_borrow(Asset::Cetus));
        assert_eq!(10_000, min_borrow(Asset::WormholeUsdc));
        assert_eq!(100_000, min_borrow(Asset::WormholeEth));
        assert_eq!(10_000, min_borrow(Asset::WormholeBtc));
        assert_eq!(1_000_000, min_borrow(Asset::WormholeApt));
    }

    #[test]
    fn supply_limits() {
        let params = MarketParams::mainnet().unwrap();
        assert_eq!(Ok(100_000_000_000_000_000), params.supply_limit(Asset::Sui));
        assert_eq!(Ok(100_000_000_000_000), params.supply_limit(Asset::WormholeUsdc));
        assert_eq!(Ok(2_000_000_000), params.supply_limit(Asset::WormholeBtc));
        assert_eq!(
            Err(Error::MissingConfiguration {
                table: MarketParams::SUPPLY_LIMITS,
                asset: Asset::WormholeApt
            }),
            params.supply_limit(Asset::WormholeApt)
        );
    }

    #[test]
    fn caps_within_supply() {
        let params = MarketParams::mainnet().unwrap();
        params.borrow_limits().iter().for_each(|(&asset, &borrow)| {
            if let Ok(supply) = params.supply_limit(asset) {
                assert!(borrow <= supply);
            }
        });
    }

    #[test]
    fn complete_but_supply() {
        let params = MarketParams::mainnet().unwrap();
        Asset::ALL.into_iter().for_each(|asset| {
            assert!(params.outflow_limiter(asset).is_ok());
            assert!(params.borrow_limit(asset).is_ok());
            assert!(params.borrow_fee(asset).is_ok());
            assert!(params.flashloan_fee(asset).is_ok());
            assert!(params.incentive_reward_factor(asset).is_ok());
            assert!(params.risk_model(asset).is_ok());
        });
    }

    #[test]
    fn new_pools_isolated() {
        let params = MarketParams::mainnet().unwrap();
        Asset::ALL
            .into_iter()
            .for_each(|asset| assert_eq!(Ok(true), params.is_isolated(asset)));
    }
}
