use crate::{
    duration::Duration,
    error::{Error, Result},
    percent::Percent,
    scale::Scale,
};

/// Converts a yearly rate into a per-second one expressed in
/// `scale * interest_rate_scale` units, rounding down.
///
/// Computes `floor(yearly_permille * (scale / 1000) * interest_rate_scale / seconds in a year)`
/// with integers only, so the result is the same on every run and platform.
/// The scale is brought to permille first.
pub fn rate_per_second(yearly: Percent, scale: Scale, interest_rate_scale: Scale) -> Result<u64> {
    let overflow = || Error::overflow("rate_per_second", yearly, (scale, interest_rate_scale));

    let scale_per_mille = u128::from(scale) / u128::from(Percent::HUNDRED.units());

    u128::from(yearly.units())
        .checked_mul(scale_per_mille)
        .and_then(|scaled| scaled.checked_mul(interest_rate_scale.into()))
        .map(|scaled| scaled / u128::from(Duration::YEAR.secs()))
        .and_then(|per_second| u64::try_from(per_second).ok())
        .ok_or_else(overflow)
}

#[cfg(test)]
mod test {
    use crate::{duration::Duration, percent::Percent, scale::Scale};

    use super::rate_per_second;

    fn market_rate(percent: u16) -> u64 {
        rate_per_second(
            Percent::from_percent(percent),
            Scale::MARKET,
            Scale::INTEREST_RATE,
        )
        .expect("market scales should not overflow")
    }

    #[test]
    fn ten_percent() {
        assert_eq!(
            10 * 10u64.pow(10) * 10u64.pow(7) / Duration::YEAR.secs(),
            market_rate(10)
        );
        assert_eq!(31_709_791_983, market_rate(10));
    }

    #[test]
    fn configured_rates() {
        assert_eq!(25_367_833_587, market_rate(8));
        assert_eq!(158_548_959_918, market_rate(50));
        assert_eq!(317_097_919_837, market_rate(100));
        assert_eq!(475_646_879_756, market_rate(150));
        assert_eq!(951_293_759_512, market_rate(300));
    }

    #[test]
    fn matches_floating_derivation() {
        for percent in [8u16, 10, 50, 100, 150, 300] {
            let floating = (f64::from(percent) * (1e12 / 100.0) * 1e7 / 31_536_000.0).floor();
            assert_eq!(floating as u64, market_rate(percent), "{percent}%");
        }
    }

    #[test]
    fn monotonic() {
        (0..=5_000)
            .map(|permille| {
                rate_per_second(
                    Percent::from_permille(permille),
                    Scale::MARKET,
                    Scale::INTEREST_RATE,
                )
                .unwrap()
            })
            .collect::<Vec<_>>()
            .windows(2)
            .for_each(|pair| assert!(pair[0] <= pair[1]));
    }

    #[test]
    fn scale_in_permille_first() {
        assert_eq!(
            Ok(100),
            rate_per_second(
                Percent::from_percent(10),
                Scale::new(1_999),
                Scale::new(Duration::YEAR.secs())
            )
        );
    }

    #[test]
    fn deterministic() {
        assert_eq!(market_rate(77), market_rate(77));
    }

    #[test]
    fn zero() {
        assert_eq!(0, market_rate(0));
    }

    #[test]
    fn overflow() {
        assert!(rate_per_second(
            Percent::from_permille(u32::MAX),
            Scale::new(u64::MAX),
            Scale::new(u64::MAX)
        )
        .is_err());
    }
}
