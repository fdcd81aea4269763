pub use self::{
    fees::{BorrowFee, FlashloanFee},
    incentive::IncentiveRewardFactor,
    interest_model::{InterestCurve, InterestModel},
    limiter::OutflowLimiter,
    market::MarketParams,
    oracle::OracleBinding,
    risk_model::RiskModel,
    table::Table,
};

mod defaults;
pub mod error;
pub mod fees;
pub mod incentive;
pub mod interest_model;
pub mod limiter;
pub mod market;
pub mod oracle;
pub mod risk_model;
pub mod table;
