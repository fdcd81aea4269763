pub use self::{
    collateral::compose_collateral_listing,
    pool::{compose_pool_listing, PoolListingRequest},
};

mod collateral;
pub mod error;
#[cfg(test)]
mod fixtures;
mod pool;
