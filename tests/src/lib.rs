#![cfg(test)]

mod common;

mod collateral_listing_tests;

mod pool_listing_tests;
