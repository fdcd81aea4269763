pub mod amount;
pub mod duration;
pub mod error;
pub mod fraction;
pub mod percent;
pub mod rate;
pub mod scale;
