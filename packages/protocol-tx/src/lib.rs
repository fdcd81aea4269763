pub use self::{
    decimals_registry::DecimalsRegistryTxBuilder,
    deployment::Deployment,
    network::Network,
    oracle::{OracleRuleTxBuilder, PythRuleTxBuilder, SwitchboardRuleTxBuilder},
    protocol::ProtocolTxBuilder,
};

pub mod decimals_registry;
pub mod deployment;
pub mod error;
pub mod network;
pub mod oracle;
pub mod protocol;
