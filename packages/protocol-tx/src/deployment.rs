use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Deserialize};

use currencies::Asset;
use market_params::{OracleBinding, Table};
use platform::object_id::ObjectId;

use crate::{
    error::{Error, Result},
    network::Network,
};

/// The published lending protocol package and its shared objects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolDeployment {
    pub package_id: ObjectId,
    pub market_id: ObjectId,
    pub admin_cap_id: ObjectId,
    pub version_id: ObjectId,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecimalsRegistryDeployment {
    pub package_id: ObjectId,
    pub coin_decimals_registry_id: ObjectId,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PythRuleDeployment {
    pub package_id: ObjectId,
    pub pyth_registry_id: ObjectId,
    pub pyth_registry_cap_id: ObjectId,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchboardRuleDeployment {
    pub package_id: ObjectId,
    pub switchboard_on_demand_registry_id: ObjectId,
    pub switchboard_on_demand_registry_cap_id: ObjectId,
}

/// Everything published on a network that listing transactions refer to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deployment {
    network: Network,
    protocol: ProtocolDeployment,
    decimals_registry: DecimalsRegistryDeployment,
    pyth_rule: PythRuleDeployment,
    switchboard_rule: Option<SwitchboardRuleDeployment>,
    oracles: Table<OracleBinding>,
}

impl Deployment {
    const PROTOCOL: &'static str = "protocol";
    const DECIMALS_REGISTRY: &'static str = "coin_decimals_registry";
    const PYTH_RULE: &'static str = "pyth_rule";
    const SWITCHBOARD_RULE: &'static str = "switchboard_on_demand_rule";
    const ORACLES: &'static str = "asset_oracles";

    pub fn new(
        network: Network,
        protocol: ProtocolDeployment,
        decimals_registry: DecimalsRegistryDeployment,
        pyth_rule: PythRuleDeployment,
        switchboard_rule: Option<SwitchboardRuleDeployment>,
        oracles: Table<OracleBinding>,
    ) -> Self {
        Self {
            network,
            protocol,
            decimals_registry,
            pyth_rule,
            switchboard_rule,
            oracles,
        }
    }

    /// Read the `<artifact>.<network>.json` files out of `dir`.
    ///
    /// The Switchboard rule is optional, any other artifact missing is an error.
    pub fn load(dir: &Path, network: Network) -> Result<Self> {
        Ok(Self::new(
            network,
            read_artifact(dir, Self::PROTOCOL, network)?,
            read_artifact(dir, Self::DECIMALS_REGISTRY, network)?,
            read_artifact(dir, Self::PYTH_RULE, network)?,
            read_optional_artifact(dir, Self::SWITCHBOARD_RULE, network)?,
            read_artifact(dir, Self::ORACLES, network)?,
        ))
    }

    pub const fn network(&self) -> Network {
        self.network
    }

    pub const fn protocol(&self) -> &ProtocolDeployment {
        &self.protocol
    }

    pub const fn decimals_registry(&self) -> &DecimalsRegistryDeployment {
        &self.decimals_registry
    }

    pub const fn pyth_rule(&self) -> &PythRuleDeployment {
        &self.pyth_rule
    }

    pub fn switchboard_rule(&self) -> Result<&SwitchboardRuleDeployment> {
        self.switchboard_rule
            .as_ref()
            .ok_or(Error::RuleNotDeployed(Self::SWITCHBOARD_RULE))
    }

    pub fn oracle(&self, asset: Asset) -> Result<&OracleBinding> {
        self.oracles
            .lookup("oracles", asset)
            .map_err(Into::into)
    }

    pub fn artifact_path(dir: &Path, artifact: &str, network: Network) -> PathBuf {
        dir.join(format!("{artifact}.{network}.json"))
    }
}

fn read_artifact<T>(dir: &Path, artifact: &str, network: Network) -> Result<T>
where
    T: DeserializeOwned,
{
    let path = Deployment::artifact_path(dir, artifact, network);

    fs::read_to_string(&path)
        .map_err(|error| Error::read_artifact(path.clone(), error))
        .and_then(|json| parse(path, &json))
}

fn read_optional_artifact<T>(dir: &Path, artifact: &str, network: Network) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let path = Deployment::artifact_path(dir, artifact, network);

    match fs::read_to_string(&path) {
        Ok(json) => parse(path, &json).map(Some),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
        Err(error) => Err(Error::read_artifact(path, error)),
    }
}

fn parse<T>(path: PathBuf, json: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(json).map_err(|error| Error::parse_artifact(path, error))
}
