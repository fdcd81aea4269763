use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde_json::{json, Value};

use currencies::Asset;
use market_params::MarketParams;
use multisig::{MultiSig, Outbox, SignableTransaction, Submission as _};
use platform::transaction::Finalized;
use protocol_tx::{Deployment, Network};

pub(crate) const NETWORK: Network = Network::Testnet;

pub(crate) const PROTOCOL_PACKAGE: &str =
    "0xefe8b36d5b2e43728cc323298626b83177803521d195cfb11e15b910e892fddf";
pub(crate) const PYTH_RULE_PACKAGE: &str =
    "0x2a1a6b6d7c7b0f3a1fa4ef30b2c6b3a8f5cd5b5c8a8b2f7d3b9e0c1d2e3f4a5b";
pub(crate) const SWITCHBOARD_RULE_PACKAGE: &str =
    "0x3b2b7c7e8d8c1f4b2fb5f041c3d7c4b9f6de6c6d9b9c3f8e4cafd1e2f3a4b5c6";
pub(crate) const DUST_COIN: &str =
    "0x307dc3b470b7b4718a59f26efcc9229a4407b15fbbd031eaf1147535a7626c4c";
pub(crate) const SENDER: &str =
    "0xd1f0b1f9a3e0b6c7e5d3c2b1a0f9e8d7c6b5a4938271605f4e3d2c1b0a998877";

const PUBLIC_KEYS: [&str; 3] = [
    "AAEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEB",
    "AAICAgICAgICAgICAgICAgICAgICAgICAgICAgICAgIC",
    "AAMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMD",
];

/// A scratch directory laid out the way a listing run expects it: the
/// deployment artifacts, the multi-signature description and the outbox.
pub(crate) struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(name: &str) -> Self {
        let root = env::temp_dir().join(format!("listing-tests-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("deployments")).unwrap();

        let workspace = Self { root };
        workspace.write_multisig(2);
        workspace
    }

    pub fn deployments(&self) -> PathBuf {
        self.root.join("deployments")
    }

    pub fn outbox(&self) -> Outbox {
        Outbox::new(self.root.join("outbox"))
    }

    pub fn multisig_path(&self) -> PathBuf {
        self.root.join("multisig.json")
    }

    pub fn write_multisig(&self, threshold: u16) {
        write_json(
            &self.multisig_path(),
            &json!({
                "address": SENDER,
                "threshold": threshold,
                "signers": PUBLIC_KEYS
                    .iter()
                    .map(|key| json!({"publicKey": key, "weight": 1}))
                    .collect::<Vec<_>>(),
            }),
        );
    }

    /// The protocol, decimals registry and Pyth rule artifacts, with every
    /// asset priced by Pyth.
    pub fn write_deployment(&self) {
        self.write_artifact(
            "protocol",
            &json!({
                "packageId": PROTOCOL_PACKAGE,
                "marketId": "0xa757975255146dc9686aa823b7838b507f315d704f428cbadad2f4ea061939d9",
                "adminCapId": "0x38527d154618d1fd5a644b90717fe07cf0e9f26b46b63e9568e611a3f86d5c1a",
                "versionId": "0x07871c4b3c847a0f674510d4978d5cf6f960452795e8ff6f189fd2088a3f6ac7",
                "upgradeCapId": "0x4dd1e5bb7c6d5d2e3b0ff0c4ec1d1d05cf5d0b9e2f2b5ac6ea2c4a4c6b0f1c2d",
            }),
        );
        self.write_artifact(
            "coin_decimals_registry",
            &json!({
                "packageId": "0xca5a5a62f01c79a104bf4d31669e29daa387f325c241de4edbe30986a9bc8b0d",
                "coinDecimalsRegistryId": "0x200abe9bf19751cc566ae35aa58e2b7e4ff688fc1130f8d8909ea09bc137d668",
            }),
        );
        self.write_artifact(
            "pyth_rule",
            &json!({
                "packageId": PYTH_RULE_PACKAGE,
                "pythRegistryId": "0xdcb1b4a7b5a8e9b8b7c1d9f39a0d5b5d0f4b4c6a7e1e1f2a3b4c5d6e7f8091a2",
                "pythRegistryCapId": "0x1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d",
            }),
        );
        self.write_oracles(
            Asset::ALL
                .into_iter()
                .zip(1..)
                .map(|(asset, feed): (Asset, u8)| {
                    (
                        String::from(asset.ticker()),
                        json!({"pyth": {"priceInfoObjectId": format!("0x{feed:064x}")}}),
                    )
                })
                .collect(),
        );
    }

    pub fn write_switchboard_rule(&self) {
        self.write_artifact(
            "switchboard_on_demand_rule",
            &json!({
                "packageId": SWITCHBOARD_RULE_PACKAGE,
                "switchboardOnDemandRegistryId": "0x5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f",
                "switchboardOnDemandRegistryCapId": "0x6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a",
            }),
        );
    }

    pub fn write_oracles(&self, oracles: serde_json::Map<String, Value>) {
        self.write_artifact("asset_oracles", &Value::Object(oracles));
    }

    pub fn load_deployment(&self) -> Deployment {
        Deployment::load(&self.deployments(), NETWORK).unwrap()
    }

    /// Bind `transaction` to the sender, drop it in the outbox and read the
    /// proposal back.
    pub fn propose(&self, transaction: Finalized) -> Value {
        let multisig = MultiSig::load(&self.multisig_path()).unwrap();
        let transaction = SignableTransaction::new(&multisig, 50_000_000, transaction).unwrap();

        let mut outbox = self.outbox();
        let id = outbox.submit(transaction).unwrap();

        serde_json::from_slice(&fs::read(outbox.proposal_path(&id)).unwrap()).unwrap()
    }

    fn write_artifact(&self, artifact: &str, content: &Value) {
        write_json(
            &Deployment::artifact_path(&self.deployments(), artifact, NETWORK),
            content,
        );
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

pub(crate) fn params() -> MarketParams {
    MarketParams::mainnet().unwrap()
}

pub(crate) fn commands(proposal: &Value) -> Vec<&str> {
    proposal["commands"]
        .as_array()
        .unwrap()
        .iter()
        .map(|command| command.as_str().unwrap())
        .collect()
}

pub(crate) fn events(proposal: &Value) -> Vec<&str> {
    proposal["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event.as_str().unwrap())
        .collect()
}

fn write_json(path: &Path, content: &Value) {
    fs::write(path, serde_json::to_vec_pretty(content).unwrap()).unwrap();
}
