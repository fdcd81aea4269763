use serde::{Deserialize, Serialize};

use platform::object_id::ObjectId;

/// The price feed an asset is priced by.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub enum OracleBinding {
    #[serde(rename_all = "camelCase")]
    Pyth { price_info_object_id: ObjectId },
    #[serde(rename_all = "camelCase")]
    SwitchboardOnDemand { aggregator_id: ObjectId },
}
