use std::collections::{btree_map::Iter, BTreeMap};

use serde::{Deserialize, Serialize};

use currencies::Asset;

use crate::error::{Error, Result};

/// A per-role mapping from an asset to its record.
///
/// Tables are partial on purpose. A lookup of an asset with no entry is
/// reported as a missing configuration naming the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table<R>(BTreeMap<Asset, R>);

impl<R> Table<R> {
    pub fn lookup(&self, table: &'static str, asset: Asset) -> Result<&R> {
        self.0
            .get(&asset)
            .ok_or(Error::missing_configuration(table, asset))
    }

    pub fn insert(&mut self, asset: Asset, record: R) -> Option<R> {
        self.0.insert(asset, record)
    }

    /// Replace the records of the assets `overrides` has entries for.
    pub fn override_with(&mut self, overrides: Self) {
        self.0.extend(overrides.0);
    }

    pub fn iter(&self) -> Iter<'_, Asset, R> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<R> FromIterator<(Asset, R)> for Table<R> {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (Asset, R)>,
    {
        Self(iter.into_iter().collect())
    }
}

impl<'t, R> IntoIterator for &'t Table<R> {
    type Item = (&'t Asset, &'t R);

    type IntoIter = Iter<'t, Asset, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use currencies::Asset;

    use crate::error::Error;

    use super::Table;

    #[test]
    fn lookup() {
        let table: Table<u64> = [(Asset::Sui, 1), (Asset::Cetus, 2)].into_iter().collect();
        assert_eq!(Ok(&1), table.lookup("caps", Asset::Sui));
        assert_eq!(Ok(&2), table.lookup("caps", Asset::Cetus));
        assert_eq!(
            Err(Error::MissingConfiguration {
                table: "caps",
                asset: Asset::WormholeApt
            }),
            table.lookup("caps", Asset::WormholeApt)
        );
    }

    #[test]
    fn override_with() {
        let mut table: Table<u64> = [(Asset::Sui, 1), (Asset::Cetus, 2)].into_iter().collect();
        table.override_with([(Asset::Cetus, 20), (Asset::WormholeEth, 30)].into_iter().collect());
        assert_eq!(3, table.len());
        assert_eq!(Ok(&1), table.lookup("caps", Asset::Sui));
        assert_eq!(Ok(&20), table.lookup("caps", Asset::Cetus));
        assert_eq!(Ok(&30), table.lookup("caps", Asset::WormholeEth));
    }

    #[test]
    fn deserialize() {
        let table: Table<u64> =
            serde_json::from_str(r#"{"wormhole_usdc": 5, "sui": 7}"#).unwrap();
        assert_eq!(
            vec![(&Asset::Sui, &7), (&Asset::WormholeUsdc, &5)],
            table.iter().collect::<Vec<_>>()
        );

        assert!(serde_json::from_str::<Table<u64>>(r#"{"blub": 5}"#).is_err());
    }
}
