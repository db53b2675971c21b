use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::NonEmptyList;

/// Serializes as a plain sequence.
impl<T: Serialize> Serialize for NonEmptyList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

/// Deserializes from a sequence, rejecting it if it is empty.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for NonEmptyList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::try_from(Vec::<T>::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}
