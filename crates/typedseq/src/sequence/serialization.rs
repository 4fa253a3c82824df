use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use crate::{AllowList, TypedSeq};

/// Serialized as a list, placeholders as `null`.
impl<P> Serialize for TypedSeq<P>
where
    P: AllowList,
    P::Item: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.slots.iter())
    }
}

/// Runs the allow-list over every populated entry.
impl<'de, P> Deserialize<'de> for TypedSeq<P>
where
    P: AllowList,
    P::Item: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slots = Vec::<Option<P::Item>>::deserialize(deserializer)?;
        for value in slots.iter().flatten() {
            P::is_allowed(value).map_err(D::Error::custom)?;
        }
        Ok(Self::from_slots(slots))
    }
}
