//! Human readable (de)serialization, a rational is stored as its `"(N / D)"` string

use super::Rational;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rational::parse(&s).map_err(de::Error::custom)
    }
}
