//! Serialization of Estimate.

use crate::Estimate;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

impl Serialize for Estimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Estimate", 4)?;
        s.serialize_field("num_terms", &self.num_terms())?;
        s.serialize_field("estimate", &self.estimate())?;
        s.serialize_field("known", &self.known())?;
        s.serialize_field("abs_error", &self.abs_error())?;
        s.end()
    }
}
