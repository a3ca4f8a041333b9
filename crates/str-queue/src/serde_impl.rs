//! `serde` support: a queue is a sequence of strings, head first.

use std::fmt;

use serde::de::{Deserialize, Deserializer, Error as _, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::queue::StrQueue;

impl Serialize for StrQueue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for s in self.iter() {
            seq.serialize_element(s)?;
        }
        seq.end()
    }
}

struct QueueVisitor;

impl<'de> Visitor<'de> for QueueVisitor {
    type Value = StrQueue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of strings")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<StrQueue, A::Error> {
        let hint = seq.size_hint().unwrap_or(0).min(4096);
        let mut q = StrQueue::try_with_capacity(hint).map_err(A::Error::custom)?;
        while let Some(s) = seq.next_element::<std::borrow::Cow<'de, str>>()? {
            q.insert_tail(&s).map_err(A::Error::custom)?;
        }
        Ok(q)
    }
}

impl<'de> Deserialize<'de> for StrQueue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(QueueVisitor)
    }
}

