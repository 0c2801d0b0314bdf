use std::fmt;

use serde::{Deserialize, Serialize};

/// One side of a diff call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Snapshot {
    /// The old collection.
    From,
    /// The new collection.
    To,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Snapshot::From => f.write_str("from"),
            Snapshot::To => f.write_str("to"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde_name() {
        for snapshot in [Snapshot::From, Snapshot::To] {
            let json = serde_json::to_value(snapshot).unwrap();
            assert_eq!(json, snapshot.to_string());
        }
    }
}
