use crate::vehicle::Vehicle;
use serde::{Deserialize, Serialize};

/// One reporting cycle's payload for the collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub location: String,
    pub data: Vec<Vehicle>,
}
