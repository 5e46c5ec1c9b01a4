use serde::{Deserialize, Serialize};

/// Vehicle category as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vehicle {
    Car,
    Motorcycle,
    Bus,
}

impl Vehicle {
    pub const ALL: [Self; 3] = [Self::Car, Self::Motorcycle, Self::Bus];
}
