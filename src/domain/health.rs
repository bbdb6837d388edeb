//! Health advice for an AQI level.

use crate::domain::pollution::AqiLevel;
use serde::{Deserialize, Serialize};

/// Advisory strings returned for one AQI level.
///
/// Only valid for `level`; replaced wholesale when the level changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthTips {
    pub level: AqiLevel,
    pub tips: Vec<String>,
}

impl HealthTips {
    #[must_use]
    pub const fn new(level: AqiLevel, tips: Vec<String>) -> Self {
        Self { level, tips }
    }
}
