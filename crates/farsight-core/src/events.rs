//! Contact events surfaced to HUD and audio consumers.

use serde::{Deserialize, Serialize};

use crate::enums::Iff;
use crate::types::BodyId;

/// Something changed in the player's contact picture this tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContactEvent {
    /// A body entered sensor range.
    Acquired { body: BodyId, iff: Iff },
    /// A body left sensor range or died.
    Lost { body: BodyId },
    /// A contact was reclassified.
    Reclassified { body: BodyId, iff: Iff },
    /// A new combat target was selected.
    TargetSelected { body: BodyId },
}
