use hecs::Entity;

use farsight_core::enums::Iff;
use farsight_core::events::ContactEvent;
use farsight_core::types::BodyId;

/// Changes to the contact list, recorded by [`Sensors`](crate::Sensors)
/// and drained by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorEvent {
    ContactAcquired { body: Entity, iff: Iff },
    ContactLost { body: Entity },
    IffChanged { body: Entity, iff: Iff },
    TargetSelected { body: Entity },
}

impl From<SensorEvent> for ContactEvent {
    fn from(event: SensorEvent) -> Self {
        match event {
            SensorEvent::ContactAcquired { body, iff } => ContactEvent::Acquired {
                body: BodyId::from(body),
                iff,
            },
            SensorEvent::ContactLost { body } => ContactEvent::Lost {
                body: BodyId::from(body),
            },
            SensorEvent::IffChanged { body, iff } => ContactEvent::Reclassified {
                body: BodyId::from(body),
                iff,
            },
            SensorEvent::TargetSelected { body } => ContactEvent::TargetSelected {
                body: BodyId::from(body),
            },
        }
    }
}
