use hecs::Entity;
use thiserror::Error;

/// Precondition failures of sensor operations.
///
/// A body missing from the contact list, or a target search with no match,
/// is not an error.
#[derive(Debug, Error)]
pub enum SensorsError {
    #[error("sensor owner {0:?} is not in the world")]
    OwnerMissing(Entity),
    #[error("sensor owner is missing a component: {0}")]
    Component(#[from] hecs::ComponentError),
}
