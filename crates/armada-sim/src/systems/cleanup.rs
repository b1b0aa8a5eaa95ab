//! Cleanup system: retires sunk ships at the end of a tick.

use hecs::{Entity, World};
use tracing::info;

use armada_core::components::{Hull, Name};
use armada_core::enums::MovementState;
use armada_core::events::Notification;

/// Despawn every `Sunk` ship and announce its removal. Returns the names
/// removed so the caller can drop them from its registry.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    outbox: &mut Vec<Notification>,
) -> Vec<String> {
    despawn_buffer.clear();

    for (entity, hull) in world.query_mut::<&Hull>() {
        if hull.state == MovementState::Sunk {
            despawn_buffer.push(entity);
        }
    }

    let mut removed = Vec::with_capacity(despawn_buffer.len());
    for entity in despawn_buffer.drain(..) {
        if let Ok(name) = world.get::<&Name>(entity).map(|name| name.0.clone()) {
            info!(ship = %name, "removed from the simulation");
            outbox.push(Notification::Removed { name: name.clone() });
            removed.push(name);
        }
        let _ = world.despawn(entity);
    }
    removed
}
