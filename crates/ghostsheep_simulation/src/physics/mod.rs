//! Physics boundary: contact события
//!
//! Коллизии считает внешний physics коллаборатор (Rapier или host-движок).
//! Ядро получает только `ContactEvent { a, b }` и само фильтрует по тегам.
//!
//! Rapier → `CollisionEvent::Started` → `ContactEvent` (bridge ниже).
//! Host без Rapier пишет `ContactEvent` напрямую.

use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;

/// Contact/overlap начался между двумя entities (порядок произвольный)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEvent {
    pub a: Entity,
    pub b: Entity,
}

impl ContactEvent {
    pub fn new(a: Entity, b: Entity) -> Self {
        Self { a, b }
    }

    /// Обе ориентации пары: handlers матчят (self, other) без учёта порядка
    pub fn pairs(&self) -> [(Entity, Entity); 2] {
        [(self.a, self.b), (self.b, self.a)]
    }
}

/// System: Rapier CollisionEvent::Started → ContactEvent
///
/// Stopped игнорируем: все триггеры ядра срабатывают на enter.
pub fn forward_rapier_collisions(
    mut collisions: EventReader<CollisionEvent>,
    mut contacts: EventWriter<ContactEvent>,
) {
    for collision in collisions.read() {
        if let CollisionEvent::Started(a, b, _) = collision {
            contacts.write(ContactEvent::new(*a, *b));
        }
    }
}
