//! Nearest target search
//!
//! `find_nearest` - чистая функция (squared distance, стабильный tie-break).
//! `TargetRegistry` - SystemParam над живыми `Player` entities: каждый вызов
//! смотрит в текущий World, despawned entities туда просто не попадают.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::components::{ArenaPosition, Player, PlayerId};

/// Кандидат с минимальной squared distance до `reference`
///
/// При равенстве выигрывает первый в порядке итерации (строгое `<`).
/// Пустой набор → `None`.
pub fn find_nearest<K>(
    reference: Vec2,
    candidates: impl IntoIterator<Item = (K, Vec2)>,
) -> Option<(K, f32)> {
    let mut nearest: Option<(K, f32)> = None;

    for (key, position) in candidates {
        let distance_sq = position.distance_squared(reference);
        let closer = match &nearest {
            Some((_, best)) => distance_sq < *best,
            None => true,
        };
        if closer {
            nearest = Some((key, distance_sq));
        }
    }

    nearest
}

/// Ближайшая цель (entity + позиция + владелец)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetHit {
    pub entity: Entity,
    pub position: Vec2,
    pub player: PlayerId,
    pub distance_sq: f32,
}

/// Registry целей (non-owning view на `Player` entities)
#[derive(SystemParam)]
pub struct TargetRegistry<'w, 's> {
    targets: Query<'w, 's, (Entity, &'static ArenaPosition, &'static Player)>,
}

impl TargetRegistry<'_, '_> {
    pub fn nearest(&self, reference: Vec2) -> Option<TargetHit> {
        let candidates = self
            .targets
            .iter()
            .map(|(entity, position, player)| ((entity, position.0, player.id), position.0));

        find_nearest(reference, candidates).map(|((entity, position, player), distance_sq)| TargetHit {
            entity,
            position,
            player,
            distance_sq,
        })
    }

    /// Все живые цели на момент вызова (для status broadcast)
    pub fn entities(&self) -> Vec<Entity> {
        self.targets.iter().map(|(entity, _, _)| entity).collect()
    }

    pub fn player_id(&self, entity: Entity) -> Option<PlayerId> {
        self.targets.get(entity).ok().map(|(_, _, player)| player.id)
    }
}
