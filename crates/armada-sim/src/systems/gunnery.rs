//! Gunnery system: target selection, firing, and return fire.
//!
//! A warship keeps firing at its target once per tick while both ships are
//! afloat and the target is strictly inside `max_range`. The attack ends on
//! its own when either side stops floating, the target is retired, or the
//! target slips out of range.

use hecs::{Entity, World};
use tracing::{info, warn};

use armada_core::components::{Name, Retaliation, Weapons};
use armada_core::enums::AttackState;
use armada_core::error::{Result, SimError};

use super::{helm, query};

pub fn attack(world: &mut World, ship: Entity, target: Entity) -> Result<()> {
    if !query::is_afloat(world, ship) {
        return Err(SimError::CannotAttack);
    }
    if ship == target {
        return Err(SimError::SelfAttack);
    }
    let target_name = query::name_of(world, target).ok_or_else(|| query::stale(target))?;

    let (name, weapons) = world
        .query_one_mut::<(&Name, &mut Weapons)>(ship)
        .map_err(|_| query::stale(ship))?;
    if weapons.state == AttackState::Attacking && weapons.target == Some(target) {
        return Err(SimError::AlreadyAttackingTarget);
    }
    weapons.target = Some(target);
    weapons.state = AttackState::Attacking;
    info!(ship = %name.0, target = %target_name, "will attack");
    Ok(())
}

pub fn stop_attack(world: &mut World, ship: Entity) -> Result<()> {
    let (name, weapons) = world
        .query_one_mut::<(&Name, &mut Weapons)>(ship)
        .map_err(|_| query::stale(ship))?;
    if weapons.state != AttackState::Attacking {
        return Err(SimError::NotAttacking);
    }
    disengage(weapons);
    info!(ship = %name.0, "stopping attack");
    Ok(())
}

fn disengage(weapons: &mut Weapons) {
    weapons.state = AttackState::NotAttacking;
    weapons.target = None;
}

/// One tick of the combat capability, after the movement core.
pub fn update(world: &mut World, ship: Entity) {
    let (state, target, firepower, max_range) = match world.get::<&Weapons>(ship) {
        Ok(weapons) => (
            weapons.state,
            weapons.target,
            weapons.firepower,
            weapons.max_range,
        ),
        Err(_) => return,
    };
    if state != AttackState::Attacking {
        return;
    }

    let target = target.filter(|&target| query::is_afloat(world, target));
    let engaged = match target {
        Some(target) if query::is_afloat(world, ship) => target,
        _ => {
            stand_down(world, ship, "target is gone");
            return;
        }
    };

    let range = match (
        query::location_of(world, ship),
        query::location_of(world, engaged),
    ) {
        (Some(from), Some(to)) => from.distance_to(&to),
        _ => f64::INFINITY,
    };
    if range < max_range {
        info!(
            ship = %query::name_of(world, ship).unwrap_or_default(),
            target = %query::name_of(world, engaged).unwrap_or_default(),
            "fire"
        );
        take_hit(world, engaged, firepower, ship);
    } else {
        stand_down(world, ship, "target is out of range");
    }
}

fn stand_down(world: &mut World, ship: Entity, reason: &str) {
    if let Ok((name, weapons)) = world.query_one_mut::<(&Name, &mut Weapons)>(ship) {
        disengage(weapons);
        info!(ship = %name.0, reason, "stopping attack");
    }
}

/// Deliver a hit. A warship with `Retaliation` that survives turns its guns
/// on the attacker unless it is already engaged.
pub fn take_hit(world: &mut World, target: Entity, firepower: i32, attacker: Entity) {
    let still_afloat = helm::receive_hit(world, target, firepower);
    if !still_afloat || world.get::<&Retaliation>(target).is_err() {
        return;
    }
    let idle = world
        .get::<&Weapons>(target)
        .map(|weapons| weapons.state == AttackState::NotAttacking)
        .unwrap_or(false);
    if idle {
        if let Err(error) = attack(world, target, attacker) {
            warn!(%error, "could not return fire");
        }
    }
}
