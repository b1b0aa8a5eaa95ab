//! Island fuel depots: hand out fuel, take deliveries, produce each tick.

use hecs::{Entity, World};
use tracing::{debug, info};

use armada_core::components::{FuelDepot, Name};

/// Give up to `request` tons. Returns what was actually handed over.
pub fn provide_fuel(world: &mut World, island: Entity, request: f64) -> f64 {
    let Ok((name, depot)) = world.query_one_mut::<(&Name, &mut FuelDepot)>(island) else {
        return 0.0;
    };
    let supplied = request.min(depot.fuel).max(0.0);
    depot.fuel -= supplied;
    info!(island = %name.0, supplied, "supplied fuel");
    supplied
}

/// Add a delivery to the stock.
pub fn accept_fuel(world: &mut World, island: Entity, amount: f64) {
    let Ok((name, depot)) = world.query_one_mut::<(&Name, &mut FuelDepot)>(island) else {
        return;
    };
    depot.fuel += amount;
    info!(island = %name.0, amount, "accepted fuel");
}

pub fn update(world: &mut World, island: Entity) {
    let Ok((name, depot)) = world.query_one_mut::<(&Name, &mut FuelDepot)>(island) else {
        return;
    };
    if depot.production_rate > 0.0 {
        depot.fuel += depot.production_rate;
        debug!(island = %name.0, fuel = depot.fuel, "produced fuel");
    }
}
