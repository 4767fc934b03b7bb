//! Torches on the floor next to torch walls.

use keeper_core::{Direction, ItemKind, RoomThing, SlabKind, SubtilePos, TilePos};
use keeper_map::Level;
use smallvec::SmallVec;

use crate::census;
use crate::context::SweepContext;
use crate::reconcile::reconcile_subtile;

/// Side of the wall, paired with the side of the neighbour the torch
/// hangs on.
const PAIRS: [(Direction, Direction); 4] = [
    (Direction::West, Direction::East),
    (Direction::North, Direction::South),
    (Direction::East, Direction::West),
    (Direction::South, Direction::North),
];

/// Subtiles next to the wall at `tile` that should carry a torch: the
/// neighbour is short ground other than lava and nothing lights it yet.
///
/// All directions are judged against the level as it is before any of
/// them gets its torch.
pub fn torch_targets(level: &Level, tile: TilePos) -> SmallVec<[SubtilePos; 4]> {
    PAIRS
        .iter()
        .filter_map(|&(side, facing)| {
            let neighbour = tile.step(side);
            let kind = level.slab(neighbour).kind;
            let allowed = kind.is_short() && kind != SlabKind::Lava;
            (allowed && census::find_lit_thing_radius1(level, neighbour).is_none())
                .then(|| neighbour.subtile_toward(facing))
        })
        .collect()
}

/// Light the floor around the torch wall at `tile`.
pub fn place_torches(ctx: &mut SweepContext<'_>, tile: TilePos) {
    for subtile in torch_targets(ctx.level(), tile) {
        reconcile_subtile(ctx, subtile, RoomThing::Item(ItemKind::Torch), false);
    }
}
