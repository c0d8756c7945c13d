//! Room linking.

use architect_foundation::{Direction, Error, Result, RoomId};
use architect_storage::World;
use tracing::trace;

/// Links `source` to `destination` in `direction`.
///
/// Under the Euclidean policy the reverse link is set on the destination
/// using the opposite direction, and a room may not link to itself. Pairs
/// the new link replaces are broken on both sides, so every link stays
/// matched by its reverse.
///
/// # Errors
///
/// Returns a link-invariant error for a Euclidean self-link.
pub fn link(
    world: &mut World,
    source: RoomId,
    direction: Direction,
    destination: RoomId,
    euclidean: bool,
) -> Result<()> {
    if euclidean && source == destination {
        return Err(Error::link_invariant(world.room_label(source)));
    }

    if euclidean {
        unpair(world, source, direction, destination);
        unpair(world, destination, direction.opposite(), source);
    }
    world.set_link(source, direction, Some(destination));
    if euclidean {
        world.set_link(destination, direction.opposite(), Some(source));
    }
    trace!(
        source = %world.room_label(source),
        %direction,
        destination = %world.room_label(destination),
        euclidean,
        "linked rooms"
    );
    Ok(())
}

/// Clears the reverse side of the link `room` holds in `direction`, unless
/// it already leads to `keep`.
fn unpair(world: &mut World, room: RoomId, direction: Direction, keep: RoomId) {
    let Some(old) = world.room(room).link(direction) else {
        return;
    };
    if old != keep && world.room(old).link(direction.opposite()) == Some(room) {
        trace!(
            room = %world.room_label(old),
            direction = %direction.opposite(),
            "clearing stale reverse link"
        );
        world.set_link(old, direction.opposite(), None);
    }
}
