//! The built-in demo world.
//!
//! Four rooms: the chamber the player starts in, a hallway with a lever, a
//! study, and a vault the lever opens.

use architect_foundation::Direction;
use architect_storage::{ActionInfo, Content, RoomInfo, ThingInfo};

/// Builds the demo content.
#[must_use]
pub fn demo_content() -> Content {
    Content::new()
        .with_room(
            "initial",
            RoomInfo::new("Stone Chamber")
                .with_desc("You are in a small stone chamber.")
                .with_exam("Scratches on the wall point east.")
                .holding(["key", "statue"])
                .with_link(Direction::East, "hallway"),
        )
        .with_room(
            "hallway",
            RoomInfo::new("Hallway")
                .with_desc("A draughty hallway runs north.")
                .holding(["lever"])
                .with_link(Direction::West, "initial")
                .with_link(Direction::North, "study"),
        )
        .with_room(
            "study",
            RoomInfo::new("Study")
                .with_desc("Bookshelves line the walls of a cramped study.")
                .with_exam("Most of the books have rotted away.")
                .holding(["note", "satchel"])
                .with_link(Direction::South, "hallway"),
        )
        .with_room(
            "vault",
            RoomInfo::new("Vault")
                .with_desc("A low vault, cold and silent.")
                .holding(["gem"]),
        )
        .with_thing(
            "key",
            ThingInfo::item("key", "Brass Key")
                .with_ground("A brass key glints on the floor.")
                .with_examine("Small, brass, slightly bent."),
        )
        .with_thing(
            "statue",
            ThingInfo::prop("statue", "Statue")
                .with_ground("A weathered statue stands in the corner.")
                .with_examine("Its face has worn smooth."),
        )
        .with_thing(
            "lever",
            ThingInfo::prop("lever", "Lever")
                .with_ground("A rusty lever juts from the wall.")
                .with_examine("It looks like it could still move.")
                .with_action(
                    "pull",
                    [
                        "rom_hallway&e vault",
                        "sys_!Somewhere to the east, stone grinds against stone.",
                        "obj_lever#GRND A rusty lever, pulled all the way down.",
                    ],
                ),
        )
        .with_thing(
            "note",
            ThingInfo::item("note", "Note")
                .with_ground("A folded note lies on the desk.")
                .with_examine("Spidery handwriting covers one side.")
                .with_action("read", ["sys_!The note reads: The lever opens the way."]),
        )
        .with_thing(
            "satchel",
            ThingInfo::item("satchel", "Satchel")
                .with_ground("A leather satchel hangs from a hook.")
                .with_examine("It has room for a couple of things."),
        )
        .with_thing(
            "gem",
            ThingInfo::item("gem", "Ruby")
                .with_ground("A ruby glitters on a pedestal.")
                .with_examine("Deep red and flawless."),
        )
        .with_action("examine", ActionInfo::new(1, 1).with_template(["sys_!{0.exam}"]))
        .with_action(
            "read",
            ActionInfo::new(1, 1).with_template(["sys_!There's nothing written on the {0.name}."]),
        )
        .with_action(
            "drop",
            ActionInfo::new(1, 1).with_template([
                "ift_{0}@$>rom__+{0}}sys_!Dropped the {0.name}.<sys_!You aren't holding that.",
            ]),
        )
        .with_action("pull", ActionInfo::new(1, 1))
        .with_action(
            "stow",
            ActionInfo::new(1, 1).with_template([
                "ift_satchel@$>inv_{0}+satchel}sys_!You stow the {0.name} in the satchel.\
                 <sys_!You have nothing to stow it in.",
            ]),
        )
        .with_action("wait", ActionInfo::new(0, 0).with_template(["sys_!Time passes."]))
        .with_action(
            "knock",
            ActionInfo::new(0, 0).with_template([
                "ift__=vault>sys_!The walls here are solid.<sys_!Nobody answers.",
            ]),
        )
        .with_setup("inv_satchel#LIMIT 2")
}
