//! The bundled case: Ashford Manor
//!
//! The mansion layout, the clue hidden in each room, and which suspect each
//! clue points to.
//!
//! ```text
//!                    (Entrance Hall)
//!                   /               \
//!          (Living Room)            (Kitchen)
//!           /        \              /       \
//!     (Library)    (Study)     (Pantry)   (Garden)
//!       /              \                       \
//! (Master Bedroom) (Guest Room)          (Gardener's Shed)
//! ```

use crate::data::*;
use crate::GameError;

/// Case title shown in the banner
pub const TITLE: &str = "The Ashford Manor Affair";

pub const SYNOPSIS: &str = "Lord Ashford was found dead in his armchair this morning. \
The household swears nobody came or went. Walk the manor, gather what the \
culprit left behind, and name them before the constable arrives.";

/// Which suspect each clue implicates
pub const CLUE_SUSPECTS: &[(&str, &str)] = &[
    ("Wine glass smeared with lipstick", "Lady Ashford"),
    ("Torn page from the will", "Lady Ashford"),
    ("Pearl earring under the bed", "Lady Ashford"),
    ("Forged signature on a letter", "Butler"),
    ("A single white glove", "Butler"),
    ("Missing carving knife", "Cook"),
    ("Empty vial of arsenic", "Cook"),
    ("Muddy footprints by the rose bed", "Gardener"),
    ("Bloodstained pruning shears", "Gardener"),
];

/// Build the manor
pub fn create_mansion() -> Result<Mansion, GameError> {
    let mut mansion = Mansion::new("Entrance Hall", "");
    let hall = mansion.root();

    let living_room = mansion.create_room("Living Room", "Wine glass smeared with lipstick");
    let kitchen = mansion.create_room("Kitchen", "Missing carving knife");
    mansion.link_left(hall, living_room)?;
    mansion.link_right(hall, kitchen)?;

    let library = mansion.create_room("Library", "Torn page from the will");
    let study = mansion.create_room("Study", "Forged signature on a letter");
    mansion.link_left(living_room, library)?;
    mansion.link_right(living_room, study)?;

    let pantry = mansion.create_room("Pantry", "Empty vial of arsenic");
    let garden = mansion.create_room("Garden", "Muddy footprints by the rose bed");
    mansion.link_left(kitchen, pantry)?;
    mansion.link_right(kitchen, garden)?;

    let master_bedroom = mansion.create_room("Master Bedroom", "Pearl earring under the bed");
    mansion.link_left(library, master_bedroom)?;

    let guest_room = mansion.create_room("Guest Room", "A single white glove");
    mansion.link_right(study, guest_room)?;

    let shed = mansion.create_room("Gardener's Shed", "Bloodstained pruning shears");
    mansion.link_right(garden, shed)?;

    Ok(mansion)
}

/// Build the suspect index with the given bucket count
pub fn create_suspect_index(capacity: usize) -> Result<SuspectIndex, GameError> {
    SuspectIndex::from_pairs(capacity, CLUE_SUSPECTS.iter().copied())
}
