//! Built-in strength exercise catalog.
//!
//! A fixed, ordered list of ten entries. The daily picker selects from
//! this list; ids are stable so persisted records stay meaningful.

use super::types::Workout;

/// Number of entries in the catalog.
pub const CATALOG_SIZE: usize = 10;

struct CatalogEntry {
    id: u32,
    name: &'static str,
    description: &'static str,
}

const ENTRIES: [CatalogEntry; CATALOG_SIZE] = [
    CatalogEntry {
        id: 1,
        name: "Bench Press",
        description: "3 sets of 8 reps",
    },
    CatalogEntry {
        id: 2,
        name: "Squats",
        description: "4 sets of 10 reps",
    },
    CatalogEntry {
        id: 3,
        name: "Deadlift",
        description: "3 sets of 5 reps",
    },
    CatalogEntry {
        id: 4,
        name: "Overhead Press",
        description: "3 sets of 8 reps",
    },
    CatalogEntry {
        id: 5,
        name: "Pull-Ups",
        description: "4 sets of 6 reps",
    },
    CatalogEntry {
        id: 6,
        name: "Lunges",
        description: "3 sets of 12 reps each leg",
    },
    CatalogEntry {
        id: 7,
        name: "Barbell Rows",
        description: "3 sets of 8 reps",
    },
    CatalogEntry {
        id: 8,
        name: "Leg Press",
        description: "4 sets of 10 reps",
    },
    CatalogEntry {
        id: 9,
        name: "Dumbbell Curls",
        description: "3 sets of 12 reps",
    },
    CatalogEntry {
        id: 10,
        name: "Tricep Dips",
        description: "3 sets of 10 reps",
    },
];

/// Get the full catalog in order.
pub fn catalog() -> Vec<Workout> {
    ENTRIES.iter().map(Workout::from).collect()
}

/// Get the catalog entry at an index.
pub(crate) fn entry(index: usize) -> Workout {
    Workout::from(&ENTRIES[index])
}

impl From<&CatalogEntry> for Workout {
    fn from(entry: &CatalogEntry) -> Self {
        Workout {
            id: entry.id,
            name: entry.name.to_string(),
            description: entry.description.to_string(),
        }
    }
}
