//! Time-of-day synchronous events.

use tidecast_core::enums::TimeOfDay;
use tidecast_core::fish::SyncEvent;

/// The event that runs during a time-of-day band.
pub fn event_for(time_of_day: TimeOfDay) -> SyncEvent {
    let (name, description, special_fish, multiplier): (&str, &str, &[&str], f64) =
        match time_of_day {
            TimeOfDay::Morning => (
                "Dawn Fishing",
                "Special fish appear during morning hours!",
                &["Glowfin", "Crystal Scale"],
                1.2,
            ),
            TimeOfDay::Noon => (
                "Midday Bounty",
                "Increased chance of rare fish!",
                &["Fire Gills", "Thunder Trout"],
                1.5,
            ),
            TimeOfDay::Afternoon => (
                "Afternoon Delight",
                "Epic fish are more common!",
                &["Dragon Fin", "Celestial Bass"],
                1.3,
            ),
            TimeOfDay::Night => (
                "Midnight Mystery",
                "Legendary fish emerge from the depths!",
                &["Shadow Serpent", "Void Eel", "Phantom Pike"],
                2.0,
            ),
        };
    SyncEvent {
        name: name.to_string(),
        description: description.to_string(),
        special_fish: special_fish.iter().map(|s| s.to_string()).collect(),
        multiplier,
        time_of_day,
    }
}

/// The event running at a local hour (0-23).
pub fn current_event(hour: u32) -> SyncEvent {
    event_for(TimeOfDay::from_hour(hour))
}
