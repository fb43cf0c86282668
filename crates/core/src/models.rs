/// Day schedules and the top-level schedule mapping
pub mod schedule;
/// Time slots, slot content, and workshops
pub mod time_slot;
