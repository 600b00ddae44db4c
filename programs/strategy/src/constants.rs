/// Upper bound on invest trackers attached to one tracked strategy.
pub const MAX_TRACKERS: usize = 8;
