// Shared test fixtures. Compiled only for tests.

pub mod app;
pub mod events;
pub mod records;
pub mod students;

pub const FIXED_NOW: i64 = 1_700_000_000_000;
