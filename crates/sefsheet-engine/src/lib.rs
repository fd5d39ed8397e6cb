//! sefsheet_engine - Formula evaluation and recalculation engine.

pub mod engine;
