//! Per-operation planners for consume and move.
//!
//! A plan is opened on a snapshot of the grouped view, walks through the
//! steps the candidate set requires, and resolves its targets against live
//! store records on submit.

pub mod consume;
pub mod destination;
pub mod relocate;
pub mod selection;

pub use consume::{ConsumePlan, ConsumeStep};
pub use destination::{default_destination, destination_choices};
pub use relocate::{MovePlan, MoveScope, MoveStep};
pub use selection::WeightSelection;
