mod coerce;
mod operation;

pub use self::{coerce::*, operation::*};
