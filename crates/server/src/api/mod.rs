mod layout;
mod trips;

pub use layout::*;
pub use trips::*;
