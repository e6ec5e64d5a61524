mod trip;

pub use trip::*;
