pub mod layout;
pub mod ledger;
pub mod shared;

pub mod prelude {
    pub use crate::layout::{
        self, Connector, Layout, Node, NodeKind, Point, Renderer, render_ledger,
    };
    pub use crate::ledger::{self, Change, Field, Ledger, Level, Subscription, Trip};
    pub use crate::shared::Code;
}
