mod config;

pub use config::*;

use serde::Serialize;
use tracing::debug;

use crate::ledger::{Ledger, Level, Trip};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// How a node should be presented, in order of precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Duplicate,
    Continued,
    Departure,
}

impl NodeKind {
    pub fn of(trip: &Trip) -> Self {
        if trip.level == Level::Duplicate {
            NodeKind::Duplicate
        } else if trip.continued {
            NodeKind::Continued
        } else {
            NodeKind::Departure
        }
    }
}

/// A trip placed on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Position of the trip in the ledger.
    pub index: usize,
    pub start: Point,
    pub end: Point,
    /// Where the remove affordance sits.
    pub remove_at: Point,
    pub label: String,
    pub kind: NodeKind,
    pub level: Level,
    /// Continued segments are drawn without an arrow head.
    pub arrow: bool,
}

/// Cubic curve joining two consecutive nodes on different levels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connector {
    pub from_index: usize,
    pub to_index: usize,
    pub from: Point,
    pub control_a: Point,
    pub control_b: Point,
    pub to: Point,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<Node>,
    pub connectors: Vec<Connector>,
}

impl Layout {
    pub fn build(trips: &[Trip], config: &Config) -> Self {
        let width = config
            .min_width
            .max(trips.len() as f64 * config.node_spacing + config.width_padding);

        let mut nodes: Vec<Node> = Vec::with_capacity(trips.len());
        let mut connectors = Vec::new();
        for (index, trip) in trips.iter().enumerate() {
            let x = config.start_x + index as f64 * config.node_spacing;
            let y = match trip.level {
                Level::Primary => config.primary_y,
                Level::Duplicate => config.duplicate_y,
            };

            if let Some(prev) = nodes.last().filter(|prev| prev.level != trip.level) {
                let inset = config.segment_inset;
                connectors.push(Connector {
                    from_index: prev.index,
                    to_index: index,
                    from: Point::new(prev.start.x + inset, prev.start.y),
                    control_a: Point::new(prev.start.x + 2.0 * inset, prev.start.y),
                    control_b: Point::new(x - 2.0 * inset, y),
                    to: Point::new(x - inset, y),
                });
            }

            nodes.push(Node {
                index,
                start: Point::new(x, y),
                end: Point::new(x + config.node_spacing - config.segment_inset, y),
                remove_at: Point::new(x, y + config.segment_inset),
                label: format!("{} - {}", trip.origin, trip.destination),
                kind: NodeKind::of(trip),
                level: trip.level,
                arrow: !trip.continued,
            });
        }
        debug!(
            "Laid out {} nodes and {} connectors over {width}px",
            nodes.len(),
            connectors.len()
        );

        Self {
            width,
            height: config.height,
            nodes,
            connectors,
        }
    }

    /// Index of the trip whose remove affordance lies within `radius` of the point.
    pub fn node_at(&self, x: f64, y: f64, radius: f64) -> Option<usize> {
        let point = Point::new(x, y);
        self.nodes
            .iter()
            .find(|node| node.remove_at.distance(&point) <= radius)
            .map(|node| node.index)
    }
}

/// Consumes a finished layout. Implementations do the actual drawing.
pub trait Renderer {
    type Error;

    fn render(&mut self, layout: &Layout) -> Result<(), Self::Error>;
}

pub fn render_ledger<R>(
    ledger: &Ledger,
    config: &Config,
    renderer: &mut R,
) -> Result<Layout, R::Error>
where
    R: Renderer,
{
    let layout = Layout::build(ledger.trips(), config);
    renderer.render(&layout)?;
    Ok(layout)
}
