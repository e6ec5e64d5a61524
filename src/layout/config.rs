#[derive(Debug, Clone)]
pub struct Config {
    pub node_spacing: f64,
    pub start_x: f64,
    pub primary_y: f64,
    pub duplicate_y: f64,
    /// Gap left between a segment's end and the next node.
    pub segment_inset: f64,
    pub min_width: f64,
    pub width_padding: f64,
    pub height: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_spacing: 100.0,
            start_x: 50.0,
            primary_y: 70.0,
            duplicate_y: 140.0,
            segment_inset: 20.0,
            min_width: 800.0,
            width_padding: 100.0,
            height: 200.0,
        }
    }
}
