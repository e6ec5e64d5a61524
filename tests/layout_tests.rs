use legline::prelude::*;

fn ledger_of(routes: &[(&str, &str)]) -> Ledger {
    let mut ledger = Ledger::new();
    for (origin, destination) in routes {
        ledger.append(origin, destination).unwrap();
    }
    ledger
}

#[derive(Default)]
struct Recorder {
    frames: Vec<Layout>,
}

impl Renderer for Recorder {
    type Error = ();

    fn render(&mut self, layout: &Layout) -> Result<(), Self::Error> {
        self.frames.push(layout.clone());
        Ok(())
    }
}

struct Broken;

impl Renderer for Broken {
    type Error = &'static str;

    fn render(&mut self, _: &Layout) -> Result<(), Self::Error> {
        Err("canvas unavailable")
    }
}

#[test]
fn empty_layout_uses_min_width() {
    let layout = Layout::build(&[], &layout::Config::default());
    assert_eq!(layout.width, 800.0);
    assert_eq!(layout.height, 200.0);
    assert!(layout.nodes.is_empty());
    assert!(layout.connectors.is_empty());
}

#[test]
fn width_grows_with_trips() {
    let ledger = Ledger::with_sample();
    let config = layout::Config::default();
    assert_eq!(Layout::build(ledger.trips(), &config).width, 900.0);

    let mut ledger = Ledger::new();
    for i in 0..10 {
        ledger.append(&format!("A{i}"), &format!("B{i}")).unwrap();
    }
    assert_eq!(Layout::build(ledger.trips(), &config).width, 1100.0);
}

#[test]
fn nodes_follow_levels() {
    let ledger = ledger_of(&[("BLR", "MAA"), ("MAA", "HYD"), ("DEL", "GOA"), ("BLR", "MAA")]);
    let layout = Layout::build(ledger.trips(), &layout::Config::default());

    let first = &layout.nodes[0];
    assert_eq!(first.start, Point::new(50.0, 70.0));
    assert_eq!(first.end, Point::new(130.0, 70.0));
    assert_eq!(first.remove_at, Point::new(50.0, 90.0));
    assert_eq!(first.label, "BLR - MAA");
    assert_eq!(first.kind, NodeKind::Departure);
    assert!(first.arrow);

    let second = &layout.nodes[1];
    assert_eq!(second.kind, NodeKind::Continued);
    assert!(!second.arrow);

    let last = &layout.nodes[3];
    assert_eq!(last.kind, NodeKind::Duplicate);
    assert_eq!(last.start, Point::new(350.0, 140.0));
}

#[test]
fn connectors_only_on_level_change() {
    let ledger = ledger_of(&[("BLR", "MAA"), ("DEL", "GOA"), ("BLR", "MAA"), ("MAA", "HYD")]);
    let layout = Layout::build(ledger.trips(), &layout::Config::default());

    assert_eq!(layout.connectors.len(), 2);
    let down = &layout.connectors[0];
    assert_eq!((down.from_index, down.to_index), (1, 2));
    assert_eq!(down.from, Point::new(170.0, 70.0));
    assert_eq!(down.control_a, Point::new(190.0, 70.0));
    assert_eq!(down.control_b, Point::new(210.0, 140.0));
    assert_eq!(down.to, Point::new(230.0, 140.0));

    let up = &layout.connectors[1];
    assert_eq!((up.from_index, up.to_index), (2, 3));
}

#[test]
fn node_at_finds_remove_affordance() {
    let ledger = ledger_of(&[("BLR", "MAA"), ("MAA", "HYD")]);
    let layout = Layout::build(ledger.trips(), &layout::Config::default());

    assert_eq!(layout.node_at(152.0, 91.0, 8.0), Some(1));
    assert_eq!(layout.node_at(100.0, 90.0, 8.0), None);
}

#[test]
fn renderer_receives_layout() {
    let ledger = Ledger::with_sample();
    let mut recorder = Recorder::default();
    let layout = render_ledger(&ledger, &layout::Config::default(), &mut recorder).unwrap();

    assert_eq!(recorder.frames.len(), 1);
    assert_eq!(recorder.frames[0], layout);
    assert_eq!(layout.nodes.len(), 8);
}

#[test]
fn renderer_error_is_returned() {
    let ledger = Ledger::with_sample();
    let result = render_ledger(&ledger, &layout::Config::default(), &mut Broken);
    assert_eq!(result.unwrap_err(), "canvas unavailable");
}
