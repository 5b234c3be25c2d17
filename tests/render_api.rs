use elementary_automata::canvas::{DrawCall, Rect};
use elementary_automata::domain::{RULE_18, RULE_30, RULE_86};
use elementary_automata::{AutomatonRenderer, Neighborhood, RecordingSurface, RuleTable, Surface, all_rules, render};

#[test]
fn rule30_scenario_through_public_api() {
    let mut surface = RecordingSurface::new(5, 3);
    render(&RULE_30, 5, 3, 1, &mut surface);

    let cells: Vec<_> = surface.fills().map(|r| (r.x, r.y)).collect();
    assert_eq!(cells, vec![(2, 0), (1, 1), (2, 1), (3, 1)]);
}

#[test]
fn every_rule_is_total() {
    for (name, rule) in all_rules() {
        let entries: Vec<_> = Neighborhood::all().iter().map(|&n| (n, rule.lookup(n))).collect();
        assert!(RuleTable::from_entries(name, entries).is_ok(), "{name}");
    }
}

#[test]
fn rule86_mirrors_rule30() {
    let (w, h) = (61, 30);
    let mut left = RecordingSurface::new(w, h);
    let mut right = RecordingSurface::new(w, h);
    render(&RULE_30, w, h, 1, &mut left);
    render(&RULE_86, w, h, 1, &mut right);

    let mut mirrored: Vec<_> = right.fills().map(|r| (w - 1 - r.x, r.y)).collect();
    let mut original: Vec<_> = left.fills().map(|r| (r.x, r.y)).collect();
    mirrored.sort_unstable();
    original.sort_unstable();
    assert_eq!(mirrored, original);
}

#[test]
fn rule18_first_rows() {
    let mut surface = RecordingSurface::new(9, 4);
    render(&RULE_18, 9, 4, 1, &mut surface);

    let cells: Vec<_> = surface.fills().map(|r| (r.x, r.y)).collect();
    assert_eq!(cells, vec![(4, 0), (3, 1), (5, 1), (2, 2), (6, 2)]);
}

#[test]
fn renderer_uses_surface_size_after_resize() {
    let renderer = AutomatonRenderer::new(2);
    let mut surface = RecordingSurface::new(4, 4);
    surface.set_size(10, 6);
    renderer.render(&RULE_30, &mut surface);

    assert_eq!(surface.calls()[0], DrawCall::Clear(Rect::new(0, 0, 10, 6)));
    assert_eq!(surface.fill_count(), 4);
}
