use std::f32::consts::{FRAC_PI_2, TAU};

use soundial::{
    db_factor, hour_detail, hour_title, hour_to_angle, persona, popup_position, timeline,
    ClockLayout, ClockScene, Element,
};

#[test]
fn midnight_points_straight_up() {
    assert_eq!(hour_to_angle(0.0), -FRAC_PI_2);
    assert_eq!(hour_to_angle(6.0), 0.0);
    assert_eq!(hour_to_angle(12.0), FRAC_PI_2);
    assert_eq!(hour_to_angle(24.0), hour_to_angle(0.0) + TAU);
}

#[test]
fn loudness_factor_clamps_at_the_floor() {
    assert_eq!(db_factor(35.0), 0.0);
    assert_eq!(db_factor(20.0), 0.0);
    assert_eq!(db_factor(100.0), 1.0);
    assert!((db_factor(67.5) - 0.5).abs() < 1e-6);
}

#[test]
fn wedge_rim_grows_with_level_from_a_floor() {
    let layout = ClockLayout::default();
    assert_eq!(layout.wedge_outer(35.0), 104.0);
    assert!(layout.wedge_outer(60.0) < layout.wedge_outer(90.0));
    let max = layout.wedge_outer(100.0);
    assert!(max <= layout.r_outer);
    assert!((max - 214.0).abs() < 1e-3);
}

#[test]
fn scene_build_is_pure() {
    let layout = ClockLayout::default();
    let p = persona("marisol").unwrap();
    assert_eq!(
        ClockScene::build(Some(p), 9, &layout),
        ClockScene::build(Some(p), 9, &layout)
    );
}

#[test]
fn hit_test_resolves_wedges() {
    let layout = ClockLayout::default();
    let p = persona("marisol").unwrap();
    // Middle of hour 8's wedge, halfway between hub and rim.
    let angle = hour_to_angle(8.5);
    let radius = (layout.r_inner + layout.wedge_outer(p.hour(8).decibels)) / 2.0;
    assert_eq!(
        layout.hit_test(p, angle.cos() * radius, angle.sin() * radius),
        Some(8)
    );
    // The center disc and points past the dial both miss.
    assert_eq!(layout.hit_test(p, 0.0, 0.0), None);
    assert_eq!(layout.hit_test(p, 400.0, 0.0), None);
}

#[test]
fn hit_test_misses_seams_and_quiet_rims() {
    let layout = ClockLayout::default();
    let p = persona("marisol").unwrap();
    // Just inside the gap before hour 9.
    let angle = hour_to_angle(9.0) - 0.005;
    let radius = layout.r_inner + 2.0;
    assert_eq!(
        layout.hit_test(p, angle.cos() * radius, angle.sin() * radius),
        None
    );
    // Above a quiet hour's short wedge but still inside the dial.
    let angle = hour_to_angle(2.5);
    assert_eq!(layout.hit_test(p, angle.cos() * 150.0, angle.sin() * 150.0), None);
}

#[test]
fn scene_inventory_matches_the_schedule() {
    let layout = ClockLayout::default();
    let p = persona("marisol").unwrap();
    let scene = ClockScene::build(Some(p), 5, &layout);

    let count = |pred: fn(&Element) -> bool| scene.elements.iter().filter(|e| pred(e)).count();
    assert_eq!(count(|e| matches!(e, Element::Path { .. })), 24);
    assert_eq!(count(|e| matches!(e, Element::Line { .. })), 1);
    // AM/PM, eight hour labels, name, role, borough.
    assert_eq!(count(|e| matches!(e, Element::Text { .. })), 13);

    let dots: usize = p
        .schedule
        .iter()
        .filter(|e| e.data_available && e.sounds.len() > 1)
        .map(|e| e.sounds.len() - 1)
        .sum();
    // Five rings, the center disc, one dot per secondary sound.
    assert_eq!(count(|e| matches!(e, Element::Circle { .. })), 6 + dots);
}

#[test]
fn empty_dial_prompts_for_a_persona() {
    let scene = ClockScene::build(None, 0, &ClockLayout::default());
    let hint = scene.elements.iter().any(|e| match e {
        Element::Text { content, .. } => content == "SELECT A PERSONA",
        _ => false,
    });
    assert!(hint);
    assert!(!scene.elements.iter().any(|e| matches!(e, Element::Line { .. })));
}

#[test]
fn selected_wedge_glows_at_full_opacity() {
    let p = persona("devon").unwrap();
    let scene = ClockScene::build(Some(p), 1, &ClockLayout::default());
    let wedge = scene
        .elements
        .iter()
        .find_map(|e| match e {
            Element::Path {
                hour: Some(1),
                opacity,
                glow,
                ..
            } => Some((*opacity, *glow)),
            _ => None,
        })
        .unwrap();
    assert_eq!(wedge.0, 1.0);
    assert_eq!(wedge.1, p.hour(1).dominant());
}

#[test]
fn timeline_mirrors_hour_data() {
    let p = persona("marisol").unwrap();
    let cells = timeline(Some(p), Some(5));
    for (h, cell) in cells.iter().enumerate() {
        let entry = p.hour(h as u8);
        match entry.dominant() {
            Some(category) => {
                assert_eq!(cell.color, category.color());
                assert_eq!(cell.opacity, 0.7);
            }
            None => {
                assert_eq!(cell.color, "#13162a");
                assert_eq!(cell.opacity, 0.3);
            }
        }
        assert_eq!(cell.current, h == 5);
    }

    let blank = timeline(None, None);
    assert!(blank
        .iter()
        .all(|c| c.color == "#13162a" && c.opacity == 1.0 && !c.current));
}

#[test]
fn hour_titles_use_twelve_hour_time() {
    assert_eq!(hour_title(0), "12:00 AM");
    assert_eq!(hour_title(9), "9:00 AM");
    assert_eq!(hour_title(12), "12:00 PM");
    assert_eq!(hour_title(23), "11:00 PM");
}

#[test]
fn popups_clamp_to_the_viewport() {
    assert_eq!(popup_position(0.0, 0.0, 800.0, 600.0), (10.0, 10.0));
    assert_eq!(popup_position(790.0, 590.0, 800.0, 600.0), (580.0, 400.0));
    assert_eq!(popup_position(400.0, 300.0, 800.0, 600.0), (290.0, 190.0));
}

#[test]
fn hour_detail_flags_empty_hours() {
    let p = persona("marisol").unwrap();
    let detail = hour_detail(p, 8);
    assert_eq!(detail.title, "8:00 AM — Flatbush Ave roadbed");
    assert_eq!(detail.chips.len(), 2);
    assert_eq!(detail.chips[0].label, "impact");
    assert!(detail.note.is_none());

    let gap = hour_detail(p, 3);
    assert!(gap.chips.is_empty());
    assert_eq!(gap.note, Some("No sounds recorded"));

    let quiet = hour_detail(p, 2);
    assert!(quiet.chips.is_empty());
    assert_eq!(quiet.note, Some("No sounds recorded"));
}
