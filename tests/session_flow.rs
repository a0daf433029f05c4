use soundial::{ScopeFrame, Session, SoundCategory, SoundsPanel, FALLBACK_ACCENT, WINDOW_SAMPLES};

#[test]
fn selecting_a_persona_starts_at_midnight() {
    let mut session = Session::offline();
    assert!(session.select_persona("devon"));
    assert_eq!(session.persona().map(|p| p.id), Some("devon"));
    assert_eq!(session.hour(), 0);
    // Devon's midnight entry leads with alerts.
    assert_eq!(session.engine().active_voices(), 17);
}

#[test]
fn unknown_ids_change_nothing() {
    let mut session = Session::offline();
    session.select_persona("marisol");
    session.select_hour(8);
    assert!(!session.select_persona("nobody"));
    assert_eq!(session.persona().map(|p| p.id), Some("marisol"));
    assert_eq!(session.hour(), 8);
}

#[test]
fn hours_need_a_persona() {
    let mut session = Session::offline();
    session.select_hour(7);
    assert_eq!(session.hour(), 0);
    assert!(session.hour_view().is_none());
    assert!(session.hit_test(120.0, 0.0).is_none());
}

#[test]
fn quiet_hours_let_audio_run_out() {
    let mut session = Session::offline();
    session.select_persona("marisol");
    session.select_hour(8);
    let before = session.engine().active_voices();
    assert!(before > 0);
    session.select_hour(2);
    assert_eq!(session.engine().active_voices(), before);
}

#[test]
fn data_gaps_play_the_flatline() {
    let mut session = Session::offline();
    session.select_persona("marisol");
    session.select_hour(3);
    assert_eq!(session.engine().active_voices(), 2);
    match session.hour_view().unwrap().panel {
        SoundsPanel::NoData => {}
        other => panic!("expected NoData, got {other:?}"),
    }
}

#[test]
fn hour_view_reports_the_panel_states() {
    let mut session = Session::offline();
    session.select_persona("marisol");

    session.select_hour(2);
    let quiet = session.hour_view().unwrap();
    assert_eq!(quiet.panel, SoundsPanel::Quiet);
    assert_eq!(quiet.panel.message(), Some("No sounds detected this hour."));

    session.select_hour(3);
    let gap = session.hour_view().unwrap();
    assert!(gap.panel.message().unwrap().contains("flatline"));

    session.select_hour(8);
    let busy = session.hour_view().unwrap();
    assert_eq!(busy.hour_title, "8:00 AM");
    assert_eq!(busy.decibels, 94.0);
    assert!(busy.panel.message().is_none());
    match busy.panel {
        SoundsPanel::Sounds(sounds) => {
            assert_eq!(sounds, vec![SoundCategory::Impact, SoundCategory::Machinery]);
        }
        other => panic!("expected sounds, got {other:?}"),
    }
}

#[test]
fn autoplay_walks_the_day_on_schedule() {
    let mut session = Session::offline();
    session.select_persona("sonny");
    session.select_hour(9);
    assert!(session.toggle_autoplay(100.0));
    // Autoplay restarts the day.
    assert_eq!(session.hour(), 0);
    session.poll(101.0);
    assert_eq!(session.hour(), 0);
    session.poll(103.0);
    assert_eq!(session.hour(), 1);
    session.poll(103.5);
    assert_eq!(session.hour(), 1);
    session.poll(106.1);
    assert_eq!(session.hour(), 2);
}

#[test]
fn autoplay_requires_a_persona() {
    let mut session = Session::offline();
    assert!(!session.toggle_autoplay(0.0));
    assert!(!session.autoplay_active());
}

#[test]
fn ticks_after_stop_are_dropped() {
    let mut session = Session::offline();
    session.select_persona("priya");
    session.toggle_autoplay(0.0);
    let token = session.due_tick(3.0).unwrap();
    assert!(!session.toggle_autoplay(3.0));
    session.apply_tick(token, 3.0);
    assert_eq!(session.hour(), 0);
    assert!(!session.autoplay_active());
}

#[test]
fn ticks_from_an_earlier_run_are_dropped() {
    let mut session = Session::offline();
    session.select_persona("priya");
    session.toggle_autoplay(0.0);
    let stale = session.due_tick(3.0).unwrap();
    session.toggle_autoplay(3.0);
    session.toggle_autoplay(10.0);
    session.apply_tick(stale, 13.0);
    assert_eq!(session.hour(), 0);
    let fresh = session.due_tick(13.0).unwrap();
    session.apply_tick(fresh, 13.0);
    assert_eq!(session.hour(), 1);
}

#[test]
fn switching_persona_cancels_autoplay() {
    let mut session = Session::offline();
    session.select_persona("marisol");
    session.toggle_autoplay(0.0);
    let token = session.due_tick(3.0).unwrap();
    session.select_persona("devon");
    assert!(!session.autoplay_active());
    session.apply_tick(token, 3.0);
    assert_eq!(session.hour(), 0);
}

#[test]
fn play_category_uses_the_hour_level() {
    let mut session = Session::offline();
    session.select_persona("marisol");
    session.select_hour(8);
    session.play_category(SoundCategory::Dog);
    assert_eq!(session.engine().active_voices(), 7);
}

#[test]
fn meter_tracks_the_hour_level() {
    let mut session = Session::offline();
    session.select_persona("marisol");
    session.select_hour(8);
    session.meter_mut().step();
    assert_eq!(session.meter().value(), Some(94.0));
    session.select_hour(11);
    // Eases toward the new target instead of snapping.
    let eased = session.meter_mut().step();
    assert!(eased < 94.0 && eased > 58.0);
}

#[test]
fn scope_falls_back_to_the_idle_trace() {
    let mut session = Session::new();
    let frame = session.scope_frame(0.8, 300.0, 80.0);
    assert_eq!(frame, ScopeFrame::idle(0.8, FALLBACK_ACCENT, 300.0, 80.0));
    session.select_persona("sonny");
    let tinted = session.scope_frame(0.8, 300.0, 80.0);
    assert_eq!(tinted.color, "#9775fa");
}

#[test]
fn live_scope_uses_the_tap_window() {
    let mut session = Session::offline();
    session.select_persona("devon");
    for _ in 0..200 {
        session.engine_mut().process_block();
    }
    let frame = session.scope_frame(0.0, 400.0, 100.0);
    assert_eq!(frame.points.len(), WINDOW_SAMPLES);
    assert_eq!(frame.color, "#4dabf7");
    assert!(frame.points.iter().any(|(_, y)| (*y - 50.0).abs() > 1e-3));
}
