use soundial::{persona, SoundCategory, PERSONAS};

#[test]
fn persona_ids_are_unique_and_resolvable() {
    for p in PERSONAS.iter() {
        assert_eq!(persona(p.id).map(|found| found.id), Some(p.id));
    }
    let mut ids: Vec<&str> = PERSONAS.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), PERSONAS.len());
    assert!(persona("nobody").is_none());
}

#[test]
fn available_hours_have_plausible_levels() {
    for p in PERSONAS.iter() {
        for (h, entry) in p.schedule.iter().enumerate() {
            if entry.data_available {
                assert!(
                    entry.decibels >= 35.0 && entry.decibels <= 100.0,
                    "{} hour {h}: {} dB",
                    p.id,
                    entry.decibels
                );
            } else {
                assert_eq!(entry.decibels, 0.0, "{} hour {h}", p.id);
                assert!(entry.sounds.is_empty(), "{} hour {h}", p.id);
            }
        }
    }
}

#[test]
fn every_persona_has_a_few_gaps() {
    for p in PERSONAS.iter() {
        let gaps = p.schedule.iter().filter(|e| !e.data_available).count();
        assert!((1..=3).contains(&gaps), "{}: {gaps} gaps", p.id);
    }
}

#[test]
fn dominant_is_the_first_listed_sound() {
    for p in PERSONAS.iter() {
        for entry in p.schedule.iter() {
            match entry.dominant() {
                Some(category) => {
                    assert!(entry.data_available);
                    assert_eq!(Some(category), entry.sounds.first().copied());
                }
                None => assert!(!entry.data_available || entry.sounds.is_empty()),
            }
        }
    }
}

#[test]
fn quiet_hours_are_distinct_from_gaps() {
    // An empty-but-recorded hour keeps its level; a sensor gap has nothing.
    let marisol = persona("marisol").unwrap();
    let quiet = marisol.hour(2);
    assert!(quiet.data_available);
    assert!(quiet.sounds.is_empty());
    assert_eq!(quiet.decibels, 35.0);
    let gap = marisol.hour(3);
    assert!(!gap.data_available);
}

#[test]
fn hour_lookup_wraps_past_midnight() {
    let p = persona("devon").unwrap();
    assert_eq!(p.hour(24).location, p.hour(0).location);
    assert_eq!(p.hour(27).description, p.hour(3).description);
}

#[test]
fn legend_lists_every_category_in_order() {
    let legend = SoundCategory::legend();
    assert_eq!(legend.len(), 10);
    assert_eq!(legend[0], ("engine", "#ff6b6b"));
    assert_eq!(legend[9], ("flatline", "#3a3f6a"));
    for ((label, color), category) in legend.iter().zip(SoundCategory::ALL.iter()) {
        assert_eq!(*label, category.label());
        assert_eq!(*color, category.color());
    }
}

#[test]
fn category_labels_parse_back() {
    for category in SoundCategory::ALL.iter() {
        assert_eq!(category.label().parse::<SoundCategory>(), Ok(*category));
    }
    let err = "traffic".parse::<SoundCategory>().unwrap_err();
    assert!(err.to_string().contains("traffic"));
}

#[test]
fn flatline_is_never_scheduled() {
    for p in PERSONAS.iter() {
        for entry in p.schedule.iter() {
            assert!(!entry.sounds.contains(&SoundCategory::Flatline));
        }
    }
}
