use chrono::{Duration, TimeZone, Utc};
use gameutil_rs::prelude::*;
use gameutil_rs::sampling::pick_from_list_with_rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_find_exist() {
    let phrase = "William loves to eat orange";
    assert!(find_exist("orange", phrase));
    assert!(!find_exist("kiwi", phrase));
}

#[test]
fn test_calc_vector_distance() {
    let d = calc_vector_distance(10.5, 50.0, 20.0, 30.0);
    let expected = (39.5f64.powi(2) + 10.0f64.powi(2)).sqrt();
    assert!((d - expected).abs() < 1e-9);
}

#[test]
fn test_calculate_fs() {
    assert_eq!(calculate_fs(500.0, 5.0, Some(1000.0)), 3500.0);
    assert_eq!(calculate_fs(500.0, 5.0, None), 2500.0);
}

#[test]
fn test_delta_time_units_agree() {
    let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let t2 = t1 + Duration::milliseconds(90_125);

    let ms = delta_time(&t1, &t2, DeltaMode::Milliseconds);
    let secs = delta_time(&t1, &t2, DeltaMode::Seconds);
    assert_eq!(ms, 90_125.0);
    assert_eq!(secs, ms / 1000.0);
    assert_eq!(delta_time(&t1, &t1, DeltaMode::Seconds), 0.0);
}

#[test]
fn test_pick_from_list_properties() {
    let items: Vec<String> = ["Banana", "Orange", "Durian", "Pineapple", "Mango"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    for n in [0usize, 1, 3, 5, 6, 50] {
        let picked = pick_from_list(n, &items);
        assert_eq!(picked.len(), n.min(items.len()));
        assert!(picked.iter().all(|p| items.contains(p)));
    }
}

#[test]
fn test_pick_from_list_is_roughly_uniform() {
    let items = [0usize, 1, 2, 3];
    let mut rng = StdRng::seed_from_u64(2024);
    let mut first_position = [0u32; 4];

    for _ in 0..4000 {
        let picked = pick_from_list_with_rng(4, &items, &mut rng);
        first_position[picked[0]] += 1;
    }

    // 1000 expected per bucket
    for count in first_position {
        assert!((800..=1200).contains(&count), "skewed counts: {first_position:?}");
    }
}

#[test]
fn test_calc_height_ratio() {
    assert_eq!(
        calc_height_ratio(640.0, 960.0, Viewport::new(1280.0, 720.0)),
        960.0
    );

    let stretched = calc_height_ratio(640.0, 960.0, Viewport::new(360.0, 800.0));
    assert!((stretched - 640.0 / (360.0 / 800.0)).abs() < 1e-9);
    assert!(stretched > 960.0);
}

#[test]
fn test_populate_stub_highscore() {
    let table = populate_stub_highscore();
    assert_eq!(table.len(), 10);
    for entry in &table {
        assert_eq!(entry, &HighscoreEntry::new("No Entry Yet", 0));
    }
}

#[test]
fn test_stub_highscore_in_store() {
    let mut util = GameUtil::new();
    let table = util.populate_stub_highscore();
    util.store_mut().set_serializable("highscores", &table).unwrap();

    let restored: Vec<HighscoreEntry> = util
        .store()
        .get_deserializable("highscores")
        .unwrap()
        .unwrap();
    assert_eq!(restored, table);
}
