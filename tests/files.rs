#![forbid(unsafe_code)]
use outpost_roster::{
    io, load_config_from_file, model::Table, JsonStorage, Scheduler, Storage, Workbook,
};
use std::collections::BTreeMap;
use std::fs;
use tempfile::tempdir;

#[test]
fn staff_csv_parses_children_sets() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("staff.csv");
    fs::write(
        &path,
        "name,children\nAnn Lee,\"Eagles, Hawks\"\nBen Ray,\nCal Moe\n",
    )
    .unwrap();

    let staff = io::import_staff_csv(&path).unwrap();
    assert_eq!(staff.len(), 3);
    assert!(staff[0].has_child_in("Eagles"));
    assert!(staff[0].has_child_in("Hawks"));
    assert!(staff[1].children.is_empty());
    assert!(staff[2].children.is_empty());
}

#[test]
fn duplicate_staff_name_is_rejected() {
    let err = io::read_staff_csv("name\nAnn\nAnn\n".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn patrol_columns_become_member_lists() {
    let csv = "Eagles,Hawks,ASPL\nE1,H1,A1\nE2,,\nE3,H2,\n";
    let patrols = io::read_patrols_csv(csv.as_bytes()).unwrap();

    let mut expected = BTreeMap::new();
    expected.insert("Eagles".to_string(), vec!["E1".to_string(), "E2".into(), "E3".into()]);
    expected.insert("Hawks".to_string(), vec!["H1".to_string(), "H2".into()]);
    expected.insert("ASPL".to_string(), vec!["A1".to_string()]);
    assert_eq!(patrols, expected);
}

#[test]
fn config_defaults_and_validation() {
    let dir = tempdir().unwrap();
    let ok = dir.path().join("camp.json");
    fs::write(
        &ok,
        r#"{ "meals": ["Lunch"], "patrols": ["Eagles"], "eating_only": ["Ben"] }"#,
    )
    .unwrap();
    let config = load_config_from_file(&ok).unwrap();
    assert_eq!(config.duty_roles.len(), 5);
    assert_eq!(config.duty_roles[0], "Head Cook");
    assert!(config.eating_only.contains("Ben"));

    let bad = dir.path().join("bad.json");
    fs::write(&bad, r#"{ "meals": ["Lunch", "Lunch"], "patrols": ["Eagles"] }"#).unwrap();
    assert!(load_config_from_file(&bad).is_err());
}

#[test]
fn config_rejects_staff_both_excluded_and_eating_only() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("camp.json");
    fs::write(
        &path,
        r#"{ "meals": ["Lunch"], "patrols": ["Eagles"], "excluded": ["Ben"], "eating_only": ["Ben"] }"#,
    )
    .unwrap();

    let err = load_config_from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Ben cannot be both excluded and eating-only"));
}

#[test]
fn patrol_table_renders_as_csv() {
    let mut membership = BTreeMap::new();
    membership.insert(
        "Eagles".to_string(),
        vec!["S1".to_string(), "S2".into(), "S3".into()],
    );
    let fire_water = vec!["Fire".to_string(), "Water".into()];
    let meals = vec!["Breakfast".to_string(), "Lunch".into(), "Dinner".into()];
    let tables = Scheduler::seeded(0)
        .build_patrol_duty_rosters(&["Eagles".to_string()], &membership, &meals, &[], &fire_water)
        .unwrap();

    let mut buf = Vec::new();
    io::write_table_csv(&mut buf, &tables["Eagles"]).unwrap();
    let rendered = String::from_utf8(buf).unwrap();

    insta::assert_snapshot!(rendered.trim_end(), @r"
    Meal,Fire,Water
    Breakfast,S1,S2
    Lunch,S2,S3
    Dinner,S3,S1
    ");
}

#[test]
fn workbook_save_and_load_roundtrip() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("workbook.json")).unwrap();

    let mut table = Table::new("Latrine Duty", "Day", ["Patrol", "Staff"]);
    table.push_row("Mon", vec!["Eagles".to_string(), "Ann".to_string()]);
    let workbook = Workbook {
        latrine: Some(table.clone()),
        ..Workbook::default()
    };
    storage.save(&workbook).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.latrine, Some(table));
    assert!(loaded.eating.is_none());
}

#[test]
fn workbook_csv_export_writes_one_file_per_table() {
    let dir = tempdir().unwrap();
    let mut first = Table::new("Staff Duty Roster", "Meal", ["Head Cook"]);
    first.push_row("Lunch", vec!["Ann".to_string()]);
    let second = Table::new("Fire/Water Duty Roster", "Meal", ["Fire"]);
    let mut patrol_duty = BTreeMap::new();
    patrol_duty.insert("Fire/Water".to_string(), second);
    let workbook = Workbook {
        staff_duty: Some(first),
        patrol_duty,
        ..Workbook::default()
    };

    let written = io::export_workbook_csv(dir.path().join("out"), &workbook).unwrap();
    assert_eq!(written.len(), 2);
    assert!(written[1].ends_with("Fire-Water Duty Roster.csv"));
    let content = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(content, "Meal,Head Cook\nLunch,Ann\n");
}
