use std::sync::Arc;
use std::thread;

use strata::{CompressType, Error, RawKeyType, SchemaView, StoreType, TableDescriptor};
use strata_test_utils::init_tracing_for_tests;

fn users_table() -> TableDescriptor {
    let mut table = TableDescriptor::new("users", false).expect("table");
    table.set_raw_key(RawKeyType::Binary);
    table
        .add_locality_group("lg0")
        .expect("lg0")
        .set_compress(CompressType::Snappy);
    table
        .add_locality_group("cold")
        .expect("cold")
        .set_store(StoreType::Flash);
    table.add_column_family("info", "lg0").expect("info");
    table.add_column_family("meta", "lg0").expect("meta");
    table.add_column_family("archive", "cold").expect("archive");
    table.add_snapshot(42);
    table
}

#[test]
fn view_is_shared_across_threads() {
    init_tracing_for_tests();
    let view: Arc<dyn SchemaView> = Arc::new(users_table());

    let handles: Vec<_> = ["info", "meta", "archive"]
        .into_iter()
        .map(|name| {
            let view = Arc::clone(&view);
            thread::spawn(move || {
                let cf = view.column_family_by_name(name).expect("family");
                tracing::info!("reader found '{}' in '{}'", cf.name(), cf.locality_group());
                (cf.id(), cf.locality_group().to_string())
            })
        })
        .collect();

    let found: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        found,
        vec![
            (0, "lg0".to_string()),
            (1, "lg0".to_string()),
            (2, "cold".to_string()),
        ]
    );
    assert_eq!(view.table_name(), "users");
    assert_eq!(view.raw_key(), RawKeyType::Binary);
    assert_eq!(view.snapshots(), &[42]);
}

#[test]
fn reader_sees_reloaded_schema() {
    let table = users_table();
    let reloaded = TableDescriptor::decode(&table.encode()).expect("decode");
    let view: &dyn SchemaView = &reloaded;

    assert_eq!(view.locality_group_count(), 2);
    assert_eq!(view.column_family_count(), 3);
    assert!(view.has_column_family("archive"));
    assert!(!view.has_column_family("missing"));
    assert_eq!(
        view.locality_group_by_name("cold").map(|lg| lg.store()),
        Some(StoreType::Flash)
    );
}

#[test]
fn errors_surface_through_the_umbrella() {
    let mut table = users_table();
    let err = table.add_column_family("orphan", "nowhere").unwrap_err();
    assert!(matches!(err, Error::UnknownLocalityGroup(ref g) if g == "nowhere"));

    let err = table.add_locality_group("lg0").unwrap_err();
    assert_eq!(err.to_string(), "locality group 'lg0' already exists");

    assert!(!table.remove_locality_group("cold"));
    table.remove_column_family("archive");
    assert!(table.remove_locality_group("cold"));
    assert!(table.validate().is_ok());
}
