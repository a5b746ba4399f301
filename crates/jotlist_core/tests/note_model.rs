use jotlist_core::{Filter, InputMode, NoteStore};

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let mut store = NoteStore::new();
    let id = store.add("wire check").unwrap();
    store.toggle(id).unwrap();

    let json = serde_json::to_value(store.get(id).unwrap()).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["text"], "wire check");
    assert_eq!(json["completed"], true);
    assert_eq!(json.as_object().unwrap().len(), 3);
}

#[test]
fn filter_serializes_as_lowercase_id() {
    assert_eq!(serde_json::to_value(Filter::Completed).unwrap(), "completed");
    let decoded: Filter = serde_json::from_value(serde_json::json!("active")).unwrap();
    assert_eq!(decoded, Filter::Active);
    assert_eq!(Filter::Active.to_string(), "active");
    assert_eq!(Filter::Completed.label(), "Completed");
}

#[test]
fn snapshot_carries_render_model() {
    let mut store = NoteStore::new();
    let done = store.add("done").unwrap();
    store.add("open").unwrap();
    store.toggle(done).unwrap();
    store.set_filter(Filter::Active);
    store.start_edit(done).unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.visible.len(), 1);
    assert_eq!(snapshot.visible[0].text, "open");
    assert_eq!(snapshot.mode, InputMode::Editing(done));
    assert_eq!(snapshot.draft, "done");
    assert_eq!(snapshot.counts.completed, 1);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["filter"], "active");
    assert_eq!(json["mode"]["mode"], "editing");
    assert_eq!(json["mode"]["note_id"], done.to_string());
    assert_eq!(json["counts"]["all"], 2);
}

#[test]
fn composing_mode_serializes_without_note_id() {
    let json = serde_json::to_value(InputMode::Composing).unwrap();
    assert_eq!(json, serde_json::json!({ "mode": "composing" }));
}
