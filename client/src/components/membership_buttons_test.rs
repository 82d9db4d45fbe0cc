use super::*;

#[test]
fn labels_reflect_state() {
    assert_eq!(button_label(ToggleKind::Interest, true, false), "💖");
    assert_eq!(button_label(ToggleKind::Attendance, false, true), "➕ Teilnehmen");
    assert_eq!(button_label(ToggleKind::Attendance, true, true), "✅ Teilnahme absagen");
}

#[test]
fn titles_describe_next_action() {
    assert_eq!(button_title(ToggleKind::Interest, false), "Interesse zeigen");
    assert_eq!(button_title(ToggleKind::Attendance, true), "Teilnahme stornieren");
}
