use super::*;

#[test]
fn constructors_set_kind() {
    assert_eq!(Notice::success("Saved").kind, NoticeKind::Success);
    assert_eq!(Notice::error("Nope").kind, NoticeKind::Error);
}

#[test]
fn css_class_reflects_kind() {
    assert_eq!(Notice::success("ok").css_class(), "notice notice--success");
    assert_eq!(Notice::error("bad").css_class(), "notice notice--error");
}

#[test]
fn clears_the_notice_it_showed() {
    let shown = Notice::success("Profile updated");
    let mut slot = Some(shown.clone());
    clear_if_current(&mut slot, &shown);
    assert_eq!(slot, None);
}

#[test]
fn keeps_a_newer_notice() {
    let shown = Notice::success("Profile updated");
    let newer = Notice::error("Password change failed");
    let mut slot = Some(newer.clone());
    clear_if_current(&mut slot, &shown);
    assert_eq!(slot, Some(newer));
}
