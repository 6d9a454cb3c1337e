use super::*;

#[test]
fn starts_alive() {
    assert!(Liveness::new().is_alive());
}

#[test]
fn clones_share_the_flag() {
    let page = Liveness::new();
    let task = page.clone();
    page.kill();
    assert!(!task.is_alive());
}

#[test]
fn kill_is_idempotent() {
    let flag = Liveness::new();
    flag.kill();
    flag.kill();
    assert!(!flag.is_alive());
}
