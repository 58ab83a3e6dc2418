//! Replay functional tests
//!
//! Drives scripted sessions through a `Site` the way the binary does and
//! checks the resulting frames. Runs headlessly with no real timers.

mod common;

use common::{TestEnvironment, assert_nav_order};
use wonythings::{Outcome, ReplayError, ReplayScript, UiCommand, replay};

fn run_script(env: &TestEnvironment, script: &str) -> Vec<wonythings::Frame> {
    let path = env.write_script("session.toml", script);
    let script = ReplayScript::load_from(&path).expect("Failed to load script");
    let mut site = env.open_site("/");
    replay::run(&mut site, &script).expect("Replay failed")
}

// === Scroll ===

#[test]
fn test_navbar_follows_scroll_direction() {
    let env = TestEnvironment::new();
    let frames = run_script(
        &env,
        r#"
[[event]]
kind = "scroll"
offset = 0

[[event]]
kind = "scroll"
offset = 50

[[event]]
kind = "scroll"
offset = 150

[[event]]
kind = "scroll"
offset = 120
"#,
    );

    let visible: Vec<bool> = frames.iter().map(|f| f.snapshot.navbar_visible).collect();
    assert_eq!(visible, [true, true, false, true]);

    let button: Vec<bool> = frames.iter().map(|f| f.snapshot.button_visible).collect();
    assert_eq!(button, [false, false, true, true]);
}

// === Drag / click ===

#[test]
fn test_click_after_drag_is_suppressed_then_allowed() {
    let env = TestEnvironment::new();
    let frames = run_script(
        &env,
        r#"
[[event]]
kind = "drag_start"
target = "nav"

[[event]]
kind = "drag_end"
target = "nav"

[[event]]
kind = "wait"
ms = 50

[[event]]
kind = "click"
target = "nav"
href = "/blog"

[[event]]
kind = "wait"
ms = 100

[[event]]
kind = "click"
target = "nav"
href = "/blog"
"#,
    );

    assert_eq!(frames[3].outcome, Outcome::Suppressed);
    assert_eq!(frames[3].snapshot.path, "/");
    assert_eq!(frames[5].outcome, Outcome::Command(UiCommand::Navigate("/blog".into())));
    assert_eq!(frames[5].snapshot.path, "/blog");
}

#[test]
fn test_drag_restart_keeps_guard_up() {
    let env = TestEnvironment::new();
    let frames = run_script(
        &env,
        r#"
[[event]]
kind = "drag_start"
target = "nav"

[[event]]
kind = "drag_end"
target = "nav"

[[event]]
kind = "wait"
ms = 60

[[event]]
kind = "drag_start"
target = "nav"

[[event]]
kind = "drag_end"
target = "nav"

[[event]]
kind = "wait"
ms = 60

[[event]]
kind = "click"
target = "nav"
href = "/projects"
"#,
    );

    // 120ms after the first release, but only 60ms after the second
    assert_eq!(frames[6].outcome, Outcome::Suppressed);
}

#[test]
fn test_nav_and_button_guards_are_independent() {
    let env = TestEnvironment::new();
    let frames = run_script(
        &env,
        r#"
[[event]]
kind = "scroll"
offset = 600

[[event]]
kind = "drag_start"
target = "nav"

[[event]]
kind = "drag_end"
target = "nav"

[[event]]
kind = "click"
target = "button"
"#,
    );

    assert_eq!(frames[3].outcome, Outcome::Command(UiCommand::ScrollToTop));
    assert_eq!(frames[3].snapshot.scroll_offset, 0);
    assert!(!frames[3].snapshot.button_visible);
}

#[test]
fn test_button_drag_release_does_not_scroll() {
    let env = TestEnvironment::new();
    let frames = run_script(
        &env,
        r#"
[[event]]
kind = "resize"
width = 1280
height = 720

[[event]]
kind = "scroll"
offset = 600

[[event]]
kind = "drag_start"
target = "button"

[[event]]
kind = "drag_end"
target = "button"

[[event]]
kind = "click"
target = "button"
"#,
    );

    assert_eq!(frames[4].outcome, Outcome::Suppressed);
    assert_eq!(frames[4].snapshot.scroll_offset, 600);
    assert!(frames[4].snapshot.button_visible);
}

// === Disclosure ===

#[test]
fn test_bubble_shows_once_per_session() {
    let env = TestEnvironment::new();
    let frames = run_script(
        &env,
        r#"
[[event]]
kind = "scroll"
offset = 0

[[event]]
kind = "scroll"
offset = 200

[[event]]
kind = "wait"
ms = 10000

[[event]]
kind = "scroll"
offset = 0

[[event]]
kind = "scroll"
offset = 300

[[event]]
kind = "navigate"
href = "/blog"

[[event]]
kind = "scroll"
offset = 300
"#,
    );

    let bubble: Vec<bool> = frames.iter().map(|f| f.snapshot.bubble_visible).collect();
    assert_eq!(bubble, [false, true, false, false, false, false, false]);
}

#[test]
fn test_bubble_dismissed_by_button_click() {
    let env = TestEnvironment::new();
    let frames = run_script(
        &env,
        r#"
[[event]]
kind = "scroll"
offset = 500

[[event]]
kind = "click"
target = "button"

[[event]]
kind = "scroll"
offset = 500
"#,
    );

    assert!(frames[0].snapshot.bubble_visible);
    assert!(!frames[2].snapshot.bubble_visible);
    assert!(frames[2].snapshot.button_visible);
}

// === Ordering ===

#[test]
fn test_reorder_persists_across_replays() {
    let env = TestEnvironment::new();
    run_script(
        &env,
        r#"
[[event]]
kind = "drag_start"
target = "nav"

[[event]]
kind = "reorder"
order = ["/blog", "/", "/about-me", "/projects", "/journey"]

[[event]]
kind = "drag_end"
target = "nav"
"#,
    );

    let site = env.open_site("/");
    assert_nav_order(&site, &["/blog", "/", "/about-me", "/projects", "/journey"]);
}

#[test]
fn test_reorder_with_unknown_href_fails() {
    let env = TestEnvironment::new();
    let path = env.write_script(
        "bad.toml",
        r#"
[[event]]
kind = "reorder"
order = ["/", "/about-me", "/projects", "/blog", "/shop"]
"#,
    );
    let script = ReplayScript::load_from(&path).unwrap();
    let mut site = env.open_site("/");

    let err = replay::run(&mut site, &script).unwrap_err();
    assert!(matches!(err, ReplayError::InvalidReorder { index: 0, .. }));
}

// === Menu / theme ===

#[test]
fn test_menu_and_theme_events() {
    let env = TestEnvironment::new();
    let frames = run_script(
        &env,
        r#"
[[event]]
kind = "toggle_menu"

[[event]]
kind = "menu_select"
href = "/about-me"

[[event]]
kind = "toggle_theme"
"#,
    );

    assert!(frames[0].snapshot.menu_open);
    assert!(!frames[1].snapshot.menu_open);
    assert_eq!(frames[1].snapshot.path, "/about-me");
    assert!(frames[2].to_string().contains("theme=dark"));
}

// === Script loading ===

#[test]
fn test_missing_script_file() {
    let env = TestEnvironment::new();
    let err = ReplayScript::load_from(&env.config_dir.join("nope.toml")).unwrap_err();
    assert!(matches!(err, ReplayError::Read { .. }));
}
