//! Snapshot tests for the persisted preference format.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use folio::cursor::{PointerTracker, Position};
use folio::preferences::{ColorScheme, Language, Preferences};

#[test]
fn snapshot_default_preferences() {
    insta::assert_json_snapshot!(Preferences::default(), @r###"
    {
      "theme": "dark",
      "language": "en",
      "custom_cursor": true
    }
    "###);
}

#[test]
fn snapshot_custom_preferences() {
    let prefs = Preferences {
        theme: ColorScheme::Light,
        language: Language::Vi,
        custom_cursor: false,
    };
    insta::assert_json_snapshot!(prefs, @r###"
    {
      "theme": "light",
      "language": "vi",
      "custom_cursor": false
    }
    "###);
}

#[test]
fn snapshot_trail_positions() {
    let mut tracker = PointerTracker::new();
    tracker.mount();
    for i in 0..3 {
        tracker.on_pointer_move(Position::new(10.0 * i as f32, 5.0));
    }
    insta::assert_json_snapshot!(tracker.trail(), @r###"
    [
      {
        "x": 0.0,
        "y": 5.0
      },
      {
        "x": 10.0,
        "y": 5.0
      },
      {
        "x": 20.0,
        "y": 5.0
      }
    ]
    "###);
}
