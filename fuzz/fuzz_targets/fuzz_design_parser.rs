#![no_main]

use floorplan_editor::app::render_scene::build_3d;
use floorplan_editor::persistence::parse_design_bytes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Beliebige Bytes dürfen nur Fehler liefern, nie panicen
    if let Ok(scene) = parse_design_bytes(data) {
        let _ = build_3d(&scene);
    }
});
