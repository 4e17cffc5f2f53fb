use std::{env, fs, path::Path};

use crate::{EarClipTriangulator, MonotoneTriangulator, Triangulator, debug::{env as debug_env, svg::SvgOutputLevel}};

use super::util;
use super::polygon::polygon;

fn svg_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Cannot read output directory")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".svg"))
        .collect();
    names.sort();
    names
}

// All environment changes live in this one test, since tests share the process environment
#[test]
fn snapshots_written_to_output_path() {
    let dir = env::temp_dir().join(format!("polytri-svg-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("Cannot create output directory");

    env::remove_var("POLYTRI_SVG_OUTPUT_PATH");
    env::remove_var("POLYTRI_SVG_OUTPUT_LEVEL");
    assert_eq!(debug_env::svg::output_path(), None);
    assert_eq!(debug_env::svg::output_level(), SvgOutputLevel::None);

    env::set_var("POLYTRI_SVG_OUTPUT_LEVEL", "2");
    assert_eq!(debug_env::svg::output_level(), SvgOutputLevel::MajorSteps);
    env::set_var("POLYTRI_SVG_OUTPUT_LEVEL", "banana");
    assert_eq!(debug_env::svg::output_level(), SvgOutputLevel::None);

    env::set_var("POLYTRI_SVG_OUTPUT_PATH", &dir);
    env::set_var("POLYTRI_SVG_OUTPUT_LEVEL", "3");
    env::remove_var("POLYTRI_SVG_HIDE_LABELS");
    assert_eq!(debug_env::svg::output_path(), Some(dir.clone()));
    assert_eq!(debug_env::svg::output_level(), SvgOutputLevel::AllSteps);
    assert!(debug_env::svg::show_labels());

    let comb = polygon(&util::polygon::comb());
    EarClipTriangulator.triangulate_indexed(&comb).expect("Triangulation failed");
    MonotoneTriangulator.triangulate_indexed(&comb).expect("Triangulation failed");

    let names = svg_files(&dir);
    assert!(names.iter().any(|name| name.ends_with("_ear_clip.svg")), "No ear clipping snapshots in {:?}", names);
    assert!(names.iter().any(|name| name.ends_with("_partition.svg")), "No partition snapshots in {:?}", names);

    let complete = names.iter().any(|name| {
        let content = fs::read_to_string(dir.join(name)).unwrap_or_default();
        content.starts_with("<svg viewBox=")
            && content.contains("<circle")
            && content.contains("<text")
            && content.trim_end().ends_with("</svg>")
    });
    assert!(complete, "No complete snapshot in {:?}", names);

    env::remove_var("POLYTRI_SVG_OUTPUT_PATH");
    env::remove_var("POLYTRI_SVG_OUTPUT_LEVEL");
    // Other tests may still be writing into it while the variables were set
    let _ = fs::remove_dir_all(&dir);
}
