//! Renders the reference cards and checks them against the JSON snapshots in
//! `fixtures/`. Exits non-zero if any snapshot differs.
use std::path::{Path, PathBuf};

use cardforge::{Node, demo, envelope};
use colored::Colorize;
use serde_json::Value;

struct Case {
    name: &'static str,
    build: fn() -> cardforge::Result<Node>,
}

const CASES: &[Case] = &[
    Case {
        name: "readme_card",
        build: demo::readme_card,
    },
    Case {
        name: "image_card",
        build: demo::image_card,
    },
    Case {
        name: "readme_message",
        build: || demo::readme_card().map(envelope::wrap),
    },
];

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn parse_with_path<T: serde::de::DeserializeOwned>(src: &str) -> Result<T, String> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| {
        let path = err.path().to_string();
        format!("at JSON path {path} → {}", err.into_inner())
    })
}

fn check(case: &Case) -> Result<(), String> {
    let path = fixtures_dir().join(format!("{}.json", case.name));
    let source = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;

    let node = (case.build)().map_err(|e| e.to_string())?;
    let wire = node.to_wire_json().map_err(|e| e.to_string())?;

    // Snapshot key order is the expected insertion order.
    let expected: Value = parse_with_path(&source)?;
    let expected = serde_json::to_string(&expected).map_err(|e| e.to_string())?;
    if wire != expected {
        return Err(format!("wire form differs\n  expected: {expected}\n  actual:   {wire}"));
    }

    // The snapshot must load back as a node that renders identically.
    let reloaded: Node = parse_with_path(&source)?;
    let pretty = node.to_pretty_string().map_err(|e| e.to_string())?;
    let reloaded_pretty = reloaded.to_pretty_string().map_err(|e| e.to_string())?;
    if pretty != reloaded_pretty {
        return Err("pretty form differs after reload".to_string());
    }
    Ok(())
}

fn main() {
    let mut failures = 0usize;
    for case in CASES {
        match check(case) {
            Ok(()) => eprintln!("{} {}", "✅".green(), case.name),
            Err(error) => {
                failures += 1;
                eprintln!("{} {}: {error}", "❌".red(), case.name);
            }
        }
    }
    if failures > 0 {
        eprintln!("{failures} of {} snapshot(s) failed", CASES.len());
        std::process::exit(1);
    }
}
