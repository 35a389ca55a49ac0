//! Writes page data for every route.
//!
//! Layout under the output directory:
//!
//! - `shows/<ids joined by ->.json` - one `ShowDetail` per show
//! - `wrestlers/<id>.json` - one `WrestlerPage` per wrestler
//! - `routes.json` - every page path, shows first

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;
use show_records::RecordStore;
use tablematch_core::{PageResolver, PathEnumerator};
use tracing::{debug, info};

use crate::error::CliError;

/// Counts of pages written by one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub shows: usize,
    pub wrestlers: usize,
}

/// Enumerate every route, then write each page's data.
///
/// Enumeration completes before any page is written. Pages are independent
/// and are written in parallel.
pub fn write_pages(store: &RecordStore, out_dir: &Path) -> Result<BuildSummary, CliError> {
    let enumerator = PathEnumerator::new(store);
    let show_routes = enumerator.distinct_show_routes();
    let wrestler_ids = enumerator.distinct_wrestler_ids();
    let resolver = PageResolver::new(store);

    let shows_dir = out_dir.join("shows");
    let wrestlers_dir = out_dir.join("wrestlers");
    create_dir(&shows_dir)?;
    create_dir(&wrestlers_dir)?;

    show_routes.par_iter().try_for_each(|route| {
        match resolver.show_detail(route) {
            Some(detail) => write_json(
                &shows_dir.join(format!("{}.json", detail.show.file_stem())),
                &detail,
            ),
            None => Ok(()),
        }
    })?;

    wrestler_ids.par_iter().try_for_each(|id| {
        let page = resolver.wrestler_page(*id);
        write_json(&wrestlers_dir.join(format!("{id}.json")), &page)
    })?;

    let paths: Vec<String> = enumerator.all_routes().iter().map(|r| r.path()).collect();
    write_json(&out_dir.join("routes.json"), &paths)?;

    let summary = BuildSummary {
        shows: show_routes.len(),
        wrestlers: wrestler_ids.len(),
    };
    info!(
        shows = summary.shows,
        wrestlers = summary.wrestlers,
        out = %out_dir.display(),
        "build finished"
    );
    Ok(summary)
}

fn create_dir(path: &Path) -> Result<(), CliError> {
    fs::create_dir_all(path).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CliError> {
    debug!(path = %path.display(), "writing page data");
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn corpus() -> RecordStore {
        let doc = json!([
            {
                "ids": ["S1"],
                "name": "Show One",
                "promotion": {"id": 1, "name": "P1"},
                "arena": "A",
                "date": "2020-01-01",
                "matches": [{
                    "type": "Singles", "result": "r1", "won": null, "cagematch": null,
                    "wrestlers": [{"id": 7, "text": "Rey"}], "teams": [], "appearances": []
                }]
            },
            {
                "ids": ["S2", "S3"],
                "name": "Show Two",
                "promotion": {"id": 2, "name": "P2"},
                "arena": "B",
                "date": "2020-02-01",
                "matches": [
                    {
                        "type": "Singles", "result": "r2", "won": 3.5, "cagematch": null,
                        "wrestlers": [{"id": 7, "text": "Rey Jr"}], "teams": [], "appearances": []
                    },
                    {
                        "type": "Singles", "result": "r3", "won": null, "cagematch": 7.2,
                        "wrestlers": [{"id": 9, "text": "Other"}], "teams": [], "appearances": []
                    }
                ]
            },
            {
                "ids": ["S4"],
                "name": "Excluded",
                "promotion": {"id": 3, "name": "P3"},
                "arena": "C",
                "date": "2020-03-01",
                "matches": [{
                    "type": "Singles", "result": "r4", "won": null, "cagematch": null,
                    "wrestlers": [{"id": 11, "text": "Ghost"}], "teams": [], "appearances": []
                }],
                "exclude": true
            }
        ]);
        RecordStore::from_json_str(&doc.to_string()).unwrap()
    }

    fn read(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_write_pages() {
        let store = corpus();
        let out = tempfile::tempdir().unwrap();

        let summary = write_pages(&store, out.path()).unwrap();
        assert_eq!(summary, BuildSummary { shows: 2, wrestlers: 2 });

        let show = read(&out.path().join("shows/S2-S3.json"));
        assert_eq!(show["ids"], json!(["S2", "S3"]));
        assert_eq!(show["matches"].as_array().unwrap().len(), 2);

        let rey = read(&out.path().join("wrestlers/7.json"));
        assert_eq!(rey["profile"]["names"], json!(["Rey", "Rey Jr"]));
        assert_eq!(rey["profile"]["match_count"], 2);
        assert_eq!(rey["profile"]["promotion_count"], 2);
        assert_eq!(rey["name_counts"][0], json!({"text": "Rey", "count": 1, "first_seen": 0}));
        assert_eq!(rey["history"][1]["matches"].as_array().unwrap().len(), 1);

        assert!(!out.path().join("shows/S4.json").exists());
        assert!(!out.path().join("wrestlers/11.json").exists());

        let routes = read(&out.path().join("routes.json"));
        assert_eq!(
            routes,
            json!(["/shows/[S1]", "/shows/[S2,S3]", "/wrestlers/7", "/wrestlers/9"])
        );
    }

    fn show_record(ids: Value, name: &str) -> Value {
        json!({
            "ids": ids,
            "name": name,
            "promotion": {"id": 1, "name": "P"},
            "arena": "A",
            "date": "2020-01-01",
            "matches": []
        })
    }

    #[test]
    fn test_every_show_gets_its_own_file() {
        let doc = json!([
            show_record(json!(["a-b"]), "Dashed"),
            show_record(json!(["a", "b"]), "Taping"),
            show_record(json!(["a"]), "First"),
            show_record(json!(["b"]), "Second"),
        ]);
        let store = RecordStore::from_json_str(&doc.to_string()).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.diagnostics()[0].path, "ids[0]");

        let out = tempfile::tempdir().unwrap();
        let summary = write_pages(&store, out.path()).unwrap();

        let written = fs::read_dir(out.path().join("shows")).unwrap().count();
        assert_eq!(written, summary.shows);
        assert_eq!(read(&out.path().join("shows/a-b.json"))["name"], "Taping");
    }

    #[test]
    fn test_write_pages_empty_store() {
        let out = tempfile::tempdir().unwrap();
        let summary = write_pages(&RecordStore::new(), out.path()).unwrap();

        assert_eq!(summary, BuildSummary { shows: 0, wrestlers: 0 });
        assert_eq!(read(&out.path().join("routes.json")), json!([]));
    }
}
