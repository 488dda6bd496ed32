use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use layered_corpus::{ArtifactSet, CorpusIndex, CorpusStore, FsCorpusStore, Layout};
use serde_json::json;
use tempfile::TempDir;

use crate::{
    pos_frequencies, FrequencyAggregator, FrequencyConfig, FrequencyError, Histogram,
    Visualizer, POS_FREQUENCIES_KEY,
};

#[derive(Default)]
struct RecordingVisualizer {
    calls: RefCell<Vec<(Histogram, PathBuf)>>,
}

impl Visualizer for RecordingVisualizer {
    fn render(&self, statistics: &Histogram, destination: &Path) {
        self.calls
            .borrow_mut()
            .push((statistics.clone(), destination.to_path_buf()));
    }
}

fn histogram(pairs: &[(&str, u64)]) -> Histogram {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// A corpus whose articles are already annotated with `single_tagged` texts.
fn annotated(single_tagged: &[&str]) -> (TempDir, CorpusIndex, FsCorpusStore) {
    let dir = TempDir::new().unwrap();
    let layout = Layout::default();
    let store = FsCorpusStore::new(dir.path(), layout.clone());
    for (i, tagged) in single_tagged.iter().enumerate() {
        let id = i as u32 + 1;
        fs::write(dir.path().join(format!("{}_raw.txt", id)), "raw").unwrap();
        let meta = json!({"id": id, "title": format!("Статья {}", id), "topics": ["морфология"]});
        fs::write(dir.path().join(format!("{}_meta.json", id)), meta.to_string()).unwrap();
        store
            .write_artifacts(
                id,
                &ArtifactSet {
                    cleaned: String::new(),
                    single_tagged: tagged.to_string(),
                    multiple_tagged: String::new(),
                },
            )
            .unwrap();
    }
    let index = CorpusIndex::scan(dir.path(), &layout).unwrap();
    (dir, index, store)
}

const TAGGED: &str = "мама<S,жен,од=им,ед> мыть<V,несов,пе=прош,ед,изъяв,жен> \
                      рама<S,жен,неод=вин,ед> и<CONJ> раз<S,муж,неод=род,ед>";

#[test]
fn merges_frequencies_into_metadata() {
    let (dir, index, store) = annotated(&[TAGGED]);
    let visualizer = RecordingVisualizer::default();

    FrequencyAggregator::new(&store, &visualizer, &FrequencyConfig::default())
        .unwrap()
        .run(&index)
        .unwrap();

    let written = fs::read_to_string(dir.path().join("1_meta.json")).unwrap();
    insta::assert_snapshot!(written, @r###"
    {
        "id": 1,
        "title": "Статья 1",
        "topics": [
            "морфология"
        ],
        "pos_frequencies": {
            "CONJ": 1,
            "S": 3,
            "V": 1
        }
    }
    "###);

    let calls = visualizer.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, histogram(&[("CONJ", 1), ("S", 3), ("V", 1)]));
    assert_eq!(calls[0].1, dir.path().join("1_image.png"));
}

#[test]
fn rerun_leaves_metadata_unchanged() {
    let (_dir, index, store) = annotated(&[TAGGED, "кот<NOUN> пес<NOUN> бежать<VERB>"]);
    let visualizer = RecordingVisualizer::default();
    let aggregator =
        FrequencyAggregator::new(&store, &visualizer, &FrequencyConfig::default()).unwrap();

    aggregator.run(&index).unwrap();
    let first: Vec<_> = index.ids().map(|id| store.read_metadata(id).unwrap()).collect();
    aggregator.run(&index).unwrap();
    let second: Vec<_> = index.ids().map(|id| store.read_metadata(id).unwrap()).collect();

    assert_eq!(first, second);
    assert_eq!(
        pos_frequencies(&second[1]),
        Some(histogram(&[("NOUN", 2), ("VERB", 1)]))
    );
    assert_eq!(second[1].len(), 4);
    assert_eq!(second[1]["title"], json!("Статья 2"));
}

#[test]
fn case_histogram_is_rendered_separately() {
    let (dir, index, store) = annotated(&[TAGGED, "и<CONJ>"]);
    let visualizer = RecordingVisualizer::default();

    FrequencyAggregator::new(&store, &visualizer, &FrequencyConfig::with_cases())
        .unwrap()
        .run(&index)
        .unwrap();

    let calls = visualizer.calls.borrow();
    let destinations: Vec<_> = calls.iter().map(|(_, path)| path.clone()).collect();
    // article 2 has no noun runs, so no case image is requested for it
    assert_eq!(
        destinations,
        vec![
            dir.path().join("1_image.png"),
            dir.path().join("1_cases.png"),
            dir.path().join("2_image.png"),
        ]
    );
    assert_eq!(calls[1].0, histogram(&[("вин", 1), ("им", 1), ("род", 1)]));

    let meta = store.read_metadata(1).unwrap();
    assert!(meta.get("case_frequencies").is_none());
    assert!(meta.contains_key(POS_FREQUENCIES_KEY));
}

#[test]
fn empty_artifact_aborts_the_pass() {
    let (_dir, index, store) = annotated(&[TAGGED, "", TAGGED]);
    let visualizer = RecordingVisualizer::default();

    let result = FrequencyAggregator::new(&store, &visualizer, &FrequencyConfig::default())
        .unwrap()
        .run(&index);

    assert!(matches!(result, Err(FrequencyError::EmptyAnnotationInput { id: 2 })));
    assert!(store.read_metadata(3).unwrap().get(POS_FREQUENCIES_KEY).is_none());
    assert_eq!(visualizer.calls.borrow().len(), 1);
}

#[test]
fn binary_artifact_is_rejected() {
    let (dir, index, store) = annotated(&[TAGGED]);
    fs::write(dir.path().join("1_single_tagged.txt"), [0xff, 0xfe, 0x3c]).unwrap();
    let visualizer = RecordingVisualizer::default();

    let result = FrequencyAggregator::new(&store, &visualizer, &FrequencyConfig::default())
        .unwrap()
        .run(&index);

    assert!(matches!(
        result,
        Err(FrequencyError::IncorrectAnnotationFormat { id: 1, .. })
    ));
}

#[test]
fn missing_artifact_aborts_the_pass() {
    let (dir, index, store) = annotated(&[TAGGED]);
    fs::remove_file(dir.path().join("1_single_tagged.txt")).unwrap();
    let visualizer = RecordingVisualizer::default();

    let result = FrequencyAggregator::new(&store, &visualizer, &FrequencyConfig::default())
        .unwrap()
        .run(&index);

    assert!(matches!(result, Err(FrequencyError::ArtifactRead { id: 1, .. })));
}

#[test]
fn invalid_case_config_is_reported() {
    let (_dir, _index, store) = annotated(&[TAGGED]);
    let visualizer = RecordingVisualizer::default();
    let mut config = FrequencyConfig::with_cases();
    if let Some(cases) = config.case_histogram.as_mut() {
        cases.case_pattern = "([а-я]+".to_string();
    }

    let result = FrequencyAggregator::new(&store, &visualizer, &config);
    assert!(matches!(result, Err(FrequencyError::CasePattern(_))));
}
