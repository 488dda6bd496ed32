use std::fs;
use std::path::Path;

use layered_corpus::{ArtifactKind, ArtifactSet, CorpusIndex, CorpusStore, FsCorpusStore, Layout};
use tempfile::TempDir;

use crate::{
    AnalysisCandidate, AnalyzerError, AnnotationError, AnnotationPipeline, Lexicon,
    SingleParseTagger,
};

fn lexicon() -> Lexicon {
    Lexicon::new()
        .with_word("мама", vec![AnalysisCandidate::new("мама", "S,жен,од=им,ед")])
        .with_word(
            "мыла",
            vec![
                AnalysisCandidate::new("мыть", "V,несов,пе=прош,ед,изъяв,жен"),
                AnalysisCandidate::new("мыло", "S,сред,неод=род,ед"),
            ],
        )
        .with_word("раму", vec![AnalysisCandidate::new("рама", "S,жен,неод=вин,ед")])
        .with_word("раза", vec![AnalysisCandidate::new("раз", "S,муж,неод=род,ед")])
        .with_word("123", vec![AnalysisCandidate::new("123", "NUM")])
        .with_word("и", vec![AnalysisCandidate::default()])
        .with_parse("мама", "NOUN")
        .with_parse("мыла", "VERB")
        .with_parse("раму", "NOUN")
        .with_parse("раза", "NOUN")
}

const RAW: &str = "Мама мыла ра-\nму.\n123 раза, и Rust!";

fn corpus(texts: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (i, text) in texts.iter().enumerate() {
        fs::write(dir.path().join(format!("{}_raw.txt", i + 1)), text).unwrap();
        fs::write(dir.path().join(format!("{}_meta.json", i + 1)), "{}").unwrap();
    }
    dir
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

#[test]
fn annotates_document_into_three_artifacts() {
    let dir = corpus(&[RAW]);
    let layout = Layout::default();
    let index = CorpusIndex::scan(dir.path(), &layout).unwrap();
    let store = FsCorpusStore::new(dir.path(), layout);
    let lexicon = lexicon();

    AnnotationPipeline::new(&store, &lexicon, &lexicon)
        .run(&index)
        .unwrap();

    insta::assert_snapshot!(read(dir.path(), "1_cleaned.txt"), @"мама мыла раму раза");
    insta::assert_snapshot!(
        read(dir.path(), "1_single_tagged.txt"),
        @"мама<S,жен,од=им,ед> мыть<V,несов,пе=прош,ед,изъяв,жен> рама<S,жен,неод=вин,ед> раз<S,муж,неод=род,ед>"
    );
    insta::assert_snapshot!(
        read(dir.path(), "1_multiple_tagged.txt"),
        @"мама<S,жен,од=им,ед>(NOUN) мыть<V,несов,пе=прош,ед,изъяв,жен>(VERB) рама<S,жен,неод=вин,ед>(NOUN) раз<S,муж,неод=род,ед>(NOUN)"
    );
}

#[test]
fn tokens_keep_text_order() {
    let dir = TempDir::new().unwrap();
    let store = FsCorpusStore::new(dir.path(), Layout::default());
    let lexicon = lexicon();
    let pipeline = AnnotationPipeline::new(&store, &lexicon, &lexicon);

    let tokens = pipeline.tokenize("раза, раму; мама... мыла").unwrap();
    let lemmas: Vec<_> = tokens.iter().map(|t| t.lemma()).collect();
    assert_eq!(lemmas, vec!["раз", "рама", "мама", "мыть"]);
    assert_eq!(tokens[0].secondary_tag(), "NOUN");
    assert_eq!(tokens[3].original(), "мыла");
}

#[test]
fn digits_are_never_admitted() {
    let dir = TempDir::new().unwrap();
    let store = FsCorpusStore::new(dir.path(), Layout::default());
    let lexicon = lexicon()
        .with_word("2024", vec![AnalysisCandidate::new("2024", "NUM")])
        .with_parse("123", "NUMB");
    let pipeline = AnnotationPipeline::new(&store, &lexicon, &lexicon);

    let tokens = pipeline.tokenize("123 2024 123мама").unwrap();
    assert!(tokens.iter().all(|t| !t.original().starts_with(char::is_numeric)));
}

#[test]
fn empty_text_produces_empty_artifacts() {
    let dir = corpus(&["...\n\n!!!"]);
    let layout = Layout::default();
    let index = CorpusIndex::scan(dir.path(), &layout).unwrap();
    let store = FsCorpusStore::new(dir.path(), layout);
    let lexicon = lexicon();

    AnnotationPipeline::new(&store, &lexicon, &lexicon)
        .run(&index)
        .unwrap();

    for kind in ArtifactKind::ALL {
        assert!(store.read_artifact(1, kind).unwrap().is_empty());
    }
}

#[test]
fn rerun_is_byte_identical() {
    let dir = corpus(&[RAW, "Мама и раму"]);
    let layout = Layout::default();
    let index = CorpusIndex::scan(dir.path(), &layout).unwrap();
    let store = FsCorpusStore::new(dir.path(), layout);
    let lexicon = lexicon();
    let pipeline = AnnotationPipeline::new(&store, &lexicon, &lexicon);

    let snapshot = |store: &FsCorpusStore| -> Vec<Vec<u8>> {
        index
            .ids()
            .flat_map(|id| ArtifactKind::ALL.into_iter().map(move |kind| (id, kind)))
            .map(|(id, kind)| store.read_artifact(id, kind).unwrap())
            .collect()
    };

    pipeline.run(&index).unwrap();
    let first = snapshot(&store);
    pipeline.run(&index).unwrap();
    assert_eq!(first, snapshot(&store));
}

/// Tagger that fails on one surface form.
struct FailingTagger<'a> {
    inner: &'a Lexicon,
    poison: &'static str,
}

impl SingleParseTagger for FailingTagger<'_> {
    fn tag(&self, surface: &str) -> Result<String, AnalyzerError> {
        if surface == self.poison {
            return Err(AnalyzerError::new("failing-tagger", "engine crashed"));
        }
        self.inner.tag(surface)
    }
}

#[test]
fn analyzer_failure_writes_no_partial_triple() {
    let dir = corpus(&["Мама мыла раму", "Мама и раза"]);
    let layout = Layout::default();
    let index = CorpusIndex::scan(dir.path(), &layout).unwrap();
    let store = FsCorpusStore::new(dir.path(), layout);
    let lexicon = lexicon();

    let stale = ArtifactSet {
        cleaned: "stale".into(),
        single_tagged: "stale<S>".into(),
        multiple_tagged: "stale<S>(NOUN)".into(),
    };
    store.write_artifacts(2, &stale).unwrap();

    let tagger = FailingTagger {
        inner: &lexicon,
        poison: "раза",
    };
    let result = AnnotationPipeline::new(&store, &lexicon, &tagger).run(&index);

    match result {
        Err(AnnotationError::Analyzer { id, source }) => {
            assert_eq!(id, 2);
            assert_eq!(source.engine, "failing-tagger");
        }
        other => panic!("expected analyzer failure, got {:?}", other),
    }

    assert_eq!(read(dir.path(), "1_cleaned.txt"), "мама мыла раму");
    for kind in ArtifactKind::ALL {
        assert_eq!(store.read_artifact(2, kind).unwrap(), stale.get(kind).as_bytes());
    }
}

#[test]
fn missing_raw_text_is_reported() {
    let dir = corpus(&["Мама"]);
    let layout = Layout::default();
    let index = CorpusIndex::scan(dir.path(), &layout).unwrap();
    fs::remove_file(dir.path().join("1_raw.txt")).unwrap();
    let store = FsCorpusStore::new(dir.path(), layout);
    let lexicon = lexicon();

    let result = AnnotationPipeline::new(&store, &lexicon, &lexicon).run(&index);
    assert!(matches!(result, Err(AnnotationError::RawText { id: 1, .. })));
}
