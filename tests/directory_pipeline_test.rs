use std::fs;
use std::path::Path;
use std::sync::Arc;

use jsontok::analysis::config::{SplitterKind, TokenizerConfig, TokenizerSettings};
use jsontok::analysis::normalizer::{Normalizer, PipelineNormalizer};
use jsontok::analysis::splitter::UnicodeWordSplitter;
use jsontok::corpus::aggregate::{
    CorpusStats, field_counts, token_counts, token_counts_with_stats, tokenize_directory,
};
use jsontok::corpus::walker::{FailureKind, JsonDirectory, ParseOutcome};

use tempfile::tempdir;

fn write(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_walk_isolates_malformed_file() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.json", r#"{"identifier": "a", "title": "First"}"#);
    write(dir.path(), "nested/b.json", r#"{"identifier": "b", "title": "Second"}"#);
    write(dir.path(), "nested/deeper/c.json", r#"{"identifier": "c"}"#);
    write(dir.path(), "nested/broken.json", r#"{"identifier": "x", "title": "#);

    let outcomes: Vec<ParseOutcome> = JsonDirectory::new(dir.path()).outcomes().collect();
    assert_eq!(outcomes.len(), 4);

    let mut identifiers: Vec<&str> = outcomes
        .iter()
        .filter_map(ParseOutcome::record)
        .map(|record| record.identifier())
        .collect();
    identifiers.sort();
    assert_eq!(identifiers, vec!["a", "b", "c"]);

    let failures: Vec<&ParseOutcome> = outcomes.iter().filter(|o| o.is_failed()).collect();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].path().ends_with("nested/broken.json"));
    assert!(matches!(
        failures[0],
        ParseOutcome::Failed { kind: FailureKind::MalformedJson, .. }
    ));
}

#[test]
fn test_token_counts_example_corpus() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.json", r#"{"identifier":"a","title":"Cat Dog"}"#);
    write(dir.path(), "b.json", r#"{"identifier":"b","title":"Cat Cat"}"#);

    let config = TokenizerConfig::builder().fields(["title"]).build();
    let counts = token_counts(&JsonDirectory::new(dir.path()), &config);

    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get("title:cat"), 3);
    assert_eq!(counts.get("title:dog"), 1);
}

#[test]
fn test_field_counts_example_corpus() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.json", r#"{"identifier":"a","title":"x"}"#);
    write(dir.path(), "b.json", r#"{"identifier":"b","body":"y"}"#);

    let counts = field_counts(&JsonDirectory::new(dir.path()));
    assert_eq!(
        counts.sorted(),
        vec![
            ("body".to_string(), 1),
            ("identifier".to_string(), 2),
            ("title".to_string(), 1)
        ]
    );
}

#[test]
fn test_tokenize_directory_with_html_bodies() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "post.json",
        r#"{
            "identifier": "post-1",
            "title": "Rust &amp; JSON",
            "body": "<p>Parsing <em>is</em> fun!</p><script",
            "views": 12
        }"#,
    );

    let config = TokenizerConfig::builder().fields(["title", "body"]).build();
    let directory = JsonDirectory::new(dir.path());
    let records: Vec<_> = tokenize_directory("blog", &directory, &config).collect();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].classification, "blog");
    assert_eq!(records[0].identifier, "post-1");
    assert_eq!(
        records[0].tokens,
        vec!["title:rust", "title:json", "body:parsing", "body:is", "body:fun"]
    );
    for token in &records[0].tokens {
        let (field, _) = token.split_once(':').unwrap();
        assert!(!field.is_empty());
    }
}

#[test]
fn test_requested_field_missing_from_every_record() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.json", r#"{"identifier":"a","title":"Cat"}"#);

    let config = TokenizerConfig::builder().fields(["summary"]).build();
    let directory = JsonDirectory::new(dir.path());
    let records: Vec<_> = tokenize_directory("", &directory, &config).collect();

    assert_eq!(records.len(), 1);
    assert!(
        records[0]
            .tokens
            .iter()
            .all(|token| token.strip_prefix("summary:") == Some(""))
    );
}

#[test]
fn test_settings_driven_pass() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.json", r#"{"identifier":"a","title":"Über-fast, über-cool"}"#);
    write(dir.path(), "skip.txt", "not json");

    let settings = TokenizerSettings {
        fields: Some(vec!["title".to_string()]),
        strip_punctuation: false,
        splitter: SplitterKind::UnicodeWord,
        ..TokenizerSettings::default()
    };
    let config = settings.build().unwrap();

    let (counts, stats) = token_counts_with_stats(&JsonDirectory::new(dir.path()), &config);
    assert_eq!(stats, CorpusStats { parsed: 1, failed: 1 });
    assert_eq!(counts.get("title:über"), 2);
    assert_eq!(counts.get("title:fast"), 1);
    assert_eq!(counts.get("title:cool"), 1);

    let (counts, stats) = token_counts_with_stats(
        &JsonDirectory::new(dir.path()).with_extension("json"),
        &config,
    );
    assert_eq!(stats, CorpusStats { parsed: 1, failed: 0 });
    assert_eq!(counts.total(), 4);
}

#[test]
fn test_custom_strategies_from_closures() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.json", r#"{"tags":"red;green;red"}"#);

    let config = TokenizerConfig::builder()
        .normalizer(Arc::new(|s: &str| s.to_uppercase()))
        .splitter(Arc::new(|s: &str| {
            s.split(';').map(str::to_string).collect::<Vec<_>>()
        }))
        .build();

    let counts = token_counts(&JsonDirectory::new(dir.path()), &config);
    assert_eq!(counts.get("tags:RED"), 2);
    assert_eq!(counts.get("tags:GREEN"), 1);
}

#[test]
fn test_standard_normalizer_is_idempotent_on_corpus_text() {
    let normalizer = PipelineNormalizer::standard();
    let samples = [
        "<h1>Breaking:</h1> Markets rally &mdash; again!",
        "email@example.com, phone: +1 (555) 010-9999",
        "tabs\tnew\nlines\r\n",
        "ダブル・クォート「引用」",
        "",
    ];

    for sample in samples {
        let normalized = normalizer.normalize(sample);
        assert_eq!(normalizer.normalize(&normalized), normalized);
        assert!(!normalized.contains("  "));
        assert_eq!(normalized.trim(), normalized);
    }

    let splitter = UnicodeWordSplitter::new();
    let config = TokenizerConfig::builder()
        .splitter(Arc::new(splitter))
        .build();
    assert_eq!(config.splitter().name(), "unicode_word");
}
