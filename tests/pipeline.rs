use sentiment_core::corpus::CorpusSource;
use sentiment_core::{load_model, run, train, Label, ModelFormat, TextPipeline, TrainConfig};
use std::fs;
use std::path::{Path, PathBuf};

const POSITIVE: [&str; 4] = ["love", "great", "happy", "awesome"];
const NEGATIVE: [&str; 4] = ["hate", "awful", "sad", "terrible"];
const TOPICS: [&str; 5] = ["today", "movie", "weather", "coffee", "friends"];

fn write_tweets(dir: &Path, name: &str, words: &[&str], emoticon: &str) -> PathBuf {
    let path = dir.join(name);
    let lines: Vec<String> = (0..80)
        .map(|i| {
            let text = format!(
                "{} {} {} http://t.co/{i} @user{i}",
                words[i % words.len()],
                TOPICS[i % TOPICS.len()],
                emoticon
            );
            serde_json::json!({ "id": i, "text": text }).to_string()
        })
        .collect();
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

fn config(dir: &Path, model: &str) -> TrainConfig {
    TrainConfig::default()
        .with_corpus(CorpusSource::positive(write_tweets(dir, "positive_tweets.json", &POSITIVE, ":)")))
        .with_corpus(CorpusSource::negative(write_tweets(dir, "negative_tweets.json", &NEGATIVE, ":(")))
        .with_seed(42)
        .with_model_path(dir.join(model))
}

#[test]
fn trains_evaluates_and_saves() {
    let dir = tempfile::tempdir().unwrap();
    let report = run(&config(dir.path(), "classifier.bin")).unwrap();

    assert_eq!(report.train_size, 128);
    assert_eq!(report.test_size, 32);
    assert_eq!(report.seed, 42);
    assert_eq!(report.positive_examples, 80);
    assert!((0.0..=1.0).contains(&report.accuracy));
    assert!(report.train_accuracy >= report.accuracy);
    assert!(report.accuracy > 0.9);
    assert_eq!(report.confusion.total(), 32);
    assert!(report.model_path.exists());
    assert_eq!(report.format, ModelFormat::Bincode);
}

#[test]
fn saved_model_classifies_like_the_trained_one() {
    let dir = tempfile::tempdir().unwrap();
    let training = train(&config(dir.path(), "classifier.json")).unwrap();
    training.save().unwrap();
    assert_eq!(training.report.format, ModelFormat::Json);

    let loaded = load_model(&training.report.model_path).unwrap();
    assert_eq!(loaded, training.model);
    let pipeline = TextPipeline::load("english", None, Default::default()).unwrap();
    for text in ["I love this coffee :)", "such an awful movie :(", "weather", ""] {
        let features = pipeline.featurize(text);
        assert_eq!(training.model.predict(&features), loaded.predict(&features), "{text}");
    }
    assert_eq!(training.model.predict(&pipeline.featurize("so happy today :)")).label, Label::Positive);
    assert_eq!(training.model.predict(&pipeline.featurize("sad and terrible :(")).label, Label::Negative);
}

#[test]
fn same_seed_same_report() {
    let dir = tempfile::tempdir().unwrap();
    let a = train(&config(dir.path(), "a.bin")).unwrap();
    let b = train(&config(dir.path(), "b.bin")).unwrap();
    assert_eq!(a.report.accuracy, b.report.accuracy);
    assert_eq!(a.report.confusion, b.report.confusion);
    assert_eq!(a.model, b.model);
}

#[test]
fn failed_save_keeps_the_evaluation() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, "").unwrap();

    let mut config = config(dir.path(), "unused.bin");
    config.model_path = blocker.join("classifier.bin");
    let training = train(&config).unwrap();
    assert!((0.0..=1.0).contains(&training.report.accuracy));
    assert!(training.save().is_err());
}
