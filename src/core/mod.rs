// src/core/mod.rs
pub mod assets;
pub mod engine;
pub mod english;
pub mod features;
pub mod lemmatizer;
pub mod normalizer;
pub mod tagger;
pub mod tokenizer;
pub mod types;
