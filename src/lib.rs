//! # Mealscan Library
//!
//! Food photo recognition and portion estimation using ONNX classifiers.
//! A single `Pipeline::analyze` call decides whether a photo shows food,
//! ranks the most likely foods with calibrated confidences, and estimates
//! a serving weight.

pub mod backbone;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod gatekeeper;
pub mod labels;
pub mod logger;
pub mod normalize;
pub mod pipeline;
pub mod portion;
pub mod ranker;
pub mod runtime;
pub mod types;
