//! Sketch capture and guessing engine for the sketch-guesser page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full capture pipeline: tracking raw pointer input and the running bounding
//! box of the ink, extracting a fixed-size single-channel frame from the
//! drawing surface, throttling classification requests, and folding the
//! classifier's answer back into the session. The host Leptos layer is
//! responsible only for wiring DOM events to the engine, spawning the async
//! classification work, and displaying the resulting session state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Engine`] and testable [`engine::EngineCore`] |
//! | [`input`] | Pointer tracking, bounding box growth, keyboard shortcuts |
//! | [`frame`] | Square crop, resample, and channel reduction into a [`frame::Frame`] |
//! | [`classifier`] | Classifier trait, load state, and top-1 prediction adapter |
//! | [`throttle`] | Minimum interval between classification requests |
//! | [`surface`] | Drawing surface trait and the in-memory raster surface |
//! | [`render`] | Browser `<canvas>` surface (the only `Canvas2D` user) |
//! | [`geometry`] | Points and bounding boxes |
//! | [`words`] | Target word list |
//! | [`config`] | Session configuration |
//! | [`consts`] | Shared numeric constants (padding, throttle, frame size, etc.) |

pub mod classifier;
pub mod config;
pub mod consts;
pub mod engine;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod render;
pub mod surface;
pub mod throttle;
pub mod words;
