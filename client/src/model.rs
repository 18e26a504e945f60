//! Bridge to the in-browser image classifier.
//!
//! The model runs in transformers.js. `js/classifier.js` loads the pipeline
//! once and hands back a plain async function
//! `(pixels, width, height, channels, topK) => [{label, score}]`, which
//! [`JsClassifier`] wraps behind the engine's [`Classifier`] trait.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use async_trait::async_trait;
use canvas::classifier::{Classification, Classifier, ClassifyError};
use canvas::frame::Frame;
use js_sys::{Array, Function, Promise, Uint8ClampedArray};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(module = "/js/classifier.js")]
extern "C" {
    #[wasm_bindgen(js_name = loadClassifier)]
    fn load_classifier(model: &str) -> Promise;
}

/// A loaded transformers.js image-classification pipeline.
pub struct JsClassifier {
    run: Function,
}

impl JsClassifier {
    /// Download and initialize `model`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::Load`] when the pipeline cannot be created.
    pub async fn load(model: &str) -> Result<Self, ClassifyError> {
        log::info!("model: loading {model}");
        let run = JsFuture::from(load_classifier(model))
            .await
            .map_err(|e| ClassifyError::Load(describe(&e)))?
            .dyn_into::<Function>()
            .map_err(|v| ClassifyError::Load(format!("loader returned a non-function: {}", describe(&v))))?;
        log::info!("model: {model} ready");
        Ok(Self { run })
    }
}

#[async_trait(?Send)]
impl Classifier for JsClassifier {
    async fn classify(&self, frame: &Frame, top_k: usize) -> Result<Vec<Classification>, ClassifyError> {
        let args = Array::new();
        args.push(&Uint8ClampedArray::from(frame.data()).into());
        args.push(&JsValue::from(frame.width()));
        args.push(&JsValue::from(frame.height()));
        args.push(&JsValue::from(1_u32));
        args.push(&JsValue::from(u32::try_from(top_k).unwrap_or(1)));

        let promise = self
            .run
            .apply(&JsValue::NULL, &args)
            .map_err(|e| ClassifyError::Model(describe(&e)))?
            .dyn_into::<Promise>()
            .map_err(|v| ClassifyError::Model(format!("classifier returned a non-promise: {}", describe(&v))))?;
        let output = JsFuture::from(promise)
            .await
            .map_err(|e| ClassifyError::Model(describe(&e)))?;

        let json = js_sys::JSON::stringify(&output)
            .map_err(|e| ClassifyError::Decode(describe(&e)))?
            .as_string()
            .unwrap_or_default();
        decode_output(&json)
    }
}

/// Decode the pipeline's JSON output. `null`/`undefined` output means no result.
///
/// # Errors
///
/// Returns [`ClassifyError::Decode`] when the output is not a list of `{label, score}`.
pub fn decode_output(json: &str) -> Result<Vec<Classification>, ClassifyError> {
    if json.is_empty() || json == "null" {
        return Ok(Vec::new());
    }
    serde_json::from_str(json).map_err(|e| ClassifyError::Decode(e.to_string()))
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
