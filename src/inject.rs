//! Injected Totals
//!
//! The host page serializes the dry/wet totals as JSON into the mount
//! element's `data-totals` attribute. This module reads that payload and
//! validates it before anything is drawn.

use serde_json::Value;

/// Fixed id of the element the host page provides for mounting.
pub const MOUNT_ID: &str = "wastewatch";

/// Dataset key holding the injected JSON (`data-totals` in markup).
pub const TOTALS_ATTR: &str = "totals";

/// Raw injected payload, before validation.
///
/// The totals deserialize as [`serde_json::Value`] so that non-numeric junk
/// survives parsing and can be echoed verbatim in the diagnostic.
#[derive(Debug, serde::Deserialize)]
pub struct RawPayload {
    #[serde(default)]
    pub total_dry: Value,
    #[serde(default)]
    pub total_wet: Value,
    /// Epoch millis of when the host rendered the page. Best effort, never
    /// fails validation.
    #[serde(default)]
    pub generated_at: Option<i64>,
}

/// Validated waste totals in kilograms.
#[derive(Clone, Debug, PartialEq)]
pub struct WasteTotals {
    pub dry: f64,
    pub wet: f64,
    pub generated_at: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum InjectError {
    #[error("mount element has no data-totals attribute")]
    MissingAttribute,

    #[error("data-totals is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("waste totals are not numbers: total_dry = {dry}, total_wet = {wet}")]
    NotNumeric { dry: Value, wet: Value },
}

impl WasteTotals {
    /// Both totals must be JSON numbers representable as finite `f64`. A
    /// missing field defaults to `null` and fails the same check.
    pub fn from_payload(payload: &RawPayload) -> Result<Self, InjectError> {
        match (as_finite(&payload.total_dry), as_finite(&payload.total_wet)) {
            (Some(dry), Some(wet)) => Ok(Self {
                dry,
                wet,
                generated_at: payload.generated_at,
            }),
            _ => Err(InjectError::NotNumeric {
                dry: payload.total_dry.clone(),
                wet: payload.total_wet.clone(),
            }),
        }
    }

    pub fn combined(&self) -> f64 {
        self.dry + self.wet
    }
}

fn as_finite(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}

/// Parse and validate an injected JSON document.
pub fn parse_totals(json: &str) -> Result<WasteTotals, InjectError> {
    let payload: RawPayload = serde_json::from_str(json)?;
    WasteTotals::from_payload(&payload)
}

/// Read the totals off the mount element's dataset.
pub fn read_injected_totals(mount: &web_sys::HtmlElement) -> Result<WasteTotals, InjectError> {
    let json = mount
        .dataset()
        .get(TOTALS_ATTR)
        .ok_or(InjectError::MissingAttribute)?;
    parse_totals(&json)
}
