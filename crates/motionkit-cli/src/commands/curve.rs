use anyhow::Result;
use serde::Serialize;

use motionkit_core::{SpringCurve, SpringParameters};

#[derive(Debug, Serialize)]
struct CurveReport<'a> {
    duration: f64,
    bounce: f64,
    settle_ms: u32,
    overshoot: f64,
    samples: &'a [f64],
    descriptor: String,
}

pub fn run(duration: f64, bounce: f64, json: bool) -> Result<()> {
    let params = SpringParameters::new(duration, bounce);
    let curve = SpringCurve::from_parameters(params);

    if json {
        let report = CurveReport {
            duration: params.perceived_duration_secs,
            bounce: params.bounce,
            settle_ms: curve.duration_ms,
            overshoot: curve.overshoot(),
            samples: &curve.samples,
            descriptor: curve.to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", curve.descriptor());
    }

    Ok(())
}
