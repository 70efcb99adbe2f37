use anyhow::Result;

use motionkit_core::{compute_transform, AppConfig};

pub struct TransformOptions {
    pub progress: f64,
    pub distance: Option<f64>,
    pub no_scale: bool,
    pub no_opacity: bool,
    pub json: bool,
}

pub fn run(config: &AppConfig, options: &TransformOptions) -> Result<()> {
    let mut transform_config = config.parallax.clone();
    if let Some(distance) = options.distance {
        transform_config.distance = distance;
    }
    transform_config.enable_scale &= !options.no_scale;
    transform_config.enable_opacity &= !options.no_opacity;

    let output = compute_transform(options.progress, &transform_config);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("offset:  {:.4}", output.offset);
        println!("scale:   {:.4}", output.scale);
        println!("opacity: {:.4}", output.opacity);
    }

    Ok(())
}
