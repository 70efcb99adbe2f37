use anyhow::Result;

use motionkit_core::{compute_transform, AppConfig, ParallaxTransform};

pub struct SimulateOptions {
    pub from: f64,
    pub to: f64,
    pub frames: usize,
    pub stiffness: Option<f64>,
    pub damping: Option<f64>,
}

pub fn run(config: &AppConfig, options: &SimulateOptions) -> Result<()> {
    let mut transform_config = config.parallax.clone();
    transform_config.smoothing.enabled = true;
    if let Some(stiffness) = options.stiffness {
        transform_config.smoothing.stiffness = stiffness;
    }
    if let Some(damping) = options.damping {
        transform_config.smoothing.damping = damping;
    }

    let raw = compute_transform(options.to, &transform_config).offset;
    let mut transform = ParallaxTransform::new(transform_config.clone());
    let start = transform.evaluate(options.from).offset;

    println!(
        "Step {} -> {} (stiffness {}, damping {})\n",
        options.from,
        options.to,
        transform_config.smoothing.stiffness,
        transform_config.smoothing.damping
    );
    println!("{:>6}  {:>12}  {:>12}", "frame", "raw", "smoothed");
    println!("{:>6}  {:>12.4}  {:>12.4}", 0, start, start);

    let mut settled_at = None;
    for frame in 1..=options.frames {
        let smoothed = transform.evaluate(options.to).offset;
        println!("{:>6}  {:>12.4}  {:>12.4}", frame, raw, smoothed);
        if settled_at.is_none() && transform.is_settled() {
            settled_at = Some(frame);
        }
    }

    match settled_at {
        Some(frame) => println!("\nSettled after {} frames ({:.0}ms).", frame, frame as f64 * 1000.0 / 60.0),
        None => println!("\nStill moving after {} frames.", options.frames),
    }

    transform.dispose();
    Ok(())
}
