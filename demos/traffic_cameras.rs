use anyhow::{Result, bail};
use datagovsg::Client;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("datagovsg=info")),
        )
        .init();

    let client = Client::new()?.with_progress(true);
    let images = client.traffic_images(&[])?;

    let Some(snapshot) = images.items.first() else {
        bail!("no traffic camera snapshot returned");
    };
    println!("{} cameras at {}", snapshot.cameras.len(), snapshot.timestamp);
    for camera in &snapshot.cameras {
        println!(
            "  {:>5} ({:.5}, {:.5}) {}x{}",
            camera.camera_id,
            camera.location.latitude,
            camera.location.longitude,
            camera.image_metadata.width,
            camera.image_metadata.height,
        );
    }

    // Save the image of the requested camera, or the first one.
    let wanted = std::env::args().nth(1);
    let camera = match wanted {
        Some(id) => snapshot.cameras.iter().find(|c| c.camera_id == id),
        None => snapshot.cameras.first(),
    };
    if let Some(camera) = camera {
        let path = client.download_camera_image(camera, Path::new("traffic-images"))?;
        println!("saved camera {} to {}", camera.camera_id, path.display());
    }
    Ok(())
}
