use log::Level;

const IMAGE_HOST: &str = "https://picsum.photos";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose reveal tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Seeded image from the external image host. `blur` of 0 means no blur.
pub fn image_url(seed: &str, width: u32, height: u32, blur: u8) -> String {
    let base = format!("{}/seed/{}/{}/{}", IMAGE_HOST, seed, width, height);
    if blur > 0 {
        format!("{}?blur={}", base, blur)
    } else {
        base
    }
}

// Reveal tuning
pub const REVEAL_DURATION_SECONDS: f32 = 0.6;
pub const HERO_REVEAL_DURATION_SECONDS: f32 = 0.8;
pub const MOUNT_REVEAL_DELAY_MS: u32 = 30;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

/// Scroll offset after which the nav bar switches to its solid background.
pub const NAV_SCROLL_THRESHOLD: i32 = 40;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_without_blur() {
        assert_eq!(
            image_url("community", 800, 1000, 0),
            "https://picsum.photos/seed/community/800/1000"
        );
    }

    #[test]
    fn image_url_with_blur() {
        assert_eq!(
            image_url("ministry", 1920, 1080, 8),
            "https://picsum.photos/seed/ministry/1920/1080?blur=8"
        );
    }
}
