//! Placeholder thumbnail generation.
//!
//! No image service is called. Each variant pairs a fixed placeholder image
//! with a descriptive prompt, which is carried on the URL as a `prompt`
//! query parameter so a downstream renderer can substitute a real image.

use serde::Serialize;
use url::Url;

pub const THUMBNAIL_RESOLUTION: &str = "1280x720";
pub const THUMBNAIL_FORMAT: &str = "PNG";

const PLACEHOLDER_BASE: &str =
    "https://storage.googleapis.com/workspace-0f70711f-8b4e-4d94-86f1-2a93ccde5887/image";

/// Image file for each of the three variants, in order.
const PLACEHOLDER_IMAGES: [&str; 3] = [
    "2ecb6f83-c0b4-4c91-b261-41204b522207.png",
    "4b4a5fc1-b5dc-4993-9bec-a7e3a84124e0.png",
    "1741ee1f-4df9-432b-a3b5-1f02ed7e0211.png",
];

/// A single thumbnail candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Thumbnail {
    pub id: String,
    pub url: String,
    pub prompt: String,
    pub style: String,
}

fn variant_prompt(index: usize, video_title: &str, style: &str) -> String {
    match index {
        0 => format!(
            "Professional YouTube thumbnail for \"{video_title}\" in {style} style with bold text overlay and vibrant colors"
        ),
        1 => format!(
            "Alternative {style} thumbnail design for \"{video_title}\" with eye-catching composition and dramatic lighting"
        ),
        _ => format!(
            "Creative variant of \"{video_title}\" thumbnail optimized for high CTR with {style} aesthetic and engaging visual elements"
        ),
    }
}

fn placeholder_url(image: &str, prompt: &str) -> String {
    let base = format!("{PLACEHOLDER_BASE}/{image}");
    Url::parse_with_params(&base, &[("prompt", prompt)])
        .expect("placeholder base URL is valid")
        .into()
}

/// Build the three placeholder thumbnails for a video.
pub fn placeholder_thumbnails(video_title: &str, style: &str) -> Vec<Thumbnail> {
    PLACEHOLDER_IMAGES
        .iter()
        .enumerate()
        .map(|(index, image)| {
            let prompt = variant_prompt(index, video_title, style);
            Thumbnail {
                id: (index + 1).to_string(),
                url: placeholder_url(image, &prompt),
                prompt,
                style: style.to_string(),
            }
        })
        .collect()
}
