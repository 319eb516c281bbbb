use crate::encode::encode;

/// URL of the frame image for `episode` at `timestamp`, optionally with an
/// already formatted caption drawn over it.
pub fn image_url(base_url: &str, episode: &str, timestamp: i64, caption: Option<&str>) -> String {
    let url = format!("{base_url}/meme/{episode}/{timestamp}.jpg");

    match caption {
        Some(caption) => format!("{url}?lines={}", encode(caption)),
        None => url,
    }
}

/// Wrap `url` in markdown image syntax.
pub fn markdown(url: &str) -> String {
    format!("![image]({url})")
}
