//! Proxy: the real video is only loaded on the first play.
use once_cell::unsync::OnceCell;
use patterns_core::{Category, Example, Transcript};

pub trait Video {
    fn play(&self, out: &mut Transcript);
}

pub struct RealVideo {
    url: String,
}

impl RealVideo {
    /// Loading is the expensive step the proxy defers
    pub fn load(url: &str, out: &mut Transcript) -> Self {
        out.line(format!("Loading video from {}", url));
        Self {
            url: url.to_string(),
        }
    }
}

impl Video for RealVideo {
    fn play(&self, out: &mut Transcript) {
        out.line(format!("Playing video from {}", self.url));
    }
}

pub struct VideoProxy {
    url: String,
    real: OnceCell<RealVideo>,
}

impl VideoProxy {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            real: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.real.get().is_some()
    }
}

impl Video for VideoProxy {
    fn play(&self, out: &mut Transcript) {
        let video = self.real.get_or_init(|| RealVideo::load(&self.url, out));
        video.play(out);
    }
}

pub struct ProxyExample;

impl Example for ProxyExample {
    fn name(&self) -> &str {
        "proxy"
    }

    fn summary(&self) -> &str {
        "video proxy that defers loading until the first play"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn run(&self, out: &mut Transcript) -> anyhow::Result<()> {
        let video = VideoProxy::new("https://example.com/video.mp4");

        out.line("User clicks Play button...");
        video.play(out);
        out.line("User clicks Play button again...");
        video.play(out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_once() {
        let proxy = VideoProxy::new("clip.mp4");
        assert!(!proxy.is_loaded());

        let mut out = Transcript::new();
        proxy.play(&mut out);
        proxy.play(&mut out);

        assert!(proxy.is_loaded());
        let loads = out.lines().iter().filter(|l| l.starts_with("Loading")).count();
        assert_eq!(loads, 1);
        assert_eq!(out.len(), 3);
    }
}
