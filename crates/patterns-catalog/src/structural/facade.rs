//! Facade: one call plays a movie across three subsystems.
use patterns_core::{Category, Example, Transcript};

#[derive(Default)]
pub struct AudioPlayer;

impl AudioPlayer {
    pub fn play_audio(&self, file: &str, out: &mut Transcript) {
        out.line(format!("Playing audio: {}", file));
    }
}

#[derive(Default)]
pub struct VideoPlayer;

impl VideoPlayer {
    pub fn play_video(&self, file: &str, out: &mut Transcript) {
        out.line(format!("Playing video: {}", file));
    }
}

#[derive(Default)]
pub struct SubtitleService;

impl SubtitleService {
    pub fn load_subtitles(&self, file: &str, out: &mut Transcript) {
        out.line(format!("Loading subtitles: {}", file));
    }
}

#[derive(Default)]
pub struct MultimediaPlayer {
    audio: AudioPlayer,
    video: VideoPlayer,
    subtitles: SubtitleService,
}

impl MultimediaPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play_movie(&self, video: &str, audio: &str, subtitles: &str, out: &mut Transcript) {
        out.line("=== Starting Movie ===");
        self.video.play_video(video, out);
        self.audio.play_audio(audio, out);
        self.subtitles.load_subtitles(subtitles, out);
        out.line("=== Movie Finished ===");
    }
}

pub struct FacadeExample;

impl Example for FacadeExample {
    fn name(&self) -> &str {
        "facade"
    }

    fn summary(&self) -> &str {
        "multimedia player hiding audio, video and subtitle subsystems"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn run(&self, out: &mut Transcript) -> anyhow::Result<()> {
        MultimediaPlayer::new().play_movie("movie.mp4", "sound.mp3", "subtitles.srt", out);
        Ok(())
    }
}
