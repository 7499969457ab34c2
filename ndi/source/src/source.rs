/*!
    The NDI media source descriptor.
*/

use serde::{Deserialize, Serialize};

use crate::format::{Bandwidth, ColorFormat, FrameFormatPreference};

/**
    A source that can be handed to a media player for connection.
*/
pub trait MediaSource {
    /**
        Returns the address the player should connect to.

        An empty string means the source cannot be resolved.
    */
    fn url(&self) -> &str;

    /**
        Returns true if the source is ready to be connected to.
    */
    fn validate(&self) -> bool;
}

/**
    The authoritative connection target of a descriptor.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceTarget<'a> {
    /// Direct network address, `host:port`.
    Endpoint(&'a str),
    /// Human-readable name, resolved through discovery.
    Name(&'a str),
}

impl<'a> SourceTarget<'a> {
    pub const fn as_str(self) -> &'a str {
        match self {
            Self::Endpoint(s) | Self::Name(s) => s,
        }
    }
}

/**
    Media source for NDI streams.

    Describes which NDI source to connect to and the stream preferences to
    request. Preference fields use `0` for "no preference".

    A descriptor is populated once by configuration code and is read-only
    from then on; share it by reference (or behind an `Arc`) with any number
    of readers.
*/
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase", deny_unknown_fields)]
pub struct NdiMediaSource {
    /// Reference level for received audio in dB.
    pub audio_reference_level: i32,
    /// Preferred audio sample rate in Hz.
    pub preferred_audio_sample_rate: u32,
    /// Preferred number of audio channels.
    pub preferred_num_audio_channels: u32,

    /// Desired bandwidth for the stream.
    pub bandwidth: Bandwidth,
    /**
        Name of the receive channel advertised on the network.

        Empty means the media player's own identity is used. A non-empty name
        should not be shared by two players at once, otherwise the receivers
        become indistinguishable on the network.
    */
    pub receiver_name: String,
    /// Address and port of the source, e.g. `1.2.3.4:5678`.
    pub source_endpoint: String,
    /// Name of the source, e.g. `MACHINE_NAME (NDI_SOURCE_NAME)`.
    pub source_name: String,

    /// Whether the stream's embedded time code drives synchronization.
    pub use_timecode: bool,

    /// Desired color format of received video frames.
    pub color_format: ColorFormat,
    /// Preferred video frame format.
    pub preferred_frame_format: FrameFormatPreference,
    /// Numerator of the preferred frame rate, e.g. `30000` in 30000/1001.
    pub preferred_frame_rate_numerator: u32,
    /// Denominator of the preferred frame rate, e.g. `1001` in 30000/1001.
    pub preferred_frame_rate_denominator: u32,
    /// Preferred video width in pixels.
    pub preferred_video_width: u32,
    /// Preferred video height in pixels.
    pub preferred_video_height: u32,
}

impl Default for NdiMediaSource {
    fn default() -> Self {
        Self {
            audio_reference_level: 5,
            preferred_audio_sample_rate: 48000,
            preferred_num_audio_channels: 2,
            bandwidth: Bandwidth::default(),
            receiver_name: String::new(),
            source_endpoint: String::new(),
            source_name: String::new(),
            use_timecode: false,
            color_format: ColorFormat::default(),
            preferred_frame_format: FrameFormatPreference::default(),
            preferred_frame_rate_numerator: 0,
            preferred_frame_rate_denominator: 0,
            preferred_video_width: 0,
            preferred_video_height: 0,
        }
    }
}

impl NdiMediaSource {
    /**
        Create a descriptor with default preferences and no target.
    */
    pub fn new() -> Self {
        Self::default()
    }

    /**
        Create a descriptor targeting a `host:port` endpoint.
    */
    pub fn endpoint(endpoint: impl Into<String>) -> Self {
        Self::new().with_source_endpoint(endpoint)
    }

    /**
        Create a descriptor targeting a named source.
    */
    pub fn named(name: impl Into<String>) -> Self {
        Self::new().with_source_name(name)
    }

    /**
        Returns the authoritative connection target.

        The endpoint wins over the name when both are set.
    */
    pub fn target(&self) -> Option<SourceTarget<'_>> {
        if !self.source_endpoint.is_empty() {
            Some(SourceTarget::Endpoint(&self.source_endpoint))
        } else if !self.source_name.is_empty() {
            Some(SourceTarget::Name(&self.source_name))
        } else {
            None
        }
    }

    /**
        Returns the receiver name, or `fallback` if none is configured.
    */
    pub fn receiver_name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.receiver_name.is_empty() {
            fallback
        } else {
            &self.receiver_name
        }
    }

    pub fn preferred_audio_sample_rate(&self) -> Option<u32> {
        non_zero(self.preferred_audio_sample_rate)
    }

    pub fn preferred_num_audio_channels(&self) -> Option<u32> {
        non_zero(self.preferred_num_audio_channels)
    }

    /**
        Returns the preferred frame rate as `(numerator, denominator)`.

        Only set when both parts are non-zero.
    */
    pub fn preferred_frame_rate(&self) -> Option<(u32, u32)> {
        let num = non_zero(self.preferred_frame_rate_numerator)?;
        let den = non_zero(self.preferred_frame_rate_denominator)?;
        Some((num, den))
    }

    /**
        Returns the preferred frame rate as fps, if set.
    */
    pub fn preferred_fps(&self) -> Option<f64> {
        self.preferred_frame_rate()
            .map(|(num, den)| num as f64 / den as f64)
    }

    /**
        Returns the preferred video size as `(width, height)`.

        Only set when both dimensions are non-zero.
    */
    pub fn preferred_video_size(&self) -> Option<(u32, u32)> {
        let width = non_zero(self.preferred_video_width)?;
        let height = non_zero(self.preferred_video_height)?;
        Some((width, height))
    }

    pub fn with_source_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.source_endpoint = endpoint.into();
        self
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    pub fn with_receiver_name(mut self, name: impl Into<String>) -> Self {
        self.receiver_name = name.into();
        self
    }

    pub fn with_bandwidth(mut self, bandwidth: Bandwidth) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    pub fn with_color_format(mut self, format: ColorFormat) -> Self {
        self.color_format = format;
        self
    }

    pub fn with_frame_format(mut self, format: FrameFormatPreference) -> Self {
        self.preferred_frame_format = format;
        self
    }

    pub fn with_timecode(mut self, use_timecode: bool) -> Self {
        self.use_timecode = use_timecode;
        self
    }

    pub fn with_audio_reference_level(mut self, level: i32) -> Self {
        self.audio_reference_level = level;
        self
    }

    /**
        Set the preferred audio sample rate and channel count (`0` = no preference).
    */
    pub fn with_audio_format(mut self, sample_rate: u32, channels: u32) -> Self {
        self.preferred_audio_sample_rate = sample_rate;
        self.preferred_num_audio_channels = channels;
        self
    }

    /**
        Set the preferred frame rate, e.g. `(30000, 1001)` for 29.97 fps.
    */
    pub fn with_frame_rate(mut self, numerator: u32, denominator: u32) -> Self {
        self.preferred_frame_rate_numerator = numerator;
        self.preferred_frame_rate_denominator = denominator;
        self
    }

    pub fn with_video_size(mut self, width: u32, height: u32) -> Self {
        self.preferred_video_width = width;
        self.preferred_video_height = height;
        self
    }
}

impl MediaSource for NdiMediaSource {
    fn url(&self) -> &str {
        self.target().map(SourceTarget::as_str).unwrap_or_default()
    }

    fn validate(&self) -> bool {
        self.target().is_some()
    }
}

const fn non_zero(value: u32) -> Option<u32> {
    if value == 0 { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preferences() {
        let source = NdiMediaSource::default();
        assert_eq!(source.bandwidth, Bandwidth::Highest);
        assert_eq!(source.color_format, ColorFormat::Uyvy);
        assert_eq!(source.preferred_frame_format, FrameFormatPreference::NoPreference);
        assert_eq!(source.preferred_audio_sample_rate, 48000);
        assert_eq!(source.preferred_num_audio_channels, 2);
        assert_eq!(source.audio_reference_level, 5);
        assert!(!source.use_timecode);
        assert_eq!(source.preferred_frame_rate_numerator, 0);
        assert_eq!(source.preferred_frame_rate_denominator, 0);
        assert_eq!(source.preferred_video_width, 0);
        assert_eq!(source.preferred_video_height, 0);
        assert!(source.receiver_name.is_empty());
    }

    #[test]
    fn endpoint_takes_precedence() {
        let source = NdiMediaSource::endpoint("10.0.0.5:5960").with_source_name("ignored");
        assert_eq!(source.url(), "10.0.0.5:5960");
        assert!(source.validate());
        assert_eq!(source.target(), Some(SourceTarget::Endpoint("10.0.0.5:5960")));
    }

    #[test]
    fn name_is_fallback() {
        let source = NdiMediaSource::named("STUDIO-PC (Camera 1)");
        assert_eq!(source.url(), "STUDIO-PC (Camera 1)");
        assert!(source.validate());
        assert_eq!(source.target(), Some(SourceTarget::Name("STUDIO-PC (Camera 1)")));
    }

    #[test]
    fn no_target_is_invalid() {
        let source = NdiMediaSource::new();
        assert_eq!(source.url(), "");
        assert!(!source.validate());
        assert_eq!(source.target(), None);
    }

    #[test]
    fn receiver_name_fallback() {
        let source = NdiMediaSource::new();
        assert_eq!(source.receiver_name_or("player-7"), "player-7");

        let source = source.with_receiver_name("Channel-1");
        assert_eq!(source.receiver_name_or("player-7"), "Channel-1");
    }

    #[test]
    fn frame_rate_requires_both_parts() {
        let source = NdiMediaSource::new().with_frame_rate(30000, 0);
        assert_eq!(source.preferred_frame_rate(), None);
        assert_eq!(source.preferred_fps(), None);

        let source = source.with_frame_rate(30000, 1001);
        assert_eq!(source.preferred_frame_rate(), Some((30000, 1001)));
        let fps = source.preferred_fps().unwrap();
        assert!((fps - 29.97).abs() < 0.01);
    }

    #[test]
    fn video_size_requires_both_dimensions() {
        let source = NdiMediaSource::new().with_video_size(1920, 0);
        assert_eq!(source.preferred_video_size(), None);

        let source = source.with_video_size(1920, 1080);
        assert_eq!(source.preferred_video_size(), Some((1920, 1080)));
    }

    #[test]
    fn zero_audio_preferences_are_unset() {
        let source = NdiMediaSource::new();
        assert_eq!(source.preferred_audio_sample_rate(), Some(48000));
        assert_eq!(source.preferred_num_audio_channels(), Some(2));

        let source = source.with_audio_format(0, 0);
        assert_eq!(source.preferred_audio_sample_rate(), None);
        assert_eq!(source.preferred_num_audio_channels(), None);
    }

    #[test]
    fn descriptor_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NdiMediaSource>();
    }
}
