/*!
    String-keyed option lookup over a media source.

    Players and decoders read configuration through [`MediaOptions`] without
    knowing the concrete descriptor type. Lookups never fail: an unknown key,
    or a key whose value has a different type, yields the caller's default.
*/

use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;
use crate::source::{MediaSource, NdiMediaSource};

/**
    The closed set of option keys recognized by [`NdiMediaSource`].

    Key names are persisted alongside descriptors and must stay stable.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionKey {
    AudioReferenceLevel,
    Bandwidth,
    ColorFormat,
    PreferredAudioSampleRate,
    PreferredFrameFormat,
    PreferredFrameRateDenominator,
    PreferredFrameRateNumerator,
    PreferredNumAudioChannels,
    PreferredVideoHeight,
    PreferredVideoWidth,
    ReceiverName,
    SourceEndpoint,
    SourceName,
    /// Derived: the resolved connection address.
    Url,
    UseTimecode,
}

impl OptionKey {
    pub const ALL: [Self; 15] = [
        Self::AudioReferenceLevel,
        Self::Bandwidth,
        Self::ColorFormat,
        Self::PreferredAudioSampleRate,
        Self::PreferredFrameFormat,
        Self::PreferredFrameRateDenominator,
        Self::PreferredFrameRateNumerator,
        Self::PreferredNumAudioChannels,
        Self::PreferredVideoHeight,
        Self::PreferredVideoWidth,
        Self::ReceiverName,
        Self::SourceEndpoint,
        Self::SourceName,
        Self::Url,
        Self::UseTimecode,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AudioReferenceLevel => "AudioReferenceLevel",
            Self::Bandwidth => "Bandwidth",
            Self::ColorFormat => "ColorFormat",
            Self::PreferredAudioSampleRate => "PreferredAudioSampleRate",
            Self::PreferredFrameFormat => "PreferredFrameFormat",
            Self::PreferredFrameRateDenominator => "PreferredFrameRateDenominator",
            Self::PreferredFrameRateNumerator => "PreferredFrameRateNumerator",
            Self::PreferredNumAudioChannels => "PreferredNumAudioChannels",
            Self::PreferredVideoHeight => "PreferredVideoHeight",
            Self::PreferredVideoWidth => "PreferredVideoWidth",
            Self::ReceiverName => "ReceiverName",
            Self::SourceEndpoint => "SourceEndpoint",
            Self::SourceName => "SourceName",
            Self::Url => "Url",
            Self::UseTimecode => "UseTimecode",
        }
    }

    /**
        Look up a key by name, ignoring ASCII case.
    */
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OptionKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError {
            kind: "option key",
            value: s.to_owned(),
        })
    }
}

/**
    A typed option value.

    Enum fields carry both their integer code and canonical name, so they
    answer both the integer and the string getters.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionValue<'a> {
    Bool(bool),
    Int(i64),
    Str(&'a str),
    Enum { code: i64, name: &'static str },
}

impl<'a> OptionValue<'a> {
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub const fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(i) | Self::Enum { code: i, .. } => Some(i),
            _ => None,
        }
    }

    pub const fn as_str(self) -> Option<&'a str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Enum { name, .. } => Some(name),
            _ => None,
        }
    }

    const fn type_name(self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Str(_) => "string",
            Self::Enum { .. } => "enum",
        }
    }
}

impl fmt::Display for OptionValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Enum { code, name } => write!(f, "{name} ({code})"),
        }
    }
}

/**
    Generic option lookup for media players.

    Implementors answer [`MediaOptions::media_option`]; the typed getters are
    derived from it.
*/
pub trait MediaOptions {
    /**
        Returns the value bound to `key`, or `None` if the key is not recognized.
    */
    fn media_option(&self, key: &str) -> Option<OptionValue<'_>>;

    fn has_option(&self, key: &str) -> bool {
        self.media_option(key).is_some()
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        typed(self.media_option(key), key, OptionValue::as_bool).unwrap_or(default)
    }

    fn get_int(&self, key: &str, default: i64) -> i64 {
        typed(self.media_option(key), key, OptionValue::as_int).unwrap_or(default)
    }

    fn get_string<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        typed(self.media_option(key), key, OptionValue::as_str).unwrap_or(default)
    }
}

fn typed<'a, T>(
    value: Option<OptionValue<'a>>,
    key: &str,
    extract: fn(OptionValue<'a>) -> Option<T>,
) -> Option<T> {
    let Some(value) = value else {
        tracing::trace!(key, "unknown media option, using default");
        return None;
    };
    let typed = extract(value);
    if typed.is_none() {
        tracing::trace!(
            key,
            actual = value.type_name(),
            "media option type mismatch, using default"
        );
    }
    typed
}

impl NdiMediaSource {
    /**
        Returns the value bound to a recognized option key.
    */
    pub fn option(&self, key: OptionKey) -> OptionValue<'_> {
        match key {
            OptionKey::AudioReferenceLevel => OptionValue::Int(self.audio_reference_level.into()),
            OptionKey::Bandwidth => OptionValue::Enum {
                code: self.bandwidth.wire_code(),
                name: self.bandwidth.as_str(),
            },
            OptionKey::ColorFormat => OptionValue::Enum {
                code: self.color_format.ordinal(),
                name: self.color_format.as_str(),
            },
            OptionKey::PreferredAudioSampleRate => {
                OptionValue::Int(self.preferred_audio_sample_rate.into())
            }
            OptionKey::PreferredFrameFormat => OptionValue::Enum {
                code: self.preferred_frame_format.ordinal(),
                name: self.preferred_frame_format.as_str(),
            },
            OptionKey::PreferredFrameRateDenominator => {
                OptionValue::Int(self.preferred_frame_rate_denominator.into())
            }
            OptionKey::PreferredFrameRateNumerator => {
                OptionValue::Int(self.preferred_frame_rate_numerator.into())
            }
            OptionKey::PreferredNumAudioChannels => {
                OptionValue::Int(self.preferred_num_audio_channels.into())
            }
            OptionKey::PreferredVideoHeight => OptionValue::Int(self.preferred_video_height.into()),
            OptionKey::PreferredVideoWidth => OptionValue::Int(self.preferred_video_width.into()),
            OptionKey::ReceiverName => OptionValue::Str(&self.receiver_name),
            OptionKey::SourceEndpoint => OptionValue::Str(&self.source_endpoint),
            OptionKey::SourceName => OptionValue::Str(&self.source_name),
            OptionKey::Url => OptionValue::Str(self.url()),
            OptionKey::UseTimecode => OptionValue::Bool(self.use_timecode),
        }
    }

    /**
        Iterates over every recognized option and its current value.
    */
    pub fn options(&self) -> impl Iterator<Item = (OptionKey, OptionValue<'_>)> + '_ {
        OptionKey::ALL.into_iter().map(|key| (key, self.option(key)))
    }
}

impl MediaOptions for NdiMediaSource {
    fn media_option(&self, key: &str) -> Option<OptionValue<'_>> {
        OptionKey::from_name(key).map(|key| self.option(key))
    }
}
