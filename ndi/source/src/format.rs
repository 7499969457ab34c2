/*!
    Stream preference enums carried by a source descriptor.
*/

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/**
    Bandwidth tier requested from an NDI source.

    The integer codes handed to receivers are fixed by the NDI SDK and do not
    follow declaration order, see [`Bandwidth::wire_code`].
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Bandwidth {
    /// Highest quality audio and video.
    #[default]
    Highest,
    /// Lowest quality audio and video.
    Lowest,
    /// Audio stream only.
    AudioOnly,
}

impl Bandwidth {
    pub const ALL: [Self; 3] = [Self::Highest, Self::Lowest, Self::AudioOnly];

    /**
        Returns the receiver bandwidth code understood by the decoder.

        `AudioOnly` is `-10`, `Lowest` is `0`, `Highest` is `100`.
    */
    pub const fn wire_code(self) -> i64 {
        match self {
            Self::AudioOnly => -10,
            Self::Lowest => 0,
            Self::Highest => 100,
        }
    }

    /**
        Maps a receiver bandwidth code back to its tier.

        Only the three codes produced by [`Bandwidth::wire_code`] are accepted.
    */
    pub const fn from_wire_code(code: i64) -> Option<Self> {
        match code {
            -10 => Some(Self::AudioOnly),
            0 => Some(Self::Lowest),
            100 => Some(Self::Highest),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Highest => "Highest",
            Self::Lowest => "Lowest",
            Self::AudioOnly => "AudioOnly",
        }
    }
}

/**
    Preferred scan type of received video frames.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum FrameFormatPreference {
    #[default]
    NoPreference,
    Fielded,
    Progressive,
}

impl FrameFormatPreference {
    pub const ALL: [Self; 3] = [Self::NoPreference, Self::Fielded, Self::Progressive];

    /**
        Returns the stable ordinal exposed through the integer option getter.
    */
    pub const fn ordinal(self) -> i64 {
        match self {
            Self::NoPreference => 0,
            Self::Fielded => 1,
            Self::Progressive => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoPreference => "NoPreference",
            Self::Fielded => "Fielded",
            Self::Progressive => "Progressive",
        }
    }
}

/**
    Color format of received video frames.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum ColorFormat {
    /// Packed BGRA, 32bpp
    Bgra,
    /// Packed 4:2:2 YUV, 16bpp
    #[default]
    Uyvy,
}

impl ColorFormat {
    pub const ALL: [Self; 2] = [Self::Bgra, Self::Uyvy];

    /**
        Returns the stable ordinal exposed through the integer option getter.
    */
    pub const fn ordinal(self) -> i64 {
        match self {
            Self::Bgra => 0,
            Self::Uyvy => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bgra => "BGRA",
            Self::Uyvy => "UYVY",
        }
    }
}

fn parse_name<T: Copy>(
    all: &[T],
    as_str: fn(T) -> &'static str,
    kind: &'static str,
    s: &str,
) -> Result<T, ParseError> {
    let name = s.trim();
    all.iter()
        .copied()
        .find(|v| as_str(*v).eq_ignore_ascii_case(name))
        .ok_or_else(|| ParseError {
            kind,
            value: s.to_owned(),
        })
}

macro_rules! impl_name_conversions {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_name(&Self::ALL, Self::as_str, $kind, s)
            }
        }

        impl From<$ty> for &'static str {
            fn from(value: $ty) -> Self {
                value.as_str()
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ParseError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

impl_name_conversions!(Bandwidth, "bandwidth");
impl_name_conversions!(FrameFormatPreference, "frame format");
impl_name_conversions!(ColorFormat, "color format");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bandwidth_wire_codes() {
        assert_eq!(Bandwidth::Highest.wire_code(), 100);
        assert_eq!(Bandwidth::Lowest.wire_code(), 0);
        assert_eq!(Bandwidth::AudioOnly.wire_code(), -10);
    }

    #[test]
    fn bandwidth_wire_codes_are_closed() {
        let codes: Vec<i64> = Bandwidth::ALL.iter().map(|b| b.wire_code()).collect();
        for code in -200..=200 {
            let expected = codes.contains(&code);
            assert_eq!(Bandwidth::from_wire_code(code).is_some(), expected, "{code}");
        }
        for bandwidth in Bandwidth::ALL {
            assert_eq!(Bandwidth::from_wire_code(bandwidth.wire_code()), Some(bandwidth));
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(Bandwidth::default(), Bandwidth::Highest);
        assert_eq!(FrameFormatPreference::default(), FrameFormatPreference::NoPreference);
        assert_eq!(ColorFormat::default(), ColorFormat::Uyvy);
    }

    #[test]
    fn ordinals() {
        assert_eq!(ColorFormat::Bgra.ordinal(), 0);
        assert_eq!(ColorFormat::Uyvy.ordinal(), 1);
        assert_eq!(FrameFormatPreference::NoPreference.ordinal(), 0);
        assert_eq!(FrameFormatPreference::Fielded.ordinal(), 1);
        assert_eq!(FrameFormatPreference::Progressive.ordinal(), 2);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("audioonly".parse::<Bandwidth>(), Ok(Bandwidth::AudioOnly));
        assert_eq!(" Lowest ".parse::<Bandwidth>(), Ok(Bandwidth::Lowest));
        assert_eq!("bgra".parse::<ColorFormat>(), Ok(ColorFormat::Bgra));
        assert_eq!(
            "PROGRESSIVE".parse::<FrameFormatPreference>(),
            Ok(FrameFormatPreference::Progressive)
        );
    }

    #[test]
    fn parse_unknown() {
        let err = "medium".parse::<Bandwidth>().unwrap_err();
        assert_eq!(err.kind, "bandwidth");
        assert_eq!(err.value, "medium");
        assert_eq!(err.to_string(), "unknown bandwidth 'medium'");
    }

    #[test]
    fn display_uses_canonical_names() {
        assert_eq!(Bandwidth::AudioOnly.to_string(), "AudioOnly");
        assert_eq!(ColorFormat::Uyvy.to_string(), "UYVY");
        assert_eq!(FrameFormatPreference::Fielded.to_string(), "Fielded");
    }
}
