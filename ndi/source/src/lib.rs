/*!
    NDI media source descriptor.

    [`NdiMediaSource`] describes which network video source to connect to,
    either by `host:port` endpoint or by discovery name, along with the
    bandwidth, audio and video preferences to request. Players read it through
    two seams:

    - [`MediaSource`] resolves the connection address and tells whether the
      descriptor is ready to connect.
    - [`MediaOptions`] is a string-keyed lookup so decoder code can read
      preferences without depending on this crate's types.

    ```
    use ndi_source::{Bandwidth, MediaOptions, MediaSource, NdiMediaSource};

    let source = NdiMediaSource::endpoint("10.0.0.5:5960")
        .with_bandwidth(Bandwidth::AudioOnly);

    assert!(source.validate());
    assert_eq!(source.url(), "10.0.0.5:5960");
    assert_eq!(source.get_int("Bandwidth", -1), -10);
    assert_eq!(source.get_int("NotAnOption", -1), -1);
    ```

    This crate does no network I/O.
*/

mod error;
mod format;
mod load;
mod options;
mod source;

pub use self::error::{LoadError, ParseError};
pub use self::format::{Bandwidth, ColorFormat, FrameFormatPreference};
pub use self::load::DescriptorFormat;
pub use self::options::{MediaOptions, OptionKey, OptionValue};
pub use self::source::{MediaSource, NdiMediaSource, SourceTarget};
