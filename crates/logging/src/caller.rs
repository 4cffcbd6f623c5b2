//! crates/logging/src/caller.rs
//! Caller-depth markers and call-site resolution.
//!
//! Depth 0 is the `#[track_caller]` location of the logging call, which costs
//! nothing to obtain. Larger depths walk the stack outward from that location:
//! the walk first finds the frame executing the tracked call, then counts
//! `depth` further frames. Frames without file and line information are not
//! counted. If the walk cannot find the anchor or runs out of frames, the
//! entry is written without a location.

use std::borrow::Cow;
use std::panic::Location;
use std::path::Path;

/// Number of additional stack frames to skip when resolving the call site.
///
/// Values are clamped into `0..=99` when used; negative depths mean the
/// immediate call site.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CallerDepth(pub i32);

impl CallerDepth {
    /// The call site of the logging call itself.
    pub const IMMEDIATE: Self = Self(0);

    /// Largest number of frames that will be skipped.
    pub const MAX_FRAMES: usize = 99;

    /// Returns the clamped number of frames to skip.
    ///
    /// ```
    /// use loggy::CallerDepth;
    ///
    /// assert_eq!(CallerDepth(-3).frames(), 0);
    /// assert_eq!(CallerDepth(2).frames(), 2);
    /// assert_eq!(CallerDepth(1_000).frames(), 99);
    /// ```
    #[must_use]
    pub const fn frames(self) -> usize {
        if self.0 <= 0 {
            0
        } else if self.0 as usize > Self::MAX_FRAMES {
            Self::MAX_FRAMES
        } else {
            self.0 as usize
        }
    }
}

impl From<i32> for CallerDepth {
    fn from(depth: i32) -> Self {
        Self(depth)
    }
}

/// Resolved source location of an entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct CallSite {
    file: Cow<'static, str>,
    line: u32,
}

impl CallSite {
    /// Resolves the call site `frames` frames outward from `origin`.
    pub(crate) fn resolve(origin: &'static Location<'static>, frames: usize) -> Option<Self> {
        if frames == 0 {
            return Some(Self {
                file: Cow::Borrowed(origin.file()),
                line: origin.line(),
            });
        }
        walk_from(origin, frames)
    }

    /// File name without directories.
    pub(crate) fn base_name(&self) -> Cow<'_, str> {
        match Path::new(self.file.as_ref()).file_name() {
            Some(name) => name.to_string_lossy(),
            None => Cow::Borrowed(self.file.as_ref()),
        }
    }

    pub(crate) const fn line(&self) -> u32 {
        self.line
    }
}

fn walk_from(origin: &'static Location<'static>, frames: usize) -> Option<CallSite> {
    let mut anchored = false;
    let mut remaining = frames;
    let mut found = None;

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() {
                return;
            }
            let (Some(path), Some(line)) = (symbol.filename(), symbol.lineno()) else {
                return;
            };
            if !anchored {
                anchored = line == origin.line() && path.ends_with(origin.file());
                return;
            }
            remaining -= 1;
            if remaining == 0 {
                found = Some(CallSite {
                    file: Cow::Owned(path.to_string_lossy().into_owned()),
                    line,
                });
            }
        });
        found.is_none()
    });

    found
}
