//! Generator configuration: validation, defaulting, and RNG ownership
//! (spec §3 "Generator configuration", §4.1).

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::bridge::MAX_SUPPORTED_REPEAT_COUNT;
use crate::capture::CaptureHandler;
use crate::error::Error;
use crate::flags::Flags;

/// Upper bound substituted for open-ended repeats when the caller leaves
/// both repeat-count fields at their zero default.
pub const DEFAULT_MAX_UNBOUNDED_REPEAT_COUNT: u32 = 10;

/// Generator configuration.
///
/// Construct with [`Args::new`] (or [`Args::default`]), configure with the
/// builder-style setters, then hand it to [`crate::Generator::new`], which
/// calls [`Args::initialize`] exactly once. `rng()` panics if called before
/// that happens — see the module docs on why this is a programmer error
/// rather than a `Result`.
pub struct Args {
    pub flags: Flags,
    pub min_unbounded_repeat_count: u32,
    pub max_unbounded_repeat_count: u32,
    pub capture_group_handler: Option<CaptureHandler>,
    rng: RefCell<Option<Box<dyn RngCore>>>,
    initialized: bool,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            flags: Flags::empty(),
            min_unbounded_repeat_count: 0,
            max_unbounded_repeat_count: 0,
            capture_group_handler: None,
            rng: RefCell::new(None),
            initialized: false,
        }
    }
}

impl Args {
    pub fn new() -> Self {
        Args::default()
    }

    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_min_unbounded_repeat_count(mut self, min: u32) -> Self {
        self.min_unbounded_repeat_count = min;
        self
    }

    pub fn with_max_unbounded_repeat_count(mut self, max: u32) -> Self {
        self.max_unbounded_repeat_count = max;
        self
    }

    pub fn with_rng_source<R: RngCore + 'static>(self, rng: R) -> Self {
        *self.rng.borrow_mut() = Some(Box::new(rng));
        self
    }

    pub fn with_capture_group_handler(mut self, handler: CaptureHandler) -> Self {
        self.capture_group_handler = Some(handler);
        self
    }

    /// Validates and defaults this config. Idempotent: calling it again
    /// once initialized is a no-op.
    ///
    /// `flags` containing `UnicodeGroups` is an ordinary, recoverable
    /// configuration error. `max_unbounded_repeat_count` exceeding
    /// `MAX_SUPPORTED_REPEAT_COUNT` is likewise recoverable — it's
    /// caller-supplied config, not a malformed pattern, but the same
    /// `[0, 1000]` invariant spec §3 places on explicit `{n,m}` bounds
    /// applies to every repeat count the engine can produce, bounded or
    /// not. `min_unbounded_repeat_count > max_unbounded_repeat_count` is a
    /// programmer error (a self-contradictory config) and is fatal,
    /// matching spec §7's direction to translate the source's panic into
    /// the host language's own unrecoverable-condition facility rather
    /// than a recoverable error.
    pub fn initialize(mut self) -> Result<Self, Error> {
        if self.initialized {
            return Ok(self);
        }

        if let Some(name) = self.flags.rejected_names().into_iter().next() {
            return Err(Error::UnsupportedFlag(name));
        }

        if self.max_unbounded_repeat_count == 0 && self.min_unbounded_repeat_count == 0 {
            self.max_unbounded_repeat_count = DEFAULT_MAX_UNBOUNDED_REPEAT_COUNT;
        }
        if self.max_unbounded_repeat_count > MAX_SUPPORTED_REPEAT_COUNT {
            return Err(Error::RepeatCountExceeded {
                found: self.max_unbounded_repeat_count,
                max: MAX_SUPPORTED_REPEAT_COUNT,
            });
        }
        assert!(
            self.min_unbounded_repeat_count <= self.max_unbounded_repeat_count,
            "programmer error: min_unbounded_repeat_count ({}) > max_unbounded_repeat_count ({})",
            self.min_unbounded_repeat_count,
            self.max_unbounded_repeat_count
        );

        if self.rng.borrow().is_none() {
            log::debug!("no rng_source configured, seeding a nondeterministic StdRng");
            *self.rng.borrow_mut() = Some(Box::new(StdRng::from_entropy()));
        }

        self.initialized = true;
        Ok(self)
    }

    /// Returns the configured RNG. Panics if called before [`Args::initialize`].
    pub fn rng(&self) -> std::cell::RefMut<'_, dyn RngCore> {
        assert!(
            self.initialized,
            "programmer error: Args::rng() called before initialize()"
        );
        std::cell::RefMut::map(self.rng.borrow_mut(), |opt| {
            opt.as_deref_mut().expect("rng populated by initialize()")
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
