//! Tap disambiguation.
//!
//! Pointer UIs deliver pointerdown, pointerup *and* a synthetic click for one
//! physical press. [`TapEngine`] folds those into a single activation, rejects
//! presses that turned into drags, and rejects presses whose target changed
//! between down and up (checked through a caller-supplied token).
//!
//! The engine is platform-agnostic. Hosts feed it [`PointerSample`]s and key
//! names, and act on the returned outcomes: invoke the callback, call
//! `prevent_default`, or arm/disarm a window-level click interceptor.
use crate::same_value::SameValue;

/// Movement allowed between press and release, in CSS pixels.
pub const DEFAULT_TOLERANCE_PX: f64 = 12.0;

/// `MouseEvent.button` value of the primary button.
pub const PRIMARY_BUTTON: i16 = 0;

/// When a tap fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TapTrigger {
    #[default]
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapOptions {
    pub tolerance_px: f64,
    pub trigger: TapTrigger,
}

impl Default for TapOptions {
    fn default() -> Self {
        Self {
            tolerance_px: DEFAULT_TOLERANCE_PX,
            trigger: TapTrigger::Up,
        }
    }
}

impl TapOptions {
    #[must_use]
    pub const fn on_down() -> Self {
        Self {
            tolerance_px: DEFAULT_TOLERANCE_PX,
            trigger: TapTrigger::Down,
        }
    }

    #[must_use]
    pub const fn with_tolerance(mut self, tolerance_px: f64) -> Self {
        self.tolerance_px = tolerance_px;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
    Other,
}

impl PointerKind {
    /// Map a DOM `pointerType` string.
    #[must_use]
    pub fn from_pointer_type(pointer_type: &str) -> Self {
        match pointer_type {
            "mouse" => Self::Mouse,
            "touch" => Self::Touch,
            "pen" => Self::Pen,
            _ => Self::Other,
        }
    }
}

/// The parts of a pointer event the engine cares about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub kind: PointerKind,
    pub button: i16,
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    #[must_use]
    pub const fn mouse(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Mouse,
            button: PRIMARY_BUTTON,
            x,
            y,
        }
    }

    #[must_use]
    pub const fn touch(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Touch,
            button: PRIMARY_BUTTON,
            x,
            y,
        }
    }

    #[must_use]
    pub const fn with_button(mut self, button: i16) -> Self {
        self.button = button;
        self
    }
}

/// Snapshot of the logical target, captured on press and re-read on release.
pub trait TokenProvider {
    type Token: SameValue;

    fn token(&self) -> Self::Token;
}

impl<F, T> TokenProvider for F
where
    F: Fn() -> T,
    T: SameValue,
{
    type Token = T;

    fn token(&self) -> T {
        self()
    }
}

/// Provider for targets that never change; every comparison passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    type Token = ();

    fn token(&self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Secondary mouse button.
    Ignored,
    /// Up-trigger press recorded; nothing fires yet.
    Recorded,
    /// Down-trigger activation. `arm_interceptor` is set only when no
    /// interceptor is already pending.
    Activated { arm_interceptor: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapRejection {
    Moved,
    TokenChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No press in progress.
    Ignored,
    /// Down-trigger press finished; it already fired.
    Cleared,
    Activated,
    Rejected(TapRejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Click eaten because the interceptor missed it. `disarm` asks the host to
    /// drop the still-pending interceptor registration.
    Swallowed { disarm: bool },
    /// Synthetic click following a pointer activation; the host must prevent
    /// its default action.
    Suppressed,
    /// Plain click from an environment without pointer events.
    Activate,
}

impl PressOutcome {
    #[must_use]
    pub const fn fires(self) -> bool {
        matches!(self, Self::Activated { .. })
    }
}

impl ReleaseOutcome {
    #[must_use]
    pub const fn fires(self) -> bool {
        matches!(self, Self::Activated)
    }
}

impl ClickOutcome {
    #[must_use]
    pub const fn fires(self) -> bool {
        matches!(self, Self::Activate)
    }
}

#[derive(Debug, Clone)]
struct Press<T> {
    x: f64,
    y: f64,
    token: T,
}

/// Per-element tap state machine.
pub struct TapEngine<P: TokenProvider = NoToken> {
    options: TapOptions,
    provider: P,
    press: Option<Press<P::Token>>,
    suppress_next_click: bool,
    swallow_next_click: bool,
    interceptor_armed: bool,
}

impl TapEngine<NoToken> {
    #[must_use]
    pub const fn new(options: TapOptions) -> Self {
        Self::with_provider(options, NoToken)
    }
}

impl Default for TapEngine<NoToken> {
    fn default() -> Self {
        Self::new(TapOptions::default())
    }
}

impl<P: TokenProvider> TapEngine<P> {
    #[must_use]
    pub const fn with_provider(options: TapOptions, provider: P) -> Self {
        Self {
            options,
            provider,
            press: None,
            suppress_next_click: false,
            swallow_next_click: false,
            interceptor_armed: false,
        }
    }

    #[must_use]
    pub const fn options(&self) -> TapOptions {
        self.options
    }

    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    #[must_use]
    pub const fn interceptor_armed(&self) -> bool {
        self.interceptor_armed
    }

    pub fn pointer_down(&mut self, sample: PointerSample) -> PressOutcome {
        if sample.kind == PointerKind::Mouse && sample.button != PRIMARY_BUTTON {
            return PressOutcome::Ignored;
        }
        let press = Press {
            x: sample.x,
            y: sample.y,
            token: self.provider.token(),
        };
        self.press = Some(press);

        match self.options.trigger {
            TapTrigger::Up => PressOutcome::Recorded,
            TapTrigger::Down => {
                self.suppress_next_click = true;
                self.swallow_next_click = true;
                let arm_interceptor = !self.interceptor_armed;
                self.interceptor_armed = true;
                PressOutcome::Activated { arm_interceptor }
            }
        }
    }

    pub fn pointer_up(&mut self, sample: PointerSample) -> ReleaseOutcome {
        if self.options.trigger == TapTrigger::Down {
            self.press = None;
            return ReleaseOutcome::Cleared;
        }
        let Some(press) = self.press.take() else {
            return ReleaseOutcome::Ignored;
        };
        let dx = sample.x - press.x;
        let dy = sample.y - press.y;
        let tolerance = self.options.tolerance_px;
        let within = dx * dx + dy * dy <= tolerance * tolerance;
        let same_target = press.token.same_value(&self.provider.token());

        if !within {
            ReleaseOutcome::Rejected(TapRejection::Moved)
        } else if !same_target {
            ReleaseOutcome::Rejected(TapRejection::TokenChanged)
        } else {
            self.suppress_next_click = true;
            ReleaseOutcome::Activated
        }
    }

    pub fn pointer_cancel(&mut self) {
        self.press = None;
    }

    pub fn pointer_leave(&mut self) {
        self.press = None;
    }

    /// The window interceptor consumed the click that followed a down-trigger press.
    ///
    /// Only the swallow guard is spent. The element-level suppress flag stays
    /// set, so a further click reaching the element is still suppressed.
    pub fn intercepted_click(&mut self) {
        self.interceptor_armed = false;
        self.swallow_next_click = false;
    }

    pub fn click(&mut self) -> ClickOutcome {
        if self.swallow_next_click {
            self.swallow_next_click = false;
            let disarm = self.interceptor_armed;
            self.interceptor_armed = false;
            return ClickOutcome::Swallowed { disarm };
        }
        if self.suppress_next_click {
            self.suppress_next_click = false;
            return ClickOutcome::Suppressed;
        }
        ClickOutcome::Activate
    }

    /// Whether `key` activates. Callers prevent the default action when it does.
    #[must_use]
    pub fn key_down(&self, key: &str) -> bool {
        is_activation_key(key)
    }
}

/// Enter and Space activate, mirroring native button behavior.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
