//! Input event records
//!
//! Normalized notifications produced by the gesture source and the keyboard
//! layer. The gesture source owns these records; widgets only read them and
//! annotate the `cancel` / propagation flags.

/// Opaque handle for an element of the rendered tree
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// A two-component vector used for deltas and velocities
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise scale
    pub fn scale(self, sx: f32, sy: f32) -> Self {
        Self {
            x: self.x * sx,
            y: self.y * sy,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Page-space pointer position
pub type Point = Vector;

/// Hardware source of a gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputKind {
    /// Mouse button drag
    Pointer,
    /// Finger drag
    Touch,
    /// Mouse wheel or trackpad scroll; `delta` is positive when scrolling
    /// towards the start of the content
    Wheel { delta: f32 },
}

/// The raw event a gesture notification was derived from
#[derive(Clone, Debug, PartialEq)]
pub struct OriginalEvent {
    pub kind: InputKind,
    /// Element the hardware event was dispatched to
    pub target: Option<ElementId>,
    /// Pointer position in page coordinates
    pub position: Point,
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl OriginalEvent {
    pub fn new(kind: InputKind, target: Option<ElementId>) -> Self {
        Self {
            kind,
            target,
            position: Point::ZERO,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn is_wheel(&self) -> bool {
        matches!(self.kind, InputKind::Wheel { .. })
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// A normalized gesture notification (init/start/move/end/stop/cancel)
///
/// `delta` is the displacement since the previous notification in pixels.
/// `velocity` is expressed in pixels per 60 Hz frame.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureEvent {
    pub delta: Vector,
    pub velocity: Vector,
    /// Set by the consumer to reject the notification
    pub cancel: bool,
    pub original: OriginalEvent,
    pub modifiers: Modifiers,
}

impl GestureEvent {
    pub fn new(original: OriginalEvent) -> Self {
        Self {
            delta: Vector::ZERO,
            velocity: Vector::ZERO,
            cancel: false,
            original,
            modifiers: Modifiers::NONE,
        }
    }

    /// A mouse-drag gesture targeting `target`
    pub fn pointer(target: Option<ElementId>) -> Self {
        Self::new(OriginalEvent::new(InputKind::Pointer, target))
    }

    /// A touch-drag gesture targeting `target`
    pub fn touch(target: Option<ElementId>) -> Self {
        Self::new(OriginalEvent::new(InputKind::Touch, target))
    }

    /// A wheel gesture with the given wheel delta
    pub fn wheel(delta: f32) -> Self {
        Self::new(OriginalEvent::new(InputKind::Wheel { delta }, None))
    }

    pub fn with_delta(mut self, x: f32, y: f32) -> Self {
        self.delta = Vector::new(x, y);
        self
    }

    pub fn with_velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = Vector::new(x, y);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.original.position = Point::new(x, y);
        self
    }

    pub fn with_target(mut self, target: ElementId) -> Self {
        self.original.target = Some(target);
        self
    }

    pub fn is_wheel(&self) -> bool {
        self.original.is_wheel()
    }

    /// Scalar wheel delta, if this gesture came from a wheel
    pub fn wheel_delta(&self) -> Option<f32> {
        match self.original.kind {
            InputKind::Wheel { delta } => Some(delta),
            _ => None,
        }
    }

    pub fn target(&self) -> Option<ElementId> {
        self.original.target
    }

    pub fn shift_key(&self) -> bool {
        self.modifiers.shift()
    }

    /// Ctrl or Meta held, regardless of platform
    pub fn is_command_key_pressed(&self) -> bool {
        self.modifiers.ctrl() || self.modifiers.meta()
    }
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    // Special keys
    pub const BACKSPACE: KeyCode = KeyCode(0x08);
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);
    pub const DELETE: KeyCode = KeyCode(0x7F);

    // Arrow keys
    pub const LEFT: KeyCode = KeyCode(0x25);
    pub const UP: KeyCode = KeyCode(0x26);
    pub const RIGHT: KeyCode = KeyCode(0x27);
    pub const DOWN: KeyCode = KeyCode(0x28);

    // Navigation keys
    pub const HOME: KeyCode = KeyCode(0x24);
    pub const END: KeyCode = KeyCode(0x23);
    pub const PAGE_UP: KeyCode = KeyCode(0x21);
    pub const PAGE_DOWN: KeyCode = KeyCode(0x22);

    pub const A: KeyCode = KeyCode(0x41);

    // Unknown/unmapped key
    pub const UNKNOWN: KeyCode = KeyCode(0);
}

/// Keyboard modifier flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { bits: 0 };
    pub const SHIFT: u8 = 0b0001;
    pub const CTRL: u8 = 0b0010;
    pub const ALT: u8 = 0b0100;
    pub const META: u8 = 0b1000; // Cmd on macOS, Win on Windows

    /// Create new modifiers from flags
    pub const fn new(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0;
        if shift {
            bits |= Self::SHIFT;
        }
        if ctrl {
            bits |= Self::CTRL;
        }
        if alt {
            bits |= Self::ALT;
        }
        if meta {
            bits |= Self::META;
        }
        Self { bits }
    }

    /// Create from raw bits
    pub const fn from_bits(bits: u8) -> Self {
        Self { bits }
    }

    pub const fn shift(&self) -> bool {
        self.bits & Self::SHIFT != 0
    }

    pub const fn ctrl(&self) -> bool {
        self.bits & Self::CTRL != 0
    }

    pub const fn alt(&self) -> bool {
        self.bits & Self::ALT != 0
    }

    pub const fn meta(&self) -> bool {
        self.bits & Self::META != 0
    }

    /// Check if any modifier is pressed
    pub const fn any(&self) -> bool {
        self.bits != 0
    }
}

/// A key press delivered to a focused widget
#[derive(Clone, Debug, PartialEq)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub modifiers: Modifiers,
    /// Whether this is a repeat event
    pub repeat: bool,
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl KeyEvent {
    pub fn new(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
            repeat: false,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_flags() {
        let mods = Modifiers::new(true, false, false, true);
        assert!(mods.shift());
        assert!(!mods.ctrl());
        assert!(!mods.alt());
        assert!(mods.meta());
        assert!(mods.any());
        assert!(!Modifiers::NONE.any());
    }

    #[test]
    fn test_command_key_is_ctrl_or_meta() {
        let ctrl = GestureEvent::wheel(10.0).with_modifiers(Modifiers::new(false, true, false, false));
        let meta = GestureEvent::wheel(10.0).with_modifiers(Modifiers::new(false, false, false, true));
        let shift = GestureEvent::wheel(10.0).with_modifiers(Modifiers::new(true, false, false, false));

        assert!(ctrl.is_command_key_pressed());
        assert!(meta.is_command_key_pressed());
        assert!(!shift.is_command_key_pressed());
        assert!(shift.shift_key());
    }

    #[test]
    fn test_wheel_delta_only_for_wheel() {
        assert_eq!(GestureEvent::wheel(-120.0).wheel_delta(), Some(-120.0));
        assert_eq!(GestureEvent::pointer(None).wheel_delta(), None);
        assert!(GestureEvent::wheel(1.0).is_wheel());
        assert!(!GestureEvent::touch(Some(ElementId(3))).is_wheel());
    }

    #[test]
    fn test_vector_scale() {
        let v = Vector::new(4.0, -2.0).scale(0.0, 1.0);
        assert_eq!(v, Vector::new(0.0, -2.0));
        assert!(!v.is_zero());
        assert!(Vector::ZERO.is_zero());
    }
}
