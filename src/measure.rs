//! Photo-based length measurement
//!
//! A two-line workflow over a captured photo: the user first traces a
//! reference object of known physical size to fix the pixels-per-mm
//! scale, then traces the object to be measured. The session is a small
//! state machine driven by discrete shell events (photo accepted, drag
//! update, reference confirmed, drag ended, reset).

use core::fmt;

use nalgebra::Point2;

/// Shortest reference trace accepted for calibration, in pixels
///
/// Guards against degenerate taps producing a wildly wrong scale.
const MIN_REFERENCE_PIXELS: f32 = 10.0;

/// Reference object catalog
///
/// Everyday objects with a standardized dimension the user can lay next
/// to whatever they are measuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceObject {
    /// ISO/IEC 7810 ID-1 card, long edge
    #[default]
    CreditCard,
    /// 500-won coin diameter
    Coin,
}

impl ReferenceObject {
    /// The standardized physical length of this object, in millimeters
    pub fn length_mm(self) -> f32 {
        match self {
            ReferenceObject::CreditCard => 85.60,
            ReferenceObject::Coin => 26.50,
        }
    }
}

/// A user-drawn line over the photo, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Where the drag started
    pub start: Point2<f32>,
    /// Where the drag currently ends
    pub end: Point2<f32>,
}

impl Segment {
    /// Create a segment from two endpoints
    pub fn new(start: Point2<f32>, end: Point2<f32>) -> Self {
        Self { start, end }
    }

    /// Euclidean length of the segment in pixels
    pub fn length(&self) -> f32 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Where the measurement session currently stands
///
/// Transitions are strictly forward; only a full [`MeasureSession::reset`]
/// returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasurePhase {
    /// No photo accepted yet
    #[default]
    Idle,
    /// Photo on screen, waiting for the reference trace
    AwaitingReference,
    /// Scale fixed, waiting for the target trace
    AwaitingTarget,
    /// Target trace finished; result available
    Resolved,
}

/// Why a reference confirmation was rejected
///
/// Rejection leaves the session state untouched; the shell surfaces the
/// reason to the user and the reference phase simply continues.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureError {
    /// Confirmation arrived outside the reference phase
    NotAwaitingReference,
    /// No reference trace has been drawn yet
    NoReferenceSegment,
    /// The reference trace is shorter than the accepted minimum
    ReferenceTooShort {
        /// Length of the rejected trace, in pixels
        length_px: f32,
    },
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureError::NotAwaitingReference => {
                write!(f, "no reference trace is being taken")
            }
            MeasureError::NoReferenceSegment => write!(f, "no reference line drawn"),
            MeasureError::ReferenceTooShort { length_px } => {
                write!(
                    f,
                    "reference line too short ({length_px:.1} px, need {MIN_REFERENCE_PIXELS} px)"
                )
            }
        }
    }
}

/// One photo-measurement session
///
/// Owns the two traces, the frozen scale, and the final result. The
/// scale is computed exactly once per session, at reference
/// confirmation, and only `begin` or `reset` may discard it.
///
/// # Example
/// ```
/// use nalgebra::Point2;
/// use pocket_instruments::{MeasureSession, ReferenceObject};
///
/// let mut session = MeasureSession::new();
/// session.begin(ReferenceObject::CreditCard);
///
/// // Trace the card's long edge: 200 px for 85.6 mm
/// session.drag(Point2::new(50.0, 50.0), Point2::new(250.0, 50.0));
/// let scale = session.confirm_reference().unwrap();
/// assert!((scale - 2.336).abs() < 0.01);
///
/// // Trace the object being measured: 100 px
/// session.drag(Point2::new(50.0, 120.0), Point2::new(150.0, 120.0));
/// let length = session.end_drag().unwrap();
/// assert!((length - 42.8).abs() < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeasureSession {
    phase: MeasurePhase,
    reference: ReferenceObject,
    reference_segment: Option<Segment>,
    target_segment: Option<Segment>,
    pixels_per_mm: Option<f32>,
    result_mm: Option<f32>,
}

impl MeasureSession {
    /// Create an idle session
    pub fn new() -> Self {
        Self::default()
    }

    /// A captured photo was accepted: start the reference phase
    ///
    /// Valid from any phase; both traces, the scale, and any previous
    /// result are discarded.
    pub fn begin(&mut self, reference: ReferenceObject) {
        self.phase = MeasurePhase::AwaitingReference;
        self.reference = reference;
        self.reference_segment = None;
        self.target_segment = None;
        self.pixels_per_mm = None;
        self.result_mm = None;
    }

    /// Live drag update for the trace belonging to the current phase
    ///
    /// During the reference phase the reference trace follows the finger;
    /// during the target phase the target trace does. Outside those
    /// phases, and for non-finite coordinates, the update is ignored.
    pub fn drag(&mut self, start: Point2<f32>, end: Point2<f32>) {
        if !start.x.is_finite()
            || !start.y.is_finite()
            || !end.x.is_finite()
            || !end.y.is_finite()
        {
            return;
        }

        let segment = Some(Segment::new(start, end));
        match self.phase {
            MeasurePhase::AwaitingReference => self.reference_segment = segment,
            MeasurePhase::AwaitingTarget => self.target_segment = segment,
            MeasurePhase::Idle | MeasurePhase::Resolved => {}
        }
    }

    /// Confirm the reference trace and freeze the pixel scale
    ///
    /// Requires the reference phase and a trace of at least the minimum
    /// pixel length. On success the scale is computed from the selected
    /// reference object and the session advances to the target phase; on
    /// rejection nothing changes.
    ///
    /// # Returns
    /// The frozen scale in pixels per millimeter.
    pub fn confirm_reference(&mut self) -> Result<f32, MeasureError> {
        if self.phase != MeasurePhase::AwaitingReference {
            return Err(MeasureError::NotAwaitingReference);
        }
        let segment = self
            .reference_segment
            .ok_or(MeasureError::NoReferenceSegment)?;

        let length_px = segment.length();
        if length_px < MIN_REFERENCE_PIXELS {
            return Err(MeasureError::ReferenceTooShort { length_px });
        }

        let scale = length_px / self.reference.length_mm();
        self.pixels_per_mm = Some(scale);
        self.phase = MeasurePhase::AwaitingTarget;
        Ok(scale)
    }

    /// The drag gesture ended: resolve the target trace if one exists
    ///
    /// In the target phase with a trace and a frozen scale this computes
    /// the real-world length, stores it, and moves to `Resolved`. Ending
    /// a drag in any other phase, or before any target trace was drawn,
    /// does nothing.
    ///
    /// # Returns
    /// The measured length in millimeters (the shell rounds it to one
    /// decimal for display).
    pub fn end_drag(&mut self) -> Option<f32> {
        if self.phase != MeasurePhase::AwaitingTarget {
            return None;
        }
        let segment = self.target_segment?;
        let scale = self.pixels_per_mm?;

        let result = segment.length() / scale;
        self.result_mm = Some(result);
        self.phase = MeasurePhase::Resolved;
        Some(result)
    }

    /// Abandon the session and return to idle
    pub fn reset(&mut self) {
        *self = Self {
            reference: self.reference,
            ..Self::default()
        };
    }

    /// Current phase of the session
    pub fn phase(&self) -> MeasurePhase {
        self.phase
    }

    /// The reference object selected for this session
    pub fn reference(&self) -> ReferenceObject {
        self.reference
    }

    /// The frozen scale, once the reference has been confirmed
    pub fn pixels_per_mm(&self) -> Option<f32> {
        self.pixels_per_mm
    }

    /// The measured length in millimeters, once resolved
    pub fn result_mm(&self) -> Option<f32> {
        self.result_mm
    }

    /// The live reference trace, if drawn
    pub fn reference_segment(&self) -> Option<Segment> {
        self.reference_segment
    }

    /// The live target trace, if drawn
    pub fn target_segment(&self) -> Option<Segment> {
        self.target_segment
    }
}
