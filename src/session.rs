//! The annotation edit session state machine.
//!
//! One session owns the single in-progress or in-edit annotation for a
//! spectrogram view. It mediates between the rendering substrate's gesture
//! events and the coordinate mapper, keeping handle indices, cursor icons,
//! and corner ordering consistent across arbitrary drags. Only one session
//! is ever active per view; starting a new edit implicitly disables the
//! previous one.

use log::warn;

use crate::context::SpectroContext;
use crate::error::MappingError;
use crate::geometry::{PixelPoint, PixelRing, RenderScale};
use crate::mapping::{
    DomainBounds, SequenceBand, TimeRange, pixels_to_domain, pixels_to_time_range,
    pulse_to_pixels, sequence_to_pixels,
};
use crate::model::{PulseAnnotation, SequenceAnnotation};

/// Which annotation family the session is working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnotationKind {
    /// Time-by-frequency rectangle on a single pulse.
    #[default]
    Pulse,
    /// Time-only band spanning a group of pulses.
    Sequence,
}

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    #[default]
    Disabled,
    Creation,
    Editing,
}

/// Cursor names handed to the UI shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Crosshair,
    Move,
    NwResize,
    SwResize,
    SeResize,
    NeResize,
    WResize,
    SResize,
    EResize,
    NResize,
    NwseResize,
}

impl Cursor {
    /// CSS cursor name consumed by the UI shell.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Crosshair => "crosshair",
            Cursor::Move => "move",
            Cursor::NwResize => "nw-resize",
            Cursor::SwResize => "sw-resize",
            Cursor::SeResize => "se-resize",
            Cursor::NeResize => "ne-resize",
            Cursor::WResize => "w-resize",
            Cursor::SResize => "s-resize",
            Cursor::EResize => "e-resize",
            Cursor::NResize => "n-resize",
            Cursor::NwseResize => "nwse-resize",
        }
    }
}

/// Directional resize cursors for vertex handles, indexed in canonical ring
/// order (UL, LL, LR, UR). Correct matching relies on the strict corner
/// ordering maintained by [`PixelRing::canonicalize`].
const VERTEX_CURSORS: [Cursor; 4] = [
    Cursor::NwResize,
    Cursor::SwResize,
    Cursor::SeResize,
    Cursor::NeResize,
];

/// Cursors for edge-midpoint handles, indexed by the edge they bisect
/// (left, bottom, right, top in canonical ring order).
const EDGE_CURSORS: [Cursor; 4] = [
    Cursor::WResize,
    Cursor::SResize,
    Cursor::EResize,
    Cursor::NResize,
];

/// Handle classification reported by the rendering substrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    Vertex,
    Edge,
    Center,
    Resize,
}

/// Substrate gesture events, normalized into a tagged union at the core
/// boundary so session logic never inspects substrate-native objects.
#[derive(Debug, Clone, PartialEq)]
pub enum SubstrateEvent {
    /// The pointer entered or left an edit handle.
    HandleHover {
        kind: HandleKind,
        index: usize,
        selected: bool,
        enabled: bool,
    },
    /// Left mouse button pressed (not over a completing gesture).
    LeftClick,
    /// A freehand shape was completed while in creation mode.
    ShapeDone { points: Vec<PixelPoint> },
    /// A drag on the in-edit annotation was released.
    DragReleased { points: Vec<PixelPoint> },
    /// A single point was placed for a multi-click shape.
    PointPlaced { point: PixelPoint },
}

/// Status carried on a geometry-change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryStatus {
    InProgress,
    Editing,
}

/// Geometry payload of a change event: either a committed rectangle ring or
/// a multi-click sketch still being placed.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangedGeometry {
    Ring(PixelRing),
    Sketch(Vec<PixelPoint>),
}

/// Normalized domain-unit geometry for the active annotation kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainGeometry {
    Pulse(DomainBounds),
    Sequence(TimeRange),
}

/// Emitted when the user's gesture changed the active annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryChange {
    pub status: GeometryStatus,
    /// Whether the change came out of creation (as opposed to re-editing).
    pub creating: bool,
    pub geometry: ChangedGeometry,
    /// Round-tripped domain geometry, including any mapping error for the
    /// UI to surface. Absent for in-progress sketches.
    pub domain: Option<Result<DomainGeometry, MappingError>>,
}

/// Events the session emits toward the application and rendering substrate.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Geometry(GeometryChange),
    Cursor(Cursor),
    Mode(SessionMode),
    /// Selected handle changed; `None` means the selection was cleared.
    HandleSelection { index: Option<usize> },
}

/// State machine owning the single active annotation edit.
///
/// All state that the original layers kept in shared module-level fields
/// (hovered handle, skip flag, in-progress shape) lives on this instance,
/// so tearing down a view cannot leak edit state into the next one.
#[derive(Debug)]
pub struct AnnotationEditSession {
    context: SpectroContext,
    scale: RenderScale,
    kind: AnnotationKind,
    mode: SessionMode,
    ring: Option<PixelRing>,
    /// Combined handle index space: vertex handles occupy even slots
    /// (vertex i at 2 * i) with edge midpoints interleaved between them.
    selected_handle: Option<usize>,
    hover_handle: Option<usize>,
    shape_in_progress: Option<Vec<PixelPoint>>,
    skip_next_external_update: bool,
    events: Vec<SessionEvent>,
}

impl AnnotationEditSession {
    /// Create a disabled session for one spectrogram view.
    pub fn new(context: SpectroContext) -> Self {
        Self {
            context,
            scale: RenderScale::native(),
            kind: AnnotationKind::Pulse,
            mode: SessionMode::Disabled,
            ring: None,
            selected_handle: None,
            hover_handle: None,
            shape_in_progress: None,
            skip_next_external_update: false,
            events: Vec::new(),
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn kind(&self) -> AnnotationKind {
        self.kind
    }

    pub fn selected_handle(&self) -> Option<usize> {
        self.selected_handle
    }

    pub fn hover_handle(&self) -> Option<usize> {
        self.hover_handle
    }

    /// Current in-edit ring, if any.
    pub fn ring(&self) -> Option<&PixelRing> {
        self.ring.as_ref()
    }

    /// Drain events emitted since the last call. Events are produced
    /// synchronously within the gesture that caused them.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Update the display dimensions used for round-tripping geometry.
    pub fn set_scaled_dimensions(&mut self, width: f64, height: f64) {
        self.scale = RenderScale::new(width, height);
    }

    /// Ignore the next external data push once. Guards against the feedback
    /// loop where committing an edit triggers a re-fetch that would
    /// otherwise re-initialize the session mid-gesture.
    pub fn skip_next_external_update(&mut self) {
        self.skip_next_external_update = true;
    }

    /// Enter creation mode: the substrate accepts freehand placement of the
    /// shape for `kind` (rectangle for pulses, open range for sequences).
    pub fn begin_create(&mut self, kind: AnnotationKind) {
        self.kind = kind;
        self.mode = SessionMode::Creation;
        self.ring = None;
        self.events.push(SessionEvent::Mode(SessionMode::Creation));
        self.events.push(SessionEvent::Cursor(Cursor::Crosshair));
    }

    /// Enter editing mode seeded with an existing pulse annotation.
    pub fn begin_edit_pulse(&mut self, annotation: &PulseAnnotation) {
        let ring = pulse_to_pixels(annotation, &self.context, self.scale);
        self.begin_edit(AnnotationKind::Pulse, ring);
    }

    /// Enter editing mode seeded with an existing sequence annotation.
    pub fn begin_edit_sequence(&mut self, annotation: &SequenceAnnotation) {
        let band = SequenceBand::for_context(&self.context);
        let ring = sequence_to_pixels(annotation, &self.context, band, self.scale);
        self.begin_edit(AnnotationKind::Sequence, ring);
    }

    fn begin_edit(&mut self, kind: AnnotationKind, ring: PixelRing) {
        self.kind = kind;
        self.reset_handles();
        self.ring = Some(ring);
        // Mode is set before the substrate is told to enter edit state so
        // cursor and style callbacks observe the correct mode.
        self.mode = SessionMode::Editing;
        self.events.push(SessionEvent::Cursor(Cursor::Default));
        self.events.push(SessionEvent::Mode(SessionMode::Editing));
    }

    /// Apply an external pulse data push: edit the given record, or enter
    /// creation when there is none. Consumes the skip flag if set.
    pub fn apply_external_pulse(&mut self, annotation: Option<&PulseAnnotation>) {
        if self.consume_skip() {
            return;
        }
        self.disable();
        match annotation {
            Some(annotation) => self.begin_edit_pulse(annotation),
            None => self.begin_create(AnnotationKind::Pulse),
        }
    }

    /// Apply an external sequence data push; see
    /// [`apply_external_pulse`](Self::apply_external_pulse).
    pub fn apply_external_sequence(&mut self, annotation: Option<&SequenceAnnotation>) {
        if self.consume_skip() {
            return;
        }
        self.disable();
        match annotation {
            Some(annotation) => self.begin_edit_sequence(annotation),
            None => self.begin_create(AnnotationKind::Sequence),
        }
    }

    fn consume_skip(&mut self) -> bool {
        if self.skip_next_external_update {
            self.skip_next_external_update = false;
            true
        } else {
            false
        }
    }

    /// Tear down the active edit. Safe to call in any state; calling it on
    /// an already-disabled session emits nothing (a pending skip flag is
    /// cleared silently).
    pub fn disable(&mut self) {
        if self.mode == SessionMode::Disabled
            && self.ring.is_none()
            && self.shape_in_progress.is_none()
        {
            self.skip_next_external_update = false;
            return;
        }
        self.skip_next_external_update = false;
        self.ring = None;
        self.shape_in_progress = None;
        if self.selected_handle.is_some() {
            self.selected_handle = None;
            self.hover_handle = None;
            self.events.push(SessionEvent::HandleSelection { index: None });
        }
        self.events.push(SessionEvent::Cursor(Cursor::Default));
        self.events.push(SessionEvent::Mode(SessionMode::Disabled));
        self.mode = SessionMode::Disabled;
    }

    /// Feed one substrate gesture event through the state machine.
    pub fn handle_event(&mut self, event: SubstrateEvent) {
        match event {
            SubstrateEvent::HandleHover {
                kind,
                index,
                selected,
                enabled,
            } => self.handle_hover(kind, index, selected, enabled),
            SubstrateEvent::LeftClick => self.handle_click(),
            SubstrateEvent::ShapeDone { points } => self.shape_done(&points),
            SubstrateEvent::DragReleased { points } => self.drag_released(&points),
            SubstrateEvent::PointPlaced { point } => self.point_placed(point),
        }
    }

    fn handle_hover(&mut self, kind: HandleKind, index: usize, selected: bool, enabled: bool) {
        if enabled {
            match kind {
                HandleKind::Vertex => {
                    // Vertex handles map into the combined index space by
                    // skipping over the interleaved edge midpoints.
                    let combined = index * 2;
                    if selected && self.hover_handle != Some(combined) {
                        self.hover_handle = Some(combined);
                    } else if !selected {
                        self.hover_handle = None;
                    }
                    match VERTEX_CURSORS.get(index) {
                        Some(cursor) => self.events.push(SessionEvent::Cursor(*cursor)),
                        None => warn!("vertex handle index {index} out of range, ignoring hover"),
                    }
                }
                HandleKind::Edge => match EDGE_CURSORS.get(index) {
                    Some(cursor) => self.events.push(SessionEvent::Cursor(*cursor)),
                    None => warn!("edge handle index {index} out of range, ignoring hover"),
                },
                HandleKind::Center => {
                    self.hover_handle = None;
                    self.events.push(SessionEvent::Cursor(Cursor::Move));
                }
                HandleKind::Resize => {
                    self.events.push(SessionEvent::Cursor(Cursor::NwseResize));
                }
            }
        } else if self.mode != SessionMode::Creation {
            self.events.push(SessionEvent::Cursor(Cursor::Default));
        }
    }

    fn handle_click(&mut self) {
        // Clicking the selected handle again deselects it.
        let next = if self.hover_handle == self.selected_handle {
            None
        } else {
            self.hover_handle
        };
        if next != self.selected_handle {
            self.selected_handle = next;
            self.events.push(SessionEvent::HandleSelection {
                index: self.selected_handle,
            });
        }
    }

    fn shape_done(&mut self, points: &[PixelPoint]) {
        if self.mode != SessionMode::Creation {
            return;
        }
        let Some(ring) = self.canonicalized(points) else {
            return;
        };
        self.ring = Some(ring);
        self.shape_in_progress = None;
        self.push_geometry_change(ring, true);
        self.mode = SessionMode::Editing;
    }

    fn drag_released(&mut self, points: &[PixelPoint]) {
        if self.mode != SessionMode::Editing {
            return;
        }
        let Some(ring) = self.canonicalized(points) else {
            return;
        };
        self.ring = Some(ring);
        self.push_geometry_change(ring, false);
    }

    fn point_placed(&mut self, point: PixelPoint) {
        if self.mode != SessionMode::Creation {
            // A stray placement outside creation clears any stale sketch.
            self.shape_in_progress = None;
            return;
        }
        if !point.is_finite() {
            warn!("dropping non-finite in-progress point");
            return;
        }
        let sketch = self.shape_in_progress.get_or_insert_with(Vec::new);
        sketch.push(point.rounded());
        let geometry = ChangedGeometry::Sketch(sketch.clone());
        self.events.push(SessionEvent::Geometry(GeometryChange {
            status: GeometryStatus::InProgress,
            creating: true,
            geometry,
            domain: None,
        }));
    }

    /// Re-canonicalize substrate geometry, dropping malformed input.
    fn canonicalized(&self, points: &[PixelPoint]) -> Option<PixelRing> {
        let ring = PixelRing::canonicalize(points);
        if ring.is_none() {
            warn!(
                "dropping malformed substrate geometry ({} corners)",
                points.len()
            );
        }
        ring
    }

    fn push_geometry_change(&mut self, ring: PixelRing, creating: bool) {
        let domain = match self.kind {
            AnnotationKind::Pulse => pixels_to_domain(&ring, &self.context, self.scale)
                .map(DomainGeometry::Pulse),
            AnnotationKind::Sequence => pixels_to_time_range(&ring, &self.context, self.scale)
                .map(DomainGeometry::Sequence),
        };
        self.events.push(SessionEvent::Geometry(GeometryChange {
            status: GeometryStatus::Editing,
            creating,
            geometry: ChangedGeometry::Ring(ring),
            domain: Some(domain),
        }));
    }

    fn reset_handles(&mut self) {
        self.selected_handle = None;
        self.hover_handle = None;
        self.events.push(SessionEvent::HandleSelection { index: None });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> SpectroContext {
        SpectroContext::continuous(1000.0, 500.0, 0.0, 2000.0, 0.0, 100_000.0)
    }

    fn rect_points() -> Vec<PixelPoint> {
        vec![
            PixelPoint::new(500.0, 400.0),
            PixelPoint::new(250.0, 400.0),
            PixelPoint::new(250.0, 300.0),
            PixelPoint::new(500.0, 300.0),
        ]
    }

    #[test]
    fn create_then_complete_emits_editing_geometry() {
        let mut session = AnnotationEditSession::new(context());
        session.begin_create(AnnotationKind::Pulse);
        assert_eq!(
            session.take_events(),
            vec![
                SessionEvent::Mode(SessionMode::Creation),
                SessionEvent::Cursor(Cursor::Crosshair),
            ]
        );

        session.handle_event(SubstrateEvent::ShapeDone { points: rect_points() });
        let events = session.take_events();
        assert_eq!(events.len(), 1);
        let SessionEvent::Geometry(change) = &events[0] else {
            panic!("expected geometry event");
        };
        assert_eq!(change.status, GeometryStatus::Editing);
        assert!(change.creating);
        let Some(Ok(DomainGeometry::Pulse(bounds))) = change.domain else {
            panic!("expected pulse domain bounds");
        };
        assert_eq!(bounds.start_time, 500.0);
        assert_eq!(bounds.high_freq, 40_000.0);
        assert_eq!(session.mode(), SessionMode::Editing);
    }

    #[test]
    fn drag_release_recanonicalizes_and_reports_not_creating() {
        let mut session = AnnotationEditSession::new(context());
        let pulse = PulseAnnotation::new(1, 500.0, 1000.0, 20_000.0, 40_000.0);
        session.begin_edit_pulse(&pulse);
        session.take_events();

        // Drag handed back with corners in a scrambled order
        session.handle_event(SubstrateEvent::DragReleased { points: rect_points() });
        let events = session.take_events();
        let SessionEvent::Geometry(change) = &events[0] else {
            panic!("expected geometry event");
        };
        assert!(!change.creating);
        let ChangedGeometry::Ring(ring) = &change.geometry else {
            panic!("expected ring geometry");
        };
        assert_eq!(*ring, PixelRing::from_bounds(250.0, 300.0, 500.0, 400.0));
    }

    #[test]
    fn malformed_substrate_geometry_is_dropped() {
        let mut session = AnnotationEditSession::new(context());
        let pulse = PulseAnnotation::new(1, 500.0, 1000.0, 20_000.0, 40_000.0);
        session.begin_edit_pulse(&pulse);
        session.take_events();

        session.handle_event(SubstrateEvent::DragReleased {
            points: vec![PixelPoint::new(0.0, 0.0)],
        });
        session.handle_event(SubstrateEvent::DragReleased {
            points: vec![
                PixelPoint::new(0.0, f64::NAN),
                PixelPoint::new(1.0, 0.0),
                PixelPoint::new(1.0, 1.0),
                PixelPoint::new(0.0, 1.0),
            ],
        });
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn handle_selection_toggles_on_reclick() {
        let mut session = AnnotationEditSession::new(context());
        let pulse = PulseAnnotation::new(1, 500.0, 1000.0, 20_000.0, 40_000.0);
        session.begin_edit_pulse(&pulse);
        session.take_events();

        session.handle_event(SubstrateEvent::HandleHover {
            kind: HandleKind::Vertex,
            index: 1,
            selected: true,
            enabled: true,
        });
        session.handle_event(SubstrateEvent::LeftClick);
        assert_eq!(session.selected_handle(), Some(2));

        session.handle_event(SubstrateEvent::LeftClick);
        assert_eq!(session.selected_handle(), None);
    }

    #[test]
    fn vertex_hover_sets_directional_cursor() {
        let mut session = AnnotationEditSession::new(context());
        let pulse = PulseAnnotation::new(1, 500.0, 1000.0, 20_000.0, 40_000.0);
        session.begin_edit_pulse(&pulse);
        session.take_events();

        for (index, expected) in [
            (0, Cursor::NwResize),
            (1, Cursor::SwResize),
            (2, Cursor::SeResize),
            (3, Cursor::NeResize),
        ] {
            session.handle_event(SubstrateEvent::HandleHover {
                kind: HandleKind::Vertex,
                index,
                selected: true,
                enabled: true,
            });
            assert_eq!(
                session.take_events().last(),
                Some(&SessionEvent::Cursor(expected))
            );
        }

        session.handle_event(SubstrateEvent::HandleHover {
            kind: HandleKind::Center,
            index: 0,
            selected: false,
            enabled: true,
        });
        assert_eq!(
            session.take_events().last(),
            Some(&SessionEvent::Cursor(Cursor::Move))
        );
    }

    #[test]
    fn out_of_range_handle_is_ignored() {
        let mut session = AnnotationEditSession::new(context());
        let pulse = PulseAnnotation::new(1, 500.0, 1000.0, 20_000.0, 40_000.0);
        session.begin_edit_pulse(&pulse);
        session.take_events();

        session.handle_event(SubstrateEvent::HandleHover {
            kind: HandleKind::Vertex,
            index: 9,
            selected: true,
            enabled: true,
        });
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn disable_is_idempotent() {
        let mut session = AnnotationEditSession::new(context());
        let pulse = PulseAnnotation::new(1, 500.0, 1000.0, 20_000.0, 40_000.0);
        session.begin_edit_pulse(&pulse);
        session.handle_event(SubstrateEvent::HandleHover {
            kind: HandleKind::Vertex,
            index: 0,
            selected: true,
            enabled: true,
        });
        session.handle_event(SubstrateEvent::LeftClick);
        session.take_events();

        session.disable();
        let first = session.take_events();
        assert_eq!(
            first,
            vec![
                SessionEvent::HandleSelection { index: None },
                SessionEvent::Cursor(Cursor::Default),
                SessionEvent::Mode(SessionMode::Disabled),
            ]
        );

        session.disable();
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn disable_on_disabled_session_clears_skip_flag_silently() {
        let mut session = AnnotationEditSession::new(context());
        session.skip_next_external_update();

        session.disable();
        assert!(session.take_events().is_empty());
        assert_eq!(session.mode(), SessionMode::Disabled);

        // The flag did not survive the teardown.
        session.apply_external_pulse(None);
        assert_eq!(session.mode(), SessionMode::Creation);
    }

    #[test]
    fn disable_without_selection_skips_selection_event() {
        let mut session = AnnotationEditSession::new(context());
        session.begin_create(AnnotationKind::Pulse);
        session.take_events();

        session.disable();
        assert_eq!(
            session.take_events(),
            vec![
                SessionEvent::Cursor(Cursor::Default),
                SessionEvent::Mode(SessionMode::Disabled),
            ]
        );
    }

    #[test]
    fn skip_flag_suppresses_exactly_one_external_update() {
        let mut session = AnnotationEditSession::new(context());
        let pulse = PulseAnnotation::new(1, 500.0, 1000.0, 20_000.0, 40_000.0);
        session.begin_edit_pulse(&pulse);
        session.take_events();

        session.skip_next_external_update();
        session.apply_external_pulse(Some(&pulse));
        assert!(session.take_events().is_empty());
        assert_eq!(session.mode(), SessionMode::Editing);

        // The flag was consumed; the next push goes through.
        session.apply_external_pulse(None);
        assert_eq!(session.mode(), SessionMode::Creation);
        assert!(!session.take_events().is_empty());
    }

    #[test]
    fn external_push_switches_annotation() {
        let mut session = AnnotationEditSession::new(context());
        session.apply_external_pulse(None);
        assert_eq!(session.mode(), SessionMode::Creation);

        let pulse = PulseAnnotation::new(2, 100.0, 200.0, 10_000.0, 30_000.0);
        session.apply_external_pulse(Some(&pulse));
        assert_eq!(session.mode(), SessionMode::Editing);
        assert!(session.ring().is_some());
    }

    #[test]
    fn sequence_session_round_trips_time_range() {
        let mut session = AnnotationEditSession::new(context());
        let sequence = SequenceAnnotation::new(5, 400.0, 1200.0);
        session.begin_edit_sequence(&sequence);
        session.take_events();

        let ring = *session.ring().unwrap();
        session.handle_event(SubstrateEvent::DragReleased {
            points: ring.points()[..4].to_vec(),
        });
        let events = session.take_events();
        let SessionEvent::Geometry(change) = &events[0] else {
            panic!("expected geometry event");
        };
        let Some(Ok(DomainGeometry::Sequence(range))) = change.domain else {
            panic!("expected sequence time range");
        };
        assert_eq!(range.start_time, 400.0);
        assert_eq!(range.end_time, 1200.0);
    }

    #[test]
    fn sketch_points_accumulate_in_creation_only() {
        let mut session = AnnotationEditSession::new(context());
        session.begin_create(AnnotationKind::Pulse);
        session.take_events();

        session.handle_event(SubstrateEvent::PointPlaced {
            point: PixelPoint::new(10.4, 20.6),
        });
        session.handle_event(SubstrateEvent::PointPlaced {
            point: PixelPoint::new(30.0, 40.0),
        });
        let events = session.take_events();
        assert_eq!(events.len(), 2);
        let SessionEvent::Geometry(change) = &events[1] else {
            panic!("expected geometry event");
        };
        assert_eq!(change.status, GeometryStatus::InProgress);
        let ChangedGeometry::Sketch(points) = &change.geometry else {
            panic!("expected sketch geometry");
        };
        assert_eq!(points[0], PixelPoint::new(10.0, 21.0));

        session.disable();
        session.take_events();
        session.handle_event(SubstrateEvent::PointPlaced {
            point: PixelPoint::new(1.0, 2.0),
        });
        assert!(session.take_events().is_empty());
    }
}
