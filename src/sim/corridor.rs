//! Scrolling corridor
//!
//! The play field is a stack of fixed-height horizontal bands ("segments"),
//! each centered on the viewport with its own width. Segments scroll down every
//! tick; once the front one leaves the bottom of the screen it is dropped and a
//! new one with a jittered width is appended above the trailing edge.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::random_range;
use crate::tuning::Tuning;

/// One horizontal band of the corridor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Top edge (screen space, grows downward)
    pub y: f32,
    pub width: f32,
    /// Left wall x (centered on the viewport)
    pub left: f32,
    /// Right wall x
    pub right: f32,
}

impl Segment {
    pub fn new(y: f32, width: f32, viewport_width: f32) -> Self {
        let left = (viewport_width - width) / 2.0;
        Self {
            y,
            width,
            left,
            right: left + width,
        }
    }

    /// Whether `y` falls in `[self.y, self.y + height)`
    #[inline]
    pub fn contains_y(&self, y: f32, height: f32) -> bool {
        y >= self.y && y < self.y + height
    }
}

/// Ordered segments, front (oldest, topmost: smallest y) first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corridor {
    segments: Vec<Segment>,
    segment_height: f32,
    viewport_width: f32,
    viewport_height: f32,
    min_width: f32,
    max_width: f32,
    jitter: f32,
}

impl Corridor {
    /// Build a fresh corridor covering the viewport plus two spare segments,
    /// all at the initial width
    pub fn new(tuning: &Tuning) -> Self {
        let segment_height = tuning.segment_height;
        let count =
            (tuning.viewport_height / segment_height + crate::consts::SEGMENT_OVERSCAN).ceil();
        let count = count.max(1.0) as usize;
        let width = tuning.initial_corridor_width();

        let segments = (0..count)
            .map(|i| Segment::new(i as f32 * segment_height, width, tuning.viewport_width))
            .collect();

        Self {
            segments,
            segment_height,
            viewport_width: tuning.viewport_width,
            viewport_height: tuning.viewport_height,
            min_width: tuning.min_corridor_width,
            max_width: tuning.max_corridor_width(),
            jitter: tuning.width_jitter,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segment_height(&self) -> f32 {
        self.segment_height
    }

    /// Horizontal center every segment is aligned to
    pub fn center_x(&self) -> f32 {
        self.viewport_width / 2.0
    }

    /// Scroll every segment down by `speed`
    pub fn advance(&mut self, speed: f32) {
        for segment in &mut self.segments {
            segment.y += speed;
        }
    }

    /// Drop the front segment once it is below the viewport and append a new
    /// one above the trailing edge. Returns the appended segment, if any.
    pub fn recycle<R: Rng>(&mut self, rng: &mut R) -> Option<Segment> {
        let front = *self.segments.first()?;
        if front.y <= self.viewport_height {
            return None;
        }
        self.segments.remove(0);

        let trailing = *self.segments.last().unwrap_or(&front);
        let width = (trailing.width + random_range(rng, -self.jitter, self.jitter))
            .clamp(self.min_width, self.max_width);
        let segment = Segment::new(
            trailing.y - self.segment_height,
            width,
            self.viewport_width,
        );
        self.segments.push(segment);
        log::debug!("Corridor recycled: new segment y={} width={}", segment.y, width);
        Some(segment)
    }

    /// Corridor width at an absolute `y`, accounting for elapsed scroll
    ///
    /// Index is `floor((y + frame * speed) / segment_height)`, clamped to the
    /// segment list.
    pub fn width_at(&self, y: f32, frame: u64, speed: f32) -> f32 {
        let relative_y = y + frame as f32 * speed;
        let index = (relative_y / self.segment_height).floor();
        let last = self.segments.len().saturating_sub(1);
        let index = if index < 0.0 {
            0
        } else {
            (index as usize).min(last)
        };
        self.segments.get(index).map_or(0.0, |s| s.width)
    }

    /// The segment whose band contains `y`, if any
    pub fn segment_at(&self, y: f32) -> Option<&Segment> {
        self.segments
            .iter()
            .find(|s| s.contains_y(y, self.segment_height))
    }
}
