use crate::animation::values::Interpolatable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    Linear,
    Step,
    /// Values are stored as `[in_tangent, value, out_tangent]` per keyframe.
    CubicSpline,
}

/// How far the cursor scans locally before falling back to binary search.
const MAX_SCAN_OFFSET: usize = 3;

/// Remembers the last keyframe interval a track was sampled in.
///
/// Playback is mostly monotonic, so the next sample usually lands in the same
/// or an adjacent interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Vec<f32>,
    pub values: Vec<T>,
    pub interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        Self {
            times,
            values,
            interpolation,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Number of values each keyframe occupies.
    fn stride(&self) -> usize {
        match self.interpolation {
            InterpolationMode::CubicSpline => 3,
            _ => 1,
        }
    }

    /// `true` when the value buffer matches the keyframe count.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.times.is_empty() && self.values.len() == self.times.len() * self.stride()
    }

    /// Time of the last keyframe, or zero for an empty track.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Stateless sampling via binary search.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<T> {
        if !self.is_well_formed() {
            return None;
        }
        let next_idx = self.times.partition_point(|&t| t <= time);
        Some(self.sample_at_frame(next_idx.saturating_sub(1), time))
    }

    /// Sampling that reuses `cursor` to find the keyframe interval in O(1)
    /// for sequential playback.
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut KeyframeCursor) -> Option<T> {
        if !self.is_well_formed() {
            return None;
        }

        let len = self.times.len();
        if len == 1 {
            return Some(self.value_at(0).clone());
        }

        let index = self
            .scan_from_cursor(time, cursor.last_index.min(len - 1))
            .unwrap_or_else(|| {
                // Large jump (scrubbing or loop wrap).
                self.times
                    .partition_point(|&t| t <= time)
                    .saturating_sub(1)
            });

        cursor.last_index = index;
        Some(self.sample_at_frame(index, time))
    }

    fn scan_from_cursor(&self, time: f32, start: usize) -> Option<usize> {
        let len = self.times.len();

        if time >= self.times[start] {
            for idx in start..=(start + MAX_SCAN_OFFSET) {
                if idx >= len - 1 {
                    return Some(len - 1);
                }
                if time < self.times[idx + 1] {
                    return Some(idx);
                }
            }
            None
        } else {
            (0..=MAX_SCAN_OFFSET)
                .take_while(|&offset| offset <= start)
                .map(|offset| start - offset)
                .find(|&idx| time >= self.times[idx])
        }
    }

    fn value_at(&self, index: usize) -> &T {
        match self.interpolation {
            InterpolationMode::CubicSpline => &self.values[index * 3 + 1],
            _ => &self.values[index],
        }
    }

    fn sample_at_frame(&self, index: usize, time: f32) -> T {
        let len = self.times.len();
        if index >= len - 1 {
            return self.value_at(len - 1).clone();
        }

        let next_idx = index + 1;
        let t0 = self.times[index];
        let t1 = self.times[next_idx];
        let dt = t1 - t0;

        let t = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };
        let t = t.clamp(0.0, 1.0);

        match self.interpolation {
            InterpolationMode::Step => self.value_at(index).clone(),
            InterpolationMode::Linear => {
                T::interpolate_linear(self.value_at(index), self.value_at(next_idx), t)
            }
            InterpolationMode::CubicSpline => {
                let i_prev = index * 3;
                let i_next = next_idx * 3;

                T::interpolate_cubic(
                    &self.values[i_prev + 1],
                    &self.values[i_prev + 2],
                    &self.values[i_next],
                    &self.values[i_next + 1],
                    t,
                    dt,
                )
            }
        }
    }
}
