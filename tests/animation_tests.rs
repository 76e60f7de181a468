//! Animation System Tests
//!
//! Tests for:
//! - KeyframeTrack linear/step/cubic interpolation
//! - Interpolatable trait implementations (f32, Vec3, Quat)
//! - KeyframeCursor local scan and binary search fallback
//! - AnimationAction loop modes and weight fades
//! - AnimationMixer cross-fades and pose blending
//! - AnimationClip duration auto-computation

use std::f32::consts::{FRAC_PI_2, PI};
use std::sync::Arc;

use glam::{Quat, Vec3};

use fox_stage::StageError;
use fox_stage::animation::action::{AnimationAction, FadeOutcome, LoopMode};
use fox_stage::animation::binding::TargetPath;
use fox_stage::animation::clip::{AnimationClip, Track, TrackData};
use fox_stage::animation::mixer::AnimationMixer;
use fox_stage::animation::registry::ClipRegistry;
use fox_stage::animation::tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
use fox_stage::animation::values::Interpolatable;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// KeyframeTrack: Linear Interpolation (f32)
// ============================================================================

#[test]
fn track_linear_f32_midpoint() {
    let track = KeyframeTrack::new(vec![0.0, 1.0], vec![0.0_f32, 10.0], InterpolationMode::Linear);

    let mut cursor = KeyframeCursor::default();
    let val = track.sample_with_cursor(0.5, &mut cursor).unwrap();
    assert!(approx(val, 5.0), "Expected 5.0, got {val}");
}

#[test]
fn track_linear_f32_exact_keyframe() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0],
        vec![0.0_f32, 10.0, 20.0],
        InterpolationMode::Linear,
    );

    let mut cursor = KeyframeCursor::default();
    assert!(approx(track.sample_with_cursor(0.0, &mut cursor).unwrap(), 0.0));
    assert!(approx(track.sample_with_cursor(1.0, &mut cursor).unwrap(), 10.0));
    assert!(approx(track.sample_with_cursor(2.0, &mut cursor).unwrap(), 20.0));
}

#[test]
fn track_linear_f32_clamp_beyond_range() {
    let track = KeyframeTrack::new(vec![0.0, 1.0], vec![0.0_f32, 10.0], InterpolationMode::Linear);

    let mut cursor = KeyframeCursor::default();
    let val = track.sample_with_cursor(5.0, &mut cursor).unwrap();
    assert!(approx(val, 10.0), "Expected 10.0, got {val}");
}

#[test]
fn track_linear_f32_before_first() {
    let track = KeyframeTrack::new(vec![1.0, 2.0], vec![10.0_f32, 20.0], InterpolationMode::Linear);

    let mut cursor = KeyframeCursor::default();
    let val = track.sample_with_cursor(0.5, &mut cursor).unwrap();
    assert!(approx(val, 10.0), "Expected 10.0, got {val}");
    assert!(approx(track.sample(0.0).unwrap(), 10.0));
}

#[test]
fn empty_track_samples_nothing() {
    let track: KeyframeTrack<f32> = KeyframeTrack::new(vec![], vec![], InterpolationMode::Linear);
    let mut cursor = KeyframeCursor::default();
    assert!(track.sample(0.0).is_none());
    assert!(track.sample_with_cursor(0.0, &mut cursor).is_none());
}

// ============================================================================
// KeyframeTrack: Step / Vec3 / Quat
// ============================================================================

#[test]
fn track_step_holds_value() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0],
        vec![0.0_f32, 100.0, 200.0],
        InterpolationMode::Step,
    );

    let mut cursor = KeyframeCursor::default();
    assert!(approx(track.sample_with_cursor(0.5, &mut cursor).unwrap(), 0.0));
    assert!(approx(track.sample_with_cursor(0.99, &mut cursor).unwrap(), 0.0));
    assert!(approx(track.sample_with_cursor(1.0, &mut cursor).unwrap(), 100.0));
    assert!(approx(track.sample_with_cursor(1.5, &mut cursor).unwrap(), 100.0));
}

#[test]
fn track_linear_vec3() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![Vec3::ZERO, Vec3::new(10.0, 20.0, 30.0)],
        InterpolationMode::Linear,
    );

    let val = track.sample(0.5).unwrap();
    assert!(approx(val.x, 5.0));
    assert!(approx(val.y, 10.0));
    assert!(approx(val.z, 15.0));
}

#[test]
fn track_linear_quat_slerp() {
    let q0 = Quat::IDENTITY;
    let q1 = Quat::from_rotation_y(PI);

    let track = KeyframeTrack::new(vec![0.0, 1.0], vec![q0, q1], InterpolationMode::Linear);

    let mut cursor = KeyframeCursor::default();
    let val = track.sample_with_cursor(0.5, &mut cursor).unwrap();
    let angle = val.angle_between(q0.slerp(q1, 0.5));
    assert!(angle < 0.01, "Quaternion slerp mismatch: angle={angle}");
}

// ============================================================================
// KeyframeTrack: Cubic Spline Interpolation
// ============================================================================

#[test]
fn track_cubic_f32_endpoints() {
    // values = [in_tangent0, value0, out_tangent0, in_tangent1, value1, out_tangent1]
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![0.0_f32, 0.0, 1.0, 1.0, 10.0, 0.0],
        InterpolationMode::CubicSpline,
    );

    let mut cursor = KeyframeCursor::default();
    let v0 = track.sample_with_cursor(0.0, &mut cursor).unwrap();
    assert!(approx(v0, 0.0), "got {v0}");
    let v1 = track.sample_with_cursor(1.0, &mut cursor).unwrap();
    assert!(approx(v1, 10.0), "got {v1}");
}

#[test]
fn track_cubic_f32_smooth_midpoint() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![0.0_f32, 0.0, 0.0, 0.0, 10.0, 0.0],
        InterpolationMode::CubicSpline,
    );

    // Zero tangents: Hermite midpoint is exactly halfway.
    let val = track.sample(0.5).unwrap();
    assert!(approx(val, 5.0), "Cubic midpoint expected 5.0, got {val}");
}

#[test]
fn cubic_track_with_wrong_value_count_is_rejected() {
    let track = KeyframeTrack::new(vec![0.0, 1.0], vec![0.0_f32, 1.0], InterpolationMode::CubicSpline);
    assert!(!track.is_well_formed());
    assert!(track.sample(0.5).is_none());
}

// ============================================================================
// KeyframeCursor
// ============================================================================

#[test]
fn sample_matches_cursor_across_all_times() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        vec![0.0_f32, 10.0, 5.0, 20.0, 15.0],
        InterpolationMode::Linear,
    );
    let mut cursor = KeyframeCursor::default();
    for i in 0..=40 {
        let t = i as f32 * 0.1;
        let val_cursor = track.sample_with_cursor(t, &mut cursor).unwrap();
        let val_sample = track.sample(t).unwrap();
        assert!(
            approx(val_sample, val_cursor),
            "t={t}: sample()={val_sample} != sample_with_cursor()={val_cursor}"
        );
    }
}

#[test]
fn cursor_forward_then_jump_back() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0, 3.0],
        vec![0.0_f32, 10.0, 20.0, 30.0],
        InterpolationMode::Linear,
    );

    let mut cursor = KeyframeCursor::default();
    assert!(approx(track.sample_with_cursor(2.5, &mut cursor).unwrap(), 25.0));
    assert_eq!(cursor.last_index, 2);

    // Jump back scans the cursor backwards.
    assert!(approx(track.sample_with_cursor(0.5, &mut cursor).unwrap(), 5.0));
    assert_eq!(cursor.last_index, 0);
}

#[test]
fn cursor_far_forward_jump() {
    let times: Vec<f32> = (0..20).map(|i| i as f32).collect();
    let values: Vec<f32> = (0..20).map(|i| i as f32 * 2.0).collect();
    let track = KeyframeTrack::new(times, values, InterpolationMode::Linear);

    let mut cursor = KeyframeCursor::default();
    assert!(approx(track.sample_with_cursor(15.5, &mut cursor).unwrap(), 31.0));
    assert_eq!(cursor.last_index, 15);
}

#[test]
fn cursor_single_keyframe() {
    let track = KeyframeTrack::new(vec![0.0], vec![42.0_f32], InterpolationMode::Linear);

    let mut cursor = KeyframeCursor::default();
    assert!(approx(track.sample_with_cursor(5.0, &mut cursor).unwrap(), 42.0));
}

// ============================================================================
// Interpolatable Implementations
// ============================================================================

#[test]
fn interpolatable_f32_linear() {
    assert!(approx(f32::interpolate_linear(&0.0, &10.0, 0.25), 2.5));
}

#[test]
fn interpolatable_vec3_linear() {
    let result = Vec3::interpolate_linear(&Vec3::ZERO, &Vec3::new(10.0, 20.0, 30.0), 0.5);
    assert!(approx(result.x, 5.0));
    assert!(approx(result.y, 10.0));
    assert!(approx(result.z, 15.0));
}

#[test]
fn interpolatable_quat_linear_is_slerp() {
    let a = Quat::IDENTITY;
    let b = Quat::from_rotation_y(FRAC_PI_2);
    let result = Quat::interpolate_linear(&a, &b, 0.5);
    assert!(result.angle_between(a.slerp(b, 0.5)) < 1e-4);
}

// ============================================================================
// Clips & Tracks
// ============================================================================

fn translation_track(node: &str, duration: f32) -> Track {
    Track::new(
        node,
        TargetPath::Translation,
        TrackData::Vector3(KeyframeTrack::new(
            vec![0.0, duration],
            vec![Vec3::ZERO, Vec3::X],
            InterpolationMode::Linear,
        )),
    )
    .unwrap()
}

fn make_simple_clip(name: &str, duration: f32) -> Arc<AnimationClip> {
    Arc::new(AnimationClip::new(name, vec![translation_track("node", duration)]))
}

#[test]
fn clip_auto_duration() {
    let rotation = Track::new(
        "b",
        TargetPath::Rotation,
        TrackData::Quaternion(KeyframeTrack::new(
            vec![0.0, 3.0],
            vec![Quat::IDENTITY, Quat::from_rotation_y(1.0)],
            InterpolationMode::Linear,
        )),
    )
    .unwrap();
    let clip = AnimationClip::new("test", vec![translation_track("a", 1.5), rotation]);

    assert!(approx(clip.duration, 3.0), "got {}", clip.duration);
}

#[test]
fn clip_empty_tracks_zero_duration() {
    let clip = AnimationClip::new("empty", vec![]);
    assert!(approx(clip.duration, 0.0));
}

#[test]
fn track_without_keyframes_is_rejected() {
    let err = Track::new(
        "tail",
        TargetPath::Scale,
        TrackData::Vector3(KeyframeTrack::new(vec![], vec![], InterpolationMode::Linear)),
    )
    .unwrap_err();
    assert!(matches!(err, StageError::EmptyTrack { node } if node == "tail"));
}

// ============================================================================
// AnimationAction Loop Modes
// ============================================================================

fn running_action(duration: f32, loop_mode: LoopMode) -> AnimationAction {
    let mut action = AnimationAction::new(make_simple_clip("test", duration));
    action.loop_mode = loop_mode;
    action.play();
    action
}

#[test]
fn action_not_started_does_not_advance() {
    let mut action = AnimationAction::new(make_simple_clip("test", 2.0));
    action.update(1.0);
    assert!(approx(action.time, 0.0));
    assert!(approx(action.effective_weight(), 0.0));
}

#[test]
fn action_loop_mode_once() {
    let mut action = running_action(2.0, LoopMode::Once);
    action.update(3.0);
    assert!(approx(action.time, 2.0), "Once: should clamp, got {}", action.time);
    assert!(action.paused, "Once: should auto-pause at end");
}

#[test]
fn action_loop_mode_loop() {
    let mut action = running_action(2.0, LoopMode::Loop);
    action.update(2.5);
    assert!(approx(action.time, 0.5), "Loop: should wrap, got {}", action.time);
    assert!(!action.paused);
}

#[test]
fn action_loop_mode_ping_pong() {
    let mut action = running_action(2.0, LoopMode::PingPong);
    action.update(2.5);
    assert!(approx(action.time, 1.5), "PingPong: should reflect, got {}", action.time);
}

#[test]
fn action_loop_reverse_playback() {
    let mut action = running_action(2.0, LoopMode::Loop);
    action.time_scale = -1.0;
    action.time = 0.5;

    action.update(1.0);
    assert!(approx(action.time, 1.5), "got {}", action.time);
}

#[test]
fn action_paused_no_update() {
    let mut action = running_action(2.0, LoopMode::Loop);
    action.paused = true;
    action.time = 0.5;

    action.update(1.0);
    assert!(approx(action.time, 0.5));
}

#[test]
fn action_time_scale() {
    let mut action = running_action(4.0, LoopMode::Once);
    action.time_scale = 2.0;

    action.update(1.0);
    assert!(approx(action.time, 2.0), "got {}", action.time);
}

#[test]
fn action_reset_rewinds_and_cancels_fade() {
    let mut action = running_action(4.0, LoopMode::Loop);
    action.update(1.5);
    action.fade_out(1.0);

    action.reset();
    assert!(approx(action.time, 0.0));
    assert!(!action.is_fading());
    assert!(approx(action.effective_weight(), 1.0));
}

// ============================================================================
// AnimationAction Weight Fades
// ============================================================================

#[test]
fn fade_in_ramps_linearly() {
    let mut action = running_action(4.0, LoopMode::Loop);
    action.fade_in(1.0);
    assert!(approx(action.effective_weight(), 0.0));

    assert_eq!(action.update_fade(0.25), FadeOutcome::Unchanged);
    assert!(approx(action.effective_weight(), 0.25));

    assert_eq!(action.update_fade(0.75), FadeOutcome::Settled);
    assert!(approx(action.effective_weight(), 1.0));
    assert!(!action.is_fading());
}

#[test]
fn fade_out_stops_the_action() {
    let mut action = running_action(4.0, LoopMode::Loop);
    action.fade_out(1.0);

    assert_eq!(action.update_fade(0.5), FadeOutcome::Unchanged);
    assert!(approx(action.effective_weight(), 0.5));

    assert_eq!(action.update_fade(0.5), FadeOutcome::Stopped);
    assert!(!action.is_running());
    assert!(approx(action.effective_weight(), 0.0));
}

#[test]
fn fade_out_starts_from_current_factor() {
    let mut action = running_action(4.0, LoopMode::Loop);
    action.fade_in(1.0);
    action.update_fade(0.4);

    action.fade_out(1.0);
    assert!(approx(action.effective_weight(), 0.4));
    action.update_fade(0.5);
    assert!(approx(action.effective_weight(), 0.2));
}

#[test]
fn weight_scales_fade_factor() {
    let mut action = running_action(4.0, LoopMode::Loop);
    action.weight = 0.5;
    action.fade_in(1.0);
    action.update_fade(0.5);
    assert!(approx(action.effective_weight(), 0.25));
}

// ============================================================================
// AnimationMixer
// ============================================================================

#[test]
fn mixer_keeps_separate_actions_per_request() {
    let mut mixer = AnimationMixer::new();
    let clip = make_simple_clip("walk", 1.0);
    let a = mixer.clip_action(Arc::clone(&clip));
    let b = mixer.clip_action(clip);
    assert_ne!(a, b);
    assert_eq!(mixer.actions().count(), 2);

    mixer.action_mut(a).unwrap().time = 0.5;
    assert!(approx(mixer.action(b).unwrap().time, 0.0));
}

#[test]
fn mixer_cross_fade_blends_pose() {
    let mut mixer = AnimationMixer::new();

    let still = Arc::new(AnimationClip::new(
        "still",
        vec![
            Track::new(
                "hip",
                TargetPath::Translation,
                TrackData::Vector3(KeyframeTrack::new(
                    vec![0.0, 10.0],
                    vec![Vec3::ZERO, Vec3::ZERO],
                    InterpolationMode::Linear,
                )),
            )
            .unwrap(),
        ],
    ));
    let raised = Arc::new(AnimationClip::new(
        "raised",
        vec![
            Track::new(
                "hip",
                TargetPath::Translation,
                TrackData::Vector3(KeyframeTrack::new(
                    vec![0.0, 10.0],
                    vec![Vec3::Y * 4.0, Vec3::Y * 4.0],
                    InterpolationMode::Linear,
                )),
            )
            .unwrap(),
        ],
    ));

    let from = mixer.clip_action(still);
    let to = mixer.clip_action(raised);
    mixer.action_mut(from).unwrap().play();
    mixer.action_mut(to).unwrap().play();
    mixer.cross_fade(from, to, 1.0);

    mixer.update(0.25);
    let pose = mixer.evaluate();
    let hip = pose.translation("hip").unwrap();
    assert!(approx(hip.y, 1.0), "expected quarter blend, got {hip}");

    mixer.update(1.0);
    assert!(!mixer.action(from).unwrap().is_running());
    let hip = mixer.evaluate().translation("hip").unwrap();
    assert!(approx(hip.y, 4.0));
}

// ============================================================================
// ClipRegistry
// ============================================================================

#[test]
fn registry_positional_binding() {
    let clips = vec![
        AnimationClip::new("Survey", vec![]),
        AnimationClip::new("Walk", vec![]),
        AnimationClip::new("Run", vec![]),
    ];
    let registry = ClipRegistry::from_ordered(clips, &["idle", "walking", "running"]).unwrap();
    assert_eq!(registry.names(), ["idle", "running", "walking"]);
    assert_eq!(registry.get("walking").unwrap().name, "Walk");
}

#[test]
fn registry_positional_binding_reports_missing_clip() {
    let clips = vec![AnimationClip::new("Survey", vec![])];
    let err = ClipRegistry::from_ordered(clips, &["idle", "walking"]).unwrap_err();
    assert!(matches!(
        err,
        StageError::MissingClip { index: 1, ref name } if name == "walking"
    ));
}
