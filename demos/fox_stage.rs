use std::time::{Duration, Instant};

use glam::{Quat, Vec3};

use fox_stage::prelude::*;

/// Prints a line per second of simulated time.
struct LogRenderer {
    last_report: f32,
}

impl FrameRenderer for LogRenderer {
    fn render(&mut self, frame: &FrameView<'_>) {
        if frame.elapsed - self.last_report < 1.0 {
            return;
        }
        self.last_report = frame.elapsed;
        let head = frame
            .pose
            .rotation("b_Head_05")
            .map_or(0.0, |q| q.to_axis_angle().1.to_degrees());
        println!(
            "frame {:>4}  t={:>5.2}s  tracks={}  head={head:>6.2}°  light={:.2} @ {}",
            frame.frame,
            frame.elapsed,
            frame.pose.len(),
            frame.scene.light.intensity,
            frame.scene.light.position,
        );
    }
}

/// A stand-in for the exported fox: three clips swinging the head and
/// bobbing the root at different rates, exported without names.
fn synthetic_fox() -> anyhow::Result<LoadedActor> {
    let clip = |name: &str, period: f32, swing: f32, bob: f32| -> anyhow::Result<AnimationClip> {
        let times = vec![0.0, period * 0.5, period];
        let head = KeyframeTrack::new(
            times.clone(),
            vec![
                Quat::IDENTITY,
                Quat::from_rotation_y(swing.to_radians()),
                Quat::IDENTITY,
            ],
            InterpolationMode::Linear,
        );
        let root = KeyframeTrack::new(
            times,
            vec![Vec3::ZERO, Vec3::Y * bob, Vec3::ZERO],
            InterpolationMode::Linear,
        );
        Ok(AnimationClip::new(
            name,
            vec![
                Track::new("b_Head_05", TargetPath::Rotation, TrackData::Quaternion(head))?,
                Track::new("b_Root_00", TargetPath::Translation, TrackData::Vector3(root))?,
            ],
        ))
    };

    let mut root = ActorRoot::new("Fox");
    root.materials.push("fox_material".to_string());
    Ok(LoadedActor {
        root,
        clips: vec![
            clip("Survey", 3.4, 20.0, 0.0)?,
            clip("Walk", 0.7, 8.0, 5.0)?,
            clip("Run", 0.5, 4.0, 12.0)?,
        ],
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => StageSettings::from_json_file(path)?,
        None => StageSettings::default(),
    };
    let assets = MemoryAssetProvider::new().with_actor(&settings.actor.model_path, synthetic_fox()?);

    let mut stage = Stage::new(settings, LogRenderer { last_report: 0.0 }, 1280, 720, 2.0);
    stage.load_actor(&assets);

    // Scripted panel interactions: (seconds, control).
    let script = [(3.0, "play_walking"), (6.0, "play_running"), (9.0, "play_idle")];
    let mut next = 0;

    let frame_time = Duration::from_secs_f32(1.0 / 60.0);
    let start = Instant::now();
    for frame in 0..12 * 60 {
        let dt = frame_time.as_secs_f32();
        stage.tick(dt);

        if let Some(&(at, control)) = script.get(next)
            && stage.elapsed() >= at
        {
            next += 1;
            if let Err(err) = stage.press(control) {
                log::warn!("{control} ignored: {err}");
            }
        }

        if frame == 7 * 60 {
            stage.set_number(fox_stage::stage::LIGHT_INTENSITY, 6.5)?;
            stage.set_number(fox_stage::stage::ENV_MAP_INTENSITY, 1.2)?;
        }
    }

    println!(
        "{} frames simulated in {:.1?}, active clip: {}",
        stage.frame(),
        start.elapsed(),
        stage.controller().active_clip().unwrap_or("none"),
    );
    Ok(())
}
