use anyhow::Result;
use glam::{Vec2, Vec3};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use strider::{
    config::load_or_create_config, BlendState, CharacterDriver, Heading, KinematicBody,
    LocomotionConfig, OrbitCamera, StickState,
};

const TICK: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;
    info!("Starting locomotion demo...");

    let config = load_or_create_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        LocomotionConfig::default()
    });

    // Camera behind and above the character, looking along +X.
    let camera = OrbitCamera::new(0.0, -0.4);
    let mut driver = CharacterDriver::new(
        config,
        StickState::default(),
        KinematicBody::new(Vec3::ZERO),
        Heading::default(),
        camera,
        BlendState::new(),
    )?;

    // Scripted session: run camera-forward, then strafe while aiming back
    // over the shoulder, then release both sticks.
    for frame in 0..240u32 {
        let (move_stick, look_stick) = match frame {
            0..=119 => (Vec2::new(0.0, 1.0), Vec2::ZERO),
            120..=199 => (Vec2::new(1.0, 0.0), Vec2::new(0.0, -1.0)),
            _ => (Vec2::ZERO, Vec2::ZERO),
        };
        driver.input_mut().set_move(move_stick);
        driver.input_mut().set_look(look_stick);
        driver.tick(TICK);

        if frame % 30 == 29 {
            let position = driver.mover().position;
            let anim = driver.animation();
            info!(
                "t={:.1}s pos=({:.2}, {:.2}) yaw={:.0}° speed={:.2} move=({:.2}, {:.2}) backward={}",
                (frame + 1) as f32 * TICK,
                position.x,
                position.z,
                driver.orientation().yaw().to_degrees(),
                anim.speed(),
                anim.move_x(),
                anim.move_y(),
                anim.moving_backward(),
            );
        }
    }

    Ok(())
}
