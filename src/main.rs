use log::{error, info, warn};

use painter3d::colors;
use painter3d::prelude::*;

const CUBE_COUNT: usize = 3;

fn run() -> RenderResult<()> {
    let config = RenderConfig::default();
    let mut window = Window::new("painter3d", config.screen_width, config.screen_height)?;
    let mut engine = Engine::new(config)?;

    // An OBJ path and optional texture path may be given on the command line;
    // otherwise a row of checkerboard cubes is shown.
    let mut args = std::env::args().skip(1);
    match args.next() {
        Some(mesh_path) => {
            let texture = match args.next() {
                Some(path) => Some(engine.load_texture(&path)?),
                None => None,
            };
            let id = engine.load_mesh(&mesh_path, Transform::at(Vec3::new(0.0, 0.0, 8.0)))?;
            if let (Some(texture), Some(entity)) = (texture, engine.scene_mut().mesh_entity_mut(id)) {
                entity.texture = Some(texture);
            }
        }
        None => {
            let checker = engine
                .scene_mut()
                .add_texture(Texture::checkerboard(64, 8, colors::WHITE, colors::MAGENTA));
            for i in 0..CUBE_COUNT {
                let x = (i as f32 - 1.0) * 1.8;
                let texture = if i % 2 == 0 { Some(checker) } else { None };
                engine.spawn_cube(Vec3::new(x, 0.0, 4.0), texture);
            }
        }
    }

    info!("WASD move, arrows turn, space/shift up/down, F1 wireframe, F2 edge labels");

    let mut limiter = FrameLimiter::new(&window);
    let mut spin = 0.0f32;
    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => {
                if let Err(err) = engine.resize(w, h) {
                    warn!("ignoring resize: {}", err);
                } else {
                    window.resize(w, h)?;
                }
            }
            WindowEvent::None => {}
        }

        let dt = limiter.wait_and_get_delta(&window) as f32 / 1000.0;
        engine.update(window.input(), dt);

        spin += dt * 0.8;
        for i in 0..CUBE_COUNT {
            if let Some(entity) = engine.scene_mut().mesh_entity_mut(EntityId(i)) {
                entity.transform.set_rotation(Vec3::new(spin * 0.5, spin, 0.0));
            }
        }

        engine.render();
        window.present(engine.frame_buffer())?;
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}
