/// Terminal front end for the wirecam viewing pipeline
use crossterm::{
    cursor,
    event::KeyCode,
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use nalgebra::Vector3;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use wirecam_core::{render, Camera, ModelTransform, Projector, RenderOptions, Rotation, WireMesh};

pub mod input;
pub mod renderer;

pub use input::{InputSource, PolledKeys};
pub use renderer::AsciiRenderer;

/// World-units-per-second camera strafe speed.
const MOVE_SPEED: f64 = 200.0;
/// Radians-per-second camera rotation speed.
const TURN_SPEED: f64 = 0.9;

/// Main application struct for terminal wireframe rendering
pub struct TerminalApp {
    mesh: WireMesh,
    model: ModelTransform,
    camera: Camera,
    projector: Projector,
    options: RenderOptions,
    input: PolledKeys,
    renderer: AsciiRenderer,
    running: bool,
    last_update: Instant,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: WireMesh) -> io::Result<Self> {
        Self::with_options(mesh, RenderOptions::default())
    }

    pub fn with_options(mesh: WireMesh, options: RenderOptions) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        // The demo constants: mesh placed 300 units down the view axis,
        // focal length scaled to the terminal so the cube fills a good
        // portion of it.
        let projector = Projector::new(width as f64, height as f64, width as f64 / 4.0);

        Ok(Self {
            mesh,
            model: ModelTransform::at(Vector3::new(0.0, 0.0, 300.0)),
            camera: Camera::new(),
            projector,
            options,
            input: PolledKeys::new(),
            renderer: AsciiRenderer::new(width as usize, height as usize),
            running: true,
            last_update: Instant::now(),
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();
            let dt = (frame_start - self.last_update).as_secs_f64();
            self.last_update = frame_start;

            // Handle input
            self.input.poll()?;
            self.apply_input(dt);

            // Update
            self.update(dt);

            // Render
            self.render_frame()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    /// Translate this frame's key state into camera deltas.
    ///
    /// The key map follows the original demo: A/D strafe X, Q/E move Y,
    /// W/S move along the view axis, arrows pitch/yaw, brackets roll.
    fn apply_input(&mut self, dt: f64) {
        if self.input.is_pressed(KeyCode::Char('q')) || self.input.is_pressed(KeyCode::Esc) {
            self.running = false;
            return;
        }

        let step = MOVE_SPEED * dt;
        let mut movement = Vector3::zeros();
        if self.input.is_pressed(KeyCode::Char('d')) {
            movement.x += step;
        }
        if self.input.is_pressed(KeyCode::Char('a')) {
            movement.x -= step;
        }
        if self.input.is_pressed(KeyCode::Char('e')) {
            movement.y -= step;
        }
        if self.input.is_pressed(KeyCode::Char('z')) {
            movement.y += step;
        }
        if self.input.is_pressed(KeyCode::Char('w')) {
            movement.z += step;
        }
        if self.input.is_pressed(KeyCode::Char('s')) {
            movement.z -= step;
        }
        self.camera.move_by(movement);

        let turn = TURN_SPEED * dt;
        let mut rotation = Rotation::zero();
        if self.input.is_pressed(KeyCode::Up) {
            rotation.pitch -= turn;
        }
        if self.input.is_pressed(KeyCode::Down) {
            rotation.pitch += turn;
        }
        if self.input.is_pressed(KeyCode::Left) {
            rotation.yaw += turn;
        }
        if self.input.is_pressed(KeyCode::Right) {
            rotation.yaw -= turn;
        }
        if self.input.is_pressed(KeyCode::Char(']')) {
            rotation.roll += turn;
        }
        if self.input.is_pressed(KeyCode::Char('[')) {
            rotation.roll -= turn;
        }
        self.camera.rotate_by(rotation);
    }

    fn update(&mut self, dt: f64) {
        // Continuous slow spin for demo effect
        self.model.spin_by(Rotation::new(0.3 * dt, 0.45 * dt, 0.0));
    }

    fn render_frame(&mut self) -> io::Result<()> {
        let segments = render(
            &self.mesh,
            &self.model,
            &self.camera,
            &self.projector,
            &self.options,
        );

        self.renderer.clear();
        self.renderer.draw_segments(&segments);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Wirecam | FPS: {:.1} | WASD/EZ=Move Arrows=Look [/]=Roll Q/Esc=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
