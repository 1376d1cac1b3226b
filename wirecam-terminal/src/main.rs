/// Wirecam Terminal Demo - Rotating Wireframe Cube
///
/// Renders a spinning cube through the central-projection pipeline.
/// Controls:
///   - WASD: Strafe / move along the view axis
///   - E/Z: Move up / down
///   - Arrow Keys: Pitch and yaw the camera
///   - [/]: Roll the camera
///   - Q/ESC: Quit

use std::io;
use wirecam_core::WireMesh;
use wirecam_terminal::TerminalApp;

fn main() -> io::Result<()> {
    let cube = WireMesh::cube(100.0);

    let mut app = TerminalApp::new(cube)?;
    app.run()
}
