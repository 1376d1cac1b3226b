/// Example: render the cube with back-face culling enabled
///
/// Hidden faces drop out of the wireframe, so the cube reads as a solid
/// instead of a see-through cage.

use std::io;
use wirecam_core::{RenderOptions, WireMesh};
use wirecam_terminal::TerminalApp;

fn main() -> io::Result<()> {
    let cube = WireMesh::cube(100.0);

    let options = RenderOptions {
        backface_cull: true,
    };

    let mut app = TerminalApp::with_options(cube, options)?;
    app.run()
}
