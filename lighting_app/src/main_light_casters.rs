//! Textured containers under a directional light, four point lights and a
//! camera flashlight

mod demo;

use light_engine::scene::demos;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    demo::run("Light Casters", demos::light_casters())
}
