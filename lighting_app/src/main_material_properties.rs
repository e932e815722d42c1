//! A few materials under a light with separate ambient, diffuse and specular
//! intensities

mod demo;

use light_engine::scene::demos;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    demo::run("Material Properties", demos::material_properties())
}
