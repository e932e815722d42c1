//! Every preset material from the reference table, lit by one orbiting
//! colored light

mod demo;

use light_engine::scene::demos;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    demo::run("Materials", demos::materials_showcase())
}
