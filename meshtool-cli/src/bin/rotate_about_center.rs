/// Meshtool - Axis Rotation
///
/// Prints the 16 row-major entries of a 4x4 homogeneous rotation matrix
/// about one coordinate axis, one degree unless `--angle` is given.
///
/// Usage: rotate-about-center <path_to_json_file> <rotation_axis> [--angle <deg>] [--about-center]
use anyhow::Result;
use meshtool_cli::{format_values, Parsed, RotateOptions};

fn main() -> Result<()> {
    meshtool_cli::init_tracing()?;

    let options = match RotateOptions::parse(std::env::args().skip(1))? {
        Parsed::Run(options) => options,
        Parsed::Usage { help } => {
            println!("{}", RotateOptions::usage(help));
            return Ok(());
        }
    };

    let entries = meshtool_cli::rotation(&options)?;
    println!("{}", format_values(&entries));
    Ok(())
}
