/// Meshtool - Center of Mass
///
/// Prints the mean vertex position of a mesh stored in a JSON scene file.
///
/// Usage: center-of-mass <path_to_json_file> [--mesh <index>] [--strict]
use anyhow::Result;
use meshtool_cli::{format_point, CenterOfMassOptions, Parsed};

fn main() -> Result<()> {
    meshtool_cli::init_tracing()?;

    let options = match CenterOfMassOptions::parse(std::env::args().skip(1))? {
        Parsed::Run(options) => options,
        Parsed::Usage { help } => {
            println!("{}", CenterOfMassOptions::usage(help));
            return Ok(());
        }
    };

    let center = meshtool_cli::center_of_mass(&options)?;
    println!("{}", format_point(&center));
    Ok(())
}
