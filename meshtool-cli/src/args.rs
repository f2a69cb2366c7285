/// Command-line parsing for the meshtool binaries
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use tracing::warn;

use meshtool_core::DEFAULT_ANGLE_DEGREES;

pub const CENTER_OF_MASS_USAGE: &str = "Usage: center-of-mass <path_to_json_file>";
pub const ROTATE_USAGE: &str = "Usage: rotate-about-center <path_to_json_file> <rotation_axis>";

const SHARED_OPTIONS_HELP: &str = "\
  -m, --mesh <index>    Sub-mesh of the scene to use (default: 0)
      --strict          Fail when a face references a missing vertex
  -h, --help            Print this help";

const ROTATE_OPTIONS_HELP: &str = "\
  -a, --angle <deg>     Rotation angle in degrees (default: 1)
  -c, --about-center    Rotate about the mesh's center of mass";

/// Outcome of parsing a command line
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    Run(T),
    /// Not enough arguments, or help was asked for
    Usage { help: bool },
}

/// Options for `center-of-mass`
#[derive(Debug, Clone, PartialEq)]
pub struct CenterOfMassOptions {
    pub path: PathBuf,
    pub mesh_index: usize,
    pub strict: bool,
}

/// Options for `rotate-about-center`
#[derive(Debug, Clone, PartialEq)]
pub struct RotateOptions {
    pub path: PathBuf,
    /// Validated only after the mesh is loaded
    pub axis: String,
    pub angle_degrees: f64,
    pub about_center: bool,
    pub mesh_index: usize,
    pub strict: bool,
}

impl CenterOfMassOptions {
    pub fn parse<I, S>(args: I) -> Result<Parsed<Self>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut shared = SharedFlags::default();
        let mut positional = Vec::new();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            if shared.accept(&arg, &mut args)? {
                continue;
            }
            push_positional(arg, &mut positional)?;
        }

        if shared.help {
            return Ok(Parsed::Usage { help: true });
        }
        let mut positional = positional.into_iter();
        let path = match positional.next() {
            Some(path) => PathBuf::from(path),
            None => return Ok(Parsed::Usage { help: false }),
        };
        warn_extra(positional);

        Ok(Parsed::Run(Self {
            path,
            mesh_index: shared.mesh_index,
            strict: shared.strict,
        }))
    }

    pub fn usage(help: bool) -> String {
        if help {
            format!("{}\n\nOptions:\n{}", CENTER_OF_MASS_USAGE, SHARED_OPTIONS_HELP)
        } else {
            CENTER_OF_MASS_USAGE.to_string()
        }
    }
}

impl RotateOptions {
    pub fn parse<I, S>(args: I) -> Result<Parsed<Self>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut shared = SharedFlags::default();
        let mut angle_degrees = DEFAULT_ANGLE_DEGREES;
        let mut about_center = false;
        let mut positional = Vec::new();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            if shared.accept(&arg, &mut args)? {
                continue;
            }
            match arg.as_str() {
                "-a" | "--angle" => {
                    let value = take_value(&arg, &mut args)?;
                    angle_degrees = value
                        .parse()
                        .with_context(|| format!("invalid angle {:?}", value))?;
                    if !f64::is_finite(angle_degrees) {
                        bail!("invalid angle {:?}: must be finite", value);
                    }
                }
                "-c" | "--about-center" => about_center = true,
                _ => push_positional(arg, &mut positional)?,
            }
        }

        if shared.help {
            return Ok(Parsed::Usage { help: true });
        }
        let mut positional = positional.into_iter();
        let (path, axis) = match (positional.next(), positional.next()) {
            (Some(path), Some(axis)) => (PathBuf::from(path), axis),
            _ => return Ok(Parsed::Usage { help: false }),
        };
        warn_extra(positional);

        Ok(Parsed::Run(Self {
            path,
            axis,
            angle_degrees,
            about_center,
            mesh_index: shared.mesh_index,
            strict: shared.strict,
        }))
    }

    pub fn usage(help: bool) -> String {
        if help {
            format!(
                "{}\n\nOptions:\n{}\n{}",
                ROTATE_USAGE, ROTATE_OPTIONS_HELP, SHARED_OPTIONS_HELP
            )
        } else {
            ROTATE_USAGE.to_string()
        }
    }
}

/// Flags understood by both binaries
#[derive(Debug, Default)]
struct SharedFlags {
    mesh_index: usize,
    strict: bool,
    help: bool,
}

impl SharedFlags {
    /// Consume `arg` (and its value) if it is a shared flag
    fn accept(&mut self, arg: &str, rest: &mut impl Iterator<Item = String>) -> Result<bool> {
        match arg {
            "-m" | "--mesh" => {
                let value = take_value(arg, rest)?;
                self.mesh_index = value
                    .parse()
                    .with_context(|| format!("invalid mesh index {:?}", value))?;
            }
            "--strict" => self.strict = true,
            "-h" | "--help" => self.help = true,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

fn take_value(flag: &str, rest: &mut impl Iterator<Item = String>) -> Result<String> {
    rest.next()
        .ok_or_else(|| anyhow!("option {} requires a value", flag))
}

fn push_positional(arg: String, positional: &mut Vec<String>) -> Result<()> {
    if arg.len() > 1 && arg.starts_with('-') {
        bail!("unknown option {:?}", arg);
    }
    positional.push(arg);
    Ok(())
}

fn warn_extra(extra: impl Iterator<Item = String>) {
    for arg in extra {
        warn!(argument = %arg, "ignoring extra argument");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_of_mass_requires_path() {
        let parsed = CenterOfMassOptions::parse(Vec::<String>::new()).unwrap();
        assert_eq!(parsed, Parsed::Usage { help: false });
    }

    #[test]
    fn test_center_of_mass_defaults() {
        let parsed = CenterOfMassOptions::parse(["scene.json"]).unwrap();
        assert_eq!(
            parsed,
            Parsed::Run(CenterOfMassOptions {
                path: PathBuf::from("scene.json"),
                mesh_index: 0,
                strict: false,
            })
        );
    }

    #[test]
    fn test_center_of_mass_flags() {
        let parsed =
            CenterOfMassOptions::parse(["--mesh", "2", "scene.json", "--strict"]).unwrap();
        match parsed {
            Parsed::Run(options) => {
                assert_eq!(options.mesh_index, 2);
                assert!(options.strict);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_rotate_requires_path_and_axis() {
        assert_eq!(
            RotateOptions::parse(["scene.json"]).unwrap(),
            Parsed::Usage { help: false }
        );
        assert_eq!(
            RotateOptions::parse(Vec::<String>::new()).unwrap(),
            Parsed::Usage { help: false }
        );
    }

    #[test]
    fn test_rotate_defaults_to_one_degree() {
        match RotateOptions::parse(["scene.json", "y"]).unwrap() {
            Parsed::Run(options) => {
                assert_eq!(options.path, PathBuf::from("scene.json"));
                assert_eq!(options.axis, "y");
                assert_eq!(options.angle_degrees, 1.0);
                assert!(!options.about_center);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_rotate_angle_and_center() {
        match RotateOptions::parse(["-a", "-90", "scene.json", "z", "-c"]).unwrap() {
            Parsed::Run(options) => {
                assert_eq!(options.angle_degrees, -90.0);
                assert!(options.about_center);
                assert_eq!(options.axis, "z");
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_help_wins_over_missing_arguments() {
        assert_eq!(
            RotateOptions::parse(["--help"]).unwrap(),
            Parsed::Usage { help: true }
        );
        assert!(RotateOptions::usage(true).contains("--angle"));
        assert!(CenterOfMassOptions::usage(true).contains("--mesh"));
    }

    #[test]
    fn test_malformed_options() {
        assert!(RotateOptions::parse(["scene.json", "x", "--angle"]).is_err());
        assert!(RotateOptions::parse(["scene.json", "x", "--angle", "ten"]).is_err());
        assert!(RotateOptions::parse(["scene.json", "x", "--angle", "inf"]).is_err());
        assert!(CenterOfMassOptions::parse(["scene.json", "--mesh", "-1"]).is_err());
        assert!(CenterOfMassOptions::parse(["scene.json", "--verbose"]).is_err());
    }
}
