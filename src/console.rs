//! Handling the prism CLI
//!
//! This module handles the command line parsing as well as basic information (e.g. help dialog, version information, etc.).
//! Angles which are neither given on the command line nor in a scene document are requested interactively.
use std::{
    io::{stdin, stdout, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::{builder::Str, Parser};
use rprompt::prompt_reply_from_bufread;

use crate::{
    error::{PrismError, PrismResult},
    get_version,
    scene_document::SceneDocument,
};

/// smallest angle (in degrees) accepted on the console
pub const MIN_ANGLE: i32 = 1;
/// largest angle (in degrees) accepted on the console
pub const MAX_ANGLE: i32 = 89;

const MAX_PROMPT_ATTEMPTS: usize = 3;

/// Command line arguments for the prism application.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// angle of the white light against the normal of the entry face (in degrees)
    pub incident_angle: f64,
    /// apex angle of the prism (in degrees)
    pub prism_angle: f64,
    /// file the report should be written to. If not defined, the report is printed to stdout.
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Default)]
#[command(author, version = Str::from(&get_version()), about, long_about = None)]
pub struct PartialArgs {
    /// angle of the white light against the normal of the entry face in degrees (1..=89)
    #[arg(short, long)]
    incident_angle: Option<String>,

    /// apex angle of the prism in degrees (1..=89)
    #[arg(short, long)]
    prism_angle: Option<String>,

    /// scene document (YAML) providing angles not given on the command line
    #[arg(short, long)]
    config: Option<String>,

    /// file the report should be written to. if not defined, the report is printed to stdout
    #[arg(short, long)]
    output: Option<String>,
}

/// Evaluates if the passed angle string is valid.
/// # Attributes
/// * `angle_input`: integer angle in degrees
/// # Returns
/// * the angle if it is an integer within [`MIN_ANGLE`]..=[`MAX_ANGLE`]
/// * None otherwise
fn eval_angle_input(angle_input: &str) -> Option<f64> {
    angle_input
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|angle| (MIN_ANGLE..=MAX_ANGLE).contains(angle))
        .map(f64::from)
}

/// Checks an angle taken from a scene document against the same range as console input.
///
/// # Errors
///
/// This function will return an error if the angle is not an integer within [`MIN_ANGLE`]..=[`MAX_ANGLE`].
fn eval_document_angle(name: &str, angle: f64) -> PrismResult<f64> {
    if angle.fract() == 0.0 && (f64::from(MIN_ANGLE)..=f64::from(MAX_ANGLE)).contains(&angle) {
        Ok(angle)
    } else {
        Err(PrismError::Console(format!(
            "{name} {angle} of the scene document must be an integer within {MIN_ANGLE}..{MAX_ANGLE} degrees"
        )))
    }
}

/// Evaluates if the passed output path is usable, i.e. its parent directory exists.
fn eval_output_input(output: &str) -> Option<PathBuf> {
    let path = Path::new(output);
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => None,
        _ if output.is_empty() || path.is_dir() => None,
        _ => Some(PathBuf::from(output)),
    }
}

/// Creates the prompt string that is displayed in the console.
/// # Attributes
/// * `name`:       name of the requested angle
/// * `init_str`:   Prepended String. Used if some messages schould be displayed beforehand.
fn create_prompt_str(name: &str, init_str: &str) -> String {
    format!("{init_str}Please insert the {name} in degrees ({MIN_ANGLE}..{MAX_ANGLE}):\n")
}

/// Get an angle either from the given input or interactively from the given reader.
/// # Attributes
/// * `input`:      String-Option of the argument
/// * `name`:       name of the requested angle
/// * `reader`:     Type that implements the `BufRead` trait to read from. May be stdin().lock() for user input or a `BufReader` from a static String for tests
/// * `writer`:     Type  that implements the Write trait to write into.
/// # Errors
/// Returns an [`PrismError::Console`] if no valid angle was given after [`MAX_PROMPT_ATTEMPTS`] attempts or the console cannot be read.
fn get_angle(
    input: Option<&str>,
    name: &str,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> PrismResult<f64> {
    if let Some(angle) = input.and_then(eval_angle_input) {
        return Ok(angle);
    }
    let mut init_str = if input.is_some() { "Invalid input!\n" } else { "" };
    for _ in 0..MAX_PROMPT_ATTEMPTS {
        let reply = prompt_reply_from_bufread(reader, writer, create_prompt_str(name, init_str))
            .map_err(|e| PrismError::Console(format!("cannot read {name}: {e}")))?;
        if let Some(angle) = eval_angle_input(&reply) {
            return Ok(angle);
        }
        init_str = "Invalid input!\n";
    }
    Err(PrismError::Console(format!(
        "Too many invalid inputs for the {name}! Please type \"prism -h\" for help!"
    )))
}

impl Args {
    /// Complete the given [`PartialArgs`].
    ///
    /// Missing angles are taken from the scene document (if given) or requested from `reader`.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the scene document cannot be read.
    ///   - the output path is not usable.
    ///   - no valid angle could be obtained.
    pub fn from_partial_args(
        part_args: PartialArgs,
        reader: &mut impl BufRead,
        writer: &mut impl Write,
    ) -> PrismResult<Self> {
        let document = part_args
            .config
            .as_deref()
            .map(|path| SceneDocument::from_file(Path::new(path)))
            .transpose()?;

        let incident_angle = match (part_args.incident_angle.as_deref(), document) {
            (None, Some(document)) => {
                eval_document_angle("incident angle", document.incident_angle())?
            }
            (input, _) => get_angle(input, "incident angle", reader, writer)?,
        };
        let prism_angle = match (part_args.prism_angle.as_deref(), document) {
            (None, Some(document)) => {
                eval_document_angle("prism angle", document.prism_angle())?
            }
            (input, _) => get_angle(input, "prism angle", reader, writer)?,
        };
        let output = part_args
            .output
            .as_deref()
            .map(|output| {
                eval_output_input(output).ok_or_else(|| {
                    PrismError::Console(format!("invalid output file path: {output}"))
                })
            })
            .transpose()?;
        Ok(Self {
            incident_angle,
            prism_angle,
            output,
        })
    }
}

impl TryFrom<PartialArgs> for Args {
    type Error = PrismError;

    fn try_from(part_args: PartialArgs) -> PrismResult<Self> {
        let mut reader = BufReader::new(stdin().lock());
        let mut writer = BufWriter::new(stdout().lock());
        Self::from_partial_args(part_args, &mut reader, &mut writer)
    }
}

/// Creates the intro line with the CLI version information.
#[must_use]
fn create_intro() -> String {
    format!(
        "{: ^79}\n{: ^79}\n",
        "Prism - dispersion of white light in a triangular prism",
        format!("version {}", get_version())
    )
}

/// Show the intro with the CLI version information on stderr.
pub fn show_intro() {
    eprintln!("{}", create_intro());
}
