//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "deutschkurs",
    about = "builds a German vocabulary from your own texts."
)]
/// Holds every command that is callable by the `deutschkurs` command.
pub enum Deutschkurs {
    #[structopt(about = "Analyze topics, update the words cache and generate documents")]
    Run(Run),
    #[structopt(about = "Generate documents from the words cache")]
    Generate(Generate),
    #[structopt(about = "Create the working directories")]
    Init(Init),
    #[structopt(about = "Print the annotation of a sentence")]
    Tag(Tag),
}

#[derive(Debug, StructOpt)]
/// Run command and parameters.
///
/// ```sh
/// deutschkurs-run 0.1.0
/// Analyze topics, update the words cache and generate documents
///
/// USAGE:
///     deutschkurs run [OPTIONS]
///
/// OPTIONS:
///     -m, --model <model>    JSON lexicon extending the built-in one
///     -r, --root <root>      working directory [default: .]
/// ```
pub struct Run {
    #[structopt(
        parse(from_os_str),
        short = "r",
        long = "root",
        help = "working directory",
        default_value = "."
    )]
    pub root: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "m",
        long = "model",
        help = "JSON lexicon extending the built-in one"
    )]
    pub model: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Generate {
    #[structopt(
        parse(from_os_str),
        short = "r",
        long = "root",
        help = "working directory",
        default_value = "."
    )]
    pub root: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Init {
    #[structopt(
        parse(from_os_str),
        short = "r",
        long = "root",
        help = "working directory",
        default_value = "."
    )]
    pub root: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Tag {
    #[structopt(
        parse(from_os_str),
        short = "m",
        long = "model",
        help = "JSON lexicon extending the built-in one"
    )]
    pub model: Option<PathBuf>,
    #[structopt(help = "text to annotate")]
    pub text: String,
}
