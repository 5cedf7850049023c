//! # Deutschkurs
//!
//! Builds a personal German vocabulary from your own texts.
//!
//! Texts are organized in topics (directories of `userdata/`). Every distinct word
//! is annotated once, kept in a words cache across runs, and gets its own AsciiDoc document in `docs/`.
//!
//! ## Getting started
//!
//! ```sh
//! deutschkurs 0.1.0
//! builds a German vocabulary from your own texts.
//!
//! USAGE:
//!     deutschkurs <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     generate    Generate documents from the words cache
//!     help        Prints this message or the help of the given subcommand(s)
//!     init        Create the working directories
//!     run         Analyze topics, update the words cache and generate documents
//!     tag         Print the annotation of a sentence
//! ```
//!
//! Logging is configured with `RUST_LOG` (default: `info`).
use deutschkurs::annotation::{Annotate, RuleAnnotatorBuilder};
use deutschkurs::error::Error;
use deutschkurs::layout::Layout;
use deutschkurs::pipelines::{Deutschkurs, Pipeline};
use itertools::Itertools;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = cli::Deutschkurs::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Deutschkurs::Run(r) => {
            let p = Deutschkurs::new(&r.root, r.model);
            let report = p.run()?;
            info!("{:#?}", report);
        }

        cli::Deutschkurs::Generate(g) => {
            let p = Deutschkurs::new(&g.root, None);
            let written = p.generate()?;
            info!("{} documents generated", written);
        }

        cli::Deutschkurs::Init(i) => {
            Layout::new(&i.root).ensure()?;
        }

        cli::Deutschkurs::Tag(t) => {
            let mut builder = RuleAnnotatorBuilder::default();
            if let Some(model) = &t.model {
                builder.model(model);
            }
            let annotator = builder.build()?;
            for sentence in annotator.sentences(&t.text) {
                for token in annotator.tag(&sentence)? {
                    if token.tag().is_space() {
                        continue;
                    }
                    let fields = [
                        token.text(),
                        token.tag().code(),
                        token.explain(),
                        token.lemma(),
                        token.prefix(),
                        token.suffix(),
                    ];
                    println!("{}", fields.iter().join("\t"));
                }
                println!();
            }
        }
    };
    Ok(())
}
