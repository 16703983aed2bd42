use clap::{Arg, ArgAction, Command, arg};

pub const TYPE_ARG: &str = "type";
pub const ALPHABET_ARG: &str = "alphabet";
pub const FORM_ARG: &str = "form";
pub const VERBOSE_ARG: &str = "verbose";

pub const DEFAULT_TYPE: &str = "seguid";
pub const DEFAULT_FORM: &str = "long";

pub const CHECKSUM_TYPES: [&str; 8] = [
    "seguid",
    "lsseguid",
    "csseguid",
    "ldseguid",
    "cdseguid",
    "ccseguid",
    "seguidv1",
    "seguidv1urlsafe",
];

pub fn create_checksum_cli(command: Command) -> Command {
    command
        .arg(
            Arg::new(TYPE_ARG)
                .long(TYPE_ARG)
                .value_name("TYPE")
                .default_value(DEFAULT_TYPE)
                .value_parser(CHECKSUM_TYPES)
                .help("Type of checksum to calculate"),
        )
        .arg(
            arg!(--alphabet <ALPHABET>)
                .required(false)
                .help("Alphabet of the sequence, e.g. '{DNA}', '{RNA},GU' or '{protein}'. Defaults to '{DNA}', or '{proteinV1}' for the seguidv1 types"),
        )
        .arg(
            Arg::new(FORM_ARG)
                .long(FORM_ARG)
                .value_name("FORM")
                .default_value(DEFAULT_FORM)
                .value_parser(["long", "short", "both"])
                .help("Form of the checksum to output"),
        )
        .arg(
            Arg::new(VERBOSE_ARG)
                .long(VERBOSE_ARG)
                .action(ArgAction::SetTrue)
                .help("Log debug information to stderr"),
        )
}
