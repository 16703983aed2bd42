mod checksum;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "seguid";
}

fn build_parser() -> Command {
    let command = Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Calculate SEGUID v2 checksums of DNA, RNA and protein sequences read from stdin.")
        .after_help(
            "Double-stranded sequences are given as 'WATSON;CRICK' on one line, or as \
             Watson on the first line and the reversed Crick strand on the second.",
        );
    checksum::cli::create_checksum_cli(command)
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    let log_level = if matches.get_flag(checksum::cli::VERBOSE_ARG) {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    checksum::handlers::run_checksum(&matches)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parser_metadata() {
        let parser = build_parser();
        assert_eq!(parser.get_name(), "seguid");
        assert!(parser.get_author().is_none());
        assert_eq!(parser.get_version(), Some(consts::VERSION));
    }

    #[rstest]
    fn test_defaults() {
        let matches = build_parser()
            .try_get_matches_from([consts::BIN_NAME])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>(checksum::cli::TYPE_ARG).unwrap(),
            "seguid"
        );
        assert_eq!(
            matches.get_one::<String>(checksum::cli::FORM_ARG).unwrap(),
            "long"
        );
        assert!(
            matches
                .get_one::<String>(checksum::cli::ALPHABET_ARG)
                .is_none()
        );
        assert!(!matches.get_flag(checksum::cli::VERBOSE_ARG));
    }

    #[rstest]
    fn test_all_options() {
        let matches = build_parser()
            .try_get_matches_from([
                consts::BIN_NAME,
                "--type",
                "ccseguid",
                "--alphabet",
                "{DNA-extended}",
                "--form",
                "both",
                "--verbose",
            ])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>(checksum::cli::TYPE_ARG).unwrap(),
            "ccseguid"
        );
        assert_eq!(
            matches
                .get_one::<String>(checksum::cli::ALPHABET_ARG)
                .unwrap(),
            "{DNA-extended}"
        );
        assert!(matches.get_flag(checksum::cli::VERBOSE_ARG));
    }

    #[rstest]
    #[case("--type", "md5")]
    #[case("--form", "medium")]
    fn test_invalid_values_are_rejected(#[case] flag: &str, #[case] value: &str) {
        assert!(
            build_parser()
                .try_get_matches_from([consts::BIN_NAME, flag, value])
                .is_err()
        );
    }
}
